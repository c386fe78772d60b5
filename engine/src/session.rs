//! Local expiry checking for the backend's bearer token.
//!
//! The dashboard never verifies the signature (that is the backend's
//! job); it only reads the payload's `exp` claim to decide whether a
//! stored session is still worth presenting. A token that cannot be read
//! is treated as expired.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::TokenError;

/// Claims the dashboard cares about; any other payload fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decodes the claims object from the payload segment of a JWT-shaped
/// token. Tokens arrive with or without base64 padding.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(TokenError::Malformed),
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// A bearer session handed explicitly to whatever performs API calls.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Local expiry check against `now`. Missing or unreadable claims,
    /// or a payload without `exp`, count as invalid.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match decode_claims(&self.token) {
            Ok(TokenClaims { exp: Some(exp), .. }) => exp > now.timestamp(),
            Ok(_) => false,
            Err(err) => {
                tracing::error!("rejecting unreadable bearer token: {err}");
                false
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn token_with_payload(payload: &str) -> String {
        format!("head.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn claims_decode_from_payload_segment() {
        let token = token_with_payload(r#"{"sub":"admin","exp":1893456000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("admin"));
        assert_eq!(claims.exp, Some(1893456000));
    }

    #[test]
    fn padded_payloads_are_tolerated() {
        let mut token = token_with_payload(r#"{"exp":100}"#);
        token = token.replace(".sig", "==.sig");
        assert_eq!(decode_claims(&token).unwrap().exp, Some(100));
    }

    #[test]
    fn malformed_tokens_error_instead_of_panicking() {
        assert!(matches!(decode_claims(""), Err(TokenError::Malformed)));
        assert!(matches!(decode_claims("justonepart"), Err(TokenError::Malformed)));
        assert!(matches!(
            decode_claims("head..sig"),
            Err(TokenError::Malformed)
        ));
        assert!(matches!(
            decode_claims("head.%%%.sig"),
            Err(TokenError::Decode { .. })
        ));
        assert!(matches!(
            decode_claims(&token_with_payload("not json")),
            Err(TokenError::Claims { .. })
        ));
    }

    #[test]
    fn session_expiry_is_checked_locally() {
        let session = Session::new(token_with_payload(r#"{"sub":"admin","exp":1700000000}"#));
        let before = Utc.timestamp_opt(1699999999, 0).unwrap();
        let after = Utc.timestamp_opt(1700000001, 0).unwrap();
        assert!(session.is_valid_at(before));
        assert!(!session.is_valid_at(after));
    }

    #[test]
    fn sessions_without_exp_or_unreadable_are_invalid() {
        let now = Utc.timestamp_opt(1700000000, 0).unwrap();
        assert!(!Session::new(token_with_payload(r#"{"sub":"admin"}"#)).is_valid_at(now));
        assert!(!Session::new("garbage").is_valid_at(now));
    }

    #[test]
    fn bearer_header_carries_the_raw_token() {
        let session = Session::new("abc.def.ghi");
        assert_eq!(session.bearer_header(), "Bearer abc.def.ghi");
        assert_eq!(session.token(), "abc.def.ghi");
    }
}
