//! Argentine vehicle plate validation.
//!
//! Two grammars are in circulation: the old `ABC123` form (3 letters,
//! 3 digits) and the new `AB123CD` form (2 letters, 3 digits, 2 letters).

use serde::Serialize;

/// Longest valid plate, the new `AB123CD` form.
pub const MAX_PLATE_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateFormat {
    Old,
    New,
}

impl PlateFormat {
    fn label(self) -> &'static str {
        match self {
            PlateFormat::Old => "old",
            PlateFormat::New => "new",
        }
    }
}

/// Outcome of a single validation call. Built fresh per call, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct PlateValidation {
    pub is_valid: bool,
    pub format: Option<PlateFormat>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

// Checked in order; old before new keeps the dispatch deterministic even
// though the grammars are disjoint by length.
const FORMATS: [(fn(&str) -> bool, PlateFormat); 2] = [
    (is_old_format, PlateFormat::Old),
    (is_new_format, PlateFormat::New),
];

// 3 letters + 3 digits (ABC123)
fn is_old_format(plate: &str) -> bool {
    let b = plate.as_bytes();
    b.len() == 6
        && b[..3].iter().all(u8::is_ascii_uppercase)
        && b[3..].iter().all(u8::is_ascii_digit)
}

// 2 letters + 3 digits + 2 letters (AB123CD)
fn is_new_format(plate: &str) -> bool {
    let b = plate.as_bytes();
    b.len() == 7
        && b[..2].iter().all(u8::is_ascii_uppercase)
        && b[2..5].iter().all(u8::is_ascii_digit)
        && b[5..].iter().all(u8::is_ascii_uppercase)
}

/// Classifies `raw` against the two plate grammars.
///
/// Whitespace is stripped and letters upper-cased before matching, and the
/// cleaned string is returned as `normalized` on success. Total function:
/// any input, including empty, yields a structured result.
pub fn validate_plate(raw: &str) -> PlateValidation {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if cleaned.is_empty() {
        return PlateValidation {
            is_valid: false,
            format: None,
            message: "plate is required".to_string(),
            normalized: None,
        };
    }

    for (matches, format) in FORMATS {
        if matches(&cleaned) {
            return PlateValidation {
                is_valid: true,
                format: Some(format),
                message: format!("valid plate ({} format)", format.label()),
                normalized: Some(cleaned),
            };
        }
    }

    PlateValidation {
        is_valid: false,
        format: None,
        message: "invalid format, expected ABC123 (old) or AB123CD (new)".to_string(),
        normalized: None,
    }
}

/// Constrains incremental form input without blocking keystrokes: keeps
/// only ASCII letters and digits, upper-cased, at most [`MAX_PLATE_LEN`]
/// characters.
pub fn format_plate_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .take(MAX_PLATE_LEN)
        .collect()
}
