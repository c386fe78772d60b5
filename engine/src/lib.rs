// Engine library root
// Business rules behind the rental admin screens: plate validation,
// date normalization, currency display, session expiry, form validation.

pub mod dates;
pub mod error;
pub mod money;
pub mod plate;
pub mod session;
pub mod validation;

pub use error::{TokenError, ValidationError};
