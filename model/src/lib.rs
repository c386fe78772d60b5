pub mod entities;
pub mod reports;
