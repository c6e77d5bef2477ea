//! Regform Validation
//!
//! Pure validation rules for the four-field registration form.
//! Used by the WASM client for real-time client-side validation;
//! every operation is a pure function of its string input.

pub mod field;
pub mod form;
pub mod result;
pub mod validators;

// Re-export the core types and the four rule functions
pub use field::Field;
pub use form::{FormReport, RegistrationForm};
pub use result::ValidationResult;
pub use validators::{
    validate_confirm_password, validate_email, validate_name, validate_password, NAME_MAX_LEN,
    NAME_MIN_LEN, PASSWORD_MIN_LEN,
};
