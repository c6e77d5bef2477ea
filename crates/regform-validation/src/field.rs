// File: src/field.rs
// Purpose: The four registration-form fields and their stable DOM identifiers

/// One of the four registration-form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Canonical field name, as used in the JS-facing API
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// DOM id of the field's input element
    pub fn input_id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }

    /// DOM id of the field's error-display slot
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Password => "password-error",
            Field::ConfirmPassword => "confirm-password-error",
        }
    }
}
