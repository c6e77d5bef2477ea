// File: src/form.rs
// Purpose: Whole-form aggregation of the per-field validation rules

use std::collections::HashMap;

use crate::field::Field;
use crate::result::ValidationResult;
use crate::validators;

/// Snapshot of the four current field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Validate a single field of the snapshot
    ///
    /// The confirm-password rule reads the password value from the same
    /// snapshot, so the comparison is always against the current password.
    pub fn validate_field(&self, field: Field) -> ValidationResult {
        match field {
            Field::Name => validators::validate_name(&self.name),
            Field::Email => validators::validate_email(&self.email),
            Field::Password => validators::validate_password(&self.password),
            Field::ConfirmPassword => {
                validators::validate_confirm_password(&self.password, &self.confirm_password)
            }
        }
    }

    /// Validate every field and collect the results
    pub fn validate(&self) -> FormReport {
        let results = Field::ALL
            .iter()
            .map(|&field| (field, self.validate_field(field)))
            .collect();
        FormReport { results }
    }
}

/// Per-field results from one validation pass over the whole form
///
/// Always holds exactly one result per field.
#[derive(Debug, Clone)]
pub struct FormReport {
    results: HashMap<Field, ValidationResult>,
}

impl FormReport {
    /// The form is submittable iff every field validated
    pub fn is_valid(&self) -> bool {
        self.results.values().all(|result| result.valid)
    }

    /// Result for a specific field
    pub fn result(&self, field: Field) -> &ValidationResult {
        &self.results[&field]
    }

    /// Error message for a field, if it failed
    pub fn error(&self, field: Field) -> Option<&str> {
        let result = self.result(field);
        (!result.valid).then_some(result.message.as_str())
    }

    /// All failing fields with their messages, in display order
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|message| (field, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "abc12345".to_string(),
            confirm_password: "abc12345".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_submittable() {
        let report = valid_form().validate();
        assert!(report.is_valid());
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn test_any_invalid_field_blocks_submission() {
        let mut form = valid_form();
        form.confirm_password = "different".to_string();

        let report = form.validate();
        assert!(!report.is_valid());
        assert_eq!(
            report.error(Field::ConfirmPassword),
            Some("Passwords do not match")
        );
        assert_eq!(report.error(Field::Name), None);
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let report = RegistrationForm::default().validate();
        assert!(!report.is_valid());
        assert_eq!(report.errors().count(), 4);
    }

    #[test]
    fn test_errors_iterate_in_display_order() {
        let report = RegistrationForm::default().validate();
        let fields: Vec<Field> = report.errors().map(|(field, _)| field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_confirm_tracks_current_password() {
        let mut form = valid_form();
        form.password = "changed-1".to_string();

        let report = form.validate();
        assert!(report.result(Field::Password).valid);
        assert!(!report.result(Field::ConfirmPassword).valid);
    }
}
