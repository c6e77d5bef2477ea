// File: src/result.rs
// Purpose: Pass/fail outcome of a single field validation

use serde::{Deserialize, Serialize};

/// Result of validating one field
///
/// `message` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// Create a passing result
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Create a failing result with a user-facing message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
