//! Password policy enforcement for new passwords.

use jobboard_core::config::AuthConfig;
use jobboard_core::error::AppError;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password, reporting violations against the `password` field.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::field(
                "password",
                format!(
                    "Ensure this field has at least {} characters.",
                    self.min_length
                ),
            ));
        }
        Ok(())
    }
}
