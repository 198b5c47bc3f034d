// ABOUTME: Account registration form validation
// ABOUTME: Checks email presence, password length and confirmation before submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal

use thiserror::Error;
use ymeal_core::constants::limits::{MIN_EMAIL_LEN_EXCLUSIVE, MIN_PASSWORD_LEN};
use ymeal_core::errors::{AppError, ErrorCode};

/// Reason a registration form is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistrationError {
    /// Email left blank
    #[error("Renseigne ton email.")]
    MissingEmail,
    /// Password under the minimum length
    #[error("Mot de passe trop court (min {MIN_PASSWORD_LEN}).")]
    PasswordTooShort,
    /// Confirmation differs from the password
    #[error("Les mots de passe ne correspondent pas.")]
    PasswordMismatch,
}

impl From<RegistrationError> for AppError {
    fn from(error: RegistrationError) -> Self {
        match error {
            RegistrationError::MissingEmail => Self::missing_field("email"),
            RegistrationError::PasswordTooShort | RegistrationError::PasswordMismatch => {
                Self::new(ErrorCode::InvalidInput, error.to_string())
            }
        }
    }
}

/// Registration form fields as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Email address
    pub email: String,
    /// Chosen password
    pub password: String,
    /// Password typed a second time
    pub confirm: String,
}

impl RegistrationForm {
    /// Build a form from its three fields
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm: confirm.into(),
        }
    }

    /// Whether the submit action should be enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.email.trim().chars().count() > MIN_EMAIL_LEN_EXCLUSIVE
            && self.password.chars().count() >= MIN_PASSWORD_LEN
            && self.confirm.chars().count() >= MIN_PASSWORD_LEN
            && self.password == self.confirm
    }

    /// Validate on submission
    ///
    /// # Errors
    ///
    /// Returns the first failing check: blank email, short password, then
    /// mismatched confirmation
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.email.trim().is_empty() {
            return Err(RegistrationError::MissingEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort);
        }
        if self.password != self.confirm {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_converts_to_app_error() {
        let err: AppError = RegistrationError::MissingEmail.into();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        let err: AppError = RegistrationError::PasswordMismatch.into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_short_message_names_minimum() {
        assert_eq!(
            RegistrationError::PasswordTooShort.to_string(),
            "Mot de passe trop court (min 6)."
        );
    }
}
