//! Field validation rules and the messages they surface

use crate::state::{FieldControl, FormField};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_CONSENT: &str = "You must accept the privacy policy to continue.";
pub const MSG_NOT_PDF: &str = "Please select a PDF file.";
pub const MSG_FILE_TOO_LARGE: &str = "File size must be less than 10MB.";
pub const MSG_FILE_MISSING: &str = "Please upload a PDF invoice.";
pub const MSG_FIX_ERRORS: &str = "Please fix the errors above and try again.";
pub const MSG_SUBMISSION_FAILED: &str = "Submission failed";
pub const MSG_SUBMIT_FALLBACK: &str = "Failed to submit invoice. Please try again.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// A single field's validation failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", MSG_REQUIRED)]
    Required,
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,
    #[error("{}", MSG_CONSENT)]
    ConsentRequired,
}

impl ValidationError {
    /// Whether this failure also marks the field with the error visual class.
    /// The consent checkbox only gets the message, never the class.
    pub fn marks_field(&self) -> bool {
        !matches!(self, ValidationError::ConsentRequired)
    }
}

/// Outcome of a passing check: whether the field earns the success class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    Success,
    Neutral,
}

/// Validate one field. One rule per control tag.
///
/// The required-empty rule applies only to string-valued controls; checkboxes
/// carry no string value and are checked on their own branch instead.
pub fn check_field(field: &FormField) -> Result<FieldOutcome, ValidationError> {
    if let FieldControl::Checkbox { checked } = field.control {
        return if checked {
            Ok(FieldOutcome::Neutral)
        } else {
            Err(ValidationError::ConsentRequired)
        };
    }

    let value = field.value_str().trim();

    if field.required && value.is_empty() {
        return Err(ValidationError::Required);
    }

    match &field.control {
        FieldControl::Email { .. } => {
            if value.is_empty() {
                Ok(FieldOutcome::Neutral)
            } else if is_valid_email(value) {
                Ok(FieldOutcome::Success)
            } else {
                Err(ValidationError::InvalidEmail)
            }
        }
        _ => {
            if value.is_empty() {
                Ok(FieldOutcome::Neutral)
            } else {
                Ok(FieldOutcome::Success)
            }
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, FormField};

    // --- check_field ---

    #[test]
    fn required_text_empty() {
        let field = FormField::text(FieldId::Name, "Your Name", true);
        assert_eq!(check_field(&field), Err(ValidationError::Required));
    }

    #[test]
    fn required_text_whitespace_only() {
        let mut field = FormField::text(FieldId::Name, "Your Name", true);
        field.push_char(' ');
        field.push_char(' ');
        assert_eq!(check_field(&field), Err(ValidationError::Required));
    }

    #[test]
    fn required_text_filled() {
        let mut field = FormField::text(FieldId::Name, "Your Name", true);
        field.push_char('A');
        assert_eq!(check_field(&field), Ok(FieldOutcome::Success));
    }

    #[test]
    fn optional_text_empty_is_neutral() {
        let field = FormField::text(FieldId::Name, "Your Name", false);
        assert_eq!(check_field(&field), Ok(FieldOutcome::Neutral));
    }

    #[test]
    fn email_empty_and_required() {
        let field = FormField::email(FieldId::CompanyEmail, "Company Email", true);
        assert_eq!(check_field(&field), Err(ValidationError::Required));
    }

    #[test]
    fn email_invalid() {
        let mut field = FormField::email(FieldId::CompanyEmail, "Company Email", true);
        for c in "not-an-email".chars() {
            field.push_char(c);
        }
        assert_eq!(check_field(&field), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_valid() {
        let mut field = FormField::email(FieldId::CompanyEmail, "Company Email", true);
        for c in "ap@example.com".chars() {
            field.push_char(c);
        }
        assert_eq!(check_field(&field), Ok(FieldOutcome::Success));
    }

    #[test]
    fn email_rejects_spaces_and_missing_tld() {
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("ab@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ab@.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
    }

    #[test]
    fn checkbox_unchecked_is_consent_error_not_required() {
        let field = FormField::checkbox(FieldId::PrivacyConsent, "I accept");
        assert_eq!(check_field(&field), Err(ValidationError::ConsentRequired));
    }

    #[test]
    fn checkbox_checked_is_neutral() {
        let mut field = FormField::checkbox(FieldId::PrivacyConsent, "I accept");
        field.toggle();
        assert_eq!(check_field(&field), Ok(FieldOutcome::Neutral));
    }

    #[test]
    fn consent_error_does_not_mark_field() {
        assert!(!ValidationError::ConsentRequired.marks_field());
        assert!(ValidationError::Required.marks_field());
        assert!(ValidationError::InvalidEmail.marks_field());
    }

    #[test]
    fn select_placeholder_is_required_error() {
        let field = FormField::select(
            FieldId::Industry,
            "Industry",
            crate::state::INDUSTRY_OPTIONS,
        );
        assert_eq!(check_field(&field), Err(ValidationError::Required));
    }

    #[test]
    fn select_with_option_is_success() {
        let mut field = FormField::select(
            FieldId::Industry,
            "Industry",
            crate::state::INDUSTRY_OPTIONS,
        );
        field.next_option();
        assert_eq!(check_field(&field), Ok(FieldOutcome::Success));
    }

    #[test]
    fn messages_match_display() {
        assert_eq!(ValidationError::Required.to_string(), MSG_REQUIRED);
        assert_eq!(ValidationError::InvalidEmail.to_string(), MSG_INVALID_EMAIL);
        assert_eq!(ValidationError::ConsentRequired.to_string(), MSG_CONSENT);
    }
}
