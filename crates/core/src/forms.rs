//! Server-side validation for the contact and job application forms.
//!
//! The rules mirror the client-side checks exactly, so a payload that
//! passes in the browser is never rejected here for a different reason.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum accepted contact message length, in characters.
pub const MAX_MESSAGE_LEN: usize = 500;

/// Loose email shape check: no whitespace, exactly one `@`, and a dot in
/// the domain that is neither its first nor its last character.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// Payload of `POST /contact`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Validate all fields, collecting every violation.
    ///
    /// Returns `Err(CoreError::Validation)` with the individual messages
    /// joined by `", "` so the response lists everything that is wrong.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = Vec::new();

        if self.first_name.trim().is_empty() {
            errors.push("First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push("Last name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("Email is required".to_string());
        } else if !is_valid_email(self.email.trim()) {
            errors.push("Invalid email format".to_string());
        }
        if self.phone.trim().is_empty() {
            errors.push("Phone number is required".to_string());
        }
        if self.message.trim().is_empty() {
            errors.push("Message is required".to_string());
        } else if self.message.chars().count() > MAX_MESSAGE_LEN {
            errors.push(format!(
                "Message must be {MAX_MESSAGE_LEN} characters or less"
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors.join(", ")))
        }
    }
}

/// Payload of `POST /applications`.
///
/// The resume and cover letter are uploaded to object storage by the
/// client before this payload is built; only their public URLs arrive here.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationForm {
    pub position_id: DbId,
    pub position_title: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume_url: String,
    pub cover_letter_url: Option<String>,
}

impl ApplicationForm {
    /// Validate all fields, collecting every violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = Vec::new();

        if self.position_title.trim().is_empty() {
            errors.push("Position title is required".to_string());
        }
        if self.applicant_name.trim().is_empty() {
            errors.push("Applicant name is required".to_string());
        }
        if self.applicant_email.trim().is_empty() {
            errors.push("Applicant email is required".to_string());
        } else if !is_valid_email(self.applicant_email.trim()) {
            errors.push("Invalid email format".to_string());
        }
        if self.resume_url.trim().is_empty() {
            errors.push("Resume URL is required".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors.join(", ")))
        }
    }
}
