//! Contact details shared by every lead form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{blank_as_none, non_blank, phone_length};
use super::wizard::LeadFieldError;

/// How the prospect prefers to be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    /// Email.
    #[default]
    Email,
    /// Phone call.
    Phone,
}

/// Who to get back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Full name.
    #[validate(custom(function = "non_blank", message = "Full name is required"))]
    pub full_name: String,
    /// Email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Phone number; blank reads as none.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(custom(function = "phone_length", message = "Phone number must be 7 to 20 characters"))]
    pub phone: Option<String>,
    /// Preferred contact method.
    #[serde(default)]
    pub preferred_contact: ContactMethod,
}

impl ContactInfo {
    /// Problems with these contact details.
    #[must_use]
    pub fn check(&self) -> Vec<LeadFieldError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => LeadFieldError::from_validation(&errors),
        };
        let has_phone = self.phone.as_deref().is_some_and(|p| !p.trim().is_empty());
        if self.preferred_contact == ContactMethod::Phone && !has_phone {
            errors.push(LeadFieldError::new(
                "phone",
                "Phone number is required when phone is the preferred contact",
            ));
        }
        errors
    }
}
