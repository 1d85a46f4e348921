//! Field rules shared by the lead forms.

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

const PHONE_MIN_CHARS: usize = 7;
const PHONE_MAX_CHARS: usize = 20;

/// Rejects empty and whitespace-only text.
pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Phone numbers are 7 to 20 characters once trimmed; blank means none given.
pub(crate) fn phone_length(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len == 0 || (PHONE_MIN_CHARS..=PHONE_MAX_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_length"))
    }
}

/// Reads an optional string, treating a blank one as absent.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Converts a Rust field name to the camelCase key used on the wire.
pub(crate) fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
