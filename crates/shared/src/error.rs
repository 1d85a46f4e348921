//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every failure reported by the backend is classified into one of these
/// variants. The carried string is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Authentication failed or the session expired.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Access denied.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g., duplicate entry).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Too many requests.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The backend failed (5xx).
    #[error("Backend error: {0}")]
    Backend(String),

    /// Any other status the client does not expect.
    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

impl AppError {
    /// Classifies a non-success HTTP status returned by the backend.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Self::Validation(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            422 => Self::BusinessRule(message),
            429 => Self::RateLimited(message),
            500..=599 => Self::Backend(message),
            _ => Self::Unexpected(message),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::BusinessRule(_) => 422,
            Self::Conflict(_) => 409,
            Self::RateLimited(_) => 429,
            Self::Backend(_) | Self::Unexpected(_) => 500,
        }
    }

    /// Returns the error code for display and logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::RateLimited(_) => "RATE_LIMITED",
            Self::Backend(_) => "BACKEND_ERROR",
            Self::Unexpected(_) => "UNEXPECTED_RESPONSE",
        }
    }

    /// Returns the bare message, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Validation(m)
            | Self::BusinessRule(m)
            | Self::Conflict(m)
            | Self::RateLimited(m)
            | Self::Backend(m)
            | Self::Unexpected(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(400, "VALIDATION_ERROR")]
    #[case(401, "UNAUTHORIZED")]
    #[case(403, "FORBIDDEN")]
    #[case(404, "NOT_FOUND")]
    #[case(409, "CONFLICT")]
    #[case(422, "BUSINESS_RULE_VIOLATION")]
    #[case(429, "RATE_LIMITED")]
    #[case(500, "BACKEND_ERROR")]
    #[case(503, "BACKEND_ERROR")]
    #[case(418, "UNEXPECTED_RESPONSE")]
    fn test_from_status(#[case] status: u16, #[case] code: &str) {
        let err = AppError::from_status(status, "boom");
        assert_eq!(err.error_code(), code);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Unauthorized(String::new()).status_code(), 401);
        assert_eq!(AppError::Forbidden(String::new()).status_code(), 403);
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::BusinessRule(String::new()).status_code(), 422);
        assert_eq!(AppError::Conflict(String::new()).status_code(), 409);
        assert_eq!(AppError::RateLimited(String::new()).status_code(), 429);
        assert_eq!(AppError::Backend(String::new()).status_code(), 500);
        assert_eq!(AppError::Unexpected(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Unauthorized("msg".into()).to_string(),
            "Authentication failed: msg"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::Backend("msg".into()).to_string(),
            "Backend error: msg"
        );
    }
}
