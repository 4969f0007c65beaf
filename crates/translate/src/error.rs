//! Error type produced by the translators.
//!
//! Translation is total for structurally valid input: unknown enum-like values
//! fall back to documented defaults rather than failing. The variants below are
//! the remaining ways a translation can still go wrong.
//!
//! | Error | Meaning |
//! |-------|---------|
//! | [`Encode`](TranslateError::Encode) | A typed value could not be turned into a dynamic attribute value |
//! | [`Invalid`](TranslateError::Invalid) | The input violates a validation rule |
//!
//! ```rust
//! use translate::TranslateError;
//!
//! let err = TranslateError::Invalid("user id is required".to_string());
//! assert_eq!(err.http_status_code(), 422);
//! assert!(err.to_string().contains("user id is required"));
//! ```
use thiserror::Error;

/// Errors that can occur while translating between dialects.
///
/// Marked `#[non_exhaustive]`; match with a catch-all arm.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TranslateError {
    /// A value could not be encoded into a dynamic attribute value.
    #[error("failed to encode attribute value: {0}")]
    Encode(String),

    /// The input document is not acceptable for translation.
    #[error("invalid document: {0}")]
    Invalid(String),
}

impl TranslateError {
    /// Suggested HTTP status for surfacing this error to a client.
    pub fn http_status_code(&self) -> u16 {
        match self {
            TranslateError::Encode(_) => 500,
            TranslateError::Invalid(_) => 422,
        }
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(err: serde_json::Error) -> Self {
        TranslateError::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_encode_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TranslateError::from(json_err);

        assert!(matches!(err, TranslateError::Encode(_)));
        assert_eq!(err.http_status_code(), 500);
        assert!(err.to_string().starts_with("failed to encode attribute value"));
    }
}
