//! Validation errors for auth annotations

use crate::url_validation::UrlError;
use thiserror::Error;

/// Rejection of the auth annotations of a resource
///
/// Parsing stops at the first failure, so a single error is reported per
/// resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("resource has no annotations")]
    MissingAnnotations,

    #[error("missing URL: annotation {key} is not set")]
    MissingUrl { key: String },

    #[error("annotation {key}: {url} is not a valid URL: {source}")]
    InvalidUrl {
        key: String,
        url: String,
        source: UrlError,
    },

    #[error("annotation {key}: '{value}' is not a valid boolean (expected true or false)")]
    InvalidBool { key: String, value: String },
}

impl ValidationError {
    /// Annotation key of the field that failed, if the failure is field-specific
    pub fn key(&self) -> Option<&str> {
        match self {
            ValidationError::MissingAnnotations => None,
            ValidationError::MissingUrl { key }
            | ValidationError::InvalidUrl { key, .. }
            | ValidationError::InvalidBool { key, .. } => Some(key),
        }
    }
}
