//! External authentication annotations for ingress resources
//!
//! Extracts the auth subrequest settings of an ingress resource from its
//! annotations and validates them:
//!
//! - **auth-url**: absolute `http`/`https` URL with a well-formed host, kept verbatim
//! - **auth-method**: HTTP method of the subrequest, passed through as-is
//! - **auth-send-body**: `true` or `false`
//! - **auth-proxy-headers**: comma-separated response headers to forward upstream
//!
//! Parsing is a pure function of the annotation map: no I/O, no shared state,
//! and the first invalid field stops parsing.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use authreq::annotations::{AUTH_METHOD, AUTH_URL};
//! use authreq::{ValidationError, parse_annotations};
//!
//! let mut annotations = BTreeMap::new();
//! annotations.insert(AUTH_URL.to_string(), "https://auth.example.com/check".to_string());
//! annotations.insert(AUTH_METHOD.to_string(), "POST".to_string());
//!
//! let auth = parse_annotations(&annotations)?;
//! assert_eq!(auth.method, "POST");
//! assert!(!auth.send_body);
//!
//! annotations.insert(AUTH_URL.to_string(), "http://foo..bar.com".to_string());
//! let err = parse_annotations(&annotations).unwrap_err();
//! assert_eq!(err.key(), Some(AUTH_URL));
//! # Ok::<(), ValidationError>(())
//! ```

/// Annotation keys and map lookup
pub mod annotations;

/// Validation errors
pub mod error;

/// Header name list parsing
pub mod header_list;

/// Annotation parser
pub mod parser;

/// Auth descriptor type
pub mod types;

/// URL validation for authentication endpoints
pub mod url_validation;

pub use error::ValidationError;
pub use parser::{AuthAnnotationParser, parse_annotations, parse_resource};
pub use types::AuthDescriptor;
