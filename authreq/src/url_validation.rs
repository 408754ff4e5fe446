//! URL validation for external authentication endpoints
//!
//! The auth URL is handed to the proxy verbatim, so every check runs on the
//! raw text. The WHATWG parser in `url` repairs sloppy input (missing `//`,
//! backslashes, stripped whitespace) and is only used to classify the scheme;
//! the host is taken from a strict `http::Uri` parse of the same text.

use http::Uri;
use thiserror::Error;
use url::{ParseError, Url};

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Reason an auth URL was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("no URL configured")]
    Empty,

    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("missing scheme")]
    MissingScheme,

    #[error("unsupported scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("missing host")]
    MissingHost,

    #[error("invalid host '{0}': empty label")]
    EmptyHostLabel(String),

    #[error("{0}")]
    Malformed(String),
}

/// Validate that a URL can be used as an external authentication endpoint
///
/// The raw text must:
/// 1. Be non-empty
/// 2. Contain no whitespace, control character or backslash
/// 3. Start with an `http` or `https` scheme followed by `://`
/// 4. Have a non-empty host
/// 5. Have no empty label in its host (`foo..bar.com`, `.foo.com`, `foo.com.`)
///
/// # Examples
///
/// ```
/// use authreq::url_validation::{UrlError, validate_auth_url};
///
/// assert!(validate_auth_url("http://bar.foo.com/external-auth").is_ok());
/// assert!(validate_auth_url("https://auth.example.com:8443/verify?x=1").is_ok());
///
/// assert_eq!(validate_auth_url(""), Err(UrlError::Empty));
/// assert_eq!(validate_auth_url("bar"), Err(UrlError::MissingScheme));
/// assert_eq!(validate_auth_url("http://"), Err(UrlError::MissingHost));
/// assert_eq!(validate_auth_url("http:foo.com/auth"), Err(UrlError::MissingHost));
/// assert_eq!(
///     validate_auth_url("http://foo.com/\nx"),
///     Err(UrlError::InvalidCharacter('\n'))
/// );
/// assert!(matches!(
///     validate_auth_url("http://foo..bar.com"),
///     Err(UrlError::EmptyHostLabel(_))
/// ));
/// ```
pub fn validate_auth_url(raw: &str) -> Result<(), UrlError> {
    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    if let Some(c) = raw
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || *c == '\\')
    {
        return Err(UrlError::InvalidCharacter(c));
    }

    let url = Url::parse(raw).map_err(|e| match e {
        ParseError::RelativeUrlWithoutBase => UrlError::MissingScheme,
        ParseError::EmptyHost => UrlError::MissingHost,
        other => UrlError::Malformed(other.to_string()),
    })?;

    let scheme = url.scheme();
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return Err(UrlError::UnsupportedScheme(scheme.to_string()));
    }

    // `http:foo.com` and `http:/foo.com` only gain their authority through
    // WHATWG repair, the raw text has none
    let has_authority = raw
        .get(scheme.len()..scheme.len() + 3)
        .is_some_and(|sep| sep == "://");
    if !has_authority {
        return Err(UrlError::MissingHost);
    }

    let uri: Uri = raw.parse().map_err(|e: http::uri::InvalidUri| {
        UrlError::Malformed(e.to_string())
    })?;
    let host = match uri.host() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(UrlError::MissingHost),
    };

    // bracketed IPv6 literals have no dot-separated labels
    if !host.starts_with('[') && host.split('.').any(str::is_empty) {
        return Err(UrlError::EmptyHostLabel(host.to_string()));
    }

    Ok(())
}

/// Boolean shorthand for [`validate_auth_url`]
pub fn is_valid_auth_url(raw: &str) -> bool {
    validate_auth_url(raw).is_ok()
}
