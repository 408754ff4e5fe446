//! Annotation keys and lookup over annotation maps

use std::collections::{BTreeMap, HashMap};

/// Prefix shared by the auth annotations
pub const DEFAULT_ANNOTATION_PREFIX: &str = "ingress.kubernetes.io";

/// External URL that provides the authentication
pub const AUTH_URL: &str = "ingress.kubernetes.io/auth-url";

/// HTTP method used for the auth subrequest
pub const AUTH_METHOD: &str = "ingress.kubernetes.io/auth-method";

/// Whether the request body is sent to the authentication service
pub const AUTH_SEND_BODY: &str = "ingress.kubernetes.io/auth-send-body";

/// Comma-separated response headers forwarded from the authentication service
pub const AUTH_PROXY_HEADERS: &str = "ingress.kubernetes.io/auth-proxy-headers";

/// Environment variable overriding the annotation prefix
pub const ANNOTATION_PREFIX_ENV: &str = "INGRESS_AUTHREQ_ANNOTATION_PREFIX";

const URL_SUFFIX: &str = "auth-url";
const METHOD_SUFFIX: &str = "auth-method";
const SEND_BODY_SUFFIX: &str = "auth-send-body";
const PROXY_HEADERS_SUFFIX: &str = "auth-proxy-headers";

/// Annotation keys read by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationKeys {
    pub url: String,
    pub method: String,
    pub send_body: String,
    pub proxy_headers: String,
}

impl Default for AnnotationKeys {
    fn default() -> Self {
        Self {
            url: AUTH_URL.to_string(),
            method: AUTH_METHOD.to_string(),
            send_body: AUTH_SEND_BODY.to_string(),
            proxy_headers: AUTH_PROXY_HEADERS.to_string(),
        }
    }
}

impl AnnotationKeys {
    /// Builds the keys under a custom prefix, e.g. `nginx.ingress.kubernetes.io`
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            url: format!("{prefix}/{URL_SUFFIX}"),
            method: format!("{prefix}/{METHOD_SUFFIX}"),
            send_body: format!("{prefix}/{SEND_BODY_SUFFIX}"),
            proxy_headers: format!("{prefix}/{PROXY_HEADERS_SUFFIX}"),
        }
    }

    /// Load keys from `INGRESS_AUTHREQ_ANNOTATION_PREFIX` or use defaults
    pub fn from_env() -> Self {
        Self::from_prefix(std::env::var(ANNOTATION_PREFIX_ENV).ok().as_deref())
    }

    /// Keys for an optional prefix; unset or blank selects the defaults
    pub fn from_prefix(prefix: Option<&str>) -> Self {
        match prefix.map(str::trim) {
            Some(prefix) if !prefix.is_empty() => Self::with_prefix(prefix),
            _ => Self::default(),
        }
    }
}

/// Read-only string lookup over a resource's annotations
pub trait AnnotationMap {
    fn annotation(&self, key: &str) -> Option<&str>;
}

impl AnnotationMap for HashMap<String, String> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl AnnotationMap for BTreeMap<String, String> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<M: AnnotationMap + ?Sized> AnnotationMap for &M {
    fn annotation(&self, key: &str) -> Option<&str> {
        (**self).annotation(key)
    }
}

/// A resource carrying an optional annotation block, like Kubernetes object metadata
pub trait Annotated {
    fn annotations(&self) -> Option<&BTreeMap<String, String>>;
}

impl Annotated for Option<BTreeMap<String, String>> {
    fn annotations(&self) -> Option<&BTreeMap<String, String>> {
        self.as_ref()
    }
}

/// Parses a boolean annotation value
///
/// Accepts `true` and `false` in any ASCII case. A blank value reads as `false`.
/// Returns `None` for anything else.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else {
        None
    }
}
