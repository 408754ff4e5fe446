//! Assembles an [`AuthDescriptor`] from resource annotations

use crate::annotations::{AnnotationKeys, AnnotationMap, Annotated, parse_bool};
use crate::error::ValidationError;
use crate::header_list::parse_header_list;
use crate::types::AuthDescriptor;
use crate::url_validation::{UrlError, validate_auth_url};
use log::{debug, warn};

/// Parser for the external authentication annotations
///
/// Stateless apart from the annotation keys it reads; a single instance can be
/// shared across reconciliation threads.
#[derive(Debug, Clone, Default)]
pub struct AuthAnnotationParser {
    keys: AnnotationKeys,
}

impl AuthAnnotationParser {
    pub fn new(keys: AnnotationKeys) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &AnnotationKeys {
        &self.keys
    }

    /// Parses the auth annotations of a map
    ///
    /// The URL is validated first and a bad URL stops parsing. The map is only
    /// read, never modified.
    pub fn parse<M: AnnotationMap + ?Sized>(
        &self,
        annotations: &M,
    ) -> Result<AuthDescriptor, ValidationError> {
        let result = self.parse_fields(annotations);
        match &result {
            Ok(auth) => debug!(
                "auth annotations parsed: url={} method={:?} send_body={}",
                auth.url, auth.method, auth.send_body
            ),
            Err(e) => warn!("rejecting auth annotations: {e}"),
        }
        result
    }

    /// Parses the auth annotations of a resource
    ///
    /// A resource without any annotation block fails with
    /// [`ValidationError::MissingAnnotations`].
    pub fn parse_resource<R: Annotated + ?Sized>(
        &self,
        resource: &R,
    ) -> Result<AuthDescriptor, ValidationError> {
        match resource.annotations() {
            Some(annotations) => self.parse(annotations),
            None => {
                warn!("rejecting auth annotations: resource has no annotations");
                Err(ValidationError::MissingAnnotations)
            }
        }
    }

    fn parse_fields<M: AnnotationMap + ?Sized>(
        &self,
        annotations: &M,
    ) -> Result<AuthDescriptor, ValidationError> {
        let url = self.url(annotations)?;
        let method = annotations
            .annotation(&self.keys.method)
            .unwrap_or_default()
            .to_string();
        let send_body = self.send_body(annotations)?;
        let proxy_headers = annotations
            .annotation(&self.keys.proxy_headers)
            .map(parse_header_list)
            .unwrap_or_default();

        Ok(AuthDescriptor {
            url,
            method,
            send_body,
            proxy_headers,
        })
    }

    fn url<M: AnnotationMap + ?Sized>(
        &self,
        annotations: &M,
    ) -> Result<String, ValidationError> {
        let key = &self.keys.url;
        let raw = annotations.annotation(key).unwrap_or_default();
        match validate_auth_url(raw) {
            Ok(()) => Ok(raw.to_string()),
            Err(UrlError::Empty) => Err(ValidationError::MissingUrl { key: key.clone() }),
            Err(source) => Err(ValidationError::InvalidUrl {
                key: key.clone(),
                url: raw.to_string(),
                source,
            }),
        }
    }

    fn send_body<M: AnnotationMap + ?Sized>(
        &self,
        annotations: &M,
    ) -> Result<bool, ValidationError> {
        let key = &self.keys.send_body;
        match annotations.annotation(key) {
            None => Ok(false),
            Some(raw) => parse_bool(raw).ok_or_else(|| ValidationError::InvalidBool {
                key: key.clone(),
                value: raw.to_string(),
            }),
        }
    }
}

/// Parses auth annotations stored under the default keys
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use authreq::annotations::{AUTH_PROXY_HEADERS, AUTH_SEND_BODY, AUTH_URL};
/// use authreq::parse_annotations;
///
/// let mut annotations = HashMap::new();
/// annotations.insert(AUTH_URL.to_string(), "http://auth.example.com/verify".to_string());
/// annotations.insert(AUTH_SEND_BODY.to_string(), "true".to_string());
/// annotations.insert(AUTH_PROXY_HEADERS.to_string(), "X-User, X-Groups".to_string());
///
/// let auth = parse_annotations(&annotations).unwrap();
/// assert_eq!(auth.url, "http://auth.example.com/verify");
/// assert!(auth.send_body);
/// assert_eq!(auth.proxy_headers, vec!["X-User", "X-Groups"]);
/// ```
pub fn parse_annotations<M: AnnotationMap + ?Sized>(
    annotations: &M,
) -> Result<AuthDescriptor, ValidationError> {
    AuthAnnotationParser::default().parse(annotations)
}

/// Parses the auth annotations of a resource using the default keys
pub fn parse_resource<R: Annotated + ?Sized>(
    resource: &R,
) -> Result<AuthDescriptor, ValidationError> {
    AuthAnnotationParser::default().parse_resource(resource)
}
