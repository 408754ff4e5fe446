use serde::{Deserialize, Serialize};

/// External authentication settings of an ingress resource
///
/// Consumed by the proxy configuration renderer to emit an auth subrequest
/// directive for every location of the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthDescriptor {
    /// Absolute URL of the authentication service, exactly as annotated
    pub url: String,
    /// HTTP method of the subrequest (empty lets the renderer pick its default)
    pub method: String,
    /// Whether the original request body is sent to the authentication service
    pub send_body: bool,
    /// Response headers of the authentication service to forward upstream
    pub proxy_headers: Vec<String>,
}
