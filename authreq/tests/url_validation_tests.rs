use authreq::url_validation::{UrlError, is_valid_auth_url, validate_auth_url};

#[test]
fn test_validate_auth_url_valid_urls() {
    assert!(is_valid_auth_url("http://bar.foo.com/external-auth"));
    assert!(is_valid_auth_url("https://foo.com/external-auth"));
    assert!(is_valid_auth_url("http://auth:8080/verify"));
    assert!(is_valid_auth_url("https://auth.example.com/check?redirect=1#frag"));
    assert!(is_valid_auth_url("http://10.0.0.1/auth"));
    assert!(is_valid_auth_url("http://[::1]:9000/auth"));
    assert!(is_valid_auth_url("HTTPS://Auth.Example.com/"));
}

#[test]
fn test_validate_auth_url_rejects_empty() {
    assert_eq!(validate_auth_url(""), Err(UrlError::Empty));
}

#[test]
fn test_validate_auth_url_rejects_missing_scheme() {
    assert_eq!(validate_auth_url("bar"), Err(UrlError::MissingScheme));
    assert_eq!(
        validate_auth_url("foo.com/external-auth"),
        Err(UrlError::MissingScheme)
    );
    assert_eq!(validate_auth_url("/external-auth"), Err(UrlError::MissingScheme));
}

#[test]
fn test_validate_auth_url_rejects_unsupported_schemes() {
    assert_eq!(
        validate_auth_url("ftp://foo.com/auth"),
        Err(UrlError::UnsupportedScheme("ftp".to_string()))
    );
    assert_eq!(
        validate_auth_url("ws://foo.com/auth"),
        Err(UrlError::UnsupportedScheme("ws".to_string()))
    );
    assert!(!is_valid_auth_url("mailto:auth@foo.com"));
    assert!(!is_valid_auth_url("javascript:alert(1)"));
}

#[test]
fn test_validate_auth_url_rejects_missing_host() {
    assert_eq!(validate_auth_url("http://"), Err(UrlError::MissingHost));
    assert_eq!(validate_auth_url("https://"), Err(UrlError::MissingHost));
}

#[test]
fn test_validate_auth_url_rejects_empty_host_labels() {
    assert_eq!(
        validate_auth_url("http://foo..bar.com"),
        Err(UrlError::EmptyHostLabel("foo..bar.com".to_string()))
    );
    assert!(matches!(
        validate_auth_url("http://.foo.com/auth"),
        Err(UrlError::EmptyHostLabel(_))
    ));
    assert!(matches!(
        validate_auth_url("http://foo.com./auth"),
        Err(UrlError::EmptyHostLabel(_))
    ));
}

#[test]
fn test_validate_auth_url_rejects_ipv4_trailing_dot() {
    assert_eq!(
        validate_auth_url("http://1.2.3.4./auth"),
        Err(UrlError::EmptyHostLabel("1.2.3.4.".to_string()))
    );
}

#[test]
fn test_validate_auth_url_requires_literal_authority() {
    // the WHATWG parser would repair these into http://foo.com/auth
    assert_eq!(
        validate_auth_url("http:foo.com/auth"),
        Err(UrlError::MissingHost)
    );
    assert_eq!(
        validate_auth_url("http:/foo.com/auth"),
        Err(UrlError::MissingHost)
    );
    assert_eq!(
        validate_auth_url("https:auth.example.com"),
        Err(UrlError::MissingHost)
    );
}

#[test]
fn test_validate_auth_url_rejects_backslashes() {
    assert_eq!(
        validate_auth_url("http:\\\\foo.com\\auth"),
        Err(UrlError::InvalidCharacter('\\'))
    );
    assert_eq!(
        validate_auth_url("http://foo.com\\auth"),
        Err(UrlError::InvalidCharacter('\\'))
    );
}

#[test]
fn test_validate_auth_url_rejects_whitespace_and_control_characters() {
    assert_eq!(
        validate_auth_url("  http://foo.com/auth  "),
        Err(UrlError::InvalidCharacter(' '))
    );
    assert_eq!(
        validate_auth_url("http://foo.com/check;\nproxy_pass http://evil;"),
        Err(UrlError::InvalidCharacter('\n'))
    );
    assert_eq!(
        validate_auth_url("http://foo.com/\tauth"),
        Err(UrlError::InvalidCharacter('\t'))
    );
    assert_eq!(
        validate_auth_url("http://foo.com/auth\u{0}"),
        Err(UrlError::InvalidCharacter('\u{0}'))
    );
    assert!(!is_valid_auth_url("http://foo.com/a b"));
}

#[test]
fn test_url_error_messages() {
    assert_eq!(UrlError::Empty.to_string(), "no URL configured");
    assert_eq!(UrlError::MissingScheme.to_string(), "missing scheme");
    assert_eq!(UrlError::MissingHost.to_string(), "missing host");
    assert_eq!(
        UrlError::InvalidCharacter('\n').to_string(),
        "invalid character '\\n'"
    );
    assert_eq!(
        UrlError::EmptyHostLabel("foo..bar.com".to_string()).to_string(),
        "invalid host 'foo..bar.com': empty label"
    );
}
