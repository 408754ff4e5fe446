//! Comma-separated header name lists

/// Splits a comma-separated list of header names
///
/// Each element is trimmed; elements left empty by trimming are dropped.
/// Order is preserved and names are neither deduplicated nor case-normalized,
/// the proxy forwards them exactly as listed.
///
/// ```
/// use authreq::header_list::parse_header_list;
///
/// assert_eq!(
///     parse_header_list("X-Header1, X-Header2"),
///     vec!["X-Header1".to_string(), "X-Header2".to_string()]
/// );
/// assert!(parse_header_list("").is_empty());
/// ```
pub fn parse_header_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
