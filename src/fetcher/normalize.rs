// src/fetcher/normalize.rs
// =============================================================================
// Turns whatever the user typed into a URL we can send a request to.
//
// The only rule: if there is no http:// or https:// prefix, assume https://.
// Anything else (ftp://, garbage, empty strings) is passed through and left
// for the fetcher to reject when it builds the request.
// =============================================================================

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Prepends `https://` unless the input already carries an http(s) scheme.
///
/// Example:
///   "example.com"         -> "https://example.com"
///   "http://example.com"  -> "http://example.com"
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with(HTTP_PREFIX) || raw.starts_with(HTTPS_PREFIX) {
        raw.to_string()
    } else {
        format!("{}{}", HTTPS_PREFIX, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("example.com/a?b=c"), "https://example.com/a?b=c");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["example.com", "http://a.b", "https://a.b/c", ""] {
            let once = normalize_url(raw);
            assert_eq!(normalize_url(&once), once);
        }
    }

    #[test]
    fn test_other_schemes_are_not_special() {
        // We only know about http and https
        assert_eq!(normalize_url("ftp://example.com"), "https://ftp://example.com");
    }
}
