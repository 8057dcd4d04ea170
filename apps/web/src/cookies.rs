use axum::http::{header, HeaderMap};

/// Value of cookie `name` from the request's `Cookie` headers, if present and non-empty.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// True when `value` can be written into a cookie without quoting.
pub fn is_cookie_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b'"' | b',' | b';' | b'\\'))
}

/// `Set-Cookie` value for a long-lived, site-wide preference cookie.
pub fn persistent_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for c in cookies {
            map.append(header::COOKIE, HeaderValue::from_str(c).unwrap());
        }
        map
    }

    #[test]
    fn test_reads_named_cookie() {
        let h = headers(&["a=1; session=abc; onelink-theme=light"]);
        assert_eq!(read_cookie(&h, "session").as_deref(), Some("abc"));
        assert_eq!(read_cookie(&h, "onelink-theme").as_deref(), Some("light"));
        assert_eq!(read_cookie(&h, "missing"), None);
    }

    #[test]
    fn test_reads_across_multiple_headers() {
        let h = headers(&["a=1", "session=xyz"]);
        assert_eq!(read_cookie(&h, "session").as_deref(), Some("xyz"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let h = headers(&["session="]);
        assert_eq!(read_cookie(&h, "session"), None);
    }

    #[test]
    fn test_cookie_safety() {
        assert!(is_cookie_safe("dark"));
        assert!(!is_cookie_safe("a;b"));
        assert!(!is_cookie_safe("has space"));
        assert!(!is_cookie_safe(""));
    }
}
