//! Credential extraction for gated routes.

use axum::http::{HeaderMap, header};

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(str::trim))
        .filter(|t| !t.is_empty())
}

/// Extract the value of cookie `name` from the `Cookie` headers.
pub fn extract_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

/// The request credential: the bearer token, else the session cookie when
/// one is configured.
pub fn extract_credential<'a>(
    headers: &'a HeaderMap,
    session_cookie: Option<&str>,
) -> Option<&'a str> {
    extract_bearer_token(headers).or_else(|| session_cookie.and_then(|c| extract_cookie(headers, c)))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.append(k.clone(), HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn bearer_token_is_trimmed() {
        let h = headers(&[(header::AUTHORIZATION, "Bearer  abc ")]);
        assert_eq!(extract_bearer_token(&h), Some("abc"));
    }

    #[test]
    fn non_bearer_schemes_are_ignored() {
        let h = headers(&[(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
        assert_eq!(extract_bearer_token(&h), None);

        let h = headers(&[(header::AUTHORIZATION, "Bearer ")]);
        assert_eq!(extract_bearer_token(&h), None);
    }

    #[test]
    fn cookie_lookup_across_headers() {
        let h = headers(&[
            (header::COOKIE, "theme=dark; other=1"),
            (header::COOKIE, "nh_session=tok-42"),
        ]);
        assert_eq!(extract_cookie(&h, "nh_session"), Some("tok-42"));
        assert_eq!(extract_cookie(&h, "missing"), None);
    }

    #[test]
    fn bearer_wins_over_cookie() {
        let h = headers(&[
            (header::AUTHORIZATION, "Bearer from-header"),
            (header::COOKIE, "nh_session=from-cookie"),
        ]);
        assert_eq!(extract_credential(&h, Some("nh_session")), Some("from-header"));

        let h = headers(&[(header::COOKIE, "nh_session=from-cookie")]);
        assert_eq!(extract_credential(&h, Some("nh_session")), Some("from-cookie"));
        assert_eq!(extract_credential(&h, None), None);
    }
}
