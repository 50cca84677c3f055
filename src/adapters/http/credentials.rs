//! Request credentials: `Authorization: Bearer` first, then the auth cookie.

use crate::domain::RequestCredentials;
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};

/// Cookie holding the identity provider's access token.
pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

pub fn from_headers(headers: &HeaderMap) -> RequestCredentials {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| {
            v.strip_prefix("Bearer ")
                .or_else(|| v.strip_prefix("bearer "))
        })
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    RequestCredentials {
        access_token: bearer.or_else(|| cookie_value(headers, ACCESS_TOKEN_COOKIE)),
    }
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().trim_matches('"').to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(axum::http::HeaderName, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.append(k.clone(), HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn test_bearer_header() {
        let h = headers(&[(AUTHORIZATION, "Bearer abc")]);
        assert_eq!(from_headers(&h).access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_cookie_fallback() {
        let h = headers(&[(COOKIE, "theme=dark; sb-access-token=tok123; other=1")]);
        assert_eq!(from_headers(&h).access_token.as_deref(), Some("tok123"));
    }

    #[test]
    fn test_bearer_wins_over_cookie() {
        let h = headers(&[
            (COOKIE, "sb-access-token=from-cookie"),
            (AUTHORIZATION, "Bearer from-header"),
        ]);
        assert_eq!(from_headers(&h).access_token.as_deref(), Some("from-header"));
    }

    #[test]
    fn test_missing_or_empty_is_anonymous() {
        assert_eq!(from_headers(&HeaderMap::new()), RequestCredentials::anonymous());
        let h = headers(&[(AUTHORIZATION, "Basic xyz"), (COOKIE, "sb-access-token=")]);
        assert_eq!(from_headers(&h), RequestCredentials::anonymous());
    }
}
