//! `auth_token` / `user_info` cookie rendering and parsing.

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

use super::error::ApiError;
use crate::domain::error::DomainError;

pub const AUTH_COOKIE: &str = "auth_token";
pub const USER_COOKIE: &str = "user_info";

/// Attributes shared by both login cookies.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    pub max_age_secs: i64,
    pub secure: bool,
}

impl CookiePolicy {
    /// `Set-Cookie` value; `value` must already be cookie-safe.
    pub fn render(&self, name: &str, value: &str) -> Result<HeaderValue, ApiError> {
        render(name, value, self.max_age_secs, self.secure)
    }

    /// Expires the cookie immediately.
    pub fn clear(&self, name: &str) -> Result<HeaderValue, ApiError> {
        render(name, "", 0, self.secure)
    }
}

fn render(name: &str, value: &str, max_age: i64, secure: bool) -> Result<HeaderValue, ApiError> {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|e| DomainError::internal(format!("unrenderable cookie {name}: {e}")).into())
}

/// First value of cookie `name` across all `Cookie` headers.
#[must_use]
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim_matches('"').to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn renders_login_attributes() {
        let policy = CookiePolicy {
            max_age_secs: 86_400,
            secure: false,
        };
        assert_eq!(
            policy.render(AUTH_COOKIE, "abc").unwrap(),
            "auth_token=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400"
        );

        let secure = CookiePolicy {
            secure: true,
            ..policy
        };
        assert!(
            secure
                .clear(USER_COOKIE)
                .unwrap()
                .to_str()
                .unwrap()
                .ends_with("Max-Age=0; Secure")
        );
    }

    #[test]
    fn reads_named_cookie_among_many() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark; auth_token=t0k3n"));
        headers.append(COOKIE, HeaderValue::from_static("user_info=%7B%7D"));

        assert_eq!(read_cookie(&headers, AUTH_COOKIE).as_deref(), Some("t0k3n"));
        assert_eq!(read_cookie(&headers, USER_COOKIE).as_deref(), Some("%7B%7D"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn empty_cookie_counts_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("auth_token="));
        assert_eq!(read_cookie(&headers, AUTH_COOKIE), None);
    }
}
