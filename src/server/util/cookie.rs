//! Cookie header helpers for the session cookies set at login.

use axum::http::{header::COOKIE, HeaderMap};

/// Attributes shared by every session cookie the server sets.
pub struct CookieSpec<'a> {
    pub name: &'a str,
    pub domain: &'a str,
}

impl CookieSpec<'_> {
    /// Builds a `Set-Cookie` value holding `value` for `max_age_secs`.
    pub fn set(&self, value: &str, max_age_secs: i64, http_only: bool) -> String {
        let mut cookie = format!(
            "{}={}; Domain={}; Path=/; Max-Age={}; SameSite=Lax",
            self.name, value, self.domain, max_age_secs
        );
        if http_only {
            cookie.push_str("; HttpOnly");
        }
        cookie
    }

    /// Builds a `Set-Cookie` value that makes the browser drop the cookie.
    pub fn clear(&self) -> String {
        format!(
            "{}=; Domain={}; Path=/; Max-Age=0; SameSite=Lax",
            self.name, self.domain
        )
    }
}

/// Finds the value of cookie `name` across all `Cookie` headers of a request.
pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
