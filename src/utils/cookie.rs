//! Session cookie parsing and rendering.

use axum::http::{HeaderMap, header::COOKIE};

/// Name of the cookie carrying the raw session token.
pub const SESSION_COOKIE: &str = "skyfeed_session";

/// Attributes applied to the session cookie.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
    pub max_age_secs: i64,
}

/// Reads a cookie value from the `Cookie` header.
///
/// Handles multiple cookies in one header by splitting on semicolons; other cookies
/// are ignored.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// Renders a `Set-Cookie` value establishing the session.
pub fn session_cookie(token: &str, settings: CookieSettings) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        settings.max_age_secs
    );
    if settings.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Renders a `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie(settings: CookieSettings) -> String {
    session_cookie("", CookieSettings {
        max_age_secs: 0,
        ..settings
    })
}
