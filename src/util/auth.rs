//! Shared auth guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical unauthenticated redirect behavior: once
//! the startup check has resolved, anonymous navigation bounces to the
//! login page carrying the originally requested path, and the login page
//! returns there after a successful sign-in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Landing page after login when no path was remembered.
pub const DEFAULT_POST_LOGIN_PATH: &str = "/dashboard";

/// True when the guard should bounce: the startup check has resolved and
/// no full session is present. Never fires while loading, so a reload on a
/// protected page does not flicker through the login view.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Login destination remembering the originally requested path.
pub fn login_redirect_target(requested_path: &str) -> String {
    if requested_path.is_empty() || requested_path == "/" {
        "/login".to_owned()
    } else {
        format!("/login?from={}", encode_component(requested_path))
    }
}

/// Destination after a successful login: the remembered path when it is a
/// local absolute path, the dashboard otherwise. Anything not starting
/// with `/` (or starting with `//`) is rejected so the remembered value
/// can never send the user off-site.
pub fn post_login_target(remembered: Option<&str>) -> String {
    match remembered.map(decode_component) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => DEFAULT_POST_LOGIN_PATH.to_owned(),
    }
}

/// Redirect to the login page whenever auth has loaded and no session is
/// present. Re-evaluated on every auth-state change.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, requested_path: &str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let target = login_redirect_target(requested_path);
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate(&target, NavigateOptions::default());
        }
    });
}

/// Minimal percent-encoding for a query-string component.
fn encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Inverse of [`encode_component`]; malformed escapes pass through as-is.
fn decode_component(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            if let Ok(byte) = u8::from_str_radix(&encoded[i + 1..i + 3], 16) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(decoded).unwrap_or_else(|_| encoded.to_owned())
}
