//! Durable persistence for the session token.
//!
//! DESIGN
//! ======
//! The session manager talks to a small key-value interface so the storage
//! medium stays swappable: a browser cookie in production, an in-memory
//! cell on the server and in tests. The cookie record carries a 7-day
//! expiry, `SameSite=Strict`, and the `Secure` flag whenever the page is
//! served over HTTPS.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::time::Duration;

/// Cookie holding the session token. Deliberately product-prefixed so it
/// cannot collide with generic `token` entries from other apps on the same
/// host.
pub const TOKEN_COOKIE: &str = "facematch_token";

/// Lifetime of the persisted token record.
pub const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Durable store for the session token. The session manager is the only
/// writer.
pub trait TokenStore {
    /// Current persisted token, if any.
    fn read(&self) -> Option<String>;
    /// Persist `token` with the given lifetime, replacing any previous
    /// record.
    fn write(&self, token: &str, max_age: Duration);
    /// Remove the record entirely.
    fn clear(&self);
}

/// Browser cookie store.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

#[cfg(feature = "hydrate")]
impl CookieStore {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }

    fn page_is_https() -> bool {
        web_sys::window()
            .and_then(|window| window.location().protocol().ok())
            .is_some_and(|protocol| protocol == "https:")
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for CookieStore {
    fn read(&self) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        cookie_value(&header, TOKEN_COOKIE)
    }

    fn write(&self, token: &str, max_age: Duration) {
        if let Some(document) = Self::document() {
            let record = build_token_cookie(TOKEN_COOKIE, token, max_age, Self::page_is_https());
            let _ = document.set_cookie(&record);
        }
    }

    fn clear(&self) {
        if let Some(document) = Self::document() {
            let _ = document.set_cookie(&expired_token_cookie(TOKEN_COOKIE));
        }
    }
}

/// In-memory store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: std::cell::RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: std::cell::RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write(&self, token: &str, _max_age: Duration) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Store selected by the build: the cookie in the browser, memory
/// everywhere else.
pub fn default_token_store() -> Box<dyn TokenStore> {
    #[cfg(feature = "hydrate")]
    {
        Box::new(CookieStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Box::new(MemoryStore::default())
    }
}

/// Serialize one `Set-Cookie`-style record for the token.
fn build_token_cookie(name: &str, token: &str, max_age: Duration, secure: bool) -> String {
    let mut record = format!("{name}={token}; Max-Age={}; Path=/; SameSite=Strict", max_age.as_secs());
    if secure {
        record.push_str("; Secure");
    }
    record
}

/// Record that deletes the token cookie.
fn expired_token_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; SameSite=Strict")
}

/// Extract a cookie's value from a `document.cookie` header string.
fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|entry| {
        let (key, value) = entry.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}
