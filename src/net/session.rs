//! Session manager: token lifecycle, auth-state ownership, and the
//! refresh-and-replay protocol.
//!
//! ARCHITECTURE
//! ============
//! `Session` is the only writer to the persisted token record, the default
//! bearer header, and the shared `AuthState` signal. Pages call its
//! operations directly; the typed endpoints in `net::api` route authorized
//! traffic through [`Session::request`], which performs at most one token
//! refresh and one replay per original request.
//!
//! ERROR HANDLING
//! ==============
//! Operations never panic past their boundary: every fallible call returns
//! `Result<_, ApiError>` so pages render the failure message inline. Any
//! profile-fetch or refresh failure is treated as an invalid session and
//! forces a logout.
//!
//! TRADE-OFFS
//! ==========
//! Logout is authoritative over in-flight refreshes: a monotonically
//! increasing epoch is captured before every session-restoring await, and
//! results from a previous epoch are discarded instead of resurrecting
//! state the user already abandoned.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::http::{ApiError, HttpClient, HttpRequest, HttpResponse, Transport};
use crate::net::http::DefaultTransport;
use crate::net::types::{ProfileUpdate, RegisterRequest, User};
use crate::state::auth::AuthState;
use crate::util::token_store::{TOKEN_TTL, TokenStore, default_token_store};

/// Session wired to the build's default transport and token store.
pub type AppSession = Session<DefaultTransport>;

/// Shared session handle. Clones are cheap and all observe the same state.
pub struct Session<T: Transport> {
    state: RwSignal<AuthState>,
    inner: Rc<SessionInner<T>>,
}

struct SessionInner<T: Transport> {
    http: HttpClient<T>,
    tokens: Box<dyn TokenStore>,
    /// Bumped on every logout; awaited session-restoring work compares its
    /// captured value and discards stale results.
    epoch: Cell<u64>,
}

impl<T: Transport> Clone for Session<T> {
    fn clone(&self) -> Self {
        Self { state: self.state, inner: Rc::clone(&self.inner) }
    }
}

impl AppSession {
    /// Session for the running application.
    pub fn new_default() -> Self {
        Self::new(HttpClient::new(DefaultTransport::default()), default_token_store())
    }
}

impl<T: Transport> Session<T> {
    pub fn new(http: HttpClient<T>, tokens: Box<dyn TokenStore>) -> Self {
        Self {
            state: RwSignal::new(AuthState::initializing()),
            inner: Rc::new(SessionInner { http, tokens, epoch: Cell::new(0) }),
        }
    }

    /// The shared auth-state signal components subscribe to.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// True iff both token and user are currently present.
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    /// True iff a user is present with at least `required` credits.
    pub fn has_credits(&self, required: i64) -> bool {
        self.state.get().has_credits(required)
    }

    /// Startup check: restore a persisted token and resolve the user, or
    /// settle into the anonymous state. Ends the loading gate on every
    /// path.
    pub async fn bootstrap(&self) {
        let Some(token) = self.inner.tokens.read() else {
            self.state.update(|state| {
                state.clear();
                state.finish_loading();
            });
            return;
        };
        self.inner.http.set_auth_token(Some(token.clone()));
        self.state.update(|state| state.restore_token(token));
        // A failed fetch already discarded the token via logout.
        let _ = self.fetch_user_profile().await;
        self.state.update(AuthState::finish_loading);
    }

    /// Exchange credentials for a session. On failure the server's message
    /// is carried in the error and no session state is retained.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let request = HttpRequest::post("/auth/login")
            .with_body(serde_json::json!({ "email": email, "password": password }));
        self.authenticate(&request).await
    }

    /// Create an account; contract and side effects mirror `login`.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(payload)
            .map_err(|error| ApiError::Decode(error.to_string()))?;
        let request = HttpRequest::post("/auth/register").with_body(body);
        self.authenticate(&request).await
    }

    /// Set the password for an externally purchased account and establish
    /// the resulting session.
    pub async fn complete_account_setup(&self, user_id: i64, password: &str) -> Result<(), ApiError> {
        let request = HttpRequest::post(crate::net::api::setup_password_endpoint(user_id))
            .with_body(serde_json::json!({ "password": password }));
        self.authenticate(&request).await
    }

    async fn authenticate(&self, request: &HttpRequest) -> Result<(), ApiError> {
        self.state.update(AuthState::begin_authenticating);
        match self.inner.http.send(request).await.and_then(|response| decode_auth_payload(&response)) {
            Ok((token, user)) => {
                self.establish_session(token, user);
                Ok(())
            }
            Err(error) => {
                self.state.update(AuthState::clear);
                Err(error)
            }
        }
    }

    /// Drop the session: persisted record, bearer header, and state.
    /// Infallible, idempotent, and authoritative over any refresh still in
    /// flight.
    pub fn logout(&self) {
        self.inner.epoch.set(self.inner.epoch.get() + 1);
        self.inner.tokens.clear();
        self.inner.http.set_auth_token(None);
        self.state.update(AuthState::clear);
    }

    /// Fetch the authoritative user record. Any failure is treated as an
    /// invalid session, not a transient error.
    pub async fn fetch_user_profile(&self) -> Result<(), ApiError> {
        let epoch = self.inner.epoch.get();
        match self.request(&HttpRequest::get("/auth/profile")).await.and_then(|response| decode_user(&response)) {
            Ok(user) => {
                if self.inner.epoch.get() != epoch {
                    return Err(ApiError::SessionExpired);
                }
                self.state.update(|state| state.set_user(user));
                Ok(())
            }
            Err(error) => {
                leptos::logging::warn!("profile fetch failed: {error}");
                if self.inner.epoch.get() == epoch {
                    self.logout();
                }
                Err(error)
            }
        }
    }

    /// Update mutable profile fields; the server's representation replaces
    /// the local user on success, nothing changes on failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let body = serde_json::to_value(update)
            .map_err(|error| ApiError::Decode(error.to_string()))?;
        let request = HttpRequest::put("/auth/profile").with_body(body);
        let user = self.request(&request).await.and_then(|response| decode_user(&response))?;
        self.state.update(|state| state.set_user(user));
        Ok(())
    }

    /// Exchange the current session for a fresh token. A single attempt:
    /// failure forces a logout, and completion after a logout is discarded.
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        let epoch = self.inner.epoch.get();
        self.state.update(AuthState::begin_refreshing);
        match self.inner.http.send(&HttpRequest::post("/auth/refresh")).await.and_then(|response| decode_token(&response)) {
            Ok(token) => {
                if self.inner.epoch.get() != epoch {
                    return Err(ApiError::SessionExpired);
                }
                self.inner.tokens.write(&token, TOKEN_TTL);
                self.inner.http.set_auth_token(Some(token.clone()));
                self.state.update(|state| state.replace_token(token));
                Ok(())
            }
            Err(error) => {
                if self.inner.epoch.get() == epoch {
                    self.logout();
                }
                Err(error)
            }
        }
    }

    /// Authorized request with the refresh-and-replay protocol: a 401
    /// triggers exactly one refresh and, on success, one replay of the
    /// unchanged request. A second 401 ends the session instead of looping.
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        match self.inner.http.send(request).await {
            Err(error) if error.is_unauthorized() => {
                if self.refresh_token().await.is_err() {
                    return Err(ApiError::SessionExpired);
                }
                match self.inner.http.send(request).await {
                    Err(replay_error) if replay_error.is_unauthorized() => {
                        self.logout();
                        Err(ApiError::SessionExpired)
                    }
                    outcome => outcome,
                }
            }
            outcome => outcome,
        }
    }

    /// Local-only credit patch for immediate UI feedback; the next
    /// authoritative fetch overwrites it.
    pub fn update_credits(&self, credits: i64) {
        self.state.update(|state| state.set_credits(credits));
    }

    fn establish_session(&self, token: String, user: User) {
        self.inner.tokens.write(&token, TOKEN_TTL);
        self.inner.http.set_auth_token(Some(token.clone()));
        self.state.update(|state| state.establish(token, user));
    }
}

/// Decode a `{token, user}` auth response.
fn decode_auth_payload(response: &HttpResponse) -> Result<(String, User), ApiError> {
    let token = decode_token(response)?;
    let user = decode_user(response)?;
    Ok((token, user))
}

/// Decode the `user` field of a response.
fn decode_user(response: &HttpResponse) -> Result<User, ApiError> {
    let value = response.body.get("user").cloned().unwrap_or(serde_json::Value::Null);
    serde_json::from_value(value).map_err(|error| ApiError::Decode(error.to_string()))
}

/// Decode the `token` field of a response.
fn decode_token(response: &HttpResponse) -> Result<String, ApiError> {
    response
        .body
        .get("token")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Decode("missing token field".to_owned()))
}
