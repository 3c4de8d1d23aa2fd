//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided via context; route guards and
//! user-aware components subscribe to it, and the session manager
//! (`net::session`) is its only writer. Transitions are plain methods on
//! the struct so the machine can be exercised without a reactive runtime.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Where the session currently is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup check for a persisted token is still running.
    #[default]
    Initializing,
    /// No session; public navigation only.
    Anonymous,
    /// A login or register call is in flight.
    Authenticating,
    /// Token and user are both established.
    Authenticated,
    /// A token refresh is in flight for an otherwise-live session.
    Refreshing,
}

/// Authentication state tracking the current token, user, and startup
/// loading flag.
///
/// A token without a resolved user is a transient condition during startup
/// and login only; `is_authenticated` requires both, so components never
/// render against the half-open state.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub phase: SessionPhase,
    pub token: Option<String>,
    pub user: Option<User>,
    /// True until the startup persisted-token check resolves.
    pub loading: bool,
}

impl AuthState {
    /// Initial state at process start: loading, nothing resolved.
    pub fn initializing() -> Self {
        Self { phase: SessionPhase::Initializing, token: None, user: None, loading: true }
    }

    /// True iff both token and user are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// True iff a user is present with at least `required` credits.
    pub fn has_credits(&self, required: i64) -> bool {
        self.user.as_ref().is_some_and(|user| user.credits >= required)
    }

    /// A login or register call has started.
    pub fn begin_authenticating(&mut self) {
        self.phase = SessionPhase::Authenticating;
    }

    /// A token refresh has started.
    pub fn begin_refreshing(&mut self) {
        self.phase = SessionPhase::Refreshing;
    }

    /// Establish a full session: token and user land together so no reader
    /// ever observes one without the other.
    pub fn establish(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;
    }

    /// Record the persisted token found at startup, before the profile
    /// fetch resolves the user.
    pub fn restore_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Replace the user with an authoritative server representation. This
    /// overwrites any local credit patch.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        if self.token.is_some() {
            self.phase = SessionPhase::Authenticated;
        }
    }

    /// Swap in a refreshed token for a live session.
    pub fn replace_token(&mut self, token: String) {
        self.token = Some(token);
        if self.user.is_some() {
            self.phase = SessionPhase::Authenticated;
        }
    }

    /// Local-only credit patch for immediate UI feedback. No-op without a
    /// user.
    pub fn set_credits(&mut self, credits: i64) {
        if let Some(user) = &mut self.user {
            user.credits = credits;
        }
    }

    /// Drop the session entirely. Leaves `loading` untouched so a startup
    /// failure still resolves the loading gate through `finish_loading`.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.phase = SessionPhase::Anonymous;
    }

    /// The startup check has resolved, whichever way it went.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}
