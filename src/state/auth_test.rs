use super::*;

fn user_with_credits(credits: i64) -> User {
    serde_json::from_value(serde_json::json!({ "id": 1, "email": "user@example.com", "credits": credits }))
        .unwrap()
}

// =============================================================
// Defaults and predicates
// =============================================================

#[test]
fn initializing_state_is_loading_and_unresolved() {
    let state = AuthState::initializing();
    assert_eq!(state.phase, SessionPhase::Initializing);
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn is_authenticated_requires_both_token_and_user() {
    let mut state = AuthState::initializing();
    assert!(!state.is_authenticated());

    state.restore_token("t1".to_owned());
    assert!(!state.is_authenticated());

    state.set_user(user_with_credits(5));
    assert!(state.is_authenticated());

    let mut user_only = AuthState::initializing();
    user_only.set_user(user_with_credits(5));
    assert!(!user_only.is_authenticated());
}

#[test]
fn has_credits_zero_requirement_holds_for_any_user() {
    let mut state = AuthState::initializing();
    assert!(!state.has_credits(0));

    state.set_user(user_with_credits(0));
    assert!(state.has_credits(0));
    assert!(!state.has_credits(1));
}

#[test]
fn has_credits_compares_against_balance() {
    let mut state = AuthState::initializing();
    state.set_user(user_with_credits(3));
    assert!(state.has_credits(3));
    assert!(!state.has_credits(4));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn establish_sets_token_user_and_phase_together() {
    let mut state = AuthState::initializing();
    state.begin_authenticating();
    assert_eq!(state.phase, SessionPhase::Authenticating);

    state.establish("t1".to_owned(), user_with_credits(5));
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.as_ref().unwrap().credits, 5);
}

#[test]
fn restore_token_alone_does_not_authenticate() {
    let mut state = AuthState::initializing();
    state.restore_token("t2".to_owned());
    assert_eq!(state.phase, SessionPhase::Initializing);
    assert!(!state.is_authenticated());
}

#[test]
fn set_user_promotes_to_authenticated_only_with_token() {
    let mut state = AuthState::initializing();
    state.set_user(user_with_credits(1));
    assert_eq!(state.phase, SessionPhase::Initializing);

    state.restore_token("t2".to_owned());
    state.set_user(user_with_credits(1));
    assert_eq!(state.phase, SessionPhase::Authenticated);
}

#[test]
fn replace_token_keeps_session_live() {
    let mut state = AuthState::initializing();
    state.establish("t1".to_owned(), user_with_credits(5));
    state.begin_refreshing();
    assert_eq!(state.phase, SessionPhase::Refreshing);

    state.replace_token("t2".to_owned());
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.token.as_deref(), Some("t2"));
    assert!(state.is_authenticated());
}

#[test]
fn set_credits_patches_only_existing_user() {
    let mut state = AuthState::initializing();
    state.set_credits(9);
    assert!(state.user.is_none());

    state.set_user(user_with_credits(5));
    state.set_credits(4);
    assert_eq!(state.user.as_ref().unwrap().credits, 4);
}

#[test]
fn authoritative_user_overwrites_local_credit_patch() {
    let mut state = AuthState::initializing();
    state.establish("t1".to_owned(), user_with_credits(5));
    state.set_credits(4);
    assert_eq!(state.user.as_ref().unwrap().credits, 4);

    state.set_user(user_with_credits(9));
    assert_eq!(state.user.as_ref().unwrap().credits, 9);
}

#[test]
fn clear_resets_session_but_not_loading() {
    let mut state = AuthState::initializing();
    state.establish("t1".to_owned(), user_with_credits(5));
    state.clear();
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(state.loading);

    state.finish_loading();
    assert!(!state.loading);
}

#[test]
fn clear_is_idempotent() {
    let mut state = AuthState::initializing();
    state.establish("t1".to_owned(), user_with_credits(5));
    state.clear();
    let after_once = (state.phase, state.token.clone(), state.user.clone().map(|u| u.id));
    state.clear();
    assert_eq!((state.phase, state.token.clone(), state.user.clone().map(|u| u.id)), after_once);
}
