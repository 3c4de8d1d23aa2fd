//! Account-activation page for externally purchased accounts.
//!
//! The emailed link carries a user id; the page validates it, collects a
//! password, and the resulting session is established exactly like a
//! login.

#[cfg(test)]
#[path = "setup_password_test.rs"]
mod setup_password_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::net::session::AppSession;

/// Password + confirmation validation for the setup form.
fn validate_setup_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

/// Route-parameter user id, when present and numeric.
fn parse_user_id(raw: Option<String>) -> Option<i64> {
    raw?.parse().ok()
}

#[component]
pub fn SetupPasswordPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let params = use_params_map();

    let user_id = move || parse_user_id(params.get().get("userId"));

    // Validate the activation link up front so an expired one fails fast.
    let pending_user = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            let id = user_id();
            async move {
                match id {
                    Some(id) => api::fetch_setup_account(&session, id).await.map(Some),
                    None => Ok(None),
                }
            }
        }
    });

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = user_id() else {
            message.set("This activation link is invalid.".to_owned());
            return;
        };
        let password_value = match validate_setup_password(&password.get(), &confirm.get()) {
            Ok(value) => value,
            Err(problem) => {
                message.set(problem.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.complete_account_setup(id, &password_value).await {
                Ok(()) => navigate(
                    crate::util::auth::DEFAULT_POST_LOGIN_PATH,
                    leptos_router::NavigateOptions::default(),
                ),
                Err(error) => {
                    message.set(error.user_message("Unable to activate your account."));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, navigate, password_value);
        }
    };

    view! {
        <div class="setup-page">
            <div class="setup-card">
                <h1>"Set your password"</h1>
                <Suspense fallback=move || view! { <p>"Checking your activation link..."</p> }>
                    {move || {
                        pending_user.get().map(|result| match result {
                            Ok(Some(user)) => view! {
                                <p class="setup-card__intro">
                                    {format!("Almost there, {}. Pick a password to finish.", user.name)}
                                </p>
                            }
                            .into_any(),
                            Ok(None) => view! {
                                <p class="setup-card__error">"This activation link is invalid."</p>
                            }
                            .into_any(),
                            Err(error) => view! {
                                <p class="setup-card__error">
                                    {error.user_message("This activation link is invalid or has expired.")}
                                </p>
                            }
                            .into_any(),
                        })
                    }}
                </Suspense>
                <form class="setup-form" on:submit=on_submit>
                    <input
                        class="setup-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="setup-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="setup-button" type="submit" disabled=move || busy.get()>
                        "Activate Account"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="setup-message">{move || message.get()}</p>
                </Show>
            </div>
        </div>
    }
}
