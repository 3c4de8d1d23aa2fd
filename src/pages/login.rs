//! Login page: credentials form with post-login redirect to the
//! originally requested path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::session::AppSession;

/// Pre-submit validation: both fields present, plausible email.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(problem) => {
                message.set(problem.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        let remembered = query.get_untracked().get("from");
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.login(&email_value, &password_value).await {
                Ok(()) => {
                    let target = crate::util::auth::post_login_target(remembered.as_deref());
                    navigate(&target, leptos_router::NavigateOptions::default());
                }
                Err(error) => {
                    message.set(error.user_message("Unable to sign in. Try again."));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, navigate, remembered, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
