//! Registration page: account form with client-side validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::session::AppSession;
use crate::net::types::RegisterRequest;

/// Strip formatting from phone/ID inputs; the backend stores digits only.
fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Pre-submit validation producing the wire payload.
fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    phone: &str,
    national_id: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    let phone = normalize_digits(phone);
    if !phone.is_empty() && !(8..=15).contains(&phone.len()) {
        return Err("Enter a valid phone number.");
    }
    let national_id = normalize_digits(national_id);
    if !national_id.is_empty() && national_id.len() != 11 {
        return Err("Enter a valid national ID.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        phone: (!phone.is_empty()).then_some(phone),
        national_id: (!national_id.is_empty()).then_some(national_id),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let national_id = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_registration(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
            &phone.get(),
            &national_id.get(),
        ) {
            Ok(payload) => payload,
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
            match session.register(&payload).await {
                Ok(()) => navigate(
                    crate::util::auth::DEFAULT_POST_LOGIN_PATH,
                    leptos_router::NavigateOptions::default(),
                ),
                Err(error) => {
                    message.set(error.user_message("Unable to create your account. Try again."));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, navigate, payload);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create your account"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="tel"
                        placeholder="Phone (optional)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="National ID (optional)"
                        prop:value=move || national_id.get()
                        on:input=move |ev| national_id.set(event_target_value(&ev))
                    />
                    <button class="register-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="register-message">{move || message.get()}</p>
                </Show>
                <p class="register-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
