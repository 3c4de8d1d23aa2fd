//! Profile page: edit account details, deactivate the account.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::session::AppSession;
use crate::net::types::ProfileUpdate;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let location = use_location();
    install_unauth_redirect(session.state(), &location.pathname.get_untracked(), navigate.clone());

    let auth = session.state();
    let name = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Seed the form once the user resolves.
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            if name.get_untracked().is_empty() {
                name.set(user.name);
            }
        }
    });

    let on_save = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let new_name = name.get().trim().to_owned();
            if new_name.is_empty() {
                message.set("Enter a name.".to_owned());
                return;
            }
            busy.set(true);
            message.set(String::new());

            let session = session.clone();
            let update = ProfileUpdate { name: Some(new_name), preferences: None };
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match session.update_profile(&update).await {
                    Ok(()) => message.set("Profile updated.".to_owned()),
                    Err(error) => {
                        message.set(error.user_message("Unable to update your profile."));
                    }
                }
                busy.set(false);
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (session, update);
            }
        }
    };

    let confirm_password = RwSignal::new(String::new());
    let deactivate_message = RwSignal::new(String::new());

    let on_deactivate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let password = confirm_password.get();
        if password.is_empty() {
            deactivate_message.set("Enter your password to confirm.".to_owned());
            return;
        }

        let session = session.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::deactivate_account(&session, &password).await {
                Ok(()) => {
                    session.logout();
                    navigate("/", leptos_router::NavigateOptions::default());
                }
                Err(error) => {
                    deactivate_message.set(error.user_message("Unable to deactivate the account."));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, navigate, password);
        }
    };

    let email = move || auth.get().user.map(|user| user.email).unwrap_or_default();

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>

            <form class="profile-form" on:submit=on_save>
                <label class="profile-form__label">
                    "Name"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Email"
                    <input class="profile-form__input" type="email" prop:value=email disabled=true/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
                <Show when=move || !message.get().is_empty()>
                    <p class="profile-form__message">{move || message.get()}</p>
                </Show>
            </form>

            <section class="profile-page__danger">
                <h2>"Deactivate account"</h2>
                <p>"Deactivation disables sign-in and hides your analyses."</p>
                <form class="profile-form" on:submit=on_deactivate>
                    <input
                        class="profile-form__input"
                        type="password"
                        placeholder="Current password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--danger" type="submit">"Deactivate"</button>
                </form>
                <Show when=move || !deactivate_message.get().is_empty()>
                    <p class="profile-form__message">{move || deactivate_message.get()}</p>
                </Show>
            </section>
        </div>
    }
}
