//! Upload page: submit a new analysis under a chosen plan.
//!
//! Submitting consumes credits server-side; the page patches the local
//! balance immediately and the next authoritative fetch reconciles it.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::session::AppSession;
use crate::net::types::AnalysisPlan;
use crate::util::auth::install_unauth_redirect;

/// Local balance after submitting under `plan`.
fn remaining_credits(balance: i64, plan: AnalysisPlan) -> i64 {
    balance - plan.required_credits()
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let location = use_location();
    install_unauth_redirect(session.state(), &location.pathname.get_untracked(), navigate.clone());

    let plan = RwSignal::new(AnalysisPlan::Basic);
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let auth = session.state();

    let balance = move || auth.get().user.map_or(0, |user| user.credits);

    let on_submit = move |_| {
        if busy.get() {
            return;
        }
        let chosen = plan.get();
        if !session.has_credits(chosen.required_credits()) {
            message.set("Not enough credits. Pick up a plan to continue.".to_owned());
            navigate("/plans", NavigateOptions::default());
            return;
        }
        busy.set(true);
        message.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_analysis(&session, chosen).await {
                Ok(analysis) => {
                    let current = session.state().get_untracked().user.map_or(0, |user| user.credits);
                    session.update_credits(remaining_credits(current, chosen));
                    navigate(&format!("/analysis/{}", analysis.id), NavigateOptions::default());
                }
                Err(error) => {
                    message.set(error.user_message("Unable to start the analysis. Try again."));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, navigate, chosen);
        }
    };

    view! {
        <div class="upload-page">
            <h1>"New analysis"</h1>
            <p class="upload-page__credits">
                {move || format!("You have {} credits available", balance())}
            </p>

            <div class="upload-page__plans">
                <label class="upload-plan" class=("upload-plan--selected", move || plan.get() == AnalysisPlan::Basic)>
                    <input
                        type="radio"
                        name="plan"
                        prop:checked=move || plan.get() == AnalysisPlan::Basic
                        on:change=move |_| plan.set(AnalysisPlan::Basic)
                    />
                    <span class="upload-plan__name">"Basic"</span>
                    <span class="upload-plan__cost">"1 credit — personality report"</span>
                </label>
                <label class="upload-plan" class=("upload-plan--selected", move || plan.get() == AnalysisPlan::Complete)>
                    <input
                        type="radio"
                        name="plan"
                        prop:checked=move || plan.get() == AnalysisPlan::Complete
                        on:change=move |_| plan.set(AnalysisPlan::Complete)
                    />
                    <span class="upload-plan__name">"Complete"</span>
                    <span class="upload-plan__cost">"3 credits — personality + compatibility"</span>
                </label>
            </div>

            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_submit>
                {move || if busy.get() { "Starting..." } else { "Start Analysis" }}
            </button>

            <Show when=move || !message.get().is_empty()>
                <p class="upload-page__message">{move || message.get()}</p>
            </Show>
        </div>
    }
}
