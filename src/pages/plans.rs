//! Plans page: purchasable credit plans, with a built-in catalogue when
//! the backend returns none.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;

use crate::components::plan_card::PlanCard;
use crate::net::api;
use crate::net::session::AppSession;
use crate::net::types::Plan;

/// Fallback catalogue mirroring the backend's standard offering.
fn default_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "basic".to_owned(),
            name: "Basic".to_owned(),
            credits: 1000,
            price: 9.90,
            description: Some("Personality reports for casual use.".to_owned()),
        },
        Plan {
            id: "complete".to_owned(),
            name: "Complete".to_owned(),
            credits: 3000,
            price: 24.90,
            description: Some("Personality and compatibility reports.".to_owned()),
        },
        Plan {
            id: "credits_pack".to_owned(),
            name: "Credits Pack".to_owned(),
            credits: 5000,
            price: 39.90,
            description: Some("Bulk credits for heavy use.".to_owned()),
        },
    ]
}

/// The backend catalogue when it has entries, the built-in one otherwise.
fn display_plans(fetched: Vec<Plan>) -> Vec<Plan> {
    if fetched.is_empty() { default_plans() } else { fetched }
}

#[component]
pub fn PlansPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = session.state();

    let plans = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { api::fetch_plans(&session).await.unwrap_or_default() }
        }
    });

    let balance_note = move || {
        auth.get()
            .user
            .map(|user| format!("You have {} credits", user.credits))
    };

    view! {
        <div class="plans-page">
            <header class="plans-page__header">
                <h1>"Choose your plan"</h1>
                <p>"Unlock deeper insights about your personality and relationships."</p>
                {balance_note}
            </header>

            <Suspense fallback=move || view! { <p>"Loading plans..."</p> }>
                {move || {
                    plans.get().map(|fetched| {
                        let cards = display_plans(fetched)
                            .into_iter()
                            .map(|plan| view! { <PlanCard plan=plan/> })
                            .collect::<Vec<_>>();
                        view! { <div class="plans-page__grid">{cards}</div> }
                    })
                }}
            </Suspense>
        </div>
    }
}
