//! Card for one purchasable credit plan.

use leptos::prelude::*;

use crate::net::types::Plan;

/// A plan card with a sign-up call to action. Checkout itself happens in
/// the external purchase flow; accounts created there come back through
/// the password-setup link.
#[component]
pub fn PlanCard(plan: Plan) -> impl IntoView {
    let description = plan.description.clone().unwrap_or_default();

    view! {
        <div class="plan-card">
            <h3 class="plan-card__name">{plan.name.clone()}</h3>
            <p class="plan-card__price">{format!("R$ {:.2}", plan.price)}</p>
            <p class="plan-card__credits">{format!("{} credits", plan.credits)}</p>
            <p class="plan-card__description">{description}</p>
            <a class="plan-card__cta" href="/register">"Get Started"</a>
        </div>
    }
}
