//! Terms of service page.

use leptos::prelude::*;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <h1>"Terms of Service"</h1>
            <p>
                "FaceMatch provides entertainment-oriented personality and "
                "compatibility reports. Reports are generated automatically and "
                "are not professional advice."
            </p>
            <p>
                "Credits are consumed when an analysis is submitted and are not "
                "refunded for completed reports. Accounts may be deactivated at "
                "any time from the profile page."
            </p>
        </div>
    }
}
