//! Privacy policy page.

use leptos::prelude::*;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <h1>"Privacy Policy"</h1>
            <p>
                "Uploaded photos are processed solely to generate your report and "
                "are handled by our analysis backend. Your session is kept in a "
                "cookie on your device and can be removed by signing out."
            </p>
            <p>
                "Shared reports are visible to anyone with the share link until "
                "sharing is turned off."
            </p>
        </div>
    }
}
