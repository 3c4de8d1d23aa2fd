//! 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"That page does not exist."</p>
            <a class="btn" href="/">"Back to Home"</a>
        </div>
    }
}
