//! Site footer with legal links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__copy">"© FaceMatch"</span>
            <nav class="footer__links">
                <a href="/terms">"Terms"</a>
                <a href="/privacy">"Privacy"</a>
                <a href="/plans">"Plans"</a>
            </nav>
        </footer>
    }
}
