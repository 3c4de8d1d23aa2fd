//! Public landing page.

use leptos::prelude::*;

use crate::net::session::AppSession;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = session.state();

    let cta = move || {
        if auth.get().is_authenticated() {
            view! { <a class="btn btn--primary" href="/upload">"Start a New Analysis"</a> }.into_any()
        } else {
            view! { <a class="btn btn--primary" href="/register">"Try It Free"</a> }.into_any()
        }
    };

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Discover what your photo says about you"</h1>
                <p>
                    "Upload a photo and receive an AI-generated personality and "
                    "compatibility report in minutes."
                </p>
                {cta}
            </section>

            <section class="home-steps">
                <div class="home-step">
                    <h3>"1. Upload"</h3>
                    <p>"Pick a clear photo of yourself."</p>
                </div>
                <div class="home-step">
                    <h3>"2. Analyze"</h3>
                    <p>"Our AI builds your personality profile."</p>
                </div>
                <div class="home-step">
                    <h3>"3. Explore"</h3>
                    <p>"Read, revisit, and share your report."</p>
                </div>
            </section>
        </div>
    }
}
