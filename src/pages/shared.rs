//! Public view of a shared analysis, reached by share token. No session
//! required.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::session::AppSession;
use crate::util::markdown::render_markdown;

#[component]
pub fn SharedAnalysisPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();

    let analysis = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            let token = params.get().get("token").unwrap_or_default();
            async move { api::fetch_shared_analysis(&session, &token).await }
        }
    });

    view! {
        <div class="shared-page">
            <Suspense fallback=move || view! { <p>"Loading shared analysis..."</p> }>
                {move || {
                    analysis.get().map(|result| match result {
                        Ok(analysis) => {
                            let report = analysis.result.unwrap_or_default();
                            view! {
                                <article class="shared-analysis">
                                    <h1>{format!("Shared analysis #{}", analysis.id)}</h1>
                                    <section class="shared-analysis__report" inner_html=render_markdown(&report)></section>
                                </article>
                            }
                            .into_any()
                        }
                        Err(error) => view! {
                            <p class="shared-page__error">
                                {error.user_message("This share link is invalid or has been disabled.")}
                            </p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
