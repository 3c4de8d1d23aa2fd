//! Analysis page: one report with its share controls.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use crate::net::api;
use crate::net::session::AppSession;
use crate::net::types::Analysis;
use crate::util::auth::install_unauth_redirect;
use crate::util::markdown::render_markdown;

/// Public link for a shared analysis.
fn share_url(origin: &str, token: &str) -> String {
    format!("{}/analysis/share/{token}", origin.trim_end_matches('/'))
}

/// Route-parameter id, when present and numeric.
fn parse_analysis_id(raw: Option<String>) -> Option<i64> {
    raw?.parse().ok()
}

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let location = use_location();
    install_unauth_redirect(session.state(), &location.pathname.get_untracked(), navigate);

    let params = use_params_map();
    let analysis_id = move || parse_analysis_id(params.get().get("id"));

    let analysis = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            let id = analysis_id();
            async move {
                match id {
                    Some(id) => api::fetch_analysis(&session, id).await,
                    None => Err(crate::net::http::ApiError::Decode("missing analysis id".to_owned())),
                }
            }
        }
    });

    let share_message = RwSignal::new(String::new());

    let on_toggle_share = {
        let session = session.clone();
        move |id: i64, make_public: bool| {
            let session = session.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match api::set_analysis_public(&session, id, make_public).await {
                    Ok(()) => analysis.refetch(),
                    Err(error) => {
                        share_message.set(error.user_message("Unable to update sharing."));
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (session, id, make_public);
            }
        }
    };

    let on_copy_link = move |link: String| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&link);
                share_message.set("Link copied.".to_owned());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = link;
        }
    };

    view! {
        <div class="analysis-page">
            <Suspense fallback=move || view! { <p>"Loading analysis..."</p> }>
                {move || {
                    let on_toggle_share = on_toggle_share.clone();
                    let on_copy_link = on_copy_link.clone();
                    analysis.get().map(move |result| match result {
                        Ok(analysis) => render_analysis(analysis, on_toggle_share, on_copy_link).into_any(),
                        Err(error) => view! {
                            <p class="analysis-page__error">
                                {error.user_message("Unable to load this analysis.")}
                            </p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
            <Show when=move || !share_message.get().is_empty()>
                <p class="analysis-page__share-message">{move || share_message.get()}</p>
            </Show>
        </div>
    }
}

fn render_analysis(
    analysis: Analysis,
    on_toggle_share: impl Fn(i64, bool) + Clone + 'static,
    on_copy_link: impl Fn(String) + Clone + 'static,
) -> impl IntoView {
    let id = analysis.id;
    let is_public = analysis.is_public;
    let link = origin_url().and_then(|origin| {
        analysis.share_token.as_deref().map(|token| share_url(&origin, token))
    });
    let report = analysis.result.clone();
    let status = analysis.status.clone();

    view! {
        <article class="analysis">
            <header class="analysis__header">
                <h1>{format!("Analysis #{id}")}</h1>
                <button
                    class="btn"
                    on:click={
                        let on_toggle_share = on_toggle_share.clone();
                        move |_| on_toggle_share(id, !is_public)
                    }
                >
                    {if is_public { "Make Private" } else { "Share Publicly" }}
                </button>
            </header>

            {link.map(|link| {
                let shown = link.clone();
                view! {
                    <div class="analysis__share">
                        <code class="analysis__share-link">{shown}</code>
                        <button
                            class="btn"
                            on:click={
                                let on_copy_link = on_copy_link.clone();
                                move |_| on_copy_link(link.clone())
                            }
                        >
                            "Copy Link"
                        </button>
                    </div>
                }
            })}

            {match report {
                Some(markdown) => view! {
                    <section class="analysis__report" inner_html=render_markdown(&markdown)></section>
                }
                .into_any(),
                None => view! {
                    <p class="analysis__pending">
                        {format!("Your report is {status}. Check back in a moment.")}
                    </p>
                }
                .into_any(),
            }}
        </article>
    }
}

/// Current page origin, browser only.
fn origin_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
