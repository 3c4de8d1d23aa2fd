//! Dashboard page: aggregate stats and the recent-analyses strip.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::analysis_card::AnalysisCard;
use crate::net::api;
use crate::net::session::AppSession;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let location = use_location();
    install_unauth_redirect(session.state(), &location.pathname.get_untracked(), navigate);

    let dashboard = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { api::fetch_dashboard(&session).await }
        }
    });

    let greeting = {
        let auth = session.state();
        move || {
            auth.get()
                .user
                .map_or_else(|| "Dashboard".to_owned(), |user| format!("Welcome, {}", user.name))
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <a class="btn btn--primary" href="/upload">"+ New Analysis"</a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    dashboard.get().map(|result| match result {
                        Ok(data) => {
                            let recent = data
                                .recent_analyses
                                .iter()
                                .map(|analysis| view! { <AnalysisCard analysis=analysis.clone()/> })
                                .collect::<Vec<_>>();
                            view! {
                                <div class="dashboard-page__body">
                                    <div class="dashboard-page__stats">
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{data.stats.total_analyses}</span>
                                            <span class="stat-tile__label">"Analyses"</span>
                                        </div>
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{data.stats.completed_analyses}</span>
                                            <span class="stat-tile__label">"Completed"</span>
                                        </div>
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{data.stats.credits_used}</span>
                                            <span class="stat-tile__label">"Credits used"</span>
                                        </div>
                                    </div>
                                    <h2>"Recent analyses"</h2>
                                    <div class="dashboard-page__recent">{recent}</div>
                                </div>
                            }
                            .into_any()
                        }
                        Err(error) => view! {
                            <p class="dashboard-page__error">
                                {error.user_message("Unable to load your dashboard.")}
                            </p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
