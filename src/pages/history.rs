//! History page: paginated analysis list with a status filter.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::analysis_card::AnalysisCard;
use crate::net::api;
use crate::net::session::AppSession;
use crate::net::types::Pagination;
use crate::util::auth::install_unauth_redirect;

/// Status filter options: wire value and label.
fn status_filters() -> Vec<(Option<&'static str>, &'static str)> {
    vec![
        (None, "All"),
        (Some("pending"), "Pending"),
        (Some("completed"), "Completed"),
        (Some("failed"), "Failed"),
    ]
}

/// Whether the pager should render at all.
fn pager_visible(pagination: &Pagination) -> bool {
    pagination.pages > 1
}

/// Clamp a requested page into the valid range.
fn clamp_page(requested: i64, pages: u32) -> u32 {
    let last = i64::from(pages.max(1));
    u32::try_from(requested.clamp(1, last)).unwrap_or(1)
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let location = use_location();
    install_unauth_redirect(session.state(), &location.pathname.get_untracked(), navigate);

    let page = RwSignal::new(1_u32);
    let filter = RwSignal::new(None::<&'static str>);

    let history = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            let current_page = page.get();
            let current_filter = filter.get();
            async move { api::fetch_history(&session, current_page, current_filter).await }
        }
    });

    let filter_buttons = move || {
        status_filters()
            .into_iter()
            .map(|(value, label)| {
                let selected = move || filter.get() == value;
                view! {
                    <button
                        class="history-filter"
                        class=("history-filter--selected", selected)
                        on:click=move |_| {
                            filter.set(value);
                            page.set(1);
                        }
                    >
                        {label}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="history-page">
            <header class="history-page__header">
                <h1>"History"</h1>
                <div class="history-page__filters">{filter_buttons}</div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
                {move || {
                    history.get().map(|result| match result {
                        Ok((analyses, pagination)) => {
                            let cards = analyses
                                .iter()
                                .map(|analysis| view! { <AnalysisCard analysis=analysis.clone()/> })
                                .collect::<Vec<_>>();
                            let pager = pager_visible(&pagination).then(|| {
                                let pages = pagination.pages;
                                view! {
                                    <div class="history-page__pager">
                                        <button
                                            class="btn"
                                            disabled=move || page.get() <= 1
                                            on:click=move |_| page.update(|p| *p = clamp_page(i64::from(*p) - 1, pages))
                                        >
                                            "Previous"
                                        </button>
                                        <span class="history-page__pager-label">
                                            {format!("Page {} of {pages}", pagination.page.max(1))}
                                        </span>
                                        <button
                                            class="btn"
                                            disabled=move || page.get() >= pages
                                            on:click=move |_| page.update(|p| *p = clamp_page(i64::from(*p) + 1, pages))
                                        >
                                            "Next"
                                        </button>
                                    </div>
                                }
                            });
                            view! {
                                <div class="history-page__body">
                                    {if cards.is_empty() {
                                        view! { <p class="history-page__empty">"No analyses yet."</p> }.into_any()
                                    } else {
                                        view! { <div class="history-page__list">{cards}</div> }.into_any()
                                    }}
                                    {pager}
                                </div>
                            }
                            .into_any()
                        }
                        Err(error) => view! {
                            <p class="history-page__error">
                                {error.user_message("Unable to load your history.")}
                            </p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
