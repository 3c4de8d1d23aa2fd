//! Reusable card for analysis list items on the dashboard and history.

#[cfg(test)]
#[path = "analysis_card_test.rs"]
mod analysis_card_test;

use leptos::prelude::*;

use crate::net::types::Analysis;

/// Badge label for a processing status.
fn status_label(status: &str) -> &'static str {
    match status {
        "pending" => "Pending",
        "processing" => "Processing",
        "completed" => "Completed",
        "failed" => "Failed",
        _ => "Unknown",
    }
}

/// Badge class for a processing status.
fn status_class(status: &str) -> &'static str {
    match status {
        "pending" | "processing" => "analysis-card__badge analysis-card__badge--busy",
        "completed" => "analysis-card__badge analysis-card__badge--done",
        "failed" => "analysis-card__badge analysis-card__badge--failed",
        _ => "analysis-card__badge",
    }
}

/// A clickable card for one analysis.
#[component]
pub fn AnalysisCard(analysis: Analysis) -> impl IntoView {
    let href = format!("/analysis/{}", analysis.id);
    let submitted = analysis.created_at.clone().unwrap_or_default();

    view! {
        <a class="analysis-card" href=href>
            <span class="analysis-card__title">{format!("Analysis #{}", analysis.id)}</span>
            <span class=status_class(&analysis.status)>{status_label(&analysis.status)}</span>
            <span class="analysis-card__date">{submitted}</span>
        </a>
    }
}
