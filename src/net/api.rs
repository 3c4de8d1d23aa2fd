//! Typed REST endpoints for everything beyond the auth lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! All calls go through [`Session::request`] so authorized traffic gets the
//! bearer header, the cache buster, and the single refresh-and-replay
//! allowance. Pages receive decoded DTOs or an [`ApiError`] carrying the
//! backend's message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::http::{ApiError, HttpRequest, HttpResponse, Transport};
use crate::net::session::Session;
use crate::net::types::{Analysis, AnalysisPlan, DashboardData, Pagination, Plan, User};

/// Analyses shown per history page.
pub const HISTORY_PAGE_SIZE: u32 = 10;

pub(crate) fn analysis_endpoint(id: i64) -> String {
    format!("/analysis/{id}")
}

pub(crate) fn analysis_public_endpoint(id: i64) -> String {
    format!("/analysis/{id}/public")
}

pub(crate) fn shared_analysis_endpoint(token: &str) -> String {
    format!("/analysis/share/{token}")
}

pub(crate) fn setup_password_endpoint(user_id: i64) -> String {
    format!("/auth/setup-password/{user_id}")
}

/// Query parameters for one history page.
pub(crate) fn history_params(page: u32, status: Option<&str>) -> Vec<(String, String)> {
    let mut params = vec![
        ("page".to_owned(), page.to_string()),
        ("limit".to_owned(), HISTORY_PAGE_SIZE.to_string()),
    ];
    if let Some(status) = status {
        params.push(("status".to_owned(), status.to_owned()));
    }
    params
}

/// Submit a new analysis under the given plan. The backend debits the
/// credits; callers patch the local balance for immediate feedback.
pub async fn submit_analysis<T: Transport>(
    session: &Session<T>,
    plan: AnalysisPlan,
) -> Result<Analysis, ApiError> {
    let request = HttpRequest::post("/upload")
        .with_body(serde_json::json!({ "plan": plan.as_str() }));
    let response = session.request(&request).await?;
    decode_field(&response, "analysis")
}

/// Fetch one analysis owned by the current user.
pub async fn fetch_analysis<T: Transport>(session: &Session<T>, id: i64) -> Result<Analysis, ApiError> {
    let response = session.request(&HttpRequest::get(analysis_endpoint(id))).await?;
    decode_field(&response, "analysis")
}

/// Fetch one page of the analysis history.
pub async fn fetch_history<T: Transport>(
    session: &Session<T>,
    page: u32,
    status: Option<&str>,
) -> Result<(Vec<Analysis>, Pagination), ApiError> {
    let mut request = HttpRequest::get("/analysis");
    request.params = history_params(page, status);
    let response = session.request(&request).await?;
    let analyses = decode_field(&response, "analyses")?;
    let pagination = decode_field(&response, "pagination").unwrap_or_default();
    Ok((analyses, pagination))
}

/// Toggle public sharing for an analysis.
pub async fn set_analysis_public<T: Transport>(
    session: &Session<T>,
    id: i64,
    is_public: bool,
) -> Result<(), ApiError> {
    let request = HttpRequest::put(analysis_public_endpoint(id))
        .with_body(serde_json::json!({ "isPublic": is_public }));
    session.request(&request).await?;
    Ok(())
}

/// Fetch a publicly shared analysis by its share token. No session
/// required.
pub async fn fetch_shared_analysis<T: Transport>(
    session: &Session<T>,
    token: &str,
) -> Result<Analysis, ApiError> {
    let response = session.request(&HttpRequest::get(shared_analysis_endpoint(token))).await?;
    decode_field(&response, "analysis")
}

/// Fetch aggregate stats and the recent-analyses strip for the dashboard.
pub async fn fetch_dashboard<T: Transport>(session: &Session<T>) -> Result<DashboardData, ApiError> {
    let response = session.request(&HttpRequest::get("/user/dashboard")).await?;
    serde_json::from_value(response.body).map_err(|error| ApiError::Decode(error.to_string()))
}

/// Deactivate the account. The backend requires the current password.
pub async fn deactivate_account<T: Transport>(
    session: &Session<T>,
    password: &str,
) -> Result<(), ApiError> {
    let request = HttpRequest::delete("/user/account")
        .with_body(serde_json::json!({ "password": password }));
    session.request(&request).await?;
    Ok(())
}

/// List purchasable credit plans.
pub async fn fetch_plans<T: Transport>(session: &Session<T>) -> Result<Vec<Plan>, ApiError> {
    let response = session.request(&HttpRequest::get("/credits/plans")).await?;
    decode_field(&response, "plans")
}

/// Validate an account-activation link and fetch the pending user.
pub async fn fetch_setup_account<T: Transport>(
    session: &Session<T>,
    user_id: i64,
) -> Result<User, ApiError> {
    let response = session.request(&HttpRequest::get(setup_password_endpoint(user_id))).await?;
    decode_field(&response, "user")
}

/// Decode one named field of a response body.
fn decode_field<D: serde::de::DeserializeOwned>(
    response: &HttpResponse,
    field: &str,
) -> Result<D, ApiError> {
    let value = response.body.get(field).cloned().unwrap_or(serde_json::Value::Null);
    serde_json::from_value(value).map_err(|error| ApiError::Decode(error.to_string()))
}
