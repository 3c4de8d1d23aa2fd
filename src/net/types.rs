//! Wire DTOs for the backend REST contract.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! decoding stays schema-driven. Unknown fields are ignored, and most fields
//! are defaulted, so older clients keep working when the backend grows its
//! responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated account as returned by the auth endpoints.
///
/// Owned exclusively by the session; pages read it through the auth signal
/// and never hold a divergent copy. Only `id` is required on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique account identifier.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
    /// Remaining analysis credits. Authoritative value lives server-side.
    #[serde(default)]
    pub credits: i64,
    /// Active plan identifier, if the account has one.
    #[serde(default)]
    pub plan: Option<String>,
    /// Free-form account preferences blob.
    #[serde(default)]
    pub preferences: Option<serde_json::Value>,
    /// ISO 8601 creation timestamp, if the backend sends it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if the backend sends it.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A photo analysis and its (eventual) report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Unique analysis identifier.
    pub id: i64,
    /// Processing status: `pending`, `processing`, `completed`, or `failed`.
    #[serde(default)]
    pub status: String,
    /// Plan the analysis was submitted under (`basic` or `complete`).
    #[serde(default)]
    pub plan: Option<String>,
    /// AI-generated report, markdown text, present once completed.
    #[serde(default)]
    pub result: Option<String>,
    /// Whether the owner has made this analysis publicly shareable.
    #[serde(default)]
    pub is_public: bool,
    /// Opaque share token for the public view, when sharing is enabled.
    #[serde(default)]
    pub share_token: Option<String>,
    /// URL of the analyzed photo, if the backend exposes it.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// ISO 8601 submission timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Paging metadata attached to list responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based current page.
    #[serde(default)]
    pub page: u32,
    /// Total number of pages.
    #[serde(default)]
    pub pages: u32,
    /// Total number of records across all pages.
    #[serde(default)]
    pub total: u64,
}

/// A purchasable credit plan from `GET /credits/plans`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Plan identifier (e.g. `basic`, `complete`, `credits_pack`).
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Credits granted by the plan.
    #[serde(default)]
    pub credits: i64,
    /// Price in the backend's display currency.
    #[serde(default)]
    pub price: f64,
    /// Marketing blurb, if any.
    #[serde(default)]
    pub description: Option<String>,
}

/// Aggregate account statistics for the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Analyses ever submitted by this account.
    #[serde(default)]
    pub total_analyses: i64,
    /// Analyses that finished processing.
    #[serde(default)]
    pub completed_analyses: i64,
    /// Credits consumed across all analyses.
    #[serde(default)]
    pub credits_used: i64,
}

/// `GET /user/dashboard` response body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Aggregate statistics.
    #[serde(default)]
    pub stats: DashboardStats,
    /// Most recent analyses, newest first.
    #[serde(default)]
    pub recent_analyses: Vec<Analysis>,
}

/// Registration payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Digits-only phone number, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Digits-only national ID, when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}

/// Partial-update payload for `PUT /auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<serde_json::Value>,
}

/// Analysis tier selected on the upload page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalysisPlan {
    /// Single-photo personality report.
    #[default]
    Basic,
    /// Extended personality + compatibility report.
    Complete,
}

impl AnalysisPlan {
    /// Wire identifier sent in the upload payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Complete => "complete",
        }
    }

    /// Credits consumed when submitting under this plan.
    pub fn required_credits(self) -> i64 {
        match self {
            Self::Basic => 1,
            Self::Complete => 3,
        }
    }

    /// Parse the wire identifier back into a plan, defaulting to basic.
    pub fn from_str_or_default(value: &str) -> Self {
        if value == "complete" { Self::Complete } else { Self::Basic }
    }
}
