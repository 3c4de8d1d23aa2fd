use super::*;

// =============================================================
// User decoding
// =============================================================

#[test]
fn user_decodes_minimal_object() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 2, "credits": 0 })).unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(user.credits, 0);
    assert_eq!(user.name, "");
    assert_eq!(user.email, "");
    assert_eq!(user.plan, None);
}

#[test]
fn user_ignores_unknown_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "email": "user@example.com",
        "credits": 5,
        "referralCode": "XYZ",
        "experiments": { "newReport": true }
    }))
    .unwrap();
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.credits, 5);
}

#[test]
fn user_decodes_camel_case_timestamps() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-02-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(user.updated_at.as_deref(), Some("2024-02-01T00:00:00Z"));
}

// =============================================================
// Analysis decoding
// =============================================================

#[test]
fn analysis_decodes_share_fields() {
    let analysis: Analysis = serde_json::from_value(serde_json::json!({
        "id": 42,
        "status": "completed",
        "isPublic": true,
        "shareToken": "tok-abc",
        "result": "# Report"
    }))
    .unwrap();
    assert!(analysis.is_public);
    assert_eq!(analysis.share_token.as_deref(), Some("tok-abc"));
    assert_eq!(analysis.result.as_deref(), Some("# Report"));
}

#[test]
fn analysis_defaults_optional_fields() {
    let analysis: Analysis = serde_json::from_value(serde_json::json!({ "id": 1 })).unwrap();
    assert_eq!(analysis.status, "");
    assert!(!analysis.is_public);
    assert_eq!(analysis.result, None);
}

// =============================================================
// List/aggregate payloads
// =============================================================

#[test]
fn pagination_decodes_camel_case() {
    let pagination: Pagination =
        serde_json::from_value(serde_json::json!({ "page": 2, "pages": 9, "total": 81 })).unwrap();
    assert_eq!(pagination.page, 2);
    assert_eq!(pagination.pages, 9);
    assert_eq!(pagination.total, 81);
}

#[test]
fn dashboard_data_decodes_recent_analyses() {
    let data: DashboardData = serde_json::from_value(serde_json::json!({
        "stats": { "totalAnalyses": 4, "completedAnalyses": 3, "creditsUsed": 6 },
        "recentAnalyses": [{ "id": 9, "status": "completed" }]
    }))
    .unwrap();
    assert_eq!(data.stats.total_analyses, 4);
    assert_eq!(data.stats.credits_used, 6);
    assert_eq!(data.recent_analyses.len(), 1);
    assert_eq!(data.recent_analyses[0].id, 9);
}

#[test]
fn plan_decodes_with_defaults() {
    let plan: Plan = serde_json::from_value(serde_json::json!({ "id": "basic" })).unwrap();
    assert_eq!(plan.id, "basic");
    assert_eq!(plan.credits, 0);
    assert_eq!(plan.description, None);
}

// =============================================================
// Outbound payloads
// =============================================================

#[test]
fn register_request_skips_absent_optionals() {
    let payload = RegisterRequest {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "Secret123".to_owned(),
        phone: None,
        national_id: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("phone").is_none());
    assert!(value.get("nationalId").is_none());
}

#[test]
fn register_request_serializes_national_id_camel_case() {
    let payload = RegisterRequest {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "Secret123".to_owned(),
        phone: Some("5511999990000".to_owned()),
        national_id: Some("12345678901".to_owned()),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["nationalId"], "12345678901");
    assert_eq!(value["phone"], "5511999990000");
}

#[test]
fn profile_update_serializes_only_set_fields() {
    let update = ProfileUpdate { name: Some("Bob".to_owned()), preferences: None };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, serde_json::json!({ "name": "Bob" }));
}

// =============================================================
// AnalysisPlan
// =============================================================

#[test]
fn analysis_plan_wire_identifiers() {
    assert_eq!(AnalysisPlan::Basic.as_str(), "basic");
    assert_eq!(AnalysisPlan::Complete.as_str(), "complete");
}

#[test]
fn analysis_plan_credit_cost() {
    assert_eq!(AnalysisPlan::Basic.required_credits(), 1);
    assert_eq!(AnalysisPlan::Complete.required_credits(), 3);
}

#[test]
fn analysis_plan_parses_wire_identifier() {
    assert_eq!(AnalysisPlan::from_str_or_default("complete"), AnalysisPlan::Complete);
    assert_eq!(AnalysisPlan::from_str_or_default("basic"), AnalysisPlan::Basic);
    assert_eq!(AnalysisPlan::from_str_or_default("unknown"), AnalysisPlan::Basic);
}
