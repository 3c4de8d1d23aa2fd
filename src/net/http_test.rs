use super::*;

use crate::net::stub::StubTransport;

fn client(transport: StubTransport) -> HttpClient<StubTransport> {
    HttpClient::with_base_url(transport, "http://backend.test/api")
}

// =============================================================
// URL building
// =============================================================

#[test]
fn build_url_appends_cache_buster() {
    let url = build_url("http://backend.test/api", "/auth/profile", &[], 1234);
    assert_eq!(url, "http://backend.test/api/auth/profile?_t=1234");
}

#[test]
fn build_url_keeps_caller_params_before_cache_buster() {
    let params = vec![("page".to_owned(), "2".to_owned()), ("status".to_owned(), "completed".to_owned())];
    let url = build_url("http://backend.test/api", "/analysis", &params, 99);
    assert_eq!(url, "http://backend.test/api/analysis?page=2&status=completed&_t=99");
}

#[test]
fn build_url_tolerates_trailing_slash_in_base() {
    let url = build_url("http://backend.test/api/", "/credits/plans", &[], 7);
    assert_eq!(url, "http://backend.test/api/credits/plans?_t=7");
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("t1"), "Bearer t1");
}

// =============================================================
// Server message extraction
// =============================================================

#[test]
fn server_message_prefers_error_field() {
    let body = serde_json::json!({ "error": "Credenciais inválidas", "message": "other" });
    assert_eq!(server_message(&body), Some("Credenciais inválidas".to_owned()));
}

#[test]
fn server_message_falls_back_to_message_field() {
    let body = serde_json::json!({ "message": "validation failed" });
    assert_eq!(server_message(&body), Some("validation failed".to_owned()));
}

#[test]
fn server_message_ignores_non_string_fields() {
    assert_eq!(server_message(&serde_json::json!({ "error": 42 })), None);
    assert_eq!(server_message(&serde_json::Value::Null), None);
}

// =============================================================
// ApiError surface
// =============================================================

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status { status: 422, message: Some("Email already in use".to_owned()) };
    assert_eq!(err.user_message("Unable to register"), "Email already in use");
}

#[test]
fn user_message_falls_back_without_server_text() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
    assert_eq!(ApiError::Timeout.user_message("Something went wrong"), "Something went wrong");
}

#[test]
fn is_unauthorized_only_for_401() {
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::SessionExpired.is_unauthorized());
}

// =============================================================
// HttpClient::send
// =============================================================

#[test]
fn send_attaches_bearer_and_cache_buster() {
    futures::executor::block_on(async {
        let transport = StubTransport::new();
        transport.push_ok(200, serde_json::json!({ "ok": true }));
        let client = client(transport);
        client.set_auth_token(Some("t1".to_owned()));

        let response = client.send(&HttpRequest::get("/auth/profile")).await.unwrap();
        assert_eq!(response.status, 200);

        let seen = client.transport_requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].bearer.as_deref(), Some("Bearer t1"));
        assert!(seen[0].url.starts_with("http://backend.test/api/auth/profile?_t="));
    });
}

#[test]
fn send_omits_bearer_when_cleared() {
    futures::executor::block_on(async {
        let transport = StubTransport::new();
        transport.push_ok(200, serde_json::Value::Null);
        let client = client(transport);
        client.set_auth_token(Some("t1".to_owned()));
        client.set_auth_token(None);

        client.send(&HttpRequest::get("/credits/plans")).await.unwrap();
        assert_eq!(client.transport_requests()[0].bearer, None);
    });
}

#[test]
fn send_maps_non_success_status_to_error() {
    futures::executor::block_on(async {
        let transport = StubTransport::new();
        transport.push_ok(422, serde_json::json!({ "error": "invalid plan" }));
        let client = client(transport);

        let err = client.send(&HttpRequest::post("/upload")).await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 422, message: Some("invalid plan".to_owned()) });
    });
}

#[test]
fn send_propagates_transport_failure() {
    futures::executor::block_on(async {
        let transport = StubTransport::new();
        transport.push_err(ApiError::Timeout);
        let client = client(transport);

        let err = client.send(&HttpRequest::get("/analysis")).await.unwrap_err();
        assert_eq!(err, ApiError::Timeout);
    });
}

impl HttpClient<StubTransport> {
    fn transport_requests(&self) -> Vec<PreparedRequest> {
        self.transport.requests()
    }
}
