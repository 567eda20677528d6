use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use complaintdesk_application::{
    HttpMethod, ProxyService, UpstreamGateway, UpstreamReply, UpstreamRequest,
};
use complaintdesk_core::{AppError, AppResult};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::state::AppState;

use super::build_router;

struct FakeGateway {
    reply: AppResult<UpstreamReply>,
    seen: Mutex<Vec<UpstreamRequest>>,
}

impl FakeGateway {
    fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(UpstreamReply {
                status,
                body: body.as_bytes().to_vec(),
            }),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl UpstreamGateway for FakeGateway {
    async fn forward(&self, request: UpstreamRequest) -> AppResult<UpstreamReply> {
        self.seen.lock().await.push(request);
        self.reply.clone()
    }
}

fn router(gateway: Option<Arc<FakeGateway>>) -> Router {
    let gateway = gateway.map(|gateway| gateway as Arc<dyn UpstreamGateway>);
    let state = AppState {
        proxy_service: ProxyService::new(gateway, true),
    };
    let Ok(router) = build_router(state, "http://localhost:3000") else {
        panic!("router must build");
    };
    router
}

struct Answer {
    status: StatusCode,
    fallback: Option<String>,
    raw: String,
    body: Value,
}

async fn call(router: Router, request: Request<Body>) -> Answer {
    let Ok(response) = router.oneshot(request).await else {
        panic!("router must answer");
    };
    let status = response.status();
    let fallback = response
        .headers()
        .get("x-complaintdesk-fallback")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), 1024 * 1024).await else {
        panic!("body must be readable");
    };
    Answer {
        status,
        fallback,
        raw: String::from_utf8_lossy(&bytes).into_owned(),
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", "Bearer abc")
        .body(Body::from(body.to_string()))
        .unwrap_or_default()
}

#[tokio::test]
async fn health_reports_fallback_mode() {
    let answer = call(router(None), get("/health")).await;

    assert_eq!(answer.status, StatusCode::OK);
    assert_eq!(answer.body, json!({ "status": "ok", "upstream": "fallback" }));
}

#[tokio::test]
async fn unconfigured_upstream_serves_marked_fallback() {
    let answer = call(router(None), get("/api/masters/customers")).await;

    assert_eq!(answer.status, StatusCode::OK);
    assert_eq!(answer.fallback.as_deref(), Some("not-configured"));
    assert_eq!(answer.body["data"][1]["name"], "Globex Ltd");
}

#[tokio::test]
async fn live_answer_mirrors_status_and_body() {
    let gateway = FakeGateway::replying(201, r#"{"success":true,"data":{"customerId":9}}"#);
    let answer = call(
        router(Some(gateway.clone())),
        post(
            "/api/masters/customers/save",
            json!({ "id": 0, "name": "Initech", "IsActive": true }),
        ),
    )
    .await;

    assert_eq!(answer.status, StatusCode::CREATED);
    assert_eq!(answer.fallback, None);
    assert_eq!(answer.body["data"]["customerId"], 9);

    let seen = gateway.seen.lock().await;
    assert_eq!(seen[0].method, HttpMethod::Post);
    assert_eq!(seen[0].path, "/api/CustomerMaster/SaveCustomer");
    assert_eq!(seen[0].body, Some(json!({ "id": 0, "name": "Initech", "IsActive": true })));
    assert!(
        seen[0]
            .headers
            .iter()
            .all(|(name, _)| name != "content-type")
    );
    assert!(seen[0].headers.contains(&("authorization".to_owned(), "Bearer abc".to_owned())));
}

#[tokio::test]
async fn live_body_is_written_in_upstream_key_order() {
    let raw = r#"{"success":true,"data":[{"roleName":"Admin","roleId":1}]}"#;
    let answer = call(
        router(Some(FakeGateway::replying(200, raw))),
        get("/api/masters/roles"),
    )
    .await;

    assert_eq!(answer.fallback, None);
    assert_eq!(answer.raw, raw);
}

#[tokio::test]
async fn upstream_error_status_is_replaced_by_fallback() {
    let gateway = FakeGateway::replying(500, r#"{"message":"boom"}"#);
    let answer = call(router(Some(gateway)), get("/api/masters/roles")).await;

    assert_eq!(answer.status, StatusCode::OK);
    assert_eq!(answer.fallback.as_deref(), Some("upstream-status-500"));
    assert_eq!(answer.body["data"][0]["roleName"], "Admin");
}

#[tokio::test]
async fn role_permission_query_string_is_forwarded() {
    let gateway = FakeGateway::replying(200, r#"{"success":true,"data":[]}"#);
    let _ = call(
        router(Some(gateway.clone())),
        get("/api/masters/role-permissions?roleId=3"),
    )
    .await;

    let seen = gateway.seen.lock().await;
    assert_eq!(seen[0].query.as_deref(), Some("roleId=3"));
}

#[tokio::test]
async fn complaints_accept_get_and_post() {
    for request in [
        get("/api/complaints"),
        post("/api/complaints", json!({ "UserId": "1", "RoleId": "1" })),
    ] {
        let answer = call(router(None), request).await;
        assert_eq!(answer.status, StatusCode::OK);
        assert_eq!(answer.body["success"], true);
    }
}

#[tokio::test]
async fn login_without_upstream_issues_demo_session() {
    let answer = call(
        router(None),
        post(
            "/api/auth/login",
            json!({ "email": "admin@cft.com", "password": "secret" }),
        ),
    )
    .await;

    assert_eq!(answer.status, StatusCode::OK);
    assert_eq!(answer.fallback.as_deref(), Some("not-configured"));
    assert_eq!(answer.body["data"]["emailId"], "admin@cft.com");
    assert_eq!(answer.body["data"]["token"], "demo-token");
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let answer = call(router(None), get("/api/unknown")).await;

    assert_eq!(answer.status, StatusCode::NOT_FOUND);
    assert_eq!(answer.body, json!({ "message": "not found: no such route" }));
}

#[test]
fn network_errors_map_to_bad_gateway() {
    use axum::response::IntoResponse;

    let response = crate::error::ApiError(AppError::Network("down".to_owned())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
