//! Router-level tests for the backoffice crate

use std::sync::Arc;

use admin::{AdminConfig, AdminGuard, AdminRole, AdminSession, Permission, SessionTokenCodec};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use tower::ServiceExt;

use crate::infra::in_memory::InMemoryStore;
use crate::presentation::{
    BackofficeState, bookings_router, careers_router, diagnostics_router, messages_router,
};

const SECRET: &[u8] = b"backoffice-test-secret";

struct TestApp {
    store: Arc<InMemoryStore>,
    router: Router,
}

fn app() -> TestApp {
    let store = Arc::new(InMemoryStore::with_mock_data());
    let state = BackofficeState::new(store.clone(), AdminGuard::new(&AdminConfig::with_secret(SECRET)));

    let router = Router::new()
        .nest("/api/bookings", bookings_router(state.clone()))
        .nest("/api/careers", careers_router(state.clone()))
        .nest("/api/messages", messages_router(state.clone()))
        .nest("/api/test-db", diagnostics_router(state));

    TestApp { store, router }
}

fn cookie_for(role: AdminRole, permissions: Vec<Permission>) -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let token = SessionTokenCodec::new(SECRET)
        .encode(&AdminSession {
            admin_id: "test".to_string(),
            username: "tester".to_string(),
            role,
            permissions,
            created_at: now,
            expires_at: now + 60_000,
        })
        .unwrap();
    format!("admin-token={token}")
}

fn super_admin() -> String {
    cookie_for(AdminRole::SuperAdmin, AdminRole::SuperAdmin.default_permissions())
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn booking_body(date: &str, time: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Alex Rivera",
        "email": "alex@rivera.example",
        "service": "SEO Audit",
        "preferredDate": date,
        "preferredTime": time,
    })
}

fn future_date(days: i64) -> String {
    (chrono::Utc::now().date_naive() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

// ============================================================================
// Bookings
// ============================================================================

#[tokio::test]
async fn test_public_booking_then_conflict() {
    let app = app();
    let date = future_date(30);

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/bookings", None, booking_body(&date, "11:15")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["preferredTime"], "11:15");

    let response = app
        .router
        .oneshot(json_request("POST", "/api/bookings", None, booking_body(&date, "11:15")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert_eq!(body["status"], 409);
    assert!(body["action"].as_str().unwrap().contains("another date"));
}

#[tokio::test]
async fn test_booking_validation_lists_fields() {
    let response = app()
        .router
        .oneshot(json_request(
            "POST",
            "/api/bookings",
            None,
            serde_json::json!({ "name": "Alex" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    let fields: Vec<_> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, ["email", "service", "preferredDate", "preferredTime"]);
}

#[tokio::test]
async fn test_booking_admin_routes_need_session_and_permission() {
    let app = app();

    let response = app.router.clone().oneshot(get("/api/bookings", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let editor = cookie_for(AdminRole::Editor, AdminRole::Editor.default_permissions());
    let response = app
        .router
        .clone()
        .oneshot(get("/api/bookings", Some(&editor)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .router
        .oneshot(get("/api/bookings?status=confirmed", Some(&super_admin())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["status"], "confirmed");
}

#[tokio::test]
async fn test_booking_update_and_delete() {
    let app = app();
    let cookie = super_admin();
    let pending = crate::BookingRepository::list_bookings(
        app.store.as_ref(),
        Some(crate::BookingStatus::Pending),
    )
    .await
    .unwrap()
    .remove(0);
    let uri = format!("/api/bookings/{}", pending.id);

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            Some(&cookie),
            serde_json::json!({ "status": "confirmed", "notes": "Call first" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["notes"], "Call first");

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            Some(&cookie),
            serde_json::json!({ "status": "pending" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let delete = Request::delete(&uri)
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.router.oneshot(get(&uri, Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_booking_id_is_bad_request() {
    let response = app()
        .router
        .oneshot(get("/api/bookings/not-a-uuid", Some(&super_admin())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Careers
// ============================================================================

#[tokio::test]
async fn test_careers_public_listing() {
    let app = app();

    let response = app.router.clone().oneshot(get("/api/careers", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total"], 2);

    let response = app
        .router
        .clone()
        .oneshot(get("/api/careers?includeInactive=true", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .router
        .oneshot(get("/api/careers?includeInactive=true", Some(&super_admin())))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_inactive_posting_visible_to_admin_only() {
    let app = app();

    let response = app
        .router
        .clone()
        .oneshot(get("/api/careers/design-intern", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .router
        .oneshot(get("/api/careers/design-intern", Some(&super_admin())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["isActive"], false);
    assert_eq!(body["employmentType"], "internship");
}

#[tokio::test]
async fn test_create_job_slug_conflict() {
    let app = app();
    let editor = cookie_for(AdminRole::Editor, AdminRole::Editor.default_permissions());
    let body = serde_json::json!({
        "title": "Content Strategist",
        "department": "Marketing",
        "location": "Remote",
        "description": "Another one.",
    });

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/careers", None, body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/careers", Some(&editor), body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/api/careers",
            Some(&editor),
            serde_json::json!({
                "title": "Motion Designer",
                "department": "Design",
                "location": "Remote",
                "employmentType": "contract",
                "description": "Animate things.",
                "requirements": ["After Effects"],
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["slug"], "motion-designer");
    assert_eq!(body["isActive"], true);
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_messages_require_admin() {
    let app = app();

    let response = app.router.clone().oneshot(get("/api/messages", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["status"], 401);

    let editor = cookie_for(AdminRole::Editor, AdminRole::Editor.default_permissions());
    let response = app
        .router
        .oneshot(get("/api/messages", Some(&editor)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_message_status_update() {
    let app = app();
    let cookie = super_admin();

    let response = app
        .router
        .clone()
        .oneshot(get("/api/messages?status=new", Some(&cookie)))
        .await
        .unwrap();
    let body = json_body(response).await;
    let id = body["items"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/messages/{id}"),
            Some(&cookie),
            serde_json::json!({ "status": "archived" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "archived");

    let response = app
        .router
        .oneshot(get("/api/messages?status=bogus", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[tokio::test]
async fn test_diagnostics_needs_view_permission() {
    let app = app();

    let admin = cookie_for(AdminRole::Admin, AdminRole::Admin.default_permissions());
    let response = app
        .router
        .clone()
        .oneshot(get("/api/test-db", Some(&admin)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .router
        .oneshot(get("/api/test-db", Some(&super_admin())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "in-memory");
    assert_eq!(body["probeOk"], true);
    assert_eq!(body["counts"]["jobs"], 3);
}
