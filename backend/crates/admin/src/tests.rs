//! Router-level tests for the admin crate

#[cfg(test)]
mod router_tests {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::extract::connect_info::MockConnectInfo;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use platform::rate_limit::InMemoryRateLimitStore;
    use tower::ServiceExt;

    use crate::application::ProvisionAccountsUseCase;
    use crate::application::config::AdminConfig;
    use crate::domain::entity::admin_session::AdminSession;
    use crate::domain::token::SessionTokenCodec;
    use crate::domain::value_object::{admin_role::AdminRole, permission::Permission};
    use crate::infra::in_memory::InMemoryAdminRepository;
    use crate::presentation::guard::{AdminContext, AdminGuard};
    use crate::presentation::middleware::require_admin_session;
    use crate::presentation::router::admin_router;

    const SECRET: &[u8] = b"router-test-secret";

    fn config() -> AdminConfig {
        AdminConfig {
            seed_development_account: true,
            cookie_secure: false,
            ..AdminConfig::with_secret(SECRET.to_vec())
        }
    }

    async fn app() -> Router {
        let config = config();
        let repo = InMemoryAdminRepository::new();
        ProvisionAccountsUseCase::new(Arc::new(repo.clone()), Arc::new(config.clone()))
            .execute(None)
            .await
            .unwrap();

        admin_router(repo, InMemoryRateLimitStore::new(), config)
            .layer(MockConnectInfo(SocketAddr::from(([203, 0, 113, 7], 4000))))
    }

    fn login_request(username: &str, password: &str) -> Request<Body> {
        Request::post("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "username": username, "password": password }).to_string(),
            ))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn cookie_pair(set_cookie: &str) -> String {
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn token_for(role: AdminRole) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        SessionTokenCodec::new(SECRET.to_vec())
            .encode(&AdminSession {
                admin_id: "test".to_string(),
                username: "tester".to_string(),
                role,
                permissions: role.default_permissions(),
                created_at: now,
                expires_at: now + 60_000,
            })
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_sets_cookie_and_session_reports_admin() {
        let app = app().await;

        let response = app.clone().oneshot(login_request("admin", "admin")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("admin-token="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("Max-Age=86400"));

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["admin"]["username"], "admin");
        assert_eq!(body["admin"]["role"], "super_admin");

        let response = app
            .oneshot(
                Request::get("/session")
                    .header(header::COOKIE, cookie_pair(&set_cookie))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["admin"]["username"], "admin");
        assert!(body["expiresAt"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let response = app()
            .await
            .oneshot(login_request("admin", "letmein"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let body = json_body(response).await;
        assert_eq!(body["status"], 401);
        assert_eq!(body["detail"], "Invalid username or password");
    }

    #[tokio::test]
    async fn test_malformed_login_body_is_bad_request() {
        let response = app()
            .await
            .oneshot(
                Request::post("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"username":"admin"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_session_without_or_with_bad_cookie_is_anonymous() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(Request::get("/session").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["authenticated"], false);
        assert!(body.get("admin").is_none());

        let forged = SessionTokenCodec::new(b"attacker".to_vec())
            .encode(&AdminSession {
                admin_id: "x".to_string(),
                username: "mallory".to_string(),
                role: AdminRole::SuperAdmin,
                permissions: Permission::ALL.to_vec(),
                created_at: 0,
                expires_at: i64::MAX,
            })
            .unwrap();
        let response = app
            .oneshot(
                Request::get("/session")
                    .header(header::COOKIE, format!("admin-token={forged}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(json_body(response).await["authenticated"], false);
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let response = app()
            .await
            .oneshot(Request::post("/logout").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("admin-token=;"));
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_login_rate_limit_returns_retry_after() {
        let config = AdminConfig {
            login_rate_limit: platform::rate_limit::RateLimitConfig::new(1, 900),
            ..config()
        };
        let app = admin_router(InMemoryAdminRepository::new(), InMemoryRateLimitStore::new(), config)
            .layer(MockConnectInfo(SocketAddr::from(([198, 51, 100, 1], 4000))));

        let first = app.clone().oneshot(login_request("admin", "x")).await.unwrap();
        assert_eq!(first.status(), StatusCode::UNAUTHORIZED);

        let second = app.oneshot(login_request("admin", "x")).await.unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(second.headers().get(header::RETRY_AFTER).is_some());
    }

    // ========================================================================
    // Guard
    // ========================================================================

    async fn diagnostics(ctx: AdminContext) -> Result<String, crate::error::AdminError> {
        let session = ctx.require(Permission::ViewDiagnostics)?;
        Ok(session.username.clone())
    }

    fn guarded_app() -> Router {
        let guard = AdminGuard::new(&config());
        Router::new()
            .route("/diagnostics", get(diagnostics))
            .with_state(guard)
    }

    fn get_with_token(uri: &str, token: Option<String>) -> Request<Body> {
        let mut builder = Request::get(uri);
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("theme=dark; admin-token={token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_admin_context_requires_session() {
        let response = guarded_app()
            .oneshot(get_with_token("/diagnostics", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_context_checks_permission() {
        let response = guarded_app()
            .oneshot(get_with_token(
                "/diagnostics",
                Some(token_for(AdminRole::Editor)),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = guarded_app()
            .oneshot(get_with_token(
                "/diagnostics",
                Some(token_for(AdminRole::SuperAdmin)),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_middleware_puts_session_in_extensions() {
        async fn whoami(
            axum::Extension(session): axum::Extension<AdminSession>,
        ) -> String {
            session.username
        }

        let guard = AdminGuard::new(&config());
        let app: Router = Router::new()
            .route("/whoami", get(whoami))
            .route_layer(axum::middleware::from_fn_with_state(
                guard,
                require_admin_session,
            ));

        let response = app
            .clone()
            .oneshot(get_with_token("/whoami", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(get_with_token("/whoami", Some(token_for(AdminRole::Admin))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"tester");
    }

    #[tokio::test]
    async fn test_optional_admin_context() {
        async fn viewer(ctx: Option<AdminContext>) -> String {
            ctx.map(|ctx| ctx.0.username)
                .unwrap_or_else(|| "anonymous".to_string())
        }

        let app: Router = Router::new()
            .route("/viewer", get(viewer))
            .with_state(AdminGuard::new(&config()));

        let response = app
            .clone()
            .oneshot(get_with_token("/viewer", Some("tampered".to_string())))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"anonymous");

        let response = app
            .oneshot(get_with_token("/viewer", Some(token_for(AdminRole::Editor))))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"tester");
    }
}
