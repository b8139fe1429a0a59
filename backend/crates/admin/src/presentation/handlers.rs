//! HTTP Handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, FromRef, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use kernel::extract::AppJson;
use platform::client::{client_key, extract_client_ip};
use platform::cookie::set_cookie_header;
use platform::rate_limit::RateLimitStore;

use crate::application::config::AdminConfig;
use crate::application::{SignInInput, SignInUseCase};
use crate::domain::repository::AdminAccountRepository;
use crate::domain::token::SessionTokenCodec;
use crate::domain::value_object::admin_password::AdminPassword;
use crate::error::{AdminError, AdminResult};
use crate::presentation::dto::{AdminProfile, LoginRequest, LoginResponse, SessionStatusResponse};
use crate::presentation::guard::AdminGuard;

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState<R, L>
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub rate_limiter: Arc<L>,
    pub config: Arc<AdminConfig>,
    pub guard: AdminGuard,
}

impl<R, L> FromRef<AdminAppState<R, L>> for AdminGuard
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AdminAppState<R, L>) -> Self {
        state.guard.clone()
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/admin/login
pub async fn login<R, L>(
    State(state): State<AdminAppState<R, L>>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    AppJson(req): AppJson<LoginRequest>,
) -> AdminResult<impl IntoResponse>
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.rate_limiter.clone(),
        SessionTokenCodec::new(state.config.server_secret.clone()),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            username: req.username,
            password: AdminPassword::new(req.password),
            client_key: client_key(client_ip),
        })
        .await?;

    let cookie = set_cookie_header(&state.config.cookie_config(), &output.token).ok_or_else(|| {
        AdminError::Internal("Session token is not a valid cookie value".to_string())
    })?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            admin: AdminProfile::from(&output.session),
            expires_at: output.session.expires_at,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/admin/logout
///
/// Tokens are stateless, so signing out only clears the cookie.
pub async fn logout<R, L>(
    State(state): State<AdminAppState<R, L>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    if let Some(session) = state.guard.session_from_headers(&headers) {
        tracing::info!(admin_id = %session.admin_id, "Admin signed out");
    }

    let cookie = state.config.cookie_config().build_delete_cookie();

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/admin/session
pub async fn session_status<R, L>(
    State(state): State<AdminAppState<R, L>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    Json(state.guard.session_from_headers(&headers).into())
}
