//! Admin Router

use axum::{
    Router,
    routing::{get, post},
};
use platform::rate_limit::RateLimitStore;
use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::domain::repository::AdminAccountRepository;
use crate::presentation::guard::AdminGuard;
use crate::presentation::handlers::{self, AdminAppState};

/// Create the admin auth router (`/login`, `/logout`, `/session`)
///
/// `rate_limiter` is shared by clone so the caller can purge it periodically.
pub fn admin_router<R, L>(repo: R, rate_limiter: L, config: AdminConfig) -> Router
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
    L: RateLimitStore + Clone + Send + Sync + 'static,
{
    let state = AdminAppState {
        repo: Arc::new(repo),
        rate_limiter: Arc::new(rate_limiter),
        guard: AdminGuard::new(&config),
        config: Arc::new(config),
    };

    Router::new()
        .route("/login", post(handlers::login::<R, L>))
        .route("/logout", post(handlers::logout::<R, L>))
        .route("/session", get(handlers::session_status::<R, L>))
        .with_state(state)
}
