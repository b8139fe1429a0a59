//! Admin guard
//!
//! Resolves the [`AdminSession`] for a request from the `admin-token` cookie.
//! Routers that need an admin put an [`AdminGuard`] in their state and take
//! an [`AdminContext`] argument in handlers.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AdminConfig;
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::token::SessionTokenCodec;
use crate::domain::value_object::permission::Permission;
use crate::error::{AdminError, AdminResult};

#[derive(Debug, Clone)]
pub struct AdminGuard {
    check_session: CheckSessionUseCase,
    cookie_name: Arc<str>,
}

impl AdminGuard {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            check_session: CheckSessionUseCase::new(SessionTokenCodec::new(
                config.server_secret.clone(),
            )),
            cookie_name: Arc::from(config.session_cookie_name.as_str()),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn session_from_headers(&self, headers: &HeaderMap) -> Option<AdminSession> {
        let token = platform::cookie::extract_cookie(headers, &self.cookie_name);
        self.check_session.execute(token.as_deref())
    }
}

/// Extractor for a signed-in admin (401 otherwise)
///
/// Reuses a session already placed in request extensions by
/// [`require_admin_session`](super::middleware::require_admin_session).
#[derive(Debug, Clone)]
pub struct AdminContext(pub AdminSession);

impl AdminContext {
    /// 403 unless the session carries `permission`
    pub fn require(&self, permission: Permission) -> AdminResult<&AdminSession> {
        self.0.require(permission)?;
        Ok(&self.0)
    }
}

impl<S> FromRequestParts<S> for AdminContext
where
    AdminGuard: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AdminError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<AdminSession>() {
            return Ok(Self(session.clone()));
        }

        AdminGuard::from_ref(state)
            .session_from_headers(&parts.headers)
            .map(Self)
            .ok_or(AdminError::SessionInvalid)
    }
}

/// `Option<AdminContext>` for public routes that show more to admins
impl<S> OptionalFromRequestParts<S> for AdminContext
where
    AdminGuard: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(
            <Self as FromRequestParts<S>>::from_request_parts(parts, state)
                .await
                .ok(),
        )
    }
}
