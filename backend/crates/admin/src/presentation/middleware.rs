//! Admin Middleware
//!
//! Middleware for requiring an admin session on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AdminError;
use crate::presentation::guard::AdminGuard;

/// Rejects with 401 unless the request carries a valid admin session.
/// The session is stored in request extensions for downstream handlers.
///
/// ```ignore
/// let routes = Router::new()
///     .route("/", get(list))
///     .route_layer(axum::middleware::from_fn_with_state(guard, require_admin_session));
/// ```
pub async fn require_admin_session(
    State(guard): State<AdminGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AdminError> {
    let session = guard
        .session_from_headers(req.headers())
        .ok_or(AdminError::SessionInvalid)?;

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
