//! Back-office Routers
//!
//! One router per resource so the binary can mount only the enabled ones.

use admin::require_admin_session;
use axum::{Router, middleware, routing::get};

use crate::presentation::handlers::{self, BackofficeState, BackofficeStore};

/// `/api/bookings`: public `POST /`, everything else admin-only
pub fn bookings_router<S: BackofficeStore>(state: BackofficeState<S>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_bookings::<S>).post(handlers::create_booking::<S>),
        )
        .route(
            "/{id}",
            get(handlers::get_booking::<S>)
                .put(handlers::update_booking::<S>)
                .delete(handlers::delete_booking::<S>),
        )
        .with_state(state)
}

/// `/api/careers`: public reads, admin writes
pub fn careers_router<S: BackofficeStore>(state: BackofficeState<S>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_jobs::<S>).post(handlers::create_job::<S>),
        )
        .route(
            "/{key}",
            get(handlers::get_job::<S>)
                .put(handlers::update_job::<S>)
                .delete(handlers::delete_job::<S>),
        )
        .with_state(state)
}

/// `/api/messages`: every route requires an admin session
pub fn messages_router<S: BackofficeStore>(state: BackofficeState<S>) -> Router {
    Router::new()
        .route("/", get(handlers::list_messages::<S>))
        .route(
            "/{id}",
            get(handlers::get_message::<S>)
                .put(handlers::update_message::<S>)
                .delete(handlers::delete_message::<S>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.guard.clone(),
            require_admin_session,
        ))
        .with_state(state)
}

/// `/api/test-db`
pub fn diagnostics_router<S: BackofficeStore>(state: BackofficeState<S>) -> Router {
    Router::new()
        .route("/", get(handlers::storage_diagnostics::<S>))
        .with_state(state)
}
