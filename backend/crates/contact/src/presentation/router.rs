//! Contact Router

use std::sync::Arc;

use axum::{Router, routing::post};
use backoffice::MessageRepository;
use platform::rate_limit::RateLimitStore;

use crate::application::config::ContactConfig;
use crate::presentation::handlers::{self, ContactAppState};

/// Create the contact router (`POST /`)
///
/// Messages land in `messages`, the same store the admin panel reads.
pub fn contact_router<M, L>(messages: Arc<M>, rate_limiter: L, config: ContactConfig) -> Router
where
    M: MessageRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let state = ContactAppState {
        messages,
        rate_limiter: Arc::new(rate_limiter),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::submit::<M, L>))
        .with_state(state)
}
