//! Router assembly

use std::sync::Arc;
use std::time::Duration;

use admin::{AdminGuard, InMemoryAdminRepository, admin_router};
use axum::extract::State;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router};
use backoffice::{
    BackofficeState, InMemoryStore, bookings_router, careers_router, diagnostics_router,
    messages_router,
};
use contact::contact_router;
use platform::rate_limit::InMemoryRateLimitStore;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, SiteConfig};

/// Process-local state shared by the routers
#[derive(Clone, Default)]
pub struct Stores {
    pub admins: InMemoryAdminRepository,
    pub records: InMemoryStore,
    pub login_limiter: InMemoryRateLimitStore,
    pub contact_limiter: InMemoryRateLimitStore,
}

impl Stores {
    /// Records pre-filled with sample data
    pub fn with_mock_data() -> Self {
        Self {
            records: InMemoryStore::with_mock_data(),
            ..Self::default()
        }
    }

    /// Forget clients whose rate-limit windows have elapsed
    pub fn purge_rate_limits(&self, config: &AppConfig) {
        let purged = [
            (&self.login_limiter, config.admin.login_rate_limit.window),
            (&self.contact_limiter, config.contact.rate_limit.window),
        ]
        .into_iter()
        .map(|(limiter, window)| limiter.purge_expired(window))
        .try_fold(0, |total, purged| purged.map(|n| total + n));

        match purged {
            Ok(0) => {}
            Ok(purged) => tracing::debug!(purged, "Rate limiter cleanup completed"),
            Err(e) => tracing::warn!(error = %e, "Rate limiter cleanup failed"),
        }
    }
}

pub fn build_router(config: &AppConfig, stores: &Stores) -> Router {
    let records = Arc::new(stores.records.clone());
    let backoffice = BackofficeState::new(records.clone(), AdminGuard::new(&config.admin));
    let features = config.site.features;

    let mut api = Router::new()
        .nest(
            "/admin",
            admin_router(
                stores.admins.clone(),
                stores.login_limiter.clone(),
                config.admin.clone(),
            ),
        )
        .nest(
            "/contact",
            contact_router(
                records,
                stores.contact_limiter.clone(),
                config.contact.clone(),
            ),
        )
        .nest("/messages", messages_router(backoffice.clone()))
        .nest("/test-db", diagnostics_router(backoffice.clone()));

    if features.bookings_enabled {
        api = api.nest("/bookings", bookings_router(backoffice.clone()));
    }
    if features.careers_enabled {
        api = api.nest("/careers", careers_router(backoffice));
    }

    let api = api.merge(
        Router::new()
            .route("/site", get(site_config))
            .route("/health", get(health))
            .with_state(Arc::new(config.site.clone())),
    );

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors(&config.frontend_origins))
}

fn cors(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// GET /api/site
async fn site_config(State(site): State<Arc<SiteConfig>>) -> Json<SiteConfig> {
    Json(site.as_ref().clone())
}

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
