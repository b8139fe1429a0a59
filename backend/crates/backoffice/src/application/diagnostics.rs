//! Storage diagnostics behind `/api/test-db`

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use kernel::error::support::support_contact;
use serde::Serialize;

use crate::domain::repository::{RecordCounts, StorageDiagnostics};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsReport {
    /// `ok` or `degraded`
    pub status: &'static str,
    pub storage: &'static str,
    pub counts: Option<RecordCounts>,
    pub probe_ok: bool,
    pub probe_latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl DiagnosticsReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "ok"
    }
}

pub struct DiagnosticsUseCase<S>
where
    S: StorageDiagnostics,
{
    store: Arc<S>,
}

impl<S> DiagnosticsUseCase<S>
where
    S: StorageDiagnostics,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Failures are reported in the body, never as an error
    pub async fn run(&self) -> DiagnosticsReport {
        let started = Instant::now();
        let probe = self.store.round_trip_probe().await;
        let probe_latency_ms = started.elapsed().as_millis() as u64;

        let counts = self.store.record_counts().await;

        let failure = match (&probe, &counts) {
            (Err(err), _) | (_, Err(err)) => Some(err),
            _ => None,
        };
        if let Some(err) = failure {
            tracing::error!(storage = self.store.backend_name(), error = %err, "Storage check failed");
        }
        let degraded = failure.is_some();

        DiagnosticsReport {
            status: if degraded { "degraded" } else { "ok" },
            storage: self.store.backend_name(),
            counts: counts.ok(),
            probe_ok: probe.is_ok(),
            probe_latency_ms,
            error: degraded.then(|| "Storage check failed".to_string()),
            action: degraded.then(|| {
                format!(
                    "Please try again later. If the problem persists, contact us at {}",
                    support_contact()
                )
            }),
            checked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BackofficeError, BackofficeResult};
    use crate::infra::in_memory::InMemoryStore;

    #[tokio::test]
    async fn test_in_memory_store_is_healthy() {
        let report = DiagnosticsUseCase::new(Arc::new(InMemoryStore::with_mock_data()))
            .run()
            .await;

        assert!(report.is_healthy());
        assert!(report.probe_ok);
        assert_eq!(report.storage, "in-memory");
        assert_eq!(report.counts.map(|c| c.jobs), Some(3));
        assert!(report.error.is_none());
        assert!(report.action.is_none());
    }

    struct BrokenStorage;

    impl StorageDiagnostics for BrokenStorage {
        fn backend_name(&self) -> &'static str {
            "broken"
        }

        async fn record_counts(&self) -> BackofficeResult<RecordCounts> {
            Ok(RecordCounts::default())
        }

        async fn round_trip_probe(&self) -> BackofficeResult<()> {
            Err(BackofficeError::Internal(
                "disk quota exceeded on /var/lib/agency".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_failed_probe_reports_degraded_with_support_contact() {
        use axum::response::IntoResponse;

        let report = DiagnosticsUseCase::new(Arc::new(BrokenStorage)).run().await;
        assert!(!report.is_healthy());
        assert!(!report.probe_ok);

        let response = report.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["error"], "Storage check failed");
        assert!(!body.to_string().contains("disk quota"));
        assert!(body["action"].as_str().unwrap().contains(support_contact()));
    }
}
