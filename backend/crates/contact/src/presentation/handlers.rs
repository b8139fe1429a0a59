//! HTTP Handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use backoffice::MessageRepository;
use kernel::extract::AppJson;
use platform::client::{client_key, extract_client_ip};
use platform::rate_limit::RateLimitStore;

use crate::application::config::ContactConfig;
use crate::application::submit_inquiry::SubmitInquiryUseCase;
use crate::domain::entities::ContactForm;
use crate::error::ContactResult;
use crate::presentation::dto::{SubmitResponse, THANK_YOU_MESSAGE};

/// Shared state for contact handlers
pub struct ContactAppState<M, L>
where
    M: MessageRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    pub messages: Arc<M>,
    pub rate_limiter: Arc<L>,
    pub config: Arc<ContactConfig>,
}

impl<M, L> Clone for ContactAppState<M, L>
where
    M: MessageRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
            rate_limiter: self.rate_limiter.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/contact
pub async fn submit<M, L>(
    State(state): State<ContactAppState<M, L>>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    AppJson(form): AppJson<ContactForm>,
) -> ContactResult<impl IntoResponse>
where
    M: MessageRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));

    let use_case = SubmitInquiryUseCase::new(
        state.messages.clone(),
        state.rate_limiter.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(form, &client_key(client_ip)).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            reference_id: output.reference_id.into_string(),
            message: THANK_YOU_MESSAGE,
            received_at: output.received_at,
        }),
    ))
}
