//! HTTP Handlers

use std::sync::Arc;

use admin::{AdminContext, AdminError, AdminGuard, Permission};
use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::extract::{AppJson, AppPath, AppQuery};
use kernel::id::{BookingId, JobId, MessageId};

use crate::application::{
    BookingsUseCase, CareersUseCase, DiagnosticsReport, DiagnosticsUseCase, MessagesUseCase,
};
use crate::domain::entities::{Booking, JobPosting, Message};
use crate::domain::repository::{
    BookingRepository, JobRepository, MessageRepository, StorageDiagnostics,
};
use crate::error::BackofficeResult;
use crate::presentation::dto::{
    BookingListQuery, CreateBookingRequest, CreateJobRequest, JobListQuery, ListResponse,
    MessageListQuery, UpdateBookingRequest, UpdateJobRequest, UpdateMessageRequest,
};

/// Everything the back-office routers need from storage
pub trait BackofficeStore:
    BookingRepository + JobRepository + MessageRepository + StorageDiagnostics + Send + Sync + 'static
{
}

impl<T> BackofficeStore for T where
    T: BookingRepository
        + JobRepository
        + MessageRepository
        + StorageDiagnostics
        + Send
        + Sync
        + 'static
{
}

/// Shared state for back-office handlers
pub struct BackofficeState<S: BackofficeStore> {
    pub store: Arc<S>,
    pub guard: AdminGuard,
}

impl<S: BackofficeStore> BackofficeState<S> {
    pub fn new(store: Arc<S>, guard: AdminGuard) -> Self {
        Self { store, guard }
    }
}

// Manual impl: `S` itself need not be Clone
impl<S: BackofficeStore> Clone for BackofficeState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<S: BackofficeStore> FromRef<BackofficeState<S>> for AdminGuard {
    fn from_ref(state: &BackofficeState<S>) -> Self {
        state.guard.clone()
    }
}

// ============================================================================
// Bookings
// ============================================================================

/// POST /api/bookings (public)
pub async fn create_booking<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    AppJson(req): AppJson<CreateBookingRequest>,
) -> BackofficeResult<impl IntoResponse> {
    let booking = BookingsUseCase::new(state.store.clone())
        .create(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings?status=
pub async fn list_bookings<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppQuery(query): AppQuery<BookingListQuery>,
) -> BackofficeResult<Json<ListResponse<Booking>>> {
    admin.require(Permission::ManageBookings)?;

    let bookings = BookingsUseCase::new(state.store.clone())
        .list(query.status)
        .await?;

    Ok(Json(bookings.into()))
}

/// GET /api/bookings/{id}
pub async fn get_booking<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppPath(id): AppPath<BookingId>,
) -> BackofficeResult<Json<Booking>> {
    admin.require(Permission::ManageBookings)?;

    let booking = BookingsUseCase::new(state.store.clone()).get(id).await?;
    Ok(Json(booking))
}

/// PUT /api/bookings/{id}
pub async fn update_booking<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppPath(id): AppPath<BookingId>,
    AppJson(req): AppJson<UpdateBookingRequest>,
) -> BackofficeResult<Json<Booking>> {
    admin.require(Permission::ManageBookings)?;

    let booking = BookingsUseCase::new(state.store.clone())
        .update(id, req.into())
        .await?;
    Ok(Json(booking))
}

/// DELETE /api/bookings/{id}
pub async fn delete_booking<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppPath(id): AppPath<BookingId>,
) -> BackofficeResult<StatusCode> {
    admin.require(Permission::ManageBookings)?;

    BookingsUseCase::new(state.store.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Careers
// ============================================================================

/// GET /api/careers?includeInactive=
///
/// Public listing shows active postings. Inactive ones need an admin who
/// manages careers.
pub async fn list_jobs<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: Option<AdminContext>,
    AppQuery(query): AppQuery<JobListQuery>,
) -> BackofficeResult<Json<ListResponse<JobPosting>>> {
    if query.include_inactive {
        admin
            .as_ref()
            .ok_or(AdminError::SessionInvalid)?
            .require(Permission::ManageCareers)?;
    }

    let jobs = CareersUseCase::new(state.store.clone())
        .list(query.include_inactive)
        .await?;

    Ok(Json(jobs.into()))
}

/// GET /api/careers/{key}, where key is an ID or a slug
pub async fn get_job<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: Option<AdminContext>,
    AppPath(key): AppPath<String>,
) -> BackofficeResult<Json<JobPosting>> {
    let include_inactive = admin.is_some_and(|ctx| ctx.0.has_permission(Permission::ManageCareers));

    let job = CareersUseCase::new(state.store.clone())
        .get(&key, include_inactive)
        .await?;
    Ok(Json(job))
}

/// POST /api/careers
pub async fn create_job<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppJson(req): AppJson<CreateJobRequest>,
) -> BackofficeResult<impl IntoResponse> {
    admin.require(Permission::ManageCareers)?;

    let job = CareersUseCase::new(state.store.clone())
        .create(req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/careers/{id}
pub async fn update_job<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppPath(id): AppPath<JobId>,
    AppJson(req): AppJson<UpdateJobRequest>,
) -> BackofficeResult<Json<JobPosting>> {
    admin.require(Permission::ManageCareers)?;

    let job = CareersUseCase::new(state.store.clone())
        .update(id, req.into())
        .await?;
    Ok(Json(job))
}

/// DELETE /api/careers/{id}
pub async fn delete_job<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppPath(id): AppPath<JobId>,
) -> BackofficeResult<StatusCode> {
    admin.require(Permission::ManageCareers)?;

    CareersUseCase::new(state.store.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Messages (behind `require_admin_session`)
// ============================================================================

/// GET /api/messages?status=
pub async fn list_messages<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppQuery(query): AppQuery<MessageListQuery>,
) -> BackofficeResult<Json<ListResponse<Message>>> {
    admin.require(Permission::ManageMessages)?;

    let messages = MessagesUseCase::new(state.store.clone())
        .list(query.status)
        .await?;
    Ok(Json(messages.into()))
}

/// GET /api/messages/{id}
pub async fn get_message<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppPath(id): AppPath<MessageId>,
) -> BackofficeResult<Json<Message>> {
    admin.require(Permission::ManageMessages)?;

    let message = MessagesUseCase::new(state.store.clone()).get(id).await?;
    Ok(Json(message))
}

/// PUT /api/messages/{id}
pub async fn update_message<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppPath(id): AppPath<MessageId>,
    AppJson(req): AppJson<UpdateMessageRequest>,
) -> BackofficeResult<Json<Message>> {
    admin.require(Permission::ManageMessages)?;

    let message = MessagesUseCase::new(state.store.clone())
        .update_status(id, req.status)
        .await?;
    Ok(Json(message))
}

/// DELETE /api/messages/{id}
pub async fn delete_message<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
    AppPath(id): AppPath<MessageId>,
) -> BackofficeResult<StatusCode> {
    admin.require(Permission::ManageMessages)?;

    MessagesUseCase::new(state.store.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Diagnostics
// ============================================================================

/// GET /api/test-db
pub async fn storage_diagnostics<S: BackofficeStore>(
    State(state): State<BackofficeState<S>>,
    admin: AdminContext,
) -> BackofficeResult<impl IntoResponse> {
    let session = admin.require(Permission::ViewDiagnostics)?;
    tracing::debug!(admin = %session.username, "Running storage diagnostics");

    Ok(DiagnosticsUseCase::new(state.store.clone()).run().await)
}

impl IntoResponse for DiagnosticsReport {
    fn into_response(self) -> Response {
        let status = if self.is_healthy() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(self)).into_response()
    }
}
