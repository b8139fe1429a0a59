//! Extractors whose rejections render as [`AppError`] JSON instead of plain text

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::app_error::AppError;

/// `axum::Json` with problem-details rejections
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` with problem-details rejections
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// `axum::extract::Path` with problem-details rejections
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
