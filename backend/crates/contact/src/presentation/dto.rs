//! Response bodies

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const THANK_YOU_MESSAGE: &str =
    "Thank you for reaching out! We'll get back to you within 1-2 business days.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub reference_id: String,
    pub message: &'static str,
    pub received_at: DateTime<Utc>,
}
