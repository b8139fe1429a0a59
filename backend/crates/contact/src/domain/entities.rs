//! Contact form as submitted and as accepted

use backoffice::NewMessage;
use serde::Deserialize;

/// Raw form body. Absent fields deserialize as empty and are reported by
/// validation rather than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub budget: Option<String>,
    pub service: Option<String>,
    pub message: String,
    /// Hidden field; humans leave it empty
    pub honeypot: Option<String>,
}

impl ContactForm {
    pub fn is_bot(&self) -> bool {
        self.honeypot.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

/// Sanitized form that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub budget: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

impl Inquiry {
    pub fn into_new_message(self, reference_id: String, client_ip: Option<String>) -> NewMessage {
        NewMessage {
            reference_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            website: self.website,
            budget: self.budget,
            service: self.service,
            body: self.message,
            client_ip,
        }
    }
}
