//! Submit Inquiry Use Case
//!
//! Rate limit, bot check, validation, then store as an inbound message for
//! the admin panel.

use std::sync::Arc;

use backoffice::{Message, MessageRepository};
use chrono::{DateTime, Utc};
use platform::client::UNKNOWN_CLIENT;
use platform::rate_limit::RateLimitStore;

use crate::application::config::ContactConfig;
use crate::domain::entities::ContactForm;
use crate::domain::services::validate_form;
use crate::domain::value_objects::ReferenceId;
use crate::error::{ContactError, ContactResult};

#[derive(Debug, Clone)]
pub struct SubmitInquiryOutput {
    pub reference_id: ReferenceId,
    pub received_at: DateTime<Utc>,
    /// `false` for submissions dropped by the honeypot
    pub stored: bool,
}

pub struct SubmitInquiryUseCase<M, L>
where
    M: MessageRepository,
    L: RateLimitStore,
{
    messages: Arc<M>,
    rate_limiter: Arc<L>,
    config: Arc<ContactConfig>,
}

impl<M, L> SubmitInquiryUseCase<M, L>
where
    M: MessageRepository,
    L: RateLimitStore,
{
    pub fn new(messages: Arc<M>, rate_limiter: Arc<L>, config: Arc<ContactConfig>) -> Self {
        Self {
            messages,
            rate_limiter,
            config,
        }
    }

    /// `client_key` is the client IP, or `"unknown"`
    pub async fn execute(
        &self,
        form: ContactForm,
        client_key: &str,
    ) -> ContactResult<SubmitInquiryOutput> {
        let limit = self
            .rate_limiter
            .check_and_increment(&format!("contact:{client_key}"), &self.config.rate_limit)
            .await?;

        if !limit.allowed {
            return Err(ContactError::TooManyRequests {
                retry_after_secs: limit.retry_after_secs,
            });
        }

        let reference_id = ReferenceId::generate();

        // Bots get the same answer as people
        if form.is_bot() {
            tracing::warn!(client = %client_key, "Contact honeypot triggered, message dropped");
            return Ok(SubmitInquiryOutput {
                reference_id,
                received_at: Utc::now(),
                stored: false,
            });
        }

        let inquiry =
            validate_form(&form, &self.config.rules).map_err(ContactError::Validation)?;

        let client_ip = (client_key != UNKNOWN_CLIENT).then(|| client_key.to_string());
        let message = Message::new(inquiry.into_new_message(reference_id.to_string(), client_ip));
        self.messages.insert_message(&message).await?;

        tracing::info!(
            reference_id = %reference_id,
            message_id = %message.id,
            remaining = limit.remaining,
            "Contact message received"
        );

        Ok(SubmitInquiryOutput {
            reference_id,
            received_at: message.created_at,
            stored: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice::{InMemoryStore, MessageStatus};
    use platform::rate_limit::InMemoryRateLimitStore;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Please send us a proposal.".to_string(),
            ..Default::default()
        }
    }

    fn use_case(
        store: &InMemoryStore,
        max: u32,
    ) -> SubmitInquiryUseCase<InMemoryStore, InMemoryRateLimitStore> {
        SubmitInquiryUseCase::new(
            Arc::new(store.clone()),
            Arc::new(InMemoryRateLimitStore::new()),
            Arc::new(ContactConfig::with_hourly_limit(max)),
        )
    }

    #[tokio::test]
    async fn test_stores_new_message() {
        let store = InMemoryStore::new();
        let output = use_case(&store, 5).execute(form(), "203.0.113.9").await.unwrap();
        assert!(output.stored);

        let messages = store.list_messages(None).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].reference_id, output.reference_id.as_str());
        assert_eq!(messages[0].status, MessageStatus::New);
        assert_eq!(messages[0].client_ip.as_deref(), Some("203.0.113.9"));
    }

    #[tokio::test]
    async fn test_rate_limit_applies_per_client() {
        let store = InMemoryStore::new();
        let use_case = use_case(&store, 2);

        use_case.execute(form(), "198.51.100.1").await.unwrap();
        use_case.execute(form(), "198.51.100.1").await.unwrap();
        let err = use_case.execute(form(), "198.51.100.1").await.unwrap_err();
        assert!(matches!(err, ContactError::TooManyRequests { retry_after_secs } if retry_after_secs > 0));

        use_case.execute(form(), "198.51.100.2").await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_stored() {
        let store = InMemoryStore::new();
        let err = use_case(&store, 5)
            .execute(
                ContactForm {
                    email: "nope".to_string(),
                    ..form()
                },
                "unknown",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Validation(ref d) if d[0].field == "email"));
        assert!(store.list_messages(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_honeypot_pretends_success() {
        let store = InMemoryStore::new();
        let output = use_case(&store, 5)
            .execute(
                ContactForm {
                    honeypot: Some("buy now".to_string()),
                    ..form()
                },
                "unknown",
            )
            .await
            .unwrap();
        assert!(!output.stored);
        assert!(output.reference_id.as_str().starts_with("CT-"));
        assert!(store.list_messages(None).await.unwrap().is_empty());
    }
}
