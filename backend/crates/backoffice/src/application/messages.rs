//! Messages Use Case
//!
//! Admin view of contact form submissions. Messages are created by the
//! contact crate through [`MessageRepository::insert_message`].

use std::sync::Arc;

use kernel::id::MessageId;

use crate::domain::entities::Message;
use crate::domain::repository::MessageRepository;
use crate::domain::value_objects::MessageStatus;
use crate::error::{BackofficeError, BackofficeResult};

pub struct MessagesUseCase<R>
where
    R: MessageRepository,
{
    repo: Arc<R>,
}

impl<R> MessagesUseCase<R>
where
    R: MessageRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, status: Option<MessageStatus>) -> BackofficeResult<Vec<Message>> {
        self.repo.list_messages(status).await
    }

    pub async fn get(&self, id: MessageId) -> BackofficeResult<Message> {
        self.repo
            .find_message(id)
            .await?
            .ok_or(BackofficeError::NotFound("Message"))
    }

    pub async fn update_status(
        &self,
        id: MessageId,
        status: MessageStatus,
    ) -> BackofficeResult<Message> {
        let mut message = self.get(id).await?;
        let previous = message.status;
        message.status = status;
        message.touch();

        self.repo.update_message(&message).await?;
        tracing::info!(message_id = %id, from = %previous, to = %status, "Message status changed");

        Ok(message)
    }

    pub async fn delete(&self, id: MessageId) -> BackofficeResult<()> {
        if !self.repo.delete_message(id).await? {
            return Err(BackofficeError::NotFound("Message"));
        }
        tracing::info!(message_id = %id, "Message deleted");
        Ok(())
    }
}
