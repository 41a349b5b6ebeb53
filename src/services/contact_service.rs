use crate::models::{ContactMessage, NewContactMessage, ServiceError};
use crate::repositories::ContactRepository;
use crate::services::EmailService;
use std::sync::Arc;

pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
    email: EmailService,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>, email: EmailService) -> Self {
        Self { repository, email }
    }

    /// Stores the message, then tries to email it. Returns the stored row and
    /// whether the notification went out; a failed send does not undo the write.
    pub async fn submit(
        &self,
        message: NewContactMessage,
    ) -> Result<(ContactMessage, bool), ServiceError> {
        let saved = self.repository.create(message).await?;
        tracing::info!(id = saved.id, "Stored contact message");

        let email_sent = self.email.send_contact_notification(&saved).await;
        Ok((saved, email_sent))
    }

    pub async fn get_contact_messages(
        &self,
        limit: Option<u32>,
        unread_only: bool,
    ) -> Result<Vec<ContactMessage>, ServiceError> {
        self.repository.list(limit, unread_only).await
    }

    pub async fn get_contact_message(&self, id: i64) -> Result<Option<ContactMessage>, ServiceError> {
        self.repository.find_by_id(id).await
    }

    pub async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ServiceError> {
        self.repository.create(message).await
    }

    pub async fn mark_message_as_read(&self, id: i64) -> Result<bool, ServiceError> {
        self.repository.mark_read(id).await
    }

    pub async fn delete_contact_message(&self, id: i64) -> Result<bool, ServiceError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(id, "Deleted contact message");
        }
        Ok(deleted)
    }
}
