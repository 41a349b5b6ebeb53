use crate::models::{ContactMessage, NewContactMessage, ServiceError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Newest first. `unread_only` and `limit` apply independently.
    async fn list(
        &self,
        limit: Option<u32>,
        unread_only: bool,
    ) -> Result<Vec<ContactMessage>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ContactMessage>, ServiceError>;
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, ServiceError>;
    /// Returns whether the message exists; already-read messages still count.
    async fn mark_read(&self, id: i64) -> Result<bool, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list(
        &self,
        limit: Option<u32>,
        unread_only: bool,
    ) -> Result<Vec<ContactMessage>, ServiceError> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, name, email, subject, message, read, created_at FROM contact_messages",
        );

        if unread_only {
            query.push(" WHERE read = ").push_bind(false);
        }

        query.push(" ORDER BY created_at DESC, id DESC");

        if let Some(limit) = limit {
            query.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let messages = query
            .build_query_as::<ContactMessage>()
            .fetch_all(&self.pool)
            .await?;

        Ok(messages)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContactMessage>, ServiceError> {
        let message = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, email, subject, message, read, created_at FROM contact_messages WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, ServiceError> {
        let created = sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (name, email, subject, message, read, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, name, email, subject, message, read, created_at",
        )
        .bind(message.name)
        .bind(message.email)
        .bind(message.subject)
        .bind(message.message)
        .bind(false)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn mark_read(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("UPDATE contact_messages SET read = ? WHERE id = ?")
            .bind(true)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
