use crate::models::{CaseStudy, CaseStudyChanges, NewCaseStudy, ServiceError};
use crate::repositories::CaseStudyRepository;
use crate::services::EmailService;
use std::sync::Arc;

pub struct CaseStudyService {
    repository: Arc<dyn CaseStudyRepository>,
    email: EmailService,
}

impl CaseStudyService {
    pub fn new(repository: Arc<dyn CaseStudyRepository>, email: EmailService) -> Self {
        Self { repository, email }
    }

    pub async fn get_case_study(&self, id: i64) -> Result<Option<CaseStudy>, ServiceError> {
        self.repository.find_by_id(id).await
    }

    pub async fn get_case_study_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CaseStudy>, ServiceError> {
        self.repository.find_by_slug(slug).await
    }

    pub async fn get_case_studies(
        &self,
        limit: Option<u32>,
        featured: Option<bool>,
    ) -> Result<Vec<CaseStudy>, ServiceError> {
        self.repository.list(limit, featured).await
    }

    /// Persists the case study and fires a notification without waiting for it.
    pub async fn create_case_study(
        &self,
        case_study: NewCaseStudy,
    ) -> Result<CaseStudy, ServiceError> {
        let created = self.repository.create(case_study).await?;
        tracing::info!(id = created.id, slug = %created.slug, "Created case study");

        let email = self.email.clone();
        let notify = created.clone();
        tokio::spawn(async move {
            email.send_case_study_notification(&notify).await;
        });

        Ok(created)
    }

    pub async fn update_case_study(
        &self,
        id: i64,
        changes: CaseStudyChanges,
    ) -> Result<CaseStudy, ServiceError> {
        let updated = self
            .repository
            .update(id, changes)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Case study not found".to_string()))?;

        tracing::info!(id, "Updated case study");
        Ok(updated)
    }

    pub async fn delete_case_study(&self, id: i64) -> Result<bool, ServiceError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            tracing::info!(id, "Deleted case study");
        }
        Ok(deleted)
    }
}
