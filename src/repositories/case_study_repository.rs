use crate::models::{CaseStudy, CaseStudyChanges, NewCaseStudy, ServiceError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{types::Json, QueryBuilder, Sqlite, SqlitePool};

const CASE_STUDY_COLUMNS: &str = "id, title, slug, excerpt, description, cover_image, client_name, \
     client_industry, duration, services, challenge, solution, result, images, technologies, \
     testimonial, testimonial_author, testimonial_role, featured, website_url, publish_date, \
     created_at, updated_at";

#[async_trait]
pub trait CaseStudyRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<CaseStudy>, ServiceError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<CaseStudy>, ServiceError>;
    /// Newest first by publish date. `featured` and `limit` apply independently.
    async fn list(
        &self,
        limit: Option<u32>,
        featured: Option<bool>,
    ) -> Result<Vec<CaseStudy>, ServiceError>;
    async fn create(&self, case_study: NewCaseStudy) -> Result<CaseStudy, ServiceError>;
    /// Returns `None` when no row has this id.
    async fn update(
        &self,
        id: i64,
        changes: CaseStudyChanges,
    ) -> Result<Option<CaseStudy>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqliteCaseStudyRepository {
    pool: SqlitePool,
}

impl SqliteCaseStudyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CaseStudyRepository for SqliteCaseStudyRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<CaseStudy>, ServiceError> {
        let case_study = sqlx::query_as::<_, CaseStudy>(&format!(
            "SELECT {CASE_STUDY_COLUMNS} FROM case_studies WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(case_study)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<CaseStudy>, ServiceError> {
        let case_study = sqlx::query_as::<_, CaseStudy>(&format!(
            "SELECT {CASE_STUDY_COLUMNS} FROM case_studies WHERE slug = ?"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(case_study)
    }

    async fn list(
        &self,
        limit: Option<u32>,
        featured: Option<bool>,
    ) -> Result<Vec<CaseStudy>, ServiceError> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT ");
        query.push(CASE_STUDY_COLUMNS).push(" FROM case_studies");

        if let Some(featured) = featured {
            query.push(" WHERE featured = ").push_bind(featured);
        }

        query.push(" ORDER BY publish_date DESC, id DESC");

        if let Some(limit) = limit {
            query.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let case_studies = query
            .build_query_as::<CaseStudy>()
            .fetch_all(&self.pool)
            .await?;

        Ok(case_studies)
    }

    async fn create(&self, case_study: NewCaseStudy) -> Result<CaseStudy, ServiceError> {
        let now = Utc::now();

        let created = sqlx::query_as::<_, CaseStudy>(&format!(
            "INSERT INTO case_studies (title, slug, excerpt, description, cover_image, client_name, \
             client_industry, duration, services, challenge, solution, result, images, technologies, \
             testimonial, testimonial_author, testimonial_role, featured, website_url, publish_date, \
             created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {CASE_STUDY_COLUMNS}"
        ))
        .bind(case_study.title)
        .bind(case_study.slug)
        .bind(case_study.excerpt)
        .bind(case_study.description)
        .bind(case_study.cover_image)
        .bind(case_study.client_name)
        .bind(case_study.client_industry)
        .bind(case_study.duration)
        .bind(Json(case_study.services))
        .bind(case_study.challenge)
        .bind(case_study.solution)
        .bind(case_study.result)
        .bind(Json(case_study.images))
        .bind(Json(case_study.technologies))
        .bind(case_study.testimonial)
        .bind(case_study.testimonial_author)
        .bind(case_study.testimonial_role)
        .bind(case_study.featured)
        .bind(case_study.website_url)
        .bind(now)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(
        &self,
        id: i64,
        changes: CaseStudyChanges,
    ) -> Result<Option<CaseStudy>, ServiceError> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE case_studies SET ");

        // publish_date and created_at are never touched here
        let mut set = query.separated(", ");
        set.push("updated_at = ").push_bind_unseparated(Utc::now());
        if let Some(title) = changes.title {
            set.push("title = ").push_bind_unseparated(title);
        }
        if let Some(slug) = changes.slug {
            set.push("slug = ").push_bind_unseparated(slug);
        }
        if let Some(excerpt) = changes.excerpt {
            set.push("excerpt = ").push_bind_unseparated(excerpt);
        }
        if let Some(description) = changes.description {
            set.push("description = ").push_bind_unseparated(description);
        }
        if let Some(cover_image) = changes.cover_image {
            set.push("cover_image = ").push_bind_unseparated(cover_image);
        }
        if let Some(client_name) = changes.client_name {
            set.push("client_name = ").push_bind_unseparated(client_name);
        }
        if let Some(client_industry) = changes.client_industry {
            set.push("client_industry = ").push_bind_unseparated(client_industry);
        }
        if let Some(duration) = changes.duration {
            set.push("duration = ").push_bind_unseparated(duration);
        }
        if let Some(services) = changes.services {
            set.push("services = ").push_bind_unseparated(Json(services));
        }
        if let Some(challenge) = changes.challenge {
            set.push("challenge = ").push_bind_unseparated(challenge);
        }
        if let Some(solution) = changes.solution {
            set.push("solution = ").push_bind_unseparated(solution);
        }
        if let Some(result) = changes.result {
            set.push("result = ").push_bind_unseparated(result);
        }
        if let Some(images) = changes.images {
            set.push("images = ").push_bind_unseparated(Json(images));
        }
        if let Some(technologies) = changes.technologies {
            set.push("technologies = ").push_bind_unseparated(Json(technologies));
        }
        if let Some(testimonial) = changes.testimonial {
            set.push("testimonial = ").push_bind_unseparated(testimonial);
        }
        if let Some(author) = changes.testimonial_author {
            set.push("testimonial_author = ").push_bind_unseparated(author);
        }
        if let Some(role) = changes.testimonial_role {
            set.push("testimonial_role = ").push_bind_unseparated(role);
        }
        if let Some(featured) = changes.featured {
            set.push("featured = ").push_bind_unseparated(featured);
        }
        if let Some(website_url) = changes.website_url {
            set.push("website_url = ").push_bind_unseparated(website_url);
        }

        query.push(" WHERE id = ").push_bind(id);
        query.push(" RETURNING ").push(CASE_STUDY_COLUMNS);

        let updated = query
            .build_query_as::<CaseStudy>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM case_studies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
