use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{FieldError, Validator};

const COVER_IMAGE_MIN_LEN: usize = 5;

/// Database entity representing a portfolio case study
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub description: String,
    pub cover_image: String,
    pub client_name: Option<String>,
    pub client_industry: Option<String>,
    pub duration: Option<String>,
    #[sqlx(json)]
    pub services: Vec<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
    #[sqlx(json)]
    pub images: Vec<String>,
    #[sqlx(json)]
    pub technologies: Vec<String>,
    pub testimonial: Option<String>,
    pub testimonial_author: Option<String>,
    pub testimonial_role: Option<String>,
    pub featured: bool,
    pub website_url: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw case study payload as it arrives over HTTP. Every field is optional
/// here so that validation can report all missing fields together.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub client_name: Option<String>,
    pub client_industry: Option<String>,
    pub duration: Option<String>,
    pub services: Option<Vec<String>>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
    pub images: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub testimonial: Option<String>,
    pub testimonial_author: Option<String>,
    pub testimonial_role: Option<String>,
    pub featured: Option<bool>,
    pub website_url: Option<String>,
}

/// Validated case study ready for insertion
#[derive(Debug, Clone)]
pub struct NewCaseStudy {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub description: String,
    pub cover_image: String,
    pub client_name: Option<String>,
    pub client_industry: Option<String>,
    pub duration: Option<String>,
    pub services: Vec<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
    pub images: Vec<String>,
    pub technologies: Vec<String>,
    pub testimonial: Option<String>,
    pub testimonial_author: Option<String>,
    pub testimonial_role: Option<String>,
    pub featured: bool,
    pub website_url: Option<String>,
}

/// Validated partial update. `None` leaves the stored column unchanged.
#[derive(Debug, Clone, Default)]
pub struct CaseStudyChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub client_name: Option<String>,
    pub client_industry: Option<String>,
    pub duration: Option<String>,
    pub services: Option<Vec<String>>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
    pub images: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub testimonial: Option<String>,
    pub testimonial_author: Option<String>,
    pub testimonial_role: Option<String>,
    pub featured: Option<bool>,
    pub website_url: Option<String>,
}

impl CaseStudyInput {
    /// Check the payload for creation: title, slug, excerpt, description,
    /// cover image and at least one technology are mandatory.
    pub fn into_new(self) -> Result<NewCaseStudy, Vec<FieldError>> {
        let mut v = Validator::new();

        let new = NewCaseStudy {
            title: v.required("title", self.title, 1, "Title is required"),
            slug: v.required("slug", self.slug, 1, "Slug is required"),
            excerpt: v.required("excerpt", self.excerpt, 1, "Excerpt is required"),
            description: v.required("description", self.description, 1, "Description is required"),
            cover_image: v.required(
                "coverImage",
                self.cover_image,
                COVER_IMAGE_MIN_LEN,
                "Cover image URL must be at least 5 characters",
            ),
            client_name: self.client_name,
            client_industry: self.client_industry,
            duration: self.duration,
            services: self.services.unwrap_or_default(),
            challenge: self.challenge,
            solution: self.solution,
            result: self.result,
            images: self.images.unwrap_or_default(),
            technologies: v.required_list(
                "technologies",
                self.technologies,
                1,
                "At least one technology is required",
            ),
            testimonial: self.testimonial,
            testimonial_author: self.testimonial_author,
            testimonial_role: self.testimonial_role,
            featured: self.featured.unwrap_or(false),
            website_url: self.website_url,
        };

        v.finish(new)
    }

    /// Check the payload for a partial update: the same rules as creation
    /// apply, but only to the fields that are present.
    pub fn into_changes(self) -> Result<CaseStudyChanges, Vec<FieldError>> {
        let mut v = Validator::new();

        let changes = CaseStudyChanges {
            title: v.optional("title", self.title, 1, "Title is required"),
            slug: v.optional("slug", self.slug, 1, "Slug is required"),
            excerpt: v.optional("excerpt", self.excerpt, 1, "Excerpt is required"),
            description: v.optional("description", self.description, 1, "Description is required"),
            cover_image: v.optional(
                "coverImage",
                self.cover_image,
                COVER_IMAGE_MIN_LEN,
                "Cover image URL must be at least 5 characters",
            ),
            client_name: self.client_name,
            client_industry: self.client_industry,
            duration: self.duration,
            services: self.services,
            challenge: self.challenge,
            solution: self.solution,
            result: self.result,
            images: self.images,
            technologies: v.optional_list(
                "technologies",
                self.technologies,
                1,
                "At least one technology is required",
            ),
            testimonial: self.testimonial,
            testimonial_author: self.testimonial_author,
            testimonial_role: self.testimonial_role,
            featured: self.featured,
            website_url: self.website_url,
        };

        v.finish(changes)
    }
}
