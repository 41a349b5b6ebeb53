use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::auth::SessionStore;
use crate::middleware::auth::require_admin;
use crate::models::{CaseStudyInput, CaseStudyQuery, ServiceError};
use crate::services::CaseStudyService;

// =============================================================================
// PUBLIC
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/case-studies",
    params(CaseStudyQuery),
    responses(
        (status = 200, description = "Case studies, newest first", body = [CaseStudy])
    ),
    security()
)]
pub async fn list_case_studies(
    case_study_service: web::Data<CaseStudyService>,
    query: web::Query<CaseStudyQuery>,
) -> Result<HttpResponse, ServiceError> {
    let case_studies = case_study_service
        .get_case_studies(query.limit, query.featured)
        .await?;

    Ok(HttpResponse::Ok().json(case_studies))
}

#[utoipa::path(
    get,
    path = "/api/case-studies/{slug}",
    params(
        ("slug" = String, Path, description = "Case study slug")
    ),
    responses(
        (status = 200, description = "Case study", body = CaseStudy),
        (status = 404, description = "Case study not found", body = ErrorResponse)
    ),
    security()
)]
pub async fn get_case_study_by_slug(
    case_study_service: web::Data<CaseStudyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let slug = path.into_inner();

    let case_study = case_study_service
        .get_case_study_by_slug(&slug)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Case study not found".to_string()))?;

    Ok(HttpResponse::Ok().json(case_study))
}

// =============================================================================
// ADMIN
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/admin/case-studies",
    params(CaseStudyQuery),
    responses(
        (status = 200, description = "Case studies, newest first", body = [CaseStudy]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn admin_list_case_studies(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    case_study_service: web::Data<CaseStudyService>,
    query: web::Query<CaseStudyQuery>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let case_studies = case_study_service
        .get_case_studies(query.limit, query.featured)
        .await?;

    Ok(HttpResponse::Ok().json(case_studies))
}

#[utoipa::path(
    get,
    path = "/api/admin/case-studies/{id}",
    params(
        ("id" = i64, Path, description = "Case study ID")
    ),
    responses(
        (status = 200, description = "Case study", body = CaseStudy),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Case study not found", body = ErrorResponse)
    )
)]
pub async fn admin_get_case_study(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    case_study_service: web::Data<CaseStudyService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let case_study = case_study_service
        .get_case_study(path.into_inner())
        .await?
        .ok_or_else(|| ServiceError::NotFound("Case study not found".to_string()))?;

    Ok(HttpResponse::Ok().json(case_study))
}

#[utoipa::path(
    post,
    path = "/api/admin/case-studies",
    request_body = CaseStudyInput,
    responses(
        (status = 201, description = "Case study created", body = CaseStudy),
        (status = 400, description = "Invalid case study data", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_case_study(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    case_study_service: web::Data<CaseStudyService>,
    form: web::Json<CaseStudyInput>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let new_case_study = form
        .into_inner()
        .into_new()
        .map_err(|errors| ServiceError::invalid("Invalid case study data", errors))?;

    let created = case_study_service.create_case_study(new_case_study).await?;

    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    put,
    path = "/api/admin/case-studies/{id}",
    params(
        ("id" = i64, Path, description = "Case study ID")
    ),
    request_body = CaseStudyInput,
    responses(
        (status = 200, description = "Case study updated", body = CaseStudy),
        (status = 400, description = "Invalid case study data", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Case study not found", body = ErrorResponse)
    )
)]
pub async fn update_case_study(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    case_study_service: web::Data<CaseStudyService>,
    path: web::Path<i64>,
    form: web::Json<CaseStudyInput>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    let changes = form
        .into_inner()
        .into_changes()
        .map_err(|errors| ServiceError::invalid("Invalid case study data", errors))?;

    let updated = case_study_service
        .update_case_study(path.into_inner(), changes)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/admin/case-studies/{id}",
    params(
        ("id" = i64, Path, description = "Case study ID")
    ),
    responses(
        (status = 204, description = "Case study deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Case study not found", body = ErrorResponse)
    )
)]
pub async fn delete_case_study(
    req: HttpRequest,
    sessions: web::Data<SessionStore>,
    case_study_service: web::Data<CaseStudyService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &sessions).await?;

    if case_study_service.delete_case_study(path.into_inner()).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ServiceError::NotFound("Case study not found".to_string()))
    }
}
