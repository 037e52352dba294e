use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::surveys::models::Survey;
use crate::modules::surveys::services::survey_service::SurveyService;

/// Create a new survey
/// POST /surveys
pub async fn create_survey(
    service: web::Data<Arc<SurveyService>>,
    request: web::Json<Survey>,
) -> Result<HttpResponse, AppError> {
    let survey = service.create_survey(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(survey))
}

/// List all surveys
/// GET /surveys
pub async fn list_surveys(
    service: web::Data<Arc<SurveyService>>,
) -> Result<HttpResponse, AppError> {
    let surveys = service.list_surveys().await?;

    Ok(HttpResponse::Ok().json(surveys))
}

/// Get survey by ID
/// GET /surveys/{id}
pub async fn get_survey(
    service: web::Data<Arc<SurveyService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match service.get_survey(id).await? {
        Some(survey) => Ok(HttpResponse::Ok().json(survey)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": {
                "message": format!("Survey Not Found: {}", id),
                "code": 404,
            }
        }))),
    }
}

/// Update an existing survey
/// PUT /surveys/{id}
pub async fn update_survey(
    service: web::Data<Arc<SurveyService>>,
    path: web::Path<i64>,
    request: web::Json<Survey>,
) -> Result<HttpResponse, AppError> {
    let survey = service
        .update_survey(request.into_inner(), path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(survey))
}

/// Delete survey by ID
/// DELETE /surveys/{id}
pub async fn delete_survey(
    service: web::Data<Arc<SurveyService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_survey(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure survey routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/surveys")
            .route("", web::post().to(create_survey))
            .route("", web::get().to(list_surveys))
            .route("/{id}", web::get().to(get_survey))
            .route("/{id}", web::put().to(update_survey))
            .route("/{id}", web::delete().to(delete_survey)),
    );
}
