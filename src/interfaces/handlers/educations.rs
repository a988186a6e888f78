use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{entities::education::EducationData, errors::AppError, AppState};

#[get("")]
pub async fn list_educations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let educations = state.education_handler.list().await?;

    Ok(HttpResponse::Ok().json(educations))
}

#[post("")]
pub async fn create_education(
    state: web::Data<AppState>,
    body: web::Json<EducationData>,
) -> Result<HttpResponse, AppError> {
    let created = state.education_handler.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
pub async fn update_education(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<EducationData>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .education_handler
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_education(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.education_handler.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
