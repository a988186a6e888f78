use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{entities::work_experience::WorkExperienceData, errors::AppError, AppState};

#[get("")]
pub async fn list_experiences(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let experiences = state.experience_handler.list().await?;

    Ok(HttpResponse::Ok().json(experiences))
}

#[get("/{id}")]
pub async fn get_experience(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let experience = state.experience_handler.get_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(experience))
}

#[post("")]
pub async fn create_experience(
    state: web::Data<AppState>,
    body: web::Json<WorkExperienceData>,
) -> Result<HttpResponse, AppError> {
    let created = state.experience_handler.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
pub async fn update_experience(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<WorkExperienceData>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .experience_handler
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_experience(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.experience_handler.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
