use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{entities::skill::SkillData, errors::AppError, AppState};

#[get("")]
pub async fn list_skills(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let skills = state.skill_handler.list().await?;

    Ok(HttpResponse::Ok().json(skills))
}

#[post("")]
pub async fn create_skill(
    state: web::Data<AppState>,
    body: web::Json<SkillData>,
) -> Result<HttpResponse, AppError> {
    let created = state.skill_handler.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
pub async fn update_skill(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<SkillData>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .skill_handler
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_skill(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.skill_handler.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
