use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{entities::activity::ActivityData, errors::AppError, AppState};

#[get("")]
pub async fn list_activities(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let activities = state.activity_handler.list().await?;

    Ok(HttpResponse::Ok().json(activities))
}

#[post("")]
pub async fn create_activity(
    state: web::Data<AppState>,
    body: web::Json<ActivityData>,
) -> Result<HttpResponse, AppError> {
    let created = state.activity_handler.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
pub async fn update_activity(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<ActivityData>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .activity_handler
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_activity(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.activity_handler.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
