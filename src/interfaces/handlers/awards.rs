use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{entities::award::AwardData, errors::AppError, AppState};

#[get("")]
pub async fn list_awards(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let awards = state.award_handler.list().await?;

    Ok(HttpResponse::Ok().json(awards))
}

#[post("")]
pub async fn create_award(
    state: web::Data<AppState>,
    body: web::Json<AwardData>,
) -> Result<HttpResponse, AppError> {
    let created = state.award_handler.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
pub async fn update_award(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<AwardData>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .award_handler
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_award(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.award_handler.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
