use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{entities::certification::CertificationData, errors::AppError, AppState};

#[get("")]
pub async fn list_certifications(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let certifications = state.certification_handler.list().await?;

    Ok(HttpResponse::Ok().json(certifications))
}

#[post("")]
pub async fn create_certification(
    state: web::Data<AppState>,
    body: web::Json<CertificationData>,
) -> Result<HttpResponse, AppError> {
    let created = state.certification_handler.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
pub async fn update_certification(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<CertificationData>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .certification_handler
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_certification(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.certification_handler.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
