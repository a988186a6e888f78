use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{entities::category::CategoryData, errors::AppError, AppState};

#[get("")]
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.category_handler.list().await?;

    Ok(HttpResponse::Ok().json(categories))
}

#[post("")]
pub async fn create_category(
    state: web::Data<AppState>,
    body: web::Json<CategoryData>,
) -> Result<HttpResponse, AppError> {
    let created = state.category_handler.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
pub async fn update_category(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<CategoryData>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .category_handler
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Cascades: the category's skills are removed with it.
#[delete("/{id}")]
pub async fn delete_category(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.category_handler.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
