use actix_web::{get, put, web, HttpResponse};

use crate::{entities::introduction::IntroductionData, errors::AppError, AppState};

/// Lazily creates the singleton row on first read.
#[get("")]
pub async fn get_introduction(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let introduction = state.introduction_handler.get().await?;

    Ok(HttpResponse::Ok().json(introduction))
}

#[put("")]
pub async fn update_introduction(
    state: web::Data<AppState>,
    body: web::Json<IntroductionData>,
) -> Result<HttpResponse, AppError> {
    let updated = state.introduction_handler.update(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}
