use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{entities::project::ProjectData, errors::AppError, AppState};

#[get("")]
pub async fn list_projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let projects = state.project_handler.list().await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[get("/{id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let project = state.project_handler.get_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(project))
}

#[post("")]
pub async fn create_project(
    state: web::Data<AppState>,
    body: web::Json<ProjectData>,
) -> Result<HttpResponse, AppError> {
    let created = state.project_handler.create(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(created))
}

#[put("/{id}")]
pub async fn update_project(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<ProjectData>,
) -> Result<HttpResponse, AppError> {
    let updated = state
        .project_handler
        .update(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.project_handler.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
