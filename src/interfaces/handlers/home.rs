use actix_web::{get, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Forced in main so the reported uptime starts at process launch, not at
/// the first request.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

#[get("/")]
pub async fn home() -> impl Responder {
    let uptime_seconds = (Utc::now() - *START_TIME).num_seconds();

    HttpResponse::Ok().json(serde_json::json!({
        "message": "Personal portfolio API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSeconds": uptime_seconds,
    }))
}
