use actix_cors::Cors;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use portfolio_api::{
    db::postgres::create_pool, graceful_shutdown::shutdown_signal, handlers::home::START_TIME,
    middlewares::request_log::RequestLog, routes::configure_routes, settings::AppConfig, AppState,
};
use once_cell::sync::Lazy;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    Lazy::force(&START_TIME);

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .context("failed to create database connection pool")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    let app_state = web::Data::new(AppState::new(pool));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_origins = config.cors_origins();
    let worker_count = config.worker_count;

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);
        for origin in &cors_origins {
            cors = if origin == "*" {
                cors.allow_any_origin()
            } else {
                cors.allowed_origin(origin)
            };
        }

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(RequestLog)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(configure_routes)
    })
    .workers(worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res.map_err(Into::into),
        _ = shutdown_signal() => Ok(()),
    }
}
