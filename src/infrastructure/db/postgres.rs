use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

const MAX_RETRIES: u32 = 5;

/// Connects with exponential backoff so the service survives the database
/// coming up slightly later than it does (compose, CI).
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut retry_count = 0;
    let mut wait_seconds = 1;

    loop {
        match PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("Database connection established.");
                return Ok(pool);
            }
            Err(e) if retry_count < MAX_RETRIES => {
                retry_count += 1;
                info!(
                    "Failed to connect to database (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, MAX_RETRIES, e, wait_seconds
                );

                tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
