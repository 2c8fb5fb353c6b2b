//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! cafe-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `CAFE_DATABASE_URL` - `SQLite` connection string (default: `sqlite:cafes.db`)

use cafe_api_server::config::ServerConfig;
use cafe_api_server::db;
use tracing::info;

/// Run the embedded migrations against the configured database.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the database cannot be
/// opened, or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    info!(url = %config.database_url, "Connecting to database");
    let pool = db::create_pool(&config.database_url).await?;

    info!("Running migrations");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    info!("Migrations complete");
    Ok(())
}
