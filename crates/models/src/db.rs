use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

pub use configs::DatabaseConfig;

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    // An in-memory sqlite database lives exactly as long as its connection.
    if cfg.idle_timeout_secs > 0 {
        opt.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs));
    }
    if cfg.max_lifetime_secs > 0 {
        opt.max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }

    let db = Database::connect(opt).await?;
    if cfg.is_sqlite() {
        // sqlite only enforces foreign keys (and thus cascades) when asked to
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

/// Pool settings for a private in-memory sqlite database (tests, demos).
pub fn in_memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        idle_timeout_secs: 0,
        max_lifetime_secs: 0,
        ..Default::default()
    }
}
