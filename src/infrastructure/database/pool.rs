use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Builds a pool that connects on first use.
///
/// Startup must survive an unreachable store, so no connection is attempted
/// here; only a malformed URL fails.
pub fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)?;
    Ok(pool)
}
