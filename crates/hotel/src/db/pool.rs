use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Duration;

use crate::db::schema;

pub type DbPool = Pool<SqliteConnectionManager>;

/// How long a writer waits for another connection's write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a read-write SQLite connection pool, creating the file if needed.
///
/// Every connection the pool opens runs the schema migration first.
pub fn open_pool(path: &Path, max_size: u32) -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::file(path).with_init(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        schema::migrate(conn)
    });
    let pool = Pool::builder().max_size(max_size).build(manager)?;
    tracing::info!("DB pool ready: {} (max {max_size})", path.display());
    Ok(pool)
}

/// Single-connection in-memory pool; the connection owns the whole database.
pub fn open_memory_pool() -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::memory().with_init(|conn| schema::migrate(conn));
    Pool::builder().max_size(1).build(manager)
}
