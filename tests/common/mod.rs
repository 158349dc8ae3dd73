//! Helpers for integration tests.

use diesel_migrations::MigrationHarness;
use tempfile::TempDir;

use discount_service::MIGRATIONS;
use pushkind_common::db::{DbPool, establish_connection_pool};

/// Temporary database used in integration tests.
///
/// The SQLite file and its `-shm`/`-wal` companions live in a private
/// directory that is removed on drop.
pub struct TestDb {
    pool: DbPool,
    path: std::path::PathBuf,
    _dir: TempDir, // dropped last, after the pool has closed its connections
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
