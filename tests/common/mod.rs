//! Shared fixture for the integration tests: a migrated catalog database in a
//! temporary file.

use catalog_admin::db::{DbPool, establish_connection_pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Catalog schema in a throwaway SQLite file, removed when dropped.
pub struct TestDb {
    _file: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    /// Applies every catalog migration before handing out the pool.
    pub fn new() -> Self {
        let file = NamedTempFile::new().expect("temp database file");
        let path = file.path().to_str().expect("utf-8 temp path");
        let pool = establish_connection_pool(path, 2).expect("catalog pool");
        pool.get()
            .expect("pooled connection")
            .run_pending_migrations(MIGRATIONS)
            .expect("catalog migrations");
        Self { _file: file, pool }
    }

    /// Pool handle for a `DieselRepository` or raw queries.
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
