//! Persistence layer. Entities live in [`entity`], each implementing [`Repository`] plus its own
//! lookups; all of them go through a [`ModelManager`].

mod database;
pub use database::{DbConnection, connect_options, run_migrations};

pub mod entity;

mod error;
pub use error::{DatabaseError, DatabaseResult};

mod repo;
pub use repo::{Repository, ResourceType, ResourceTyped};

use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct ModelManager {
    db: DbConnection,
}

impl ModelManager {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DbConnection {
        &self.db
    }

    /// Pool every query runs against. A connection is checked out per statement.
    pub fn executor(&self) -> &PgPool {
        self.db.pool()
    }
}
