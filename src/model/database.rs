use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::config::DatabaseConfig;
use crate::model::error::DatabaseResult;

#[derive(Debug, Clone)]
pub struct DbConnection {
    pool: PgPool, // cloning is cheap, pool is just a wrapper around Arc<>
}

impl DbConnection {
    /// Nothing is opened here. Each statement acquires a connection on use and hands it back
    /// when it finishes, waiting at most `connect_timeout` for one.
    pub fn connect(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .acquire_timeout(config.connect_timeout())
            .connect_lazy_with(connect_options(config));
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// With `encrypt` on, the server certificate and host name are verified unless
/// `trust_server_certificate` is set.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let ssl_mode = match (config.encrypt(), config.trust_server_certificate()) {
        (true, false) => PgSslMode::VerifyFull,
        (true, true) => PgSslMode::Require,
        (false, _) => PgSslMode::Prefer,
    };

    let mut options = PgConnectOptions::new()
        .host(config.server())
        .port(config.port())
        .database(config.name())
        .ssl_mode(ssl_mode);

    if !config.username().is_empty() {
        options = options.username(config.username());
    }
    if !config.password().is_empty() {
        options = options.password(config.password());
    }
    if let Some(root_cert) = config.ssl_root_cert() {
        options = options.ssl_root_cert(root_cert);
    }

    options
}

#[tracing::instrument(skip(db))]
pub async fn run_migrations(db: &DbConnection) -> DatabaseResult<()> {
    tracing::debug!("applying migrations...");
    sqlx::migrate!().run(db.pool()).await?;
    Ok(())
}
