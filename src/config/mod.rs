use serde::Deserialize;

mod config_dir;
pub use config_dir::{find_config_file, read_config};

mod error;
pub use error::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    host: Host,
    app: App,
    database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Host {
    bindto: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct App {
    docs: bool,
}

/// Connection parameters for the relational database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    server: String,
    port: u16,
    name: String,
    username: String,
    password: String,
    /// Require encryption in transit.
    encrypt: bool,
    /// Skip server certificate verification when encrypting. Off unless asked for.
    trust_server_certificate: bool,
    /// PEM bundle used to verify the server, on top of the system roots.
    ssl_root_cert: Option<String>,
    connect_timeout_secs: u64,
    /// Apply bundled migrations on startup.
    migrate: bool,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            bindto: String::from("127.0.0.1:5000"),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            port: 5432,
            name: String::new(),
            username: String::new(),
            password: String::new(),
            encrypt: true,
            trust_server_certificate: false,
            ssl_root_cert: None,
            connect_timeout_secs: 30,
            migrate: true,
        }
    }
}

impl Config {
    /// Reads the config file (if any), applies `DB_*` environment overrides and validates the
    /// result. Built once at startup and handed to whoever needs it.
    #[tracing::instrument]
    pub fn load(use_local: bool) -> ConfigResult<Self> {
        let mut config = match read_config(use_local) {
            Ok(bytes) => Self::from_slice(&bytes)?,
            Err(ConfigError::ConfigNotFound) => {
                tracing::debug!("no config file found, relying on environment");
                Self::default()
            }
            Err(e) => return Err(e),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_slice(bytes: &[u8]) -> ConfigResult<Self> {
        let config: Self = toml::from_slice(bytes)?;
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bindto) = lookup("LINGUA_BIND") {
            self.host.bindto = bindto;
        }

        let db = &mut self.database;
        if let Some(server) = lookup("DB_SERVER") {
            db.server = server;
        }
        if let Some(port) = lookup("DB_PORT") {
            db.port = parse_value("DB_PORT", port)?;
        }
        if let Some(name) = lookup("DB_DATABASE") {
            db.name = name;
        }
        if let Some(username) = lookup("DB_USERNAME") {
            db.username = username;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            db.password = password;
        }
        if let Some(encrypt) = lookup("DB_ENCRYPT") {
            db.encrypt = parse_flag("DB_ENCRYPT", encrypt)?;
        }
        if let Some(trust) = lookup("DB_TRUST_SERVER_CERTIFICATE") {
            db.trust_server_certificate = parse_flag("DB_TRUST_SERVER_CERTIFICATE", trust)?;
        }
        if let Some(root_cert) = lookup("DB_SSL_ROOT_CERT") {
            db.ssl_root_cert = Some(root_cert).filter(|path| !path.trim().is_empty());
        }
        if let Some(timeout) = lookup("DB_TIMEOUT") {
            db.connect_timeout_secs = parse_value("DB_TIMEOUT", timeout)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.database.server.trim().is_empty() {
            return Err(ConfigError::MissingValue("database.server"));
        }
        if self.database.name.trim().is_empty() {
            return Err(ConfigError::MissingValue("database.name"));
        }
        // a zero acquire timeout fails every query
        if self.database.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "database.connect_timeout_secs",
                value: self.database.connect_timeout_secs.to_string(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }

    #[inline]
    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    #[inline]
    pub fn docs(&self) -> bool {
        self.docs
    }
}

impl DatabaseConfig {
    pub fn new<S: Into<String>>(server: S, port: u16, name: S) -> Self {
        Self {
            server: server.into(),
            port,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_credentials<S: Into<String>>(mut self, username: S, password: S) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_encrypt(mut self, encrypt: bool) -> Self {
        self.encrypt = encrypt;
        self
    }

    pub fn with_trust_server_certificate(mut self, trust: bool) -> Self {
        self.trust_server_certificate = trust;
        self
    }

    pub fn with_ssl_root_cert<S: Into<String>>(mut self, path: S) -> Self {
        self.ssl_root_cert = Some(path.into());
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    #[inline]
    pub fn server(&self) -> &str {
        &self.server
    }

    #[inline]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[inline]
    pub fn encrypt(&self) -> bool {
        self.encrypt
    }

    #[inline]
    pub fn trust_server_certificate(&self) -> bool {
        self.trust_server_certificate
    }

    #[inline]
    pub fn ssl_root_cert(&self) -> Option<&str> {
        self.ssl_root_cert.as_deref()
    }

    #[inline]
    pub fn connect_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.connect_timeout_secs)
    }

    #[inline]
    pub fn migrate(&self) -> bool {
        self.migrate
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> ConfigResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_flag(key: &'static str, value: String) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
