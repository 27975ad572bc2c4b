//! Application settings and configuration structures.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::{DeploymentMode, MissingHashPolicy};

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Deployment mode; `dev` unlocks the destructive admin operations
    pub platform: DeploymentMode,

    /// Server configuration (host, port, static files)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Password hashing and login policy
    pub auth: AuthSettings,

    /// CORS configuration
    pub cors: CorsSettings,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Directory served under `/app/`
    pub static_root: String,

    /// Upper bound on the time spent handling one request
    pub request_timeout_secs: u64,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL. Without one the in-memory store is used.
    pub url: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

/// Argon2 work factor and login policy.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Memory cost in KiB
    pub memory_kib: u32,

    /// Number of passes
    pub iterations: u32,

    /// Degree of parallelism
    pub parallelism: u32,

    /// What a login does for an account that has no stored hash
    pub missing_hash_policy: MissingHashPolicy,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{PLATFORM}.toml (deployment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the password hashing parameters are rejected by Argon2.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let platform = std::env::var("PLATFORM").unwrap_or_else(|_| "production".into());

        Self::defaults(&platform)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", platform)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("platform", std::env::var("PLATFORM").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.static_root", std::env::var("FILEPATH_ROOT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
            .and_then(Self::validated)
    }

    /// Build settings from the built-in defaults plus explicit overrides only.
    ///
    /// Neither files nor the process environment are consulted, which keeps
    /// tests independent of the machine they run on.
    pub fn with_overrides(overrides: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults("production")?;
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize().and_then(Self::validated)
    }

    fn defaults(platform: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("platform", platform)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.static_root", ".")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            // Low on purpose; production deployments raise these
            .set_default("auth.memory_kib", 8192)?
            .set_default("auth.iterations", 1)?
            .set_default("auth.parallelism", 1)?
            .set_default("auth.missing_hash_policy", "deny")?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }

    fn validated(settings: Self) -> Result<Self, ConfigError> {
        argon2::Params::new(
            settings.auth.memory_kib,
            settings.auth.iterations,
            settings.auth.parallelism,
            None,
        )
        .map_err(|e| ConfigError::Message(format!("Invalid password hashing parameters: {}", e)))?;

        Ok(settings)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
