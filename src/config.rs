use std::net::SocketAddr;

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    /// Tracing filter directive, e.g. `info` or `hostal=debug,tower_http=info`.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// DATABASE_URL defaults to "sqlite://hostal.db"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://hostal.db".to_string());
        if database_url.trim().is_empty() {
            return Err(ConfigError::Invalid("DATABASE_URL", "must not be empty"));
        }

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?;

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            listen_addr,
            database_url,
            log_filter,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
