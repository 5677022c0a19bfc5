//! Server configuration from environment variables (a `.env` file is honoured).

use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/mining_cms";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Default `RUST_LOG` directives when none are set.
pub const DEFAULT_LOG_FILTER: &str = "mining_cms=info,tower_http=info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    /// Create the database and tables on startup.
    pub auto_migrate: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            cors_origins: Vec::new(),
            auto_migrate: true,
        }
    }
}

impl ServerConfig {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(v) = lookup("DATABASE_URL") {
            config.database_url = v;
        }
        if let Some(v) = lookup("BIND_ADDR").and_then(|v| v.parse().ok()) {
            config.bind_addr = v;
        }
        if let Some(v) = lookup("DB_MAX_CONNECTIONS").and_then(|v| v.parse().ok()) {
            config.max_connections = v;
        }
        if let Some(v) = lookup("BODY_LIMIT_BYTES").and_then(|v| v.parse().ok()) {
            config.body_limit_bytes = v;
        }
        if let Some(v) = lookup("CORS_ORIGINS") {
            config.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(v) = lookup("AUTO_MIGRATE").and_then(|v| v.parse().ok()) {
            config.auto_migrate = v;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn overrides_from_environment() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/cms"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("AUTO_MIGRATE", "false"),
        ]));
        assert_eq!(config.database_url, "postgres://db/cms");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert!(!config.auto_migrate);
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "many")]));
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
