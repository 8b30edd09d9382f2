//! Application configuration

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Chain endpoint configuration
    #[serde(default)]
    pub chain: ChainConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// The address the server binds to, `host:port`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: None,
        }
    }
}

/// Configuration for the self-directed chain hop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Timeout for one outbound hop in milliseconds
    ///
    /// A hop that exceeds this fails the whole chain with a dependency
    /// error instead of pinning the outer request forever.
    #[serde(default = "default_chain_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_chain_timeout_ms(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_chain_timeout_ms() -> u64 {
    30_000
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("chain.timeout_ms", 30_000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., FAULTLINE_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("FAULTLINE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
