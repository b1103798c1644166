// Configuration types module
// Defines the server-level configuration structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub endpoints: EndpointsConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default verbosity for endpoints that do not set their own
    pub verbose: bool,
    /// Log accepted connections
    pub access_log: bool,
    /// Info log file path (optional, stdout if not set)
    #[serde(default)]
    pub info_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    /// Seconds allowed for reading a request head
    pub read_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Where endpoint definitions are loaded from
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointsConfig {
    pub file: String,
}
