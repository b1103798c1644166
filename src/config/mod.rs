// Configuration module entry point
// Loads server configuration and endpoint definitions

mod endpoints;
mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use endpoints::{load_endpoints, EndpointDefinition, RawBody};
pub use types::Config;

/// Default config file (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; `MOCK_`-prefixed environment variables override it,
    /// e.g. `MOCK_SERVER__PORT=9000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("MOCK").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.verbose", false)?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("endpoints.file", "endpoints.json")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("definitely/not/a/config/file").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(!cfg.logging.verbose);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert_eq!(cfg.performance.max_connections, None);
        assert_eq!(cfg.endpoints.file, "endpoints.json");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("mock_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("server.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9191\n\n[logging]\nverbose = true\n\n[endpoints]\nfile = \"mocks.toml\"\n",
        )
        .unwrap();

        let base = dir.join("server");
        let cfg = Config::load_from(&base.to_string_lossy()).unwrap();
        assert_eq!(cfg.server.port, 9191);
        assert!(cfg.logging.verbose);
        assert_eq!(cfg.endpoints.file, "mocks.toml");
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:9191".parse().unwrap()
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let mut cfg = Config::load_from("definitely/not/a/config/file").unwrap();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
