use std::net::SocketAddr;
use std::path::Path;

use bookchain::LedgerConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
    pub pretty_json: bool,
    pub ledger: LedgerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8090)),
            log_filter: "info".to_string(),
            pretty_json: true,
            ledger: LedgerConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> ServerResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "0.0.0.0:8090".parse::<SocketAddr>().unwrap());
        assert_eq!(c.log_filter, "info");
        assert!(c.pretty_json);
        assert!(c.ledger.validate_on_ingest);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str("bind_addr = \"127.0.0.1:9000\"\n").unwrap();
        assert_eq!(c.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert!(c.pretty_json);
    }

    #[test]
    fn nested_ledger_section() {
        let c = ServerConfig::from_toml_str(
            "pretty_json = false\n[ledger]\nvalidate_on_ingest = false\n",
        )
        .unwrap();
        assert!(!c.pretty_json);
        assert!(!c.ledger.validate_on_ingest);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("bind_addr = 5").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();
        let c = ServerConfig::load(file.path()).unwrap();
        assert_eq!(c.log_filter, "debug");
    }
}
