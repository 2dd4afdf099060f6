//! Configuration management for the filesystem sandbox server
//!
//! Settings are layered: built-in defaults, an optional `config.toml`,
//! `FS_SANDBOX_*` environment variables, and finally the bare
//! `WORKSPACE_DIR` / `SECRET_TOKEN` / `SESSION_ID` variables that sandbox
//! containers are launched with. Everything is read once at startup.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Environment variables honoured without the `FS_SANDBOX_` prefix.
const LEGACY_ENV: [(&str, &str); 3] = [
    ("workspace_dir", "WORKSPACE_DIR"),
    ("secret_token", "SECRET_TOKEN"),
    ("session_id", "SESSION_ID"),
];

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Root directory all file operations are confined to
    pub workspace_dir: String,

    /// Bearer token required on tool endpoints; none or empty disables auth
    #[serde(default)]
    pub secret_token: Option<String>,

    /// Identifier of the sandbox session, reported by `/health`
    pub session_id: String,

    /// Allow cross-origin requests from any origin
    pub enable_cors: bool,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let legacy = LEGACY_ENV
            .iter()
            .filter_map(|(key, var)| env::var(var).ok().map(|value| (*key, value)))
            .collect();
        Self::load_from("config", legacy)
    }

    /// Load configuration from the given file base name plus explicit overrides
    pub fn load_from(
        config_path: &str,
        overrides: Vec<(&'static str, String)>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("bind_address", "0.0.0.0")?
            .set_default("port", 8000)?
            .set_default("workspace_dir", "/workspace")?
            .set_default("session_id", "default")?
            .set_default("enable_cors", true)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("FS_SANDBOX"));

        for (key, value) in overrides {
            builder = builder.set_override(key, value)?;
        }

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::Message("bind_address cannot be empty".into()));
        }

        if self.workspace_dir.trim().is_empty() {
            return Err(ConfigError::Message("workspace_dir cannot be empty".into()));
        }

        Ok(())
    }

    /// Get bind address and port as a socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get workspace directory as PathBuf
    pub fn workspace_path(&self) -> PathBuf {
        PathBuf::from(&self.workspace_dir)
    }

    /// The configured token, treating an empty string as unset
    pub fn token(&self) -> Option<&str> {
        self.secret_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load_with(contents: &str, overrides: Vec<(&'static str, String)>) -> Result<ServerConfig, ConfigError> {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sandbox.toml");
        fs::write(&path, contents).unwrap();
        ServerConfig::load_from(path.to_str().unwrap(), overrides)
    }

    #[test]
    fn test_defaults_apply_without_file() {
        let config = ServerConfig::load_from("/nonexistent/fs-sandbox-config", vec![]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.workspace_dir, "/workspace");
        assert_eq!(config.session_id, "default");
        assert!(config.enable_cors);
        assert_eq!(config.token(), None);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let config = load_with(
            "port = 9001\nworkspace_dir = \"/srv/ws\"\nsecret_token = \"s3cret\"\nenable_cors = false\n",
            vec![],
        )
        .unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9001");
        assert_eq!(config.workspace_path(), PathBuf::from("/srv/ws"));
        assert_eq!(config.token(), Some("s3cret"));
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = load_with(
            "workspace_dir = \"/from/file\"\n",
            vec![
                ("workspace_dir", "/from/env".to_string()),
                ("session_id", "abc".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(config.workspace_dir, "/from/env");
        assert_eq!(config.session_id, "abc");
    }

    #[test]
    fn test_empty_token_means_no_auth() {
        let config = load_with("", vec![("secret_token", String::new())]).unwrap();
        assert_eq!(config.token(), None);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(load_with("port = 0\n", vec![]).is_err());
        assert!(load_with("workspace_dir = \"\"\n", vec![]).is_err());
    }
}
