//! Application configuration
//!
//! Resolution order, later wins:
//! 1. built-in defaults
//! 2. `<instance>/config.toml`, when present
//! 3. environment (`QUILL_SECRET_KEY`, `QUILL_DATABASE`, `QUILL_BIND`,
//!    `QUILL_COOKIE_SECURE`)

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

use auth::AuthConfig;
use auth::application::config::DEFAULT_SECRET_KEY;

const DEFAULT_INSTANCE: &str = "instance";
const DATABASE_FILE: &str = "quill.sqlite";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Key signing the session cookie
    pub secret_key: String,
    /// SQLite database file
    pub database: PathBuf,
    /// Per-deployment directory (database, config.toml)
    pub instance_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
}

/// Optional overrides read from `config.toml`
#[derive(Debug, Default, Deserialize)]
struct InstanceFile {
    secret_key: Option<String>,
    database: Option<PathBuf>,
    bind_addr: Option<SocketAddr>,
    cookie_secure: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_instance(DEFAULT_INSTANCE)
    }
}

impl AppConfig {
    /// Defaults rooted at the given instance directory
    pub fn with_instance(instance_path: impl Into<PathBuf>) -> Self {
        let instance_path = instance_path.into();
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            database: instance_path.join(DATABASE_FILE),
            instance_path,
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 5000)),
            cookie_secure: false,
        }
    }

    /// Defaults, then the instance file, then the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the instance file exists but cannot be read or
    /// parsed, or an environment variable holds an unusable value.
    pub fn load(instance_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::with_instance(
            instance_path.unwrap_or_else(|| PathBuf::from(DEFAULT_INSTANCE)),
        );

        let file = config.instance_path.join(CONFIG_FILE);
        config.apply_file(&file)?;
        config.apply_env(|name| std::env::var(name).ok())?;

        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No instance config, using defaults");
                return Ok(());
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        };

        let file: InstanceFile = toml::from_str(&contents)?;
        if let Some(secret_key) = file.secret_key {
            self.secret_key = secret_key;
        }
        if let Some(database) = file.database {
            self.database = database;
        }
        if let Some(bind_addr) = file.bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(cookie_secure) = file.cookie_secure {
            self.cookie_secure = cookie_secure;
        }

        tracing::info!(path = %path.display(), "Loaded instance config");
        Ok(())
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret_key) = lookup("QUILL_SECRET_KEY") {
            self.secret_key = secret_key;
        }
        if let Some(database) = lookup("QUILL_DATABASE") {
            self.database = PathBuf::from(database);
        }
        if let Some(bind) = lookup("QUILL_BIND") {
            self.bind_addr = bind.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "QUILL_BIND",
                value: bind.clone(),
            })?;
        }
        if let Some(secure) = lookup("QUILL_COOKIE_SECURE") {
            self.cookie_secure = match secure.as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: "QUILL_COOKIE_SECURE",
                        value: secure,
                    });
                }
            };
        }
        Ok(())
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    /// Settings for the auth crate
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            cookie_secure: self.cookie_secure,
            ..AuthConfig::with_secret_key(self.secret_key.as_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.secret_key, "dev");
        assert!(config.uses_default_secret());
        assert_eq!(config.database, PathBuf::from("instance/quill.sqlite"));
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(!config.cookie_secure);
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::with_instance(dir.path());
        config.apply_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.database, dir.path().join("quill.sqlite"));
        assert!(config.uses_default_secret());
    }

    #[test]
    fn test_instance_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "secret_key = \"s3cret\"\nbind_addr = \"0.0.0.0:8080\"\ncookie_secure = true\n",
        )
        .unwrap();

        let mut config = AppConfig::with_instance(dir.path());
        config.apply_file(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.secret_key, "s3cret");
        assert!(!config.uses_default_secret());
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.cookie_secure);
        // untouched
        assert_eq!(config.database, dir.path().join("quill.sqlite"));
    }

    #[test]
    fn test_bad_instance_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "secret_key = ").unwrap();

        let err = AppConfig::with_instance(dir.path())
            .apply_file(&path)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("QUILL_SECRET_KEY", "from-env"),
            ("QUILL_DATABASE", "/var/lib/quill.sqlite"),
            ("QUILL_BIND", "127.0.0.1:9000"),
            ("QUILL_COOKIE_SECURE", "1"),
        ]);

        let mut config = AppConfig::default();
        config
            .apply_env(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.secret_key, "from-env");
        assert_eq!(config.database, PathBuf::from("/var/lib/quill.sqlite"));
        assert_eq!(config.bind_addr.port(), 9000);
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_invalid_env() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(|name| (name == "QUILL_BIND").then(|| "nowhere".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "QUILL_BIND", .. }));
    }

    #[test]
    fn test_auth_config() {
        let config = AppConfig {
            cookie_secure: true,
            ..AppConfig::with_instance("x")
        };
        let auth = config.auth_config();
        assert_eq!(auth.secret_key, b"dev");
        assert!(auth.cookie_secure);
    }
}
