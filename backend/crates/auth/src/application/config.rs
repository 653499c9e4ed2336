//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

/// Secret used when nothing else is configured. Fine for local work only.
pub const DEFAULT_SECRET_KEY: &str = "dev";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Key for HMAC signing of the session cookie
    pub secret_key: Vec<u8>,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session".to_string(),
            secret_key: DEFAULT_SECRET_KEY.as_bytes().to_vec(),
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    pub fn with_secret_key(secret_key: impl Into<Vec<u8>>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Default::default()
        }
    }

    /// Cookie attributes for the session cookie (browser-session lifetime)
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}
