//! Application configuration loaded from environment variables.
//!
//! Every setting has a default, so a bare `cargo run` serves the itinerary
//! with the stock single-user credentials.

use std::env;

/// Default login identity. This is a placeholder gate, not a security
/// boundary.
pub const DEFAULT_LOGIN_EMAIL: &str = "admin@gmail.com";
pub const DEFAULT_LOGIN_PASSWORD: &str = "admin";
pub const DEFAULT_LOGIN_NAME: &str = "Admin Umroh";

/// Version tag of the current offline cache generation.
pub const DEFAULT_CACHE_VERSION: &str = "v1";

/// The single credential pair accepted by the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Display name stored in the session marker on login
    pub name: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_LOGIN_EMAIL.to_string(),
            password: DEFAULT_LOGIN_PASSWORD.to_string(),
            name: DEFAULT_LOGIN_NAME.to_string(),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL (CORS origin, cookie `Secure` flag)
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Accepted login credentials
    pub credentials: Credentials,
    /// Cache generation tag, e.g. `v1`
    pub cache_version: String,
    /// Whether completed activities are listed when the client does not say
    pub show_completed_default: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            credentials: Credentials::default(),
            cache_version: DEFAULT_CACHE_VERSION.to_string(),
            show_completed_default: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw.clone()))?,
            Err(_) => 8080,
        };

        let show_completed_default = match env::var("SHOW_COMPLETED") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("SHOW_COMPLETED", raw))?,
            Err(_) => true,
        };

        let cache_version = env::var("CACHE_VERSION")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_CACHE_VERSION.to_string());
        if cache_version.is_empty() {
            return Err(ConfigError::Invalid("CACHE_VERSION", cache_version));
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
            credentials: Credentials {
                email: env::var("LOGIN_EMAIL")
                    .unwrap_or_else(|_| DEFAULT_LOGIN_EMAIL.to_string()),
                password: env::var("LOGIN_PASSWORD")
                    .unwrap_or_else(|_| DEFAULT_LOGIN_PASSWORD.to_string()),
                name: env::var("LOGIN_NAME").unwrap_or_else(|_| DEFAULT_LOGIN_NAME.to_string()),
            },
            cache_version,
            show_completed_default,
        })
    }

    /// Cookies carry `Secure` only when the frontend is served over https.
    pub fn secure_cookies(&self) -> bool {
        self.frontend_url.starts_with("https://")
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "9090");
        env::set_var("LOGIN_NAME", "Jamaah");
        env::set_var("SHOW_COMPLETED", "false");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 9090);
        assert_eq!(config.credentials.name, "Jamaah");
        assert_eq!(config.credentials.email, DEFAULT_LOGIN_EMAIL);
        assert!(!config.show_completed_default);
        assert_eq!(config.cache_version, DEFAULT_CACHE_VERSION);

        env::remove_var("PORT");
        env::remove_var("LOGIN_NAME");
        env::remove_var("SHOW_COMPLETED");
    }

    #[test]
    fn test_secure_cookies_follow_frontend_scheme() {
        let mut config = Config::default();
        assert!(!config.secure_cookies());

        config.frontend_url = "https://umroh.example.org".to_string();
        assert!(config.secure_cookies());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" no "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
