use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "schemes.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Load the demo schemes into an empty store at startup (default: false)
    pub seed_demo_data: bool,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "schemes.db")
    /// - `SEED_DEMO_DATA` - `true`/`1` to seed demo data (default: false)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "schemes.db".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            sqlite_path: "test.db".to_string(),
            seed_demo_data: false,
            request_timeout_seconds: 30,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("SEED_DEMO_DATA");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "schemes.db");
        assert!(!config.seed_demo_data);
        assert_eq!(config.request_timeout_seconds, 10);
    }
}
