//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Filter applied to tracing output when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive
    /// Example: portfolio=debug,tower_http=info
    pub log_filter: String,

    /// Serve `.br`/`.gz` variants of the wasm bundle when present
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("PRECOMPRESSED_ASSETS").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, precompressed: Option<String>) -> Self {
        Self {
            log_filter: log_filter
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            precompressed_assets: precompressed.as_deref().map(parse_flag).unwrap_or(true),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No env var access here, so these stay thread safe

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None);

        assert_eq!(config.log_filter, "info");
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_custom_log_filter() {
        let config = Config::from_vars(Some("portfolio=debug".to_string()), None);

        assert_eq!(config.log_filter, "portfolio=debug");
    }

    #[test]
    fn test_blank_log_filter_uses_default() {
        let config = Config::from_vars(Some("  ".to_string()), None);

        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_precompressed_flag() {
        for off in ["0", "false", "No", "OFF"] {
            assert!(!Config::from_vars(None, Some(off.to_string())).precompressed_assets);
        }
        for on in ["1", "true", "yes"] {
            assert!(Config::from_vars(None, Some(on.to_string())).precompressed_assets);
        }
    }
}
