use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Base URL of the meal backend, e.g. `http://localhost:8080/api/meals`
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Base URL of the third-party catalog used when the category filter fails
    #[serde(default = "default_fallback_base")]
    pub fallback_base: String,
    /// Whether the category filter may fall back to the third-party catalog
    #[serde(default = "default_fallback_enabled")]
    pub fallback_enabled: bool,
    /// Request timeout in seconds. Unset means requests never time out.
    #[serde(default)]
    pub timeout: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            fallback_base: default_fallback_base(),
            fallback_enabled: default_fallback_enabled(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_api_base() -> String {
    "http://localhost:8080/api/meals".to_string()
}

fn default_fallback_base() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_fallback_enabled() -> bool {
    true
}

fn default_user_agent() -> String {
    concat!("meal-browser/", env!("CARGO_PKG_VERSION")).to_string()
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALS__ prefix
    /// 2. meals.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALS__API_BASE
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configuration pointing at a given backend, everything else defaulted
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    load_config_from("meals")
}

fn load_config_from(file_name: &str) -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_name).required(false))
        // Use double underscore for nested: MEALS__FALLBACK_BASE
        .add_source(
            Environment::with_prefix("MEALS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_default_values() {
        let config = BrowserConfig::default();
        assert_eq!(config.api_base, "http://localhost:8080/api/meals");
        assert_eq!(config.fallback_base, "https://www.themealdb.com/api/json/v1/1");
        assert!(config.fallback_enabled);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("meal-browser/"));
    }

    #[test]
    fn test_with_api_base_keeps_defaults() {
        let config = BrowserConfig::with_api_base("http://127.0.0.1:1234/api");
        assert_eq!(config.api_base, "http://127.0.0.1:1234/api");
        assert!(config.fallback_enabled);
        assert_eq!(config.timeout_duration(), None);
    }

    #[test]
    fn test_timeout_duration() {
        let config = BrowserConfig {
            timeout: Some(5),
            ..BrowserConfig::default()
        };
        assert_eq!(config.timeout_duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "api_base = \"http://meals.local/api\"\nfallback_enabled = false\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: BrowserConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.api_base, "http://meals.local/api");
        assert!(!config.fallback_enabled);
        assert_eq!(config.fallback_base, default_fallback_base());
    }

    #[test]
    fn test_env_overrides_file_overrides_defaults() {
        let path = env::temp_dir().join(format!("meals-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            "api_base = \"http://from-file/api\"\nfallback_base = \"http://file-fallback\"\n",
        )
        .unwrap();

        env::set_var("MEALS__API_BASE", "http://from-env/api");
        env::set_var("MEALS__FALLBACK_ENABLED", "false");
        let result = load_config_from(path.to_str().unwrap());
        env::remove_var("MEALS__API_BASE");
        env::remove_var("MEALS__FALLBACK_ENABLED");
        fs::remove_file(&path).unwrap();

        let config = result.unwrap();
        assert_eq!(config.api_base, "http://from-env/api");
        assert!(!config.fallback_enabled);
        assert_eq!(config.fallback_base, "http://file-fallback");
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config_from("definitely-not-a-meals-config").unwrap();
        assert_eq!(config.fallback_base, default_fallback_base());
        assert!(config.timeout.is_none());
    }
}
