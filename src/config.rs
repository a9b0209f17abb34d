use anyhow::Result;
use std::env;
use url::Url;

use crate::user_settings::UserSettings;

/// Environment variable holding the prediction service base URL
pub const API_URL_ENV: &str = "PREDICTION_API_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Path of the prediction route, relative to the base URL
pub const PREDICT_PATH: &str = "predict";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: Url,
}

impl Config {
    pub fn new(api_base_url: Url) -> Self {
        Self { api_base_url }
    }

    /// Parse a base URL string into a config
    pub fn from_base_url(base: &str) -> Result<Self> {
        let url = Url::parse(base.trim())?;
        if url.cannot_be_a_base() {
            anyhow::bail!("'{}' cannot be used as a base URL", base);
        }
        Ok(Self::new(url))
    }

    /// Build the config from `PREDICTION_API_URL`, falling back to the default endpoint
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(API_URL_ENV).ok().as_deref())
    }

    /// Config for a raw environment value. Unset, blank and invalid all mean the default.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_base_url(value) {
            Ok(config) => {
                tracing::info!("Using prediction API at {}", config.api_base_url);
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}={:?}: {}", API_URL_ENV, value, e);
                Self::default()
            }
        }
    }

    /// Endpoint in effect: the saved override when it parses, otherwise `env_config`
    pub fn resolve(env_config: &Config, settings: &UserSettings) -> Self {
        env_config
            .clone()
            .with_override(settings.api_base_url_override())
    }

    /// Apply the user's saved endpoint override, if it parses
    pub fn with_override(self, override_url: Option<&str>) -> Self {
        match override_url {
            Some(raw) => match Self::from_base_url(raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring saved endpoint override {:?}: {}", raw, e);
                    self
                }
            },
            None => self,
        }
    }

    /// Full URL of the prediction route.
    /// Any path on the base URL is kept as a prefix (`http://h/api` -> `http://h/api/predict`).
    pub fn predict_url(&self) -> Result<Url> {
        let mut base = self.api_base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(PREDICT_PATH)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        match Url::parse(DEFAULT_API_BASE_URL) {
            Ok(url) => Self::new(url),
            Err(_) => unreachable!("DEFAULT_API_BASE_URL is a valid URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Tests that touch the process environment take this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Run `f` with `PREDICTION_API_URL` set to `value` (or removed), then restore it
    fn with_api_env<R>(value: Option<&str>, f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous = env::var(API_URL_ENV).ok();
        match value {
            Some(v) => env::set_var(API_URL_ENV, v),
            None => env::remove_var(API_URL_ENV),
        }
        let result = f();
        match previous {
            Some(v) => env::set_var(API_URL_ENV, v),
            None => env::remove_var(API_URL_ENV),
        }
        result
    }

    fn settings_with(override_url: &str) -> UserSettings {
        let mut settings = UserSettings::default();
        settings.set_api_base_url_override(override_url);
        settings
    }

    #[test]
    fn test_default_predict_url() {
        let config = Config::default();
        assert_eq!(
            config.predict_url().unwrap().as_str(),
            "http://localhost:5000/predict"
        );
    }

    #[test]
    fn test_predict_url_trailing_slash() {
        let config = Config::from_base_url("http://10.0.0.7:5000/").unwrap();
        assert_eq!(
            config.predict_url().unwrap().as_str(),
            "http://10.0.0.7:5000/predict"
        );
    }

    #[test]
    fn test_predict_url_keeps_path_prefix() {
        let config = Config::from_base_url("https://models.example.com/fraud/v1").unwrap();
        assert_eq!(
            config.predict_url().unwrap().as_str(),
            "https://models.example.com/fraud/v1/predict"
        );
    }

    #[test]
    fn test_from_base_url_trims_whitespace() {
        let config = Config::from_base_url("  http://localhost:8080  ").unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_from_base_url_rejects_garbage() {
        assert!(Config::from_base_url("not a url").is_err());
        assert!(Config::from_base_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_with_override_valid() {
        let config = Config::default().with_override(Some("http://predictor:9000"));
        assert_eq!(
            config.predict_url().unwrap().as_str(),
            "http://predictor:9000/predict"
        );
    }

    #[test]
    fn test_with_override_invalid_keeps_original() {
        let config = Config::default().with_override(Some("::::"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_with_override_none() {
        assert_eq!(Config::default().with_override(None), Config::default());
    }

    // ==================== environment ====================

    #[test]
    fn test_from_env_uses_variable() {
        let config = with_api_env(Some("http://predictor:9000/api"), Config::from_env);
        assert_eq!(
            config.predict_url().unwrap().as_str(),
            "http://predictor:9000/api/predict"
        );
    }

    #[test]
    fn test_from_env_invalid_falls_back_to_default() {
        let config = with_api_env(Some("garbage"), Config::from_env);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_env_unset_falls_back_to_default() {
        let config = with_api_env(None, Config::from_env);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_env_value_blank_is_default() {
        assert_eq!(Config::from_env_value(Some("   ")), Config::default());
        assert_eq!(Config::from_env_value(None), Config::default());
    }

    // ==================== resolve ====================

    #[test]
    fn test_resolve_override_wins() {
        let env_config = Config::from_base_url("http://from-env:5000").unwrap();

        let config = Config::resolve(&env_config, &settings_with("http://saved:7000"));

        assert_eq!(config.api_base_url.as_str(), "http://saved:7000/");
    }

    #[test]
    fn test_resolve_without_override_uses_env() {
        let env_config = Config::from_base_url("http://from-env:5000").unwrap();

        let config = Config::resolve(&env_config, &UserSettings::default());

        assert_eq!(config, env_config);
    }

    #[test]
    fn test_resolve_ignores_unparseable_override() {
        let env_config = Config::from_base_url("http://from-env:5000").unwrap();
        let settings = UserSettings {
            api_base_url_override: Some("not a url".to_string()),
        };

        assert_eq!(Config::resolve(&env_config, &settings), env_config);
    }
}
