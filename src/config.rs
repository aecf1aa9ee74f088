use serde::Deserialize;
use std::time::Duration;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the movie backend, without the `/api` prefix
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Delay before following the redirect after a successful account creation
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// Where a successful account creation sends the user
    #[serde(default = "default_redirect_target")]
    pub redirect_target: String,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

fn default_redirect_target() -> String {
    "/".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            redirect_delay_ms: default_redirect_delay_ms(),
            redirect_target: default_redirect_target(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.redirect_delay(), Duration::from_secs(2));
        assert_eq!(config.redirect_target, "/");
    }

    #[test]
    fn test_overrides_from_env() {
        let vars = vec![
            ("API_BASE_URL".to_string(), "https://movies.example".to_string()),
            ("REDIRECT_DELAY_MS".to_string(), "250".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.api_base_url, "https://movies.example");
        assert_eq!(config.redirect_delay(), Duration::from_millis(250));
        assert_eq!(config.redirect_target, "/");
    }

    #[test]
    fn test_bad_delay_is_rejected() {
        let vars = vec![("REDIRECT_DELAY_MS".to_string(), "soon".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
