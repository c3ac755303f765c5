use std::env;

use crate::models::domain::ModelConfig;
use crate::views::labels::LabelVariant;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_base: String,
    pub model: ModelConfig,
    pub label_variant: LabelVariant,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = ModelConfig::default();

        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: ModelConfig {
                model: env::var("OPENAI_MODEL").unwrap_or(defaults.model),
                ..defaults
            },
            label_variant: env::var("LABEL_VARIANT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_base: "http://127.0.0.1:9/v1".to_string(),
            model: ModelConfig::default(),
            label_variant: LabelVariant::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(!config.openai_api_base.is_empty());
        assert!(!config.model.model.is_empty());
        assert_eq!(config.model.max_tokens, 2500);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_host, "127.0.0.1");
        assert_eq!(config.model.model, "gpt-4o");
        assert_eq!(config.label_variant, LabelVariant::Standard);
    }
}
