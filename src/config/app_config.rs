use std::collections::HashMap;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub providers: ProvidersConfig,
    pub mock: MockConfig,
    pub feedback: FeedbackConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body, screenshots included
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// The single origin allowed to call the API from a browser
    pub allowed_origin: String,
}

/// Upstream LLM endpoints and request settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Provider identifier to endpoint URL
    pub endpoints: HashMap<String, String>,
    pub openai_model: String,
    pub anthropic_model: String,
    pub anthropic_max_tokens: u32,
    /// Upstream request timeout; transport default when unset
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub directory: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        let endpoints = HashMap::from([
            (
                "openai".to_string(),
                "https://api.openai.com/v1/chat/completions".to_string(),
            ),
            (
                "anthropic".to_string(),
                "https://api.anthropic.com/v1/complete".to_string(),
            ),
        ]);

        Self {
            endpoints,
            openai_model: "gpt-3.5-turbo".to_string(),
            anthropic_model: "claude-2.1".to_string(),
            anthropic_max_tokens: 1024,
            timeout_secs: None,
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 500,
            max_delay_ms: 2000,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            directory: "feedback".to_string(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
