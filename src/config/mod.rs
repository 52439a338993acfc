//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CorsConfig, FeedbackConfig, LogFormat, LoggingConfig, MetricsConfig, MockConfig,
    ProvidersConfig, ServerConfig,
};
