//! Environment-driven configuration

use crate::llm::GeminiModel;

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub at_username: String,
    pub at_api_key: Option<String>,
    pub at_sender_id: String,
    pub at_product_name: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: GeminiModel,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("SOMABOT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            at_username: std::env::var("AT_USERNAME").unwrap_or_else(|_| "sandbox".to_string()),
            at_api_key: std::env::var("AT_API_KEY").ok(),
            at_sender_id: std::env::var("AT_SENDER_ID").unwrap_or_else(|_| "7833".to_string()),
            at_product_name: std::env::var("AT_PRODUCT_NAME")
                .unwrap_or_else(|_| "SomaBot".to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .ok()
                .and_then(|name| GeminiModel::parse(&name))
                .unwrap_or(GeminiModel::Flash25),
        }
    }
}
