use std::env;

use secrecy::SecretString;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

#[derive(Clone, Debug)]
pub struct Config {
    pub gateway_url: String,
    /// Bearer credential for the AI gateway. Absence is surfaced per-request
    /// as a configuration error rather than at startup, so the server still
    /// boots for health probes.
    pub gateway_api_key: Option<SecretString>,
    pub impact_model: String,
    pub planner_model: String,
    pub notes_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gateway_url: env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            gateway_api_key: env::var("AI_GATEWAY_API_KEY").ok().map(SecretString::from),
            impact_model: env::var("IMPACT_MODEL")
                .unwrap_or_else(|_| "google/gemini-3-flash-preview".to_string()),
            planner_model: env::var("PLANNER_MODEL")
                .unwrap_or_else(|_| "google/gemini-3-pro-preview".to_string()),
            notes_model: env::var("NOTES_MODEL")
                .unwrap_or_else(|_| "google/gemini-2.5-flash-image-preview".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Logs startup warnings for configuration that will fail at request time.
    pub fn warn_if_incomplete(&self) {
        if self.gateway_api_key.is_none() {
            log::warn!("AI_GATEWAY_API_KEY is not set; AI endpoints will return 500");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gateway_url: "http://localhost:9999/v1/chat/completions".to_string(),
            gateway_api_key: Some(SecretString::from("test_gateway_key".to_string())),
            impact_model: "test/impact-model".to_string(),
            planner_model: "test/planner-model".to_string(),
            notes_model: "test/notes-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
