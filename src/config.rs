use std::env;

use secrecy::SecretString;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_api_base_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().map(SecretString::from),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_api_base_url: env::var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// A missing credential does not block startup; the first generation call
    /// fails downstream instead.
    pub fn warn_if_unconfigured(&self) {
        if self.gemini_api_key.is_none() {
            log::warn!("GEMINI_API_KEY environment variable not set");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: Some(SecretString::from("test-api-key".to_string())),
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_api_base_url: "http://localhost:9".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
