use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Empty when unset; requests then fail at the provider and yield no routes.
    pub openroute_api_key: String,
    pub openroute_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let openroute_api_key = env::var("OPENROUTE_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("OPENROUTE_API_KEY is not set, every route request will fail");
            String::new()
        });

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            openroute_api_key,
            openroute_base_url: env::var("OPENROUTE_BASE_URL").ok(),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn has_api_key(&self) -> bool {
        !self.openroute_api_key.trim().is_empty()
    }
}
