use crate::error::{ClientError, ClientResult};
use serde::Deserialize;
use std::env;

const DEFAULT_BASE_URL: &str = "https://ruby-china.org/api/v3";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub page_size: usize,
    pub retry_delay_secs: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            base_url: env::var("FORUM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            page_size: env::var("FORUM_PAGE_SIZE")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .map_err(|e| ClientError::Config(format!("invalid FORUM_PAGE_SIZE: {}", e)))?,
            retry_delay_secs: env::var("FORUM_RETRY_DELAY_SECS")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .map_err(|e| ClientError::Config(format!("invalid FORUM_RETRY_DELAY_SECS: {}", e)))?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .map_err(|e| ClientError::Config(e.to_string()))?,
        };

        Ok(config)
    }
}
