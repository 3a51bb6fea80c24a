use std::env;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Dictionary content page base URL
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let base_url = env::var("WEBLIO_BASE_URL")
            .unwrap_or_else(|_| "https://www.weblio.jp/content/".to_string());

        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Self {
            base_url,
            timeout_seconds,
        }
    }
}
