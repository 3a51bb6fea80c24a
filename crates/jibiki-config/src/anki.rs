use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct AnkiConfig {
    /// Enable AnkiConnect integration
    pub enabled: bool,
    /// AnkiConnect URL
    pub url: String,
    /// Tag added to notes whose definition field was filled; empty disables
    /// tagging
    pub tag: String,
}

impl AnkiConfig {
    pub fn new() -> Self {
        let url =
            env::var("ANKI_CONNECT_URL").unwrap_or_else(|_| "http://localhost:8765".to_string());

        let tag = env::var("ANKI_TAG").unwrap_or_else(|_| "jibiki".to_string());

        Self {
            enabled: true,
            url,
            tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_integration_and_tagging() {
        let config = AnkiConfig::new();
        assert!(config.enabled);
        assert_eq!(config.url, "http://localhost:8765");
        assert_eq!(config.tag, "jibiki");
    }
}
