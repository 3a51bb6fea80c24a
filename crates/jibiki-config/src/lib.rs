use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::fields::FieldConfig;
use self::network::NetworkConfig;

pub mod anki;
pub mod fields;
pub mod network;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub fields: FieldConfig,
    pub network: NetworkConfig,
    pub anki: AnkiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            fields: FieldConfig::new(),
            network: NetworkConfig::new(),
            anki: AnkiConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
