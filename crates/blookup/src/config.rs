use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Domain configuration: where the knowledge base comes from and which
/// SPARQL endpoint the linked-data helpers talk to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlookupConfig {
    /// JSON dump to load the knowledge base from at startup
    pub data_file: Option<PathBuf>,

    /// SPARQL endpoint for the linked-data helpers
    pub sparql_endpoint: String,

    /// Log level
    pub log_level: String,
}

impl Default for BlookupConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            sparql_endpoint: "https://dbpedia.org/sparql".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl BlookupConfig {
    /// Load from configuration file
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }
}
