use serde::Deserialize;

use crate::error::{PhpscopeError, Result};

/// Tunables for the candidate search. Hosts typically deserialize this
/// from their own settings store; everything has a sensible default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Upper bound on how many same-named files a single query may open.
    /// Bounds worst-case I/O fan-out on large projects.
    pub max_file_results: usize,
    /// Extension (without the dot) of the source files to search.
    pub source_extension: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_file_results: 10,
            source_extension: "php".to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| PhpscopeError::Internal(format!("invalid resolver config: {}", e)))
    }
}
