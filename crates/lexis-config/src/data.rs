//! Data source configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_terms() -> String {
    String::from("data/words.json")
}

fn default_facts() -> String {
    String::from("data/facts.json")
}

/// Where the two collections are read from. Each value is a filesystem path
/// or an `http(s)://` URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataConfig {
    /// Term collection (JSON array of term objects).
    #[serde(default = "default_terms")]
    pub terms: String,

    /// Fact collection (JSON array of `{ "fact": ... }` objects).
    #[serde(default = "default_facts")]
    pub facts: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            terms: default_terms(),
            facts: default_facts(),
        }
    }
}

impl DataConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("data.terms", &self.terms), ("data.facts", &self.facts)] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
