use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::keywords::DEFAULT_MIN_KEYWORD_LEN;
use crate::scoring::ScoreWeights;
use crate::semantic::SemanticEntry;
use crate::{Error, Result};

/// Configuration for a [`SearchEngine`](crate::SearchEngine)
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: ScoreWeights,
    /// Minimum token length, in characters, for a literal keyword.
    pub min_keyword_len: usize,
    /// Replaces the built-in semantic table when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic: Option<Vec<SemanticEntry>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            min_keyword_len: DEFAULT_MIN_KEYWORD_LEN,
            semantic: None,
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_keyword_len == 0 {
            return Err(Error::InvalidConfig(
                "min_keyword_len must be at least 1".to_string(),
            ));
        }
        match self.weights.product.total() {
            None => {
                return Err(Error::InvalidConfig(
                    "product weights overflow".to_string(),
                ))
            }
            Some(0) => {
                return Err(Error::InvalidConfig(
                    "product weights are all zero".to_string(),
                ))
            }
            Some(_) => {}
        }
        match self.weights.brand.total() {
            None => {
                return Err(Error::InvalidConfig(
                    "brand weights overflow".to_string(),
                ))
            }
            Some(0) => {
                return Err(Error::InvalidConfig(
                    "brand weights are all zero".to_string(),
                ))
            }
            Some(_) => {}
        }
        if let Some(entries) = &self.semantic {
            for entry in entries {
                if entry.key.trim().is_empty() {
                    return Err(Error::InvalidConfig(
                        "semantic entry with empty key".to_string(),
                    ));
                }
                if entry.synonyms.is_empty() {
                    return Err(Error::InvalidConfig(format!(
                        "semantic entry '{}' has no synonyms",
                        entry.key
                    )));
                }
                // A blank synonym would be contained in every multi-word query.
                if entry.synonyms.iter().any(|s| s.trim().is_empty()) {
                    return Err(Error::InvalidConfig(format!(
                        "semantic entry '{}' has an empty synonym",
                        entry.key
                    )));
                }
            }
        }
        Ok(())
    }
}
