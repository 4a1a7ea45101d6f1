use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::text::normalize::StemmerLanguage;

/// Pipeline configuration
///
/// Every field is optional in the TOML source.
/// ```toml
/// stemmer_language = "english"
/// extra_stopwords = ["lorem", "ipsum"]
/// replace_default_stopwords = false
/// log_level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// snowball algorithm used by the stemmer
    pub stemmer_language: StemmerLanguage,
    /// added to the built-in default stopword set
    pub extra_stopwords: Vec<String>,
    /// use `extra_stopwords` instead of the built-in set
    pub replace_default_stopwords: bool,
    /// tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stemmer_language: StemmerLanguage::English,
            extra_stopwords: Vec::new(),
            replace_default_stopwords: false,
            log_level: "warn".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
