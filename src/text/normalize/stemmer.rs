use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

use super::TokenNormalizer;

/// Snowball algorithm selection for the stemmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerLanguage {
    #[default]
    English,
    Danish,
    Dutch,
    Finnish,
    French,
    German,
    Italian,
    Norwegian,
    Portuguese,
    Spanish,
    Swedish,
}

impl StemmerLanguage {
    fn algorithm(self) -> Algorithm {
        match self {
            StemmerLanguage::English => Algorithm::English,
            StemmerLanguage::Danish => Algorithm::Danish,
            StemmerLanguage::Dutch => Algorithm::Dutch,
            StemmerLanguage::Finnish => Algorithm::Finnish,
            StemmerLanguage::French => Algorithm::French,
            StemmerLanguage::German => Algorithm::German,
            StemmerLanguage::Italian => Algorithm::Italian,
            StemmerLanguage::Norwegian => Algorithm::Norwegian,
            StemmerLanguage::Portuguese => Algorithm::Portuguese,
            StemmerLanguage::Spanish => Algorithm::Spanish,
            StemmerLanguage::Swedish => Algorithm::Swedish,
        }
    }
}

/// Suffix-stripping stemmer backed by the snowball algorithms
pub struct SnowballStemmer {
    language: StemmerLanguage,
    stemmer: Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: StemmerLanguage) -> Self {
        Self {
            language,
            stemmer: Stemmer::create(language.algorithm()),
        }
    }

    pub fn language(&self) -> StemmerLanguage {
        self.language
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new(StemmerLanguage::English)
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl TokenNormalizer for SnowballStemmer {
    #[inline]
    fn normalize(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }
}
