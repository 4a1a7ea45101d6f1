pub mod lemmatizer;
pub mod stemmer;

pub use lemmatizer::RuleLemmatizer;
pub use stemmer::{SnowballStemmer, StemmerLanguage};

/// Token normalization capability (stemming, lemmatization)
///
/// Implementations must be pure per-token functions: deterministic, no state
/// carried between tokens, safe to call from many threads at once.
pub trait TokenNormalizer: Send + Sync {
    /// Map one token to its normalized form
    fn normalize(&self, token: &str) -> String;

    /// Normalize a token stream, keeping order and length
    fn normalize_all(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.normalize(token)).collect()
    }
}
