//! This crate is a configurable text preprocessing pipeline.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod text;
pub mod vectorizer;

/// Text Preprocessing Pipeline
/// The top-level struct of this crate.
/// It runs the stages a request asks for over one text and collects every
/// intermediate artifact into `Results`.
///
/// Stages, in order:
/// - cleaning (markup, URLs, digits, punctuation)
/// - lowercasing
/// - tokenization
/// - stopword removal
/// - lemmatization or stemming
/// - vocabulary, bag of words, term frequency
/// - sentence-level TF-IDF
/// - POS tagging
///
/// Requesting a later stage pulls in the earlier stages it depends on.
///
/// `Pipeline<E>` is generic over the TF-IDF engine `E`
/// (e.g., `SentenceTFIDFEngine`).
///
/// # Thread Safety
/// The pipeline is read-only after construction and can be shared between
/// threads. `Pipeline::global()` returns a process-wide instance and
/// `process_batch` handles independent requests in parallel with rayon.
pub use pipeline::Pipeline;

/// Processing flags and request
/// `Options` holds the per-request boolean flags, `ProcessRequest` bundles them
/// with the text and optional custom stopwords and validates the combination.
pub use pipeline::{Options, ProcessRequest};

/// Processing results
/// `Results` keeps only the artifacts of stages that ran. `ResultKey` names them.
///
/// # Serialization
/// Supported. Keys follow stage order, absent stages are omitted.
pub use pipeline::{ResultKey, Results};

/// Error type of this crate
pub use error::{PipelineError, Result};

/// Pipeline configuration loaded from TOML
pub use config::PipelineConfig;

/// Term Frequency structure
/// Counts term occurrences of one token stream.
/// Used as base data for TF and bag-of-words calculation.
pub use vectorizer::term::TermFrequency;

/// TF IDF Calculation Engine Trait
/// By implementing this trait, you can plug a different TF-IDF strategy into
/// `Pipeline<E>`.
/// The default implementation, `SentenceTFIDFEngine`, treats each sentence of
/// the input as one document.
pub use vectorizer::tfidf::{SentenceTFIDFEngine, TFIDFEngine};

/// Pluggable linguistic collaborators
/// - `TokenNormalizer`: per-token normalization (`SnowballStemmer`, `RuleLemmatizer`)
/// - `PosTagger`: part-of-speech tagging (`LexiconTagger`)
pub use text::normalize::{RuleLemmatizer, SnowballStemmer, StemmerLanguage, TokenNormalizer};
pub use text::pos::{LexiconTagger, PosTagger};

/// Stopword set
pub use text::stopwords::StopwordSet;
