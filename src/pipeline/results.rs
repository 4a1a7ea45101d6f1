use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of one artifact in `Results`, in stage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKey {
    OriginalText,
    CleanedText,
    LowercasedText,
    Tokens,
    FilteredTokens,
    LemmatizedTokens,
    StemmedTokens,
    Vocabulary,
    BagOfWords,
    TermFrequency,
    Tfidf,
    PosTags,
}

impl ResultKey {
    pub const ALL: [ResultKey; 12] = [
        ResultKey::OriginalText,
        ResultKey::CleanedText,
        ResultKey::LowercasedText,
        ResultKey::Tokens,
        ResultKey::FilteredTokens,
        ResultKey::LemmatizedTokens,
        ResultKey::StemmedTokens,
        ResultKey::Vocabulary,
        ResultKey::BagOfWords,
        ResultKey::TermFrequency,
        ResultKey::Tfidf,
        ResultKey::PosTags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKey::OriginalText => "original_text",
            ResultKey::CleanedText => "cleaned_text",
            ResultKey::LowercasedText => "lowercased_text",
            ResultKey::Tokens => "tokens",
            ResultKey::FilteredTokens => "filtered_tokens",
            ResultKey::LemmatizedTokens => "lemmatized_tokens",
            ResultKey::StemmedTokens => "stemmed_tokens",
            ResultKey::Vocabulary => "vocabulary",
            ResultKey::BagOfWords => "bag_of_words",
            ResultKey::TermFrequency => "term_frequency",
            ResultKey::Tfidf => "tfidf",
            ResultKey::PosTags => "pos_tags",
        }
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artifacts produced by one `process` call
///
/// `original_text` is always set. Every other field is `Some` exactly when its
/// stage ran, and absent fields are left out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowercased_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemmatized_tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stemmed_tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bag_of_words: Option<IndexMap<String, u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_frequency: Option<IndexMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tfidf: Option<IndexMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_tags: Option<Vec<(String, String)>>,
}

impl Results {
    pub fn new(original_text: &str) -> Self {
        Self {
            original_text: original_text.to_string(),
            ..Self::default()
        }
    }

    /// true when the stage behind `key` ran
    pub fn contains(&self, key: ResultKey) -> bool {
        match key {
            ResultKey::OriginalText => true,
            ResultKey::CleanedText => self.cleaned_text.is_some(),
            ResultKey::LowercasedText => self.lowercased_text.is_some(),
            ResultKey::Tokens => self.tokens.is_some(),
            ResultKey::FilteredTokens => self.filtered_tokens.is_some(),
            ResultKey::LemmatizedTokens => self.lemmatized_tokens.is_some(),
            ResultKey::StemmedTokens => self.stemmed_tokens.is_some(),
            ResultKey::Vocabulary => self.vocabulary.is_some(),
            ResultKey::BagOfWords => self.bag_of_words.is_some(),
            ResultKey::TermFrequency => self.term_frequency.is_some(),
            ResultKey::Tfidf => self.tfidf.is_some(),
            ResultKey::PosTags => self.pos_tags.is_some(),
        }
    }

    /// Keys present, in stage order
    pub fn keys(&self) -> Vec<ResultKey> {
        ResultKey::ALL.into_iter().filter(|key| self.contains(*key)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_results_only_have_original_text() {
        let results = Results::new("hello");
        assert_eq!(results.keys(), vec![ResultKey::OriginalText]);
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json, serde_json::json!({ "original_text": "hello" }));
    }

    #[test]
    fn serialized_keys_follow_stage_order() {
        let mut results = Results::new("Dogs run.");
        results.pos_tags = Some(vec![("Dogs".into(), "NNS".into())]);
        results.tokens = Some(vec!["Dogs".into()]);
        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(
            json,
            r#"{"original_text":"Dogs run.","tokens":["Dogs"],"pos_tags":[["Dogs","NNS"]]}"#
        );
        assert_eq!(results.keys(), vec![ResultKey::OriginalText, ResultKey::Tokens, ResultKey::PosTags]);
    }

    #[test]
    fn key_names_match_serde_fields() {
        let mut results = Results::new("x");
        results.bag_of_words = Some(IndexMap::new());
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get(ResultKey::BagOfWords.as_str()).is_some());
        assert_eq!(ResultKey::Tfidf.to_string(), "tfidf");
    }
}
