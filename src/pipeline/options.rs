use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PipelineError, Result};

/// Processing flags of one request
///
/// Missing keys deserialize to `false`; unknown keys are ignored.
/// `full_preprocessing` switches every stage on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub tokenization: bool,
    pub lowercasing: bool,
    pub stopword_removal: bool,
    pub lemmatization: bool,
    pub stemming: bool,
    pub vocabulary: bool,
    pub bag_of_words: bool,
    pub tf: bool,
    pub tfidf: bool,
    pub pos_tagging: bool,
    pub full_preprocessing: bool,
}

impl Options {
    /// Every flag name, in stage order
    pub const NAMES: [&'static str; 11] = [
        "tokenization",
        "lowercasing",
        "stopword_removal",
        "lemmatization",
        "stemming",
        "vocabulary",
        "bag_of_words",
        "tf",
        "tfidf",
        "pos_tagging",
        "full_preprocessing",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Only `full_preprocessing` set
    pub fn full() -> Self {
        Self {
            full_preprocessing: true,
            ..Self::default()
        }
    }

    /// Build from a name -> flag map
    /// Missing names are `false`, unknown names are logged and skipped.
    pub fn from_map<I, K>(flags: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut options = Self::default();
        for (name, value) in flags {
            match options.flag_mut(name.as_ref()) {
                Some(flag) => *flag = value,
                None => warn!(option = name.as_ref(), "ignoring unknown processing option"),
            }
        }
        options
    }

    /// Switch one flag on by name
    pub fn enable(&mut self, name: &str) -> Result<&mut Self> {
        let flag = self
            .flag_mut(name)
            .ok_or_else(|| PipelineError::UnknownOption(name.to_string()))?;
        *flag = true;
        Ok(self)
    }

    /// Switch on each comma/space separated name, e.g. `"tokenization,tf"`
    pub fn parse_list(list: &str) -> Result<Self> {
        let mut options = Self::default();
        for name in list.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty()) {
            options.enable(name)?;
        }
        Ok(options)
    }

    /// Value of a flag by name, `None` for unknown names
    pub fn get(&self, name: &str) -> Option<bool> {
        let value = match name {
            "tokenization" => self.tokenization,
            "lowercasing" => self.lowercasing,
            "stopword_removal" => self.stopword_removal,
            "lemmatization" => self.lemmatization,
            "stemming" => self.stemming,
            "vocabulary" => self.vocabulary,
            "bag_of_words" => self.bag_of_words,
            "tf" => self.tf,
            "tfidf" => self.tfidf,
            "pos_tagging" => self.pos_tagging,
            "full_preprocessing" => self.full_preprocessing,
            _ => return None,
        };
        Some(value)
    }

    fn flag_mut(&mut self, name: &str) -> Option<&mut bool> {
        let flag = match name {
            "tokenization" => &mut self.tokenization,
            "lowercasing" => &mut self.lowercasing,
            "stopword_removal" => &mut self.stopword_removal,
            "lemmatization" => &mut self.lemmatization,
            "stemming" => &mut self.stemming,
            "vocabulary" => &mut self.vocabulary,
            "bag_of_words" => &mut self.bag_of_words,
            "tf" => &mut self.tf,
            "tfidf" => &mut self.tfidf,
            "pos_tagging" => &mut self.pos_tagging,
            "full_preprocessing" => &mut self.full_preprocessing,
            _ => return None,
        };
        Some(flag)
    }

    /// At least one flag set
    pub fn any(&self) -> bool {
        Self::NAMES.iter().any(|name| self.get(name) == Some(true))
    }

    /// Names of the flags that are set
    pub fn enabled_names(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .copied()
            .filter(|name| self.get(name) == Some(true))
            .collect()
    }
}

/// Which stages a request triggers
///
/// Derived from `Options` alone through a fixed trigger table; data-dependent
/// guards (empty token stream, missing vocabulary) are applied while the
/// pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagePlan {
    pub clean: bool,
    pub lowercase: bool,
    pub tokenize: bool,
    pub remove_stopwords: bool,
    pub lemmatize: bool,
    pub stem: bool,
    pub vocabulary: bool,
    pub bag_of_words: bool,
    pub term_frequency: bool,
    pub tfidf: bool,
    pub pos_tags: bool,
}

impl StagePlan {
    /// Evaluate the trigger table in stage order
    pub fn resolve(options: &Options) -> Self {
        let o = options;
        let full = o.full_preprocessing;

        let term_frequency = o.tf || o.tfidf || full;
        let bag_of_words = o.bag_of_words || term_frequency;
        let vocabulary = o.vocabulary || bag_of_words;
        let lemmatize = o.lemmatization || full;
        let stem = o.stemming && !lemmatize;
        let remove_stopwords = o.stopword_removal || o.lemmatization || o.stemming || vocabulary || full;
        let tokenize = o.tokenization || remove_stopwords || o.pos_tagging;
        // pos tagging alone runs on original-case tokens
        let lowercase = o.lowercasing || o.tokenization || remove_stopwords;
        let clean = o.any();

        Self {
            clean,
            lowercase,
            tokenize,
            remove_stopwords,
            lemmatize,
            stem,
            vocabulary,
            bag_of_words,
            term_frequency,
            tfidf: o.tfidf || full,
            pos_tags: o.pos_tagging || full,
        }
    }
}
