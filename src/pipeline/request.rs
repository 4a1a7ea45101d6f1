use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::pipeline::options::Options;

/// One unit of work for the pipeline, as a caller submits it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub text: String,
    #[serde(default)]
    pub options: Options,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_stopwords: Option<Vec<String>>,
}

impl ProcessRequest {
    pub fn new(text: impl Into<String>, options: Options) -> Self {
        Self {
            text: text.into(),
            options,
            custom_stopwords: None,
        }
    }

    /// Request running every stage
    pub fn full(text: impl Into<String>, custom_stopwords: Option<Vec<String>>) -> Self {
        Self {
            text: text.into(),
            options: Options::full(),
            custom_stopwords,
        }
    }

    /// Reject requests the pipeline should never see
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(PipelineError::EmptyText);
        }
        if !self.options.any() {
            return Err(PipelineError::NoOptionSelected);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_blank_text_is_rejected() {
        for text in ["", "   ", "\n\t"] {
            let request = ProcessRequest::new(text, Options::full());
            assert!(matches!(request.validate(), Err(PipelineError::EmptyText)));
        }
    }

    #[test]
    fn no_option_is_rejected() {
        let request = ProcessRequest::new("some text", Options::new());
        assert!(matches!(request.validate(), Err(PipelineError::NoOptionSelected)));
    }

    #[test]
    fn full_request_is_valid() {
        let request = ProcessRequest::full("some text", Some(vec!["some".into()]));
        assert!(request.validate().is_ok());
        assert!(request.options.full_preprocessing);
    }

    #[test]
    fn deserializes_from_json_body() {
        let body = r#"{
            "text": "The quick brown fox",
            "options": {"tokenization": true, "stopword_removal": true},
            "custom_stopwords": ["quick"]
        }"#;
        let request: ProcessRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.options.enabled_names(), vec!["tokenization", "stopword_removal"]);
        assert_eq!(request.custom_stopwords, Some(vec!["quick".to_string()]));

        let request: ProcessRequest = serde_json::from_str(r#"{"text": "x"}"#).unwrap();
        assert!(!request.options.any());
        assert!(request.custom_stopwords.is_none());
    }
}
