use thiserror::Error;

/// Errors surfaced at the request boundary
///
/// `process` itself never fails for well-formed input. These are raised by
/// request validation, option parsing and configuration loading.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Text input cannot be empty")]
    EmptyText,
    #[error("At least one processing option must be selected")]
    NoOptionSelected,
    #[error("Unknown processing option: {0}")]
    UnknownOption(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// true when the caller sent something unprocessable
    /// (maps to a client error at a transport boundary)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PipelineError::EmptyText | PipelineError::NoOptionSelected | PipelineError::UnknownOption(_)
        )
    }
}

impl From<toml::de::Error> for PipelineError {
    fn from(err: toml::de::Error) -> Self {
        PipelineError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_classified() {
        assert!(PipelineError::EmptyText.is_client_error());
        assert!(PipelineError::NoOptionSelected.is_client_error());
        assert!(PipelineError::UnknownOption("x".into()).is_client_error());
        assert!(!PipelineError::Config("bad".into()).is_client_error());
    }

    #[test]
    fn messages_match_boundary_wording() {
        assert_eq!(PipelineError::EmptyText.to_string(), "Text input cannot be empty");
        assert_eq!(
            PipelineError::NoOptionSelected.to_string(),
            "At least one processing option must be selected"
        );
    }
}
