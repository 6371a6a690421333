use thiserror::Error;

/// Errors from parsing a `/search` command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The command grammar was violated: no repository token after `/search`.
    #[error("repo not found in {0}")]
    MissingRepoName(String),
}

/// Errors from the repository search service.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("search request failed: {0}")]
    Transport(String),

    #[error("search API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode search response: {0}")]
    Decode(String),
}

/// Errors from selecting the trending batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("there are not trending repos yet for today, try again later")]
    NoResults,
}

/// Errors from applying the message template to a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("template field missing: {field}")]
    TemplateFieldMissing { field: &'static str },
}

/// Errors from sending messages through the chat transport.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("message delivery failed: {0}")]
    Transport(String),

    #[error("chat platform rejected the message: {0}")]
    Rejected(String),

    #[error("{failed} of {attempted} messages could not be delivered")]
    Partial { failed: usize, attempted: usize },
}

/// Any failure that aborts the processing of one chat event.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("none of the {0} selected repositories could be rendered")]
    NothingRendered(usize),
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("environment variable {0} is not set")]
    MissingEnv(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_repo_name_display() {
        let err = ExtractError::MissingRepoName("/search".to_string());
        assert_eq!(err.to_string(), "repo not found in /search");
    }

    #[test]
    fn test_no_results_is_friendly() {
        assert!(SelectError::NoResults.to_string().contains("try again later"));
    }

    #[test]
    fn test_pipeline_error_is_transparent() {
        let err: PipelineError = RenderError::TemplateFieldMissing { field: "html_url" }.into();
        assert_eq!(err.to_string(), "template field missing: html_url");
    }

    #[test]
    fn test_partial_delivery_display() {
        let err = DeliveryError::Partial {
            failed: 2,
            attempted: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 messages could not be delivered");
    }
}
