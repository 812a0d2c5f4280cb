use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of one search cycle on the client side.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("search request failed: {0}")]
    Transport(String),

    #[error("search endpoint answered with status {0}")]
    Status(u16),

    #[error("search response is not valid JSON: {0}")]
    Decode(String),

    #[error("search response is not a JSON array")]
    NotAnArray,

    #[error("result {index} has no string `{field}` field")]
    MalformedRecord { index: usize, field: &'static str },

    #[error("failed to render results: {0}")]
    Render(#[from] askama::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Status(status.as_u16())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
