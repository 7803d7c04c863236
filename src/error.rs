// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlogError>;

/// How far a publish got before failing. The file may already be on disk
/// (or committed) when a later git step fails; there is no rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PublishStage {
    Pending,
    Written,
    Staged,
    Committed,
    Pushed,
}

impl fmt::Display for PublishStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PublishStage::Pending => "nothing written",
            PublishStage::Written => "file written",
            PublishStage::Staged => "file staged",
            PublishStage::Committed => "commit created",
            PublishStage::Pushed => "pushed to remote",
        };
        write!(f, "{}", label)
    }
}

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git {command} failed ({status}): {stderr}")]
    Git {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Publish stopped ({completed}): {source}")]
    Publish {
        completed: PublishStage,
        #[source]
        source: Box<BlogError>,
    },

    #[error("Invalid image payload: {0}")]
    ImageDecode(#[from] base64::DecodeError),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Validation error: {0}")]
    Validation(String),
}
