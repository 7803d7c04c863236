// file: src/models/post.rs
// description: published post and upload receipt models
// reference: internal data structures

use crate::error::PublishStage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One entry from scanning the posts directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub filename: String,
    pub title: String,
    pub path: PathBuf,
}

/// Outcome of a successful publish. `stage` is always `Pushed` on the
/// success path; failures surface the last completed stage through
/// `BlogError::Publish` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub filename: String,
    pub filepath: PathBuf,
    pub url: String,
    pub stage: PublishStage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageReceipt {
    pub filename: String,
    /// Path to reference from post bodies, e.g. `./images/foo.jpeg`.
    pub relative_path: String,
    pub url: String,
}
