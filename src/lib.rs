// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod publisher;
pub mod utils;

pub use config::{BlogConfig, Config, GithubConfig, HttpConfig};
pub use error::{BlogError, PublishStage, Result};
pub use mcp::{ToolDescriptor, ToolDispatcher};
pub use models::{ImageReceipt, PostSummary, PublishReceipt};
pub use publisher::{BlogPublisher, GitClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _descriptors = mcp::descriptors();
    }
}
