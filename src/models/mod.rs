// file: src/models/mod.rs
// description: data model module exports
// reference: internal module structure

pub mod post;

pub use post::{ImageReceipt, PostSummary, PublishReceipt};
