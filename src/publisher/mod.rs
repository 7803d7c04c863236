// file: src/publisher/mod.rs
// description: blog publisher owning filesystem and git side effects
// reference: internal module structure

pub mod frontmatter;
pub mod git;
pub mod slug;

pub use git::GitClient;

use crate::config::Config;
use crate::error::{BlogError, PublishStage, Result};
use crate::models::{ImageReceipt, PostSummary, PublishReceipt};
use crate::utils::Validator;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::Local;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

const IMAGES_SUBDIR: &str = "images";

/// Owns all side effects against the checkout: writing posts, staging,
/// committing and pushing them. One publisher per process; calls are
/// expected to run one at a time.
pub struct BlogPublisher {
    config: Config,
    git: GitClient,
}

impl BlogPublisher {
    pub fn new(config: Config) -> Self {
        let git = GitClient::new(&config.blog.repo_path);
        Self { config, git }
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.config.blog.repo_path.join(&self.config.blog.posts_dir)
    }

    fn images_dir(&self) -> PathBuf {
        self.posts_dir().join(IMAGES_SUBDIR)
    }

    /// Filename for a post published today.
    pub fn generate_filename(&self, title: &str) -> String {
        slug::filename_for(title, Local::now().date_naive())
    }

    /// Full post document (front matter + body) dated today.
    pub fn format_markdown(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
        description: &str,
    ) -> String {
        frontmatter::render(title, content, tags, description, Local::now().date_naive())
    }

    fn post_url(&self, filename: &str) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}/{}",
            self.config.github.owner,
            self.config.github.repo,
            self.config.github.branch,
            self.config.blog.posts_dir,
            filename
        )
    }

    fn image_url(&self, filename: &str) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}/{}/{}",
            self.config.github.owner,
            self.config.github.repo,
            self.config.github.branch,
            self.config.blog.posts_dir,
            IMAGES_SUBDIR,
            filename
        )
    }

    /// Filesystem-only half of `create_post`: ensure the posts directory
    /// exists and write the document, silently overwriting any existing
    /// file at the same path.
    pub async fn write_post(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
        description: &str,
    ) -> Result<(String, PathBuf)> {
        let filename = self.generate_filename(title);
        let document = self.format_markdown(title, content, tags, description);

        let posts_dir = self.posts_dir();
        fs::create_dir_all(&posts_dir).await?;

        let filepath = posts_dir.join(&filename);
        fs::write(&filepath, document).await?;
        debug!("Wrote post to {}", filepath.display());

        Ok((filename, filepath))
    }

    /// Publish a post end to end: write, stage, commit, push. A failing
    /// step aborts the rest and reports the last completed stage; a file
    /// already written is left in place.
    pub async fn create_post(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
        description: &str,
    ) -> Result<PublishReceipt> {
        let (filename, filepath) = self
            .write_post(title, content, tags, description)
            .await
            .map_err(|e| publish_failure(PublishStage::Pending, e))?;

        self.git
            .stage(&filepath)
            .await
            .map_err(|e| publish_failure(PublishStage::Written, e))?;

        self.git
            .commit(&format!("Add post: {}", title))
            .await
            .map_err(|e| publish_failure(PublishStage::Staged, e))?;

        self.git
            .push()
            .await
            .map_err(|e| publish_failure(PublishStage::Committed, e))?;

        let url = self.post_url(&filename);
        info!("Published {} -> {}", filename, url);

        Ok(PublishReceipt {
            filename,
            filepath,
            url,
            stage: PublishStage::Pushed,
        })
    }

    /// List posts by scanning the posts directory. An absent directory is
    /// an empty blog, not an error. Titles come from the front matter and
    /// fall back to the filename; order is filesystem enumeration order.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>> {
        let posts_dir = self.posts_dir();
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut entries = fs::read_dir(&posts_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().to_string();
            let content = fs::read_to_string(&path).await?;
            let title = frontmatter::extract_title(&content).unwrap_or_else(|| filename.clone());

            posts.push(PostSummary {
                filename,
                title,
                path,
            });
        }

        Ok(posts)
    }

    /// Store a base64-encoded image next to the posts and push it, so a
    /// subsequent post can reference it as `./images/<filename>`.
    pub async fn upload_image(&self, filename: &str, base64_content: &str) -> Result<ImageReceipt> {
        Validator::validate_image_filename(filename)?;
        let bytes = BASE64.decode(base64_content.trim())?;

        let images_dir = self.images_dir();
        fs::create_dir_all(&images_dir)
            .await
            .map_err(|e| publish_failure(PublishStage::Pending, e.into()))?;

        let filepath = images_dir.join(filename);
        fs::write(&filepath, bytes)
            .await
            .map_err(|e| publish_failure(PublishStage::Pending, e.into()))?;

        self.git
            .stage(&filepath)
            .await
            .map_err(|e| publish_failure(PublishStage::Written, e))?;

        self.git
            .commit(&format!("Add image: {}", filename))
            .await
            .map_err(|e| publish_failure(PublishStage::Staged, e))?;

        self.git
            .push()
            .await
            .map_err(|e| publish_failure(PublishStage::Committed, e))?;

        info!("Uploaded image {}", filename);

        Ok(ImageReceipt {
            filename: filename.to_string(),
            relative_path: format!("./{}/{}", IMAGES_SUBDIR, filename),
            url: self.image_url(filename),
        })
    }
}

fn publish_failure(completed: PublishStage, source: BlogError) -> BlogError {
    BlogError::Publish {
        completed,
        source: Box::new(source),
    }
}
