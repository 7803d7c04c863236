// file: src/mcp/dispatcher.rs
// description: named tool dispatch over the blog publisher
// reference: https://modelcontextprotocol.io/docs/concepts/tools

use crate::error::{BlogError, Result};
use crate::publisher::BlogPublisher;
use serde_json::{Map, Value, json};
use tracing::info;

pub const CREATE_BLOG_POST: &str = "create_blog_post";
pub const LIST_BLOG_POSTS: &str = "list_blog_posts";
pub const UPLOAD_IMAGE: &str = "upload_image";

/// Static contract surface advertised to callers: name, human-readable
/// description and JSON schema of the expected arguments.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: CREATE_BLOG_POST,
            description: "Create a new blog post: saves it as Markdown, commits and pushes \
                          it to GitHub, which triggers a site redeploy.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {"type": "string", "description": "Post title"},
                    "content": {"type": "string", "description": "Post body (Markdown)"},
                    "tags": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Tag list"
                    },
                    "description": {"type": "string", "description": "Short summary"}
                },
                "required": ["title", "content"]
            }),
        },
        ToolDescriptor {
            name: LIST_BLOG_POSTS,
            description: "List all existing blog posts.",
            input_schema: json!({"type": "object", "properties": {}}),
        },
        ToolDescriptor {
            name: UPLOAD_IMAGE,
            description: "Upload a base64-encoded image into the blog's images directory \
                          so posts can reference it as ./images/<filename>.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filename": {"type": "string", "description": "Target filename, e.g. photo.jpeg"},
                    "base64_content": {"type": "string", "description": "Base64-encoded image bytes"}
                },
                "required": ["filename", "base64_content"]
            }),
        },
    ]
}

/// Routes named tool calls to the publisher and renders results as text.
/// This is the single error boundary: every failure from a delegated call
/// comes back as an `Error: ...` message, never as a transport-level crash.
pub struct ToolDispatcher {
    publisher: BlogPublisher,
}

impl ToolDispatcher {
    pub fn new(publisher: BlogPublisher) -> Self {
        Self { publisher }
    }

    pub async fn dispatch(&self, name: &str, arguments: &Map<String, Value>) -> String {
        match self.try_dispatch(name, arguments).await {
            Ok(text) => text,
            Err(e) => format!("Error: {}", e),
        }
    }

    async fn try_dispatch(&self, name: &str, arguments: &Map<String, Value>) -> Result<String> {
        match name {
            CREATE_BLOG_POST => self.create_blog_post(arguments).await,
            LIST_BLOG_POSTS => self.list_blog_posts().await,
            UPLOAD_IMAGE => self.upload_image(arguments).await,
            // Deliberate soft-fail: an unrecognized tool gets a textual
            // reply rather than a protocol error.
            other => Ok(format!("Unknown tool: {}", other)),
        }
    }

    async fn create_blog_post(&self, arguments: &Map<String, Value>) -> Result<String> {
        let title = required_str(arguments, "title")?;
        let content = required_str(arguments, "content")?;
        let tags = optional_string_array(arguments, "tags")?;
        let description = optional_str(arguments, "description");

        info!("Tool call: create_blog_post '{}'", title);
        let receipt = self
            .publisher
            .create_post(title, content, &tags, description)
            .await?;

        Ok(format!(
            "Blog post created!\n\n\
             **Title**: {}\n\
             **File**: {}\n\n\
             GitHub: {}\n\n\
             Pushed to GitHub; the site will redeploy automatically.",
            title, receipt.filename, receipt.url
        ))
    }

    async fn list_blog_posts(&self) -> Result<String> {
        info!("Tool call: list_blog_posts");
        let posts = self.publisher.list_posts().await?;

        if posts.is_empty() {
            return Ok("No posts yet.".to_string());
        }

        let listing = posts
            .iter()
            .map(|p| format!("- **{}**", p.title))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(format!("{} post(s):\n\n{}", posts.len(), listing))
    }

    async fn upload_image(&self, arguments: &Map<String, Value>) -> Result<String> {
        let filename = required_str(arguments, "filename")?;
        let base64_content = required_str(arguments, "base64_content")?;

        info!("Tool call: upload_image '{}'", filename);
        let receipt = self.publisher.upload_image(filename, base64_content).await?;

        Ok(format!(
            "Image uploaded!\n\n\
             **File**: {}\n\
             **Reference it as**: {}\n\n\
             GitHub: {}",
            receipt.filename, receipt.relative_path, receipt.url
        ))
    }
}

fn required_str<'a>(arguments: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| BlogError::MissingArgument(key.to_string()))
}

fn optional_str<'a>(arguments: &'a Map<String, Value>, key: &str) -> &'a str {
    arguments.get(key).and_then(Value::as_str).unwrap_or("")
}

fn optional_string_array(arguments: &Map<String, Value>, key: &str) -> Result<Vec<String>> {
    match arguments.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => {
            serde_json::from_value(value.clone()).map_err(|e| BlogError::InvalidArgument {
                name: key.to_string(),
                message: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn dispatcher_in(temp: &TempDir) -> ToolDispatcher {
        let mut config = Config::default_config();
        config.blog.repo_path = temp.path().to_path_buf();
        config.blog.posts_dir = "posts".to_string();
        ToolDispatcher::new(BlogPublisher::new(config))
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_descriptor_surface() {
        let tools = descriptors();
        let names: Vec<_> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names, vec![CREATE_BLOG_POST, LIST_BLOG_POSTS, UPLOAD_IMAGE]);

        for tool in &tools {
            assert_eq!(tool.input_schema["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_soft_fails() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_in(&temp);

        let reply = dispatcher.dispatch("delete_everything", &Map::new()).await;
        assert!(reply.contains("Unknown tool"));
        assert!(reply.contains("delete_everything"));
    }

    #[tokio::test]
    async fn test_missing_content_is_error_text() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_in(&temp);

        let reply = dispatcher
            .dispatch(CREATE_BLOG_POST, &args(json!({"title": "T"})))
            .await;
        assert!(reply.starts_with("Error:"));
        assert!(reply.contains("content"));
    }

    #[tokio::test]
    async fn test_list_on_empty_blog() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_in(&temp);

        let reply = dispatcher.dispatch(LIST_BLOG_POSTS, &Map::new()).await;
        assert_eq!(reply, "No posts yet.");
    }

    #[tokio::test]
    async fn test_list_after_written_post() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default_config();
        config.blog.repo_path = temp.path().to_path_buf();
        config.blog.posts_dir = "posts".to_string();
        let publisher = BlogPublisher::new(config);
        publisher
            .write_post("Hello World", "content", &[], "")
            .await
            .unwrap();

        let dispatcher = ToolDispatcher::new(publisher);
        let reply = dispatcher.dispatch(LIST_BLOG_POSTS, &Map::new()).await;
        assert!(reply.contains("1 post(s)"));
        assert!(reply.contains("**Hello World**"));
    }

    #[tokio::test]
    async fn test_non_string_tags_is_error_text() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_in(&temp);

        let reply = dispatcher
            .dispatch(
                CREATE_BLOG_POST,
                &args(json!({"title": "T", "content": "c", "tags": [1, 2]})),
            )
            .await;
        assert!(reply.starts_with("Error:"));
        assert!(reply.contains("tags"));
    }

    #[tokio::test]
    async fn test_create_failure_reports_stage_not_crash() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_in(&temp);

        // No git repository under the temp dir: the write succeeds, the
        // stage step fails, and the reply must carry the partial state.
        let reply = dispatcher
            .dispatch(
                CREATE_BLOG_POST,
                &args(json!({"title": "Hello", "content": "body"})),
            )
            .await;
        assert!(reply.starts_with("Error:"));
        assert!(reply.contains("file written"));
    }
}
