// file: src/config.rs
// description: application configuration management with toml and env support
// reference: https://docs.rs/config

use crate::error::{BlogError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub blog: BlogConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlogConfig {
    /// Root of the local git checkout of the site repository.
    #[serde(default = "default_repo_path")]
    pub repo_path: PathBuf,
    /// Posts directory, relative to `repo_path`.
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_repo")]
    pub repo: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Held for future API-based calls; the publishing flow itself relies
    /// on the checkout's configured credentials.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_repo_path() -> PathBuf {
    PathBuf::from("./blog-system")
}

fn default_posts_dir() -> String {
    "src/content/posts".to_string()
}

fn default_owner() -> String {
    "example".to_string()
}

fn default_repo() -> String {
    "blog-system".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            repo_path: default_repo_path(),
            posts_dir: default_posts_dir(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            branch: default_branch(),
            token: None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("BLOG_MCP")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| BlogError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| BlogError::Config(e.to_string()))?;

        if config.github.token.is_none() {
            config.github.token = std::env::var("GITHUB_TOKEN").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            blog: BlogConfig::default(),
            github: GithubConfig::default(),
            http: HttpConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if Path::new(&self.blog.posts_dir).is_absolute() {
            return Err(BlogError::Config(
                "blog.posts_dir must be relative to blog.repo_path".to_string(),
            ));
        }

        if self.http.port == 0 {
            return Err(BlogError::Config(
                "http.port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.blog.posts_dir, "src/content/posts");
        assert_eq!(config.github.branch, "main");
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_absolute_posts_dir_rejected() {
        let mut config = Config::default_config();
        config.blog.posts_dir = "/etc/posts".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = Config::default_config();
        config.http.port = 0;
        assert!(config.validate().is_err());
    }
}
