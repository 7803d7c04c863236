// file: src/publisher/git.rs
// description: git client shelling out to the version-control binary
// reference: https://docs.rs/tokio/latest/tokio/process

use crate::error::{BlogError, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Thin wrapper over the `git` binary. Every invocation carries an explicit
/// working directory so no process-wide state is mutated between calls.
/// Invocations block until the subprocess exits; there is no timeout, so a
/// hung remote stalls the current call.
pub struct GitClient {
    repo_root: PathBuf,
}

impl GitClient {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub async fn stage(&self, path: &Path) -> Result<()> {
        let path_arg = path.display().to_string();
        self.run(&["add", &path_arg]).await
    }

    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await
    }

    pub async fn push(&self) -> Result<()> {
        self.run(&["push"]).await
    }

    async fn run(&self, args: &[&str]) -> Result<()> {
        debug!("Running git {:?} in {}", args, self.repo_root.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .await?;

        if output.status.success() {
            return Ok(());
        }

        let status = output
            .status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "terminated by signal".to_string());

        Err(BlogError::Git {
            command: format!("git {}", args.join(" ")),
            status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_commit_outside_repository_fails() {
        let temp = TempDir::new().unwrap();
        let client = GitClient::new(temp.path());

        // Not a git repository, so either git exits non-zero or the binary
        // is missing entirely; both must surface as an error.
        let result = client.commit("Add post: test").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_git_error_carries_command() {
        let temp = TempDir::new().unwrap();
        let client = GitClient::new(temp.path());

        if let Err(BlogError::Git { command, .. }) = client.push().await {
            assert_eq!(command, "git push");
        }
    }
}
