use crate::areas::repository::Repository;
use anyhow::Context;

const DEFAULT_BRANCH: &str = "master";
pub(crate) const REMOTE: &str = "origin";

impl Repository {
    /// Ensure a repository exists at the working tree and that an origin
    /// remote is configured, creating or updating either as requested.
    pub async fn setup(&mut self, remote: Option<&str>) -> anyhow::Result<()> {
        if !self.path().join(".git").exists() {
            self.git()
                .run(&["init"])
                .await
                .context("Failed to initialize repository")?;
        }

        if let Some(url) = remote {
            if self.git().has_remote(REMOTE).await? {
                self.git()
                    .run(&["remote", "set-url", REMOTE, url])
                    .await
                    .context("Failed to update the origin remote")?;
            } else {
                self.git()
                    .run(&["remote", "add", REMOTE, url])
                    .await
                    .context("Failed to add the origin remote")?;
            }
        }

        if !self.git().has_remote(REMOTE).await? {
            anyhow::bail!("No 'origin' remote is configured; pass --remote <url> to set one");
        }

        Ok(())
    }

    /// Branch to sync: the explicit override when given, otherwise the
    /// currently checked out branch, otherwise the default branch name.
    pub async fn resolve_branch(&self, requested: Option<&str>) -> anyhow::Result<String> {
        if let Some(branch) = requested {
            return Ok(branch.to_string());
        }

        Ok(self
            .git()
            .current_branch()
            .await?
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string()))
    }
}
