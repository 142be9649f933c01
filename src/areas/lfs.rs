use anyhow::Context;
use derive_new::new;
use std::path::Path;
use tokio::process::Command;

const ATTRIBUTES_FILE: &str = ".gitattributes";

/// Driver for the `git lfs` large-file extension.
///
/// Pushes are gated on [`Lfs::in_use`] so repositories without any tracked
/// large files never shell out to an extension that may not be installed.
#[derive(Debug, new)]
pub struct Lfs {
    workdir: Box<Path>,
}

impl Lfs {
    async fn run(&self, args: &[&str]) -> anyhow::Result<()> {
        let status = Command::new("git")
            .arg("-C")
            .arg(&*self.workdir)
            .arg("lfs")
            .args(args)
            .status()
            .await
            .with_context(|| format!("Failed to invoke git lfs {}", args.join(" ")))?;

        if !status.success() {
            anyhow::bail!("git lfs {} failed", args.join(" "));
        }

        Ok(())
    }

    /// Set up the lfs filters for this repository.
    pub async fn install(&self) -> anyhow::Result<()> {
        self.run(&["install", "--local"]).await
    }

    /// Register a path or pattern for large-file storage. The resulting
    /// attributes file still has to be staged by the caller.
    pub async fn track(&self, pattern: &str) -> anyhow::Result<()> {
        self.run(&["track", pattern]).await
    }

    /// Upload the large-file objects referenced by the given branch.
    pub async fn push(&self, remote: &str, branch: &str) -> anyhow::Result<()> {
        self.run(&["push", remote, branch]).await
    }

    /// Whether the working tree declares any lfs-filtered patterns.
    pub fn in_use(&self) -> anyhow::Result<bool> {
        let attributes = self.workdir.join(ATTRIBUTES_FILE);
        if !attributes.exists() {
            return Ok(false);
        }

        let content =
            std::fs::read_to_string(&attributes).context("Failed to read .gitattributes")?;

        Ok(content.lines().any(|line| line.contains("filter=lfs")))
    }

    pub fn attributes_file(&self) -> &str {
        ATTRIBUTES_FILE
    }
}
