use anyhow::Context;
use derive_new::new;
use std::path::Path;
use tokio::process::Command;

/// Thin driver over the system `git` binary, scoped to one working tree.
///
/// Commands inherit the parent's stdio so git's own diagnostics reach the
/// operator unfiltered; queries capture stdout instead.
#[derive(Debug, new)]
pub struct GitCli {
    workdir: Box<Path>,
}

impl GitCli {
    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new("git");
        command.arg("-C").arg(&*self.workdir).args(args);
        command
    }

    /// Run a git subcommand, failing on a non-zero exit status.
    pub async fn run(&self, args: &[&str]) -> anyhow::Result<()> {
        if !self.run_ok(args).await? {
            anyhow::bail!("git {} failed", args.join(" "));
        }

        Ok(())
    }

    /// Run a git subcommand, reporting success as a boolean instead of
    /// failing. Used at the call sites where a non-zero exit is tolerated.
    pub async fn run_ok(&self, args: &[&str]) -> anyhow::Result<bool> {
        let status = self
            .command(args)
            .status()
            .await
            .with_context(|| format!("Failed to invoke git {}", args.join(" ")))?;

        Ok(status.success())
    }

    /// Run a git subcommand and capture its stdout, failing on a non-zero
    /// exit status.
    pub async fn capture(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = self
            .command(args)
            .output()
            .await
            .with_context(|| format!("Failed to invoke git {}", args.join(" ")))?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8(output.stdout)?)
    }

    /// Whether the tracked portion of the tree (staged and unstaged) matches
    /// the last commit. Untracked files are deliberately excluded so that
    /// they never force a stash.
    pub async fn is_clean_tracked(&self) -> anyhow::Result<bool> {
        let status = self
            .capture(&["status", "--porcelain", "--untracked-files=no"])
            .await?;

        Ok(status.trim().is_empty())
    }

    /// Paths (files or directories) that are neither tracked nor excluded by
    /// ignore rules. Order is whatever git yields.
    pub async fn untracked_paths(&self) -> anyhow::Result<Vec<String>> {
        let status = self.capture(&["status", "--porcelain"]).await?;

        let paths = status
            .lines()
            .filter_map(|line| line.strip_prefix("?? "))
            .map(|path| path.trim_matches('"').to_string())
            .collect();

        Ok(paths)
    }

    /// Name of the currently checked out branch, or `None` when HEAD is
    /// detached.
    pub async fn current_branch(&self) -> anyhow::Result<Option<String>> {
        let output = self
            .command(&["symbolic-ref", "--short", "HEAD"])
            .output()
            .await
            .context("Failed to query the current branch")?;

        if output.status.success() {
            Ok(Some(String::from_utf8(output.stdout)?.trim().to_string()))
        } else {
            Ok(None)
        }
    }

    /// Whether a remote with the given name is configured.
    pub async fn has_remote(&self, name: &str) -> anyhow::Result<bool> {
        let output = self
            .command(&["remote", "get-url", name])
            .output()
            .await
            .context("Failed to query the configured remotes")?;

        Ok(output.status.success())
    }
}
