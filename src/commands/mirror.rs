use crate::areas::repository::Repository;
use crate::commands::setup::REMOTE;
use crate::commands::sync::TIMESTAMP_FORMAT;
use anyhow::Context;
use chrono::Local;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Force-Mirror: overwrite the remote branch with the local state.
    ///
    /// Requires explicit confirmation; declining exits cleanly with zero
    /// repository mutations. An empty mirror commit is tolerated, a rejected
    /// forced push is not.
    pub async fn mirror(&mut self, branch: &str) -> anyhow::Result<()> {
        let confirmed = {
            let mut writer = self.writer();
            self.console().confirm(
                &format!("Force push will overwrite {REMOTE}/{branch}. Continue?"),
                writer.as_mut(),
            )?
        };

        if !confirmed {
            writeln!(self.writer(), "{}", "Aborted, remote left untouched".yellow())?;
            return Ok(());
        }

        self.git()
            .run(&["add", "-A"])
            .await
            .context("Failed to stage local changes")?;

        let message = format!("Mirror at {}", Local::now().format(TIMESTAMP_FORMAT));
        if !self.git().run_ok(&["commit", "-m", &message]).await? {
            writeln!(
                self.writer(),
                "{}",
                "Nothing new to commit, mirroring the current state".yellow()
            )?;
        }

        self.push_large_files(branch).await?;

        self.git()
            .run(&["push", "--force", REMOTE, branch])
            .await
            .context("Forced push rejected by the remote")?;

        writeln!(
            self.writer(),
            "{}",
            format!("Mirrored local state onto {REMOTE}/{branch}").green()
        )?;

        Ok(())
    }
}
