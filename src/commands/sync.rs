use crate::areas::repository::Repository;
use crate::commands::setup::REMOTE;
use crate::domain::stash::StashTicket;
use anyhow::Context;
use chrono::Local;
use colored::Colorize;
use std::io::Write;

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Repository {
    /// Safe-Sync: converge with the remote without losing local work.
    ///
    /// Ordered steps, each a precondition of the next: shelve local edits,
    /// rebase onto the remote branch, refresh submodules, restore the shelf,
    /// triage untracked paths, stage what remains, then commit and push
    /// unless nothing changed.
    pub async fn sync(&mut self, branch: &str) -> anyhow::Result<()> {
        let ticket = self.shelve_local_changes().await?;

        self.git()
            .run(&["pull", "--rebase", REMOTE, branch])
            .await
            .context("Rebase onto the remote branch failed; resolve the conflicts and rerun")?;

        self.git()
            .run(&["submodule", "update", "--remote", "--merge"])
            .await
            .context("Failed to update submodules")?;

        if let Some(ticket) = ticket {
            self.restore_local_changes(ticket).await?;
        }

        self.triage_untracked().await?;

        self.git()
            .run(&["add", "-u"])
            .await
            .context("Failed to stage tracked changes")?;

        if self.git().is_clean_tracked().await? {
            writeln!(self.writer(), "{}", "Already up to date, nothing to sync".green())?;
            return Ok(());
        }

        let message = format!("Sync at {}", Local::now().format(TIMESTAMP_FORMAT));
        self.git()
            .run(&["commit", "-m", &message])
            .await
            .context("Failed to create the sync commit")?;

        self.push_large_files(branch).await?;

        self.git()
            .run(&["push", REMOTE, branch])
            .await
            .context("Push rejected by the remote; rerun to converge")?;

        writeln!(
            self.writer(),
            "{}",
            format!("Synced with {REMOTE}/{branch}").green()
        )?;

        Ok(())
    }

    /// Stash tracked modifications when present. Untracked files never
    /// trigger a stash.
    async fn shelve_local_changes(&mut self) -> anyhow::Result<Option<StashTicket>> {
        if self.git().is_clean_tracked().await? {
            return Ok(None);
        }

        let label = format!("grit-sync {}", Local::now().format(TIMESTAMP_FORMAT));
        self.git()
            .run(&["stash", "push", "-m", &label])
            .await
            .context("Failed to stash local changes")?;

        writeln!(self.writer(), "Stashed local changes as '{label}'")?;

        Ok(Some(StashTicket::new(label)))
    }

    /// Reapply the stash created earlier in this run. A pop conflict keeps
    /// the stash entry and aborts the run for manual resolution.
    async fn restore_local_changes(&mut self, ticket: StashTicket) -> anyhow::Result<()> {
        if !self.git().run_ok(&["stash", "pop"]).await? {
            anyhow::bail!(
                "Could not reapply stashed changes ('{}') on the rebased tree; \
                the stash entry was kept, resolve the conflicts manually",
                ticket.label()
            );
        }

        writeln!(
            self.writer(),
            "Restored local changes from '{}'",
            ticket.label()
        )?;

        Ok(())
    }

    /// Upload large-file objects when the repository uses the lfs extension.
    pub(crate) async fn push_large_files(&self, branch: &str) -> anyhow::Result<()> {
        if self.lfs().in_use()? {
            self.lfs()
                .push(REMOTE, branch)
                .await
                .context("Failed to push large-file objects")?;
        }

        Ok(())
    }
}
