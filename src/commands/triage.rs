use crate::areas::repository::Repository;
use crate::domain::triage::TriageChoice;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Walk every untracked path through the interactive 4-way menu and
    /// apply each decision before moving to the next path. No path is
    /// offered twice within a run.
    pub(crate) async fn triage_untracked(&mut self) -> anyhow::Result<()> {
        let paths = self.git().untracked_paths().await?;
        if paths.is_empty() {
            return Ok(());
        }

        // Lazily set up the lfs filters the first time a large file is chosen
        let mut lfs_ready = false;

        for path in paths {
            let choice = {
                let mut writer = self.writer();
                self.console().triage(&path, writer.as_mut())?
            };

            match choice {
                TriageChoice::Ignore => {
                    self.ignore().append(&path)?;
                    let ignore_file = self.ignore().file_name();
                    self.git()
                        .run(&["add", ignore_file])
                        .await
                        .context("Failed to stage the ignore list")?;
                    writeln!(self.writer(), "Ignoring '{path}' from now on")?;
                }
                TriageChoice::TrackLarge => {
                    if !lfs_ready {
                        self.lfs()
                            .install()
                            .await
                            .context("Failed to set up large-file support")?;
                        lfs_ready = true;
                    }
                    self.lfs().track(&path).await?;
                    let attributes_file = self.lfs().attributes_file();
                    self.git()
                        .run(&["add", attributes_file])
                        .await
                        .context("Failed to stage the large-file configuration")?;
                    self.git()
                        .run(&["add", "--", path.as_str()])
                        .await
                        .with_context(|| format!("Failed to stage '{path}'"))?;
                    writeln!(self.writer(), "Tracking '{path}' as a large file")?;
                }
                TriageChoice::Track => {
                    self.git()
                        .run(&["add", "--", path.as_str()])
                        .await
                        .with_context(|| format!("Failed to stage '{path}'"))?;
                    writeln!(self.writer(), "Tracking '{path}'")?;
                }
                TriageChoice::Skip => {
                    writeln!(self.writer(), "Skipped '{path}'")?;
                }
            }
        }

        Ok(())
    }
}
