use anyhow::Context;
use derive_new::new;
use std::io::Write;
use std::path::Path;

const IGNORE_FILE: &str = ".gitignore";

/// Editor for the repository's ignore list, treated as plain appended text.
#[derive(Debug, new)]
pub struct IgnoreFile {
    workdir: Box<Path>,
}

impl IgnoreFile {
    /// Append an entry to the ignore list, creating the file when missing.
    /// A separating newline is inserted first when the existing file does
    /// not already end in one.
    pub fn append(&self, entry: &str) -> anyhow::Result<()> {
        let path = self.workdir.join(IGNORE_FILE);

        let existing = if path.exists() {
            std::fs::read_to_string(&path).context("Failed to read .gitignore")?
        } else {
            String::new()
        };

        let mut addition = String::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            addition.push('\n');
        }
        addition.push_str(entry);
        addition.push('\n');

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context("Failed to open .gitignore for appending")?;
        file.write_all(addition.as_bytes())
            .context("Failed to append to .gitignore")?;

        Ok(())
    }

    pub fn file_name(&self) -> &str {
        IGNORE_FILE
    }
}
