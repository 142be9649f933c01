use clap::ValueEnum;

/// The one binary choice made at startup and never revisited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SyncMode {
    /// Non-destructive convergence with the remote.
    #[default]
    Safe,
    /// Overwrite the remote branch with the local state.
    Force,
}

impl SyncMode {
    pub fn as_str(&self) -> &str {
        match self {
            SyncMode::Safe => "safe",
            SyncMode::Force => "force",
        }
    }
}

impl std::fmt::Display for SyncMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
