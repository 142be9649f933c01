/// Operator decision for a single untracked path, scoped to one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageChoice {
    /// Append the path to the ignore list.
    Ignore,
    /// Register the path with the large-file extension, then stage it.
    TrackLarge,
    /// Stage the path directly.
    Track,
    /// Leave the path untracked for this run.
    Skip,
}

impl TriageChoice {
    /// Map a menu reply onto a choice. Empty or unrecognized input is a
    /// skip, never an error.
    pub fn from_reply(reply: &str) -> Self {
        match reply {
            "1" => TriageChoice::Ignore,
            "2" => TriageChoice::TrackLarge,
            "3" => TriageChoice::Track,
            _ => TriageChoice::Skip,
        }
    }
}
