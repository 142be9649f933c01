use derive_new::new;

/// Proof that the current run created a stash entry.
///
/// Restoration consumes the ticket, so a stash is only ever popped by the
/// run that pushed it, exactly once.
#[derive(Debug, new)]
pub struct StashTicket {
    label: String,
}

impl StashTicket {
    pub fn label(&self) -> &str {
        &self.label
    }
}
