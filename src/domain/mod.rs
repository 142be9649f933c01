pub mod mode;
pub mod stash;
pub mod triage;
