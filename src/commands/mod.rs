//! Sync command implementations
//!
//! Each command is an `impl Repository` block driving the external git
//! binary through one phase of the synchronization sequence:
//!
//! - `setup`: ensure a repository exists and an origin remote is configured
//! - `sync`: safe, non-destructive convergence with the remote
//! - `mirror`: forced overwrite of the remote with the local state
//! - `triage`: interactive classification of untracked paths
//!
//! Every step is a blocking subprocess invocation inspected for its exit
//! status before the next one runs; unexpected failures abort the whole run.

pub mod mirror;
pub mod setup;
pub mod sync;
pub mod triage;
