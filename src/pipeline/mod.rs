// Orchestration — one end-to-end bounty run.

pub mod watch;

pub use watch::{BountyWatch, RunOutcome};
