// Notifier trait — how a selected bounty gets announced.
//
// Sending never fails the run. Implementations report what happened as a
// Delivery value and the orchestrator logs it and moves on.

use async_trait::async_trait;
use serde::Serialize;

use crate::bounty::BountyRecord;

/// Outcome of a single notification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Delivery {
    /// The backend accepted the message.
    Delivered,
    /// Nothing was sent (e.g. no webhook configured).
    Skipped { reason: String },
    /// The backend rejected the message or could not be reached.
    Failed { reason: String },
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered)
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announce a bounty. Exactly one attempt, no retries.
    async fn send(&self, bounty: &BountyRecord) -> Delivery;
}

/// The human-readable message body shared by all backends.
pub fn format_message(bounty: &BountyRecord) -> String {
    format!(
        "🔥 New Top Bounty!\n*{}*\n🔗 {}",
        bounty.title, bounty.link
    )
}
