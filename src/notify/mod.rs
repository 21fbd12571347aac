// Outbound notifications for newly selected bounties.
//
// Slack incoming webhooks are the only backend today; the Notifier trait
// keeps the orchestrator independent of it.

pub mod slack;
pub mod traits;

pub use slack::SlackNotifier;
pub use traits::{format_message, Delivery, Notifier};
