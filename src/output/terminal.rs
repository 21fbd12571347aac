// Colored terminal output for bounty lists and run outcomes.
//
// main.rs delegates all human-facing formatting here; `--json` output
// bypasses this module entirely.

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::bounty::BountyRecord;
use crate::notify::Delivery;
use crate::pipeline::RunOutcome;

/// Display extracted bounties in page order.
pub fn display_bounty_list(bounties: &[BountyRecord], now: DateTime<Utc>) {
    if bounties.is_empty() {
        println!("No bounties posted in the last 24 hours.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Recent Bounties ({}) ===", bounties.len()).bold()
    );
    println!();

    println!(
        "  {:>3}  {:<48} {:>9}  {:>8}",
        "#".dimmed(),
        "Title".dimmed(),
        "Price".dimmed(),
        "Age".dimmed(),
    );
    println!("  {}", "-".repeat(74).dimmed());

    for (i, bounty) in bounties.iter().enumerate() {
        let title = super::clip_to_width(&bounty.title, 45);
        println!(
            "  {:>3}. {:<48} {:>9}  {:>8}",
            i + 1,
            title,
            colorize_price(bounty),
            format_age(bounty.posted_time, now),
        );
        println!("       {}", bounty.link.dimmed());
        if !bounty.description.is_empty() {
            println!(
                "       {}",
                super::clip_to_width(&bounty.description, 100).dimmed()
            );
        }
    }
    println!();
}

/// Display the result of a single run.
pub fn display_run_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::NoNewBounty => {
            println!("{}", outcome.message().dimmed());
        }
        RunOutcome::Sent { bounty, delivery } => {
            println!("{}", "=== New Top Bounty ===".bold());
            println!("  {} ({})", bounty.title.bold(), bounty.price_label());
            println!("  {}", bounty.link);
            match delivery {
                Delivery::Delivered => println!("  Slack: {}", "sent".green()),
                Delivery::Skipped { reason } => {
                    println!("  Slack: {} ({reason})", "skipped".yellow())
                }
                Delivery::Failed { reason } => {
                    println!("  Slack: {} ({reason})", "failed".red().bold())
                }
            }
            println!(
                "  {}",
                "Recorded as sent; it will not be announced again.".dimmed()
            );
        }
    }
}

/// Render an age like "45m", "3h", or "2d".
pub fn format_age(posted: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(posted) = posted else {
        return "?".to_string();
    };
    let minutes = (now - posted).num_minutes().max(0);
    if minutes < 60 {
        format!("{minutes}m")
    } else if minutes < 60 * 24 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}d", minutes / (60 * 24))
    }
}

fn colorize_price(bounty: &BountyRecord) -> colored::ColoredString {
    let label = bounty.price_label();
    match bounty.price {
        Some(p) if p >= 500.0 => label.bright_green().bold(),
        Some(p) if p >= 100.0 => label.green(),
        Some(_) => label.normal(),
        None => label.dimmed(),
    }
}
