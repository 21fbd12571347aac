// Unit tests for markdown bounty extraction.
//
// Covers price/age stickiness, the recency window, the lookahead bound,
// and title boundaries. "Now" is pinned so ages are exact.

use bountywatch::extract::{extract_bounties, BountyExtractor};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

// ============================================================
// Basic record assembly
// ============================================================

#[test]
fn priced_recent_title_yields_one_record() {
    let md = "\
- $50
2 hours ago
### [Fix bug](https://x/1)
Crash on startup when config is missing
";
    let records = extract_bounties(md, now());
    assert_eq!(records.len(), 1);

    let r = &records[0];
    assert_eq!(r.title, "Fix bug");
    assert_eq!(r.link, "https://x/1");
    assert_eq!(r.price, Some(50.0));
    assert_eq!(r.posted_time, Some(now() - TimeDelta::hours(2)));
    assert_eq!(r.description, "Crash on startup when config is missing");
}

#[test]
fn old_listing_yields_nothing() {
    let md = "\
- $500
2 months ago
### [Old bounty](https://x/old)
Still open
";
    assert!(extract_bounties(md, now()).is_empty());
}

#[test]
fn thousands_separator_in_price() {
    let md = "- $1,250.00\n1 hour ago\n### [Big](https://x/big)\n";
    let records = extract_bounties(md, now());
    assert_eq!(records[0].price, Some(1250.0));
}

#[test]
fn indented_lines_are_trimmed() {
    let md = "   - $75\n\t4 hours ago  \n  ### [Indented](https://x/i)  \n   body text   \n";
    let records = extract_bounties(md, now());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].price, Some(75.0));
    assert_eq!(records[0].description, "body text");
}

#[test]
fn empty_document_yields_nothing() {
    assert!(extract_bounties("", now()).is_empty());
}

#[test]
fn title_without_any_following_lines() {
    let md = "- $20\n10 minutes ago\n### [Last](https://x/last)";
    let records = extract_bounties(md, now());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "");
}

// ============================================================
// Recency window boundaries
// ============================================================

#[test]
fn exactly_twenty_four_hours_is_included() {
    let md = "24 hours ago\n### [Edge](https://x/e)\n";
    assert_eq!(extract_bounties(md, now()).len(), 1);
}

#[test]
fn one_day_is_included() {
    let md = "1 day ago\n### [Edge](https://x/e)\n";
    assert_eq!(extract_bounties(md, now()).len(), 1);
}

#[test]
fn twenty_five_hours_is_excluded() {
    let md = "25 hours ago\n### [Stale](https://x/s)\n";
    assert!(extract_bounties(md, now()).is_empty());
}

#[test]
fn custom_recency_window() {
    let extractor = BountyExtractor {
        recency_window: TimeDelta::hours(1),
        ..BountyExtractor::default()
    };
    let md = "2 hours ago\n### [Too old](https://x/1)\n30 minutes ago\n### [Fresh](https://x/2)\n";
    let records = extractor.extract(md, now());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Fresh");
}

// ============================================================
// Pending price/age stickiness
// ============================================================

#[test]
fn price_before_any_title_sticks_to_first_title() {
    let md = "\
# Bounties
- $300
Some intro text
5 hours ago
### [First](https://x/1)
";
    let records = extract_bounties(md, now());
    assert_eq!(records[0].price, Some(300.0));
}

#[test]
fn title_without_time_is_dropped_even_when_priced() {
    let md = "\
- $999
### [No time](https://x/a)
";
    assert!(extract_bounties(md, now()).is_empty());
}

#[test]
fn dropped_title_consumes_its_pending_price() {
    let md = "\
- $999
### [No time](https://x/a)
5 minutes ago
### [Timed](https://x/b)
";
    let records = extract_bounties(md, now());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Timed");
    assert_eq!(records[0].price, None);
    assert_eq!(records[0].posted_time, Some(now() - TimeDelta::minutes(5)));
}

#[test]
fn values_inside_a_window_belong_to_the_next_title() {
    let md = "\
1 hour ago
### [First](https://x/1)
first body
- $10
3 hours ago
### [Second](https://x/2)
second body
";
    let records = extract_bounties(md, now());
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].title, "First");
    assert_eq!(records[0].price, None);
    assert_eq!(records[0].posted_time, Some(now() - TimeDelta::hours(1)));

    assert_eq!(records[1].title, "Second");
    assert_eq!(records[1].price, Some(10.0));
    assert_eq!(records[1].posted_time, Some(now() - TimeDelta::hours(3)));
}

#[test]
fn later_price_line_overrides_earlier_one() {
    let md = "- $10\n- $40\n2 hours ago\n### [T](https://x/t)\n";
    assert_eq!(extract_bounties(md, now())[0].price, Some(40.0));
}

#[test]
fn unparsable_ago_line_keeps_earlier_time() {
    let md = "3 hours ago\nposted a while ago\n### [T](https://x/t)\n";
    let records = extract_bounties(md, now());
    assert_eq!(records[0].posted_time, Some(now() - TimeDelta::hours(3)));
}

// ============================================================
// Lookahead window
// ============================================================

#[test]
fn description_never_crosses_next_title() {
    let md = "\
1 hour ago
### [First](https://x/1)
first body
2 hours ago
### [Second](https://x/2)
second body
";
    let records = extract_bounties(md, now());
    assert_eq!(records[0].description, "first body 2 hours ago");
    assert!(!records[0].description.contains("Second"));
    assert!(!records[0].description.contains("second body"));
    assert_eq!(records[1].description, "second body");
}

#[test]
fn description_is_capped_at_fourteen_lines() {
    let mut md = String::from("1 hour ago\n### [Long](https://x/long)\n");
    for i in 1..=20 {
        md.push_str(&format!("line {i}\n"));
    }
    let records = extract_bounties(&md, now());

    let expected: Vec<String> = (1..=14).map(|i| format!("line {i}")).collect();
    assert_eq!(records[0].description, expected.join(" "));
}

#[test]
fn lines_after_window_still_feed_next_title() {
    let mut md = String::from("1 hour ago\n### [First](https://x/1)\n");
    for i in 1..=14 {
        md.push_str(&format!("filler {i}\n"));
    }
    md.push_str("- $80\n6 hours ago\n### [Second](https://x/2)\n");

    let records = extract_bounties(&md, now());
    assert_eq!(records.len(), 2);
    assert!(!records[0].description.contains("$80"));
    assert_eq!(records[1].price, Some(80.0));
    assert_eq!(records[1].posted_time, Some(now() - TimeDelta::hours(6)));
}

#[test]
fn custom_lookahead() {
    let extractor = BountyExtractor {
        lookahead_lines: 2,
        ..BountyExtractor::default()
    };
    let md = "1 hour ago\n### [T](https://x/t)\na\nb\nc\n";
    assert_eq!(extractor.extract(md, now())[0].description, "a b");
}

#[test]
fn due_and_profile_lines_stay_in_description() {
    let md = "\
- $150
4 hours ago
### [Build a Discord bot](https://replit.com/bounties/@alice/discord-bot)
[alice](https://replit.com/@alice)
Need a bot that posts standup reminders
due Nov 2
";
    let records = extract_bounties(md, now());
    assert_eq!(
        records[0].description,
        "[alice](https://replit.com/@alice) Need a bot that posts standup reminders due Nov 2"
    );
}

#[test]
fn records_come_back_in_document_order() {
    let md = "\
- $5
1 hour ago
### [A](https://x/a)
- $500
2 hours ago
### [B](https://x/b)
- $50
3 hours ago
### [C](https://x/c)
";
    let titles: Vec<String> = extract_bounties(md, now())
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn empty_title_is_dropped_but_still_bounds_the_window() {
    let md = "1 hour ago\n### [Real](https://x/r)\nbody\n2 hours ago\n### [](https://x/empty)\nafter\n";
    let records = extract_bounties(md, now());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "body 2 hours ago");
}
