// Unit tests for relative-time parsing.
//
// All tests pin "now" so the arithmetic is exact.

use bountywatch::extract::parse_posted_time;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn age_of(text: &str) -> Option<TimeDelta> {
    parse_posted_time(text, now()).map(|t| now() - t)
}

// ============================================================
// Supported units, singular and plural
// ============================================================

#[test]
fn minutes_ago() {
    assert_eq!(age_of("1 minute ago"), Some(TimeDelta::minutes(1)));
    assert_eq!(age_of("45 minutes ago"), Some(TimeDelta::minutes(45)));
}

#[test]
fn hours_ago() {
    assert_eq!(age_of("1 hour ago"), Some(TimeDelta::hours(1)));
    assert_eq!(age_of("23 hours ago"), Some(TimeDelta::hours(23)));
}

#[test]
fn days_ago() {
    assert_eq!(age_of("1 day ago"), Some(TimeDelta::days(1)));
    assert_eq!(age_of("6 days ago"), Some(TimeDelta::days(6)));
}

#[test]
fn months_are_thirty_days() {
    assert_eq!(age_of("1 month ago"), Some(TimeDelta::days(30)));
    assert_eq!(age_of("2 months ago"), Some(TimeDelta::days(60)));
}

#[test]
fn zero_is_now() {
    assert_eq!(age_of("0 minutes ago"), Some(TimeDelta::zero()));
}

#[test]
fn result_is_utc_and_before_now() {
    let parsed = parse_posted_time("3 hours ago", now()).unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap());
}

// ============================================================
// Absent cases
// ============================================================

#[test]
fn unsupported_units_are_absent() {
    assert_eq!(age_of("10 seconds ago"), None);
    assert_eq!(age_of("2 weeks ago"), None);
    assert_eq!(age_of("1 year ago"), None);
}

#[test]
fn missing_ago_is_absent() {
    assert_eq!(age_of("3 hours"), None);
    assert_eq!(age_of("in 3 hours"), None);
}

#[test]
fn plain_text_is_absent() {
    assert_eq!(age_of("Build a Discord bot"), None);
    assert_eq!(age_of(""), None);
}
