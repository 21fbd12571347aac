// Relative-time parsing for listing lines like "posted 3 hours ago".
//
// The bounty page only shows coarse relative ages, so the best we can do is
// anchor them to the scrape time. Months are approximated as 30 days.

use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, Utc};
use regex_lite::Regex;

static RELATIVE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+(minute|hour|day|month)s?\s+ago").expect("valid relative-time regex")
});

/// Days per month used when converting "N months ago".
pub const DAYS_PER_MONTH: i64 = 30;

/// Find the first `<N> <unit>(s) ago` phrase in `text` and convert it to an
/// absolute timestamp relative to `now`.
///
/// Returns `None` when no phrase is present (the common case for most lines)
/// or when N is too large to represent.
pub fn parse_posted_time(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = RELATIVE_TIME.captures(text)?;
    let value: i64 = caps[1].parse().ok()?;

    let delta = match &caps[2] {
        "minute" => TimeDelta::try_minutes(value)?,
        "hour" => TimeDelta::try_hours(value)?,
        "day" => TimeDelta::try_days(value)?,
        "month" => TimeDelta::try_days(value.checked_mul(DAYS_PER_MONTH)?)?,
        _ => return None,
    };

    now.checked_sub_signed(delta)
}
