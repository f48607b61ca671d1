use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

/// Approximate day count for "joined this month".
pub const THIS_MONTH_DAYS: u32 = 15;
/// Approximate day count for "joined this year".
pub const THIS_YEAR_DAYS: u32 = 180;
/// Months are not calendar-aware; each counts as 30 days.
pub const DAYS_PER_MONTH: u32 = 30;

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

static JOINED_IN_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)joined linkedin in (\d{4})").expect("Invalid joined-year regex")
});

static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{4})",
    )
    .expect("Invalid month-year regex")
});

static JOINED_MONTHS_AGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)joined (\d+)\s*months? ago").expect("Invalid months-ago regex")
});

static JOINED_DAYS_AGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)joined (\d+)\s*days? ago").expect("Invalid days-ago regex")
});

/// Convert free-text "joined" wording into an approximate profile age in days.
///
/// Patterns are tried in a fixed priority order and the first one that
/// matches decides the result:
/// 1. "Joined LinkedIn in 2020" (counted from January 1st)
/// 2. "September 2022" (counted from the 1st of the month)
/// 3. "Joined 2 months ago" (30 days per month)
/// 4. "Joined 5 days ago"
/// 5. "... this month" (15)
/// 6. "... this year" (180)
///
/// Returns `None` when nothing matches, when the join date lies after `now`,
/// or when a relative count overflows.
pub fn parse_profile_age(text: &str, now: DateTime<Utc>) -> Option<u32> {
    if let Some(caps) = JOINED_IN_YEAR.captures(text) {
        let year: i32 = caps[1].parse().ok()?;
        return days_since(NaiveDate::from_ymd_opt(year, 1, 1)?, now);
    }

    if let Some(caps) = MONTH_YEAR.captures(text) {
        let month_name = caps[1].to_lowercase();
        let month = MONTH_NAMES.iter().position(|m| *m == month_name)? as u32 + 1;
        let year: i32 = caps[2].parse().ok()?;
        return days_since(NaiveDate::from_ymd_opt(year, month, 1)?, now);
    }

    if let Some(caps) = JOINED_MONTHS_AGO.captures(text) {
        let months: u32 = caps[1].parse().ok()?;
        return Some(months.saturating_mul(DAYS_PER_MONTH));
    }

    if let Some(caps) = JOINED_DAYS_AGO.captures(text) {
        return caps[1].parse().ok();
    }

    let lower = text.to_lowercase();
    if lower.contains("this month") {
        return Some(THIS_MONTH_DAYS);
    }
    if lower.contains("this year") {
        return Some(THIS_YEAR_DAYS);
    }

    None
}

/// Whole days elapsed between midnight UTC of `start` and `now`.
fn days_since(start: NaiveDate, now: DateTime<Utc>) -> Option<u32> {
    let start = start.and_hms_opt(0, 0, 0)?.and_utc();
    let days = (now - start).num_days();
    if days < 0 {
        return None;
    }
    u32::try_from(days).ok()
}
