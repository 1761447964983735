use crate::domain::model::ElapsedSuffixes;
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{Result, UtilsError};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

pub use crate::core::boolean::is_weekend;

const MS_PER_DAY: f64 = 86_400_000.0;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 365 * DAY_MS;

// compact formatter uses calendar averages: 30.44 and 365.25 days
const MINUTE_SECS: u64 = 60;
const HOUR_SECS: u64 = 3_600;
const DAY_SECS: u64 = 86_400;
const AVG_MONTH_SECS: u64 = 2_630_016;
const AVG_YEAR_SECS: u64 = 31_557_600;

static DURATION_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)([smhd])").expect("duration pattern is valid")
});

/// Whole days from `start` to `end`, rounded half up. Negative when `end` is earlier.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let diff = (end.timestamp_millis() - start.timestamp_millis()) as f64;
    (diff / MS_PER_DAY + 0.5).floor() as i64
}

/// "N units ago" relative to the wall clock.
pub fn time_ago(created_at: DateTime<Utc>) -> String {
    time_ago_from(created_at, SystemClock.now())
}

/// "N units ago" relative to `now`. Instants after `now` read as "0 seconds ago".
pub fn time_ago_from(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now.timestamp_millis() - created_at.timestamp_millis()).max(0);

    let (value, unit) = if elapsed < MINUTE_MS {
        (elapsed / SECOND_MS, "second")
    } else if elapsed < HOUR_MS {
        (elapsed / MINUTE_MS, "minute")
    } else if elapsed < DAY_MS {
        (elapsed / HOUR_MS, "hour")
    } else if elapsed < WEEK_MS {
        (elapsed / DAY_MS, "day")
    } else if elapsed < MONTH_MS {
        (elapsed / WEEK_MS, "week")
    } else if elapsed < YEAR_MS {
        (elapsed / MONTH_MS, "month")
    } else {
        (elapsed / YEAR_MS, "year")
    };

    if value == 1 {
        format!("{} {} ago", value, unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

/// Compact elapsed time since `since` using the default suffixes, e.g. `"3h 15m"`.
pub fn format_elapsed(since: DateTime<Utc>) -> String {
    format_elapsed_from(since, SystemClock.now(), &ElapsedSuffixes::default())
}

/// Compact elapsed time between `since` and `now`.
///
/// Shows the largest unit reached plus the next smaller one, except below one
/// hour where a single unit is shown:
///
/// | elapsed       | output    |
/// |---------------|-----------|
/// | < 60 s        | `45s`     |
/// | < 1 h         | `5m`      |
/// | < 1 day       | `3h 15m`  |
/// | < 30.44 days  | `5d 12h`  |
/// | < 365.25 days | `5M 12d`  |
/// | otherwise     | `2Y 3M`   |
pub fn format_elapsed_from(
    since: DateTime<Utc>,
    now: DateTime<Utc>,
    suffixes: &ElapsedSuffixes,
) -> String {
    let total = ((now.timestamp_millis() - since.timestamp_millis()).max(0) / SECOND_MS) as u64;

    if total < MINUTE_SECS {
        format!("{}{}", total, suffixes.seconds)
    } else if total < HOUR_SECS {
        format!("{}{}", total / MINUTE_SECS, suffixes.minutes)
    } else if total < DAY_SECS {
        format!(
            "{}{} {}{}",
            total / HOUR_SECS,
            suffixes.hours,
            (total % HOUR_SECS) / MINUTE_SECS,
            suffixes.minutes
        )
    } else if total < AVG_MONTH_SECS {
        format!(
            "{}{} {}{}",
            total / DAY_SECS,
            suffixes.days,
            (total % DAY_SECS) / HOUR_SECS,
            suffixes.hours
        )
    } else if total < AVG_YEAR_SECS {
        format!(
            "{}{} {}{}",
            total / AVG_MONTH_SECS,
            suffixes.months,
            (total % AVG_MONTH_SECS) / DAY_SECS,
            suffixes.days
        )
    } else {
        format!(
            "{}{} {}{}",
            total / AVG_YEAR_SECS,
            suffixes.years,
            (total % AVG_YEAR_SECS) / AVG_MONTH_SECS,
            suffixes.months
        )
    }
}

/// Sums every `<number><unit>` pair in `input`, units being `s`, `m`, `h`, `d`.
///
/// Whitespace is ignored, so `"1h 30m"` is 5400. Characters that are not part
/// of a pair are skipped.
pub fn parse_duration_secs(input: &str) -> Result<u64> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = || UtilsError::InvalidDuration {
        input: input.to_string(),
    };

    let mut total: u64 = 0;
    let mut matched = false;
    for caps in DURATION_PART.captures_iter(&compact) {
        matched = true;
        let value: u64 = caps[1].parse().map_err(|_| invalid())?;
        let multiplier = match caps[2].to_ascii_lowercase().as_str() {
            "s" => 1,
            "m" => MINUTE_SECS,
            "h" => HOUR_SECS,
            _ => DAY_SECS,
        };
        total = value
            .checked_mul(multiplier)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(invalid)?;
    }

    if !matched {
        tracing::debug!("rejected duration string {:?}", input);
        return Err(invalid());
    }
    Ok(total)
}
