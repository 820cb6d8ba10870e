//! Date formatting for job postings.
//!
//! Dates are rendered in UTC; the plugin sandbox has no reliable local zone.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Formats a timestamp as `dd/mm/yyyy`.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats an ISO-8601 string as `dd/mm/yyyy`, or returns it unchanged if it
/// does not parse.
#[must_use]
pub fn format_iso_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_string(), |dt| format_date(&dt))
}

/// Relative posting time shown on job items.
///
/// Less than a day old renders as `"H hrs M mins ago"` (singular units when a
/// count is 1, hours dropped when zero); anything older renders as
/// `dd/mm/yyyy`. Timestamps in the future count as posted now.
#[must_use]
pub fn job_date(created_at: &str, now: DateTime<Utc>) -> String {
    let Some(posted) = parse_timestamp(created_at) else {
        return created_at.to_string();
    };

    let elapsed = (now - posted).num_minutes().max(0);
    let hours = elapsed / MINUTES_PER_HOUR;
    let minutes = elapsed % MINUTES_PER_HOUR;

    if hours >= HOURS_PER_DAY {
        return format_date(&posted);
    }

    if hours == 0 {
        format!("{} ago", plural(minutes, "min"))
    } else {
        format!("{} {} ago", plural(hours, "hr"), plural(minutes, "min"))
    }
}

/// Converts a user-entered start date to the ISO string the backend expects.
///
/// Accepts `dd/mm/yyyy` and `yyyy-mm-dd`; the result is midnight UTC.
#[must_use]
pub fn parse_start_date(input: &str) -> Option<String> {
    let input = input.trim();
    let date = NaiveDate::parse_from_str(input, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn iso(dt: DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[test]
    fn ninety_minutes_ago() {
        let created = iso(now() - Duration::minutes(90));
        assert_eq!(job_date(&created, now()), "1 hr 30 mins ago");
    }

    #[test]
    fn three_days_ago_renders_calendar_date() {
        let created = iso(now() - Duration::days(3));
        assert_eq!(job_date(&created, now()), "07/03/2024");
    }

    #[test]
    fn singular_units_and_zero_hours() {
        let created = iso(now() - Duration::minutes(61));
        assert_eq!(job_date(&created, now()), "1 hr 1 min ago");

        let created = iso(now() - Duration::minutes(5));
        assert_eq!(job_date(&created, now()), "5 mins ago");

        let created = iso(now() - Duration::minutes(150));
        assert_eq!(job_date(&created, now()), "2 hrs 30 mins ago");
    }

    #[test]
    fn just_under_a_day_is_still_relative() {
        let created = iso(now() - Duration::minutes(23 * 60 + 59));
        assert_eq!(job_date(&created, now()), "23 hrs 59 mins ago");
        let created = iso(now() - Duration::hours(24));
        assert_eq!(job_date(&created, now()), "09/03/2024");
    }

    #[test]
    fn future_and_garbage_timestamps() {
        let created = iso(now() + Duration::minutes(10));
        assert_eq!(job_date(&created, now()), "0 mins ago");
        assert_eq!(job_date("yesterday-ish", now()), "yesterday-ish");
    }

    #[test]
    fn start_date_formats() {
        assert_eq!(
            parse_start_date("05/01/2025").as_deref(),
            Some("2025-01-05T00:00:00.000Z")
        );
        assert_eq!(
            parse_start_date("2025-01-05").as_deref(),
            Some("2025-01-05T00:00:00.000Z")
        );
        assert_eq!(parse_start_date("next week"), None);
        assert_eq!(format_iso_date("2025-01-05T00:00:00.000Z"), "05/01/2025");
    }
}
