//! Time utilities: report-window bounds and timestamp rendering.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ReportError, Result};

/// Default look-back of a report window.
pub const DEFAULT_WINDOW_DAYS: i64 = 31;

/// Longest statement window the provider serves: 31 days + 1 hour.
pub const MAX_WINDOW_SECS: i64 = 31 * 24 * 3600 + 3600;

/// Parse an IANA timezone name such as "Europe/Kyiv".
pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| ReportError::InvalidArgument(format!("invalid timezone: {tz}")))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        ReportError::InvalidArgument(format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
    })
}

/// 00:00:00 of `date` in `tz`, as UTC. On a DST gap the earliest valid
/// instant is used.
pub fn day_start_utc(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>> {
    let ndt = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ReportError::InvalidArgument(format!("invalid date {date}")))?;
    let local = tz
        .from_local_datetime(&ndt)
        .earliest()
        .ok_or_else(|| ReportError::InvalidArgument(format!("invalid local time {ndt} in {tz}")))?;
    Ok(local.with_timezone(&Utc))
}

/// `[from, to)` window in UTC, both bounds at local midnight. `to` defaults to
/// `now`, `from` to [`DEFAULT_WINDOW_DAYS`] before `to`.
///
/// Windows longer than [`MAX_WINDOW_SECS`] or with `from` after `to` are
/// rejected.
pub fn report_window(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let end = match to {
        Some(d) => day_start_utc(d, tz)?,
        None => now,
    };
    let start = match from {
        Some(d) => day_start_utc(d, tz)?,
        None => end - Duration::days(DEFAULT_WINDOW_DAYS),
    };
    if start > end {
        return Err(ReportError::InvalidArgument(format!(
            "--from {start} is after --to {end}"
        )));
    }
    if (end - start).num_seconds() > MAX_WINDOW_SECS {
        return Err(ReportError::InvalidArgument(format!(
            "window {start} .. {end} is longer than 31 days + 1 hour"
        )));
    }
    Ok((start, end))
}

/// `DD/MM/YYYY HH:MM` in `tz`.
pub fn format_short(dt: DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz).format("%d/%m/%Y %H:%M").to_string()
}

/// RFC 3339 in `tz`, second precision.
pub fn format_rfc3339(dt: DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz)
        .to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
}
