use std::fmt::{Display, Write};
use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone};
use chrono_tz::{TZ_VARIANTS, Tz};

use crate::core::error::{TimeServiceError, TimeServiceResult};

// ISO 8601 with a numeric offset; UTC renders as +00:00, never Z
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
// Same, with microseconds; used only when the instant has a sub-second part
pub const DATETIME_FORMAT_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";
pub const DEFAULT_TIMEZONE: &str = "UTC";

pub const APP_NAME: &str = "DateTime Tools API";
pub const DATETIME_PATH: &str = "/api/v1/datetime";
pub const WEEK_NUMBER_PATH: &str = "/api/v1/week-number";

/// Look up an IANA timezone name, ignoring ASCII case
///
/// The exact spelling is tried first; only a miss scans the full table.
/// Surrounding whitespace is not stripped.
pub fn resolve_timezone(name: &str) -> Option<Tz> {
    Tz::from_str(name).ok().or_else(|| {
        TZ_VARIANTS
            .iter()
            .find(|tz| tz.name().eq_ignore_ascii_case(name))
            .copied()
    })
}

/// Render a timezone-aware datetime as ISO 8601
///
/// Whole seconds render without a fraction; anything finer renders as
/// microseconds (nanoseconds are truncated).
///
/// # Arguments
///
/// * `dt` - The datetime to render
///
/// # Returns
///
/// The formatted string, or `TimeServiceError::Internal` if formatting fails
pub fn format_iso8601<Z>(dt: &DateTime<Z>) -> TimeServiceResult<String>
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let format = if dt.timestamp_subsec_micros() == 0 {
        DATETIME_FORMAT
    } else {
        DATETIME_FORMAT_MICROS
    };

    let mut rendered = String::new();
    write!(rendered, "{}", dt.format(format)).map_err(|e| {
        TimeServiceError::Internal {
            message: format!("Failed to format datetime: {}", e),
        }
    })?;
    Ok(rendered)
}

/// ISO 8601 week of the datetime's local date (1..=53)
pub fn iso_week_number<Z: TimeZone>(dt: &DateTime<Z>) -> u32 {
    dt.iso_week().week()
}
