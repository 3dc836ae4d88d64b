use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::core::{
    clock::{Clock, SystemClock},
    error::{TimeServiceError, TimeServiceResult},
    utils,
};

/// Stateless time query service
///
/// Every call validates the timezone and re-reads the clock; nothing is
/// cached between calls, so one instance can be shared across requests.
#[derive(Clone)]
pub struct TimeQueryService {
    clock: Arc<dyn Clock>,
}

impl TimeQueryService {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Resolve a timezone name against the IANA database, ignoring case
    pub fn validate_timezone(&self, timezone_name: &str) -> TimeServiceResult<Tz> {
        utils::resolve_timezone(timezone_name).ok_or_else(|| {
            tracing::error!("Invalid timezone provided: {}", timezone_name);
            TimeServiceError::InvalidTimezone {
                timezone: timezone_name.to_string(),
            }
        })
    }

    /// Current instant in the given timezone, formatted as ISO 8601
    pub fn current_instant(&self, timezone_name: &str) -> TimeServiceResult<String> {
        tracing::info!("Getting current datetime for timezone: {}", timezone_name);
        let current_time = self.now_in(timezone_name)?;
        let iso_format = utils::format_iso8601(&current_time)
            .inspect_err(|e| tracing::error!("Error getting current datetime: {}", e))?;

        tracing::info!("Successfully generated datetime: {}", iso_format);
        Ok(iso_format)
    }

    /// Current ISO 8601 week number in the given timezone
    pub fn current_week_number(&self, timezone_name: &str) -> TimeServiceResult<u32> {
        tracing::info!("Getting week number for timezone: {}", timezone_name);
        let current_time = self.now_in(timezone_name)?;
        let week_number = utils::iso_week_number(&current_time);

        tracing::info!("Successfully generated week number: {}", week_number);
        Ok(week_number)
    }

    fn now_in(&self, timezone_name: &str) -> TimeServiceResult<DateTime<Tz>> {
        let timezone = self.validate_timezone(timezone_name)?;
        Ok(self.clock.now().with_timezone(&timezone))
    }
}

impl Default for TimeQueryService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Datelike, TimeZone, Utc};

    use super::*;
    use crate::core::clock::FixedClock;

    fn fixed_service() -> TimeQueryService {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        TimeQueryService::with_clock(FixedClock::new(instant))
    }

    #[test]
    fn test_timezone_validation() {
        let service = TimeQueryService::new();

        assert!(service.validate_timezone("UTC").is_ok());
        assert!(service.validate_timezone("America/New_York").is_ok());

        let err = service.validate_timezone("Invalid/Timezone").unwrap_err();
        assert!(matches!(
            err,
            TimeServiceError::InvalidTimezone { ref timezone } if timezone == "Invalid/Timezone"
        ));
        assert!(service.validate_timezone("").is_err());
    }

    #[test]
    fn test_timezone_validation_ignores_case() {
        let service = fixed_service();

        assert_eq!(service.validate_timezone("utc").unwrap(), Tz::UTC);
        assert_eq!(
            service.validate_timezone("america/new_york").unwrap(),
            Tz::America__New_York
        );
        assert_eq!(
            service.current_instant("asia/tokyo").unwrap(),
            "2024-03-15T19:30:00+09:00"
        );
    }

    #[test]
    fn test_padded_timezone_is_rejected_verbatim() {
        let service = fixed_service();

        let err = service.validate_timezone(" UTC ").unwrap_err();
        assert_eq!(err.to_string(), "Invalid timezone:  UTC ");
    }

    #[test]
    fn test_current_instant_with_fixed_clock() {
        let service = fixed_service();

        assert_eq!(
            service.current_instant("UTC").unwrap(),
            "2024-03-15T10:30:00+00:00"
        );
        assert_eq!(
            service.current_instant("Asia/Tokyo").unwrap(),
            "2024-03-15T19:30:00+09:00"
        );
    }

    #[test]
    fn test_current_week_number_with_fixed_clock() {
        let service = fixed_service();
        assert_eq!(service.current_week_number("UTC").unwrap(), 11);
    }

    #[test]
    fn test_current_instant_tracks_system_clock() {
        let service = TimeQueryService::new();

        for timezone in ["UTC", "America/New_York", "Europe/London", "Asia/Kolkata"] {
            let rendered = service.current_instant(timezone).unwrap();
            let parsed = DateTime::parse_from_rfc3339(&rendered).unwrap();
            let drift = (Utc::now() - parsed.with_timezone(&Utc)).num_seconds().abs();
            assert!(drift <= 2, "{} drifted {}s", timezone, drift);
        }
    }

    #[test]
    fn test_current_week_number_matches_independent_computation() {
        let service = TimeQueryService::new();

        for timezone in ["UTC", "Pacific/Auckland", "America/Los_Angeles"] {
            let week = service.current_week_number(timezone).unwrap();
            let tz: Tz = timezone.parse().unwrap();
            let expected = Utc::now().with_timezone(&tz).iso_week().week();

            assert!((1..=53).contains(&week));
            // Tolerate a week boundary crossed between the two clock reads
            assert!(week == expected || expected == week + 1 || expected == 1);
        }
    }

    #[test]
    fn test_invalid_timezone_fails_both_operations() {
        let service = fixed_service();

        assert!(service.current_instant("Not/AZone").is_err());
        assert!(service.current_week_number("Not/AZone").is_err());
    }
}
