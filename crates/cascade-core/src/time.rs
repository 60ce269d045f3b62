//! Hour-of-day projection and wall-clock conversion.
//!
//! The layout engine works on fractional hours of local wall-clock time and
//! never converts time zones itself. Instants that carry a zone must be
//! brought to the viewer's wall clock with [`to_wall_clock`] or
//! [`to_local_wall_clock`] before they are handed to the engine.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike};

/// Projects a wall-clock instant onto fractional hours of its day.
///
/// The date part is ignored: `hour + minute / 60 + second / 3600`.
///
/// # Examples
///
/// ```
/// use cascade_core::time::hour_fraction;
/// use chrono::NaiveDate;
///
/// let instant = NaiveDate::from_ymd_opt(2026, 10, 19)
///     .unwrap()
///     .and_hms_opt(10, 30, 0)
///     .unwrap();
/// assert_eq!(hour_fraction(instant), 10.5);
/// ```
pub fn hour_fraction(instant: NaiveDateTime) -> f64 {
    f64::from(instant.hour())
        + f64::from(instant.minute()) / 60.0
        + f64::from(instant.second()) / 3600.0
}

/// Converts a zoned instant to the naive wall-clock time of `zone`.
///
/// # Arguments
///
/// * `instant` - The instant, in any time zone.
/// * `zone` - The zone whose wall clock the day view displays.
pub fn to_wall_clock<Tz, Z>(instant: &DateTime<Tz>, zone: &Z) -> NaiveDateTime
where
    Tz: TimeZone,
    Z: TimeZone,
{
    instant.with_timezone(zone).naive_local()
}

/// Converts a zoned instant to the naive wall-clock time of the system zone.
pub fn to_local_wall_clock<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDateTime {
    to_wall_clock(instant, &Local)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Utc};
    use float_cmp::assert_approx_eq;

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_hour_fraction_whole_hour() {
        assert_approx_eq!(f64, hour_fraction(at(0, 0, 0)), 0.0);
        assert_approx_eq!(f64, hour_fraction(at(23, 0, 0)), 23.0);
    }

    #[test]
    fn test_hour_fraction_minutes_and_seconds() {
        assert_approx_eq!(f64, hour_fraction(at(11, 45, 0)), 11.75);
        assert_approx_eq!(f64, hour_fraction(at(8, 0, 36)), 8.01);
    }

    #[test]
    fn test_hour_fraction_ignores_date() {
        let next_day = at(10, 30, 0) + chrono::Duration::days(1);
        assert_approx_eq!(f64, hour_fraction(next_day), hour_fraction(at(10, 30, 0)));
    }

    #[test]
    fn test_to_wall_clock_shifts_into_zone() {
        let utc = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let berlin_summer = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(to_wall_clock(&utc, &berlin_summer), at(10, 0, 0));
    }

    #[test]
    fn test_to_local_wall_clock_round_trips_local_time() {
        let naive = at(14, 5, 0);
        if let Some(local) = Local.from_local_datetime(&naive).single() {
            assert_eq!(to_local_wall_clock(&local), naive);
        }
    }

    #[test]
    fn test_to_wall_clock_can_cross_midnight() {
        let utc = Utc.with_ymd_and_hms(2026, 10, 19, 23, 30, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        let wall = to_wall_clock(&utc, &tokyo);
        assert_eq!(wall.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        assert_approx_eq!(f64, hour_fraction(wall), 8.5);
    }
}

#[cfg(test)]
mod proptest_tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
        (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| {
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap()
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Fractions stay within one day.
    fn check_fraction_in_day(instant: NaiveDateTime) -> Result<(), TestCaseError> {
        let hours = hour_fraction(instant);
        prop_assert!((0.0..24.0).contains(&hours), "{instant} -> {hours}");
        Ok(())
    }

    /// Later wall-clock times of the same day map to larger fractions.
    fn check_fraction_monotonic(a: NaiveDateTime, b: NaiveDateTime) -> Result<(), TestCaseError> {
        if a < b {
            prop_assert!(hour_fraction(a) < hour_fraction(b), "{a} vs {b}");
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn fraction_in_day(instant in instant_strategy()) {
            check_fraction_in_day(instant)?;
        }

        #[test]
        fn fraction_monotonic(a in instant_strategy(), b in instant_strategy()) {
            check_fraction_monotonic(a, b)?;
        }
    }
}
