//! Time spent smoking, and how to display it.
//!
//! Minutes are kept unrounded in [`TimeProjection`]; rounding only happens in
//! [`format_duration`].

use rust_decimal::Decimal;

use crate::calculations::common::{
    DAYS_PER_WEEK, MINUTES_PER_PACK, WEEKS_PER_MONTH, WEEKS_PER_YEAR, non_negative, round_whole,
};
use crate::models::TimeProjection;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
const MINUTES_PER_DAY: Decimal = Decimal::from_parts(1440, 0, 0, false, 0);

/// Projects minutes spent smoking per day, month and over all years smoked.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cost_core::calculations::compute_time;
///
/// let time = compute_time(dec!(7), 10);
///
/// assert_eq!(time.per_week_minutes, dec!(700));
/// assert_eq!(time.per_day_minutes, dec!(100));
/// ```
pub fn compute_time(
    packs_per_week: Decimal,
    years_smoking: u32,
) -> TimeProjection {
    let per_week_minutes = non_negative(packs_per_week).saturating_mul(MINUTES_PER_PACK);
    let per_day_minutes = per_week_minutes / DAYS_PER_WEEK;
    let per_month_minutes = per_week_minutes.saturating_mul(WEEKS_PER_MONTH);
    let total_minutes = per_week_minutes
        .saturating_mul(WEEKS_PER_YEAR)
        .saturating_mul(Decimal::from(years_smoking));

    TimeProjection {
        per_week_minutes,
        per_day_minutes,
        per_month_minutes,
        total_minutes,
    }
}

/// Renders a minute count as minutes, hours or days.
///
/// Below an hour the value is shown in minutes, below a day in hours,
/// otherwise in days. The chosen unit is rounded half away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cost_core::calculations::format_duration;
///
/// assert_eq!(format_duration(dec!(59)), "59 min");
/// assert_eq!(format_duration(dec!(60)), "1 hours");
/// assert_eq!(format_duration(dec!(1440)), "1 days");
/// ```
pub fn format_duration(minutes: Decimal) -> String {
    if minutes < MINUTES_PER_HOUR {
        format!("{} min", round_whole(minutes))
    } else if minutes < MINUTES_PER_DAY {
        format!("{} hours", round_whole(minutes / MINUTES_PER_HOUR))
    } else {
        format!("{} days", round_whole(minutes / MINUTES_PER_DAY))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_packs_gives_zero_time() {
        assert_eq!(compute_time(Decimal::ZERO, 20), TimeProjection::default());
    }

    #[test]
    fn reference_example_matches() {
        let time = compute_time(dec!(7), 10);

        assert_eq!(time.per_week_minutes, dec!(700));
        assert_eq!(time.per_day_minutes, dec!(100));
        assert_eq!(time.per_month_minutes, dec!(3031));
        assert_eq!(time.total_minutes, dec!(364000));
    }

    #[test]
    fn per_day_times_seven_is_per_week() {
        let time = compute_time(dec!(3), 1);
        let diff = (time.per_day_minutes * dec!(7) - time.per_week_minutes).abs();

        assert!(diff < dec!(0.000001), "diff was {diff}");
    }

    #[test]
    fn per_day_is_not_rounded() {
        let time = compute_time(dec!(1), 1);

        assert!(time.per_day_minutes > dec!(14.28));
        assert!(time.per_day_minutes < dec!(14.29));
    }

    #[test]
    fn negative_packs_are_treated_as_zero() {
        assert_eq!(compute_time(dec!(-2), 5), TimeProjection::default());
    }

    #[test]
    fn compute_time_is_idempotent() {
        assert_eq!(compute_time(dec!(2.5), 8), compute_time(dec!(2.5), 8));
    }

    #[test]
    fn format_duration_minute_boundaries() {
        assert_eq!(format_duration(dec!(0)), "0 min");
        assert_eq!(format_duration(dec!(14.2857)), "14 min");
        assert_eq!(format_duration(dec!(59)), "59 min");
    }

    #[test]
    fn format_duration_rounds_up_just_below_an_hour() {
        assert_eq!(format_duration(dec!(59.6)), "60 min");
    }

    #[test]
    fn format_duration_hour_boundaries() {
        assert_eq!(format_duration(dec!(60)), "1 hours");
        assert_eq!(format_duration(dec!(100)), "2 hours");
        assert_eq!(format_duration(dec!(1439)), "24 hours");
    }

    #[test]
    fn format_duration_day_boundaries() {
        assert_eq!(format_duration(dec!(1440)), "1 days");
        assert_eq!(format_duration(dec!(3031)), "2 days");
        assert_eq!(format_duration(dec!(364000)), "253 days");
    }
}
