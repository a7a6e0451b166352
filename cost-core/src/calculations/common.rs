//! Constants and rounding helpers shared by the calculator modules.
//!
//! The constants are the domain approximations the calculator has always
//! used. They are fixed so that results stay identical across releases.

use rust_decimal::{Decimal, RoundingStrategy};

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Weeks in a year.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Days in a week.
pub const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Cigarettes in one pack.
pub const CIGARETTES_PER_PACK: u32 = 20;

/// Estimated minutes it takes to smoke one cigarette.
pub const MINUTES_PER_CIGARETTE: u32 = 5;

/// Minutes of smoking per pack (`CIGARETTES_PER_PACK * MINUTES_PER_CIGARETTE`).
pub const MINUTES_PER_PACK: Decimal =
    Decimal::from_parts(CIGARETTES_PER_PACK * MINUTES_PER_CIGARETTE, 0, 0, false, 0);

/// Replaces a negative value with zero.
pub fn non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() { Decimal::ZERO } else { value }
}

/// Rounds a decimal value to a whole number using half-up rounding.
///
/// Values at exactly .5 are rounded away from zero, matching how the
/// browser's number formatter rounds.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use cost_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(2.4)), dec!(2));
/// assert_eq!(round_whole(dec!(2.5)), dec!(3));
/// assert_eq!(round_whole(dec!(-2.5)), dec!(-3)); // Away from zero
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
