//! Spend projections and the savings timeline.

use rust_decimal::Decimal;

use crate::calculations::common::{WEEKS_PER_MONTH, WEEKS_PER_YEAR, non_negative};
use crate::models::{CalculatorInputs, SavingsTimeline, SpendProjection};

/// Projects weekly, monthly, yearly and lifetime spend.
///
/// Negative price or packs count as zero, even when the inputs were built
/// as a struct literal. Multiplications saturate at [`Decimal::MAX`] so
/// absurd inputs still produce a result.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cost_core::CalculatorInputs;
/// use cost_core::calculations::compute_spend;
///
/// let spend = compute_spend(&CalculatorInputs::new(dec!(10), dec!(7), 10));
///
/// assert_eq!(spend.weekly, dec!(70));
/// assert_eq!(spend.monthly, dec!(303.1));
/// assert_eq!(spend.yearly, dec!(3640));
/// assert_eq!(spend.lifetime, dec!(36400));
/// ```
pub fn compute_spend(inputs: &CalculatorInputs) -> SpendProjection {
    let price_per_pack = non_negative(inputs.price_per_pack);
    let weekly = price_per_pack.saturating_mul(non_negative(inputs.packs_per_week));
    let monthly = weekly.saturating_mul(WEEKS_PER_MONTH);
    let yearly = weekly.saturating_mul(WEEKS_PER_YEAR);
    let lifetime = yearly.saturating_mul(Decimal::from(inputs.years_smoking));

    tracing::debug!(%weekly, %monthly, %yearly, %lifetime, "computed spend");

    SpendProjection {
        weekly,
        monthly,
        yearly,
        lifetime,
    }
}

/// Money kept by not buying cigarettes for one week up to five years.
pub fn compute_savings(spend: &SpendProjection) -> SavingsTimeline {
    SavingsTimeline {
        one_week: spend.weekly,
        one_month: spend.monthly,
        three_months: spend.monthly.saturating_mul(Decimal::from(3)),
        one_year: spend.yearly,
        five_years: spend.yearly.saturating_mul(Decimal::from(5)),
    }
}
