use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money spent on cigarettes over several horizons, in dollars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendProjection {
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub yearly: Decimal,
    /// Yearly spend multiplied by the years smoked so far.
    pub lifetime: Decimal,
}

/// Money saved after quitting, by milestone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTimeline {
    pub one_week: Decimal,
    pub one_month: Decimal,
    pub three_months: Decimal,
    pub one_year: Decimal,
    pub five_years: Decimal,
}

/// Minutes spent smoking, unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeProjection {
    pub per_week_minutes: Decimal,
    pub per_day_minutes: Decimal,
    pub per_month_minutes: Decimal,
    pub total_minutes: Decimal,
}
