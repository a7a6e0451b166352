use serde::{Deserialize, Serialize};

use super::{
    AlternativeRecommendation, CalculatorInputs, SavingsTimeline, SpendProjection, TimeProjection,
};

/// Everything one recalculation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorReport {
    pub inputs: CalculatorInputs,
    pub spend: SpendProjection,
    pub savings: SavingsTimeline,
    pub time: TimeProjection,
    pub alternatives: Vec<AlternativeRecommendation>,
    pub display: DisplayStrings,
}

/// Pre-formatted values ready for a UI to paint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStrings {
    pub weekly_cost: String,
    pub monthly_cost: String,
    pub yearly_cost: String,
    pub total_cost: String,
    pub years: String,
    pub savings_week: String,
    pub savings_month: String,
    pub savings_three_months: String,
    pub savings_year: String,
    pub savings_five_years: String,
    pub time_per_day: String,
    pub time_per_month: String,
    pub time_total: String,
}
