//! The full calculator run: inputs in, report out.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use cost_core::calculations::{CostModel, default_catalog};
//! use cost_core::CalculatorInputs;
//!
//! let catalog = default_catalog();
//! let model = CostModel::new(&catalog);
//! let report = model.calculate(&CalculatorInputs::new(dec!(10), dec!(7), 10));
//!
//! assert_eq!(report.display.monthly_cost, "$303");
//! assert_eq!(report.display.total_cost, "$36,400");
//! assert_eq!(report.display.time_per_day, "2 hours");
//! assert_eq!(report.alternatives.len(), 4);
//! ```

use crate::calculations::{
    compute_savings, compute_spend, compute_time, format_currency, format_duration,
    recommend_alternatives,
};
use crate::models::{
    Alternative, CalculatorInputs, CalculatorReport, DisplayStrings, SavingsTimeline,
    SpendProjection, TimeProjection,
};

/// Runs every calculator step against a borrowed catalog.
///
/// Holds no state besides the catalog reference, so one model can serve
/// any number of calculations.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    catalog: &'a [Alternative],
}

impl<'a> CostModel<'a> {
    pub fn new(catalog: &'a [Alternative]) -> Self {
        Self { catalog }
    }

    /// Computes spend, savings, time and alternatives, plus display strings.
    pub fn calculate(
        &self,
        inputs: &CalculatorInputs,
    ) -> CalculatorReport {
        let spend = compute_spend(inputs);
        let savings = compute_savings(&spend);
        let time = compute_time(inputs.packs_per_week, inputs.years_smoking);
        let alternatives = recommend_alternatives(spend.monthly, self.catalog);
        let display = self.display_strings(inputs, &spend, &savings, &time);

        CalculatorReport {
            inputs: *inputs,
            spend,
            savings,
            time,
            alternatives,
            display,
        }
    }

    fn display_strings(
        &self,
        inputs: &CalculatorInputs,
        spend: &SpendProjection,
        savings: &SavingsTimeline,
        time: &TimeProjection,
    ) -> DisplayStrings {
        DisplayStrings {
            weekly_cost: format_currency(spend.weekly),
            monthly_cost: format_currency(spend.monthly),
            yearly_cost: format_currency(spend.yearly),
            total_cost: format_currency(spend.lifetime),
            years: inputs.years_smoking.to_string(),
            savings_week: format_currency(savings.one_week),
            savings_month: format_currency(savings.one_month),
            savings_three_months: format_currency(savings.three_months),
            savings_year: format_currency(savings.one_year),
            savings_five_years: format_currency(savings.five_years),
            time_per_day: format_duration(time.per_day_minutes),
            time_per_month: format_duration(time.per_month_minutes),
            time_total: format_duration(time.total_minutes),
        }
    }
}
