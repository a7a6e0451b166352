mod alternative;
mod inputs;
mod projection;
mod report;

pub use alternative::{Alternative, AlternativeRecommendation};
pub use inputs::{CachedInputs, CalculatorInputs, parse_amount, parse_years};
pub use projection::{SavingsTimeline, SpendProjection, TimeProjection};
pub use report::{CalculatorReport, DisplayStrings};
