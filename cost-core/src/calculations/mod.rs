//! Cost, time and savings calculations.
//!
//! Every function here is pure: the same inputs always give the same
//! outputs and nothing is read from or written to the outside world.

pub mod alternatives;
pub mod common;
pub mod cost_model;
pub mod format;
pub mod spend;
pub mod time;

pub use alternatives::{MAX_RECOMMENDATIONS, default_catalog, recommend_alternatives};
pub use cost_model::CostModel;
pub use format::format_currency;
pub use spend::{compute_savings, compute_spend};
pub use time::{compute_time, format_duration};
