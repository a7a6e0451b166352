use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An everyday purchase the monthly cigarette budget could pay for instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub unit_cost: Decimal,
    pub icon: String,
}

impl Alternative {
    pub fn new(
        name: impl Into<String>,
        unit_cost: Decimal,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_cost,
            icon: icon.into(),
        }
    }
}

/// One entry in the "what else could you buy" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlternativeRecommendation {
    /// A catalog entry and how many of it one month of spend covers.
    Item {
        alternative: Alternative,
        quantity: u64,
    },
    /// Returned alone when nothing in the catalog is affordable.
    EmergencyFund,
}

impl AlternativeRecommendation {
    pub const EMERGENCY_FUND_NAME: &'static str = "Savings account";
    pub const EMERGENCY_FUND_ICON: &'static str = "💰";
    pub const EMERGENCY_FUND_MESSAGE: &'static str = "Build your emergency fund";

    pub fn name(&self) -> &str {
        match self {
            Self::Item { alternative, .. } => &alternative.name,
            Self::EmergencyFund => Self::EMERGENCY_FUND_NAME,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            Self::Item { alternative, .. } => &alternative.icon,
            Self::EmergencyFund => Self::EMERGENCY_FUND_ICON,
        }
    }

    /// The line shown under the name, e.g. `"3x per month"`.
    pub fn caption(&self) -> String {
        match self {
            Self::Item { quantity, .. } => format!("{quantity}x per month"),
            Self::EmergencyFund => Self::EMERGENCY_FUND_MESSAGE.to_string(),
        }
    }

    /// Unit cost of the underlying catalog entry, `None` for the sentinel.
    pub fn unit_cost(&self) -> Option<Decimal> {
        match self {
            Self::Item { alternative, .. } => Some(alternative.unit_cost),
            Self::EmergencyFund => None,
        }
    }
}
