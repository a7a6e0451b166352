use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::calculations::common::non_negative;

/// The three values a user enters into the calculator.
///
/// Every field is non-negative. Use [`CalculatorInputs::new`] or
/// [`CalculatorInputs::parse`] to build one; both replace negative or
/// unparseable values with zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Price of one pack in dollars.
    pub price_per_pack: Decimal,

    /// Packs smoked per week. Fractional values are allowed.
    pub packs_per_week: Decimal,

    /// Whole years spent smoking.
    pub years_smoking: u32,
}

impl CalculatorInputs {
    /// Creates inputs from already-parsed numbers, clamping negatives to zero.
    pub fn new(
        price_per_pack: Decimal,
        packs_per_week: Decimal,
        years_smoking: u32,
    ) -> Self {
        Self {
            price_per_pack: non_negative(price_per_pack),
            packs_per_week: non_negative(packs_per_week),
            years_smoking,
        }
    }

    /// Parses raw text fields. Missing or malformed fields become zero.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use cost_core::CalculatorInputs;
    ///
    /// let inputs = CalculatorInputs::parse(Some("10.50"), Some("abc"), Some("10.7"));
    ///
    /// assert_eq!(inputs.price_per_pack, dec!(10.50));
    /// assert_eq!(inputs.packs_per_week, dec!(0));
    /// assert_eq!(inputs.years_smoking, 10);
    /// ```
    pub fn parse(
        price_per_pack: Option<&str>,
        packs_per_week: Option<&str>,
        years_smoking: Option<&str>,
    ) -> Self {
        Self::new(
            price_per_pack.map(parse_amount).unwrap_or_default(),
            packs_per_week.map(parse_amount).unwrap_or_default(),
            years_smoking.map(parse_years).unwrap_or_default(),
        )
    }

    /// True when every field is zero.
    pub fn is_zero(&self) -> bool {
        self.price_per_pack.is_zero() && self.packs_per_week.is_zero() && self.years_smoking == 0
    }
}

/// Last inputs written to the cache, tagged with when they were calculated.
///
/// The JSON uses the site's field names and writes amounts as plain numbers,
/// the same shape the site stored. Amounts are read back from either numbers
/// or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedInputs {
    #[serde(default, serialize_with = "rust_decimal::serde::float::serialize")]
    pub price_per_pack: Decimal,
    #[serde(default, serialize_with = "rust_decimal::serde::float::serialize")]
    pub packs_per_week: Decimal,
    #[serde(default)]
    pub years_smoking: u32,
    pub last_calculated: Option<DateTime<Utc>>,
}

impl CachedInputs {
    pub fn new(
        inputs: &CalculatorInputs,
        last_calculated: DateTime<Utc>,
    ) -> Self {
        Self {
            price_per_pack: inputs.price_per_pack,
            packs_per_week: inputs.packs_per_week,
            years_smoking: inputs.years_smoking,
            last_calculated: Some(last_calculated),
        }
    }

    /// Overlays the non-zero cached fields onto `base`.
    ///
    /// A zero in the cache means "never entered", so it leaves the
    /// corresponding field of `base` alone.
    pub fn apply_to(
        &self,
        base: CalculatorInputs,
    ) -> CalculatorInputs {
        let mut inputs = base;
        if self.price_per_pack > Decimal::ZERO {
            inputs.price_per_pack = self.price_per_pack;
        }
        if self.packs_per_week > Decimal::ZERO {
            inputs.packs_per_week = self.packs_per_week;
        }
        if self.years_smoking > 0 {
            inputs.years_smoking = self.years_smoking;
        }
        inputs
    }
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a monetary or quantity field, falling back to zero.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty input is
/// zero without a log line; anything else that fails to parse, or parses
/// negative, is logged and replaced with zero.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    match normalized.parse::<Decimal>() {
        Ok(value) if value.is_sign_negative() && !value.is_zero() => {
            tracing::warn!(input = %s, "negative amount replaced with zero");
            Decimal::ZERO
        }
        Ok(value) => value.normalize(),
        Err(e) => {
            tracing::warn!(input = %s, "invalid amount: {}", e);
            Decimal::ZERO
        }
    }
}

/// Parses the years field, truncating any fractional part.
pub fn parse_years(s: &str) -> u32 {
    let value = parse_amount(s);
    value.trunc().to_u32().unwrap_or_else(|| {
        tracing::warn!(input = %s, "years out of range");
        0
    })
}
