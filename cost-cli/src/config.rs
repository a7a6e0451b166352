//! TOML configuration for the calculator binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use cost_core::StoreConfig;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "cost-calculator.toml";

/// Database file used by the default `sqlite` store.
pub const DEFAULT_DB_FILE: &str = "cost-calculator.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub store: StoreConfig,
    pub bounds: InputBounds,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                backend: "sqlite".to_string(),
                connection_string: DEFAULT_DB_FILE.to_string(),
            },
            bounds: InputBounds::default(),
        }
    }
}

/// Inclusive range a single input is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl Bounds {
    pub fn new(
        min: Decimal,
        max: Decimal,
    ) -> Self {
        Self { min, max }
    }

    /// Rejects a range that is negative or inverted.
    pub fn validate(
        &self,
        field: &str,
    ) -> Result<()> {
        ensure!(self.min >= Decimal::ZERO, "{field}: min {} is negative", self.min);
        ensure!(self.min <= self.max, "{field}: min {} is above max {}", self.min, self.max);
        Ok(())
    }

    /// Clamps `value` into the range. A range with `min > max` pins to `min`.
    pub fn clamp(
        &self,
        value: Decimal,
    ) -> Decimal {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max.max(self.min)
        } else {
            value
        }
    }
}

/// Limits the form has always applied to what the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    pub price_per_pack: Bounds,
    pub packs_per_week: Bounds,
    pub years_smoking: Bounds,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            price_per_pack: Bounds::new(Decimal::ONE, Decimal::from(50)),
            packs_per_week: Bounds::new(Decimal::new(5, 1), Decimal::from(50)),
            years_smoking: Bounds::new(Decimal::ONE, Decimal::from(50)),
        }
    }
}

impl InputBounds {
    pub fn clamp_price(
        &self,
        value: Decimal,
    ) -> Decimal {
        self.price_per_pack.clamp(value)
    }

    pub fn clamp_packs(
        &self,
        value: Decimal,
    ) -> Decimal {
        self.packs_per_week.clamp(value)
    }

    pub fn clamp_years(
        &self,
        value: u32,
    ) -> u32 {
        self.years_smoking
            .clamp(Decimal::from(value))
            .trunc()
            .to_u32()
            .unwrap_or(value)
    }

    pub fn validate(&self) -> Result<()> {
        self.price_per_pack.validate("price_per_pack")?;
        self.packs_per_week.validate("packs_per_week")?;
        self.years_smoking.validate("years_smoking")
    }
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
/// read if present and built-in defaults are used otherwise.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                tracing::debug!("no config file, using defaults");
                return Ok(CliConfig::default());
            }
            default
        }
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<CliConfig> {
    let config: CliConfig = toml::from_str(text)?;
    config.bounds.validate().context("Invalid [bounds]")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), CliConfig::default());
    }

    #[test]
    fn default_bounds_match_form_limits() {
        let bounds = InputBounds::default();

        assert_eq!(bounds.price_per_pack, Bounds::new(dec!(1), dec!(50)));
        assert_eq!(bounds.packs_per_week, Bounds::new(dec!(0.5), dec!(50)));
        assert_eq!(bounds.years_smoking, Bounds::new(dec!(1), dec!(50)));
    }

    #[test]
    fn parses_store_and_partial_bounds() {
        let config = parse_config(
            r#"
            [store]
            backend = "memory"

            [bounds]
            price_per_pack = { min = 2, max = 30.5 }
            "#,
        )
        .unwrap();

        assert_eq!(config.store.backend, "memory");
        assert_eq!(config.store.connection_string, "");
        assert_eq!(config.bounds.price_per_pack, Bounds::new(dec!(2), dec!(30.5)));
        assert_eq!(config.bounds.years_smoking, InputBounds::default().years_smoking);
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(parse_config("[store]\nbackend = 7").is_err());
    }

    #[test]
    fn negative_bounds_are_rejected() {
        let error = parse_config("[bounds]\nprice_per_pack = { min = -10, max = -5 }").unwrap_err();

        assert!(format!("{error:#}").contains("price_per_pack: min -10 is negative"));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let error = parse_config("[bounds]\nyears_smoking = { min = 40, max = 2 }").unwrap_err();

        assert!(format!("{error:#}").contains("years_smoking: min 40 is above max 2"));
    }

    #[test]
    fn zero_lower_bound_is_allowed() {
        let config = parse_config("[bounds]\npacks_per_week = { min = 0, max = 10 }").unwrap();

        assert_eq!(config.bounds.packs_per_week, Bounds::new(dec!(0), dec!(10)));
    }

    #[test]
    fn clamp_applies_each_range() {
        let bounds = InputBounds::default();

        assert_eq!(bounds.clamp_price(dec!(0)), dec!(1));
        assert_eq!(bounds.clamp_packs(dec!(80)), dec!(50));
        assert_eq!(bounds.clamp_years(0), 1);
    }

    #[test]
    fn clamp_leaves_in_range_values() {
        let bounds = InputBounds::default();

        assert_eq!(bounds.clamp_price(dec!(10)), dec!(10));
        assert_eq!(bounds.clamp_packs(dec!(7)), dec!(7));
        assert_eq!(bounds.clamp_years(10), 10);
    }

    #[test]
    fn inverted_range_pins_to_min() {
        assert_eq!(Bounds::new(dec!(5), dec!(1)).clamp(dec!(9)), dec!(5));
    }
}
