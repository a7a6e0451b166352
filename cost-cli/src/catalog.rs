use std::fs::File;
use std::io::Read;
use std::path::Path;

use cost_core::Alternative;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a custom catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("CSV parse error: {0}")]
    Csv(String),

    #[error("Catalog entry '{name}' has a negative cost: {cost}")]
    NegativeCost { name: String, cost: Decimal },

    #[error("Catalog file has no entries")]
    Empty,

    #[error("Cannot open catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::Csv(err.to_string())
    }
}

/// A single row of a catalog CSV file.
///
/// - `name`: What the money could buy instead (e.g. "Gym membership")
/// - `unit_cost`: Price of one unit, in dollars
/// - `icon`: Short label or emoji shown next to the name (may be empty)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogRecord {
    pub name: String,
    pub unit_cost: Decimal,
    #[serde(default)]
    pub icon: String,
}

/// Reads alternative catalogs from CSV.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse catalog entries from a CSV reader, keeping file order.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Alternative>, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut catalog = Vec::new();

        for result in csv_reader.deserialize() {
            let record: CatalogRecord = result?;
            if record.unit_cost.is_sign_negative() && !record.unit_cost.is_zero() {
                return Err(CatalogError::NegativeCost {
                    name: record.name,
                    cost: record.unit_cost,
                });
            }
            catalog.push(Alternative::new(record.name, record.unit_cost, record.icon));
        }

        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(catalog)
    }

    pub fn load_file(path: &Path) -> Result<Vec<Alternative>, CatalogError> {
        let file = File::open(path)?;
        Self::parse(file)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_rows_in_order() {
        let csv = "name,unit_cost,icon\nBike,250,🚲\nConcert, 65.50 ,🎵\n";

        let catalog = CatalogLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(
            catalog,
            vec![
                Alternative::new("Bike", dec!(250), "🚲"),
                Alternative::new("Concert", dec!(65.50), "🎵"),
            ]
        );
    }

    #[test]
    fn icon_column_is_optional() {
        let csv = "name,unit_cost\nBike,250\n";

        let catalog = CatalogLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(catalog[0].icon, "");
    }

    #[test]
    fn rejects_negative_cost() {
        let csv = "name,unit_cost,icon\nRefund,-5,x\n";

        let err = CatalogLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, CatalogError::NegativeCost { name, .. } if name == "Refund"));
    }

    #[test]
    fn rejects_empty_file() {
        let err = CatalogLoader::parse("name,unit_cost,icon\n".as_bytes()).unwrap_err();

        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn rejects_non_numeric_cost() {
        let err = CatalogLoader::parse("name,unit_cost,icon\nBike,lots,x\n".as_bytes()).unwrap_err();

        assert!(matches!(err, CatalogError::Csv(_)));
    }
}
