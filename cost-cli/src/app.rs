//! Wires the CLI arguments, config, cache and calculator together.

use std::io::Write;

use anyhow::{Context, Result};
use cost_core::calculations::default_catalog;
use cost_core::models::{parse_amount, parse_years};
use cost_core::store::NullStore;
use cost_core::{
    Alternative, CalculatorInputs, CalculatorSession, KeyValueStore, StoreConfig, StoreRegistry,
};
use cost_db_sqlite::SqliteStoreFactory;
use tracing::{debug, warn};

use crate::catalog::CatalogLoader;
use crate::cli::Args;
use crate::config::{InputBounds, load_config};
use crate::report::write_report;

/// Registry with every backend this binary knows about.
pub fn build_registry() -> StoreRegistry {
    let mut registry = StoreRegistry::with_builtin();
    registry.register(Box::new(SqliteStoreFactory));
    registry
}

/// Applies `--backend` / `--db` on top of the configured store.
pub fn resolve_store_config(
    configured: &StoreConfig,
    args: &Args,
) -> StoreConfig {
    let mut config = configured.clone();
    if let Some(backend) = &args.backend {
        config.backend = backend.clone();
    }
    if let Some(db) = &args.db {
        config.connection_string = db.clone();
    }
    config
}

/// Opens the configured store, falling back to no cache at all.
///
/// The calculator works without a cache, so a store that cannot be opened
/// is logged rather than treated as fatal.
pub async fn open_store(
    registry: &StoreRegistry,
    config: &StoreConfig,
) -> Box<dyn KeyValueStore> {
    match registry.create(config).await {
        Ok(store) => store,
        Err(error) => {
            warn!(backend = %config.backend, %error, "cache unavailable, continuing without it");
            Box::new(NullStore)
        }
    }
}

/// Overlays the command-line inputs on the restored ones.
///
/// Only values given on the command line are clamped; restored values were
/// clamped when they were first entered. The result goes through
/// [`CalculatorInputs::new`] so it is never negative.
pub fn merge_inputs(
    restored: CalculatorInputs,
    args: &Args,
    bounds: &InputBounds,
) -> CalculatorInputs {
    let price_per_pack = match args.price.as_deref() {
        Some(price) => bounds.clamp_price(parse_amount(price)),
        None => restored.price_per_pack,
    };
    let packs_per_week = match args.packs.as_deref() {
        Some(packs) => bounds.clamp_packs(parse_amount(packs)),
        None => restored.packs_per_week,
    };
    let years_smoking = match args.years.as_deref() {
        Some(years) => bounds.clamp_years(parse_years(years)),
        None => restored.years_smoking,
    };
    CalculatorInputs::new(price_per_pack, packs_per_week, years_smoking)
}

fn load_catalog(args: &Args) -> Result<Vec<Alternative>> {
    match &args.catalog {
        Some(path) => CatalogLoader::load_file(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display())),
        None => Ok(default_catalog()),
    }
}

/// Runs one calculation and writes the report to `out`.
pub async fn run<W: Write>(
    args: &Args,
    out: &mut W,
) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let catalog = load_catalog(args)?;

    let store_config = resolve_store_config(&config.store, args);
    let store = open_store(&build_registry(), &store_config).await;
    let session = CalculatorSession::new(catalog, store);

    if args.forget {
        debug!("forgetting cached inputs");
        session.forget().await;
    }

    let restored = session.restore().await;
    let inputs = merge_inputs(restored, args, &config.bounds);
    debug!(?inputs, "calculating");

    let report = session.recalculate(&inputs).await;
    write_report(out, &report, args.format).context("Failed to write report")?;

    Ok(())
}
