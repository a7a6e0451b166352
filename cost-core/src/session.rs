//! A calculator wired to a cache of the last inputs.
//!
//! The session is the only place the cache is touched. Reads and writes
//! are best-effort: any failure is logged and the calculation carries on
//! as if the cache were empty.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::calculations::CostModel;
use crate::models::{Alternative, CachedInputs, CalculatorInputs, CalculatorReport};
use crate::store::KeyValueStore;

/// Cache key the last inputs are stored under.
pub const CACHE_KEY: &str = "calculatorData";

pub struct CalculatorSession<S> {
    catalog: Vec<Alternative>,
    store: S,
}

impl<S: KeyValueStore> CalculatorSession<S> {
    pub fn new(
        catalog: Vec<Alternative>,
        store: S,
    ) -> Self {
        Self { catalog, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the cached inputs, or zero inputs if there are none.
    pub async fn restore(&self) -> CalculatorInputs {
        match self.load_cached().await {
            Some(cached) => {
                debug!(last_calculated = ?cached.last_calculated, "restored cached inputs");
                cached.apply_to(CalculatorInputs::default())
            }
            None => CalculatorInputs::default(),
        }
    }

    /// Computes a report and overwrites the cache with `inputs`.
    pub async fn recalculate(
        &self,
        inputs: &CalculatorInputs,
    ) -> CalculatorReport {
        self.recalculate_at(inputs, Utc::now()).await
    }

    /// Like [`recalculate`](Self::recalculate) with an explicit timestamp.
    pub async fn recalculate_at(
        &self,
        inputs: &CalculatorInputs,
        now: DateTime<Utc>,
    ) -> CalculatorReport {
        let report = CostModel::new(&self.catalog).calculate(inputs);
        self.save(&CachedInputs::new(inputs, now)).await;
        report
    }

    /// Drops the cached inputs.
    pub async fn forget(&self) {
        if let Err(error) = self.store.remove(CACHE_KEY).await {
            warn!(%error, "could not clear cached calculator inputs");
        }
    }

    async fn load_cached(&self) -> Option<CachedInputs> {
        let raw = match self.store.get(CACHE_KEY).await {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(%error, "could not read cached calculator inputs");
                return None;
            }
        };

        serde_json::from_str(&raw)
            .map_err(|error| warn!(%error, "could not load saved calculator data"))
            .ok()
    }

    async fn save(
        &self,
        cached: &CachedInputs,
    ) {
        let json = match serde_json::to_string(cached) {
            Ok(json) => json,
            Err(error) => {
                warn!(%error, "could not encode calculator inputs");
                return;
            }
        };
        if let Err(error) = self.store.set(CACHE_KEY, &json).await {
            warn!(%error, "could not cache calculator inputs");
        }
    }
}
