use async_trait::async_trait;

use cost_core::store::{KeyValueStore, StoreConfig, StoreError, StoreFactory};

use crate::store::SqliteStore;

/// Turns a user-supplied connection string into a sqlx SQLite URL.
///
/// * `""` or `":memory:"`: an ephemeral in-memory database.
/// * anything starting with `sqlite:`: used as-is.
/// * a bare file path: opened read-write, created if missing.
pub fn connection_url(connection_string: &str) -> String {
    let trimmed = connection_string.trim();
    if trimmed.is_empty() || trimmed == ":memory:" {
        "sqlite::memory:".to_string()
    } else if trimmed.starts_with("sqlite:") {
        trimmed.to_string()
    } else {
        format!("sqlite:{trimmed}?mode=rwc")
    }
}

/// [`StoreFactory`] for SQLite.
///
/// Register this with a [`cost_core::StoreRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use cost_core::StoreRegistry;
/// use cost_db_sqlite::SqliteStoreFactory;
///
/// let mut registry = StoreRegistry::with_builtin();
/// registry.register(Box::new(SqliteStoreFactory));
/// ```
pub struct SqliteStoreFactory;

#[async_trait]
impl StoreFactory for SqliteStoreFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Open the database described by `config.connection_string` and run
    /// the embedded migrations.
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn KeyValueStore>, StoreError> {
        let url = connection_url(&config.connection_string);
        let store = SqliteStore::new(&url)
            .await
            .map_err(|e| StoreError::Connection(format!("{e:#}")))?;
        store
            .run_migrations()
            .await
            .map_err(|e| StoreError::Backend(format!("{e:#}")))?;
        Ok(Box::new(store))
    }
}
