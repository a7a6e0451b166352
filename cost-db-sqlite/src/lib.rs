pub mod factory;
pub mod store;

pub use factory::{SqliteStoreFactory, connection_url};
pub use store::SqliteStore;
