pub mod calculations;
pub mod models;
pub mod session;
pub mod store;

pub use models::*;
pub use session::{CACHE_KEY, CalculatorSession};
pub use store::{KeyValueStore, StoreConfig, StoreError, StoreFactory, StoreRegistry};
