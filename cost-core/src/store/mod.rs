pub mod factory;
pub mod kv;

pub use factory::{MemoryStoreFactory, NullStoreFactory, StoreConfig, StoreFactory, StoreRegistry};
pub use kv::{KeyValueStore, MemoryStore, NullStore, StoreError};
