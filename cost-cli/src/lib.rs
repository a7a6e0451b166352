pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod report;

pub use catalog::{CatalogError, CatalogLoader};
pub use cli::Args;
pub use config::{CliConfig, InputBounds};
pub use report::OutputFormat;
