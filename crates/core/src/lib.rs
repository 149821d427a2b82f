#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod time;

pub use catalog::{CatalogError, ContentCatalog};
pub use time::Clock;
