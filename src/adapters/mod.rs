// Adapters layer: concrete item sources backed by external systems.

pub mod catalog;

pub use catalog::{CatalogFormat, FileCatalog};
