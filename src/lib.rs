pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::FileCatalog;
pub use crate::core::processor::ItemProcessor;
pub use crate::core::query::{
    active_item_names_lowercase, common_items_by_name, item_price_safely,
    pricy_active_electronic_names, system_configuration,
};
pub use crate::domain::model::{index_by_id, Item, ItemMap};
pub use crate::domain::ports::ItemSource;
pub use crate::utils::error::{QueryError, Result};
