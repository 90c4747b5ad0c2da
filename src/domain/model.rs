use crate::utils::error::{QueryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog entry. Items are built by the caller and only ever borrowed by
/// the query functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    #[serde(alias = "isActive")]
    pub is_active: bool,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: u32,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            is_active,
        }
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<()> {
        let invalid = |e: QueryError| QueryError::InvalidItem {
            id: self.id.clone(),
            reason: e.to_string(),
        };

        validate_non_empty_string("id", &self.id).map_err(invalid)?;
        validate_non_empty_string("name", &self.name).map_err(invalid)?;
        validate_range("price", self.price, 0.0, f64::MAX).map_err(invalid)?;
        Ok(())
    }
}

/// Items keyed by id. `None` marks an id whose item is missing or deleted.
pub type ItemMap = HashMap<String, Option<Item>>;

/// Builds an [`ItemMap`] from a list. When ids repeat, the last item wins.
pub fn index_by_id(items: &[Item]) -> ItemMap {
    items
        .iter()
        .map(|item| (item.id.clone(), Some(item.clone())))
        .collect()
}
