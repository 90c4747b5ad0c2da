//! Pure queries over item lists and maps. None of these allocate more than
//! their result (plus one name set for [`common_items_by_name`]) and none can
//! fail.

use crate::domain::model::{Item, ItemMap};
use std::collections::{BTreeMap, HashSet};

pub const ELECTRONICS_CATEGORY: &str = "electronics";
pub const PRICY_THRESHOLD: f64 = 50.0;

/// Uppercased names of active, in-stock electronics priced above
/// [`PRICY_THRESHOLD`], in input order.
pub fn pricy_active_electronic_names(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .filter(|item| {
            item.is_active
                && item.category == ELECTRONICS_CATEGORY
                && item.stock > 0
                && item.price > PRICY_THRESHOLD
        })
        .map(|item| item.name.to_uppercase())
        .collect()
}

/// Lowercased names of the active items, in input order.
pub fn active_item_names_lowercase(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.is_active)
        .map(|item| item.name.to_lowercase())
        .collect()
}

pub fn system_configuration() -> BTreeMap<String, String> {
    [
        ("version", "1.0.0"),
        ("api_endpoint", "/api/v1"),
        ("feature_toggles_active", "true"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// Items of `first` whose name occurs anywhere in `second`. Order and
/// duplicates of `first` are kept.
pub fn common_items_by_name(first: &[Item], second: &[Item]) -> Vec<Item> {
    let names: HashSet<&str> = second.iter().map(|item| item.name.as_str()).collect();

    first
        .iter()
        .filter(|item| names.contains(item.name.as_str()))
        .cloned()
        .collect()
}

/// Price of the item stored under `item_id`, or `0.0` when the id is absent
/// or maps to `None`.
pub fn item_price_safely(items: &ItemMap, item_id: &str) -> f64 {
    items
        .get(item_id)
        .and_then(Option::as_ref)
        .map_or(0.0, |item| item.price)
}
