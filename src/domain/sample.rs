use crate::domain::model::Item;

/// The demonstration catalog used when no catalog file is given.
pub fn sample_catalog() -> Vec<Item> {
    vec![
        Item::new("1", "Laptop Pro", "electronics", 1200.0, 10, true),
        Item::new("2", "Desk Chair", "furniture", 150.0, 5, true),
        Item::new("3", "USB-C Cable", "electronics", 25.0, 0, true),
        Item::new("4", "Monitor XL", "electronics", 300.0, 7, false),
        Item::new("5", "Keyboard Lite", "electronics", 45.0, 20, true),
        Item::new("6", "Mouse Pad", "accessories", 10.0, 100, true),
        Item::new("7", "Gaming PC", "electronics", 2500.0, 3, true),
    ]
}

/// Items compared against the head of the catalog in the demo run.
pub fn sample_comparison_list() -> Vec<Item> {
    vec![
        Item::new("10", "Laptop Pro", "electronics", 1250.0, 2, true),
        Item::new("11", "Standing Desk", "furniture", 300.0, 3, true),
        Item::new("3", "USB-C Cable", "electronics", 26.0, 1, true),
    ]
}
