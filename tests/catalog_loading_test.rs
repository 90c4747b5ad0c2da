use anyhow::Result;
use item_query::{
    item_price_safely, pricy_active_electronic_names, FileCatalog, ItemSource, QueryError,
};
use std::fs;
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, name: &str, content: &str) -> Result<FileCatalog> {
    let path = dir.path().join(name);
    fs::write(&path, content)?;
    Ok(FileCatalog::new(path))
}

/// JSON catalogs accept both `is_active` and `isActive`.
#[test]
fn test_load_json_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog = write_catalog(
        &temp_dir,
        "items.json",
        r#"[
            {"id": "1", "name": "Laptop Pro", "category": "electronics", "price": 1200.0, "stock": 10, "is_active": true},
            {"id": "3", "name": "USB-C Cable", "category": "electronics", "price": 25.0, "stock": 0, "isActive": true},
            {"id": "7", "name": "Gaming PC", "category": "electronics", "price": 2500.0, "stock": 3, "isActive": true}
        ]"#,
    )?;

    let items = catalog.load_items()?;
    assert_eq!(items.len(), 3);
    assert_eq!(
        pricy_active_electronic_names(&items),
        vec!["LAPTOP PRO", "GAMING PC"]
    );
    Ok(())
}

#[test]
fn test_load_csv_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog = write_catalog(
        &temp_dir,
        "items.csv",
        "id,name,category,price,stock,is_active\n\
         1,Laptop Pro,electronics,1200.0,10,true\n\
         2,Desk Chair,furniture,150.0,5,true\n\
         4,Monitor XL,electronics,300.0,7,false\n",
    )?;

    let items = catalog.load_items()?;
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].name, "Desk Chair");
    assert!(!items[2].is_active);
    assert_eq!(pricy_active_electronic_names(&items), vec!["LAPTOP PRO"]);
    Ok(())
}

#[test]
fn test_load_toml_catalog_into_map() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog = write_catalog(
        &temp_dir,
        "items.toml",
        r#"
[[items]]
id = "5"
name = "Keyboard Lite"
category = "electronics"
price = 45.0
stock = 20
is_active = true

[[items]]
id = "6"
name = "Mouse Pad"
category = "accessories"
price = 10.0
stock = 100
is_active = true
"#,
    )?;

    let map = catalog.load_item_map()?;
    assert_eq!(map.len(), 2);
    assert_eq!(item_price_safely(&map, "5"), 45.0);
    assert_eq!(item_price_safely(&map, "missing"), 0.0);
    Ok(())
}

#[test]
fn test_empty_toml_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog = write_catalog(&temp_dir, "empty.toml", "")?;
    assert!(catalog.load_items()?.is_empty());
    Ok(())
}

#[test]
fn test_negative_price_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog = write_catalog(
        &temp_dir,
        "items.json",
        r#"[{"id": "9", "name": "Refund", "category": "misc", "price": -5.0, "stock": 1, "is_active": true}]"#,
    )?;

    match catalog.load_items() {
        Err(QueryError::InvalidItem { id, .. }) => assert_eq!(id, "9"),
        other => panic!("expected InvalidItem, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_load_failures() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let unsupported = write_catalog(&temp_dir, "items.yaml", "- id: 1")?;
    assert!(matches!(
        unsupported.load_items(),
        Err(QueryError::UnsupportedFormat { .. })
    ));

    let missing = FileCatalog::new(temp_dir.path().join("missing.json"));
    assert!(matches!(missing.load_items(), Err(QueryError::IoError(_))));

    let missing_csv = FileCatalog::new(temp_dir.path().join("missing.csv"));
    let err = missing_csv.load_items().unwrap_err();
    assert!(matches!(err, QueryError::IoError(_)));
    assert_eq!(err.recovery_suggestion(), "Check that the catalog file exists and is readable");

    let missing_toml = FileCatalog::new(temp_dir.path().join("missing.toml"));
    assert!(matches!(missing_toml.load_items(), Err(QueryError::IoError(_))));

    let malformed = write_catalog(&temp_dir, "broken.json", "{ not json")?;
    assert!(matches!(
        malformed.load_items(),
        Err(QueryError::SerializationError(_))
    ));

    let bad_csv = write_catalog(
        &temp_dir,
        "bad.csv",
        "id,name,category,price,stock,is_active\n1,Lamp,home,cheap,1,true\n",
    )?;
    assert!(matches!(bad_csv.load_items(), Err(QueryError::CsvError(_))));

    let bad_toml = write_catalog(&temp_dir, "bad.toml", "[[items]]\nid = 1\n")?;
    assert!(matches!(bad_toml.load_items(), Err(QueryError::TomlError(_))));
    Ok(())
}
