use clap::Parser;
use item_query::domain::sample::{sample_catalog, sample_comparison_list};
use item_query::utils::{logger, validation::Validate};
use item_query::{CliConfig, FileCatalog, Item, ItemProcessor, ItemSource, Result, index_by_id};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting item-query");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Query run failed: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

fn load_catalog(path: Option<&str>) -> Result<Option<Vec<Item>>> {
    path.map(|path| FileCatalog::new(path).load_items()).transpose()
}

fn run(config: &CliConfig) -> Result<()> {
    let items = load_catalog(config.catalog.as_deref())?.unwrap_or_else(sample_catalog);
    let (first, second) = match load_catalog(config.compare_with.as_deref())? {
        Some(other) => (items.clone(), other),
        None => (
            items.iter().take(3).cloned().collect::<Vec<_>>(),
            sample_comparison_list(),
        ),
    };

    let mut processor = ItemProcessor::stdout();

    println!("--- Pricy Active Electronic Names ---");
    println!("{:?}", processor.pricy_active_electronic_names(&items));

    println!("\n--- User Data (Safe) ---");
    for (i, username) in config.usernames.iter().enumerate() {
        let user_data = processor.fetch_user_data_safely(username, i % 2 == 0);
        println!("{}", user_data);
    }

    println!("\n--- Print Item Details ---");
    match items.first() {
        Some(item) => processor.print_item_details(item),
        None => tracing::warn!("Catalog is empty, nothing to print"),
    }

    println!("\n--- Log Operation Status ---");
    processor.log_operation_status("System initialized", true);
    processor.log_operation_status("Data backup failed", false);

    println!("\n--- Active Item Names (Lowercase) ---");
    println!(
        "Active items (lowercase): {:?}",
        processor.active_item_names_lowercase(&items)
    );

    println!("\n--- System Configuration ---");
    println!("System Config: {:?}", processor.system_configuration());

    println!("\n--- Common Items ---");
    let common = processor.common_items_by_name(&first, &second);
    println!(
        "Common items: {:?}",
        common.iter().map(|item| item.name.as_str()).collect::<Vec<_>>()
    );

    println!("\n--- Item Price (Safe) ---");
    let mut item_map = index_by_id(&items);
    item_map.insert(config.null_id.clone(), None);
    for item_id in &config.item_ids {
        let price = processor.item_price_safely(&item_map, item_id);
        println!("Price for '{}': {:?}", item_id, price);
    }

    tracing::info!("✅ All queries completed");
    Ok(())
}
