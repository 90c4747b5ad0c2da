use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate, CATALOG_EXTENSIONS,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "item-query")]
#[command(about = "Runs the item queries against a catalog of items")]
pub struct CliConfig {
    /// Catalog file (.json, .csv or .toml). The built-in sample is used when omitted
    #[arg(long)]
    pub catalog: Option<String>,

    /// Second catalog for the common-items query
    #[arg(long)]
    pub compare_with: Option<String>,

    /// Ids looked up with the safe price query
    #[arg(
        long = "item-id",
        default_values = ["1", "nonexistentId", "ID_NOT_IN_MAP_AT_ALL"]
    )]
    pub item_ids: Vec<String>,

    /// Id stored with no item behind it in the price lookup map
    #[arg(long, default_value = "nonexistentId")]
    pub null_id: String,

    /// Users passed to the simulated user data fetch
    #[arg(long = "username", default_values = ["alice", "bob"])]
    pub usernames: Vec<String>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for (field, path) in [("catalog", &self.catalog), ("compare_with", &self.compare_with)] {
            if let Some(path) = path {
                validate_path(field, path)?;
                validate_file_extension(field, path, CATALOG_EXTENSIONS)?;
            }
        }

        for id in &self.item_ids {
            validate_non_empty_string("item_id", id)?;
        }
        validate_non_empty_string("null_id", &self.null_id)?;

        for username in &self.usernames {
            validate_non_empty_string("username", username)?;
        }

        Ok(())
    }
}
