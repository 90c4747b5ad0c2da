use crate::core::query;
use crate::domain::model::{Item, ItemMap};
use chrono::Utc;
use std::collections::BTreeMap;
use std::io::{self, Stdout, Write};

/// Runs the item queries and writes the human-readable lines of the
/// reporting operations to `W`.
///
/// Writing never makes an operation fail. A failed write is logged and the
/// line is dropped.
pub struct ItemProcessor<W: Write> {
    out: W,
}

impl ItemProcessor<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ItemProcessor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn pricy_active_electronic_names(&self, items: &[Item]) -> Vec<String> {
        query::pricy_active_electronic_names(items)
    }

    /// Simulated user lookup. `_operation_successful` is accepted for call
    /// compatibility and has no effect.
    pub fn fetch_user_data_safely(&mut self, username: &str, _operation_successful: bool) -> String {
        tracing::debug!(username, "fetching user data");
        self.emit(format_args!("Attempting to fetch data for user: {}", username));
        format!("User data for '{}' (simulated safe fetch)", username)
    }

    pub fn print_item_details(&mut self, item: &Item) {
        self.emit(format_args!(
            "Item: {}, Price: {:?}, Stock: {}",
            item.name, item.price, item.stock
        ));
    }

    /// Writes `Log: [SUCCESS] - <message>` (or `FAILURE`). The capture time
    /// only goes to the trace log, never into the emitted line.
    pub fn log_operation_status(&mut self, message: &str, is_success: bool) {
        let timestamp = Utc::now();
        let status_text = if is_success { "SUCCESS" } else { "FAILURE" };
        tracing::debug!(%timestamp, status = status_text, "operation status");
        self.emit(format_args!("Log: [{}] - {}", status_text, message));
    }

    pub fn active_item_names_lowercase(&self, items: &[Item]) -> Vec<String> {
        query::active_item_names_lowercase(items)
    }

    pub fn system_configuration(&self) -> BTreeMap<String, String> {
        query::system_configuration()
    }

    pub fn common_items_by_name(&self, first: &[Item], second: &[Item]) -> Vec<Item> {
        query::common_items_by_name(first, second)
    }

    pub fn item_price_safely(&self, items: &ItemMap, item_id: &str) -> f64 {
        query::item_price_safely(items, item_id)
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            tracing::warn!("⚠️ Failed to write output line: {}", e);
        }
    }
}
