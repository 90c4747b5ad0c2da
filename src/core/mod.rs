pub mod processor;
pub mod query;
