use crate::domain::model::Item;
use crate::domain::ports::ItemSource;
use crate::utils::error::{QueryError, Result};
use crate::utils::validation::Validate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            "toml" => Ok(CatalogFormat::Toml),
            _ => Err(QueryError::UnsupportedFormat {
                path: path.display().to_string(),
                extension,
            }),
        }
    }
}

/// `[[items]]` tables in a TOML catalog.
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    items: Vec<Item>,
}

/// Item source reading a catalog file. The format follows the file extension.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn format(&self) -> Result<CatalogFormat> {
        CatalogFormat::from_path(&self.path)
    }

    fn parse(&self, format: CatalogFormat) -> Result<Vec<Item>> {
        match format {
            CatalogFormat::Json => {
                let content = fs::read_to_string(&self.path)?;
                Ok(serde_json::from_str(&content)?)
            }
            CatalogFormat::Csv => {
                let file = fs::File::open(&self.path)?;
                let mut reader = csv::ReaderBuilder::new()
                    .trim(csv::Trim::All)
                    .from_reader(file);
                let mut items = Vec::new();
                for record in reader.deserialize() {
                    let item: Item = record?;
                    items.push(item);
                }
                Ok(items)
            }
            CatalogFormat::Toml => {
                let content = fs::read_to_string(&self.path)?;
                let catalog: TomlCatalog = toml::from_str(&content)?;
                Ok(catalog.items)
            }
        }
    }
}

impl ItemSource for FileCatalog {
    fn load_items(&self) -> Result<Vec<Item>> {
        let format = self.format()?;
        tracing::debug!("Reading {:?} catalog from {}", format, self.path.display());

        let items = self.parse(format)?;
        for item in &items {
            item.validate()?;
        }

        tracing::info!(
            "📦 Loaded {} items from {}",
            items.len(),
            self.path.display()
        );
        Ok(items)
    }
}
