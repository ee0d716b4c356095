//! Row datasets
//!
//! The table never reaches for global row data: hosts build a [`Dataset`] at
//! startup and hand its rows to the pipeline. Datasets come from the built-in
//! [`Dataset::sample`] or from a JSON/TOML file.
//!
//! # File Formats
//!
//! JSON files hold either a bare array of rows or an object with a `rows` array.
//! TOML files hold a `[[rows]]` table array:
//!
//! ```toml
//! [[rows]]
//! asset_symbol = "SPZ"
//! price = 23418.23
//! change_percent = 3.7
//! volume_24h = 670.0
//! market_cap = 4114.0
//! category = "fiat"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MarketTableError, Result};
use crate::types::{Category, Row};

/// An ordered, immutable set of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<Row>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDataset {
    Bare(Vec<Row>),
    Wrapped { rows: Vec<Row> },
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The thirteen-instrument market sample
    pub fn sample() -> Self {
        use Category::{Crypto, Fiat};
        Self::new(vec![
            Row::new("SPZ", 23418.23, 3.7, 670.0, 4114.0, Fiat),
            Row::new("CDS", 412.0, 25.0, 510.0, 4867.9, Crypto),
            Row::new("DEQ", 23418.23, 16.0, 24.0, 6000.0, Crypto),
            Row::new("FOL", 159.0, 6.0, 24.0, 40785.0, Crypto),
            Row::new("PCV", 356.0, 16.0, 49.0, 1353.9, Fiat),
            Row::new("RCV", 408.0, 3.2, 87.0, 5666.5, Crypto),
            Row::new("QSA", 237.0, 9.0, 37.0, 1144.3, Fiat),
            Row::new("PSA", 375.0, 1.7, 94.0, 54320.0, Crypto),
            Row::new("PKA", 518.0, 26.0, 65.0, 700.0, Crypto),
            Row::new("LSA", 392.0, 0.2, 98.0, 133.0, Crypto),
            Row::new("MPA", 318.0, 0.5, 81.0, 2123.0, Fiat),
            Row::new("NGP", 360.0, 19.0, 9.0, 37445.0, Fiat),
            Row::new("OQA", 437.0, 18.0, 63.0, 4967.0, Fiat),
        ])
    }

    /// Parse a JSON dataset (bare array or `{"rows": [...]}`)
    pub fn from_json_str(content: &str) -> Result<Self> {
        let parsed: JsonDataset = serde_json::from_str(content)?;
        let rows = match parsed {
            JsonDataset::Bare(rows) | JsonDataset::Wrapped { rows } => rows,
        };
        Ok(Self::new(rows))
    }

    /// Parse a TOML dataset with a `[[rows]]` array
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a dataset, choosing the format by file extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MarketTableError::Dataset(format!("Failed to read dataset {:?}: {}", path, e))
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let dataset = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            other => {
                return Err(MarketTableError::Dataset(format!(
                    "Unsupported dataset format {:?} for {:?}",
                    other, path
                )))
            }
        }
        .map_err(|e| e.with_context(format!("Failed to parse dataset {:?}", path)))?;

        tracing::debug!("Loaded {} rows from {:?}", dataset.len(), path);
        Ok(dataset)
    }
}
