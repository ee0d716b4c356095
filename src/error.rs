//! Error handling for market-table
//!
//! This module defines the crate error type and a Result alias. The selection
//! pipeline itself never fails; errors only come from parsing user-facing labels,
//! validating table settings and loading files.

use thiserror::Error;

/// Main error type for market-table operations
#[derive(Error, Debug)]
pub enum MarketTableError {
    /// A category label that maps to no category filter
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A column or field name that is not sortable
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// A sort direction label other than asc/desc
    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),

    /// A page size outside the configured options
    #[error("Unsupported page size {size} (allowed: {allowed:?})")]
    InvalidPageSize { size: usize, allowed: Vec<usize> },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to dataset loading
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<MarketTableError>,
    },
}

impl MarketTableError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        MarketTableError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for MarketTableError {
    fn from(err: serde_json::Error) -> Self {
        MarketTableError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MarketTableError {
    fn from(err: toml::de::Error) -> Self {
        MarketTableError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for MarketTableError {
    fn from(err: toml::ser::Error) -> Self {
        MarketTableError::Serialization(err.to_string())
    }
}

/// Result type alias for market-table operations
pub type Result<T> = std::result::Result<T, MarketTableError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
