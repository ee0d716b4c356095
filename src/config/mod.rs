//! Configuration module for market-table
//!
//! Table defaults live in a TOML file so hosts can tune the debounce window,
//! the page size menu and the initial sort without recompiling.
//!
//! # Config Location
//!
//! The default file lives in the platform config directory under `dev.market-table`:
//! - **Linux**: `~/.config/dev.market-table/config.toml`
//! - **macOS**: `~/Library/Application Support/dev.market-table/config.toml`
//! - **Windows**: `%APPDATA%\dev.market-table\config.toml`
//!
//! # Example
//!
//! ```toml
//! title = "Market"
//! debounce_ms = 800
//! page_size_options = [5, 10, 25]
//! default_page_size = 5
//! change_sign = "always_plus"
//!
//! [default_sort]
//! key = "price"
//! direction = "descending"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{MarketTableError, Result};
use crate::format::ChangeSignStyle;
use crate::types::{CategoryFilter, SortSpec};

/// Application identifier for config directories
pub const APP_ID: &str = "dev.market-table";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Default search debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;

/// Default rows-per-page menu
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Get the application config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Get the path to the default config file
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Table behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Toolbar title
    pub title: String,

    /// Quiet period before a typed search term is applied
    pub debounce_ms: u64,

    /// Page sizes offered by the rows-per-page menu
    pub page_size_options: Vec<usize>,

    /// Page size on startup; must be one of `page_size_options`
    pub default_page_size: usize,

    /// Category selected on startup
    pub default_category: CategoryFilter,

    /// Sign rendering of the change column
    pub change_sign: ChangeSignStyle,

    /// Sort applied on startup; `None` keeps dataset order.
    /// Kept last: TOML writes tables after plain keys.
    pub default_sort: Option<SortSpec>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: "Market".to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            default_category: CategoryFilter::All,
            change_sign: ChangeSignStyle::AlwaysPlus,
            default_sort: None,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Check the page size menu and the default page size
    pub fn validate(&self) -> Result<()> {
        if self.page_size_options.is_empty() {
            return Err(MarketTableError::Config(
                "page_size_options must not be empty".to_string(),
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(MarketTableError::Config(
                "page_size_options must not contain 0".to_string(),
            ));
        }
        self.check_page_size(self.default_page_size)
            .map_err(|e| e.with_context("Invalid default_page_size"))
    }

    /// Reject page sizes that are not on the menu
    pub fn check_page_size(&self, size: usize) -> Result<()> {
        if self.page_size_options.contains(&size) {
            Ok(())
        } else {
            Err(MarketTableError::InvalidPageSize {
                size,
                allowed: self.page_size_options.clone(),
            })
        }
    }

    /// Parse and validate a TOML config
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MarketTableError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load config file {:?}", path)))
    }

    /// Load a config file, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load table config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save config to disk as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MarketTableError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| {
            MarketTableError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }
}
