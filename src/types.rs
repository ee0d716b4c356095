//! Core data types for market-table
//!
//! This module contains the row record and the small value types that describe
//! a table query.
//!
//! # Main Types
//!
//! - [`Row`] - One market instrument (symbol, price, change, volume, market cap)
//! - [`Category`] - Coarse asset classification of a row
//! - [`CategoryFilter`] - Menu selection: all, crypto or fiat
//! - [`SortKey`] / [`SortDirection`] / [`SortSpec`] - Column sort state
//! - [`PageWindow`] - Page index and page size
//!
//! # Labels
//!
//! Every enum has a total mapping between its user-facing label and its value
//! through [`std::str::FromStr`] and [`std::fmt::Display`], so the rendering layer
//! never has to keep an index into a separate label list.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::MarketTableError;

/// Asset classification of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Crypto,
    Fiat,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Crypto => "crypto",
            Category::Fiat => "fiat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MarketTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crypto" => Ok(Category::Crypto),
            "fiat" => Ok(Category::Fiat),
            _ => Err(MarketTableError::UnknownCategory(s.to_string())),
        }
    }
}

/// One market instrument record
///
/// Rows are immutable once built; the pipeline only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Short ticker-like identifier
    #[serde(alias = "assets")]
    pub asset_symbol: String,

    /// Last price
    pub price: f64,

    /// Percentage change; may be negative
    #[serde(alias = "change")]
    pub change_percent: f64,

    /// Trailing 24h volume, in millions
    #[serde(alias = "volume")]
    pub volume_24h: f64,

    /// Market capitalization, in millions
    #[serde(alias = "market")]
    pub market_cap: f64,

    #[serde(alias = "type")]
    pub category: Category,
}

impl Row {
    pub fn new(
        asset_symbol: impl Into<String>,
        price: f64,
        change_percent: f64,
        volume_24h: f64,
        market_cap: f64,
        category: Category,
    ) -> Self {
        Self {
            asset_symbol: asset_symbol.into(),
            price,
            change_percent,
            volume_24h,
            market_cap,
            category,
        }
    }

    /// Numeric value of a sort column, or `None` for the symbol column
    pub fn numeric_field(&self, key: SortKey) -> Option<f64> {
        match key {
            SortKey::AssetSymbol => None,
            SortKey::Price => Some(self.price),
            SortKey::ChangePercent => Some(self.change_percent),
            SortKey::Volume24h => Some(self.volume_24h),
            SortKey::MarketCap => Some(self.market_cap),
        }
    }

    /// Natural (ascending) ordering of two rows on one column
    ///
    /// Numbers use the IEEE total order so the comparison is total even for NaN.
    pub fn cmp_by(&self, other: &Row, key: SortKey) -> Ordering {
        match (self.numeric_field(key), other.numeric_field(key)) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => self.asset_symbol.cmp(&other.asset_symbol),
        }
    }
}

/// Category selection applied to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Identity filter
    #[default]
    All,
    Crypto,
    Fiat,
}

impl CategoryFilter {
    /// Menu order of the filter options
    pub const OPTIONS: [CategoryFilter; 3] =
        [CategoryFilter::All, CategoryFilter::Crypto, CategoryFilter::Fiat];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Crypto => "Crypto",
            CategoryFilter::Fiat => "Fiat",
        }
    }

    /// Whether a row category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Crypto => category == Category::Crypto,
            CategoryFilter::Fiat => category == Category::Fiat,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Crypto => CategoryFilter::Crypto,
            Category::Fiat => CategoryFilter::Fiat,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = MarketTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "crypto" => Ok(CategoryFilter::Crypto),
            "fiat" => Ok(CategoryFilter::Fiat),
            _ => Err(MarketTableError::UnknownCategory(s.to_string())),
        }
    }
}

/// Sortable column of a [`Row`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[serde(alias = "assets")]
    AssetSymbol,
    Price,
    #[serde(alias = "change")]
    ChangePercent,
    #[serde(rename = "volume_24h", alias = "volume")]
    Volume24h,
    #[serde(alias = "market")]
    MarketCap,
}

impl SortKey {
    /// Columns in display order
    pub const ALL: [SortKey; 5] = [
        SortKey::AssetSymbol,
        SortKey::Price,
        SortKey::ChangePercent,
        SortKey::Volume24h,
        SortKey::MarketCap,
    ];

    /// Field name as used in dataset files
    pub fn field_name(&self) -> &'static str {
        match self {
            SortKey::AssetSymbol => "asset_symbol",
            SortKey::Price => "price",
            SortKey::ChangePercent => "change_percent",
            SortKey::Volume24h => "volume_24h",
            SortKey::MarketCap => "market_cap",
        }
    }

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::AssetSymbol => "Assets",
            SortKey::Price => "Price",
            SortKey::ChangePercent => "Change",
            SortKey::Volume24h => "24h Volume",
            SortKey::MarketCap => "Market Cap",
        }
    }

    /// Numeric columns are right-aligned by renderers
    pub fn is_numeric(&self) -> bool {
        !matches!(self, SortKey::AssetSymbol)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for SortKey {
    type Err = MarketTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assets" | "asset_symbol" | "symbol" => Ok(SortKey::AssetSymbol),
            "price" => Ok(SortKey::Price),
            "change" | "change_percent" => Ok(SortKey::ChangePercent),
            "volume" | "volume_24h" => Ok(SortKey::Volume24h),
            "market" | "market_cap" => Ok(SortKey::MarketCap),
            _ => Err(MarketTableError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Sort direction of the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to a natural ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = MarketTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(MarketTableError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}

/// A page of the filtered result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Zero-based page number
    pub index: usize,
    /// Rows per page
    pub size: usize,
}

impl PageWindow {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    /// Offset of the first row of this page; saturates instead of overflowing
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self { index: 0, size: 5 }
    }
}
