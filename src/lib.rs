//! # market-table: Market Instrument Table Model
//!
//! The data side of a market overview table: a fixed list of instrument rows
//! that users filter by category, search by symbol, sort by column and page
//! through. Rendering is left to the host (terminal, immediate-mode GUI, web
//! bridge); this crate decides which rows are shown and how their cells read.
//!
//! ## Architecture
//!
//! - **Pipeline**: pure stages (category → search → sort → paginate) over a borrowed dataset
//! - **Debounce**: cancellable timers so search only runs once typing settles
//! - **State**: action-driven table state producing a render-ready view
//! - **Format**: cell text, sort glyphs and pagination labels
//!
//! ## Example
//!
//! ```no_run
//! use market_table::{
//!     config::TableConfig,
//!     dataset::Dataset,
//!     state::{TableAction, TableState},
//!     types::{CategoryFilter, SortKey},
//! };
//! use std::time::Instant;
//!
//! let dataset = Dataset::sample();
//! let mut state = TableState::new(&TableConfig::default());
//!
//! let now = Instant::now();
//! state.handle(TableAction::SelectCategory(CategoryFilter::Crypto), now)?;
//! state.handle(TableAction::RequestSort(SortKey::Price), now)?;
//!
//! let view = state.view(dataset.rows());
//! println!("{} ({})", view.rows.len(), view.range_label);
//! # Ok::<(), market_table::error::MarketTableError>(())
//! ```

pub mod config;
pub mod dataset;
pub mod debounce;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use config::TableConfig;
pub use dataset::Dataset;
pub use error::{MarketTableError, Result};
pub use pipeline::{select_rows, RowQuery, Selection};
pub use state::{TableAction, TableState, TableView};
pub use types::{Category, CategoryFilter, PageWindow, Row, SortDirection, SortKey, SortSpec};
