//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use market_table::Row;
use std::time::Duration;

/// Shorthand for a millisecond duration
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Symbols of a page, in display order
pub fn symbols(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|r| r.asset_symbol.clone()).collect()
}
