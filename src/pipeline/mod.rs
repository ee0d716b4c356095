//! Row selection pipeline.
//!
//! A fixed sequence of pure stages turns the full dataset into the rows of one
//! table page:
//!
//! ```text
//! [rows] ──► category ──► search ──► (total_count) ──► sort ──► paginate ──► [page]
//! ```
//!
//! # Design
//!
//! - **Borrowing stages**: every stage takes `&[&Row]` and returns references into
//!   the caller's dataset; rows are never cloned or mutated.
//! - **Order preserving**: both filters keep relative order and the sort is stable,
//!   so equal rows always appear in dataset order.
//! - **No failure modes**: an empty result or a page past the end is a valid output.

pub mod filter;
pub mod paginate;
pub mod select;
pub mod sort;

pub use filter::{filter_by_category, filter_by_search, is_blank_term};
pub use paginate::paginate;
pub use select::{select_rows, RowQuery, Selection};
pub use sort::sort_rows;
