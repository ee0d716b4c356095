//! Pipeline composition

use serde::{Deserialize, Serialize};

use super::{filter_by_category, filter_by_search, paginate, sort_rows};
use crate::types::{CategoryFilter, PageWindow, Row, SortSpec};

/// Everything needed to select one page of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowQuery {
    pub category: CategoryFilter,
    /// Applied (already debounced) search term
    pub search_term: String,
    /// `None` keeps dataset order
    pub sort: Option<SortSpec>,
    pub page: PageWindow,
}

impl RowQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, index: usize, size: usize) -> Self {
        self.page = PageWindow::new(index, size);
        self
    }
}

/// Output of [`select_rows`]
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// Rows of the requested page, sorted
    pub visible_rows: Vec<&'a Row>,
    /// Rows left after filtering, before pagination
    pub total_count: usize,
}

/// Run the full pipeline: category, search, count, sort, paginate.
pub fn select_rows<'a>(rows: &'a [Row], query: &RowQuery) -> Selection<'a> {
    let all: Vec<&Row> = rows.iter().collect();
    let by_category = filter_by_category(&all, query.category);
    let filtered = filter_by_search(&by_category, &query.search_term);
    let total_count = filtered.len();

    let ordered = match query.sort {
        Some(spec) => sort_rows(&filtered, spec.key, spec.direction),
        None => filtered,
    };
    let visible_rows = paginate(&ordered, query.page.index, query.page.size).to_vec();

    tracing::trace!(
        category = %query.category,
        term = %query.search_term,
        total = rows.len(),
        matched = total_count,
        visible = visible_rows.len(),
        "Selected rows"
    );

    Selection {
        visible_rows,
        total_count,
    }
}
