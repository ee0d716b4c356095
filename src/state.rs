//! Table state and actions
//!
//! [`TableState`] owns everything the user can change about the table: category,
//! search text, sort column and page. Hosts feed it [`TableAction`]s and read a
//! [`TableView`] back; the state never touches the dataset except through
//! [`select_rows`](crate::pipeline::select_rows).
//!
//! # Search
//!
//! Typed text and the applied term are kept apart. `EditSearch` only records the
//! text and (re)schedules it on the debouncer; the term reaches the pipeline when
//! [`TableState::tick`] sees the quiet period elapse, or when a push-style host
//! calls [`TableState::apply_search`].
//!
//! # Page Resets
//!
//! Anything that can shrink the result set (category, applied search term, page
//! size) sends the table back to page 0. Sorting keeps the page.

use std::time::Instant;

use crate::config::TableConfig;
use crate::debounce::Debouncer;
use crate::error::{MarketTableError, Result};
use crate::format::{self, ChangeSignStyle};
use crate::pipeline::{select_rows, RowQuery};
use crate::types::{CategoryFilter, PageWindow, Row, SortDirection, SortKey, SortSpec};

/// User interactions with the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Pick an entry from the category menu
    SelectCategory(CategoryFilter),
    /// The search box text changed
    EditSearch(String),
    /// A column header was clicked
    RequestSort(SortKey),
    /// Go to a page
    ChangePage(usize),
    /// Pick an entry from the rows-per-page menu
    ChangePageSize(usize),
}

/// Render-ready snapshot of the table
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Row>,
    /// Rows matching the filters, across all pages
    pub total_count: usize,
    pub page: PageWindow,
    pub sort: Option<SortSpec>,
    pub category: CategoryFilter,
    /// Text currently in the search box (may not be applied yet)
    pub search_text: String,
    /// Whether a typed term is still waiting for the quiet period
    pub search_pending: bool,
    pub range_label: String,
    pub change_sign: ChangeSignStyle,
}

impl TableView<'_> {
    /// Sort glyph for a column header, if that column is the active sort
    pub fn sort_glyph(&self, key: SortKey) -> Option<char> {
        self.sort
            .filter(|spec| spec.key == key)
            .map(|spec| format::sort_glyph(spec.direction))
    }
}

/// Current table interaction state
#[derive(Debug, Clone)]
pub struct TableState {
    category: CategoryFilter,
    search_text: String,
    applied_term: String,
    search_debouncer: Debouncer<String>,
    sort: Option<SortSpec>,
    page_index: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    change_sign: ChangeSignStyle,
}

impl TableState {
    /// Build the initial state from a validated config
    pub fn new(config: &TableConfig) -> Self {
        Self {
            category: config.default_category,
            search_text: String::new(),
            applied_term: String::new(),
            search_debouncer: Debouncer::new(config.debounce()),
            sort: config.default_sort,
            page_index: 0,
            page_size: config.default_page_size,
            page_size_options: config.page_size_options.clone(),
            change_sign: config.change_sign,
        }
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The term the pipeline currently filters with
    pub fn applied_term(&self) -> &str {
        &self.applied_term
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_debouncer.is_pending()
    }

    /// When the pending search term will be applied, for hosts that sleep
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_debouncer.deadline()
    }

    /// Apply one user action at time `now`
    pub fn handle(&mut self, action: TableAction, now: Instant) -> Result<()> {
        tracing::debug!(?action, "Table action");
        match action {
            TableAction::SelectCategory(category) => {
                self.category = category;
                self.page_index = 0;
            }
            TableAction::EditSearch(text) => {
                self.search_text = text.clone();
                self.search_debouncer.schedule(text, now);
            }
            TableAction::RequestSort(key) => {
                self.sort = Some(next_sort(self.sort, key));
            }
            TableAction::ChangePage(index) => {
                self.page_index = index;
            }
            TableAction::ChangePageSize(size) => {
                if !self.page_size_options.contains(&size) {
                    return Err(MarketTableError::InvalidPageSize {
                        size,
                        allowed: self.page_size_options.clone(),
                    });
                }
                self.page_size = size;
                self.page_index = 0;
            }
        }
        Ok(())
    }

    /// Advance the search debounce. Returns true when a term was applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search_debouncer.poll(now) {
            Some(term) => {
                self.apply_search(term);
                true
            }
            None => false,
        }
    }

    /// Apply a settled search term immediately
    ///
    /// Cancels any term still waiting in the internal debouncer, since the
    /// caller's term is newer.
    pub fn apply_search(&mut self, term: impl Into<String>) {
        self.search_debouncer.cancel();
        let term = term.into();
        tracing::debug!(term = %term, "Applying search term");
        self.search_text.clone_from(&term);
        self.applied_term = term;
        self.page_index = 0;
    }

    /// Apply any pending search term without waiting for the quiet period
    pub fn flush_search(&mut self) -> bool {
        match self.search_debouncer.flush() {
            Some(term) => {
                self.apply_search(term);
                true
            }
            None => false,
        }
    }

    /// The pipeline query for the current state
    pub fn query(&self) -> RowQuery {
        RowQuery {
            category: self.category,
            search_term: self.applied_term.clone(),
            sort: self.sort,
            page: PageWindow::new(self.page_index, self.page_size),
        }
    }

    /// Select the visible page of `rows`
    pub fn view<'a>(&self, rows: &'a [Row]) -> TableView<'a> {
        let query = self.query();
        let selection = select_rows(rows, &query);
        TableView {
            range_label: format::range_label(
                query.page.index,
                query.page.size,
                selection.total_count,
            ),
            rows: selection.visible_rows,
            total_count: selection.total_count,
            page: query.page,
            sort: self.sort,
            category: self.category,
            search_text: self.search_text.clone(),
            search_pending: self.is_search_pending(),
            change_sign: self.change_sign,
        }
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

/// Header click: same column flips direction, a new column starts ascending
fn next_sort(current: Option<SortSpec>, key: SortKey) -> SortSpec {
    match current {
        Some(spec) if spec.key == key => SortSpec::new(key, spec.direction.toggled()),
        _ => SortSpec::new(key, SortDirection::Ascending),
    }
}
