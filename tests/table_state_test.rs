//! Integration tests for table state management
//!
//! These tests drive `TableState` with the same action sequences a UI would
//! produce and check the resulting views, including debounce timing.

mod common;

use common::{ms, symbols};
use market_table::format::ChangeSignStyle;
use market_table::{
    CategoryFilter, Dataset, SortDirection, SortKey, SortSpec, TableAction, TableConfig,
    TableState,
};
use std::time::Instant;

fn edit(text: &str) -> TableAction {
    TableAction::EditSearch(text.to_string())
}

#[test]
fn test_three_quick_edits_apply_once_with_last_term() {
    let dataset = Dataset::sample();
    let t0 = Instant::now();
    let mut state = TableState::default();

    state.handle(edit("p"), t0).unwrap();
    state.handle(edit("ps"), t0 + ms(100)).unwrap();
    state.handle(edit("psa"), t0 + ms(200)).unwrap();

    // Tick every 50ms like a UI frame loop and count applications.
    let mut applied_at = Vec::new();
    for step in 0..=40 {
        let now = t0 + ms(step * 50);
        if state.tick(now) {
            applied_at.push(step * 50);
            assert_eq!(state.applied_term(), "psa");
        }
    }

    assert_eq!(applied_at, vec![1000]);
    let view = state.view(dataset.rows());
    assert_eq!(symbols(&view.rows), vec!["PSA"]);
    assert_eq!(view.total_count, 1);
}

#[test]
fn test_pending_search_does_not_filter_yet() {
    let dataset = Dataset::sample();
    let t0 = Instant::now();
    let mut state = TableState::default();

    state.handle(edit("zzz"), t0).unwrap();
    let view = state.view(dataset.rows());
    assert_eq!(view.total_count, 13);
    assert!(view.search_pending);
    assert_eq!(view.search_text, "zzz");

    state.tick(t0 + ms(800));
    let view = state.view(dataset.rows());
    assert_eq!(view.total_count, 0);
    assert!(view.rows.is_empty());
    assert_eq!(view.range_label, "0–0 of 0");
}

#[test]
fn test_category_change_resets_page() {
    let t0 = Instant::now();
    let mut state = TableState::default();

    state.handle(TableAction::ChangePage(2), t0).unwrap();
    assert_eq!(state.page_index(), 2);

    state
        .handle(TableAction::SelectCategory(CategoryFilter::Crypto), t0)
        .unwrap();
    assert_eq!(state.page_index(), 0);
}

#[test]
fn test_applied_search_resets_page() {
    let t0 = Instant::now();
    let mut state = TableState::default();

    state.handle(TableAction::ChangePage(2), t0).unwrap();
    state.handle(edit("a"), t0).unwrap();
    assert_eq!(state.page_index(), 2);

    state.tick(t0 + ms(800));
    assert_eq!(state.page_index(), 0);
}

#[test]
fn test_header_clicks_and_pages() {
    let dataset = Dataset::sample();
    let t0 = Instant::now();
    let mut state = TableState::default();

    state
        .handle(TableAction::SelectCategory(CategoryFilter::Crypto), t0)
        .unwrap();
    state
        .handle(TableAction::RequestSort(SortKey::Price), t0)
        .unwrap();
    state
        .handle(TableAction::RequestSort(SortKey::Price), t0)
        .unwrap();
    assert_eq!(
        state.sort(),
        Some(SortSpec::new(SortKey::Price, SortDirection::Descending))
    );

    let first = state.view(dataset.rows());
    assert_eq!(symbols(&first.rows), vec!["DEQ", "PKA", "CDS", "RCV", "LSA"]);
    assert_eq!(first.range_label, "1–5 of 7");

    state.handle(TableAction::ChangePage(1), t0).unwrap();
    let second = state.view(dataset.rows());
    assert_eq!(symbols(&second.rows), vec!["PSA", "FOL"]);
    assert_eq!(second.range_label, "6–7 of 7");
    assert_eq!(second.total_count, 7);
}

#[test]
fn test_page_beyond_range_is_empty_view() {
    let dataset = Dataset::sample();
    let t0 = Instant::now();
    let mut state = TableState::default();

    state.handle(TableAction::ChangePage(40), t0).unwrap();
    let view = state.view(dataset.rows());
    assert!(view.rows.is_empty());
    assert_eq!(view.total_count, 13);
}

#[test]
fn test_config_drives_initial_view() {
    let dataset = Dataset::sample();
    let config = TableConfig {
        default_page_size: 10,
        default_category: CategoryFilter::Fiat,
        change_sign: ChangeSignStyle::Signed,
        default_sort: Some(SortSpec::ascending(SortKey::AssetSymbol)),
        ..TableConfig::default()
    };
    let state = TableState::new(&config);

    let view = state.view(dataset.rows());
    assert_eq!(
        symbols(&view.rows),
        vec!["MPA", "NGP", "OQA", "PCV", "QSA", "SPZ"]
    );
    assert_eq!(view.page.size, 10);
    assert_eq!(view.change_sign, ChangeSignStyle::Signed);
    assert_eq!(view.sort_glyph(SortKey::AssetSymbol), Some('▲'));
}
