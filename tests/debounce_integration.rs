//! Integration tests for the runtime-driven search debouncer
//!
//! Runs on a paused tokio clock so timer deadlines are exact.

mod common;

use common::ms;
use market_table::debounce::SearchDebouncer;
use market_table::{Dataset, TableState};
use tokio::runtime::Handle;
use tokio::time::{sleep, Instant};

#[tokio::test(start_paused = true)]
async fn test_three_quick_edits_deliver_last_term_once() {
    let start = Instant::now();
    let (mut debouncer, settled) = SearchDebouncer::new(Handle::current(), ms(800));

    debouncer.schedule("p");
    sleep(ms(100)).await;
    debouncer.schedule("ps");
    sleep(ms(100)).await;
    debouncer.schedule("psa");

    sleep(ms(799)).await;
    assert!(settled.try_recv().is_err());
    assert!(debouncer.is_pending());

    sleep(ms(2)).await;
    assert_eq!(settled.try_recv().unwrap(), "psa");
    assert!(start.elapsed() >= ms(1000));

    sleep(ms(5000)).await;
    assert!(settled.try_recv().is_err());
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_pending_term() {
    let (mut debouncer, settled) = SearchDebouncer::new(Handle::current(), ms(800));

    debouncer.schedule("btc");
    sleep(ms(400)).await;
    debouncer.cancel();
    sleep(ms(2000)).await;
    assert!(settled.try_recv().is_err());

    // Cancelling again, with nothing pending, is a no-op.
    debouncer.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_separate_pauses_deliver_each_term() {
    let (mut debouncer, settled) = SearchDebouncer::new(Handle::current(), ms(800));

    debouncer.schedule("p");
    sleep(ms(900)).await;
    debouncer.schedule("pk");
    sleep(ms(900)).await;

    let terms: Vec<String> = settled.try_iter().collect();
    assert_eq!(terms, vec!["p", "pk"]);
}

#[tokio::test(start_paused = true)]
async fn test_settled_term_drives_table_state() {
    let dataset = Dataset::sample();
    let mut state = TableState::default();
    let (mut debouncer, settled) = SearchDebouncer::new(Handle::current(), ms(800));

    debouncer.schedule("k");
    sleep(ms(801)).await;

    let term = settled.try_recv().unwrap();
    state.apply_search(term);
    let view = state.view(dataset.rows());
    assert_eq!(view.total_count, 1);
    assert_eq!(view.rows[0].asset_symbol, "PKA");
}
