//! Page slicing

/// The rows of page `page_index` when `page_size` rows fit on a page.
///
/// Returns an empty slice when the page starts past the end. Never panics,
/// including for offsets that would overflow.
pub fn paginate<T>(rows: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}
