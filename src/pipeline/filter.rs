//! Category and search filters

use crate::types::{CategoryFilter, Row};

/// Keep the rows in `category`, in their original order.
///
/// [`CategoryFilter::All`] returns the input unchanged.
pub fn filter_by_category<'a>(rows: &[&'a Row], category: CategoryFilter) -> Vec<&'a Row> {
    if category == CategoryFilter::All {
        return rows.to_vec();
    }
    rows.iter()
        .copied()
        .filter(|row| category.matches(row.category))
        .collect()
}

/// Whether a search term is the identity filter
pub fn is_blank_term(term: &str) -> bool {
    term.trim().is_empty()
}

/// Keep the rows whose symbol contains `term`, ignoring case.
///
/// A blank term returns the input unchanged. Other terms are matched as typed,
/// surrounding whitespace included.
pub fn filter_by_search<'a>(rows: &[&'a Row], term: &str) -> Vec<&'a Row> {
    if is_blank_term(term) {
        return rows.to_vec();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .copied()
        .filter(|row| row.asset_symbol.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn rows() -> Vec<Row> {
        vec![
            Row::new("SPZ", 1.0, 0.0, 0.0, 0.0, Category::Fiat),
            Row::new("CDS", 2.0, 0.0, 0.0, 0.0, Category::Crypto),
            Row::new("pka", 3.0, 0.0, 0.0, 0.0, Category::Crypto),
            Row::new("MPA", 4.0, 0.0, 0.0, 0.0, Category::Fiat),
        ]
    }

    fn symbols(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r.asset_symbol.clone()).collect()
    }

    #[test]
    fn test_category_all_is_identity() {
        let data = rows();
        let refs: Vec<&Row> = data.iter().collect();
        assert_eq!(filter_by_category(&refs, CategoryFilter::All), refs);
    }

    #[test]
    fn test_category_keeps_order() {
        let data = rows();
        let refs: Vec<&Row> = data.iter().collect();
        assert_eq!(
            symbols(&filter_by_category(&refs, CategoryFilter::Fiat)),
            vec!["SPZ", "MPA"]
        );
        assert_eq!(
            symbols(&filter_by_category(&refs, CategoryFilter::Crypto)),
            vec!["CDS", "pka"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let data = rows();
        let refs: Vec<&Row> = data.iter().collect();
        assert_eq!(symbols(&filter_by_search(&refs, "P")), vec!["SPZ", "pka", "MPA"]);
        assert_eq!(symbols(&filter_by_search(&refs, "Ka")), vec!["pka"]);
    }

    #[test]
    fn test_search_blank_terms_are_identity() {
        let data = rows();
        let refs: Vec<&Row> = data.iter().collect();
        assert_eq!(filter_by_search(&refs, ""), refs);
        assert_eq!(filter_by_search(&refs, "   \t"), refs);
    }

    #[test]
    fn test_search_does_not_trim_terms() {
        let data = rows();
        let refs: Vec<&Row> = data.iter().collect();
        assert!(filter_by_search(&refs, " SPZ").is_empty());
        assert!(filter_by_search(&refs, "XYZ").is_empty());
    }
}
