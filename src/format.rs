//! Cell and label formatting for table renderers
//!
//! Pure string formatting shared by every host. Numbers use Rust's shortest
//! round-trip `Display`, so `25.0` renders as `25` and `23418.23` as `23418.23`.

use serde::{Deserialize, Serialize};

use crate::types::{Row, SortDirection};

/// How the change column shows its sign
///
/// `AlwaysPlus` prefixes every value with `+` and reports a positive tone even for
/// negative changes. `Signed` uses the real sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeSignStyle {
    #[default]
    AlwaysPlus,
    Signed,
}

/// Colour hint for the change column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCell {
    pub text: String,
    pub tone: ChangeTone,
}

/// A row rendered to display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRow {
    /// Avatar letter
    pub initial: String,
    pub symbol: String,
    pub price: String,
    pub change: ChangeCell,
    pub volume: String,
    pub market_cap: String,
}

pub fn format_price(price: f64) -> String {
    format!("$ {}", price)
}

/// Volume and market cap are stored in millions
pub fn format_millions(value: f64) -> String {
    format!("{} M", value)
}

pub fn format_change(change: f64, style: ChangeSignStyle) -> ChangeCell {
    match style {
        ChangeSignStyle::AlwaysPlus => ChangeCell {
            text: format!("+{}", change),
            tone: ChangeTone::Positive,
        },
        ChangeSignStyle::Signed => {
            if change > 0.0 {
                ChangeCell {
                    text: format!("+{}", change),
                    tone: ChangeTone::Positive,
                }
            } else if change < 0.0 {
                ChangeCell {
                    text: change.to_string(),
                    tone: ChangeTone::Negative,
                }
            } else {
                ChangeCell {
                    text: "0".to_string(),
                    tone: ChangeTone::Neutral,
                }
            }
        }
    }
}

/// First character of the symbol, or an empty string for an empty symbol
pub fn avatar_initial(symbol: &str) -> String {
    symbol.chars().next().map(String::from).unwrap_or_default()
}

pub fn format_row(row: &Row, style: ChangeSignStyle) -> FormattedRow {
    FormattedRow {
        initial: avatar_initial(&row.asset_symbol),
        symbol: row.asset_symbol.clone(),
        price: format_price(row.price),
        change: format_change(row.change_percent, style),
        volume: format_millions(row.volume_24h),
        market_cap: format_millions(row.market_cap),
    }
}

/// Pagination range, e.g. `6–10 of 13`
///
/// A page that shows no rows (empty result, or past the end) renders as
/// `0–0 of {count}`.
pub fn range_label(page_index: usize, page_size: usize, total_count: usize) -> String {
    let start = page_index.saturating_mul(page_size);
    if start >= total_count || page_size == 0 {
        return format!("0–0 of {}", total_count);
    }
    let to = start.saturating_add(page_size).min(total_count);
    format!("{}–{} of {}", start + 1, to, total_count)
}

pub fn sort_glyph(direction: SortDirection) -> char {
    match direction {
        SortDirection::Ascending => '▲',
        SortDirection::Descending => '▼',
    }
}

/// Screen-reader phrase for the active sort column
pub fn sort_phrase(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "sorted ascending",
        SortDirection::Descending => "sorted descending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_cells_match_widget_rendering() {
        let row = Row::new("CDS", 412.0, 25.0, 510.0, 4867.9, Category::Crypto);
        let cells = format_row(&row, ChangeSignStyle::AlwaysPlus);
        assert_eq!(cells.initial, "C");
        assert_eq!(cells.price, "$ 412");
        assert_eq!(cells.change.text, "+25");
        assert_eq!(cells.volume, "510 M");
        assert_eq!(cells.market_cap, "4867.9 M");
        assert_eq!(format_price(23418.23), "$ 23418.23");
    }

    #[test]
    fn test_always_plus_keeps_reference_behavior_for_negatives() {
        let cell = format_change(-1.5, ChangeSignStyle::AlwaysPlus);
        assert_eq!(cell.text, "+-1.5");
        assert_eq!(cell.tone, ChangeTone::Positive);
    }

    #[test]
    fn test_signed_style() {
        assert_eq!(
            format_change(3.7, ChangeSignStyle::Signed),
            ChangeCell {
                text: "+3.7".to_string(),
                tone: ChangeTone::Positive
            }
        );
        assert_eq!(
            format_change(-1.5, ChangeSignStyle::Signed),
            ChangeCell {
                text: "-1.5".to_string(),
                tone: ChangeTone::Negative
            }
        );
        assert_eq!(format_change(0.0, ChangeSignStyle::Signed).tone, ChangeTone::Neutral);
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(0, 5, 13), "1–5 of 13");
        assert_eq!(range_label(2, 5, 13), "11–13 of 13");
        assert_eq!(range_label(0, 5, 0), "0–0 of 0");
        assert_eq!(range_label(0, 25, 7), "1–7 of 7");
        assert_eq!(range_label(4, 5, 13), "0–0 of 13");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_glyph(SortDirection::Ascending), '▲');
        assert_eq!(sort_phrase(SortDirection::Descending), "sorted descending");
    }

    #[test]
    fn test_avatar_initial_empty_symbol() {
        assert_eq!(avatar_initial(""), "");
    }
}
