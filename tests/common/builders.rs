//! Test data builders for creating test rows

use market_table::{Category, Row};

/// Builder for creating test Rows
pub struct RowBuilder {
    symbol: String,
    price: f64,
    change_percent: f64,
    volume_24h: f64,
    market_cap: f64,
    category: Category,
}

impl RowBuilder {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            price: 100.0,
            change_percent: 0.0,
            volume_24h: 10.0,
            market_cap: 1000.0,
            category: Category::Crypto,
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn change(mut self, change_percent: f64) -> Self {
        self.change_percent = change_percent;
        self
    }

    pub fn volume(mut self, volume_24h: f64) -> Self {
        self.volume_24h = volume_24h;
        self
    }

    pub fn fiat(mut self) -> Self {
        self.category = Category::Fiat;
        self
    }

    pub fn build(self) -> Row {
        Row::new(
            self.symbol,
            self.price,
            self.change_percent,
            self.volume_24h,
            self.market_cap,
            self.category,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_builder() {
        let row = RowBuilder::new("ABC").price(5.0).fiat().build();

        assert_eq!(row.asset_symbol, "ABC");
        assert_eq!(row.price, 5.0);
        assert_eq!(row.category, Category::Fiat);
    }
}
