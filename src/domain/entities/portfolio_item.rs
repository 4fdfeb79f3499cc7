use serde::{Deserialize, Serialize};

/// One holding. `purchase_price` is the quantity-weighted average cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub symbol: String,
    pub quantity: f64,
    pub purchase_price: f64,
}

impl PortfolioItem {
    pub fn new(symbol: String, quantity: f64, purchase_price: f64) -> Self {
        Self {
            symbol,
            quantity,
            purchase_price,
        }
    }

    /// Folds another lot of the same symbol into this position.
    pub fn merge(&mut self, quantity: f64, purchase_price: f64) {
        let total_quantity = self.quantity + quantity;
        let total_cost = self.quantity * self.purchase_price + quantity * purchase_price;
        self.quantity = total_quantity;
        // a lot that exactly cancels the position leaves no cost basis
        self.purchase_price = if total_quantity == 0.0 {
            0.0
        } else {
            total_cost / total_quantity
        };
    }

    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.purchase_price
    }
}
