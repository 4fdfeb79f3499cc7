//! Input checks applied where the user types values in, before anything
//! reaches storage. Storage itself accepts whatever it is given.

pub const MIN_STRATEGY_TITLE_CHARS: usize = 3;
pub const MIN_STRATEGY_DESCRIPTION_CHARS: usize = 10;
pub const MIN_QUANTITY: f64 = 0.000001;
pub const MIN_PURCHASE_PRICE: f64 = 0.01;

pub fn validate_strategy_form(title: &str, description: &str) -> Result<(), String> {
    if title.trim().chars().count() < MIN_STRATEGY_TITLE_CHARS {
        return Err(format!(
            "Title must be at least {MIN_STRATEGY_TITLE_CHARS} characters."
        ));
    }
    if description.trim().chars().count() < MIN_STRATEGY_DESCRIPTION_CHARS {
        return Err(format!(
            "Description must be at least {MIN_STRATEGY_DESCRIPTION_CHARS} characters."
        ));
    }
    Ok(())
}

pub fn validate_position_form(quantity: f64, purchase_price: f64) -> Result<(), String> {
    if !quantity.is_finite() || quantity < MIN_QUANTITY {
        return Err("Quantity must be positive.".to_string());
    }
    if !purchase_price.is_finite() || purchase_price < MIN_PURCHASE_PRICE {
        return Err("Price must be positive.".to_string());
    }
    Ok(())
}
