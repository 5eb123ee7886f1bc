//! Current price models

/// Snapshot of the current price and the change since the previous close
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub current_price: f64,
    pub change_amount: f64,
    pub is_positive: bool,
}

impl Quote {
    /// A zero change counts as positive for styling.
    pub fn new(current_price: f64, change_amount: f64) -> Self {
        Self {
            current_price,
            change_amount,
            is_positive: change_amount >= 0.0,
        }
    }
}
