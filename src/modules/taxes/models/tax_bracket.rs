use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One age bracket of the rental tax table: customers aged within
/// `[from, to]` (inclusive) pay `then` times the base amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub from: u32,
    pub to: u32,
    pub then: Decimal,
}

impl TaxBracket {
    pub fn new(from: u32, to: u32, then: Decimal) -> Self {
        Self { from, to, then }
    }

    /// Inclusive on both bounds.
    pub fn matches(&self, age: u32) -> bool {
        (self.from..=self.to).contains(&age)
    }
}
