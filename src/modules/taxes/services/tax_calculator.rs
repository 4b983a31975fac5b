use crate::modules::taxes::models::TaxBracket;
use rust_decimal::Decimal;

/// Age-based tax lookup over an ordered bracket table.
///
/// The table is injected at construction rather than read from a module-level
/// constant, so tests and deployments can swap brackets without code edits.
pub struct TaxCalculator {
    brackets: Vec<TaxBracket>,
}

impl TaxCalculator {
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    /// First bracket containing `age` wins; no match means no tax (×1).
    pub fn multiplier_for_age(&self, age: u32) -> Decimal {
        self.brackets
            .iter()
            .find(|bracket| bracket.matches(age))
            .map(|bracket| bracket.then)
            .unwrap_or(Decimal::ONE)
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl Default for TaxCalculator {
    /// The stock rental tax table.
    fn default() -> Self {
        Self::new(vec![
            TaxBracket::new(18, 25, Decimal::new(11, 1)),
            TaxBracket::new(26, 30, Decimal::new(15, 1)),
            TaxBracket::new(31, 100, Decimal::new(13, 1)),
        ])
    }
}
