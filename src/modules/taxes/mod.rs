pub mod models;
pub mod services;

pub use models::TaxBracket;
pub use services::TaxCalculator;
