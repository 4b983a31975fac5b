pub mod customers;
pub mod fleet;
pub mod rentals;
pub mod taxes;
