//! Rentora Car Rental Quoting Service Library
//!
//! This library provides the core functionality for the Rentora car-rental
//! quoting system: car selection, age-based pricing and receipt construction.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::customers;
pub use modules::fleet;
pub use modules::rentals;
pub use modules::taxes;
