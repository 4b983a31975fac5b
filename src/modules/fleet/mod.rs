pub mod models;
pub mod repositories;

pub use models::{Car, CarCategory, CarId};
pub use repositories::{InMemoryCarRepository, JsonFileCarRepository};
