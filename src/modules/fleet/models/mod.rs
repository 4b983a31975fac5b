pub mod car;
pub mod car_category;

pub use car::{Car, CarId};
pub use car_category::CarCategory;
