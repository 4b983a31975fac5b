pub mod repository;

pub use repository::DataProvider;
