use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Backing-store configuration. The store is file based: one JSON file per
/// collection, the file playing the role of a database table.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the cars collection file
    pub cars_path: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Ok(StoreConfig {
            cars_path: env::var("CARS_DATABASE_PATH")
                .unwrap_or_else(|_| "database/cars.json".to_string())
                .into(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.cars_path.as_os_str().is_empty() {
            return Err(AppError::Configuration(
                "CARS_DATABASE_PATH must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
