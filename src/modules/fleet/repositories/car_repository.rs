use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::traits::DataProvider;
use crate::modules::fleet::models::{Car, CarId};

/// File-backed car repository. The JSON file is the collection; every call
/// re-reads and re-parses it, so the file may change between calls and no
/// snapshot isolation is implied.
pub struct JsonFileCarRepository {
    path: PathBuf,
}

impl JsonFileCarRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_collection(&self) -> Result<Vec<Car>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let cars = serde_json::from_slice(&bytes)?;
        Ok(cars)
    }
}

#[async_trait]
impl DataProvider<Car, CarId> for JsonFileCarRepository {
    async fn find_all(&self) -> Result<Vec<Car>> {
        self.read_collection().await
    }

    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>> {
        let cars = self.read_collection().await?;
        Ok(cars.into_iter().find(|car| &car.id == id))
    }
}

/// In-memory car repository, interchangeable with the file-backed one.
/// Used as a test fixture and for seeded setups.
pub struct InMemoryCarRepository {
    cars: Vec<Car>,
}

impl InMemoryCarRepository {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }
}

#[async_trait]
impl DataProvider<Car, CarId> for InMemoryCarRepository {
    async fn find_all(&self) -> Result<Vec<Car>> {
        Ok(self.cars.clone())
    }

    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>> {
        Ok(self.cars.iter().find(|car| &car.id == id).cloned())
    }
}
