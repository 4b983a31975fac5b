use serde::{Deserialize, Serialize};

pub type CarId = String;

/// A car record as stored in the cars collection.
///
/// `available` flags rentability but the store does not enforce it; selection
/// currently does not filter on it either (matching the original data source).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub name: String,
    pub release_year: i32,
    pub available: bool,
    pub gas_available: bool,
}
