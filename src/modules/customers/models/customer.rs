use serde::{Deserialize, Serialize};

/// A customer record, immutable once loaded. `age` drives the tax-bracket
/// lookup during pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub age: u32,
}
