use crate::modules::customers::Customer;
use crate::modules::fleet::Car;
use serde::{Deserialize, Serialize};

/// The rental receipt. Built fresh per rental, never mutated afterwards, and
/// not persisted: the receipt IS the full return value of a rental.
///
/// `amount` is already formatted currency and `due_date` an already rendered
/// calendar date; raw numbers never leave the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub customer: Customer,
    pub car: Car,
    pub amount: String,
    pub due_date: String,
}
