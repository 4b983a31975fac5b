use super::car::CarId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable car category: the candidate car ids plus the per-day price.
/// `car_ids` is ordered; selection picks a random index, not a set member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCategory {
    pub id: String,
    pub name: String,
    pub car_ids: Vec<CarId>,
    pub price: Decimal,
}
