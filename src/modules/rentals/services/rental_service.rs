use std::sync::Arc;

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::clock::Clock;
use crate::core::currency;
use crate::core::error::{AppError, Result};
use crate::core::random::IndexChooser;
use crate::core::traits::DataProvider;
use crate::modules::customers::Customer;
use crate::modules::fleet::models::{Car, CarCategory, CarId};
use crate::modules::rentals::models::Transaction;
use crate::modules::taxes::TaxCalculator;

/// Parameters of one rental request. Customer and category arrive already
/// resolved; only the cars collection is looked up by id inside the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentRequest {
    pub customer: Customer,
    pub car_category: CarCategory,
    pub number_of_days: i64,
}

/// Orchestrates car selection, price computation and receipt construction.
pub struct RentalService {
    car_repository: Arc<dyn DataProvider<Car, CarId>>,
    tax_calculator: TaxCalculator,
    index_chooser: Arc<dyn IndexChooser>,
    clock: Arc<dyn Clock>,
}

impl RentalService {
    pub fn new(
        car_repository: Arc<dyn DataProvider<Car, CarId>>,
        tax_calculator: TaxCalculator,
        index_chooser: Arc<dyn IndexChooser>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            car_repository,
            tax_calculator,
            index_chooser,
            clock,
        }
    }

    /// Picks a uniformly random candidate id from the category.
    ///
    /// An empty `car_ids` never reaches the index chooser: it is an invalid
    /// category, reported as such.
    pub fn choose_random_car(&self, category: &CarCategory) -> Result<CarId> {
        if category.car_ids.is_empty() {
            return Err(AppError::invalid_category(format!(
                "category {} has no candidate cars",
                category.id
            )));
        }

        let index = self.index_chooser.choose(category.car_ids.len());
        Ok(category.car_ids[index].clone())
    }

    /// Resolves the chosen candidate id to a full car record.
    ///
    /// A category referencing an id absent from the store is inconsistent
    /// data; that surfaces as a not-found error instead of being swallowed.
    pub async fn get_available_car(&self, category: &CarCategory) -> Result<Car> {
        let car_id = self.choose_random_car(category)?;

        self.car_repository
            .find_by_id(&car_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "category {} references unknown car {}",
                    category.id, car_id
                ))
            })
    }

    /// base = price × days, then the customer's age bracket multiplier,
    /// formatted as BRL. Pure for fixed inputs.
    pub fn calculate_final_price(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: i64,
    ) -> Result<String> {
        validate_number_of_days(number_of_days)?;

        let base_amount = category.price * Decimal::from(number_of_days);
        let multiplier = self.tax_calculator.multiplier_for_age(customer.age);

        Ok(currency::format_amount(base_amount * multiplier))
    }

    /// Runs the full rental: resolve a car, price it, compute the due date,
    /// build the receipt. Any failure aborts the whole call; there is no
    /// partial receipt.
    pub async fn rent(&self, request: RentRequest) -> Result<Transaction> {
        let RentRequest {
            customer,
            car_category,
            number_of_days,
        } = request;

        validate_number_of_days(number_of_days)?;

        let car = self.get_available_car(&car_category).await?;
        let amount = self.calculate_final_price(&customer, &car_category, number_of_days)?;

        let due_date = self.clock.now().date_naive() + Duration::days(number_of_days);
        let due_date = currency::format_due_date(due_date);

        tracing::debug!(
            customer = %customer.id,
            car = %car.id,
            %amount,
            %due_date,
            "rental quoted"
        );

        Ok(Transaction {
            customer,
            car,
            amount,
            due_date,
        })
    }
}

fn validate_number_of_days(number_of_days: i64) -> Result<()> {
    if number_of_days <= 0 {
        return Err(AppError::validation(
            "numberOfDays must be a positive integer",
        ));
    }
    Ok(())
}
