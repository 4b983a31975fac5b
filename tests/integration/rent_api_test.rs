// HTTP surface tests for POST /rent: a valid request returns the receipt,
// malformed params are rejected with 400 before reaching the service.

use std::sync::Arc;

use actix_web::{error::InternalError, http::StatusCode, test, web, App, HttpResponse};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use rentora::core::clock::FixedClock;
use rentora::core::random::FixedIndexChooser;
use rentora::customers::Customer;
use rentora::fleet::{Car, CarCategory, InMemoryCarRepository};
use rentora::rentals::controllers::rental_controller;
use rentora::rentals::{RentRequest, RentalService, Transaction};
use rentora::taxes::TaxCalculator;

fn fixture_car() -> Car {
    Car {
        id: "car-1".to_string(),
        name: "Fiat Uno".to_string(),
        release_year: 2019,
        available: true,
        gas_available: true,
    }
}

fn fixture_customer() -> Customer {
    Customer {
        id: "cust-1".to_string(),
        name: "Alex Souza".to_string(),
        age: 50,
    }
}

fn fixture_category(car_ids: Vec<String>) -> CarCategory {
    CarCategory {
        id: "cat-1".to_string(),
        name: "Compact".to_string(),
        car_ids,
        price: dec!(37.6),
    }
}

fn quoting_service() -> Arc<RentalService> {
    Arc::new(RentalService::new(
        Arc::new(InMemoryCarRepository::new(vec![fixture_car()])),
        TaxCalculator::default(),
        Arc::new(FixedIndexChooser(0)),
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2022, 4, 5, 12, 0, 0).unwrap(),
        )),
    ))
}

macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(quoting_service()))
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    InternalError::from_response(
                        err,
                        HttpResponse::BadRequest().body("Invalid params"),
                    )
                    .into()
                }))
                .configure(rental_controller::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn rent_returns_200_and_the_transaction_receipt() {
    let app = spawn_app!();

    let request = RentRequest {
        customer: fixture_customer(),
        car_category: fixture_category(vec![fixture_car().id]),
        number_of_days: 5,
    };

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/rent")
            .set_json(&request)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let receipt: Transaction = test::read_body_json(response).await;
    assert_eq!(receipt.customer, fixture_customer());
    assert_eq!(receipt.car, fixture_car());
    assert_eq!(receipt.amount, "R$ 244,40");
    assert_eq!(receipt.due_date, "10 de abril de 2022");
}

#[actix_web::test]
async fn rent_with_missing_params_returns_400() {
    let app = spawn_app!();

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/rent")
            .set_json(serde_json::json!({}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = test::read_body(response).await;
    assert_eq!(body, "Invalid params");
}

#[actix_web::test]
async fn rent_with_zero_days_returns_400() {
    let app = spawn_app!();

    let request = RentRequest {
        customer: fixture_customer(),
        car_category: fixture_category(vec![fixture_car().id]),
        number_of_days: 0,
    };

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/rent")
            .set_json(&request)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn rent_against_empty_category_returns_422() {
    let app = spawn_app!();

    let request = RentRequest {
        customer: fixture_customer(),
        car_category: fixture_category(vec![]),
        number_of_days: 5,
    };

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/rent")
            .set_json(&request)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
