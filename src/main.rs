use std::sync::Arc;

use actix_web::{error::InternalError, web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rentora::config::Config;
use rentora::core::{SystemClock, UniformIndexChooser};
use rentora::fleet::JsonFileCarRepository;
use rentora::rentals::controllers::rental_controller;
use rentora::rentals::RentalService;
use rentora::taxes::TaxCalculator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentora=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Rentora Car Rental Quoting Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Cars collection: {}", config.store.cars_path.display());
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Wire the rental service: file-backed cars collection, stock tax table,
    // uniform random selection, wall-clock due dates.
    let car_repository = Arc::new(JsonFileCarRepository::new(config.store.cars_path.clone()));
    let rental_service = Arc::new(RentalService::new(
        car_repository,
        TaxCalculator::default(),
        Arc::new(UniformIndexChooser),
        Arc::new(SystemClock),
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(rental_service.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                InternalError::from_response(err, HttpResponse::BadRequest().body("Invalid params"))
                    .into()
            }))
            .configure(rental_controller::configure)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rentora"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Hello There",
    }))
}
