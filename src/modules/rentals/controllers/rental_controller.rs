use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::rentals::services::{RentRequest, RentalService};

/// Quote a rental and return the transaction receipt
/// POST /rent
pub async fn rent(
    service: web::Data<Arc<RentalService>>,
    params: web::Json<RentRequest>,
) -> Result<HttpResponse, AppError> {
    let receipt = service.rent(params.into_inner()).await?;

    Ok(HttpResponse::Ok().json(receipt))
}

/// Configure rental routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/rent", web::post().to(rent));
}
