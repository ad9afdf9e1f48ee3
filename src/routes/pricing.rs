use actix_web::{web, HttpResponse, Responder};

use crate::errors::QuoteError;
use crate::models::quote::QuoteRequest;
use crate::services::pricing_service::PricingService;

/// Fallback markup percent for requests that don't carry one.
fn default_markup() -> Option<f64> {
    std::env::var("DEFAULT_MARKUP_PERCENT")
        .ok()
        .and_then(|s| s.parse().ok())
}

/*
    POST /api/pricing/quote
*/
pub async fn quote(input: web::Json<QuoteRequest>) -> impl Responder {
    let mut request = input.into_inner();
    if request.markup.is_none() {
        request.markup = default_markup();
    }

    match PricingService::calculate(&request) {
        Ok(result) => {
            if !result.ambiguous_rates.is_empty() {
                eprintln!(
                    "Quote resolved with {} overlapping rate window(s); catalog needs review",
                    result.ambiguous_rates.len()
                );
            }
            HttpResponse::Ok().json(result)
        }
        // Missing rates are a catalog gap, not a malformed request. The
        // body carries the key and date so the operator can add the rate.
        Err(err @ QuoteError::RateNotFound { .. }) => {
            eprintln!("Quote failed: {}", err);
            HttpResponse::UnprocessableEntity().body(err.to_string())
        }
        Err(err) => {
            eprintln!("Rejected quote request: {}", err);
            HttpResponse::BadRequest().body(err.to_string())
        }
    }
}
