use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use serde_json::{json, Value};

use tourdesk_api::routes;

/// The pricing surface under test. Quote calculations are pure, so no
/// database client is wired in here.
pub fn create_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        )
        .wrap(Logger::default())
        .route("/health", web::get().to(|| async { "OK" }))
        .service(
            web::scope("/api").service(
                web::scope("/pricing").route("/quote", web::post().to(routes::pricing::quote)),
            ),
        )
}

pub fn hotel_rate(
    hotel_id: &str,
    from: &str,
    to: &str,
    price: f64,
    created_at: &str,
) -> Value {
    json!({
        "hotel_id": hotel_id,
        "room_type_id": "deluxe",
        "occupancy_type_id": "double",
        "meal_plan_id": "map",
        "valid_from": from,
        "valid_to": to,
        "price": price,
        "is_active": true,
        "created_at": created_at,
    })
}

pub fn transport_rate(location_id: &str, from: &str, to: &str, price: f64) -> Value {
    json!({
        "location_id": location_id,
        "vehicle_type_id": "tempo",
        "transport_type": "full_day",
        "valid_from": from,
        "valid_to": to,
        "price": price,
        "is_active": true,
    })
}

pub fn room_allocation(quantity: u32) -> Value {
    json!({
        "room_type_id": "deluxe",
        "occupancy_type_id": "double",
        "meal_plan_id": "map",
        "quantity": quantity,
    })
}

/// One-day, one-allocation quote: 2 nights at 5000/night, 10% markup.
pub fn two_night_quote_payload() -> Value {
    json!({
        "tour_starts_from": "2025-06-15",
        "itineraries": [{
            "day_number": 1,
            "hotel_id": "grand-palms",
            "nights": 2,
            "room_allocations": [room_allocation(1)],
        }],
        "rate_catalog": {
            "hotel_rates": [
                hotel_rate("grand-palms", "2025-06-01", "2025-06-30", 5000.0, "2025-01-01T00:00:00Z"),
            ],
            "transport_rates": [],
        },
        "markup": 10.0,
    })
}
