use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Client};
use std::sync::Arc;

use crate::models::calendar::CalendarDate;
use crate::models::rates::{HotelRate, TransportRate};

#[derive(serde::Deserialize)]
pub struct HotelRateQuery {
    hotel_id: String,
    room_type_id: Option<String>,
    occupancy_type_id: Option<String>,
    meal_plan_id: Option<String>,
    from: Option<String>,
    to: Option<String>,
    limit: Option<u16>,
}

#[derive(serde::Deserialize)]
pub struct TransportRateQuery {
    location_id: String,
    vehicle_type_id: Option<String>,
    transport_type: Option<String>,
    from: Option<String>,
    to: Option<String>,
    limit: Option<u16>,
}

// Dates are stored as "YYYY-MM-DD" strings, so lexicographic comparison in
// the filter is also chronological.
fn window_filter(
    filter: &mut mongodb::bson::Document,
    from: &Option<String>,
    to: &Option<String>,
) -> Result<(), HttpResponse> {
    if let Some(from) = from {
        let from = CalendarDate::parse(from)
            .map_err(|e| HttpResponse::BadRequest().body(e.to_string()))?;
        filter.insert("valid_to", doc! { "$gte": from.to_string() });
    }
    if let Some(to) = to {
        let to =
            CalendarDate::parse(to).map_err(|e| HttpResponse::BadRequest().body(e.to_string()))?;
        filter.insert("valid_from", doc! { "$lte": to.to_string() });
    }
    Ok(())
}

/*
    /api/rates/hotel?hotel_id=...&from=...&to=...
*/
pub async fn get_hotel_rates(
    data: web::Data<Arc<Client>>,
    params: web::Query<HotelRateQuery>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<HotelRate> =
        client.database("Catalog").collection("HotelRates");

    let mut filter = doc! { "hotel_id": &params.hotel_id, "is_active": true };
    if let Some(room_type_id) = &params.room_type_id {
        filter.insert("room_type_id", room_type_id);
    }
    if let Some(occupancy_type_id) = &params.occupancy_type_id {
        filter.insert("occupancy_type_id", occupancy_type_id);
    }
    if let Some(meal_plan_id) = &params.meal_plan_id {
        filter.insert("meal_plan_id", meal_plan_id);
    }
    if let Err(response) = window_filter(&mut filter, &params.from, &params.to) {
        return response;
    }

    let mut options = FindOptions::default();
    options.sort = Some(doc! { "created_at": -1 });
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }

    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<HotelRate>>().await {
            Ok(rates) => HttpResponse::Ok().json(rates),
            Err(err) => {
                eprintln!("Failed to collect hotel rates: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect hotel rates.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find hotel rates: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find hotel rates.")
        }
    }
}

/*
    /api/rates/transport?location_id=...&from=...&to=...
*/
pub async fn get_transport_rates(
    data: web::Data<Arc<Client>>,
    params: web::Query<TransportRateQuery>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<TransportRate> =
        client.database("Catalog").collection("TransportRates");

    let mut filter = doc! { "location_id": &params.location_id, "is_active": true };
    if let Some(vehicle_type_id) = &params.vehicle_type_id {
        filter.insert("vehicle_type_id", vehicle_type_id);
    }
    if let Some(transport_type) = &params.transport_type {
        filter.insert("transport_type", transport_type);
    }
    if let Err(response) = window_filter(&mut filter, &params.from, &params.to) {
        return response;
    }

    let mut options = FindOptions::default();
    options.sort = Some(doc! { "created_at": -1 });
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }

    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<TransportRate>>().await {
            Ok(rates) => HttpResponse::Ok().json(rates),
            Err(err) => {
                eprintln!("Failed to collect transport rates: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect transport rates.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find transport rates: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find transport rates.")
        }
    }
}
