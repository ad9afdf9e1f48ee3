use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::models::variant::{PackageVariant, VariantHotelMapping};

#[derive(serde::Deserialize)]
pub struct VariantQuery {
    package_id: String,
}

/*
    /api/variants?package_id=...
*/
pub async fn get_variants(
    data: web::Data<Arc<Client>>,
    params: web::Query<VariantQuery>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<PackageVariant> =
        client.database("Catalog").collection("Variants");

    let filter = doc! { "package_id": &params.package_id };

    match collection.find(filter).await {
        Ok(cursor) => match cursor.try_collect::<Vec<PackageVariant>>().await {
            Ok(variants) => HttpResponse::Ok().json(variants),
            Err(err) => {
                eprintln!("Failed to collect variants: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect variants.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find variants: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find variants.")
        }
    }
}

/*
    /api/variants/{variant_id}/hotel-mappings
*/
pub async fn get_hotel_mappings(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<VariantHotelMapping> =
        client.database("Catalog").collection("VariantHotelMappings");

    let variant_id = path.into_inner();
    let filter = doc! { "variant_id": &variant_id };

    match collection.find(filter).sort(doc! { "day_number": 1 }).await {
        Ok(cursor) => match cursor.try_collect::<Vec<VariantHotelMapping>>().await {
            Ok(mappings) => HttpResponse::Ok().json(mappings),
            Err(err) => {
                eprintln!("Failed to collect hotel mappings: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect hotel mappings.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find hotel mappings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find hotel mappings.")
        }
    }
}
