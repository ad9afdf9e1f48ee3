use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An alternate sales configuration of the same itinerary (e.g. Standard
/// vs. Luxury), expressed as selective per-day overrides rather than a
/// duplicated itinerary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PackageVariant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub package_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Substitutes one itinerary day's default hotel when the variant is
/// selected. Days without a mapping keep the itinerary default.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VariantHotelMapping {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub variant_id: String,
    pub day_number: u32,
    pub hotel_id: String,
    pub created_at: Option<DateTime<Utc>>,
}
