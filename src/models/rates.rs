use std::fmt;

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::calendar::CalendarDate;

/// A nightly room price valid over a closed date interval, keyed by
/// hotel + room type + occupancy + meal plan.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HotelRate {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub hotel_id: String,
    pub room_type_id: String,
    pub occupancy_type_id: String,
    pub meal_plan_id: String,
    pub valid_from: CalendarDate,
    pub valid_to: CalendarDate,
    pub price: f64,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// A per-leg transport price valid over a closed date interval, keyed by
/// location + vehicle type + transport type (point-to-point, full-day, ...).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransportRate {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub location_id: String,
    pub vehicle_type_id: String,
    pub transport_type: String,
    pub valid_from: CalendarDate,
    pub valid_to: CalendarDate,
    pub price: f64,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// All rate records supplied up front for one quote calculation. The
/// caller is responsible for fetching a superset covering the full tour
/// span; the engine never goes back for more.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RateCatalog {
    #[serde(default)]
    pub hotel_rates: Vec<HotelRate>,
    #[serde(default)]
    pub transport_rates: Vec<TransportRate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelRateKey {
    pub hotel_id: String,
    pub room_type_id: String,
    pub occupancy_type_id: String,
    pub meal_plan_id: String,
}

impl fmt::Display for HotelRateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hotel {} / room {} / occupancy {} / meal plan {}",
            self.hotel_id, self.room_type_id, self.occupancy_type_id, self.meal_plan_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRateKey {
    pub location_id: String,
    pub vehicle_type_id: String,
    pub transport_type: String,
}

impl fmt::Display for TransportRateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "location {} / vehicle {} / {}",
            self.location_id, self.vehicle_type_id, self.transport_type
        )
    }
}

impl HotelRate {
    pub fn matches_key(&self, key: &HotelRateKey) -> bool {
        self.hotel_id == key.hotel_id
            && self.room_type_id == key.room_type_id
            && self.occupancy_type_id == key.occupancy_type_id
            && self.meal_plan_id == key.meal_plan_id
    }
}

impl TransportRate {
    pub fn matches_key(&self, key: &TransportRateKey) -> bool {
        self.location_id == key.location_id
            && self.vehicle_type_id == key.vehicle_type_id
            && self.transport_type == key.transport_type
    }
}

/// Shared view of the dated fields the range resolver works on.
pub trait DatedRecord {
    fn is_active(&self) -> bool;
    fn valid_from(&self) -> CalendarDate;
    fn valid_to(&self) -> CalendarDate;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    /// Stable identity used as the final resolution tie-break.
    fn record_id(&self) -> String;

    fn covers(&self, date: CalendarDate) -> bool {
        self.valid_from() <= date && date <= self.valid_to()
    }

    /// Width of the validity window in days, inclusive of both ends.
    fn span_days(&self) -> i64 {
        self.valid_from().days_until(self.valid_to()) + 1
    }
}

impl DatedRecord for HotelRate {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn valid_from(&self) -> CalendarDate {
        self.valid_from
    }

    fn valid_to(&self) -> CalendarDate {
        self.valid_to
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn record_id(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

impl DatedRecord for TransportRate {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn valid_from(&self) -> CalendarDate {
        self.valid_from
    }

    fn valid_to(&self) -> CalendarDate {
        self.valid_to
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn record_id(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}
