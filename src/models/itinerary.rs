use serde::{Deserialize, Serialize};

use super::calendar::CalendarDate;

/// One calendar day of a tour: the default hotel, the rooms held that
/// night, and at most one transport leg.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryDay {
    pub day_number: u32,
    /// Explicit date for the day. When absent it is derived from the tour
    /// start date plus the day offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<CalendarDate>,
    pub hotel_id: String,
    /// Nights the rooms are held for this day's block. Defaults to 1; a
    /// day may represent a multi-night stay block, or zero nights for a
    /// same-day start/end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nights: Option<u32>,
    #[serde(default)]
    pub room_allocations: Vec<RoomAllocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_leg: Option<TransportLeg>,
}

impl ItineraryDay {
    pub fn nights(&self) -> u32 {
        self.nights.unwrap_or(1)
    }
}

/// N rooms of one type/occupancy/meal-plan for a day.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RoomAllocation {
    pub room_type_id: String,
    pub occupancy_type_id: String,
    pub meal_plan_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TransportLeg {
    pub vehicle_type_id: String,
    /// e.g. "point_to_point" or "full_day"
    pub transport_type: String,
    pub location_id: String,
}
