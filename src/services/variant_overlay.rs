use std::collections::HashMap;

use crate::models::itinerary::{ItineraryDay, RoomAllocation};

/// Applies a selected package variant's per-day substitutions on top of
/// the itinerary defaults. With no variant selected every lookup returns
/// the default, so the same itinerary serves every sales configuration.
pub struct VariantOverlay<'a> {
    variant_id: Option<&'a str>,
    hotel_mappings: &'a HashMap<u32, String>,
    room_allocations: &'a HashMap<u32, Vec<RoomAllocation>>,
}

impl<'a> VariantOverlay<'a> {
    pub fn new(
        variant_id: Option<&'a str>,
        hotel_mappings: &'a HashMap<u32, String>,
        room_allocations: &'a HashMap<u32, Vec<RoomAllocation>>,
    ) -> Self {
        Self {
            variant_id,
            hotel_mappings,
            room_allocations,
        }
    }

    /// Effective hotel for a day: the variant's mapping when one exists,
    /// otherwise the itinerary default. A variant need not override every
    /// day.
    pub fn hotel_for_day(&self, day: &'a ItineraryDay) -> &'a str {
        if self.variant_id.is_none() {
            return &day.hotel_id;
        }
        match self.hotel_mappings.get(&day.day_number) {
            Some(hotel_id) => hotel_id,
            None => &day.hotel_id,
        }
    }

    /// Effective room allocations for a day. A variant-scoped list fully
    /// replaces the day's defaults rather than merging with them, so rooms
    /// are never double-counted.
    pub fn allocations_for_day(&self, day: &'a ItineraryDay) -> &'a [RoomAllocation] {
        if self.variant_id.is_none() {
            return &day.room_allocations;
        }
        match self.room_allocations.get(&day.day_number) {
            Some(allocations) => allocations,
            None => &day.room_allocations,
        }
    }
}
