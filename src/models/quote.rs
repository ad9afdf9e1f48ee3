use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use super::calendar::CalendarDate;
use super::itinerary::{ItineraryDay, RoomAllocation};
use super::rates::RateCatalog;
use crate::errors::QuoteError;

/// Everything one quote calculation needs, supplied up front by the
/// caller. The engine performs no I/O of its own.
#[serde_as]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QuoteRequest {
    pub tour_starts_from: CalendarDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_ends_on: Option<CalendarDate>,
    pub itineraries: Vec<ItineraryDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// Per-day room allocations for the selected variant. A day present
    /// here fully replaces that day's default allocations; it is never
    /// merged with them.
    #[serde_as(as = "HashMap<DisplayFromStr, _>")]
    #[serde(default)]
    pub variant_room_allocations: HashMap<u32, Vec<RoomAllocation>>,
    /// Per-day hotel overrides for the selected variant.
    #[serde_as(as = "HashMap<DisplayFromStr, _>")]
    #[serde(default)]
    pub variant_hotel_mappings: HashMap<u32, String>,
    pub rate_catalog: RateCatalog,
    /// Markup percent applied on top of the base price. Defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<f64>,
}

impl QuoteRequest {
    /// Boundary validation: reject payloads the calculation could only
    /// misprice. Date parsing has already happened during deserialization.
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.itineraries.is_empty() {
            return Err(QuoteError::InvalidInput(
                "itinerary has no days".to_string(),
            ));
        }

        if let Some(ends_on) = self.tour_ends_on {
            if ends_on < self.tour_starts_from {
                return Err(QuoteError::InvalidInput(format!(
                    "tour ends {} before it starts {}",
                    ends_on, self.tour_starts_from
                )));
            }
        }

        if let Some(markup) = self.markup {
            if !markup.is_finite() || markup < 0.0 {
                return Err(QuoteError::InvalidInput(format!(
                    "markup percent must be a non-negative number, got {}",
                    markup
                )));
            }
        }

        let mut seen_days = HashSet::new();
        for day in &self.itineraries {
            if day.day_number == 0 {
                return Err(QuoteError::InvalidInput(
                    "day numbers start at 1".to_string(),
                ));
            }
            if !seen_days.insert(day.day_number) {
                return Err(QuoteError::InvalidInput(format!(
                    "duplicate itinerary day {}",
                    day.day_number
                )));
            }
            for allocation in &day.room_allocations {
                if allocation.quantity == 0 {
                    return Err(QuoteError::InvalidInput(format!(
                        "day {} has a room allocation with quantity 0",
                        day.day_number
                    )));
                }
            }
        }

        for (day_number, allocations) in &self.variant_room_allocations {
            for allocation in allocations {
                if allocation.quantity == 0 {
                    return Err(QuoteError::InvalidInput(format!(
                        "variant allocation for day {} has quantity 0",
                        day_number
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Cost lines for one itinerary day.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayCost {
    pub day_number: u32,
    pub hotel_cost: f64,
    pub transport_cost: f64,
}

/// A key/date pair where more than one active rate covered the date and
/// the tie-break had to decide. Not fatal, but worth a catalog review.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RateAmbiguity {
    pub key: String,
    pub date: CalendarDate,
}

/// The itemized quotation. Built by the engine, never persisted by it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PricingResult {
    pub per_day: Vec<DayCost>,
    pub base_price: f64,
    pub applied_markup: f64,
    pub total_cost: f64,
    /// Data-quality warnings for the calling layer to surface; an empty
    /// list means every rate resolved uniquely.
    pub ambiguous_rates: Vec<RateAmbiguity>,
}
