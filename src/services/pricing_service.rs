use crate::errors::QuoteError;
use crate::models::calendar::CalendarDate;
use crate::models::itinerary::{ItineraryDay, RoomAllocation, TransportLeg};
use crate::models::quote::{DayCost, PricingResult, QuoteRequest, RateAmbiguity};
use crate::models::rates::{HotelRateKey, RateCatalog, TransportRateKey};
use crate::services::rate_resolver::RateResolver;
use crate::services::variant_overlay::VariantOverlay;

pub struct PricingService;

impl PricingService {
    /// Turn one quote request into an itemized price.
    ///
    /// Pure and synchronous: the result depends on nothing but the
    /// request, so repeated calls with the same input produce identical
    /// output. Any unresolvable day aborts the whole quote; a partial
    /// total is worse than no total for a customer-facing figure.
    pub fn calculate(request: &QuoteRequest) -> Result<PricingResult, QuoteError> {
        request.validate()?;

        let overlay = VariantOverlay::new(
            request.variant_id.as_deref(),
            &request.variant_hotel_mappings,
            &request.variant_room_allocations,
        );

        let mut days: Vec<&ItineraryDay> = request.itineraries.iter().collect();
        days.sort_by_key(|day| day.day_number);

        let mut per_day = Vec::with_capacity(days.len());
        let mut ambiguities: Vec<RateAmbiguity> = Vec::new();

        for day in days {
            let date = Self::day_date(request.tour_starts_from, day)?;
            let hotel_id = overlay.hotel_for_day(day);
            let nights = day.nights();

            let mut hotel_cost = 0.0;
            // A zero-night block cannot contribute hotel cost, so its
            // rooms are not resolved against the catalog at all.
            if nights > 0 {
                for allocation in overlay.allocations_for_day(day) {
                    hotel_cost += Self::price_room_allocation(
                        date,
                        allocation,
                        hotel_id,
                        nights,
                        &request.rate_catalog,
                        &mut ambiguities,
                    )?;
                }
            }

            let transport_cost = match &day.transport_leg {
                Some(leg) => {
                    Self::price_transport_leg(date, leg, &request.rate_catalog, &mut ambiguities)?
                }
                None => 0.0,
            };

            per_day.push(DayCost {
                day_number: day.day_number,
                hotel_cost,
                transport_cost,
            });
        }

        let base_price: f64 = per_day
            .iter()
            .map(|line| line.hotel_cost + line.transport_cost)
            .sum();
        let applied_markup = request.markup.unwrap_or(0.0);
        let total_cost = Self::round2(base_price * (1.0 + applied_markup / 100.0));

        Ok(PricingResult {
            per_day,
            base_price,
            applied_markup,
            total_cost,
            ambiguous_rates: ambiguities,
        })
    }

    /// The civil date an itinerary day falls on: explicit when supplied,
    /// otherwise tour start + day offset.
    fn day_date(
        tour_starts_from: CalendarDate,
        day: &ItineraryDay,
    ) -> Result<CalendarDate, QuoteError> {
        match day.date {
            Some(date) => Ok(date),
            None => Ok(tour_starts_from.add_days(i64::from(day.day_number) - 1)?),
        }
    }

    /// Nightly rate for one allocation × nights × room quantity.
    fn price_room_allocation(
        date: CalendarDate,
        allocation: &RoomAllocation,
        hotel_id: &str,
        nights: u32,
        catalog: &RateCatalog,
        ambiguities: &mut Vec<RateAmbiguity>,
    ) -> Result<f64, QuoteError> {
        let key = HotelRateKey {
            hotel_id: hotel_id.to_string(),
            room_type_id: allocation.room_type_id.clone(),
            occupancy_type_id: allocation.occupancy_type_id.clone(),
            meal_plan_id: allocation.meal_plan_id.clone(),
        };

        let resolved = RateResolver::resolve_hotel(&key, date, &catalog.hotel_rates)?;
        if resolved.ambiguous {
            ambiguities.push(RateAmbiguity {
                key: key.to_string(),
                date,
            });
        }

        Ok(resolved.rate.price * f64::from(nights) * f64::from(allocation.quantity))
    }

    fn price_transport_leg(
        date: CalendarDate,
        leg: &TransportLeg,
        catalog: &RateCatalog,
        ambiguities: &mut Vec<RateAmbiguity>,
    ) -> Result<f64, QuoteError> {
        let key = TransportRateKey {
            location_id: leg.location_id.clone(),
            vehicle_type_id: leg.vehicle_type_id.clone(),
            transport_type: leg.transport_type.clone(),
        };

        let resolved = RateResolver::resolve_transport(&key, date, &catalog.transport_rates)?;
        if resolved.ambiguous {
            ambiguities.push(RateAmbiguity {
                key: key.to_string(),
                date,
            });
        }

        Ok(resolved.rate.price)
    }

    /// Round to two decimals, halves away from zero.
    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}
