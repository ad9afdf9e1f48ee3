pub mod calendar;
pub mod itinerary;
pub mod quote;
pub mod rates;
pub mod variant;
