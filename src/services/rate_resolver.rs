use std::cmp::Ordering;

use crate::errors::QuoteError;
use crate::models::calendar::CalendarDate;
use crate::models::rates::{DatedRecord, HotelRate, HotelRateKey, TransportRate, TransportRateKey};

/// The rate picked for a key/date, plus whether the pick had to break a
/// tie between overlapping windows.
#[derive(Debug)]
pub struct ResolvedRate<'a, R> {
    pub rate: &'a R,
    pub ambiguous: bool,
}

pub struct RateResolver;

impl RateResolver {
    /// Resolve the nightly rate for one hotel key on one date.
    pub fn resolve_hotel<'a>(
        key: &HotelRateKey,
        date: CalendarDate,
        candidates: &'a [HotelRate],
    ) -> Result<ResolvedRate<'a, HotelRate>, QuoteError> {
        let matches = candidates.iter().filter(|r| r.matches_key(key)).collect();
        Self::pick(key.to_string(), date, matches)
    }

    /// Resolve the rate for one transport key on one date.
    pub fn resolve_transport<'a>(
        key: &TransportRateKey,
        date: CalendarDate,
        candidates: &'a [TransportRate],
    ) -> Result<ResolvedRate<'a, TransportRate>, QuoteError> {
        let matches = candidates.iter().filter(|r| r.matches_key(key)).collect();
        Self::pick(key.to_string(), date, matches)
    }

    /// Pick the single applicable record among same-key candidates.
    ///
    /// Active records whose closed interval [valid_from, valid_to]
    /// contains `date` are applicable. Zero applicable records is a hard
    /// error; the catalog does not prevent overlapping windows, so more
    /// than one is resolved by policy: newest `created_at` wins, then the
    /// narrower window, then the smallest record id. The same inputs
    /// always pick the same record.
    fn pick<'a, R: DatedRecord>(
        key: String,
        date: CalendarDate,
        candidates: Vec<&'a R>,
    ) -> Result<ResolvedRate<'a, R>, QuoteError> {
        let mut applicable: Vec<&R> = candidates
            .into_iter()
            .filter(|r| r.is_active() && r.covers(date))
            .collect();

        if applicable.is_empty() {
            return Err(QuoteError::RateNotFound { key, date });
        }

        let ambiguous = applicable.len() > 1;
        applicable.sort_by(|a, b| Self::preference(*a, *b));

        Ok(ResolvedRate {
            rate: applicable[0],
            ambiguous,
        })
    }

    fn preference<R: DatedRecord>(a: &R, b: &R) -> Ordering {
        // Option<DateTime> orders None first, so comparing b to a puts the
        // newest timestamp ahead and records without one last.
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| a.span_days().cmp(&b.span_days()))
            .then_with(|| a.record_id().cmp(&b.record_id()))
    }
}
