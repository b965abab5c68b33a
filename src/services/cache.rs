//! Daily-tip cache — single slot keyed by calendar date.
//!
//! DESIGN
//! ======
//! Holds at most one tip. A read only trusts the slot when its date equals
//! the caller's `today`; anything else is a miss. There is no expiry timer:
//! staleness is checked lazily on each read and a new day simply overwrites.
//!
//! TRADE-OFFS
//! ==========
//! The lock is held only for the read or the write, never across the model
//! call. Two concurrent misses on the same day may both call the model and
//! the last write wins; both callers still get a valid tip.

use std::sync::Mutex;

use time::{Date, OffsetDateTime};

use crate::tip::StructuredTip;

/// Today's date in UTC.
#[must_use]
pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

#[derive(Debug, Clone)]
struct DailyCacheEntry {
    date: Date,
    data: StructuredTip,
}

/// Process-wide memo of the last daily tip.
#[derive(Debug, Default)]
pub struct DailyTipCache {
    slot: Mutex<Option<DailyCacheEntry>>,
}

impl DailyTipCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached tip if it was stored for `today`.
    #[must_use]
    pub fn get(&self, today: Date) -> Option<StructuredTip> {
        let slot = self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        slot.as_ref()
            .filter(|entry| entry.date == today)
            .map(|entry| entry.data.clone())
    }

    /// Overwrite the slot with `tip` for `today`.
    pub fn put(&self, today: Date, tip: StructuredTip) {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(DailyCacheEntry { date: today, data: tip });
    }

    /// Date of the stored entry, if any.
    #[must_use]
    pub fn cached_date(&self) -> Option<Date> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .as_ref()
            .map(|entry| entry.date)
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
