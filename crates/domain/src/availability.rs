// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot availability for a selected date.
//!
//! Lookups are fail-open: an hour is unavailable only when the backend
//! has explicitly reported it as booked.

use crate::types::{ConfirmedRange, Hour, SlotTime, iso_date};
use serde::{Deserialize, Serialize};
use time::Date;

/// A single hour-aligned slot and whether it can still be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Start of the slot (`HH:00`).
    pub start_time: SlotTime,
    /// False when the backend reports a conflicting booking.
    pub available: bool,
}

impl TimeSlot {
    /// Creates a new `TimeSlot`.
    #[must_use]
    pub const fn new(start_time: SlotTime, available: bool) -> Self {
        Self {
            start_time,
            available,
        }
    }
}

/// Availability of every slot on one date.
///
/// A result is replaced wholesale whenever a new date is selected; it is
/// never merged with the result of another date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// The date the availability applies to.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Slots in ascending hour order.
    pub slots: Vec<TimeSlot>,
}

impl AvailabilityResult {
    /// Wraps backend-reported slot flags for a date as-is.
    #[must_use]
    pub const fn from_flags(date: Date, slots: Vec<TimeSlot>) -> Self {
        Self { date, slots }
    }

    /// Builds the availability of a synthesized grid.
    ///
    /// Each grid hour takes the flag of the first reported slot with the
    /// same `HH:00` label. Hours the backend did not mention are available.
    #[must_use]
    pub fn from_grid(date: Date, grid: &[Hour], reported: &[TimeSlot]) -> Self {
        let slots: Vec<TimeSlot> = grid
            .iter()
            .map(|hour| {
                let start_time: SlotTime = hour.to_slot_time();
                let available: bool = reported
                    .iter()
                    .find(|slot| slot.start_time == start_time)
                    .is_none_or(|slot| slot.available);
                TimeSlot::new(start_time, available)
            })
            .collect();

        Self { date, slots }
    }

    /// Returns the slot starting at `hour`, if one was reported.
    #[must_use]
    pub fn slot(&self, hour: Hour) -> Option<&TimeSlot> {
        let start_time: SlotTime = hour.to_slot_time();
        self.slots.iter().find(|slot| slot.start_time == start_time)
    }

    /// Checks whether `hour` can be booked on this date.
    #[must_use]
    pub fn is_available(&self, hour: Hour) -> bool {
        self.slot(hour).is_none_or(|slot| slot.available)
    }

    /// Lists the booked hours inside `range`, in ascending order.
    #[must_use]
    pub fn unavailable_hours_in(&self, range: &ConfirmedRange) -> Vec<Hour> {
        range
            .hours()
            .filter(|hour| !self.is_available(*hour))
            .collect()
    }
}

/// Answers whether `hour` is available given the current result.
///
/// While no result has been fetched (`None`) every hour is treated as
/// available, so selection is never blocked on the network.
#[must_use]
pub fn is_hour_available(hour: Hour, availability: Option<&AvailabilityResult>) -> bool {
    availability.is_none_or(|result| result.is_available(hour))
}
