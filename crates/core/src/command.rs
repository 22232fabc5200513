// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::{Hour, TimeSlot};
use time::Date;

/// A command represents user intent or a fetch completion as data only.
///
/// Commands are the only way to request selector state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a date, discarding any previous availability and selection.
    SelectDate {
        /// The chosen date.
        date: Date,
    },
    /// Clear the date and everything derived from it.
    ClearDate,
    /// An availability fetch resolved.
    AvailabilityLoaded {
        /// The date the fetch was issued for.
        date: Date,
        /// Slot flags reported by the backend.
        slots: Vec<TimeSlot>,
    },
    /// An availability fetch failed.
    AvailabilityFailed {
        /// The date the fetch was issued for.
        date: Date,
        /// A description of the failure.
        message: String,
    },
    /// Re-issue the availability fetch for the current date.
    RetryAvailability,
    /// The user clicked an hour on the slot grid.
    ClickHour {
        /// The clicked hour.
        hour: Hour,
    },
    /// Drop the current selection but keep the date.
    ClearSelection,
    /// Validate the selection before moving to the next booking step.
    Confirm,
}
