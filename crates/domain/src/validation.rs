// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::{AvailabilityResult, is_hour_available};
use crate::error::DomainError;
use crate::types::{ConfirmedRange, Hour};
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

/// A possibly incomplete hour range as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRange {
    /// First booked hour, if chosen.
    pub start_hour: Option<Hour>,
    /// Exclusive end hour, if chosen.
    pub end_hour: Option<Hour>,
}

impl SelectionRange {
    /// Creates a new `SelectionRange`.
    #[must_use]
    pub const fn new(start_hour: Option<Hour>, end_hour: Option<Hour>) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }
}

/// Checks whether a slot has already started.
///
/// Only slots on the same calendar day as `now` can be in the past; for
/// any other date this always returns false. `now` is local wall-clock
/// time at the venue.
#[must_use]
pub fn is_slot_in_past(hour: Hour, date: Date, now: PrimitiveDateTime) -> bool {
    date == now.date() && hour.value() < now.hour()
}

/// Validates a range before it may be submitted.
///
/// Every hour in `[start, end)` must be available. An availability
/// result for a different date than `date` is ignored.
///
/// # Arguments
///
/// * `date` - The selected date, if any
/// * `range` - The user's selection
/// * `availability` - The availability loaded for the date, if any
///
/// # Returns
///
/// * `Ok((date, range))` with the confirmed range
/// * `Err(DomainError)` if the selection cannot be submitted
///
/// # Errors
///
/// Returns an error if:
/// - No date is selected
/// - Start or end is missing
/// - End does not come after start
/// - Any hour in the range is booked
pub fn validate_range(
    date: Option<Date>,
    range: SelectionRange,
    availability: Option<&AvailabilityResult>,
) -> Result<(Date, ConfirmedRange), DomainError> {
    // Rule: a date must be chosen
    let date: Date = date.ok_or(DomainError::DateMissing)?;

    // Rule: both ends must be chosen
    let (Some(start), Some(end)) = (range.start_hour, range.end_hour) else {
        return Err(DomainError::RangeIncomplete);
    };

    // Rule: end > start
    let confirmed: ConfirmedRange = ConfirmedRange::new(start, end)?;

    // Rule: all slots in range must be free
    let availability: Option<&AvailabilityResult> =
        availability.filter(|result| result.date == date);
    let booked: Vec<Hour> = confirmed
        .hours()
        .filter(|hour| !is_hour_available(*hour, availability))
        .collect();
    if !booked.is_empty() {
        return Err(DomainError::RangeUnavailable { hours: booked });
    }

    Ok((date, confirmed))
}
