// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability payloads returned by the booking backend.
//!
//! `GET /{entity}/{id}/slots?date=YYYY-MM-DD` answers either with a bare
//! slot list or with the list wrapped as `{ "data": [...] }`. Both shapes
//! are accepted.

use courtside_domain::{EntityKind, SlotTime, TimeSlot};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use time::Date;

/// Availability payload errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload is neither a list nor a `data` envelope.
    #[error("Availability must be a slot list or an object with a 'data' slot list")]
    UnexpectedShape,

    /// A slot entry could not be read.
    #[error("Invalid slot at position {index}: {reason}")]
    InvalidSlot { index: usize, reason: String },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AvailabilityPayload {
    Envelope { data: Vec<Value> },
    Bare(Vec<Value>),
}

/// Reads slot flags from a backend availability payload.
///
/// # Errors
///
/// Returns a `PayloadError` if the payload shape is unknown or a slot
/// entry lacks a readable `startTime` or `available` flag.
pub fn parse_availability_payload(payload: &Value) -> Result<Vec<TimeSlot>, PayloadError> {
    let entries: Vec<Value> = match AvailabilityPayload::deserialize(payload) {
        Ok(AvailabilityPayload::Envelope { data } | AvailabilityPayload::Bare(data)) => data,
        Err(_) => return Err(PayloadError::UnexpectedShape),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|err| PayloadError::InvalidSlot {
                index,
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Builds the backend path that reports availability of one entity on a date.
#[must_use]
pub fn slots_path(entity: EntityKind, id: &str, date: Date) -> String {
    format!("/{}/{id}/slots?date={date}", entity.path_segment())
}

/// Combines two availability reports for the same date.
///
/// A slot is available only if neither report marks it booked. Slots
/// missing from a report count as available in that report.
#[must_use]
pub fn intersect_slots(first: &[TimeSlot], second: &[TimeSlot]) -> Vec<TimeSlot> {
    let is_free = |slots: &[TimeSlot], time: SlotTime| {
        slots
            .iter()
            .find(|slot| slot.start_time == time)
            .is_none_or(|slot| slot.available)
    };

    let mut times: Vec<SlotTime> = first
        .iter()
        .chain(second)
        .map(|slot| slot.start_time)
        .collect();
    times.sort_unstable();
    times.dedup();

    times
        .into_iter()
        .map(|time| TimeSlot::new(time, is_free(first, time) && is_free(second, time)))
        .collect()
}
