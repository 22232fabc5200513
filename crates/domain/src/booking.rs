// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking form data and short-lived booking holds.

use crate::error::DomainError;
use crate::types::{ConfirmedRange, SlotTime, iso_date};
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};

/// How long the backend keeps a slot held while payment is pending.
pub const HOLD_DURATION: Duration = Duration::minutes(5);

/// The booking being assembled across wizard steps.
///
/// Created once a range is confirmed; reset when the date changes or the
/// wizard restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormData {
    /// The booked date.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Start of the first booked hour.
    pub start_time: SlotTime,
    /// Exclusive end of the booking.
    pub end_time: SlotTime,
    /// The booked field, when booking a field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    /// The court within the field, if the venue has several.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_id: Option<String>,
    /// Free-form note for the venue or coach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BookingFormData {
    /// Creates form data from a confirmed range.
    #[must_use]
    pub const fn from_range(date: Date, range: &ConfirmedRange) -> Self {
        Self {
            date,
            start_time: range.start().to_slot_time(),
            end_time: range.end().to_slot_time(),
            field_id: None,
            court_id: None,
            note: None,
        }
    }

    /// Re-derives the booked range from the form's times.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRange` if the end does not follow the start.
    pub fn range(&self) -> Result<ConfirmedRange, DomainError> {
        ConfirmedRange::new(self.start_time.hour(), self.end_time.hour())
    }
}

/// A booking the backend is holding for the user until `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldBooking {
    /// The backend booking identifier.
    pub id: String,
    /// When the backend releases the hold.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

impl HeldBooking {
    /// Creates a hold that expires `HOLD_DURATION` after `held_at`.
    #[must_use]
    pub fn new(id: String, held_at: OffsetDateTime) -> Self {
        Self {
            id,
            expires_at: held_at + HOLD_DURATION,
        }
    }

    /// Creates a hold with an expiry reported by the backend.
    #[must_use]
    pub const fn with_expiry(id: String, expires_at: OffsetDateTime) -> Self {
        Self { id, expires_at }
    }

    /// Checks whether the hold has lapsed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }

    /// Time left on the hold at `now`, never negative.
    #[must_use]
    pub fn remaining(&self, now: OffsetDateTime) -> Duration {
        let left: Duration = self.expires_at - now;
        if left.is_negative() {
            Duration::ZERO
        } else {
            left
        }
    }
}
