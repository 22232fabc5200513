// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod payload;
mod request_response;

#[cfg(test)]
mod tests;

use courtside::SelectionPolicy;
use courtside_domain::{COACH_DEFAULT_WINDOW, EntityKind, GridFallback};
use serde::{Deserialize, Serialize};

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    build_slot_grid, checkout, draft_booking, quote_coach, quote_combined, quote_field,
    validate_selection,
};
pub use payload::{PayloadError, intersect_slots, parse_availability_payload, slots_path};
pub use request_response::{
    AmenityInfo, CheckoutRequest, CheckoutResponse, CoachQuoteRequest, CoachQuoteResponse,
    CombinedQuoteRequest, CombinedQuoteResponse, DraftBookingRequest, DraftBookingResponse,
    FieldQuoteRequest, FieldQuoteResponse, OperatingHoursInfo, PriceRangeInfo, QuoteLineInfo,
    ScheduleInfo, SlotGridRequest, SlotGridResponse, SlotStatus, ValidateSelectionRequest,
    ValidateSelectionResponse,
};

/// The booking page a request originates from.
///
/// Each page books a different kind of entity and handles clicks on a
/// completed range differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingFlow {
    /// Booking a field on its own.
    Field,
    /// Booking a coach on their own.
    Coach,
    /// Booking a field and a coach for the same window.
    Combined,
}

impl BookingFlow {
    /// Returns the click policy of this flow.
    #[must_use]
    pub const fn policy(self) -> SelectionPolicy {
        match self {
            Self::Field => SelectionPolicy::FIELD,
            Self::Coach => SelectionPolicy::COACH,
            Self::Combined => SelectionPolicy::COMBINED,
        }
    }

    /// Returns the entity whose operating hours shape the grid.
    ///
    /// A combined booking is laid out on the field's schedule.
    #[must_use]
    pub const fn entity(self) -> EntityKind {
        match self {
            Self::Field | Self::Combined => EntityKind::Field,
            Self::Coach => EntityKind::Coach,
        }
    }

    /// Returns the grid used when the entity reports no operating hours.
    #[must_use]
    pub const fn fallback(self) -> GridFallback {
        match self {
            Self::Field | Self::Combined => GridFallback::FullDay,
            Self::Coach => COACH_DEFAULT_WINDOW,
        }
    }
}
