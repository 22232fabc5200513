// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod booking;
mod clock;
mod error;
mod operating_hours;
mod pricing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{AvailabilityResult, TimeSlot, is_hour_available};
pub use booking::{BookingFormData, HOLD_DURATION, HeldBooking};
pub use clock::{local_now, parse_timezone};
pub use error::DomainError;
pub use operating_hours::{
    COACH_DEFAULT_WINDOW, GridFallback, OperatingHours, synthesize_slot_grid,
};
pub use pricing::{
    Amenity, CombinedPrice, PriceBreakdown, PriceLine, PriceRange, calculate_coach_price,
    calculate_combined_price, calculate_field_price, multiplier_for,
};

// Re-export public types
pub use types::{
    ConfirmedRange, DayOfWeek, EntityKind, Hour, Money, SlotTime, iso_date, parse_iso_date,
};
pub use validation::{SelectionRange, is_slot_in_past, validate_range};
