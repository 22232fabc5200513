// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names follow the booking backend's camelCase JSON. Times travel
//! as `HH:00` strings and dates as `YYYY-MM-DD` strings; they are parsed
//! into domain types by the handlers so that bad input becomes an
//! `ApiError` rather than a deserialization failure.

use crate::BookingFlow;
use courtside_domain::{BookingFormData, HeldBooking};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of an entity's weekly operating hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHoursInfo {
    /// Day name (`monday`, `tuesday`, ...).
    pub day: String,
    /// Opening hour (`HH:MM`).
    pub start: String,
    /// Last bookable hour (`HH:MM`).
    pub end: String,
}

/// One price multiplier row of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeInfo {
    /// Day name.
    pub day: String,
    /// First hour the multiplier applies to.
    pub start: String,
    /// Hour the multiplier stops applying (exclusive).
    pub end: String,
    /// Price scaling factor.
    pub multiplier: f64,
}

/// An amenity chosen alongside a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityInfo {
    /// The amenity identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flat price.
    pub price: u64,
}

/// The schedule of one entity on one date.
///
/// `availability` and `coachAvailability` carry the raw backend payloads
/// (either shape). When both are present, as in a combined booking, an
/// hour is free only if it is free in both. Likewise a combined booking
/// with `coachOperatingHours` only offers hours both are open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInfo {
    /// The selected date.
    pub date: String,
    /// The entity's weekly operating hours.
    #[serde(default)]
    pub operating_hours: Vec<OperatingHoursInfo>,
    /// Availability payload of the primary entity, if fetched.
    #[serde(default)]
    pub availability: Option<Value>,
    /// Availability payload of the coach in a combined booking, if fetched.
    #[serde(default)]
    pub coach_availability: Option<Value>,
    /// Operating hours of the coach in a combined booking. An empty list
    /// means the coach keeps the default coaching window.
    #[serde(default)]
    pub coach_operating_hours: Option<Vec<OperatingHoursInfo>>,
}

/// API request for the slot grid of a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotGridRequest {
    /// The booking page asking.
    pub flow: BookingFlow,
    /// The entity's schedule.
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
}

/// The rendered state of one grid hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatus {
    /// Start of the slot (`HH:00`).
    pub start_time: String,
    /// False when the hour is booked.
    pub available: bool,
    /// True when the hour has already started today.
    pub past: bool,
}

/// API response with the slot grid of a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotGridResponse {
    /// The date (`YYYY-MM-DD`).
    pub date: String,
    /// The day of week of the date.
    pub day: String,
    /// Whether availability was supplied; when false every hour shows as free.
    pub availability_loaded: bool,
    /// One entry per grid hour, in ascending order.
    pub slots: Vec<SlotStatus>,
}

/// API request to replay hour clicks and validate the resulting range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSelectionRequest {
    /// The booking page asking; selects the click policy.
    pub flow: BookingFlow,
    /// The entity's schedule.
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
    /// Clicked hours, in click order.
    pub clicks: Vec<u8>,
}

/// API response describing whether a selection may be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSelectionResponse {
    /// Whether the selection may be submitted.
    pub valid: bool,
    /// Start of the confirmed range.
    pub start_time: Option<String>,
    /// Exclusive end of the confirmed range.
    pub end_time: Option<String>,
    /// Booked hours that blocked the selection.
    pub blocking_hours: Vec<String>,
    /// Why the selection was rejected.
    pub message: Option<String>,
}

/// API request for a field quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldQuoteRequest {
    /// The booked date.
    pub date: String,
    /// Start of the booking (`HH:00`).
    pub start_time: String,
    /// Exclusive end of the booking (`HH:00`).
    pub end_time: String,
    /// The field's hourly base price.
    pub base_price: u64,
    /// The field's price multipliers.
    #[serde(default)]
    pub price_ranges: Vec<PriceRangeInfo>,
}

/// The price of one booked hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineInfo {
    /// Start of the hour (`HH:00`).
    pub start_time: String,
    /// Multiplier applied.
    pub multiplier: f64,
    /// Unrounded amount.
    pub amount: f64,
}

/// API response with a field quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldQuoteResponse {
    /// The booked date.
    pub date: String,
    /// The day of week used for multiplier lookup.
    pub day: String,
    /// One line per booked hour.
    pub lines: Vec<QuoteLineInfo>,
    /// Rounded total.
    pub total: u64,
}

/// API request for a coach quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachQuoteRequest {
    /// Start of the booking (`HH:00`).
    pub start_time: String,
    /// Exclusive end of the booking (`HH:00`).
    pub end_time: String,
    /// The coach's hourly rate.
    pub price: u64,
}

/// API response with a coach quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachQuoteResponse {
    /// Booked hours.
    pub duration_hours: u8,
    /// The coach's hourly rate.
    pub hourly_rate: u64,
    /// `hourly_rate * duration_hours`.
    pub total: u64,
}

/// API request for a combined field, amenity, and coach quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedQuoteRequest {
    /// The booked date.
    pub date: String,
    /// Start of the booking (`HH:00`).
    pub start_time: String,
    /// Exclusive end of the booking (`HH:00`).
    pub end_time: String,
    /// The field's hourly base price.
    pub base_price: u64,
    /// The field's price multipliers.
    #[serde(default)]
    pub price_ranges: Vec<PriceRangeInfo>,
    /// Selected amenities.
    #[serde(default)]
    pub amenities: Vec<AmenityInfo>,
    /// The coach's hourly rate; absent when no coach is booked.
    #[serde(default)]
    pub coach_price: Option<u64>,
}

/// API response with a combined quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedQuoteResponse {
    /// Field subtotal.
    pub field: u64,
    /// Sum of selected amenities.
    pub amenities: u64,
    /// Coach subtotal.
    pub coach: u64,
    /// Grand total.
    pub total: u64,
    /// Per-hour breakdown of the field subtotal.
    pub field_lines: Vec<QuoteLineInfo>,
}

/// API request to validate a range and build the booking submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBookingRequest {
    /// The booking page asking.
    pub flow: BookingFlow,
    /// The entity's schedule.
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
    /// Start of the booking (`HH:00`).
    pub start_time: String,
    /// Exclusive end of the booking (`HH:00`).
    pub end_time: String,
    /// The booked field.
    #[serde(default)]
    pub field_id: Option<String>,
    /// The court within the field.
    #[serde(default)]
    pub court_id: Option<String>,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

/// API response with a booking submission ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBookingResponse {
    /// The submission body.
    pub booking: BookingFormData,
    /// The wizard step the booking reached.
    pub step: String,
}

/// API request to finish a booking while the backend hold is live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// The booking being paid for.
    pub booking: DraftBookingRequest,
    /// The hold the backend placed on the slots.
    pub hold: HeldBooking,
}

/// API response for a completed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// The backend booking identifier.
    pub booking_id: String,
    /// The wizard step the booking reached.
    pub step: String,
    /// The submitted booking.
    pub booking: BookingFormData,
    /// Seconds left on the hold when payment completed.
    pub hold_remaining_seconds: i64,
}
