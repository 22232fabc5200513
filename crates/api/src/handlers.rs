// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers for the booking API.
//!
//! Handlers parse DTOs into domain types, drive the selector through
//! `courtside::apply`, and translate every failure into an `ApiError`.
//! They hold no state; the caller supplies the venue's current time.

use crate::BookingFlow;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::payload::{intersect_slots, parse_availability_payload};
use crate::request_response::{
    AmenityInfo, CheckoutRequest, CheckoutResponse, CoachQuoteRequest, CoachQuoteResponse,
    CombinedQuoteRequest, CombinedQuoteResponse, DraftBookingRequest, DraftBookingResponse,
    FieldQuoteRequest, FieldQuoteResponse, OperatingHoursInfo, PriceRangeInfo, QuoteLineInfo,
    ScheduleInfo, SlotGridRequest, SlotGridResponse, SlotStatus, ValidateSelectionRequest,
    ValidateSelectionResponse,
};
use courtside::{
    BookingWizard, Command, CompanionSchedule, CoreError, Effect, SelectorContext, SelectorState,
    TransitionResult, apply,
};
use courtside_domain::{
    Amenity, COACH_DEFAULT_WINDOW, CombinedPrice, ConfirmedRange, DayOfWeek, DomainError, Hour,
    OperatingHours, PriceBreakdown, PriceRange, SlotTime, TimeSlot, calculate_coach_price,
    calculate_combined_price, calculate_field_price, parse_iso_date,
};
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, info};

fn parse_date(value: &str) -> Result<Date, ApiError> {
    parse_iso_date(value).map_err(translate_domain_error)
}

fn parse_slot_time(field: &str, value: &str) -> Result<SlotTime, ApiError> {
    value
        .parse::<SlotTime>()
        .map_err(|err: DomainError| ApiError::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        })
}

fn parse_day(value: &str) -> Result<DayOfWeek, ApiError> {
    value
        .parse::<DayOfWeek>()
        .map_err(translate_domain_error)
}

fn parse_range(start_time: &str, end_time: &str) -> Result<ConfirmedRange, ApiError> {
    let start: SlotTime = parse_slot_time("start_time", start_time)?;
    let end: SlotTime = parse_slot_time("end_time", end_time)?;
    ConfirmedRange::new(start.hour(), end.hour()).map_err(translate_domain_error)
}

fn to_operating_hours(rows: &[OperatingHoursInfo]) -> Result<Vec<OperatingHours>, ApiError> {
    rows.iter()
        .map(|row| -> Result<OperatingHours, ApiError> {
            Ok(OperatingHours::new(
                parse_day(&row.day)?,
                parse_slot_time("operating_hours.start", &row.start)?,
                parse_slot_time("operating_hours.end", &row.end)?,
            ))
        })
        .collect()
}

fn to_price_ranges(rows: &[PriceRangeInfo]) -> Result<Vec<PriceRange>, ApiError> {
    rows.iter()
        .map(|row| -> Result<PriceRange, ApiError> {
            PriceRange::new(
                parse_day(&row.day)?,
                parse_slot_time("price_ranges.start", &row.start)?,
                parse_slot_time("price_ranges.end", &row.end)?,
                row.multiplier,
            )
            .map_err(translate_domain_error)
        })
        .collect()
}

fn to_amenities(rows: &[AmenityInfo]) -> Vec<Amenity> {
    rows.iter()
        .map(|row| Amenity {
            id: row.id.clone(),
            name: row.name.clone(),
            price: row.price,
        })
        .collect()
}

fn to_quote_lines(breakdown: &PriceBreakdown) -> Vec<QuoteLineInfo> {
    breakdown
        .lines
        .iter()
        .map(|line| QuoteLineInfo {
            start_time: line.hour.to_slot_time().to_string(),
            multiplier: line.multiplier,
            amount: line.amount,
        })
        .collect()
}

/// Merges the availability payloads of a schedule, if any were supplied.
fn reported_slots(schedule: &ScheduleInfo) -> Result<Option<Vec<TimeSlot>>, ApiError> {
    let primary: Option<Vec<TimeSlot>> = schedule
        .availability
        .as_ref()
        .map(parse_availability_payload)
        .transpose()?;
    let coach: Option<Vec<TimeSlot>> = schedule
        .coach_availability
        .as_ref()
        .map(parse_availability_payload)
        .transpose()?;

    Ok(match (primary, coach) {
        (Some(primary), Some(coach)) => Some(intersect_slots(&primary, &coach)),
        (primary, coach) => primary.or(coach),
    })
}

/// Builds a selector with the schedule's date picked and its availability applied.
fn load_selector(
    flow: BookingFlow,
    schedule: &ScheduleInfo,
    now: PrimitiveDateTime,
) -> Result<(SelectorState, SelectorContext), ApiError> {
    let date: Date = parse_date(&schedule.date)?;
    let mut context: SelectorContext = SelectorContext::new(
        flow.policy(),
        to_operating_hours(&schedule.operating_hours)?,
        flow.fallback(),
        now,
    );
    if let (BookingFlow::Combined, Some(rows)) = (flow, &schedule.coach_operating_hours) {
        context = context.with_companion(CompanionSchedule {
            operating_hours: to_operating_hours(rows)?,
            fallback: COACH_DEFAULT_WINDOW,
        });
    }

    let selected: TransitionResult = apply(
        &SelectorState::new(flow.entity()),
        Command::SelectDate { date },
        &context,
    )
    .map_err(translate_core_error)?;

    let Some(slots) = reported_slots(schedule)? else {
        return Ok((selected.new_state, context));
    };

    let loaded: TransitionResult = apply(
        &selected.new_state,
        Command::AvailabilityLoaded { date, slots },
        &context,
    )
    .map_err(translate_core_error)?;

    Ok((loaded.new_state, context))
}

/// Clicks each hour in order, then confirms the resulting selection.
fn replay_clicks(
    state: &SelectorState,
    clicks: &[Hour],
    context: &SelectorContext,
) -> Result<(Date, ConfirmedRange), CoreError> {
    let mut current: SelectorState = state.clone();
    for hour in clicks {
        current = apply(&current, Command::ClickHour { hour: *hour }, context)?.new_state;
    }

    match apply(&current, Command::Confirm, context)?.effect {
        Some(Effect::RangeConfirmed { date, range }) => Ok((date, range)),
        _ => Err(CoreError::DomainViolation(DomainError::RangeIncomplete)),
    }
}

/// Builds the slot grid of a date.
///
/// # Arguments
///
/// * `request` - The flow and schedule to render
/// * `now` - The venue's local wall-clock time
///
/// # Returns
///
/// * `Ok(SlotGridResponse)` with one entry per grid hour
/// * `Err(ApiError)` if the date, operating hours, or availability are malformed
///
/// # Errors
///
/// Returns an error if any part of the schedule cannot be parsed.
pub fn build_slot_grid(
    request: &SlotGridRequest,
    now: PrimitiveDateTime,
) -> Result<SlotGridResponse, ApiError> {
    let (state, context) = load_selector(request.flow, &request.schedule, now)?;
    let date: Date = parse_date(&request.schedule.date)?;

    let slots: Vec<SlotStatus> = state
        .slot_views(&context)
        .into_iter()
        .map(|view| SlotStatus {
            start_time: view.start_time.to_string(),
            available: view.available,
            past: view.past,
        })
        .collect();

    debug!(%date, slots = slots.len(), "Built slot grid");

    Ok(SlotGridResponse {
        date: date.to_string(),
        day: DayOfWeek::from_date(date).to_string(),
        availability_loaded: state.loaded_availability().is_some(),
        slots,
    })
}

/// Replays clicks against a schedule and reports whether the result may be submitted.
///
/// A selection rejected by a booking rule is reported as `valid: false`
/// with the reason; only malformed input is an error.
///
/// # Errors
///
/// Returns an error if the schedule or a clicked hour cannot be parsed.
pub fn validate_selection(
    request: &ValidateSelectionRequest,
    now: PrimitiveDateTime,
) -> Result<ValidateSelectionResponse, ApiError> {
    let (state, context) = load_selector(request.flow, &request.schedule, now)?;
    let clicks: Vec<Hour> = request
        .clicks
        .iter()
        .map(|value| Hour::new(*value))
        .collect::<Result<Vec<Hour>, DomainError>>()
        .map_err(translate_domain_error)?;

    match replay_clicks(&state, &clicks, &context) {
        Ok((_, range)) => Ok(ValidateSelectionResponse {
            valid: true,
            start_time: Some(range.start().to_slot_time().to_string()),
            end_time: Some(range.end().to_slot_time().to_string()),
            blocking_hours: Vec::new(),
            message: None,
        }),
        Err(err) => {
            debug!(error = %err, "Selection rejected");
            Ok(rejected_selection(err))
        }
    }
}

fn rejected_selection(err: CoreError) -> ValidateSelectionResponse {
    let domain_err: DomainError = match err {
        CoreError::DomainViolation(domain_err) => domain_err,
        other => {
            return ValidateSelectionResponse {
                valid: false,
                start_time: None,
                end_time: None,
                blocking_hours: Vec::new(),
                message: Some(other.to_string()),
            };
        }
    };

    let blocking: Vec<Hour> = match &domain_err {
        DomainError::RangeUnavailable { hours } => hours.clone(),
        DomainError::SlotUnavailable { hour } => vec![*hour],
        _ => Vec::new(),
    };

    ValidateSelectionResponse {
        valid: false,
        start_time: None,
        end_time: None,
        blocking_hours: blocking
            .iter()
            .map(|hour| hour.to_slot_time().to_string())
            .collect(),
        message: Some(domain_err.to_string()),
    }
}

/// Prices a field booking.
///
/// # Errors
///
/// Returns an error if:
/// - The date, times, or price ranges cannot be parsed
/// - The end does not follow the start
/// - The total overflows
pub fn quote_field(request: &FieldQuoteRequest) -> Result<FieldQuoteResponse, ApiError> {
    let date: Date = parse_date(&request.date)?;
    let range: ConfirmedRange = parse_range(&request.start_time, &request.end_time)?;
    let ranges: Vec<PriceRange> = to_price_ranges(&request.price_ranges)?;

    let breakdown: PriceBreakdown =
        calculate_field_price(date, &range, request.base_price, &ranges)
            .map_err(translate_domain_error)?;

    Ok(FieldQuoteResponse {
        date: breakdown.date.to_string(),
        day: breakdown.day.to_string(),
        lines: to_quote_lines(&breakdown),
        total: breakdown.total,
    })
}

/// Prices a coach booking.
///
/// # Errors
///
/// Returns an error if the times cannot be parsed, the end does not
/// follow the start, or the total overflows.
pub fn quote_coach(request: &CoachQuoteRequest) -> Result<CoachQuoteResponse, ApiError> {
    let range: ConfirmedRange = parse_range(&request.start_time, &request.end_time)?;
    let total: u64 = calculate_coach_price(&range, request.price).map_err(translate_domain_error)?;

    Ok(CoachQuoteResponse {
        duration_hours: range.duration_hours(),
        hourly_rate: request.price,
        total,
    })
}

/// Prices a combined field, amenity, and coach booking.
///
/// The three parts are summed independently; no bundle discount applies.
///
/// # Errors
///
/// Returns an error if any input cannot be parsed or any sum overflows.
pub fn quote_combined(request: &CombinedQuoteRequest) -> Result<CombinedQuoteResponse, ApiError> {
    let date: Date = parse_date(&request.date)?;
    let range: ConfirmedRange = parse_range(&request.start_time, &request.end_time)?;
    let ranges: Vec<PriceRange> = to_price_ranges(&request.price_ranges)?;

    let field: PriceBreakdown = calculate_field_price(date, &range, request.base_price, &ranges)
        .map_err(translate_domain_error)?;
    let coach: u64 = match request.coach_price {
        Some(rate) => calculate_coach_price(&range, rate).map_err(translate_domain_error)?,
        None => 0,
    };
    let combined: CombinedPrice =
        calculate_combined_price(field.total, &to_amenities(&request.amenities), coach)
            .map_err(translate_domain_error)?;

    Ok(CombinedQuoteResponse {
        field: combined.field,
        amenities: combined.amenities,
        coach: combined.coach,
        total: combined.total,
        field_lines: to_quote_lines(&field),
    })
}

/// Validates a range against the schedule and fills in the booking form.
fn draft_wizard(
    request: &DraftBookingRequest,
    now: PrimitiveDateTime,
) -> Result<BookingWizard, ApiError> {
    let requested: ConfirmedRange = parse_range(&request.start_time, &request.end_time)?;
    let (state, context) = load_selector(request.flow, &request.schedule, now)?;

    let (date, range) = replay_clicks(&state, &[requested.start(), requested.end()], &context)
        .map_err(translate_core_error)?;

    BookingWizard::new()
        .confirm_time(date, &range)
        .and_then(|wizard| {
            wizard.update_details(
                request.field_id.clone(),
                request.court_id.clone(),
                request.note.clone(),
            )
        })
        .map_err(translate_core_error)
}

/// Validates a range and builds the booking submission body.
///
/// # Arguments
///
/// * `request` - The flow, schedule, range, and optional details
/// * `now` - The venue's local wall-clock time
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the range breaks a
/// booking rule (booked hour, past hour, outside operating hours).
pub fn draft_booking(
    request: &DraftBookingRequest,
    now: PrimitiveDateTime,
) -> Result<DraftBookingResponse, ApiError> {
    let wizard: BookingWizard = draft_wizard(request, now)?;
    let booking = wizard.form().cloned().ok_or_else(|| ApiError::Internal {
        message: String::from("Booking form missing after range confirmation"),
    })?;

    info!(
        flow = ?request.flow,
        date = %booking.date,
        start = %booking.start_time,
        end = %booking.end_time,
        "Booking drafted"
    );

    Ok(DraftBookingResponse {
        booking,
        step: wizard.step().as_str().to_string(),
    })
}

/// Completes a booking while its backend hold is live.
///
/// # Arguments
///
/// * `request` - The booking and the hold the backend placed
/// * `local_now` - The venue's local wall-clock time
/// * `utc_now` - The current instant, compared against the hold expiry
///
/// # Errors
///
/// Returns an error if the booking is invalid or the hold has expired.
pub fn checkout(
    request: &CheckoutRequest,
    local_now: PrimitiveDateTime,
    utc_now: OffsetDateTime,
) -> Result<CheckoutResponse, ApiError> {
    let wizard: BookingWizard = draft_wizard(&request.booking, local_now)?
        .attach_hold(request.hold.clone(), utc_now)
        .and_then(|wizard| wizard.complete(utc_now))
        .map_err(translate_core_error)?;

    let booking = wizard.form().cloned().ok_or_else(|| ApiError::Internal {
        message: String::from("Booking form missing after checkout"),
    })?;
    let remaining: i64 = wizard
        .hold_remaining(utc_now)
        .map_or(0, Duration::whole_seconds);

    info!(booking_id = %request.hold.id, remaining_seconds = remaining, "Booking completed");

    Ok(CheckoutResponse {
        booking_id: request.hold.id.clone(),
        step: wizard.step().as_str().to_string(),
        booking,
        hold_remaining_seconds: remaining,
    })
}
