// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{
    AvailabilityStatus, Effect, SelectionPhase, SelectorContext, SelectorState, TransitionResult,
};
use courtside_domain::{
    AvailabilityResult, ConfirmedRange, DayOfWeek, DomainError, Hour, TimeSlot,
    is_hour_available, is_slot_in_past, synthesize_slot_grid, validate_range,
};
use time::Date;
use tracing::{debug, info, warn};

/// Applies a command to the selector state, producing a new state.
///
/// # Arguments
///
/// * `state` - The current selector state (immutable)
/// * `command` - The command to apply
/// * `context` - Policy, operating hours, and the venue's wall-clock time
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and any follow-up effect
/// * `Err(CoreError)` if the command is rejected; the caller keeps `state`
///
/// # Errors
///
/// Returns an error if:
/// - An hour is clicked or a selection confirmed without a date
/// - A clicked hour is outside the grid, booked, or already past
/// - A range would cover a booked hour
/// - A confirmed selection is incomplete or empty
pub fn apply(
    state: &SelectorState,
    command: Command,
    context: &SelectorContext,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SelectDate { date } => Ok(select_date(state, date, context)),
        Command::ClearDate => Ok(TransitionResult::quiet(SelectorState::new(state.entity))),
        Command::AvailabilityLoaded { date, slots } => {
            Ok(availability_loaded(state, date, &slots))
        }
        Command::AvailabilityFailed { date, message } => {
            Ok(availability_failed(state, date, message))
        }
        Command::RetryAvailability => retry_availability(state),
        Command::ClickHour { hour } => click_hour(state, hour, context),
        Command::ClearSelection => {
            let mut new_state: SelectorState = state.clone();
            new_state.phase = SelectionPhase::NoSelection;
            Ok(TransitionResult::quiet(new_state))
        }
        Command::Confirm => confirm(state, context),
    }
}

fn select_date(state: &SelectorState, date: Date, context: &SelectorContext) -> TransitionResult {
    // One fetch per distinct date; re-picking the same date keeps everything
    if state.date == Some(date) && !matches!(state.availability, AvailabilityStatus::Failed { .. })
    {
        return TransitionResult::quiet(state.clone());
    }

    let day: DayOfWeek = DayOfWeek::from_date(date);
    let mut grid: Vec<Hour> = synthesize_slot_grid(day, &context.operating_hours, context.fallback);
    if let Some(companion) = &context.companion {
        let open: Vec<Hour> =
            synthesize_slot_grid(day, &companion.operating_hours, companion.fallback);
        grid.retain(|hour| open.contains(hour));
    }
    debug!(%date, slots = grid.len(), "Selected date");

    let new_state: SelectorState = SelectorState {
        entity: state.entity,
        date: Some(date),
        grid,
        availability: AvailabilityStatus::Loading,
        phase: SelectionPhase::NoSelection,
    };

    TransitionResult {
        new_state,
        effect: Some(Effect::FetchAvailability {
            entity: state.entity,
            date,
        }),
    }
}

/// Returns true when a fetch result belongs to a superseded date.
fn is_stale(state: &SelectorState, date: Date) -> bool {
    if state.date == Some(date) {
        return false;
    }
    debug!(
        %date,
        current = ?state.date,
        "Discarding availability response for a superseded date"
    );
    true
}

fn availability_loaded(state: &SelectorState, date: Date, slots: &[TimeSlot]) -> TransitionResult {
    if is_stale(state, date) {
        return TransitionResult::quiet(state.clone());
    }

    let result: AvailabilityResult = AvailabilityResult::from_grid(date, &state.grid, slots);
    let phase: SelectionPhase = reconcile_selection(state.phase, &result);
    if phase != state.phase {
        info!(%date, "Selection reduced after availability loaded");
    }

    let mut new_state: SelectorState = state.clone();
    new_state.availability = AvailabilityStatus::Loaded(result);
    new_state.phase = phase;
    TransitionResult::quiet(new_state)
}

/// Drops the parts of a selection made while loading that turned out to be booked.
fn reconcile_selection(phase: SelectionPhase, result: &AvailabilityResult) -> SelectionPhase {
    match phase {
        SelectionPhase::NoSelection => phase,
        SelectionPhase::StartSelected { start } => {
            if result.is_available(start) {
                phase
            } else {
                SelectionPhase::NoSelection
            }
        }
        SelectionPhase::RangeSelected { range } => {
            if result.unavailable_hours_in(&range).is_empty() {
                phase
            } else if result.is_available(range.start()) {
                SelectionPhase::StartSelected {
                    start: range.start(),
                }
            } else {
                SelectionPhase::NoSelection
            }
        }
    }
}

fn availability_failed(state: &SelectorState, date: Date, message: String) -> TransitionResult {
    if is_stale(state, date) {
        return TransitionResult::quiet(state.clone());
    }

    warn!(%date, error = %message, "Availability fetch failed");
    let mut new_state: SelectorState = state.clone();
    new_state.availability = AvailabilityStatus::Failed { message };
    TransitionResult::quiet(new_state)
}

fn retry_availability(state: &SelectorState) -> Result<TransitionResult, CoreError> {
    let date: Date = state.date.ok_or(DomainError::DateMissing)?;

    info!(%date, "Retrying availability fetch");
    let mut new_state: SelectorState = state.clone();
    new_state.availability = AvailabilityStatus::Loading;

    Ok(TransitionResult {
        new_state,
        effect: Some(Effect::FetchAvailability {
            entity: state.entity,
            date,
        }),
    })
}

fn click_hour(
    state: &SelectorState,
    hour: Hour,
    context: &SelectorContext,
) -> Result<TransitionResult, CoreError> {
    let date: Date = state.date.ok_or(DomainError::DateMissing)?;

    // The hour after the last slot only ever closes a range
    if !state.grid.contains(&hour) && closing_hour(state) != Some(hour) {
        return Err(DomainError::HourOutsideGrid { hour }.into());
    }

    let phase: SelectionPhase = match state.phase {
        SelectionPhase::NoSelection => pick_start(state, date, hour, context)?,
        SelectionPhase::StartSelected { start } => {
            if hour > start {
                pick_range(state, start, hour)?
            } else {
                pick_start(state, date, hour, context)?
            }
        }
        SelectionPhase::RangeSelected { range } => {
            if !context.policy.extend_range {
                pick_start(state, date, hour, context)?
            } else if hour < range.start() {
                check_start(state, date, hour, context)?;
                pick_range(state, hour, range.end())?
            } else if hour > range.end() {
                pick_range(state, range.start(), hour)?
            } else {
                pick_start(state, date, hour, context)?
            }
        }
    };

    let mut new_state: SelectorState = state.clone();
    new_state.phase = phase;
    Ok(TransitionResult::quiet(new_state))
}

/// The exclusive end of a range that runs to the last slot of the grid.
fn closing_hour(state: &SelectorState) -> Option<Hour> {
    state.grid.last().and_then(|last| last.next())
}

/// Rejects hours that may not begin a booking.
fn check_start(
    state: &SelectorState,
    date: Date,
    hour: Hour,
    context: &SelectorContext,
) -> Result<(), CoreError> {
    if !state.grid.contains(&hour) {
        return Err(DomainError::HourOutsideGrid { hour }.into());
    }

    if context.policy.past_guard_enabled && is_slot_in_past(hour, date, context.now) {
        debug!(%date, hour = hour.value(), "Rejected click on a past slot");
        return Err(DomainError::SlotInPast { hour }.into());
    }

    if !is_hour_available(hour, state.loaded_availability()) {
        debug!(%date, hour = hour.value(), "Rejected click on a booked slot");
        return Err(DomainError::SlotUnavailable { hour }.into());
    }

    Ok(())
}

fn pick_start(
    state: &SelectorState,
    date: Date,
    hour: Hour,
    context: &SelectorContext,
) -> Result<SelectionPhase, CoreError> {
    check_start(state, date, hour, context)?;
    Ok(SelectionPhase::StartSelected { start: hour })
}

/// Builds `[start, end)`, rejecting it if any covered hour is booked.
fn pick_range(state: &SelectorState, start: Hour, end: Hour) -> Result<SelectionPhase, CoreError> {
    let range: ConfirmedRange = ConfirmedRange::new(start, end)?;

    if let Some(result) = state.loaded_availability() {
        let booked: Vec<Hour> = result.unavailable_hours_in(&range);
        if !booked.is_empty() {
            return Err(DomainError::RangeUnavailable { hours: booked }.into());
        }
    }

    Ok(SelectionPhase::RangeSelected { range })
}

fn confirm(
    state: &SelectorState,
    context: &SelectorContext,
) -> Result<TransitionResult, CoreError> {
    let (date, range) = validate_range(
        state.date,
        state.selection(),
        state.loaded_availability(),
    )?;

    // The clock may have moved past the start since it was picked
    if context.policy.past_guard_enabled && is_slot_in_past(range.start(), date, context.now) {
        return Err(DomainError::SlotInPast {
            hour: range.start(),
        }
        .into());
    }

    info!(
        %date,
        start = %range.start().to_slot_time(),
        end = %range.end().to_slot_time(),
        "Selection confirmed"
    );

    Ok(TransitionResult {
        new_state: state.clone(),
        effect: Some(Effect::RangeConfirmed { date, range }),
    })
}
