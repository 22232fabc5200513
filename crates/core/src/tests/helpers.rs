// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Command, CoreError, SelectionPolicy, SelectorContext, SelectorState, TransitionResult, apply,
};
use courtside_domain::{DayOfWeek, EntityKind, GridFallback, Hour, OperatingHours, TimeSlot};
use time::macros::{date, datetime};
use time::{Date, PrimitiveDateTime};

pub fn hour(value: u8) -> Hour {
    Hour::new(value).unwrap()
}

/// 2025-03-10 is a Monday.
pub fn monday() -> Date {
    date!(2025 - 03 - 10)
}

pub fn tuesday() -> Date {
    date!(2025 - 03 - 11)
}

/// Mid-morning on `monday()`.
pub fn fixed_now() -> PrimitiveDateTime {
    datetime!(2025-03-10 10:00)
}

pub fn create_test_operating_hours() -> Vec<OperatingHours> {
    vec![
        OperatingHours::new(
            DayOfWeek::Monday,
            hour(7).to_slot_time(),
            hour(21).to_slot_time(),
        ),
        OperatingHours::new(
            DayOfWeek::Tuesday,
            hour(7).to_slot_time(),
            hour(21).to_slot_time(),
        ),
    ]
}

pub fn create_test_context(policy: SelectionPolicy) -> SelectorContext {
    SelectorContext::new(
        policy,
        create_test_operating_hours(),
        GridFallback::FullDay,
        fixed_now(),
    )
}

/// Slot flags for 07:00 through 21:00 with `booked` marked unavailable.
pub fn create_test_slots(booked: &[u8]) -> Vec<TimeSlot> {
    (7..=21)
        .map(|value| TimeSlot::new(hour(value).to_slot_time(), !booked.contains(&value)))
        .collect()
}

/// A selector with `date` picked and its availability loaded.
pub fn create_loaded_state(date: Date, booked: &[u8], context: &SelectorContext) -> SelectorState {
    let selected: TransitionResult = apply(
        &SelectorState::new(EntityKind::Field),
        Command::SelectDate { date },
        context,
    )
    .unwrap();

    apply(
        &selected.new_state,
        Command::AvailabilityLoaded {
            date,
            slots: create_test_slots(booked),
        },
        context,
    )
    .unwrap()
    .new_state
}

pub fn click(
    state: &SelectorState,
    value: u8,
    context: &SelectorContext,
) -> Result<SelectorState, CoreError> {
    apply(state, Command::ClickHour { hour: hour(value) }, context)
        .map(|transition| transition.new_state)
}
