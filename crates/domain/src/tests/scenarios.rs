// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end pricing scenarios across grid, availability, and validation.

use crate::{
    AvailabilityResult, COACH_DEFAULT_WINDOW, DayOfWeek, DomainError, GridFallback, Hour,
    OperatingHours, PriceRange, SelectionRange, TimeSlot, calculate_coach_price,
    calculate_field_price, synthesize_slot_grid, validate_range,
};
use time::Date;
use time::macros::date;

fn hour(value: u8) -> Hour {
    Hour::new(value).unwrap()
}

fn selection(start: u8, end: u8) -> SelectionRange {
    SelectionRange::new(Some(hour(start)), Some(hour(end)))
}

#[test]
fn test_coach_booking_scenario() {
    let day: Date = date!(2025 - 03 - 10);
    assert_eq!(DayOfWeek::from_date(day), DayOfWeek::Monday);

    let grid: Vec<Hour> = synthesize_slot_grid(DayOfWeek::Monday, &[], COACH_DEFAULT_WINDOW);
    let reported = vec![TimeSlot::new("14:00".parse().unwrap(), false)];
    let availability = AvailabilityResult::from_grid(day, &grid, &reported);

    // 13:00-15:00 covers the booked 14:00 slot
    let rejected = validate_range(Some(day), selection(13, 15), Some(&availability));
    assert_eq!(
        rejected,
        Err(DomainError::RangeUnavailable {
            hours: vec![hour(14)]
        })
    );

    let (_, range) = validate_range(Some(day), selection(15, 17), Some(&availability)).unwrap();
    assert_eq!(calculate_coach_price(&range, 200_000).unwrap(), 400_000);
}

#[test]
fn test_field_booking_scenario_with_multiplier() {
    // 2025-03-15 is a Saturday
    let day: Date = date!(2025 - 03 - 15);
    let hours = vec![OperatingHours::new(
        DayOfWeek::Saturday,
        "06:00".parse().unwrap(),
        "22:00".parse().unwrap(),
    )];
    let price_ranges = vec![
        PriceRange::new(
            DayOfWeek::Saturday,
            "18:00".parse().unwrap(),
            "22:00".parse().unwrap(),
            1.2,
        )
        .unwrap(),
    ];

    let grid = synthesize_slot_grid(DayOfWeek::from_date(day), &hours, GridFallback::FullDay);
    let availability = AvailabilityResult::from_grid(day, &grid, &[]);
    let (date, range) = validate_range(Some(day), selection(18, 20), Some(&availability)).unwrap();

    let breakdown = calculate_field_price(date, &range, 150_000, &price_ranges).unwrap();

    assert_eq!(breakdown.total, 360_000);
}

#[test]
fn test_field_price_with_mixed_multipliers() {
    let day: Date = date!(2025 - 03 - 10);
    let price_ranges = vec![
        PriceRange::new(
            DayOfWeek::Monday,
            "18:00".parse().unwrap(),
            "19:00".parse().unwrap(),
            1.5,
        )
        .unwrap(),
    ];

    let (date, range) = validate_range(Some(day), selection(18, 20), None).unwrap();
    let first = calculate_field_price(date, &range, 100_000, &price_ranges).unwrap();
    let second = calculate_field_price(date, &range, 100_000, &price_ranges).unwrap();

    assert_eq!(first.total, 250_000);
    assert_eq!(first.total, second.total);
}
