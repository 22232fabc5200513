// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Hour};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidHour(25);
    assert_eq!(format!("{err}"), "Invalid hour: 25. Must be between 0 and 24");

    let err: DomainError = DomainError::InvalidSlotTime(String::from("noon"));
    assert_eq!(format!("{err}"), "Invalid slot time: 'noon'");

    let err: DomainError = DomainError::InvalidDay(String::from("funday"));
    assert_eq!(format!("{err}"), "Invalid day of week: 'funday'");

    let err: DomainError = DomainError::DateMissing;
    assert_eq!(format!("{err}"), "Please select a date");

    let err: DomainError = DomainError::RangeIncomplete;
    assert_eq!(
        format!("{err}"),
        "Please select both a start and an end time"
    );

    let err: DomainError = DomainError::EmptyRange {
        start: Hour::new(15).unwrap(),
        end: Hour::new(13).unwrap(),
    };
    assert_eq!(
        format!("{err}"),
        "End time 13:00 must be after start time 15:00"
    );

    let err: DomainError = DomainError::SlotUnavailable {
        hour: Hour::new(14).unwrap(),
    };
    assert_eq!(format!("{err}"), "The 14:00 slot is already booked");

    let err: DomainError = DomainError::RangeUnavailable {
        hours: vec![Hour::new(9).unwrap(), Hour::new(14).unwrap()],
    };
    assert_eq!(
        format!("{err}"),
        "The selected time includes booked slots: 09:00, 14:00"
    );

    let err: DomainError = DomainError::SlotInPast {
        hour: Hour::new(8).unwrap(),
    };
    assert_eq!(format!("{err}"), "The 08:00 slot has already passed");

    let err: DomainError = DomainError::HourOutsideGrid {
        hour: Hour::new(23).unwrap(),
    };
    assert_eq!(format!("{err}"), "The 23:00 slot is outside operating hours");

    let err: DomainError = DomainError::InvalidTimezone(String::from("Nowhere"));
    assert_eq!(format!("{err}"), "Invalid timezone: 'Nowhere'");

    let err: DomainError = DomainError::PriceOverflow {
        operation: String::from("summing amenities"),
    };
    assert_eq!(
        format!("{err}"),
        "Price arithmetic overflow while summing amenities"
    );
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::DateMissing);
    assert_eq!(err.to_string(), "Please select a date");
}
