// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use serde_json::{Value, json};
use time::PrimitiveDateTime;
use time::macros::datetime;

use crate::{OperatingHoursInfo, PriceRangeInfo, ScheduleInfo};

/// Mid-morning on Monday 2025-03-10, venue time.
pub fn create_test_now() -> PrimitiveDateTime {
    datetime!(2025-03-10 10:00)
}

pub fn create_test_operating_hours() -> Vec<OperatingHoursInfo> {
    ["monday", "saturday"]
        .into_iter()
        .map(|day| OperatingHoursInfo {
            day: String::from(day),
            start: String::from("08:00"),
            end: String::from("21:00"),
        })
        .collect()
}

pub fn create_saturday_evening_surcharge() -> Vec<PriceRangeInfo> {
    vec![PriceRangeInfo {
        day: String::from("saturday"),
        start: String::from("18:00"),
        end: String::from("22:00"),
        multiplier: 1.2,
    }]
}

/// A `{ data: [...] }` payload with `booked` hours marked unavailable.
pub fn create_availability_payload(booked: &[u8]) -> Value {
    let slots: Vec<Value> = (8..=21)
        .map(|hour: u8| {
            json!({
                "startTime": format!("{hour:02}:00"),
                "available": !booked.contains(&hour),
            })
        })
        .collect();
    json!({ "data": slots })
}

pub fn create_test_schedule(date: &str, availability: Option<Value>) -> ScheduleInfo {
    ScheduleInfo {
        date: String::from(date),
        operating_hours: create_test_operating_hours(),
        availability,
        coach_availability: None,
        coach_operating_hours: None,
    }
}
