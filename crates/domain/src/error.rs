// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Hour;

/// Errors that can occur during slot, selection, and pricing validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Hour value is outside `0..=24`.
    InvalidHour(u8),
    /// Slot time string could not be read as an hour.
    InvalidSlotTime(String),
    /// Day name is not one of `sunday..saturday`.
    InvalidDay(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// No date has been selected.
    DateMissing,
    /// A range was submitted without both a start and an end.
    RangeIncomplete,
    /// A range end does not come after its start.
    EmptyRange {
        /// The range start hour.
        start: Hour,
        /// The range end hour.
        end: Hour,
    },
    /// A single clicked slot is already booked.
    SlotUnavailable {
        /// The booked hour.
        hour: Hour,
    },
    /// One or more hours inside a range are already booked.
    RangeUnavailable {
        /// The booked hours inside the range, in ascending order.
        hours: Vec<Hour>,
    },
    /// The clicked slot lies before the current wall-clock hour.
    SlotInPast {
        /// The rejected hour.
        hour: Hour,
    },
    /// The clicked hour is not part of the day's slot grid.
    HourOutsideGrid {
        /// The rejected hour.
        hour: Hour,
    },
    /// A price multiplier is negative or not a finite number.
    InvalidMultiplier {
        /// The rejected multiplier, rendered as text.
        multiplier: String,
    },
    /// Timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// A wall-clock time does not exist or is ambiguous in the timezone.
    UnresolvableLocalTime {
        /// Description of the conversion that failed.
        reason: String,
    },
    /// Price arithmetic overflowed.
    PriceOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

fn join_hours(hours: &[Hour]) -> String {
    hours
        .iter()
        .map(|hour| hour.to_slot_time().to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHour(value) => {
                write!(f, "Invalid hour: {value}. Must be between 0 and 24")
            }
            Self::InvalidSlotTime(value) => write!(f, "Invalid slot time: '{value}'"),
            Self::InvalidDay(value) => write!(f, "Invalid day of week: '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateMissing => write!(f, "Please select a date"),
            Self::RangeIncomplete => write!(f, "Please select both a start and an end time"),
            Self::EmptyRange { start, end } => {
                write!(
                    f,
                    "End time {} must be after start time {}",
                    end.to_slot_time(),
                    start.to_slot_time()
                )
            }
            Self::SlotUnavailable { hour } => {
                write!(f, "The {} slot is already booked", hour.to_slot_time())
            }
            Self::RangeUnavailable { hours } => {
                write!(
                    f,
                    "The selected time includes booked slots: {}",
                    join_hours(hours)
                )
            }
            Self::SlotInPast { hour } => {
                write!(f, "The {} slot has already passed", hour.to_slot_time())
            }
            Self::HourOutsideGrid { hour } => {
                write!(
                    f,
                    "The {} slot is outside operating hours",
                    hour.to_slot_time()
                )
            }
            Self::InvalidMultiplier { multiplier } => {
                write!(
                    f,
                    "Invalid price multiplier: {multiplier}. Must be a finite, non-negative number"
                )
            }
            Self::InvalidTimezone(name) => write!(f, "Invalid timezone: '{name}'"),
            Self::UnresolvableLocalTime { reason } => {
                write!(f, "Could not resolve local time: {reason}")
            }
            Self::PriceOverflow { operation } => {
                write!(f, "Price arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
