// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Weekday};

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// A whole currency amount (VND has no minor unit).
pub type Money = u64;

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), format).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// An hour of the day.
///
/// Values run from 0 to 24 inclusive. 24 only ever appears as the
/// exclusive end of a range that runs to midnight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// The largest representable hour (midnight at the end of the day).
    pub const MAX: u8 = 24;

    /// Creates a new `Hour`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHour` if `value` exceeds 24.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::InvalidHour(value));
        }
        Ok(Self(value))
    }

    /// Builds an hour for compile-time constants, saturating at 24.
    pub(crate) const fn saturating(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the hour value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the `HH:00` form of this hour.
    #[must_use]
    pub const fn to_slot_time(self) -> SlotTime {
        SlotTime(self)
    }

    /// Returns the following hour, or `None` past midnight.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.0 >= Self::MAX {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl TryFrom<u8> for Hour {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `HH:00` label of an hour-aligned slot.
///
/// Parsing keeps only the hour component, so `"07:30"` reads as 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime(Hour);

impl SlotTime {
    /// Returns the hour this slot starts at.
    #[must_use]
    pub const fn hour(self) -> Hour {
        self.0
    }
}

impl FromStr for SlotTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidSlotTime(s.to_string());
        let mut parts = s.trim().split(':');
        let hour_part: &str = parts.next().ok_or_else(invalid)?;

        if hour_part.is_empty()
            || hour_part.len() > 2
            || !hour_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if parts.any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit())) {
            return Err(invalid());
        }

        let value: u8 = hour_part.parse().map_err(|_| invalid())?;
        Ok(Self(Hour::new(value).map_err(|_| invalid())?))
    }
}

impl TryFrom<String> for SlotTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotTime> for String {
    fn from(slot: SlotTime) -> Self {
        slot.to_string()
    }
}

impl From<Hour> for SlotTime {
    fn from(hour: Hour) -> Self {
        Self(hour)
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0.value())
    }
}

/// Day of the week, named the way venues configure schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Returns the day a calendar date falls on.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        match date.weekday() {
            Weekday::Sunday => Self::Sunday,
            Weekday::Monday => Self::Monday,
            Weekday::Tuesday => Self::Tuesday,
            Weekday::Wednesday => Self::Wednesday,
            Weekday::Thursday => Self::Thursday,
            Weekday::Friday => Self::Friday,
            Weekday::Saturday => Self::Saturday,
        }
    }

    /// Converts this day to its lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            _ => Err(DomainError::InvalidDay(s.to_string())),
        }
    }
}

impl TryFrom<String> for DayOfWeek {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayOfWeek> for String {
    fn from(day: DayOfWeek) -> Self {
        day.as_str().to_string()
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of bookable entity whose slots are being selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A sports field or court at a venue.
    Field,
    /// A coach booked by the hour.
    Coach,
}

impl EntityKind {
    /// Returns the REST path segment for this entity kind.
    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::Field => "fields",
            Self::Coach => "coaches",
        }
    }
}

/// A validated, non-empty hour range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConfirmedRange {
    start: Hour,
    end: Hour,
}

impl ConfirmedRange {
    /// Creates a new range covering `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRange` unless `end > start`.
    pub fn new(start: Hour, end: Hour) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::EmptyRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first booked hour.
    #[must_use]
    pub const fn start(&self) -> Hour {
        self.start
    }

    /// Returns the exclusive end hour.
    #[must_use]
    pub const fn end(&self) -> Hour {
        self.end
    }

    /// Number of whole hours covered.
    #[must_use]
    pub const fn duration_hours(&self) -> u8 {
        self.end.value() - self.start.value()
    }

    /// Checks whether `hour` is one of the booked hours.
    #[must_use]
    pub fn contains(&self, hour: Hour) -> bool {
        self.start <= hour && hour < self.end
    }

    /// Iterates the booked hours in ascending order.
    pub fn hours(&self) -> impl Iterator<Item = Hour> {
        (self.start.value()..self.end.value()).map(Hour)
    }
}
