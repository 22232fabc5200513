// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Venue wall-clock time.
//!
//! The past-slot guard compares hours in the venue's local time, so the
//! current UTC instant is converted through the venue's IANA timezone.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use time::{Date, Month, PrimitiveDateTime, Time};

/// Parses an IANA timezone name such as `Asia/Ho_Chi_Minh`.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Converts a UTC instant to wall-clock time in `tz`.
///
/// # Errors
///
/// Returns `DomainError::UnresolvableLocalTime` if the converted
/// components cannot be represented.
pub fn local_now(tz: Tz, utc: DateTime<Utc>) -> Result<PrimitiveDateTime, DomainError> {
    let local = utc.with_timezone(&tz).naive_local();
    let unresolvable = || DomainError::UnresolvableLocalTime {
        reason: format!("{utc} in {tz}"),
    };

    // Convert chrono::NaiveDate to time::Date
    let month: Month = u8::try_from(local.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(unresolvable)?;
    let day: u8 = u8::try_from(local.day()).map_err(|_| unresolvable())?;
    let date: Date =
        Date::from_calendar_date(local.year(), month, day).map_err(|_| unresolvable())?;

    // Convert chrono::NaiveTime to time::Time
    let hour: u8 = u8::try_from(local.hour()).map_err(|_| unresolvable())?;
    let minute: u8 = u8::try_from(local.minute()).map_err(|_| unresolvable())?;
    let second: u8 = u8::try_from(local.second()).map_err(|_| unresolvable())?;
    let time: Time = Time::from_hms(hour, minute, second).map_err(|_| unresolvable())?;

    Ok(PrimitiveDateTime::new(date, time))
}
