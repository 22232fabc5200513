// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The venue's clock.
//!
//! Booking rules compare slots against the venue's local wall-clock
//! hour, while booking holds expire at an absolute instant. Both are
//! derived from one UTC reading so a request sees a consistent "now".

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use courtside_domain::{DomainError, local_now};
use time::{OffsetDateTime, PrimitiveDateTime};

/// A single reading of the venue clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Now {
    /// Wall-clock time at the venue.
    pub local: PrimitiveDateTime,
    /// The same instant in UTC.
    pub utc: OffsetDateTime,
}

/// Source of the current time for a venue timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueClock {
    timezone: Tz,
    fixed: Option<DateTime<Utc>>,
}

impl VenueClock {
    /// A clock that reads the system time.
    #[must_use]
    pub const fn system(timezone: Tz) -> Self {
        Self {
            timezone,
            fixed: None,
        }
    }

    /// A clock frozen at `instant`.
    #[cfg(test)]
    #[must_use]
    pub const fn fixed(timezone: Tz, instant: DateTime<Utc>) -> Self {
        Self {
            timezone,
            fixed: Some(instant),
        }
    }

    /// Returns the venue timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Reads the clock.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnresolvableLocalTime` if the instant cannot
    /// be represented as a local or UTC `time` value.
    pub fn now(&self) -> Result<Now, DomainError> {
        let instant: DateTime<Utc> = self.fixed.unwrap_or_else(Utc::now);

        let utc: OffsetDateTime = OffsetDateTime::from_unix_timestamp(instant.timestamp())
            .map_err(|err| DomainError::UnresolvableLocalTime {
                reason: err.to_string(),
            })?;

        Ok(Now {
            local: local_now(self.timezone, instant)?,
            utc,
        })
    }
}
