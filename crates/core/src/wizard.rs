// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking wizard progression.
//!
//! The wizard carries the booking form and the backend hold between
//! steps. Each step transition returns a new wizard; the previous value
//! is never mutated.
//!
//! ## Steps
//!
//! - `SelectTime` → `Details` once the selector confirms a range
//! - `Details` → `Payment` once the backend places a hold
//! - `Payment` → `Complete` while the hold is still live
//!
//! Changing the date or restarting returns to `SelectTime` with an empty form.

use crate::error::CoreError;
use courtside_domain::{BookingFormData, ConfirmedRange, HeldBooking};
use time::{Date, Duration, OffsetDateTime};
use tracing::{info, warn};

/// A step of the booking wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Picking a date and time range.
    #[default]
    SelectTime,
    /// Entering notes and court details.
    Details,
    /// Paying while the backend holds the slots.
    Payment,
    /// The booking is finished.
    Complete,
}

impl WizardStep {
    /// Converts this step to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectTime => "select_time",
            Self::Details => "details",
            Self::Payment => "payment",
            Self::Complete => "complete",
        }
    }
}

/// Booking wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingWizard {
    step: WizardStep,
    form: Option<BookingFormData>,
    hold: Option<HeldBooking>,
}

impl BookingWizard {
    /// Creates a new wizard at `SelectTime`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: WizardStep::SelectTime,
            form: None,
            hold: None,
        }
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the booking form, once a range has been confirmed.
    #[must_use]
    pub const fn form(&self) -> Option<&BookingFormData> {
        self.form.as_ref()
    }

    /// Returns the backend hold, once one has been attached.
    #[must_use]
    pub const fn hold(&self) -> Option<&HeldBooking> {
        self.hold.as_ref()
    }

    fn require_step(&self, expected: WizardStep) -> Result<(), CoreError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidWizardStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Records a confirmed range and moves to `Details`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidWizardStep` unless at `SelectTime`.
    pub fn confirm_time(&self, date: Date, range: &ConfirmedRange) -> Result<Self, CoreError> {
        self.require_step(WizardStep::SelectTime)?;

        Ok(Self {
            step: WizardStep::Details,
            form: Some(BookingFormData::from_range(date, range)),
            hold: None,
        })
    }

    /// Updates the optional booking details.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidWizardStep` unless at `Details`.
    pub fn update_details(
        &self,
        field_id: Option<String>,
        court_id: Option<String>,
        note: Option<String>,
    ) -> Result<Self, CoreError> {
        self.require_step(WizardStep::Details)?;

        let mut next: Self = self.clone();
        if let Some(form) = next.form.as_mut() {
            form.field_id = field_id;
            form.court_id = court_id;
            form.note = note.filter(|text| !text.trim().is_empty());
        }
        Ok(next)
    }

    /// Attaches the backend hold and moves to `Payment`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The wizard is not at `Details`
    /// - The hold has already expired at `now`
    pub fn attach_hold(&self, hold: HeldBooking, now: OffsetDateTime) -> Result<Self, CoreError> {
        self.require_step(WizardStep::Details)?;

        if hold.is_expired(now) {
            return Err(CoreError::HoldExpired {
                booking_id: hold.id,
            });
        }

        info!(booking_id = %hold.id, expires_at = %hold.expires_at, "Booking hold attached");
        let mut next: Self = self.clone();
        next.step = WizardStep::Payment;
        next.hold = Some(hold);
        Ok(next)
    }

    /// Finishes the booking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The wizard is not at `Payment`
    /// - The hold expired before `now`
    pub fn complete(&self, now: OffsetDateTime) -> Result<Self, CoreError> {
        self.require_step(WizardStep::Payment)?;

        if let Some(hold) = self.hold.as_ref().filter(|hold| hold.is_expired(now)) {
            warn!(booking_id = %hold.id, "Payment attempted after hold expired");
            return Err(CoreError::HoldExpired {
                booking_id: hold.id.clone(),
            });
        }

        let mut next: Self = self.clone();
        next.step = WizardStep::Complete;
        Ok(next)
    }

    /// Time left on the hold at `now`, if one is attached.
    #[must_use]
    pub fn hold_remaining(&self, now: OffsetDateTime) -> Option<Duration> {
        self.hold.as_ref().map(|hold| hold.remaining(now))
    }

    /// Drops a lapsed hold, returning from `Payment` to `Details`.
    ///
    /// A wizard without an expired hold is returned unchanged.
    #[must_use]
    pub fn release_expired_hold(&self, now: OffsetDateTime) -> Self {
        match &self.hold {
            Some(hold) if self.step == WizardStep::Payment && hold.is_expired(now) => {
                info!(booking_id = %hold.id, "Booking hold released after expiry");
                let mut next: Self = self.clone();
                next.step = WizardStep::Details;
                next.hold = None;
                next
            }
            _ => self.clone(),
        }
    }

    /// Starts over after the user picks a different date.
    #[must_use]
    pub const fn reset_for_date_change(&self) -> Self {
        Self::new()
    }

    /// Starts the wizard over from the beginning.
    #[must_use]
    pub const fn restart(&self) -> Self {
        Self::new()
    }
}
