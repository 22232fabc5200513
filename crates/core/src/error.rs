// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::wizard::WizardStep;
use courtside_domain::DomainError;

/// Errors that can occur during selector and wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The wizard is not at the step the action belongs to.
    InvalidWizardStep {
        /// The step the action requires.
        expected: WizardStep,
        /// The step the wizard is at.
        actual: WizardStep,
    },
    /// The booking hold lapsed before payment finished.
    HoldExpired {
        /// The backend booking identifier.
        booking_id: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidWizardStep { expected, actual } => {
                write!(
                    f,
                    "Booking step '{}' is required, but the booking is at '{}'",
                    expected.as_str(),
                    actual.as_str()
                )
            }
            Self::HoldExpired { booking_id } => {
                write!(
                    f,
                    "The hold on booking {booking_id} has expired. Please select a time again"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
