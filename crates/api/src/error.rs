// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::payload::PayloadError;
use courtside::CoreError;
use courtside_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        Self::InvalidInput {
            field: String::from("availability"),
            message: err.to_string(),
        }
    }
}

fn invalid_input(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn rule_violation(rule: &str, message: String) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: rule.to_string(),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // Taken by value to fit `map_err`
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidHour(_) => invalid_input("hour", message),
        DomainError::InvalidSlotTime(_) => invalid_input("time", message),
        DomainError::InvalidDay(_) => invalid_input("day", message),
        DomainError::DateParseError { .. } | DomainError::DateMissing => {
            invalid_input("date", message)
        }
        DomainError::RangeIncomplete => invalid_input("range", message),
        DomainError::InvalidMultiplier { .. } => invalid_input("multiplier", message),
        DomainError::InvalidTimezone(_) => invalid_input("timezone", message),
        DomainError::EmptyRange { .. } => rule_violation("end_after_start", message),
        DomainError::SlotUnavailable { .. } => rule_violation("slot_available", message),
        DomainError::RangeUnavailable { .. } => rule_violation("range_available", message),
        DomainError::SlotInPast { .. } => rule_violation("slot_not_past", message),
        DomainError::HourOutsideGrid { .. } => rule_violation("within_operating_hours", message),
        DomainError::PriceOverflow { .. } => rule_violation("price_representable", message),
        DomainError::UnresolvableLocalTime { .. } => ApiError::Internal { message },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        other @ CoreError::InvalidWizardStep { .. } => {
            rule_violation("wizard_step", other.to_string())
        }
        other @ CoreError::HoldExpired { .. } => rule_violation("hold_active", other.to_string()),
    }
}
