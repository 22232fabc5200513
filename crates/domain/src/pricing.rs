// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price calculation for confirmed ranges.
//!
//! Three pricing rules are supported:
//! - Field: each hour costs `base_price × multiplier(day, hour)`, where the
//!   multiplier comes from the venue's price ranges (default 1.0). The
//!   total is rounded to the nearest whole currency unit.
//! - Coach: a flat hourly rate times the number of hours.
//! - Combined: field subtotal + amenities + coach subtotal, with no discount.
//!
//! ## Invariants
//!
//! - Recomputing a price for the same inputs yields the same integer
//! - Only the first matching price range applies to an hour

use crate::error::DomainError;
use crate::types::{ConfirmedRange, DayOfWeek, Hour, Money, SlotTime, iso_date};
use serde::{Deserialize, Serialize};
use time::Date;

/// A day/time window in which field prices are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    /// The day the window applies to.
    pub day: DayOfWeek,
    /// First hour of the window.
    pub start: SlotTime,
    /// Exclusive end of the window.
    pub end: SlotTime,
    multiplier: f64,
}

impl PriceRange {
    /// Creates a new `PriceRange`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMultiplier` if `multiplier` is negative,
    /// NaN, or infinite.
    pub fn new(
        day: DayOfWeek,
        start: SlotTime,
        end: SlotTime,
        multiplier: f64,
    ) -> Result<Self, DomainError> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(DomainError::InvalidMultiplier {
                multiplier: multiplier.to_string(),
            });
        }
        Ok(Self {
            day,
            start,
            end,
            multiplier,
        })
    }

    /// Returns the price scaling factor.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Checks whether the slot starting at `hour` on `day` falls in this window.
    #[must_use]
    pub fn applies_to(&self, day: DayOfWeek, hour: Hour) -> bool {
        self.day == day && self.start.hour() <= hour && hour < self.end.hour()
    }
}

/// An optional extra booked alongside a field, priced flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    /// The amenity identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flat price for the booking.
    pub price: Money,
}

/// The price of one booked hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceLine {
    /// The booked hour.
    pub hour: Hour,
    /// The multiplier applied to this hour.
    pub multiplier: f64,
    /// Unrounded amount for this hour.
    pub amount: f64,
}

/// Per-hour breakdown and rounded total of a field booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    /// The booked date.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The day of week used for multiplier lookup.
    pub day: DayOfWeek,
    /// One line per booked hour, in ascending order.
    pub lines: Vec<PriceLine>,
    /// Rounded total.
    pub total: Money,
}

/// Totals of a combined field, amenity, and coach booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedPrice {
    /// Field subtotal.
    pub field: Money,
    /// Sum of selected amenities.
    pub amenities: Money,
    /// Coach subtotal.
    pub coach: Money,
    /// Grand total.
    pub total: Money,
}

/// Looks up the multiplier for the slot starting at `hour` on `day`.
///
/// The first matching range wins; 1.0 applies when none matches.
#[must_use]
pub fn multiplier_for(day: DayOfWeek, hour: Hour, ranges: &[PriceRange]) -> f64 {
    ranges
        .iter()
        .find(|range| range.applies_to(day, hour))
        .map_or(1.0, PriceRange::multiplier)
}

/// Calculates the price of a field booking.
///
/// # Arguments
///
/// * `date` - The booked date (selects the day of week)
/// * `range` - The confirmed hour range
/// * `base_price` - The field's hourly base price
/// * `ranges` - The venue's price ranges
///
/// # Errors
///
/// Returns `DomainError::PriceOverflow` if the total cannot be represented.
///
/// # Example
///
/// ```text
/// base_price = 150000, saturday 18:00-22:00 x1.2
/// 18:00-20:00 on a saturday  =>  150000*1.2 + 150000*1.2 = 360000
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn calculate_field_price(
    date: Date,
    range: &ConfirmedRange,
    base_price: Money,
    ranges: &[PriceRange],
) -> Result<PriceBreakdown, DomainError> {
    let day: DayOfWeek = DayOfWeek::from_date(date);

    let lines: Vec<PriceLine> = range
        .hours()
        .map(|hour| {
            let multiplier: f64 = multiplier_for(day, hour, ranges);
            PriceLine {
                hour,
                multiplier,
                amount: base_price as f64 * multiplier,
            }
        })
        .collect();

    let subtotal: f64 = lines.iter().map(|line| line.amount).sum();
    let total: Money = round_money(subtotal)?;

    Ok(PriceBreakdown {
        date,
        day,
        lines,
        total,
    })
}

/// Calculates the price of a coach booking at a flat hourly rate.
///
/// # Errors
///
/// Returns `DomainError::PriceOverflow` if the total cannot be represented.
pub fn calculate_coach_price(
    range: &ConfirmedRange,
    hourly_rate: Money,
) -> Result<Money, DomainError> {
    hourly_rate
        .checked_mul(Money::from(range.duration_hours()))
        .ok_or_else(|| DomainError::PriceOverflow {
            operation: String::from("multiplying the coach hourly rate"),
        })
}

/// Sums the parts of a combined booking.
///
/// # Errors
///
/// Returns `DomainError::PriceOverflow` if any sum cannot be represented.
pub fn calculate_combined_price(
    field: Money,
    amenities: &[Amenity],
    coach: Money,
) -> Result<CombinedPrice, DomainError> {
    let overflow = |operation: &str| DomainError::PriceOverflow {
        operation: operation.to_string(),
    };

    let amenities_total: Money = amenities
        .iter()
        .try_fold(0, |acc: Money, amenity| acc.checked_add(amenity.price))
        .ok_or_else(|| overflow("summing amenities"))?;

    let total: Money = field
        .checked_add(amenities_total)
        .and_then(|sum| sum.checked_add(coach))
        .ok_or_else(|| overflow("summing the combined total"))?;

    Ok(CombinedPrice {
        field,
        amenities: amenities_total,
        coach,
        total,
    })
}

/// Rounds a non-negative amount to the nearest whole unit.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn round_money(amount: f64) -> Result<Money, DomainError> {
    let rounded: f64 = amount.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded >= Money::MAX as f64 {
        return Err(DomainError::PriceOverflow {
            operation: String::from("rounding the field total"),
        });
    }
    Ok(rounded as Money)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn hour(value: u8) -> Hour {
        Hour::new(value).unwrap()
    }

    fn range(start: u8, end: u8) -> ConfirmedRange {
        ConfirmedRange::new(hour(start), hour(end)).unwrap()
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < f64::EPSILON
    }

    fn price_range(day: DayOfWeek, start: &str, end: &str, multiplier: f64) -> PriceRange {
        PriceRange::new(day, start.parse().unwrap(), end.parse().unwrap(), multiplier).unwrap()
    }

    #[test]
    fn test_multiplier_defaults_to_one() {
        assert!(close(multiplier_for(DayOfWeek::Monday, hour(10), &[]), 1.0));
    }

    #[test]
    fn test_multiplier_end_is_exclusive() {
        let ranges = vec![price_range(DayOfWeek::Monday, "18:00", "20:00", 1.5)];

        assert!(close(multiplier_for(DayOfWeek::Monday, hour(19), &ranges), 1.5));
        assert!(close(multiplier_for(DayOfWeek::Monday, hour(20), &ranges), 1.0));
        assert!(close(multiplier_for(DayOfWeek::Sunday, hour(19), &ranges), 1.0));
    }

    #[test]
    fn test_first_matching_range_wins() {
        let ranges = vec![
            price_range(DayOfWeek::Friday, "17:00", "23:00", 1.3),
            price_range(DayOfWeek::Friday, "18:00", "19:00", 2.0),
        ];

        assert!(close(multiplier_for(DayOfWeek::Friday, hour(18), &ranges), 1.3));
    }

    #[test]
    fn test_field_price_sums_each_hour() {
        // 2025-03-10 is a Monday
        let ranges = vec![price_range(DayOfWeek::Monday, "18:00", "19:00", 1.5)];

        let breakdown =
            calculate_field_price(date!(2025 - 03 - 10), &range(18, 20), 100_000, &ranges)
                .unwrap();

        assert_eq!(breakdown.total, 250_000);
        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(breakdown.day, DayOfWeek::Monday);
    }

    #[test]
    fn test_field_price_is_idempotent() {
        let ranges = vec![price_range(DayOfWeek::Monday, "18:00", "22:00", 1.15)];

        let first =
            calculate_field_price(date!(2025 - 03 - 10), &range(17, 22), 123_457, &ranges)
                .unwrap();
        let second =
            calculate_field_price(date!(2025 - 03 - 10), &range(17, 22), 123_457, &ranges)
                .unwrap();

        assert_eq!(first.total, second.total);
    }

    #[test]
    fn test_field_price_rounds_to_nearest_unit() {
        let ranges = vec![price_range(DayOfWeek::Monday, "10:00", "11:00", 1.005)];

        let breakdown =
            calculate_field_price(date!(2025 - 03 - 10), &range(10, 11), 1_000, &ranges).unwrap();

        assert_eq!(breakdown.total, 1_005);
    }

    #[test]
    fn test_rejects_negative_multiplier() {
        let result = PriceRange::new(
            DayOfWeek::Monday,
            "10:00".parse().unwrap(),
            "11:00".parse().unwrap(),
            -0.5,
        );

        assert!(matches!(result, Err(DomainError::InvalidMultiplier { .. })));
    }

    #[test]
    fn test_rejects_nan_multiplier() {
        let result = PriceRange::new(
            DayOfWeek::Monday,
            "10:00".parse().unwrap(),
            "11:00".parse().unwrap(),
            f64::NAN,
        );

        assert!(matches!(result, Err(DomainError::InvalidMultiplier { .. })));
    }

    #[test]
    fn test_coach_price_is_flat() {
        assert_eq!(calculate_coach_price(&range(15, 17), 200_000).unwrap(), 400_000);
    }

    #[test]
    fn test_coach_price_overflow() {
        let result = calculate_coach_price(&range(0, 24), Money::MAX);

        assert!(matches!(result, Err(DomainError::PriceOverflow { .. })));
    }

    #[test]
    fn test_combined_price_has_no_discount() {
        let amenities = vec![
            Amenity {
                id: String::from("a1"),
                name: String::from("Ball rental"),
                price: 20_000,
            },
            Amenity {
                id: String::from("a2"),
                name: String::from("Bibs"),
                price: 30_000,
            },
        ];

        let combined = calculate_combined_price(300_000, &amenities, 400_000).unwrap();

        assert_eq!(combined.amenities, 50_000);
        assert_eq!(combined.total, 750_000);
    }
}
