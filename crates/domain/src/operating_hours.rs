// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot grid synthesis from operating hours.
//!
//! The slot grid for a date is generated from the entity's configured
//! operating hours for that day of week. The availability API only
//! supplies flags; it never defines which slots exist.
//!
//! ## Invariants
//!
//! - Grids are contiguous and hour-stepped
//! - The same day and configuration always yield the same grid
//! - Synthesis never fails; missing data degrades to permissive defaults

use crate::types::{DayOfWeek, Hour, SlotTime};
use serde::{Deserialize, Serialize};

/// The open window of a bookable entity on one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    /// The day this window applies to.
    pub day: DayOfWeek,
    /// First bookable start hour.
    pub start: SlotTime,
    /// Last hour shown on the grid (inclusive).
    pub end: SlotTime,
}

impl OperatingHours {
    /// Creates a new `OperatingHours` window.
    #[must_use]
    pub const fn new(day: DayOfWeek, start: SlotTime, end: SlotTime) -> Self {
        Self { day, start, end }
    }
}

/// Grid used when an entity reports no operating hours at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFallback {
    /// Every hour from 00:00 to 23:00.
    FullDay,
    /// A fixed inclusive window applied to every day.
    Window {
        /// First hour of the window.
        start: Hour,
        /// Last hour of the window (inclusive).
        end: Hour,
    },
}

/// Coaches without a published schedule are offered 08:00 through 21:00.
pub const COACH_DEFAULT_WINDOW: GridFallback = GridFallback::Window {
    start: Hour::saturating(8),
    end: Hour::saturating(21),
};

/// Produces the ordered candidate hours for a day.
///
/// # Arguments
///
/// * `day` - The day of week of the selected date
/// * `hours` - The entity's operating hours table
/// * `fallback` - The grid to use when `hours` is empty
///
/// # Returns
///
/// - `start..=end` of the first window configured for `day`
/// - An empty grid if other days are configured but `day` is not
/// - The fallback grid if no operating hours are configured at all
///
/// A window whose end precedes its start yields an empty grid.
///
/// # Example
///
/// ```text
/// monday 07:00-12:00  =>  [7, 8, 9, 10, 11, 12]
/// ```
#[must_use]
pub fn synthesize_slot_grid(
    day: DayOfWeek,
    hours: &[OperatingHours],
    fallback: GridFallback,
) -> Vec<Hour> {
    if hours.is_empty() {
        return match fallback {
            GridFallback::FullDay => hour_span(0, 23),
            GridFallback::Window { start, end } => hour_span(start.value(), end.value()),
        };
    }

    hours
        .iter()
        .find(|window| window.day == day)
        .map_or_else(Vec::new, |window| {
            hour_span(window.start.hour().value(), window.end.hour().value())
        })
}

/// Inclusive span of hours; empty when `end < start`.
fn hour_span(start: u8, end: u8) -> Vec<Hour> {
    (start..=end.min(Hour::MAX))
        .filter_map(|value| Hour::new(value).ok())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn window(day: DayOfWeek, start: &str, end: &str) -> OperatingHours {
        OperatingHours::new(day, start.parse().unwrap(), end.parse().unwrap())
    }

    fn values(grid: &[Hour]) -> Vec<u8> {
        grid.iter().map(|hour| hour.value()).collect()
    }

    #[test]
    fn test_grid_for_configured_day() {
        let hours = vec![window(DayOfWeek::Monday, "07:00", "12:00")];

        let grid = synthesize_slot_grid(DayOfWeek::Monday, &hours, GridFallback::FullDay);

        assert_eq!(values(&grid), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_grid_is_deterministic() {
        let hours = vec![
            window(DayOfWeek::Saturday, "06:00", "22:00"),
            window(DayOfWeek::Sunday, "08:00", "20:00"),
        ];

        let first = synthesize_slot_grid(DayOfWeek::Saturday, &hours, GridFallback::FullDay);
        let second = synthesize_slot_grid(DayOfWeek::Saturday, &hours, GridFallback::FullDay);

        assert_eq!(first, second);
        assert_eq!(first.len(), 17);
    }

    #[test]
    fn test_unconfigured_day_has_no_slots() {
        let hours = vec![window(DayOfWeek::Monday, "07:00", "12:00")];

        let grid = synthesize_slot_grid(DayOfWeek::Tuesday, &hours, GridFallback::FullDay);

        assert!(grid.is_empty());
    }

    #[test]
    fn test_missing_hours_fall_back_to_full_day() {
        let grid = synthesize_slot_grid(DayOfWeek::Friday, &[], GridFallback::FullDay);

        assert_eq!(values(&grid), (0..=23).collect::<Vec<u8>>());
    }

    #[test]
    fn test_missing_hours_fall_back_to_coach_window() {
        let grid = synthesize_slot_grid(DayOfWeek::Friday, &[], COACH_DEFAULT_WINDOW);

        assert_eq!(values(&grid), (8..=21).collect::<Vec<u8>>());
    }

    #[test]
    fn test_first_window_for_day_wins() {
        let hours = vec![
            window(DayOfWeek::Monday, "09:00", "10:00"),
            window(DayOfWeek::Monday, "14:00", "18:00"),
        ];

        let grid = synthesize_slot_grid(DayOfWeek::Monday, &hours, GridFallback::FullDay);

        assert_eq!(values(&grid), vec![9, 10]);
    }

    #[test]
    fn test_inverted_window_is_empty() {
        let hours = vec![window(DayOfWeek::Monday, "18:00", "09:00")];

        let grid = synthesize_slot_grid(DayOfWeek::Monday, &hours, GridFallback::FullDay);

        assert!(grid.is_empty());
    }

    #[test]
    fn test_minutes_are_truncated() {
        let hours = vec![window(DayOfWeek::Monday, "07:30", "09:45")];

        let grid = synthesize_slot_grid(DayOfWeek::Monday, &hours, GridFallback::FullDay);

        assert_eq!(values(&grid), vec![7, 8, 9]);
    }
}
