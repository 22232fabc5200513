// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::policy::SelectionPolicy;
use courtside_domain::{
    AvailabilityResult, ConfirmedRange, EntityKind, GridFallback, Hour, OperatingHours,
    SelectionRange, SlotTime, is_hour_available, is_slot_in_past,
};
use time::{Date, PrimitiveDateTime};

/// Where the user is in picking a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// Nothing picked yet.
    #[default]
    NoSelection,
    /// A start hour is picked; the end is not.
    StartSelected {
        /// The picked start hour.
        start: Hour,
    },
    /// A full `[start, end)` range is picked.
    RangeSelected {
        /// The picked range.
        range: ConfirmedRange,
    },
}

impl SelectionPhase {
    /// Returns the phase as a possibly incomplete range.
    #[must_use]
    pub const fn as_selection(&self) -> SelectionRange {
        match self {
            Self::NoSelection => SelectionRange::new(None, None),
            Self::StartSelected { start } => SelectionRange::new(Some(*start), None),
            Self::RangeSelected { range } => {
                SelectionRange::new(Some(range.start()), Some(range.end()))
            }
        }
    }
}

/// Progress of the availability fetch for the selected date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvailabilityStatus {
    /// No date is selected.
    #[default]
    Idle,
    /// A fetch for the selected date is pending.
    Loading,
    /// Availability for the selected date is known.
    Loaded(AvailabilityResult),
    /// The last fetch failed; the user may retry.
    Failed {
        /// A description of the failure.
        message: String,
    },
}

/// Selector state for one bookable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    /// The entity whose slots are being selected.
    pub entity: EntityKind,
    /// The most recently requested date.
    pub date: Option<Date>,
    /// Candidate hours for the selected date.
    pub grid: Vec<Hour>,
    /// Availability of the selected date.
    pub availability: AvailabilityStatus,
    /// The user's current selection.
    pub phase: SelectionPhase,
}

impl SelectorState {
    /// Creates a new selector with no date.
    #[must_use]
    pub const fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            date: None,
            grid: Vec::new(),
            availability: AvailabilityStatus::Idle,
            phase: SelectionPhase::NoSelection,
        }
    }

    /// Returns the loaded availability, if the fetch has resolved.
    #[must_use]
    pub const fn loaded_availability(&self) -> Option<&AvailabilityResult> {
        match &self.availability {
            AvailabilityStatus::Loaded(result) => Some(result),
            _ => None,
        }
    }

    /// Checks whether a fetch is pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.availability, AvailabilityStatus::Loading)
    }

    /// Returns the current selection as a possibly incomplete range.
    #[must_use]
    pub const fn selection(&self) -> SelectionRange {
        self.phase.as_selection()
    }

    /// Describes every grid hour for rendering.
    #[must_use]
    pub fn slot_views(&self, context: &SelectorContext) -> Vec<SlotView> {
        let Some(date) = self.date else {
            return Vec::new();
        };
        let availability: Option<&AvailabilityResult> = self.loaded_availability();

        self.grid
            .iter()
            .map(|hour| SlotView {
                hour: *hour,
                start_time: hour.to_slot_time(),
                available: is_hour_available(*hour, availability),
                past: context.policy.past_guard_enabled
                    && is_slot_in_past(*hour, date, context.now),
                selected: match self.phase {
                    SelectionPhase::NoSelection => false,
                    SelectionPhase::StartSelected { start } => start == *hour,
                    SelectionPhase::RangeSelected { range } => range.contains(*hour),
                },
            })
            .collect()
    }
}

/// Render model of one grid hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView {
    /// The hour.
    pub hour: Hour,
    /// The `HH:00` label.
    pub start_time: SlotTime,
    /// False when the hour is booked.
    pub available: bool,
    /// True when the hour has already started today.
    pub past: bool,
    /// True when the hour is part of the current selection.
    pub selected: bool,
}

/// Opening hours of a second entity booked for the same window.
///
/// Only hours open for both entities appear on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionSchedule {
    /// The companion's operating hours.
    pub operating_hours: Vec<OperatingHours>,
    /// Grid used when the companion has no operating hours.
    pub fallback: GridFallback,
}

/// Everything a transition needs besides the state itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorContext {
    /// Click-handling rules for the flow.
    pub policy: SelectionPolicy,
    /// The entity's operating hours.
    pub operating_hours: Vec<OperatingHours>,
    /// Grid used when the entity has no operating hours.
    pub fallback: GridFallback,
    /// Local wall-clock time at the venue.
    pub now: PrimitiveDateTime,
    /// Schedule of a coach booked alongside a field, if any.
    pub companion: Option<CompanionSchedule>,
}

impl SelectorContext {
    /// Creates a new `SelectorContext`.
    #[must_use]
    pub const fn new(
        policy: SelectionPolicy,
        operating_hours: Vec<OperatingHours>,
        fallback: GridFallback,
        now: PrimitiveDateTime,
    ) -> Self {
        Self {
            policy,
            operating_hours,
            fallback,
            now,
            companion: None,
        }
    }

    /// Narrows the grid to hours the companion is also open.
    #[must_use]
    pub fn with_companion(self, companion: CompanionSchedule) -> Self {
        Self {
            companion: Some(companion),
            ..self
        }
    }
}

/// Work the caller must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch `GET /{entity}/{id}/slots?date=...` and feed the result back
    /// as `AvailabilityLoaded` or `AvailabilityFailed` tagged with `date`.
    FetchAvailability {
        /// The entity kind to fetch for.
        entity: EntityKind,
        /// The date the fetch is for.
        date: Date,
    },
    /// The selection passed validation; the booking may advance.
    RangeConfirmed {
        /// The booked date.
        date: Date,
        /// The validated range.
        range: ConfirmedRange,
    },
}

/// The result of a successful selector transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: SelectorState,
    /// Follow-up work for the caller, if any.
    pub effect: Option<Effect>,
}

impl TransitionResult {
    /// A transition with no follow-up work.
    #[must_use]
    pub const fn quiet(new_state: SelectorState) -> Self {
        Self {
            new_state,
            effect: None,
        }
    }
}
