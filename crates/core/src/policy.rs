// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Click-handling rules for one booking flow.
///
/// With `extend_range` off, a click on a completed range always starts a
/// new selection. With it on, a click before the range extends it
/// backward, a click after its end extends it forward, and a click
/// inside collapses to a new start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Whether clicks outside a completed range extend it.
    pub extend_range: bool,
    /// Whether hours already started today are rejected.
    pub past_guard_enabled: bool,
}

impl SelectionPolicy {
    /// Field booking extends ranges in either direction.
    pub const FIELD: Self = Self {
        extend_range: true,
        past_guard_enabled: true,
    };

    /// Coach booking collapses to a new start on every range click.
    pub const COACH: Self = Self {
        extend_range: false,
        past_guard_enabled: true,
    };

    /// Combined field and coach booking follows the coach rules.
    pub const COMBINED: Self = Self {
        extend_range: false,
        past_guard_enabled: true,
    };
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::COACH
    }
}
