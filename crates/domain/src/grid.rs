// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::slots::ShiftKey;
use crate::types::Team;

/// One row of the weekly grid: a shift key plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// The canonical shift key, e.g. `08-09`.
    pub key: ShiftKey,
    /// The human-facing label, e.g. `08:00 - 09:00`.
    pub label: String,
}

/// Returns the `(start_hour, end_hour_exclusive)` window for a team.
///
/// CS covers 08-24; every other team gets the 09-18 office window.
#[must_use]
pub const fn hour_window(team: Team) -> (u8, u8) {
    match team {
        Team::Cs => (8, 24),
        Team::Mo => (9, 18),
    }
}

/// Builds the ordered slot set for a team's week grid.
///
/// CS yields 16 one-hour slots ending with `23-00`; MO yields 9 ending
/// with `17-18`. The end hour wraps modulo 24 so the final CS slot never
/// produces an invalid `24` label.
#[must_use]
pub fn build_time_slots(team: Team) -> Vec<TimeSlot> {
    let (start, end) = hour_window(team);
    (start..end)
        .map(|h| {
            let key: ShiftKey = ShiftKey::from_start_hour(h);
            let label: String = key.label();
            TimeSlot { key, label }
        })
        .collect()
}
