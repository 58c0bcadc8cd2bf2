// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::status::EditGate;
use shift_roster_domain::{SlotId, WeekStart};
use std::collections::BTreeSet;

/// One employee's declared free slots for one week.
///
/// Purely in-memory; nothing here touches the network. Saving always
/// transmits the full current set: the backend replaces the employee's
/// entire week rather than merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityModel {
    /// The week this model is scoped to.
    week_start: WeekStart,
    /// The slots the employee marked free.
    slots: BTreeSet<SlotId>,
    /// Bumped on every accepted mutation so render surfaces can re-derive.
    revision: u64,
    /// Whether in-memory state differs from the last load/save.
    dirty: bool,
}

impl AvailabilityModel {
    /// Creates an empty model for a week.
    #[must_use]
    pub const fn new(week_start: WeekStart) -> Self {
        Self {
            week_start,
            slots: BTreeSet::new(),
            revision: 0,
            dirty: false,
        }
    }

    /// Returns the week this model is scoped to.
    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Wholesale-replaces the set from freshly decoded backend rows.
    ///
    /// Clears the dirty flag: the model now mirrors the backend.
    pub fn replace_from<I: IntoIterator<Item = SlotId>>(&mut self, slots: I) {
        self.slots = slots.into_iter().collect();
        self.dirty = false;
        self.revision += 1;
    }

    /// Returns whether a slot is marked free.
    #[must_use]
    pub fn contains(&self, slot: SlotId) -> bool {
        self.slots.contains(&slot)
    }

    /// Returns the current free-slot set in deterministic order.
    #[must_use]
    pub const fn slots(&self) -> &BTreeSet<SlotId> {
        &self.slots
    }

    /// Returns the number of marked slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether no slots are marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Flips a slot's membership in memory and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns the gate's rejection (week finalized, or employee
    /// ineligible) with the model left unchanged.
    pub fn toggle(&mut self, slot: SlotId, gate: &EditGate) -> Result<bool, CoreError> {
        gate.permit()?;
        let now_free: bool = if self.slots.remove(&slot) {
            false
        } else {
            self.slots.insert(slot);
            true
        };
        self.dirty = true;
        self.revision += 1;
        Ok(now_free)
    }

    /// Returns the full current set for a full-replace save.
    ///
    /// # Errors
    ///
    /// Returns the gate's rejection; an ineligible or locked-out save
    /// must never reach the network.
    pub fn snapshot_for_save(&self, gate: &EditGate) -> Result<Vec<SlotId>, CoreError> {
        gate.permit()?;
        Ok(self.slots.iter().copied().collect())
    }

    /// Marks the in-memory state as persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Returns whether there are unsaved changes.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the mutation revision counter.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}
