// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_domain::{EmailKey, EmploymentType, SlotId, Team, WeekStart};
use std::collections::{BTreeMap, BTreeSet};

/// One person attached to a slot, either as available or as assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// The person's email (normalized, case-insensitive key).
    pub email: EmailKey,
    /// The person's display name.
    pub name: String,
    /// The team the row was recorded under.
    pub team: Team,
    /// Employment type, when the backend includes it. Absent means
    /// part-time (the identity store omits the field for part-timers).
    pub employment_type: Option<EmploymentType>,
}

impl Person {
    /// Creates a new `Person` without employment information.
    #[must_use]
    pub const fn new(email: EmailKey, name: String, team: Team) -> Self {
        Self {
            email,
            name,
            team,
            employment_type: None,
        }
    }

    /// Returns whether this person counts as part-time.
    #[must_use]
    pub fn is_parttime(&self) -> bool {
        self.employment_type != Some(EmploymentType::Fulltime)
    }
}

/// Read-only per-slot listing of who declared themselves free.
///
/// Built once per load from `getAllAvailability` rows; the leader page
/// renders counts and badges from it but never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityRoster {
    /// Slot → unique (by email) available people.
    by_slot: BTreeMap<SlotId, Vec<Person>>,
}

impl AvailabilityRoster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            by_slot: BTreeMap::new(),
        }
    }

    /// Builds a roster from decoded rows, deduplicating by email per slot.
    #[must_use]
    pub fn from_rows<I: IntoIterator<Item = (SlotId, Person)>>(rows: I) -> Self {
        let mut roster: Self = Self::new();
        for (slot, person) in rows {
            insert_unique(&mut roster.by_slot, slot, person);
        }
        roster
    }

    /// Returns the available people for a slot, in insertion order.
    #[must_use]
    pub fn available(&self, slot: SlotId) -> &[Person] {
        self.by_slot.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// Returns the unique available-person count for a slot.
    #[must_use]
    pub fn available_count(&self, slot: SlotId) -> usize {
        self.available(slot).len()
    }

    /// Returns whether an email declared itself free for a slot.
    #[must_use]
    pub fn is_available(&self, slot: SlotId, email: &EmailKey) -> bool {
        self.available(slot).iter().any(|p| &p.email == email)
    }
}

/// The leader's shift placements for one (week, team).
///
/// Slot → unique (by email) assigned people. All mutation is in-memory
/// until the leader explicitly saves the week; the dirty flag lets the
/// UI warn that single toggles are not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentModel {
    /// The week this model is scoped to.
    week_start: WeekStart,
    /// The team this model is scoped to.
    team: Team,
    /// Slot → assigned people, unique per slot by email.
    by_slot: BTreeMap<SlotId, Vec<Person>>,
    /// Bumped on every mutation so every dependent surface re-renders.
    revision: u64,
    /// Whether in-memory state differs from the last load/save.
    dirty: bool,
}

impl AssignmentModel {
    /// Creates an empty model for a (week, team).
    #[must_use]
    pub const fn new(week_start: WeekStart, team: Team) -> Self {
        Self {
            week_start,
            team,
            by_slot: BTreeMap::new(),
            revision: 0,
            dirty: false,
        }
    }

    /// Returns the week this model is scoped to.
    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns the team this model is scoped to.
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Wholesale-replaces assignments from freshly decoded backend rows.
    ///
    /// Deduplicates by email per slot and clears the dirty flag.
    pub fn replace_from<I: IntoIterator<Item = (SlotId, Person)>>(&mut self, rows: I) {
        self.by_slot.clear();
        for (slot, person) in rows {
            insert_unique(&mut self.by_slot, slot, person);
        }
        self.dirty = false;
        self.revision += 1;
    }

    /// Returns the assigned people for a slot.
    #[must_use]
    pub fn assigned(&self, slot: SlotId) -> &[Person] {
        self.by_slot.get(&slot).map_or(&[], Vec::as_slice)
    }

    /// Returns the unique assigned-person count for a slot.
    #[must_use]
    pub fn assigned_count(&self, slot: SlotId) -> usize {
        self.assigned(slot).len()
    }

    /// Returns whether an email is assigned to a slot (case-insensitive).
    #[must_use]
    pub fn is_assigned(&self, slot: SlotId, email: &EmailKey) -> bool {
        self.assigned(slot).iter().any(|p| &p.email == email)
    }

    /// Flips one person's assignment on one slot.
    ///
    /// Returns the new membership so callers can sync any duplicate UI
    /// representation of the same slot (badge vs. detail editor).
    /// Toggling the same pair twice restores the original state.
    pub fn toggle_single(&mut self, slot: SlotId, person: &Person) -> bool {
        let list: &mut Vec<Person> = self.by_slot.entry(slot).or_default();
        let now_assigned: bool =
            if let Some(idx) = list.iter().position(|p| p.email == person.email) {
                list.remove(idx);
                false
            } else {
                list.push(person.clone());
                true
            };
        if list.is_empty() {
            self.by_slot.remove(&slot);
        }
        self.dirty = true;
        self.revision += 1;
        now_assigned
    }

    /// Assigns one person to every slot in the selection.
    ///
    /// Idempotent: slots already containing the person are skipped, not
    /// duplicated. Returns the count actually added.
    pub fn bulk_assign(&mut self, slots: &BTreeSet<SlotId>, person: &Person) -> usize {
        let mut added: usize = 0;
        for &slot in slots {
            let list: &mut Vec<Person> = self.by_slot.entry(slot).or_default();
            if !list.iter().any(|p| p.email == person.email) {
                list.push(person.clone());
                added += 1;
            }
        }
        if added > 0 {
            self.dirty = true;
            self.revision += 1;
        }
        added
    }

    /// Flattens the map into `(slot, person)` rows for a full-replace
    /// save, in deterministic slot order.
    #[must_use]
    pub fn save_rows(&self) -> Vec<(SlotId, Person)> {
        self.by_slot
            .iter()
            .flat_map(|(slot, people)| people.iter().map(|p| (*slot, p.clone())))
            .collect()
    }

    /// Iterates all `(slot, people)` entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotId, &Vec<Person>)> {
        self.by_slot.iter()
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

/// Pushes a person onto a slot's list unless the email is already there.
fn insert_unique(map: &mut BTreeMap<SlotId, Vec<Person>>, slot: SlotId, person: Person) {
    let list: &mut Vec<Person> = map.entry(slot).or_default();
    if !list.iter().any(|p| p.email == person.email) {
        list.push(person);
    }
}
