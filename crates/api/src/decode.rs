// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ingestion boundary: loose wire rows become validated domain values.
//!
//! Normalization happens here and only here. Shift keys are padded,
//! dates truncated to their `YYYY-MM-DD` prefix, emails lowercased.
//! Malformed rows are dropped per-record with a warning rather than
//! failing the whole load: staff need to see *something* even when the
//! sheet has drifted.

use crate::wire::{AvailabilityItem, MetaItem, PersonSlotItem, ScheduleRowItem};
use shift_roster::{AvailabilityRoster, Person};
use shift_roster_domain::{
    DomainError, EmailKey, EmploymentType, ScheduleMeta, ScheduleStatus, ShiftKey, SlotId, Team,
    parse_iso_date,
};
use std::collections::BTreeSet;
use tracing::warn;

/// Normalizes one raw `(date, shift)` pair into a slot identifier.
///
/// The date is trimmed and truncated to its first 10 characters (the
/// backend occasionally returns full timestamps); the shift key is
/// padded to canonical `HH-HH` form.
///
/// # Errors
///
/// Returns the underlying parse error for a malformed date or shift.
pub fn slot_from_raw(date_raw: &str, shift_raw: &str) -> Result<SlotId, DomainError> {
    let trimmed: &str = date_raw.trim();
    let date_part: &str = trimmed.get(..10).unwrap_or(trimmed);
    Ok(SlotId::new(
        parse_iso_date(date_part)?,
        ShiftKey::parse(shift_raw)?,
    ))
}

/// Decodes `getAvailability` rows into a free-slot set.
///
/// Malformed rows are dropped silently (logged, not surfaced).
#[must_use]
pub fn availability_set(items: &[AvailabilityItem]) -> BTreeSet<SlotId> {
    items
        .iter()
        .filter_map(|item| match slot_from_raw(&item.date, &item.shift) {
            Ok(slot) => Some(slot),
            Err(err) => {
                warn!(date = %item.date, shift = %item.shift, %err, "dropping malformed availability row");
                None
            }
        })
        .collect()
}

/// Decodes `getAllAvailability` rows into per-slot people rows.
///
/// Rows without an email are useless to the leader grid and are dropped.
/// A missing team falls back to the requested team.
#[must_use]
pub fn roster_rows(items: &[PersonSlotItem], fallback_team: Team) -> Vec<(SlotId, Person)> {
    items
        .iter()
        .filter_map(|item| {
            let slot: SlotId = match slot_from_raw(&item.date, &item.shift) {
                Ok(slot) => slot,
                Err(err) => {
                    warn!(date = %item.date, shift = %item.shift, %err, "dropping malformed availability row");
                    return None;
                }
            };
            let email: EmailKey = EmailKey::new(&item.email);
            if email.is_empty() {
                warn!(date = %item.date, shift = %item.shift, "dropping availability row without email");
                return None;
            }
            let team: Team = if item.team.trim().is_empty() {
                fallback_team
            } else {
                Team::parse_lossy(&item.team)
            };
            Some((slot, Person::new(email, item.name.clone(), team)))
        })
        .collect()
}

/// Builds the read-only availability roster for the leader grid.
#[must_use]
pub fn roster_from_items(items: &[PersonSlotItem], fallback_team: Team) -> AvailabilityRoster {
    AvailabilityRoster::from_rows(roster_rows(items, fallback_team))
}

/// Decodes `getSchedule` rows into per-slot assignment rows.
#[must_use]
pub fn schedule_rows(items: &[ScheduleRowItem], fallback_team: Team) -> Vec<(SlotId, Person)> {
    items
        .iter()
        .filter_map(|item| {
            let slot: SlotId = match slot_from_raw(&item.date, &item.shift) {
                Ok(slot) => slot,
                Err(err) => {
                    warn!(date = %item.date, shift = %item.shift, %err, "dropping malformed schedule row");
                    return None;
                }
            };
            let email: EmailKey = EmailKey::new(&item.email);
            if email.is_empty() {
                warn!(date = %item.date, shift = %item.shift, "dropping schedule row without email");
                return None;
            }
            let team: Team = if item.team.trim().is_empty() {
                fallback_team
            } else {
                Team::parse_lossy(&item.team)
            };
            let employment_type: Option<EmploymentType> = item
                .employment_type
                .as_deref()
                .map(EmploymentType::parse_lossy);
            let mut person: Person = Person::new(email, item.name.clone(), team);
            person.employment_type = employment_type;
            Some((slot, person))
        })
        .collect()
}

/// Decodes a lock record, defaulting to an unlocked draft.
///
/// Absence of a record is the normal state for a never-locked week. An
/// unrecognized status string is treated the same way rather than
/// poisoning the load.
#[must_use]
pub fn schedule_meta(item: Option<&MetaItem>) -> ScheduleMeta {
    let Some(item) = item else {
        return ScheduleMeta::default();
    };
    let status: ScheduleStatus = match item.status.parse() {
        Ok(status) => status,
        Err(err) => {
            warn!(raw = %item.status, %err, "unrecognized schedule status; treating as draft");
            ScheduleStatus::Draft
        }
    };
    ScheduleMeta {
        status,
        locked_by_email: item.locked_by_email.clone(),
        locked_by_name: item.locked_by_name.clone(),
        locked_at: item.locked_at.clone(),
        note: item.note.clone(),
    }
}
