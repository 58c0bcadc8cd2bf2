// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::merge::{HourRange, merge_shift_ranges};
use shift_roster::AssignmentModel;
use shift_roster_domain::{EmailKey, ScheduleStatus, ShiftKey, WeekStart};
use std::collections::BTreeMap;
use time::Date;

/// One working day in an employee's finalized week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// The calendar date.
    pub date: Date,
    /// Merged contiguous hour ranges assigned on this date.
    pub ranges: Vec<HourRange>,
    /// Total assigned hours on this date.
    pub hours: u16,
}

/// An employee's finalized week at a glance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalSummary {
    /// The week this summary covers.
    pub week_start: WeekStart,
    /// Working days in date order; days without assignments are omitted.
    pub days: Vec<DaySummary>,
    /// Total assigned hours across the week.
    pub total_hours: u16,
    /// Number of distinct working days.
    pub working_days: usize,
}

/// The personal finalized view, gated on the week's lock status.
///
/// A draft week always renders the explicit `NotFinalized` marker,
/// never partial or stale content from an earlier final state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizedSchedule {
    /// The week has not been finalized yet; nothing is authoritative.
    NotFinalized,
    /// The week is final and this summary is the published schedule.
    Ready(PersonalSummary),
}

/// Projects the assignment model into one employee's finalized summary.
///
/// Rows are filtered to the employee by case-insensitive email, grouped
/// by date, and merged into contiguous ranges per day.
#[must_use]
pub fn personal_schedule(
    status: ScheduleStatus,
    week_start: WeekStart,
    assignments: &AssignmentModel,
    email: &EmailKey,
) -> FinalizedSchedule {
    if !status.is_final() {
        return FinalizedSchedule::NotFinalized;
    }

    let mut keys_by_date: BTreeMap<Date, Vec<ShiftKey>> = BTreeMap::new();
    for (slot, people) in assignments.iter() {
        if people.iter().any(|p| &p.email == email) {
            keys_by_date.entry(slot.date).or_default().push(slot.shift);
        }
    }

    let days: Vec<DaySummary> = keys_by_date
        .into_iter()
        .map(|(date, keys)| {
            let ranges: Vec<HourRange> = merge_shift_ranges(&keys);
            let hours: u16 = ranges.iter().map(HourRange::hours).sum();
            DaySummary {
                date,
                ranges,
                hours,
            }
        })
        .collect();

    let total_hours: u16 = days.iter().map(|d| d.hours).sum();
    let working_days: usize = days.len();

    FinalizedSchedule::Ready(PersonalSummary {
        week_start,
        days,
        total_hours,
        working_days,
    })
}
