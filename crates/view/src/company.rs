// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster::AssignmentModel;
use shift_roster_domain::{EmailKey, ScheduleStatus, ShiftKey, Team, WeekStart};
use std::collections::{BTreeMap, HashMap};
use time::Date;

/// Number of distinct person colors before the palette cycles.
pub const PALETTE_SIZE: usize = 8;

/// Stable per-email palette assignment within one rendering session.
///
/// Exact colors are presentation; the contract is that the same email
/// always maps to the same index for the lifetime of the assigner. New
/// emails take the next index by first appearance, wrapping at
/// [`PALETTE_SIZE`].
#[derive(Debug, Clone, Default)]
pub struct ColorAssigner {
    /// Normalized email → palette index.
    by_email: HashMap<String, usize>,
}

impl ColorAssigner {
    /// Creates an empty assigner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_email: HashMap::new(),
        }
    }

    /// Returns the palette index for an email, assigning one on first
    /// appearance.
    pub fn assign(&mut self, email: &EmailKey) -> usize {
        let next: usize = self.by_email.len() % PALETTE_SIZE;
        *self
            .by_email
            .entry(email.value().to_string())
            .or_insert(next)
    }
}

/// One person's tag in the company overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonTag {
    /// The person's display name.
    pub name: String,
    /// The person's email.
    pub email: EmailKey,
    /// The team whose schedule contributed this tag.
    pub team: Team,
    /// Stable palette index for this person.
    pub color_index: usize,
}

/// One hour slot within one day of the company overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySlot {
    /// The hour-range key.
    pub shift: ShiftKey,
    /// Everyone assigned in this slot, one tag per person.
    pub people: Vec<PersonTag>,
}

/// One day of the company overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDay {
    /// The calendar date.
    pub date: Date,
    /// Occupied slots in hour order.
    pub slots: Vec<CompanySlot>,
}

/// The company-wide part-time shift overview for one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyOverview {
    /// The week this overview covers.
    pub week_start: WeekStart,
    /// Days carrying at least one assignment, in date order.
    pub days: Vec<CompanyDay>,
}

/// The company finalized view, gated on lock status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyView {
    /// No requested team has finalized this week yet.
    NotFinalized,
    /// At least one team is final; the overview covers the final ones.
    Ready(CompanyOverview),
}

/// Builds the company overview from per-team assignment models.
///
/// Only teams whose status is `Final` contribute rows; a week where no
/// team has finalized renders the explicit `NotFinalized` marker. The
/// overview is restricted to part-time staff: full-time hours are not
/// part of the "who's on part-time shift" summary. This is a business
/// rule, not a technical one.
#[must_use]
pub fn company_overview(
    week_start: WeekStart,
    sections: &[(ScheduleStatus, &AssignmentModel)],
    team_filter: Option<Team>,
    colors: &mut ColorAssigner,
) -> CompanyView {
    let finalized: Vec<&AssignmentModel> = sections
        .iter()
        .filter(|(status, model)| {
            status.is_final() && team_filter.is_none_or(|team| model.team() == team)
        })
        .map(|(_, model)| *model)
        .collect();

    if finalized.is_empty() {
        return CompanyView::NotFinalized;
    }

    let mut grouped: BTreeMap<Date, BTreeMap<ShiftKey, Vec<PersonTag>>> = BTreeMap::new();
    for model in finalized {
        for (slot, people) in model.iter() {
            for person in people.iter().filter(|p| p.is_parttime()) {
                let color_index: usize = colors.assign(&person.email);
                grouped
                    .entry(slot.date)
                    .or_default()
                    .entry(slot.shift)
                    .or_default()
                    .push(PersonTag {
                        name: person.name.clone(),
                        email: person.email.clone(),
                        team: person.team,
                        color_index,
                    });
            }
        }
    }

    let days: Vec<CompanyDay> = grouped
        .into_iter()
        .filter_map(|(date, slots)| {
            let slots: Vec<CompanySlot> = slots
                .into_iter()
                .filter(|(_, people)| !people.is_empty())
                .map(|(shift, people)| CompanySlot { shift, people })
                .collect();
            (!slots.is_empty()).then_some(CompanyDay { date, slots })
        })
        .collect();

    CompanyView::Ready(CompanyOverview { week_start, days })
}
