// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The leader-facing assignment page.
//!
//! Interaction model: badge clicks toggle a single assignment; cell
//! clicks accumulate a multi-select, and quick-assign places one person
//! into every selected slot at once. Nothing is persisted until the
//! leader saves the week, and the render model carries the dirty flag so
//! the page can say so.

use crate::notice::{GridPhase, Notice};
use shift_roster::{AssignmentModel, AvailabilityRoster, Person, StatusController};
use shift_roster_api::{ApiError, ScheduleBackend, translate_domain_error};
use shift_roster_domain::{
    Employee, ScheduleStatus, SlotId, Team, TimeSlot, WeekStart, build_time_slots,
};
use shift_roster_view::{ColorAssigner, CompanyView, company_overview};
use std::collections::BTreeSet;
use time::Date;
use tracing::{info, warn};

/// One person badge inside a grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// The person this badge represents.
    pub person: Person,
    /// Whether the person is currently assigned to the slot.
    pub assigned: bool,
    /// Assigned without having declared availability (leader override,
    /// preserved but flagged).
    pub anomaly: bool,
    /// Stable palette index for this person.
    pub color_index: usize,
}

/// One cell of the leader grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCell {
    /// The addressable slot this cell represents.
    pub slot: SlotId,
    /// Unique assigned-person count.
    pub assigned_count: usize,
    /// Unique available-person count.
    pub available_count: usize,
    /// Whether the slot is in the quick-assign selection.
    pub selected: bool,
    /// Person badges: available people first, then override anomalies.
    pub badges: Vec<BadgeView>,
}

/// One hour row of the leader grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    /// The hour-range label.
    pub label: String,
    /// Mon-Sun cells for this hour.
    pub cells: Vec<AdminCell>,
}

/// One line of the slot detail editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    /// The person listed for the slot.
    pub person: Person,
    /// Whether the person is currently assigned.
    pub assigned: bool,
    /// Assigned without declared availability.
    pub anomaly: bool,
}

/// The detail editor for a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDetailView {
    /// The slot under edit.
    pub slot: SlotId,
    /// Title, e.g. `Slot 09:00 - 10:00 on 06/01/2025`.
    pub title: String,
    /// Everyone relevant to the slot with their assignment state.
    pub entries: Vec<DetailEntry>,
}

/// The render model for the leader page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGridView {
    /// The displayed week.
    pub week_start: WeekStart,
    /// The displayed team.
    pub team: Team,
    /// The 7 column dates.
    pub dates: Vec<Date>,
    /// The page load phase.
    pub phase: GridPhase,
    /// The week's lock status.
    pub status: ScheduleStatus,
    /// Who finalized the week, when known.
    pub locked_by: Option<String>,
    /// Whether in-memory assignments have not been saved yet.
    pub dirty: bool,
    /// Number of slots in the quick-assign selection.
    pub selection_count: usize,
    /// Hour rows.
    pub rows: Vec<AdminRow>,
    /// The current status line.
    pub notice: Option<Notice>,
    /// The finalized summary panel for this team.
    pub summary: CompanyView,
}

/// Orchestrates the roster, assignments, and lock state for a leader.
#[derive(Debug)]
pub struct AdminGridController<B> {
    backend: B,
    leader: Employee,
    week_start: WeekStart,
    team: Team,
    dates: Vec<Date>,
    slots: Vec<TimeSlot>,
    phase: GridPhase,
    roster: AvailabilityRoster,
    assignments: AssignmentModel,
    lock: StatusController,
    selection: BTreeSet<SlotId>,
    colors: ColorAssigner,
    save_in_flight: bool,
    notice: Option<Notice>,
}

impl<B: ScheduleBackend> AdminGridController<B> {
    /// Builds a fresh controller for one (week, team) selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the week cannot be expanded into dates.
    pub fn new(
        backend: B,
        leader: Employee,
        week_start: WeekStart,
        team: Team,
    ) -> Result<Self, ApiError> {
        let dates: Vec<Date> = week_start.dates().map_err(translate_domain_error)?;
        Ok(Self {
            backend,
            leader,
            week_start,
            team,
            dates,
            slots: build_time_slots(team),
            phase: GridPhase::Idle,
            roster: AvailabilityRoster::new(),
            assignments: AssignmentModel::new(week_start, team),
            lock: StatusController::new(week_start, team),
            selection: BTreeSet::new(),
            colors: ColorAssigner::new(),
            save_in_flight: false,
            notice: None,
        })
    }

    /// Re-enters the page for a different (week, team), dropping all
    /// loaded state. The color session survives so people keep their
    /// colors while the leader flips between weeks.
    ///
    /// # Errors
    ///
    /// Returns an error if the week cannot be expanded into dates.
    pub fn select(&mut self, week_start: WeekStart, team: Team) -> Result<(), ApiError> {
        self.dates = week_start.dates().map_err(translate_domain_error)?;
        self.week_start = week_start;
        self.team = team;
        self.slots = build_time_slots(team);
        self.phase = GridPhase::Idle;
        self.roster = AvailabilityRoster::new();
        self.assignments = AssignmentModel::new(week_start, team);
        self.lock = StatusController::new(week_start, team);
        self.selection.clear();
        self.save_in_flight = false;
        self.notice = None;
        Ok(())
    }

    /// Returns the displayed week.
    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns the displayed team.
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Returns the assignment model (shared by every render surface).
    #[must_use]
    pub const fn assignments(&self) -> &AssignmentModel {
        &self.assignments
    }

    /// Loads the team roster, current schedule, and lock record in
    /// parallel.
    ///
    /// Failure surfaces a retryable notice and leaves the previously
    /// built (possibly empty) grid in place.
    pub async fn load(&mut self) {
        self.phase = GridPhase::Loading;
        self.notice = Some(Notice::info("Loading data..."));

        let (roster, schedule, meta) = futures::join!(
            self.backend.get_all_availability(self.week_start, self.team),
            self.backend.get_schedule(self.week_start, self.team),
            self.backend.get_schedule_meta(self.week_start, self.team),
        );

        let mut failed: bool = false;
        match roster {
            Ok(roster) => self.roster = roster,
            Err(err) => {
                warn!(week = %self.week_start, team = %self.team, %err, "roster load failed");
                failed = true;
            }
        }
        match schedule {
            Ok(rows) => self.assignments.replace_from(rows),
            Err(err) => {
                warn!(week = %self.week_start, team = %self.team, %err, "schedule load failed");
                failed = true;
            }
        }
        match meta {
            Ok(meta) => self.lock.apply_meta(meta),
            Err(err) => {
                warn!(week = %self.week_start, team = %self.team, %err, "meta load failed");
                failed = true;
            }
        }

        self.phase = GridPhase::Loaded;
        self.notice = if failed {
            Some(Notice::error("Connection problem. Please try again."))
        } else {
            info!(week = %self.week_start, team = %self.team, "leader grid loaded");
            Some(Notice::info("Loaded availability and current schedule."))
        };
    }

    /// Flips one person's assignment on one slot (badge click).
    ///
    /// Returns the new membership so any open detail editor on the same
    /// slot can sync its checkbox.
    pub fn toggle_badge(&mut self, slot: SlotId, person: &Person) -> bool {
        let now_assigned: bool = self.assignments.toggle_single(slot, person);
        self.notice = Some(Notice::info(
            "Assignment updated in memory. Remember to save this week.",
        ));
        now_assigned
    }

    /// Adds or removes a slot from the quick-assign selection.
    ///
    /// Returns whether the slot is now selected.
    pub fn toggle_select(&mut self, slot: SlotId) -> bool {
        if self.selection.remove(&slot) {
            false
        } else {
            self.selection.insert(slot);
            true
        }
    }

    /// Clears the quick-assign selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<SlotId> {
        &self.selection
    }

    /// Assigns one person to every selected slot, then clears the
    /// selection.
    ///
    /// Idempotent per slot; returns the count actually added.
    pub fn quick_assign(&mut self, person: &Person) -> usize {
        let added: usize = self.assignments.bulk_assign(&self.selection, person);
        self.selection.clear();
        self.notice = Some(Notice::info(&format!(
            "Assigned {} to {added} slot(s). Remember to save this week.",
            person.name
        )));
        added
    }

    /// Full-replace-saves the week's assignments to the backend.
    ///
    /// # Errors
    ///
    /// Returns the translated backend failure; in-memory state is kept
    /// so the leader can retry.
    pub async fn save_week(&mut self) -> Result<(), ApiError> {
        if self.save_in_flight {
            let api = ApiError::InvalidInput {
                field: String::from("save"),
                message: String::from("a save is already in flight"),
            };
            self.notice = Some(Notice::from_api_error(&api));
            return Err(api);
        }

        let rows: Vec<(SlotId, Person)> = self.assignments.save_rows();
        self.save_in_flight = true;
        self.notice = Some(Notice::info("Saving the week's schedule..."));
        let result = self
            .backend
            .save_schedule(self.week_start, self.team, &rows)
            .await;
        self.save_in_flight = false;

        match result {
            Ok(()) => {
                self.assignments.mark_saved();
                info!(week = %self.week_start, team = %self.team, rows = rows.len(), "schedule saved");
                self.notice = Some(Notice::info("Week schedule saved."));
                Ok(())
            }
            Err(err) => {
                let api: ApiError = err.into();
                self.notice = Some(Notice::from_api_error(&api));
                Err(api)
            }
        }
    }

    /// Requests a `draft ↔ final` transition, stamping the acting
    /// leader.
    ///
    /// On success the returned record replaces local state and the
    /// finalized summary panel re-renders from it.
    ///
    /// # Errors
    ///
    /// Returns the translated backend failure; local lock state is left
    /// unchanged.
    pub async fn toggle_lock(&mut self, note: &str) -> Result<ScheduleStatus, ApiError> {
        let target: ScheduleStatus = self.lock.target_status();
        let result = self
            .backend
            .set_schedule_status(self.week_start, self.team, target, &self.leader, note)
            .await;

        match result {
            Ok(meta) => {
                info!(week = %self.week_start, team = %self.team, status = %meta.status, "lock toggled");
                self.lock.apply_meta(meta);
                let text: &str = if self.lock.is_final() {
                    "Week finalized. Employees now see the published schedule."
                } else {
                    "Week reverted to draft. Employees may edit availability again."
                };
                self.notice = Some(Notice::info(text));
                Ok(self.lock.status())
            }
            Err(err) => {
                let api: ApiError = err.into();
                self.notice = Some(Notice::from_api_error(&api));
                Err(api)
            }
        }
    }

    /// Builds the detail editor view for one slot.
    ///
    /// Lists available people with their assignment state, then any
    /// assigned person who never declared availability (override
    /// anomaly). Because entries derive from the shared model, a badge
    /// toggle elsewhere is reflected here on the next render.
    #[must_use]
    pub fn slot_detail(&self, slot: SlotId) -> SlotDetailView {
        let entries: Vec<DetailEntry> = collect_entries(&self.roster, &self.assignments, slot);
        let date: Date = slot.date;
        let title: String = format!(
            "Slot {} on {:02}/{:02}/{:04}",
            slot.shift.label(),
            date.day(),
            u8::from(date.month()),
            date.year()
        );
        SlotDetailView {
            slot,
            title,
            entries,
        }
    }

    /// Projects the controller state into the page render model.
    ///
    /// Takes `&mut self` because first-appearance color assignment is
    /// part of the render session.
    pub fn render(&mut self) -> AdminGridView {
        let mut rows: Vec<AdminRow> = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            let mut cells: Vec<AdminCell> = Vec::with_capacity(self.dates.len());
            for &date in &self.dates {
                let slot_id = SlotId::new(date, slot.key);
                let entries: Vec<DetailEntry> =
                    collect_entries(&self.roster, &self.assignments, slot_id);
                let mut badges: Vec<BadgeView> = Vec::with_capacity(entries.len());
                for entry in entries {
                    badges.push(BadgeView {
                        color_index: self.colors.assign(&entry.person.email),
                        person: entry.person,
                        assigned: entry.assigned,
                        anomaly: entry.anomaly,
                    });
                }
                cells.push(AdminCell {
                    slot: slot_id,
                    assigned_count: self.assignments.assigned_count(slot_id),
                    available_count: self.roster.available_count(slot_id),
                    selected: self.selection.contains(&slot_id),
                    badges,
                });
            }
            rows.push(AdminRow {
                label: slot.label.clone(),
                cells,
            });
        }

        let summary: CompanyView = company_overview(
            self.week_start,
            &[(self.lock.status(), &self.assignments)],
            Some(self.team),
            &mut self.colors,
        );

        AdminGridView {
            week_start: self.week_start,
            team: self.team,
            dates: self.dates.clone(),
            phase: self.phase,
            status: self.lock.status(),
            locked_by: self.lock.meta().locked_by_label(),
            dirty: self.assignments.is_dirty(),
            selection_count: self.selection.len(),
            rows,
            notice: self.notice.clone(),
            summary,
        }
    }
}

/// Available people with assignment state, then override anomalies.
fn collect_entries(
    roster: &AvailabilityRoster,
    assignments: &AssignmentModel,
    slot: SlotId,
) -> Vec<DetailEntry> {
    let mut entries: Vec<DetailEntry> = roster
        .available(slot)
        .iter()
        .map(|person| DetailEntry {
            assigned: assignments.is_assigned(slot, &person.email),
            anomaly: false,
            person: person.clone(),
        })
        .collect();

    for person in assignments.assigned(slot) {
        if !roster.is_available(slot, &person.email) {
            entries.push(DetailEntry {
                person: person.clone(),
                assigned: true,
                anomaly: true,
            });
        }
    }
    entries
}
