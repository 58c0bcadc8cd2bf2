// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The self-service availability page.
//!
//! One controller instance per (employee, week) selection; all state
//! lives in the struct so nothing leaks between selections. Rendering
//! produces plain view structs, never markup.

use crate::notice::{GridPhase, Notice};
use shift_roster::{AssignmentModel, AvailabilityModel, EditGate, StatusController};
use shift_roster_api::{ApiError, ScheduleBackend, translate_core_error, translate_domain_error};
use shift_roster_domain::{
    Employee, ScheduleStatus, SlotId, TimeSlot, WeekStart, build_time_slots, can_use_availability,
};
use shift_roster_view::{FinalizedSchedule, personal_schedule};
use time::Date;
use tracing::{info, warn};

/// One cell of the employee grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeCell {
    /// The addressable slot this cell represents.
    pub slot: SlotId,
    /// Whether the employee has marked this slot free.
    pub available: bool,
}

/// One hour row of the employee grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    /// The hour-range label, e.g. `08:00 - 09:00`.
    pub label: String,
    /// Mon-Sun cells for this hour.
    pub cells: Vec<EmployeeCell>,
}

/// The render model for the self-service page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeGridView {
    /// The displayed week.
    pub week_start: WeekStart,
    /// The 7 column dates.
    pub dates: Vec<Date>,
    /// The page load phase.
    pub phase: GridPhase,
    /// Whether this employee may use availability at all (role rule).
    pub eligible: bool,
    /// Whether cells are enabled (eligible and week not finalized).
    pub can_edit: bool,
    /// Whether in-memory toggles have not been saved yet.
    pub dirty: bool,
    /// The week's lock status.
    pub status: ScheduleStatus,
    /// Who finalized the week, when known.
    pub locked_by: Option<String>,
    /// Hour rows, empty until the grid is built.
    pub rows: Vec<EmployeeRow>,
    /// The current status line.
    pub notice: Option<Notice>,
    /// The personal finalized view; the sole surface for ineligible
    /// staff.
    pub finalized: FinalizedSchedule,
}

/// Orchestrates availability, lock state, and the finalized view for one
/// employee.
#[derive(Debug)]
pub struct EmployeeGridController<B> {
    backend: B,
    employee: Employee,
    week_start: WeekStart,
    dates: Vec<Date>,
    slots: Vec<TimeSlot>,
    phase: GridPhase,
    availability: AvailabilityModel,
    lock: StatusController,
    schedule: AssignmentModel,
    save_in_flight: bool,
    notice: Option<Notice>,
}

impl<B: ScheduleBackend> EmployeeGridController<B> {
    /// Builds a fresh controller for one (employee, week) selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the week cannot be expanded into dates.
    pub fn new(backend: B, employee: Employee, week_start: WeekStart) -> Result<Self, ApiError> {
        let dates: Vec<Date> = week_start.dates().map_err(translate_domain_error)?;
        let slots: Vec<TimeSlot> = build_time_slots(employee.team);
        let team = employee.team;
        Ok(Self {
            backend,
            availability: AvailabilityModel::new(week_start),
            lock: StatusController::new(week_start, team),
            schedule: AssignmentModel::new(week_start, team),
            employee,
            week_start,
            dates,
            slots,
            phase: GridPhase::Idle,
            save_in_flight: false,
            notice: None,
        })
    }

    /// Re-enters the page for a different week, dropping all loaded
    /// state.
    ///
    /// # Errors
    ///
    /// Returns an error if the week cannot be expanded into dates.
    pub fn select_week(&mut self, week_start: WeekStart) -> Result<(), ApiError> {
        self.dates = week_start.dates().map_err(translate_domain_error)?;
        self.week_start = week_start;
        self.availability = AvailabilityModel::new(week_start);
        self.lock = StatusController::new(week_start, self.employee.team);
        self.schedule = AssignmentModel::new(week_start, self.employee.team);
        self.phase = GridPhase::Idle;
        self.save_in_flight = false;
        self.notice = None;
        Ok(())
    }

    /// Returns the employee this page is scoped to.
    #[must_use]
    pub const fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Returns the displayed week.
    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Loads availability, lock record, and the own-team schedule in
    /// parallel.
    ///
    /// Transport failure on any fetch surfaces a retryable notice and
    /// leaves that fetch's previously-rendered state in place; the grid
    /// stays navigable.
    pub async fn load(&mut self) {
        self.phase = GridPhase::Loading;
        self.notice = Some(Notice::info("Loading availability..."));

        let (availability, meta, schedule) = futures::join!(
            self.backend
                .get_availability(&self.employee.email, self.week_start),
            self.backend
                .get_schedule_meta(self.week_start, self.employee.team),
            self.backend.get_schedule(self.week_start, self.employee.team),
        );

        let mut failed: bool = false;
        match meta {
            Ok(meta) => self.lock.apply_meta(meta),
            Err(err) => {
                warn!(week = %self.week_start, %err, "schedule meta load failed");
                failed = true;
            }
        }
        match availability {
            Ok(slots) => self.availability.replace_from(slots),
            Err(err) => {
                // Keep whatever was rendered before the failed refresh.
                warn!(week = %self.week_start, %err, "availability load failed");
                failed = true;
            }
        }
        match schedule {
            Ok(rows) => self.schedule.replace_from(rows),
            Err(err) => {
                warn!(week = %self.week_start, %err, "schedule load failed");
                failed = true;
            }
        }

        self.phase = GridPhase::Loaded;
        self.notice = if failed {
            Some(Notice::error("Connection problem. Please try again."))
        } else {
            info!(week = %self.week_start, slots = self.availability.len(), "availability loaded");
            Some(Notice::info("Availability loaded."))
        };
    }

    /// Whether the grid is editable: eligible role and week not final.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.lock.gate_for(&self.employee).is_allowed()
    }

    /// Flips one cell in memory.
    ///
    /// # Errors
    ///
    /// Returns the business reason when the week is finalized or the
    /// employee is ineligible; the model is left unchanged.
    pub fn toggle(&mut self, slot: SlotId) -> Result<bool, ApiError> {
        let gate: EditGate = self.lock.gate_for(&self.employee);
        match self.availability.toggle(slot, &gate) {
            Ok(now_free) => {
                self.notice = Some(Notice::info(
                    "Updated in memory. Remember to save this week.",
                ));
                Ok(now_free)
            }
            Err(err) => {
                let api: ApiError = translate_core_error(err);
                self.notice = Some(Notice::from_api_error(&api));
                Err(api)
            }
        }
    }

    /// Full-replace-saves the current set to the backend.
    ///
    /// The save control is disabled while a save is in flight so two
    /// overlapping saves cannot race each other's payloads.
    ///
    /// # Errors
    ///
    /// Returns the gate rejection before any network call, or the
    /// translated backend failure afterwards.
    pub async fn save(&mut self) -> Result<(), ApiError> {
        if self.save_in_flight {
            let api = ApiError::InvalidInput {
                field: String::from("save"),
                message: String::from("a save is already in flight"),
            };
            self.notice = Some(Notice::from_api_error(&api));
            return Err(api);
        }

        let gate: EditGate = self.lock.gate_for(&self.employee);
        let snapshot: Vec<SlotId> = match self.availability.snapshot_for_save(&gate) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let api: ApiError = translate_core_error(err);
                self.notice = Some(Notice::from_api_error(&api));
                return Err(api);
            }
        };

        self.save_in_flight = true;
        self.notice = Some(Notice::info("Saving..."));
        let result = self
            .backend
            .save_availability(&self.employee, self.week_start, &snapshot)
            .await;
        self.save_in_flight = false;

        match result {
            Ok(()) => {
                self.availability.mark_saved();
                info!(week = %self.week_start, slots = snapshot.len(), "availability saved");
                self.notice = Some(Notice::info("Availability saved for this week."));
                Ok(())
            }
            Err(err) => {
                let api: ApiError = err.into();
                self.notice = Some(Notice::from_api_error(&api));
                Err(api)
            }
        }
    }

    /// The personal finalized view, always rendered regardless of edit
    /// eligibility.
    #[must_use]
    pub fn finalized(&self) -> FinalizedSchedule {
        personal_schedule(
            self.lock.status(),
            self.week_start,
            &self.schedule,
            &self.employee.email,
        )
    }

    /// Projects the controller state into the page render model.
    #[must_use]
    pub fn render(&self) -> EmployeeGridView {
        let can_edit: bool = self.can_edit();
        let rows: Vec<EmployeeRow> = self
            .slots
            .iter()
            .map(|slot| EmployeeRow {
                label: slot.label.clone(),
                cells: self
                    .dates
                    .iter()
                    .map(|&date| {
                        let slot_id = SlotId::new(date, slot.key);
                        EmployeeCell {
                            slot: slot_id,
                            available: self.availability.contains(slot_id),
                        }
                    })
                    .collect(),
            })
            .collect();

        EmployeeGridView {
            week_start: self.week_start,
            dates: self.dates.clone(),
            phase: self.phase,
            eligible: can_use_availability(&self.employee),
            can_edit,
            dirty: self.availability.is_dirty(),
            status: self.lock.status(),
            locked_by: self.lock.meta().locked_by_label(),
            rows,
            notice: self.notice.clone(),
            finalized: self.finalized(),
        }
    }
}
