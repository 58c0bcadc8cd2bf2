// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use shift_roster_domain::{
    DomainError, Employee, ScheduleMeta, ScheduleStatus, Team, WeekStart,
    validate_scheduling_eligibility,
};

/// Tracks the draft/final lock state for one (week, team) pair.
///
/// The controller itself never talks to the network. Callers fetch the
/// authoritative [`ScheduleMeta`] through the backend and feed it in via
/// [`StatusController::apply_meta`]; on a failed transition they simply
/// never call it, which leaves local state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusController {
    /// The week this lock state is scoped to.
    week_start: WeekStart,
    /// The team this lock state is scoped to.
    team: Team,
    /// The last authoritative lock record. Defaults to an unlocked draft.
    meta: ScheduleMeta,
}

impl StatusController {
    /// Creates a controller in the default (draft, unlocked) state.
    #[must_use]
    pub fn new(week_start: WeekStart, team: Team) -> Self {
        Self {
            week_start,
            team,
            meta: ScheduleMeta::default(),
        }
    }

    /// Returns the week this controller is scoped to.
    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns the team this controller is scoped to.
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Returns the current lock record.
    #[must_use]
    pub const fn meta(&self) -> &ScheduleMeta {
        &self.meta
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ScheduleStatus {
        self.meta.status
    }

    /// Returns whether the week is finalized.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        self.meta.status.is_final()
    }

    /// Returns the status a lock toggle would request from the backend.
    #[must_use]
    pub const fn target_status(&self) -> ScheduleStatus {
        self.meta.status.toggled()
    }

    /// Replaces local state with an authoritative backend record.
    pub fn apply_meta(&mut self, meta: ScheduleMeta) {
        self.meta = meta;
    }

    /// Builds the edit gate for one employee under the current lock state.
    ///
    /// The gate combines the role rule (full-time outside CS never edits
    /// availability) with the lock rule (nobody edits a finalized week).
    #[must_use]
    pub fn gate_for(&self, employee: &Employee) -> EditGate {
        if let Err(err) = validate_scheduling_eligibility(employee) {
            return EditGate {
                verdict: Err(CoreError::DomainViolation(err)),
            };
        }
        if self.is_final() {
            return EditGate {
                verdict: Err(CoreError::DomainViolation(DomainError::WeekFinalized {
                    week_start: self.week_start.iso(),
                    locked_by: self.meta.locked_by_label(),
                })),
            };
        }
        EditGate { verdict: Ok(()) }
    }
}

/// The outcome of consulting [`StatusController::gate_for`].
///
/// Mutating availability operations take a gate so the rejection reason
/// travels with the attempt instead of being re-derived at every call
/// site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditGate {
    /// `Ok` when editing is allowed, otherwise the business reason.
    verdict: Result<(), CoreError>,
}

impl EditGate {
    /// Creates a gate that always permits editing. Test seam.
    #[must_use]
    pub const fn open() -> Self {
        Self { verdict: Ok(()) }
    }

    /// Returns whether editing is allowed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        self.verdict.is_ok()
    }

    /// Returns `Ok(())` when editing is allowed.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason when the week is finalized or the
    /// employee is ineligible.
    pub fn permit(&self) -> Result<(), CoreError> {
        self.verdict.clone()
    }
}
