// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The external-collaborator seam.
//!
//! Everything the scheduling core needs from the remote endpoint fits
//! behind this trait: the HTTP transport implements it for production,
//! tests implement it in memory. Implementations are responsible for
//! running [`crate::decode`] so callers only ever see validated domain
//! values.

use crate::error::BackendError;
use shift_roster::{AvailabilityRoster, Person};
use shift_roster_domain::{
    EmailKey, Employee, ScheduleMeta, ScheduleStatus, SlotId, Team, WeekStart,
};
use std::collections::BTreeSet;

/// The remote scheduling endpoint, viewed from the client core.
///
/// Save operations carry full-replace semantics: the backend replaces the
/// addressed scope (employee-week, or week-team) wholesale rather than
/// merging.
#[allow(async_fn_in_trait)] // consumed by single-session controllers, no Send bound needed
pub trait ScheduleBackend {
    /// Fetches one employee's free-slot set for a week.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or backend
    /// rejection.
    async fn get_availability(
        &self,
        email: &EmailKey,
        week_start: WeekStart,
    ) -> Result<BTreeSet<SlotId>, BackendError>;

    /// Full-replaces one employee's availability for a week.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or backend
    /// rejection.
    async fn save_availability(
        &self,
        employee: &Employee,
        week_start: WeekStart,
        slots: &[SlotId],
    ) -> Result<(), BackendError>;

    /// Fetches the whole team's availability for a week.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or backend
    /// rejection.
    async fn get_all_availability(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<AvailabilityRoster, BackendError>;

    /// Fetches the assigned schedule for a (week, team).
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or backend
    /// rejection.
    async fn get_schedule(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<Vec<(SlotId, Person)>, BackendError>;

    /// Full-replaces the assigned schedule for a (week, team).
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or backend
    /// rejection.
    async fn save_schedule(
        &self,
        week_start: WeekStart,
        team: Team,
        rows: &[(SlotId, Person)],
    ) -> Result<(), BackendError>;

    /// Fetches the lock record for a (week, team).
    ///
    /// A backend without a record yields the default unlocked draft, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or backend
    /// rejection.
    async fn get_schedule_meta(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<ScheduleMeta, BackendError>;

    /// Requests a lock transition, stamping the acting leader.
    ///
    /// On success the returned record is authoritative and must replace
    /// local state.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport failure or backend
    /// rejection; callers leave local state unchanged in that case.
    async fn set_schedule_status(
        &self,
        week_start: WeekStart,
        team: Team,
        status: ScheduleStatus,
        actor: &Employee,
        note: &str,
    ) -> Result<ScheduleMeta, BackendError>;
}

// A shared reference is itself a backend, so a controller can borrow a
// backend another surface also holds.
impl<B: ScheduleBackend> ScheduleBackend for &B {
    async fn get_availability(
        &self,
        email: &EmailKey,
        week_start: WeekStart,
    ) -> Result<BTreeSet<SlotId>, BackendError> {
        (**self).get_availability(email, week_start).await
    }

    async fn save_availability(
        &self,
        employee: &Employee,
        week_start: WeekStart,
        slots: &[SlotId],
    ) -> Result<(), BackendError> {
        (**self).save_availability(employee, week_start, slots).await
    }

    async fn get_all_availability(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<AvailabilityRoster, BackendError> {
        (**self).get_all_availability(week_start, team).await
    }

    async fn get_schedule(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<Vec<(SlotId, Person)>, BackendError> {
        (**self).get_schedule(week_start, team).await
    }

    async fn save_schedule(
        &self,
        week_start: WeekStart,
        team: Team,
        rows: &[(SlotId, Person)],
    ) -> Result<(), BackendError> {
        (**self).save_schedule(week_start, team, rows).await
    }

    async fn get_schedule_meta(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<ScheduleMeta, BackendError> {
        (**self).get_schedule_meta(week_start, team).await
    }

    async fn set_schedule_status(
        &self,
        week_start: WeekStart,
        team: Team,
        status: ScheduleStatus,
        actor: &Employee,
        note: &str,
    ) -> Result<ScheduleMeta, BackendError> {
        (**self)
            .set_schedule_status(week_start, team, status, actor, note)
            .await
    }
}
