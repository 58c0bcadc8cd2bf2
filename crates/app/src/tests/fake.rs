// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory [`ScheduleBackend`] with the remote endpoint's semantics:
//! full-replace saves, last-write-wins, absent meta means draft.

use shift_roster::{AvailabilityRoster, Person};
use shift_roster_api::{BackendError, ScheduleBackend};
use shift_roster_domain::{
    EmailKey, Employee, EmploymentType, ScheduleMeta, ScheduleStatus, ShiftKey, SlotId, Team,
    WeekStart,
};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use time::macros::date;

pub fn create_test_week() -> WeekStart {
    WeekStart::new(date!(2025 - 01 - 06)).expect("2025-01-06 is a Monday")
}

pub fn create_slot(day_offset: u8, shift: &str) -> SlotId {
    let dates = create_test_week().dates().expect("valid week");
    SlotId::new(
        dates[usize::from(day_offset)],
        ShiftKey::parse(shift).expect("valid shift key"),
    )
}

pub fn create_employee(email: &str, name: &str, team: Team, et: EmploymentType) -> Employee {
    Employee::new(EmailKey::new(email), String::from(name), team, et)
}

pub fn create_person(email: &str, name: &str, team: Team) -> Person {
    Person::new(EmailKey::new(email), String::from(name), team)
}

#[derive(Debug, Default)]
pub struct FakeState {
    /// (email, week) → free-slot set.
    pub availability: HashMap<(String, String), BTreeSet<SlotId>>,
    /// (week, team) → who declared themselves free, per slot.
    pub all_availability: HashMap<(String, String), Vec<(SlotId, Person)>>,
    /// (week, team) → assignment rows.
    pub schedule: HashMap<(String, String), Vec<(SlotId, Person)>>,
    /// (week, team) → lock record.
    pub meta: HashMap<(String, String), ScheduleMeta>,
    /// Fail every call with a transport error when set.
    pub fail_transport: bool,
    /// Number of `saveAvailability` calls that reached the backend.
    pub availability_saves: usize,
    /// Number of `saveSchedule` calls that reached the backend.
    pub schedule_saves: usize,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub state: RefCell<FakeState>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<(), BackendError> {
        if self.state.borrow().fail_transport {
            Err(BackendError::Transport {
                message: String::from("connection refused"),
            })
        } else {
            Ok(())
        }
    }

    pub fn set_fail_transport(&self, fail: bool) {
        self.state.borrow_mut().fail_transport = fail;
    }

    pub fn seed_all_availability(
        &self,
        week: WeekStart,
        team: Team,
        rows: Vec<(SlotId, Person)>,
    ) {
        self.state
            .borrow_mut()
            .all_availability
            .insert((week.iso(), team.as_str().to_string()), rows);
    }

    pub fn seed_meta(&self, week: WeekStart, team: Team, meta: ScheduleMeta) {
        self.state
            .borrow_mut()
            .meta
            .insert((week.iso(), team.as_str().to_string()), meta);
    }

    pub fn stored_availability(&self, email: &str, week: WeekStart) -> BTreeSet<SlotId> {
        self.state
            .borrow()
            .availability
            .get(&(EmailKey::new(email).value().to_string(), week.iso()))
            .cloned()
            .unwrap_or_default()
    }

    pub fn stored_schedule(&self, week: WeekStart, team: Team) -> Vec<(SlotId, Person)> {
        self.state
            .borrow()
            .schedule
            .get(&(week.iso(), team.as_str().to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl ScheduleBackend for FakeBackend {
    async fn get_availability(
        &self,
        email: &EmailKey,
        week_start: WeekStart,
    ) -> Result<BTreeSet<SlotId>, BackendError> {
        self.guard()?;
        Ok(self
            .state
            .borrow()
            .availability
            .get(&(email.value().to_string(), week_start.iso()))
            .cloned()
            .unwrap_or_default())
    }

    async fn save_availability(
        &self,
        employee: &Employee,
        week_start: WeekStart,
        slots: &[SlotId],
    ) -> Result<(), BackendError> {
        self.guard()?;
        let mut state = self.state.borrow_mut();
        state.availability_saves += 1;
        // Full replace: the entire week is overwritten, never merged.
        state.availability.insert(
            (employee.email.value().to_string(), week_start.iso()),
            slots.iter().copied().collect(),
        );
        Ok(())
    }

    async fn get_all_availability(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<AvailabilityRoster, BackendError> {
        self.guard()?;
        let rows = self
            .state
            .borrow()
            .all_availability
            .get(&(week_start.iso(), team.as_str().to_string()))
            .cloned()
            .unwrap_or_default();
        Ok(AvailabilityRoster::from_rows(rows))
    }

    async fn get_schedule(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<Vec<(SlotId, Person)>, BackendError> {
        self.guard()?;
        Ok(self
            .state
            .borrow()
            .schedule
            .get(&(week_start.iso(), team.as_str().to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn save_schedule(
        &self,
        week_start: WeekStart,
        team: Team,
        rows: &[(SlotId, Person)],
    ) -> Result<(), BackendError> {
        self.guard()?;
        let mut state = self.state.borrow_mut();
        state.schedule_saves += 1;
        state
            .schedule
            .insert((week_start.iso(), team.as_str().to_string()), rows.to_vec());
        Ok(())
    }

    async fn get_schedule_meta(
        &self,
        week_start: WeekStart,
        team: Team,
    ) -> Result<ScheduleMeta, BackendError> {
        self.guard()?;
        Ok(self
            .state
            .borrow()
            .meta
            .get(&(week_start.iso(), team.as_str().to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn set_schedule_status(
        &self,
        week_start: WeekStart,
        team: Team,
        status: ScheduleStatus,
        actor: &Employee,
        note: &str,
    ) -> Result<ScheduleMeta, BackendError> {
        self.guard()?;
        let meta = ScheduleMeta {
            status,
            locked_by_email: Some(actor.email.value().to_string()),
            locked_by_name: Some(actor.name.clone()),
            locked_at: status
                .is_final()
                .then(|| String::from("2025-01-05T10:00:00Z")),
            note: (!note.is_empty()).then(|| note.to_string()),
        };
        self.state
            .borrow_mut()
            .meta
            .insert((week_start.iso(), team.as_str().to_string()), meta.clone());
        Ok(meta)
    }
}
