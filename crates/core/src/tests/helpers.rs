// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::Person;
use shift_roster_domain::{
    EmailKey, Employee, EmploymentType, ScheduleMeta, ScheduleStatus, ShiftKey, SlotId, Team,
    WeekStart,
};
use time::macros::date;

pub fn create_test_week() -> WeekStart {
    WeekStart::new(date!(2025 - 01 - 06)).expect("2025-01-06 is a Monday")
}

pub fn create_slot(day_offset: u8, shift: &str) -> SlotId {
    let week = create_test_week();
    let dates = week.dates().expect("valid week");
    SlotId::new(
        dates[usize::from(day_offset)],
        ShiftKey::parse(shift).expect("valid shift key"),
    )
}

pub fn create_person(email: &str, name: &str, team: Team) -> Person {
    Person::new(EmailKey::new(email), String::from(name), team)
}

pub fn create_parttime_employee(email: &str, team: Team) -> Employee {
    Employee::new(
        EmailKey::new(email),
        String::from("Test Person"),
        team,
        EmploymentType::Parttime,
    )
}

pub fn create_final_meta(locked_by: &str) -> ScheduleMeta {
    ScheduleMeta {
        status: ScheduleStatus::Final,
        locked_by_email: Some(String::from(locked_by)),
        locked_by_name: Some(String::from("Lan Pham")),
        locked_at: Some(String::from("2025-01-05T10:00:00Z")),
        note: None,
    }
}
