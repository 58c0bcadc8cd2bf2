// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use shift_roster::{AssignmentModel, Person};
use shift_roster_domain::{
    EmailKey, EmploymentType, ShiftKey, SlotId, Team, WeekStart,
};
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

pub fn create_person(email: &str, name: &str, team: Team) -> Person {
    Person::new(EmailKey::new(email), String::from(name), team)
}

pub fn create_fulltime_person(email: &str, name: &str, team: Team) -> Person {
    let mut person = create_person(email, name, team);
    person.employment_type = Some(EmploymentType::Fulltime);
    person
}

/// Builds an assignment model from `(day_offset, shift, email, name)`.
pub fn create_assignments(team: Team, rows: &[(u8, &str, &str, &str)]) -> AssignmentModel {
    let mut model = AssignmentModel::new(create_test_week(), team);
    model.replace_from(rows.iter().map(|(day, shift, email, name)| {
        (create_slot(*day, shift), create_person(email, name, team))
    }));
    model
}

pub fn shift_keys(raw: &[&str]) -> Vec<ShiftKey> {
    raw.iter()
        .map(|s| ShiftKey::parse(s).expect("valid shift key"))
        .collect()
}
