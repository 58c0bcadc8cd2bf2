// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{EmailKey, Employee, EmploymentType, Team};

pub fn create_employee(email: &str, team: Team, employment_type: EmploymentType) -> Employee {
    Employee::new(
        EmailKey::new(email),
        String::from("Test Person"),
        team,
        employment_type,
    )
}

pub fn create_parttime_cs() -> Employee {
    create_employee("an.tran@example.com", Team::Cs, EmploymentType::Parttime)
}

pub fn create_fulltime_mo() -> Employee {
    create_employee("binh.le@example.com", Team::Mo, EmploymentType::Fulltime)
}
