// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Employee, EmploymentType, Team};

/// Returns whether an employee may use self-service availability at all.
///
/// Part-time staff always may; full-time staff only on the CS team. This
/// is a role rule, independent of any week's lock status.
#[must_use]
pub const fn can_use_availability(employee: &Employee) -> bool {
    match employee.employment_type {
        EmploymentType::Parttime => true,
        EmploymentType::Fulltime => matches!(employee.team, Team::Cs),
    }
}

/// Validates that an employee may use self-service availability.
///
/// # Errors
///
/// Returns `DomainError::IneligibleEmployee` for full-time staff outside
/// the CS team.
pub fn validate_scheduling_eligibility(employee: &Employee) -> Result<(), DomainError> {
    if can_use_availability(employee) {
        return Ok(());
    }
    Err(DomainError::IneligibleEmployee {
        email: employee.email.value().to_string(),
        reason: String::from(
            "full-time staff outside the CS team are scheduled directly by their leader",
        ),
    })
}

/// Validates that an employee's identity fields are usable.
///
/// The identity store is external; this only guards against records that
/// would corrupt slot membership keys.
///
/// # Errors
///
/// Returns an error if the email is empty or has no `@`, or the name is
/// empty.
pub fn validate_employee_fields(employee: &Employee) -> Result<(), DomainError> {
    if employee.email.is_empty() || !employee.email.value().contains('@') {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must be a non-empty address",
        )));
    }
    if employee.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}
