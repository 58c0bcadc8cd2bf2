// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the in-memory availability model and its edit gate.

use super::helpers::{create_final_meta, create_parttime_employee, create_slot, create_test_week};
use crate::{AvailabilityModel, CoreError, EditGate, StatusController};
use shift_roster_domain::{DomainError, Team};

#[test]
fn test_toggle_flips_membership_in_memory() {
    let mut model = AvailabilityModel::new(create_test_week());
    let slot = create_slot(0, "08-09");
    let gate = EditGate::open();

    assert!(model.toggle(slot, &gate).unwrap());
    assert!(model.contains(slot));

    assert!(!model.toggle(slot, &gate).unwrap());
    assert!(!model.contains(slot));
}

#[test]
fn test_toggle_marks_model_dirty() {
    let mut model = AvailabilityModel::new(create_test_week());
    assert!(!model.is_dirty());

    model.toggle(create_slot(0, "08-09"), &EditGate::open()).unwrap();
    assert!(model.is_dirty());

    model.mark_saved();
    assert!(!model.is_dirty());
}

#[test]
fn test_replace_from_resets_dirty_state() {
    let mut model = AvailabilityModel::new(create_test_week());
    model.toggle(create_slot(0, "08-09"), &EditGate::open()).unwrap();

    model.replace_from([create_slot(1, "09-10"), create_slot(2, "10-11")]);

    assert!(!model.is_dirty());
    assert_eq!(model.len(), 2);
    assert!(!model.contains(create_slot(0, "08-09")));
}

#[test]
fn test_snapshot_contains_full_set_in_order() {
    let mut model = AvailabilityModel::new(create_test_week());
    let gate = EditGate::open();
    model.toggle(create_slot(1, "09-10"), &gate).unwrap();
    model.toggle(create_slot(0, "08-09"), &gate).unwrap();

    let snapshot = model.snapshot_for_save(&gate).unwrap();

    let rendered: Vec<String> = snapshot.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["2025-01-06|08-09", "2025-01-07|09-10"],
        "snapshot must be the full current set in deterministic order"
    );
}

#[test]
fn test_finalized_week_rejects_toggle_and_save() {
    let week = create_test_week();
    let employee = create_parttime_employee("an.tran@example.com", Team::Cs);

    let mut lock = StatusController::new(week, Team::Cs);
    lock.apply_meta(create_final_meta("lan.pham@example.com"));
    let gate = lock.gate_for(&employee);

    let mut model = AvailabilityModel::new(week);
    let slot = create_slot(0, "08-09");

    let toggle_result = model.toggle(slot, &gate);
    assert!(matches!(
        toggle_result,
        Err(CoreError::DomainViolation(DomainError::WeekFinalized { .. }))
    ));
    assert!(!model.contains(slot), "a rejected toggle must not mutate");
    assert!(!model.is_dirty());

    let save_result = model.snapshot_for_save(&gate);
    assert!(save_result.is_err(), "a locked save must never be attempted");
}

#[test]
fn test_revision_bumps_on_accepted_mutations_only() {
    let week = create_test_week();
    let mut lock = StatusController::new(week, Team::Cs);
    lock.apply_meta(create_final_meta("lan.pham@example.com"));
    let closed = lock.gate_for(&create_parttime_employee("an.tran@example.com", Team::Cs));

    let mut model = AvailabilityModel::new(week);
    let before = model.revision();

    let _ = model.toggle(create_slot(0, "08-09"), &closed);
    assert_eq!(model.revision(), before, "rejected toggles must not bump");

    model.toggle(create_slot(0, "08-09"), &EditGate::open()).unwrap();
    assert_eq!(model.revision(), before + 1);
}
