// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the ingestion boundary.
//!
//! Normalization happens exactly once, here, so these tests pin down the
//! tolerated raw variants and the drop-don't-fail policy.

use crate::decode::{
    availability_set, roster_from_items, schedule_meta, schedule_rows, slot_from_raw,
};
use crate::wire::{AvailabilityItem, MetaItem, PersonSlotItem, ScheduleRowItem};
use shift_roster_domain::{EmailKey, EmploymentType, ScheduleStatus, Team};

fn availability_item(date: &str, shift: &str) -> AvailabilityItem {
    AvailabilityItem {
        date: String::from(date),
        shift: String::from(shift),
    }
}

#[test]
fn test_unpadded_shift_normalizes_to_same_slot() {
    let a = slot_from_raw("2025-01-06", "8-9").unwrap();
    let b = slot_from_raw("2025-01-06", "08-09").unwrap();

    assert_eq!(a, b);
    assert_eq!(a.to_string(), "2025-01-06|08-09");
}

#[test]
fn test_timestamp_dates_truncate_to_calendar_date() {
    let slot = slot_from_raw("2025-01-06T00:00:00.000Z", "08-09").unwrap();
    assert_eq!(slot.to_string(), "2025-01-06|08-09");
}

#[test]
fn test_availability_set_merges_padded_and_unpadded_duplicates() {
    let set = availability_set(&[
        availability_item("2025-01-06", "8-9"),
        availability_item("2025-01-06", "08-09"),
    ]);

    assert_eq!(set.len(), 1);
}

#[test]
fn test_availability_set_drops_malformed_rows_and_keeps_the_rest() {
    let set = availability_set(&[
        availability_item("2025-01-06", "08-09"),
        availability_item("2025-01-06", "morning"),
        availability_item("garbage", "09-10"),
        availability_item("2025-01-06", "25-26"),
        availability_item("2025-01-07", "9-10"),
    ]);

    let rendered: Vec<String> = set.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["2025-01-06|08-09", "2025-01-07|09-10"]);
}

#[test]
fn test_roster_lowercases_emails_and_deduplicates() {
    let items = vec![
        PersonSlotItem {
            date: String::from("2025-01-06"),
            shift: String::from("9-10"),
            email: String::from("An.Tran@Example.com"),
            name: String::from("An Tran"),
            team: String::new(),
        },
        PersonSlotItem {
            date: String::from("2025-01-06"),
            shift: String::from("09-10"),
            email: String::from("an.tran@example.com"),
            name: String::from("An Tran"),
            team: String::new(),
        },
    ];

    let roster = roster_from_items(&items, Team::Mo);
    let slot = slot_from_raw("2025-01-06", "09-10").unwrap();

    assert_eq!(roster.available_count(slot), 1);
    assert!(roster.is_available(slot, &EmailKey::new("an.tran@example.com")));
    assert_eq!(roster.available(slot)[0].team, Team::Mo);
}

#[test]
fn test_roster_drops_rows_without_email() {
    let items = vec![PersonSlotItem {
        date: String::from("2025-01-06"),
        shift: String::from("09-10"),
        email: String::from("   "),
        name: String::from("Ghost"),
        team: String::new(),
    }];

    let roster = roster_from_items(&items, Team::Mo);
    let slot = slot_from_raw("2025-01-06", "09-10").unwrap();
    assert_eq!(roster.available_count(slot), 0);
}

#[test]
fn test_schedule_rows_carry_employment_type_when_present() {
    let items = vec![
        ScheduleRowItem {
            date: String::from("2025-01-06"),
            shift: String::from("09-10"),
            email: String::from("an.tran@example.com"),
            name: String::from("An Tran"),
            team: String::from("mo"),
            employment_type: Some(String::from("fulltime")),
            note: String::new(),
        },
        ScheduleRowItem {
            date: String::from("2025-01-06"),
            shift: String::from("10-11"),
            email: String::from("chi.vo@example.com"),
            name: String::from("Chi Vo"),
            team: String::from("mo"),
            employment_type: None,
            note: String::new(),
        },
    ];

    let rows = schedule_rows(&items, Team::Mo);

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].1.employment_type,
        Some(EmploymentType::Fulltime)
    );
    assert_eq!(rows[1].1.employment_type, None);
    assert!(rows[1].1.is_parttime());
}

#[test]
fn test_schedule_rows_fall_back_to_requested_team() {
    let items = vec![ScheduleRowItem {
        date: String::from("2025-01-06"),
        shift: String::from("09-10"),
        email: String::from("an.tran@example.com"),
        name: String::from("An Tran"),
        team: String::new(),
        employment_type: None,
        note: String::new(),
    }];

    let rows = schedule_rows(&items, Team::Cs);
    assert_eq!(rows[0].1.team, Team::Cs);
}

#[test]
fn test_absent_meta_defaults_to_unlocked_draft() {
    let meta = schedule_meta(None);

    assert_eq!(meta.status, ScheduleStatus::Draft);
    assert!(meta.locked_by_email.is_none());
}

#[test]
fn test_meta_decodes_final_with_lock_stamp() {
    let item = MetaItem {
        status: String::from("final"),
        locked_by_email: Some(String::from("lan.pham@example.com")),
        locked_by_name: Some(String::from("Lan Pham")),
        locked_at: Some(String::from("2025-01-05T10:00:00Z")),
        note: Some(String::from("holiday week")),
    };

    let meta = schedule_meta(Some(&item));

    assert_eq!(meta.status, ScheduleStatus::Final);
    assert_eq!(meta.locked_by_label().as_deref(), Some("Lan Pham"));
    assert_eq!(meta.note.as_deref(), Some("holiday week"));
}

#[test]
fn test_unrecognized_status_string_degrades_to_draft() {
    let item = MetaItem {
        status: String::from("published"),
        locked_by_email: None,
        locked_by_name: None,
        locked_at: None,
        note: None,
    };

    assert_eq!(schedule_meta(Some(&item)).status, ScheduleStatus::Draft);
}
