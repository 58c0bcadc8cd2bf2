// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the wire contract: action tags, field casing, and the
//! tolerance rules for incoming envelopes.

use crate::wire::{
    AckResponse, AvailabilityResponse, BackendRequest, MetaResponse, ScheduleResponse,
    availability_items, schedule_items,
};
use shift_roster::Person;
use shift_roster_domain::{EmailKey, ShiftKey, SlotId, Team, parse_iso_date};

fn slot(date: &str, shift: &str) -> SlotId {
    SlotId::new(
        parse_iso_date(date).unwrap(),
        ShiftKey::parse(shift).unwrap(),
    )
}

#[test]
fn test_requests_serialize_with_camel_case_action_tags() {
    let request = BackendRequest::GetAvailability {
        email: String::from("an.tran@example.com"),
        week_start: String::from("2025-01-06"),
    };

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["action"], "getAvailability");
    assert_eq!(value["email"], "an.tran@example.com");
    assert_eq!(value["weekStart"], "2025-01-06");
}

#[test]
fn test_set_schedule_status_carries_actor_stamp() {
    let request = BackendRequest::SetScheduleStatus {
        week_start: String::from("2025-01-06"),
        team: String::from("mo"),
        status: String::from("final"),
        user_email: String::from("lan.pham@example.com"),
        user_name: String::from("Lan Pham"),
        note: String::new(),
    };

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["action"], "setScheduleStatus");
    assert_eq!(value["status"], "final");
    assert_eq!(value["userEmail"], "lan.pham@example.com");
    assert_eq!(value["userName"], "Lan Pham");
}

#[test]
fn test_availability_items_emit_padded_canonical_keys() {
    let slots: Vec<SlotId> = vec![slot("2025-01-06", "8-9"), slot("2025-01-06", "23-00")];

    let items = availability_items(&slots);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].date, "2025-01-06");
    assert_eq!(items[0].shift, "08-09");
    assert_eq!(items[1].shift, "23-00");
}

#[test]
fn test_schedule_items_flatten_people_with_team_strings() {
    let rows = vec![(
        slot("2025-01-06", "09-10"),
        Person::new(
            EmailKey::new("An.Tran@example.com"),
            String::from("An Tran"),
            Team::Mo,
        ),
    )];

    let items = schedule_items(&rows);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].email, "an.tran@example.com");
    assert_eq!(items[0].team, "mo");
    assert_eq!(items[0].shift, "09-10");
    assert_eq!(items[0].note, "");
}

#[test]
fn test_ack_response_tolerates_missing_fields() {
    let ack: AckResponse = serde_json::from_str("{}").unwrap();

    assert!(!ack.success);
    assert!(ack.message.is_none());
}

#[test]
fn test_availability_response_defaults_missing_list() {
    let response: AvailabilityResponse =
        serde_json::from_str(r#"{"success": true}"#).unwrap();

    assert!(response.success);
    assert!(response.availability.is_empty());
}

#[test]
fn test_schedule_response_reads_camel_case_employment_type() {
    let body = r#"{
        "success": true,
        "schedule": [
            {
                "date": "2025-01-06",
                "shift": "9-10",
                "email": "an.tran@example.com",
                "name": "An Tran",
                "team": "mo",
                "employmentType": "parttime"
            }
        ]
    }"#;

    let response: ScheduleResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.schedule.len(), 1);
    assert_eq!(
        response.schedule[0].employment_type.as_deref(),
        Some("parttime")
    );
    assert_eq!(response.schedule[0].note, "");
}

#[test]
fn test_meta_response_reads_camel_case_lock_fields() {
    let body = r#"{
        "success": true,
        "meta": {
            "status": "final",
            "lockedByEmail": "lan.pham@example.com",
            "lockedByName": "Lan Pham",
            "lockedAt": "2025-01-05T10:00:00Z"
        }
    }"#;

    let response: MetaResponse = serde_json::from_str(body).unwrap();
    let meta = response.meta.unwrap();

    assert_eq!(meta.status, "final");
    assert_eq!(meta.locked_by_email.as_deref(), Some("lan.pham@example.com"));
    assert!(meta.note.is_none());
}

#[test]
fn test_meta_response_without_record_decodes_to_none() {
    let response: MetaResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(response.meta.is_none());
}
