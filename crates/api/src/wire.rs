// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire-level request and response data transfer objects.
//!
//! Every scheduling operation is one HTTP POST whose JSON body carries an
//! `action` field; responses carry at least `success`. Incoming payloads
//! are deliberately loose (`#[serde(default)]` everywhere) because the
//! spreadsheet-backed endpoint drifts; [`crate::decode`] is where the
//! loose rows become validated domain values. Outgoing payloads always
//! emit canonical padded shift keys and `YYYY-MM-DD` dates.

use shift_roster::Person;
use shift_roster_domain::{SlotId, format_iso_date};

/// An action-tagged request body for the scheduling endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum BackendRequest {
    /// Fetch one employee's availability for a week.
    #[serde(rename_all = "camelCase")]
    GetAvailability {
        /// The employee's email.
        email: String,
        /// The week start date (`YYYY-MM-DD`).
        week_start: String,
    },
    /// Full-replace one employee's availability for a week.
    #[serde(rename_all = "camelCase")]
    SaveAvailability {
        /// The employee's email.
        email: String,
        /// The employee's display name.
        name: String,
        /// The week start date (`YYYY-MM-DD`).
        week_start: String,
        /// The complete free-slot set.
        availability: Vec<AvailabilityItem>,
    },
    /// Fetch everyone's availability for a (week, team).
    #[serde(rename_all = "camelCase")]
    GetAllAvailability {
        /// The week start date (`YYYY-MM-DD`).
        week_start: String,
        /// The team identifier.
        team: String,
    },
    /// Fetch the assigned schedule for a (week, team).
    #[serde(rename_all = "camelCase")]
    GetSchedule {
        /// The week start date (`YYYY-MM-DD`).
        week_start: String,
        /// The team identifier.
        team: String,
    },
    /// Full-replace the assigned schedule for a (week, team).
    #[serde(rename_all = "camelCase")]
    SaveSchedule {
        /// The week start date (`YYYY-MM-DD`).
        week_start: String,
        /// The team identifier.
        team: String,
        /// The complete flattened assignment rows.
        schedule: Vec<ScheduleItem>,
    },
    /// Fetch the lock record for a (week, team).
    #[serde(rename_all = "camelCase")]
    GetScheduleMeta {
        /// The week start date (`YYYY-MM-DD`).
        week_start: String,
        /// The team identifier.
        team: String,
    },
    /// Transition the lock record for a (week, team).
    #[serde(rename_all = "camelCase")]
    SetScheduleStatus {
        /// The week start date (`YYYY-MM-DD`).
        week_start: String,
        /// The team identifier.
        team: String,
        /// The requested status (`draft` or `final`).
        status: String,
        /// The acting leader's email (lock owner stamp).
        user_email: String,
        /// The acting leader's display name.
        user_name: String,
        /// Free-form note attached to the transition.
        note: String,
    },
}

/// One `{date, shift}` availability row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityItem {
    /// The calendar date (`YYYY-MM-DD` expected; longer forms tolerated).
    #[serde(default)]
    pub date: String,
    /// The shift key (`HH-HH` expected; unpadded tolerated).
    #[serde(default)]
    pub shift: String,
}

/// One availability row across the whole team.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct PersonSlotItem {
    /// The calendar date.
    #[serde(default)]
    pub date: String,
    /// The shift key.
    #[serde(default)]
    pub shift: String,
    /// The employee's email.
    #[serde(default)]
    pub email: String,
    /// The employee's display name.
    #[serde(default)]
    pub name: String,
    /// The employee's team, when the backend includes it.
    #[serde(default)]
    pub team: String,
}

/// One assignment row as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRowItem {
    /// The calendar date.
    #[serde(default)]
    pub date: String,
    /// The shift key.
    #[serde(default)]
    pub shift: String,
    /// The assigned employee's email.
    #[serde(default)]
    pub email: String,
    /// The assigned employee's display name.
    #[serde(default)]
    pub name: String,
    /// The team the row was recorded under.
    #[serde(default)]
    pub team: String,
    /// Employment type, when the backend includes it.
    #[serde(default)]
    pub employment_type: Option<String>,
    /// Free-form note on the row.
    #[serde(default)]
    pub note: String,
}

/// One assignment row in save form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScheduleItem {
    /// The calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// The canonical padded shift key.
    pub shift: String,
    /// The assigned employee's email.
    pub email: String,
    /// The assigned employee's display name.
    pub name: String,
    /// The team this row belongs to.
    pub team: String,
    /// Free-form note on the row.
    pub note: String,
}

/// Minimal acknowledgement envelope for save actions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct AckResponse {
    /// Whether the backend accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Backend-provided failure or success message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response envelope for `getAvailability`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct AvailabilityResponse {
    /// Whether the backend accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Backend-provided message.
    #[serde(default)]
    pub message: Option<String>,
    /// The employee's `{date, shift}` rows.
    #[serde(default)]
    pub availability: Vec<AvailabilityItem>,
}

/// Response envelope for `getAllAvailability`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct AllAvailabilityResponse {
    /// Whether the backend accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Backend-provided message.
    #[serde(default)]
    pub message: Option<String>,
    /// Everyone's `{date, shift, email, name}` rows.
    #[serde(default)]
    pub availability: Vec<PersonSlotItem>,
}

/// Response envelope for `getSchedule`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ScheduleResponse {
    /// Whether the backend accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Backend-provided message.
    #[serde(default)]
    pub message: Option<String>,
    /// The assignment rows.
    #[serde(default)]
    pub schedule: Vec<ScheduleRowItem>,
}

/// The lock record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaItem {
    /// The raw status string (`draft` / `final`).
    #[serde(default)]
    pub status: String,
    /// Email of the finalizing leader.
    #[serde(default)]
    pub locked_by_email: Option<String>,
    /// Display name of the finalizing leader.
    #[serde(default)]
    pub locked_by_name: Option<String>,
    /// Finalization timestamp (backend-issued).
    #[serde(default)]
    pub locked_at: Option<String>,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

/// Response envelope for `getScheduleMeta` / `setScheduleStatus`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct MetaResponse {
    /// Whether the backend accepted the request.
    #[serde(default)]
    pub success: bool,
    /// Backend-provided message.
    #[serde(default)]
    pub message: Option<String>,
    /// The lock record; absent means the week was never locked.
    #[serde(default)]
    pub meta: Option<MetaItem>,
}

/// Serializes a free-slot snapshot into wire rows, canonical keys out.
#[must_use]
pub fn availability_items(slots: &[SlotId]) -> Vec<AvailabilityItem> {
    slots
        .iter()
        .map(|slot| AvailabilityItem {
            date: format_iso_date(slot.date),
            shift: slot.shift.to_string(),
        })
        .collect()
}

/// Serializes flattened assignment rows into wire rows.
#[must_use]
pub fn schedule_items(rows: &[(SlotId, Person)]) -> Vec<ScheduleItem> {
    rows.iter()
        .map(|(slot, person)| ScheduleItem {
            date: format_iso_date(slot.date),
            shift: slot.shift.to_string(),
            email: person.email.value().to_string(),
            name: person.name.clone(),
            team: person.team.as_str().to_string(),
            note: String::new(),
        })
        .collect()
}
