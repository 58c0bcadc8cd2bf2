// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a team within the organization.
///
/// Teams are fixed domain constants. Each team has its own schedulable
/// hour window (see [`crate::hour_window`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Customer Service. Hour window 08:00-24:00.
    Cs,
    /// Marketing Operations. Hour window 09:00-18:00.
    Mo,
}

impl Team {
    /// Returns the wire representation of this team.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::Mo => "mo",
        }
    }

    /// Parses a team leniently.
    ///
    /// Unrecognized team strings fall back to [`Team::Mo`]: the narrower
    /// 09-18 hour window must win over accidentally exposing night hours.
    #[must_use]
    pub fn parse_lossy(raw: &str) -> Self {
        raw.trim().parse().unwrap_or(Self::Mo)
    }
}

impl FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cs" => Ok(Self::Cs),
            "mo" | "marketing" => Ok(Self::Mo),
            other => Err(DomainError::InvalidTeam(other.to_string())),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents an employment type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    /// Part-time staff. Always eligible for self-service availability.
    Parttime,
    /// Full-time staff. Eligible only on the CS team.
    Fulltime,
}

impl EmploymentType {
    /// Returns the wire representation of this employment type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Parttime => "parttime",
            Self::Fulltime => "fulltime",
        }
    }

    /// Parses an employment type leniently.
    ///
    /// The identity store historically omitted the field for part-time
    /// staff, so anything that is not explicitly `fulltime` is part-time.
    #[must_use]
    pub fn parse_lossy(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("fulltime") {
            Self::Fulltime
        } else {
            Self::Parttime
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a normalized employee email address.
///
/// Emails are the sole identifier for an employee. They are normalized to
/// lowercase so that membership checks are case-insensitive everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmailKey {
    /// The lowercased email value.
    value: String,
}

impl EmailKey {
    /// Creates a new `EmailKey`, trimming and lowercasing the input.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_lowercase(),
        }
    }

    /// Returns the normalized email value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Display for EmailKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents an employee as provided by the external identity store.
///
/// Read-only here; the identity store owns these records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// The employee's email (unique key, case-insensitive).
    pub email: EmailKey,
    /// The employee's display name (informational, not unique).
    pub name: String,
    /// The team this employee belongs to.
    pub team: Team,
    /// The employment type classification.
    pub employment_type: EmploymentType,
}

impl Employee {
    /// Creates a new `Employee`.
    #[must_use]
    pub const fn new(
        email: EmailKey,
        name: String,
        team: Team,
        employment_type: EmploymentType,
    ) -> Self {
        Self {
            email,
            name,
            team,
            employment_type,
        }
    }
}

/// Represents the lifecycle state of a (week, team) schedule.
///
/// Two states govern what operations are permitted: while `Draft`,
/// employees may edit their own availability; once `Final`, availability
/// is read-only and the finalized views become authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Initial state. Availability editing allowed.
    #[default]
    Draft,
    /// Published. Availability locked; finalized views render content.
    Final,
}

impl ScheduleStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Final => "final",
        }
    }

    /// Returns the other status. Lock toggling is `draft ↔ final`.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Draft => Self::Final,
            Self::Final => Self::Draft,
        }
    }

    /// Returns whether this status locks availability editing.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Final)
    }
}

impl FromStr for ScheduleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "final" => Ok(Self::Final),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One lock record per (week start, team).
///
/// The actor stamp records who finalized the week and when. The backend
/// having no record for a week is normal and maps to the default: an
/// unlocked draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleMeta {
    /// The lifecycle status of the week.
    pub status: ScheduleStatus,
    /// Email of the leader who last moved the week to `final`.
    pub locked_by_email: Option<String>,
    /// Display name of the leader who last moved the week to `final`.
    pub locked_by_name: Option<String>,
    /// Timestamp of the last finalization (ISO 8601 string, backend-issued).
    pub locked_at: Option<String>,
    /// Free-form note attached to the lock record.
    pub note: Option<String>,
}

impl ScheduleMeta {
    /// Returns a short human label for who holds the lock, if anyone.
    #[must_use]
    pub fn locked_by_label(&self) -> Option<String> {
        match (&self.locked_by_name, &self.locked_by_email) {
            (Some(name), _) if !name.is_empty() => Some(name.clone()),
            (_, Some(email)) if !email.is_empty() => Some(email.clone()),
            _ => None,
        }
    }
}
