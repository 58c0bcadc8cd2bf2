// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A shift key did not match the tolerated `H-H` / `HH-HH` form.
    InvalidShiftKey(String),
    /// A composite slot identifier was not of the form `YYYY-MM-DD|HH-HH`.
    InvalidSlotId(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A week start date must be a Monday.
    WeekStartNotMonday {
        /// The invalid week start date.
        date: time::Date,
        /// The actual weekday.
        weekday: time::Weekday,
    },
    /// Schedule status is not one of `draft` / `final`.
    InvalidStatus(String),
    /// Team identifier is not recognized.
    InvalidTeam(String),
    /// Employee email is empty or malformed.
    InvalidEmail(String),
    /// Employee name is empty or invalid.
    InvalidName(String),
    /// The employee may not use self-service availability.
    IneligibleEmployee {
        /// The employee's email.
        email: String,
        /// A human-readable description of the business rule.
        reason: String,
    },
    /// The week's schedule has been finalized and availability is read-only.
    WeekFinalized {
        /// The week start date (ISO form).
        week_start: String,
        /// Who locked the week, if recorded.
        locked_by: Option<String>,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShiftKey(raw) => write!(f, "Invalid shift key: '{raw}'"),
            Self::InvalidSlotId(raw) => write!(f, "Invalid slot identifier: '{raw}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::WeekStartNotMonday { date, weekday } => {
                write!(f, "Week start must be a Monday, but {date} is a {weekday}")
            }
            Self::InvalidStatus(raw) => {
                write!(f, "Invalid schedule status: '{raw}'. Must be 'draft' or 'final'")
            }
            Self::InvalidTeam(raw) => write!(f, "Invalid team: '{raw}'"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::IneligibleEmployee { email, reason } => {
                write!(f, "Employee '{email}' may not register availability: {reason}")
            }
            Self::WeekFinalized {
                week_start,
                locked_by,
            } => match locked_by {
                Some(who) => write!(
                    f,
                    "Week {week_start} has been finalized by {who} and is read-only"
                ),
                None => write!(f, "Week {week_start} has been finalized and is read-only"),
            },
        }
    }
}

impl std::error::Error for DomainError {}
