// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API boundary.

use shift_roster::CoreError;
use shift_roster_domain::DomainError;

/// Fallback text when the backend rejects without a message.
const GENERIC_BACKEND_FAILURE: &str = "The scheduling service reported an error";

/// Errors produced by a [`crate::ScheduleBackend`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request never completed: connection, timeout, or non-OK status.
    Transport {
        /// A description of the transport failure.
        message: String,
    },
    /// The backend answered with `success: false`.
    Rejected {
        /// The backend-provided message, surfaced verbatim when present.
        message: Option<String>,
    },
    /// The response body could not be interpreted.
    Decode {
        /// A description of the decode failure.
        message: String,
    },
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { message } => write!(f, "Transport failure: {message}"),
            Self::Rejected { message } => match message {
                Some(text) if !text.is_empty() => write!(f, "{text}"),
                _ => write!(f, "{GENERIC_BACKEND_FAILURE}"),
            },
            Self::Decode { message } => write!(f, "Unreadable response: {message}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// API-level errors: the user-facing failure taxonomy.
///
/// These are distinct from domain/core/backend errors; every inner error
/// is translated explicitly so nothing internal leaks into a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input, rejected locally before any network call.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The employee may not use self-service availability (role rule).
    NotEligible {
        /// The business reason, stated plainly.
        message: String,
    },
    /// The week is finalized and the attempted edit is locked out.
    ScheduleLocked {
        /// Who locked the week and when, as far as known.
        message: String,
    },
    /// The request never reached or never returned from the backend.
    Transport {
        /// A retryable, user-facing description.
        message: String,
    },
    /// The backend reported failure.
    BackendRejected {
        /// The backend message, or a generic fallback.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::NotEligible { message } => write!(f, "{message}"),
            Self::ScheduleLocked { message } => write!(f, "{message}"),
            Self::Transport { message } => {
                write!(f, "Connection problem: {message}. Please try again.")
            }
            Self::BackendRejected { message } => write!(f, "{message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidShiftKey(raw) => ApiError::InvalidInput {
            field: String::from("shift"),
            message: format!("'{raw}' is not a valid HH-HH shift key"),
        },
        DomainError::InvalidSlotId(raw) => ApiError::InvalidInput {
            field: String::from("slot"),
            message: format!("'{raw}' is not a valid YYYY-MM-DD|HH-HH slot"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::WeekStartNotMonday { date, weekday } => ApiError::InvalidInput {
            field: String::from("week_start"),
            message: format!("Week start must be a Monday, but {date} is a {weekday}"),
        },
        DomainError::InvalidStatus(raw) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{raw}' is not a schedule status"),
        },
        DomainError::InvalidTeam(raw) => ApiError::InvalidInput {
            field: String::from("team"),
            message: format!("'{raw}' is not a known team"),
        },
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::IneligibleEmployee { email, reason } => ApiError::NotEligible {
            message: format!("'{email}' cannot register availability: {reason}"),
        },
        DomainError::WeekFinalized {
            week_start,
            locked_by,
        } => ApiError::ScheduleLocked {
            message: match locked_by {
                Some(who) => format!(
                    "Week {week_start} has been finalized by {who}; availability is read-only"
                ),
                None => format!("Week {week_start} has been finalized; availability is read-only"),
            },
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Transport { message } => Self::Transport { message },
            BackendError::Rejected { message } => Self::BackendRejected {
                message: message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| String::from(GENERIC_BACKEND_FAILURE)),
            },
            BackendError::Decode { message } => Self::Internal { message },
        }
    }
}
