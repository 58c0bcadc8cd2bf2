// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Weekday};

/// The wire date format, `YYYY-MM-DD`.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date in ISO form.
pub fn parse_iso_date(raw: &str) -> Result<Date, DomainError> {
    Date::parse(raw, ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: raw.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    // Formatting a plain Date with a date-only description cannot fail;
    // the fallback only exists to satisfy the no-panic rule.
    date.format(ISO_DATE)
        .unwrap_or_else(|_| String::from("0000-00-00"))
}

/// Identifies one schedulable week: the Monday of a 7-day Mon-Sun window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekStart {
    /// The Monday anchoring this week.
    monday: Date,
}

impl WeekStart {
    /// Creates a new `WeekStart`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WeekStartNotMonday` if the date is not a
    /// Monday, or `DomainError::DateArithmeticOverflow` if the 7-day
    /// window cannot be represented.
    pub fn new(date: Date) -> Result<Self, DomainError> {
        let weekday: Weekday = date.weekday();
        if weekday != Weekday::Monday {
            return Err(DomainError::WeekStartNotMonday { date, weekday });
        }
        if date.checked_add(Duration::days(6)).is_none() {
            return Err(DomainError::DateArithmeticOverflow {
                operation: String::from("expanding the week into 7 dates"),
            });
        }
        Ok(Self { monday: date })
    }

    /// Returns the week containing the given date, snapping back to its
    /// Monday. Used for the default displayed week (this week's Monday).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the Monday cannot
    /// be computed.
    pub fn containing(date: Date) -> Result<Self, DomainError> {
        let back: i64 = i64::from(date.weekday().number_days_from_monday());
        let monday: Date =
            date.checked_sub(Duration::days(back))
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: String::from("snapping a date back to its Monday"),
                })?;
        Self::new(monday)
    }

    /// Parses a `YYYY-MM-DD` week start string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid date or not a Monday.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Self::new(parse_iso_date(raw)?)
    }

    /// Returns the Monday anchoring this week.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.monday
    }

    /// Returns the week start in wire form (`YYYY-MM-DD`).
    #[must_use]
    pub fn iso(&self) -> String {
        format_iso_date(self.monday)
    }

    /// Expands the week into exactly 7 consecutive calendar dates.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if a date in the
    /// window cannot be represented. `WeekStart::new` pre-validates the
    /// window, so this is unreachable for constructed values.
    pub fn dates(&self) -> Result<Vec<Date>, DomainError> {
        (0..7)
            .map(|i| {
                self.monday.checked_add(Duration::days(i)).ok_or_else(|| {
                    DomainError::DateArithmeticOverflow {
                        operation: String::from("expanding the week into 7 dates"),
                    }
                })
            })
            .collect()
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iso())
    }
}
