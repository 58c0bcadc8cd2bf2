// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::week::{format_iso_date, parse_iso_date};
use time::Date;

/// Identifies one hour-long shift by its zero-padded hour boundaries.
///
/// The canonical wire form is `HH-HH` (`"08-09"`, `"23-00"`). Slot
/// identity is exact string equality on the canonical form, so raw
/// backend values using single-digit hours (`"8-9"`) must pass through
/// [`ShiftKey::parse`] before being used as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftKey {
    /// The start hour (0-23).
    start: u8,
    /// The end hour as displayed (0-23; 0 means midnight).
    end: u8,
}

impl ShiftKey {
    /// Creates the one-hour shift starting at the given hour.
    ///
    /// The end hour wraps modulo 24 so the 23:00 slot reads `23-00`
    /// rather than an invalid `23-24`.
    #[must_use]
    pub const fn from_start_hour(hour: u8) -> Self {
        let start: u8 = hour % 24;
        Self {
            start,
            end: (start + 1) % 24,
        }
    }

    /// Parses and normalizes a raw shift key.
    ///
    /// Tolerates unpadded hours (`"8-9"`); anything that is not one or
    /// two digits on each side of a single dash, with both hours below
    /// 24, is rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidShiftKey` for malformed input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        let invalid = || DomainError::InvalidShiftKey(raw.to_string());

        let (start_raw, end_raw) = trimmed.split_once('-').ok_or_else(invalid)?;
        let start: u8 = parse_hour(start_raw).ok_or_else(invalid)?;
        let end: u8 = parse_hour(end_raw).ok_or_else(invalid)?;
        Ok(Self { start, end })
    }

    /// Returns the start hour (0-23).
    #[must_use]
    pub const fn start_hour(&self) -> u8 {
        self.start
    }

    /// Returns the end hour as displayed (0-23; 0 means midnight).
    #[must_use]
    pub const fn end_hour(&self) -> u8 {
        self.end
    }

    /// Returns the end hour on a 1-24 scale, where midnight is 24.
    ///
    /// This is the form used for ordering and contiguous-range merging.
    #[must_use]
    pub const fn end_exclusive(&self) -> u8 {
        if self.end == 0 { 24 } else { self.end }
    }

    /// Returns the human-facing label, e.g. `"08:00 - 09:00"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}:00 - {:02}:00", self.start, self.end)
    }
}

fn parse_hour(raw: &str) -> Option<u8> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u8 = raw.parse().ok()?;
    (hour <= 23).then_some(hour)
}

impl std::fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.start, self.end)
    }
}

impl PartialOrd for ShiftKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShiftKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.start, self.end_exclusive()).cmp(&(other.start, other.end_exclusive()))
    }
}

/// The addressable unit of schedulable time: one date plus one shift key.
///
/// Displayed as `YYYY-MM-DD|HH-HH`, the composite key both availability
/// and assignments are stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    /// The calendar date.
    pub date: Date,
    /// The hour-range key.
    pub shift: ShiftKey,
}

impl SlotId {
    /// Creates a new `SlotId`.
    #[must_use]
    pub const fn new(date: Date, shift: ShiftKey) -> Self {
        Self { date, shift }
    }

    /// Parses a composite `YYYY-MM-DD|HH-HH` identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSlotId` if the separator is missing,
    /// or the underlying date/shift parse errors otherwise.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (date_raw, shift_raw) = raw
            .split_once('|')
            .ok_or_else(|| DomainError::InvalidSlotId(raw.to_string()))?;
        Ok(Self {
            date: parse_iso_date(date_raw.trim())?,
            shift: ShiftKey::parse(shift_raw)?,
        })
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", format_iso_date(self.date), self.shift)
    }
}

impl PartialOrd for SlotId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.date, self.shift).cmp(&(other.date, other.shift))
    }
}
