// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_roster_domain::ShiftKey;

/// A merged run of contiguous one-hour shifts within one day.
///
/// `end` is exclusive on a 1-24 scale, so `["08-09", "09-10"]` merges to
/// `start: 8, end: 10` and the CS tail `"23-00"` carries `end: 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    /// The start hour (0-23).
    pub start: u8,
    /// The exclusive end hour (1-24).
    pub end: u8,
}

impl HourRange {
    /// Returns the span in whole hours.
    #[must_use]
    pub const fn hours(&self) -> u16 {
        (self.end - self.start) as u16
    }

    /// Returns the human-facing label, e.g. `"08:00-10:00"`.
    ///
    /// Hour 24 displays as `00:00`, matching the slot grid's midnight
    /// wrap.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}:00-{:02}:00", self.start, self.end % 24)
    }
}

impl std::fmt::Display for HourRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Merges shift keys into contiguous hour ranges.
///
/// Keys are sorted ascending by start hour and deduplicated first, so
/// the result is stable under input reordering and accidental duplicate
/// rows. Two shifts merge iff the end hour of the earlier equals the
/// start hour of the later.
#[must_use]
pub fn merge_shift_ranges(keys: &[ShiftKey]) -> Vec<HourRange> {
    let mut pairs: Vec<(u8, u8)> = keys
        .iter()
        .map(|key| (key.start_hour(), key.end_exclusive()))
        .collect();
    pairs.sort_unstable();
    pairs.dedup();

    let mut ranges: Vec<HourRange> = Vec::new();
    for (start, end) in pairs {
        if let Some(last) = ranges.last_mut() {
            if last.end == start {
                last.end = end;
                continue;
            }
        }
        ranges.push(HourRange { start, end });
    }
    ranges
}
