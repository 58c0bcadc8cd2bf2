// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for contiguous shift-range merging.

use super::helpers::shift_keys;
use crate::{HourRange, merge_shift_ranges};

#[test]
fn test_adjacent_shifts_merge_into_one_range() {
    let ranges = merge_shift_ranges(&shift_keys(&["08-09", "09-10"]));

    assert_eq!(ranges, vec![HourRange { start: 8, end: 10 }]);
    assert_eq!(ranges[0].label(), "08:00-10:00");
}

#[test]
fn test_duplicates_do_not_change_the_result() {
    let with_duplicate = merge_shift_ranges(&shift_keys(&["08-09", "09-10", "09-10", "13-14"]));
    let without = merge_shift_ranges(&shift_keys(&["08-09", "09-10", "13-14"]));

    assert_eq!(with_duplicate, without);
    assert_eq!(
        with_duplicate,
        vec![
            HourRange { start: 8, end: 10 },
            HourRange { start: 13, end: 14 },
        ]
    );

    let total: u16 = with_duplicate.iter().map(HourRange::hours).sum();
    assert_eq!(total, 3);
}

#[test]
fn test_merge_is_stable_under_reordering() {
    let shuffled = merge_shift_ranges(&shift_keys(&["13-14", "09-10", "08-09"]));
    let ordered = merge_shift_ranges(&shift_keys(&["08-09", "09-10", "13-14"]));

    assert_eq!(shuffled, ordered);
}

#[test]
fn test_non_adjacent_shifts_stay_separate() {
    let ranges = merge_shift_ranges(&shift_keys(&["08-09", "10-11"]));

    assert_eq!(
        ranges,
        vec![
            HourRange { start: 8, end: 9 },
            HourRange { start: 10, end: 11 },
        ]
    );
}

#[test]
fn test_midnight_tail_merges_and_labels_correctly() {
    let ranges = merge_shift_ranges(&shift_keys(&["22-23", "23-00"]));

    assert_eq!(ranges, vec![HourRange { start: 22, end: 24 }]);
    assert_eq!(ranges[0].label(), "22:00-00:00");
    assert_eq!(ranges[0].hours(), 2);
}

#[test]
fn test_empty_input_yields_no_ranges() {
    assert!(merge_shift_ranges(&[]).is_empty());
}

#[test]
fn test_full_cs_day_collapses_to_one_range() {
    let keys = shift_keys(&[
        "08-09", "09-10", "10-11", "11-12", "12-13", "13-14", "14-15", "15-16", "16-17", "17-18",
        "18-19", "19-20", "20-21", "21-22", "22-23", "23-00",
    ]);

    let ranges = merge_shift_ranges(&keys);

    assert_eq!(ranges, vec![HourRange { start: 8, end: 24 }]);
    assert_eq!(ranges[0].hours(), 16);
}
