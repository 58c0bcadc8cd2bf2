// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the company part-time overview and color stability.

use super::helpers::{
    create_assignments, create_fulltime_person, create_slot, create_test_week,
};
use crate::{ColorAssigner, CompanyView, PALETTE_SIZE, company_overview};
use shift_roster::AssignmentModel;
use shift_roster_domain::{EmailKey, ScheduleStatus, Team};

#[test]
fn test_no_finalized_team_yields_not_finalized() {
    let cs = create_assignments(Team::Cs, &[(0, "08-09", "an.tran@example.com", "An Tran")]);
    let mo = create_assignments(Team::Mo, &[(0, "09-10", "chi.vo@example.com", "Chi Vo")]);

    let view = company_overview(
        create_test_week(),
        &[(ScheduleStatus::Draft, &cs), (ScheduleStatus::Draft, &mo)],
        None,
        &mut ColorAssigner::new(),
    );

    assert_eq!(view, CompanyView::NotFinalized);
}

#[test]
fn test_combines_rows_across_finalized_teams() {
    let cs = create_assignments(Team::Cs, &[(0, "08-09", "an.tran@example.com", "An Tran")]);
    let mo = create_assignments(Team::Mo, &[(0, "09-10", "chi.vo@example.com", "Chi Vo")]);

    let view = company_overview(
        create_test_week(),
        &[(ScheduleStatus::Final, &cs), (ScheduleStatus::Final, &mo)],
        None,
        &mut ColorAssigner::new(),
    );

    let CompanyView::Ready(overview) = view else {
        panic!("expected a ready overview");
    };
    assert_eq!(overview.days.len(), 1);
    assert_eq!(overview.days[0].slots.len(), 2);
    assert_eq!(overview.days[0].slots[0].shift.to_string(), "08-09");
    assert_eq!(overview.days[0].slots[1].shift.to_string(), "09-10");
}

#[test]
fn test_team_filter_restricts_to_one_team() {
    let cs = create_assignments(Team::Cs, &[(0, "08-09", "an.tran@example.com", "An Tran")]);
    let mo = create_assignments(Team::Mo, &[(0, "09-10", "chi.vo@example.com", "Chi Vo")]);

    let view = company_overview(
        create_test_week(),
        &[(ScheduleStatus::Final, &cs), (ScheduleStatus::Final, &mo)],
        Some(Team::Mo),
        &mut ColorAssigner::new(),
    );

    let CompanyView::Ready(overview) = view else {
        panic!("expected a ready overview");
    };
    assert_eq!(overview.days[0].slots.len(), 1);
    assert_eq!(overview.days[0].slots[0].people[0].team, Team::Mo);
}

#[test]
fn test_fulltime_staff_are_excluded_from_the_summary() {
    let mut model = AssignmentModel::new(create_test_week(), Team::Cs);
    model.replace_from([
        (
            create_slot(0, "08-09"),
            create_fulltime_person("binh.le@example.com", "Binh Le", Team::Cs),
        ),
        (
            create_slot(0, "08-09"),
            super::helpers::create_person("an.tran@example.com", "An Tran", Team::Cs),
        ),
    ]);

    let view = company_overview(
        create_test_week(),
        &[(ScheduleStatus::Final, &model)],
        None,
        &mut ColorAssigner::new(),
    );

    let CompanyView::Ready(overview) = view else {
        panic!("expected a ready overview");
    };
    let people = &overview.days[0].slots[0].people;
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].email, EmailKey::new("an.tran@example.com"));
}

#[test]
fn test_fulltime_only_slots_disappear_entirely() {
    let mut model = AssignmentModel::new(create_test_week(), Team::Cs);
    model.replace_from([(
        create_slot(0, "08-09"),
        create_fulltime_person("binh.le@example.com", "Binh Le", Team::Cs),
    )]);

    let view = company_overview(
        create_test_week(),
        &[(ScheduleStatus::Final, &model)],
        None,
        &mut ColorAssigner::new(),
    );

    let CompanyView::Ready(overview) = view else {
        panic!("expected a ready overview");
    };
    assert!(overview.days.is_empty());
}

#[test]
fn test_color_assignment_is_stable_per_email() {
    let mut colors = ColorAssigner::new();
    let first = colors.assign(&EmailKey::new("an.tran@example.com"));
    let second = colors.assign(&EmailKey::new("chi.vo@example.com"));
    let repeat = colors.assign(&EmailKey::new("AN.TRAN@example.com"));

    assert_eq!(first, repeat, "same email must keep its color");
    assert_ne!(first, second);
}

#[test]
fn test_palette_wraps_after_exhaustion() {
    let mut colors = ColorAssigner::new();
    for i in 0..PALETTE_SIZE {
        let email = EmailKey::new(&format!("person{i}@example.com"));
        assert_eq!(colors.assign(&email), i);
    }

    let overflow = colors.assign(&EmailKey::new("one.more@example.com"));
    assert_eq!(overflow, 0, "palette indices wrap by first appearance");
}
