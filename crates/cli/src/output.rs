// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of the page view models.

use shift_roster_app::{AdminGridView, EmployeeGridView, Notice};
use shift_roster_domain::format_iso_date;
use shift_roster_view::{CompanyView, FinalizedSchedule};
use time::Date;

/// Marker rendered inside an available / assigned cell.
const MARK: &str = "x";

fn day_header(dates: &[Date]) -> String {
    let mut header: String = format!("{:<15}", "");
    for &date in dates {
        let weekday: String = date.weekday().to_string();
        header.push_str(&format!(
            "{:<9}",
            format!("{} {:02}", &weekday[..3.min(weekday.len())], date.day())
        ));
    }
    header
}

fn print_notice(notice: Option<&Notice>) {
    if let Some(notice) = notice {
        let prefix: &str = if notice.is_error { "!" } else { "*" };
        println!("{prefix} {}", notice.text);
    }
}

/// Prints the self-service grid and the personal finalized summary.
pub fn print_employee_view(view: &EmployeeGridView) {
    println!(
        "Week {} | team grid: {} rows | status: {}",
        view.week_start,
        view.rows.len(),
        view.status
    );
    if let Some(who) = &view.locked_by {
        println!("Finalized by {who}.");
    }
    print_notice(view.notice.as_ref());

    if view.eligible {
        println!("{}", day_header(&view.dates));
        for row in &view.rows {
            let mut line: String = format!("{:<15}", row.label);
            for cell in &row.cells {
                let mark: &str = if cell.available { MARK } else { "." };
                line.push_str(&format!("{mark:<9}"));
            }
            println!("{line}");
        }
        if !view.can_edit {
            println!("(read-only: the week is finalized)");
        }
        if view.dirty {
            println!("(unsaved changes - save this week to persist them)");
        }
    } else {
        println!("Self-service availability is not available for your role.");
    }

    print_personal(&view.finalized);
}

/// Prints the personal finalized summary.
pub fn print_personal(finalized: &FinalizedSchedule) {
    println!("-- Published schedule --");
    match finalized {
        FinalizedSchedule::NotFinalized => {
            println!("This week has not been finalized yet.");
        }
        FinalizedSchedule::Ready(summary) => {
            if summary.days.is_empty() {
                println!("No shifts assigned this week.");
                return;
            }
            for day in &summary.days {
                let ranges: Vec<String> = day.ranges.iter().map(ToString::to_string).collect();
                println!(
                    "{}  {}  ({}h)",
                    format_iso_date(day.date),
                    ranges.join(", "),
                    day.hours
                );
            }
            println!(
                "Total: {}h across {} day(s).",
                summary.total_hours, summary.working_days
            );
        }
    }
}

/// Prints the leader grid with per-slot counts and badges.
pub fn print_admin_view(view: &AdminGridView) {
    println!(
        "Week {} | team {} | status: {}{}",
        view.week_start,
        view.team,
        view.status,
        view.locked_by
            .as_ref()
            .map(|who| format!(" (by {who})"))
            .unwrap_or_default()
    );
    print_notice(view.notice.as_ref());
    if view.selection_count > 0 {
        println!("{} slot(s) selected for quick-assign.", view.selection_count);
    }

    println!("{}", day_header(&view.dates));
    for row in &view.rows {
        let mut line: String = format!("{:<15}", row.label);
        for cell in &row.cells {
            let selected: &str = if cell.selected { "*" } else { "" };
            line.push_str(&format!(
                "{:<9}",
                format!("{}/{}{selected}", cell.assigned_count, cell.available_count)
            ));
        }
        println!("{line}");

        for cell in &row.cells {
            for badge in &cell.badges {
                if badge.assigned || badge.anomaly {
                    let date: String = format_iso_date(cell.slot.date);
                    let flag: &str = if badge.anomaly { " [override]" } else { "" };
                    println!("    {date} {}: {}{flag}", cell.slot.shift, badge.person.name);
                }
            }
        }
    }

    if view.dirty {
        println!("(unsaved changes - save this week to persist them)");
    }

    println!("-- Finalized summary --");
    print_company_view(&view.summary);
}

/// Prints the company part-time overview.
pub fn print_company_view(view: &CompanyView) {
    match view {
        CompanyView::NotFinalized => {
            println!("This week has not been finalized yet.");
        }
        CompanyView::Ready(overview) => {
            if overview.days.is_empty() {
                println!("No part-time shifts assigned this week.");
                return;
            }
            for day in &overview.days {
                println!("{}:", format_iso_date(day.date));
                for slot in &day.slots {
                    let tags: Vec<String> = slot
                        .people
                        .iter()
                        .map(|tag| format!("{} [{}|c{}]", tag.name, tag.team, tag.color_index))
                        .collect();
                    println!("  {}  {}", slot.shift.label(), tags.join("  "));
                }
            }
        }
    }
}
