// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod output;

use clap::{Parser, Subcommand};
use shift_roster::{AssignmentModel, Person};
use shift_roster_api::ScheduleBackend;
use shift_roster_app::{AdminGridController, EmployeeGridController};
use shift_roster_client::HttpScheduleBackend;
use shift_roster_domain::{
    EmailKey, Employee, EmploymentType, SlotId, Team, WeekStart,
};
use shift_roster_view::{ColorAssigner, company_overview};
use std::time::Duration;
use tracing::info;

/// Shift Roster - weekly availability and shift assignment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scheduling endpoint URL (plain http)
    #[arg(long, default_value = "http://localhost:8080/exec")]
    api_url: String,

    /// Acting identity: email
    #[arg(long)]
    email: String,

    /// Acting identity: display name
    #[arg(long)]
    name: String,

    /// Acting identity: team (cs or mo)
    #[arg(long, default_value = "cs")]
    team: String,

    /// Acting identity: employment type (parttime or fulltime)
    #[arg(long, default_value = "parttime")]
    employment_type: String,

    /// Week start (a Monday, `YYYY-MM-DD`). Defaults to this week's
    /// Monday so the currently-relevant state shows first.
    #[arg(long)]
    week: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the self-service availability grid and personal summary
    Grid,
    /// Toggle availability slots (`YYYY-MM-DD|HH-HH`) and save the week
    Toggle {
        /// Slot identifiers to flip
        slots: Vec<String>,
    },
    /// Show the leader grid with per-slot counts and badges
    Admin,
    /// Quick-assign an employee to slots and save the week
    Assign {
        /// The employee to place
        #[arg(long)]
        employee_email: String,
        /// The employee's display name
        #[arg(long)]
        employee_name: String,
        /// Slot identifiers to assign into
        slots: Vec<String>,
    },
    /// Toggle the week's draft/final lock
    Lock {
        /// Note to attach to the transition
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Show the company-wide part-time overview
    Summary {
        /// Restrict to one team
        #[arg(long)]
        team_filter: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Args = Args::parse();

    let week_start: WeekStart = match &args.week {
        Some(raw) => WeekStart::parse(raw)?,
        None => WeekStart::containing(time::OffsetDateTime::now_utc().date())?,
    };

    let employee: Employee = Employee::new(
        EmailKey::new(&args.email),
        args.name.clone(),
        Team::parse_lossy(&args.team),
        EmploymentType::parse_lossy(&args.employment_type),
    );

    let backend: HttpScheduleBackend =
        HttpScheduleBackend::new(&args.api_url, Duration::from_secs(args.timeout_secs))?;
    info!(week = %week_start, team = %employee.team, "shift roster starting");

    match args.command {
        Command::Grid => {
            let mut controller = EmployeeGridController::new(backend, employee, week_start)?;
            controller.load().await;
            output::print_employee_view(&controller.render());
        }
        Command::Toggle { slots } => {
            let mut controller = EmployeeGridController::new(backend, employee, week_start)?;
            controller.load().await;
            for raw in &slots {
                let slot: SlotId = SlotId::parse(raw)?;
                match controller.toggle(slot) {
                    Ok(now_free) => {
                        println!("{slot}: {}", if now_free { "free" } else { "cleared" });
                    }
                    Err(err) => {
                        println!("{slot}: rejected - {err}");
                    }
                }
            }
            match controller.save().await {
                Ok(()) => println!("Availability saved for week {week_start}."),
                Err(err) => println!("Save failed: {err}"),
            }
            output::print_employee_view(&controller.render());
        }
        Command::Admin => {
            let mut controller =
                AdminGridController::new(backend, employee.clone(), week_start, employee.team)?;
            controller.load().await;
            output::print_admin_view(&controller.render());
        }
        Command::Assign {
            employee_email,
            employee_name,
            slots,
        } => {
            let team: Team = employee.team;
            let mut controller =
                AdminGridController::new(backend, employee, week_start, team)?;
            controller.load().await;
            for raw in &slots {
                controller.toggle_select(SlotId::parse(raw)?);
            }
            let person: Person = Person::new(
                EmailKey::new(&employee_email),
                employee_name.clone(),
                team,
            );
            let added: usize = controller.quick_assign(&person);
            println!("Assigned {employee_name} to {added} slot(s).");
            match controller.save_week().await {
                Ok(()) => println!("Week schedule saved."),
                Err(err) => println!("Save failed: {err}"),
            }
            output::print_admin_view(&controller.render());
        }
        Command::Lock { note } => {
            let team: Team = employee.team;
            let mut controller =
                AdminGridController::new(backend, employee, week_start, team)?;
            controller.load().await;
            match controller.toggle_lock(&note).await {
                Ok(status) => println!("Week {week_start} ({team}) is now {status}."),
                Err(err) => println!("Lock toggle failed: {err}"),
            }
            output::print_admin_view(&controller.render());
        }
        Command::Summary { team_filter } => {
            let filter: Option<Team> = match team_filter.as_deref() {
                Some(raw) => Some(raw.parse()?),
                None => None,
            };
            let view = build_company_summary(&backend, week_start, filter).await?;
            output::print_company_view(&view);
        }
    }

    Ok(())
}

/// Fetches both teams' finalized schedules and merges them into the
/// company part-time overview.
async fn build_company_summary(
    backend: &HttpScheduleBackend,
    week_start: WeekStart,
    team_filter: Option<Team>,
) -> Result<shift_roster_view::CompanyView, Box<dyn std::error::Error>> {
    let mut sections: Vec<(shift_roster_domain::ScheduleStatus, AssignmentModel)> = Vec::new();
    for team in [Team::Cs, Team::Mo] {
        let meta = backend.get_schedule_meta(week_start, team).await?;
        let rows = backend.get_schedule(week_start, team).await?;
        let mut model: AssignmentModel = AssignmentModel::new(week_start, team);
        model.replace_from(rows);
        sections.push((meta.status, model));
    }

    let borrowed: Vec<_> = sections
        .iter()
        .map(|(status, model)| (*status, model))
        .collect();
    Ok(company_overview(
        week_start,
        &borrowed,
        team_filter,
        &mut ColorAssigner::new(),
    ))
}
