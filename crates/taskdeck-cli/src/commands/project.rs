//! Project progress commands for CLI.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde::Serialize;
use taskdeck_core::{elapsed_percent, remaining_time_label, ProjectStatus};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Compute the remaining-time label and elapsed percent
    Progress {
        /// Project start instant (RFC 3339)
        #[arg(long)]
        start: DateTime<Utc>,
        /// Project deadline instant (RFC 3339)
        #[arg(long)]
        deadline: DateTime<Utc>,
        /// Project status label; "archived" freezes the display
        #[arg(long, default_value = "active")]
        status: String,
        /// Query instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
}

#[derive(Serialize)]
struct ProgressReport {
    remaining: String,
    elapsed_percent: u8,
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProjectAction::Progress {
            start,
            deadline,
            status,
            now,
        } => {
            let status = ProjectStatus::new(status);
            // One clock read per invocation; both figures reflect the same
            // instant.
            let now = now.unwrap_or_else(Utc::now);
            let report = ProgressReport {
                remaining: remaining_time_label(deadline, &status, now),
                elapsed_percent: elapsed_percent(start, deadline, &status, now),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
