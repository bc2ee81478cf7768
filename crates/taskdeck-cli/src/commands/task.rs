//! Task action policy commands for CLI.

use clap::Subcommand;
use serde::Serialize;
use taskdeck_core::{available_actions, common_action_keys, Action, ActionKey, TaskStatus, TaskView};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Show the action row for a lifecycle status
    Actions {
        /// Status label (e.g. "not_started", "running", "failed")
        status: String,
        /// The task has entered the queue at least once before
        #[arg(long)]
        queued_before: bool,
        /// Print only the always-visible keys
        #[arg(long)]
        common: bool,
    },
    /// Print the full policy table for every status
    Matrix,
}

/// One row of the policy table as printed by `matrix`.
#[derive(Serialize)]
struct PolicyRow {
    status: TaskStatus,
    has_queued_before: bool,
    available: Vec<Action>,
    common: Vec<ActionKey>,
}

fn row(view: TaskView) -> PolicyRow {
    PolicyRow {
        status: view.status,
        has_queued_before: view.has_queued_before,
        available: available_actions(&view),
        common: common_action_keys(&view),
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Actions {
            status,
            queued_before,
            common,
        } => {
            let status: TaskStatus = status.parse()?;
            let view = TaskView::new(status, queued_before);
            if common {
                println!("{}", serde_json::to_string_pretty(&common_action_keys(&view))?);
            } else {
                println!("{}", serde_json::to_string_pretty(&available_actions(&view))?);
            }
        }
        TaskAction::Matrix => {
            let mut rows = Vec::new();
            for status in TaskStatus::ALL {
                rows.push(row(TaskView::new(status, false)));
                // The queue-history flag only changes the not_started row.
                if status == TaskStatus::NotStarted {
                    rows.push(row(TaskView::new(status, true)));
                }
            }
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}
