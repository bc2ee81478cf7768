//! Temporal progress display: remaining-time labels and elapsed percentage.
//!
//! Both functions are pure with respect to their explicit inputs. The
//! current instant is a parameter, never an ambient read, so callers can
//! fix arbitrary instants deterministically and feed both figures of one
//! render pass from the same clock sample.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Display label shown while a project is frozen.
const ARCHIVED_LABEL: &str = "archived";

/// Display label shown once the deadline has been reached.
const OVERDUE_LABEL: &str = "overdue";

/// Display status of a project.
///
/// The calculator only distinguishes the exact label `"archived"`
/// (terminal, display-only) from everything else. Listing collaborators
/// use arbitrary labels such as `"in_progress"`, so this stays an open
/// string rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectStatus(String);

impl ProjectStatus {
    /// The terminal, display-only label.
    pub const ARCHIVED: &'static str = ARCHIVED_LABEL;

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_archived(&self) -> bool {
        self.0 == Self::ARCHIVED
    }
}

/// Temporal bounds and status of a project, as the progress widgets see it.
///
/// `start_date <= deadline` is assumed but not enforced; the calculators
/// stay total when it does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub start_date: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub status: ProjectStatus,
}

impl Project {
    pub fn remaining_time_label(&self, now: DateTime<Utc>) -> String {
        remaining_time_label(self.deadline, &self.status, now)
    }

    pub fn elapsed_percent(&self, now: DateTime<Utc>) -> u8 {
        elapsed_percent(self.start_date, self.deadline, &self.status, now)
    }
}

/// Human-facing remaining-time text for a deadline.
///
/// Archived projects are frozen for display and always read `"archived"`,
/// whatever the deadline holds; a reached or passed deadline reads
/// `"overdue"`. Otherwise the remaining window decomposes into whole days
/// and hours, or into hours and minutes when less than a day remains, so
/// a short window never displays as "0 days".
pub fn remaining_time_label(
    deadline: DateTime<Utc>,
    status: &ProjectStatus,
    now: DateTime<Utc>,
) -> String {
    if status.is_archived() {
        return ARCHIVED_LABEL.to_string();
    }

    let delta = deadline - now;
    if delta <= Duration::zero() {
        return OVERDUE_LABEL.to_string();
    }

    let days = delta.num_days();
    if days > 0 {
        let hours = (delta - Duration::days(days)).num_hours();
        format!("{days} days {hours} hours")
    } else {
        let hours = delta.num_hours();
        let minutes = (delta - Duration::hours(hours)).num_minutes();
        format!("{hours} hours {minutes} minutes")
    }
}

/// Share of the scheduled window that has passed at `now`, as an integer
/// percent in `[0, 100]`.
///
/// Archived projects are fully elapsed by definition. The window total is
/// floored at one millisecond so a zero-width or inverted range cannot
/// divide by zero, and elapsed time clamps into `[0, total]`.
pub fn elapsed_percent(
    start_date: DateTime<Utc>,
    deadline: DateTime<Utc>,
    status: &ProjectStatus,
    now: DateTime<Utc>,
) -> u8 {
    if status.is_archived() {
        return 100;
    }

    let total_ms = (deadline - start_date).num_milliseconds().max(1);
    let elapsed_ms = (now - start_date).num_milliseconds().clamp(0, total_ms);

    (elapsed_ms as f64 / total_ms as f64 * 100.0).round() as u8
}
