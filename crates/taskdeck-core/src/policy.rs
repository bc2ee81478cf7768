//! Action policy table: which operations a task's status makes offerable.
//!
//! Both lookups are pure and total over the closed status set, with no
//! hidden fallthrough. The caller wires each returned key to an actual
//! side-effecting handler owned by the task service; this module only
//! decides what is offerable and which entries render inline rather than
//! in the overflow menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::task::{TaskStatus, TaskView};

/// Stable identifier for a user-facing operation, distinct from its
/// label and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKey {
    View,
    Start,
    Retry,
    CancelQueue,
    Edit,
    Delete,
    Stop,
    Export,
    Archive,
    Copy,
}

impl ActionKey {
    /// Stable snake_case label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKey::View => "view",
            ActionKey::Start => "start",
            ActionKey::Retry => "retry",
            ActionKey::CancelQueue => "cancel_queue",
            ActionKey::Edit => "edit",
            ActionKey::Delete => "delete",
            ActionKey::Stop => "stop",
            ActionKey::Export => "export",
            ActionKey::Archive => "archive",
            ActionKey::Copy => "copy",
        }
    }

    /// Fixed English label; the localization layer may translate it.
    pub fn label(self) -> &'static str {
        match self {
            ActionKey::View => "View",
            ActionKey::Start => "Start",
            ActionKey::Retry => "Retry",
            ActionKey::CancelQueue => "Cancel queue",
            ActionKey::Edit => "Edit",
            ActionKey::Delete => "Delete",
            ActionKey::Stop => "Stop",
            ActionKey::Export => "Export",
            ActionKey::Archive => "Archive",
            ActionKey::Copy => "Copy",
        }
    }

    /// Symbolic icon reference for this operation.
    pub fn icon(self) -> ActionIcon {
        match self {
            ActionKey::View => ActionIcon::Eye,
            ActionKey::Start => ActionIcon::Play,
            ActionKey::Retry => ActionIcon::RotateCcw,
            ActionKey::CancelQueue => ActionIcon::CircleX,
            ActionKey::Edit => ActionIcon::Pencil,
            ActionKey::Delete => ActionIcon::Trash,
            ActionKey::Stop => ActionIcon::SquareStop,
            ActionKey::Export => ActionIcon::Download,
            ActionKey::Archive => ActionIcon::ArchiveBox,
            ActionKey::Copy => ActionIcon::CopyDuplicate,
        }
    }

    /// The canonical action for this key.
    pub fn action(self) -> Action {
        Action {
            key: self,
            label: self.label(),
            icon: self.icon(),
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(ActionKey::View),
            "start" => Ok(ActionKey::Start),
            "retry" => Ok(ActionKey::Retry),
            "cancel_queue" => Ok(ActionKey::CancelQueue),
            "edit" => Ok(ActionKey::Edit),
            "delete" => Ok(ActionKey::Delete),
            "stop" => Ok(ActionKey::Stop),
            "export" => Ok(ActionKey::Export),
            "archive" => Ok(ActionKey::Archive),
            "copy" => Ok(ActionKey::Copy),
            other => Err(ParseError::UnknownActionKey(other.to_string())),
        }
    }
}

/// Symbolic icon reference; the caller maps it to an actual glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionIcon {
    Eye,
    Play,
    RotateCcw,
    CircleX,
    Pencil,
    Trash,
    SquareStop,
    Download,
    ArchiveBox,
    CopyDuplicate,
}

/// A user-facing operation plus its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    pub key: ActionKey,
    pub label: &'static str,
    pub icon: ActionIcon,
}

/// Ordered actions offerable for the task, in display order.
///
/// `Running` and `Archived` are the most restrictive rows: a live task
/// exposes only monitoring and `stop`, and an archived task only `view`.
pub fn available_actions(task: &TaskView) -> Vec<Action> {
    use ActionKey::*;

    let row: &[ActionKey] = match (task.status, task.has_queued_before) {
        // The queue-history flag substitutes the second entry only: a
        // first run offers `start`, a re-run offers `retry`.
        (TaskStatus::NotStarted, false) => &[View, Start, Edit, Delete],
        (TaskStatus::NotStarted, true) => &[View, Retry, Edit, Delete],
        (TaskStatus::Pending, _) => &[View, CancelQueue, Edit, Delete],
        (TaskStatus::Running, _) => &[View, Stop],
        (TaskStatus::Completed, _) => &[View, Export, Archive, Copy],
        // Error and user-initiated abort carry different meaning upstream
        // but offer the same corrections; the rows coincide, the statuses
        // stay distinct.
        (TaskStatus::Failed, _) | (TaskStatus::Cancelled, _) => &[View, Edit, Retry, Delete],
        (TaskStatus::Archived, _) => &[View],
        (TaskStatus::Paused, _) => &[View, Start, Stop],
    };

    row.iter().map(|key| key.action()).collect()
}

/// Keys promoted to always-visible placement, a subset of
/// [`available_actions`] for the same task.
///
/// Everything else renders in the overflow menu. For `Archived` the set
/// degenerates to the single key `view`.
pub fn common_action_keys(task: &TaskView) -> Vec<ActionKey> {
    use ActionKey::*;

    let keys: &[ActionKey] = match (task.status, task.has_queued_before) {
        (TaskStatus::NotStarted, false) => &[Start, Edit],
        (TaskStatus::NotStarted, true) => &[Retry, Edit],
        (TaskStatus::Pending, _) => &[CancelQueue, Edit],
        (TaskStatus::Running, _) => &[Stop],
        (TaskStatus::Completed, _) => &[Export, Archive],
        (TaskStatus::Failed, _) | (TaskStatus::Cancelled, _) => &[Retry, Edit],
        (TaskStatus::Archived, _) => &[View],
        (TaskStatus::Paused, _) => &[Start, Stop],
    };

    keys.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_for(status: TaskStatus, queued: bool) -> Vec<ActionKey> {
        available_actions(&TaskView::new(status, queued))
            .into_iter()
            .map(|action| action.key)
            .collect()
    }

    #[test]
    fn first_run_offers_start() {
        use ActionKey::*;
        let view = TaskView::new(TaskStatus::NotStarted, false);
        assert_eq!(keys_for(TaskStatus::NotStarted, false), vec![View, Start, Edit, Delete]);
        assert_eq!(common_action_keys(&view), vec![Start, Edit]);
    }

    #[test]
    fn queued_before_offers_retry_instead() {
        use ActionKey::*;
        let view = TaskView::new(TaskStatus::NotStarted, true);
        assert_eq!(keys_for(TaskStatus::NotStarted, true), vec![View, Retry, Edit, Delete]);
        assert_eq!(common_action_keys(&view), vec![Retry, Edit]);
    }

    #[test]
    fn pending_row_allows_leaving_the_queue() {
        use ActionKey::*;
        let view = TaskView::new(TaskStatus::Pending, true);
        assert_eq!(keys_for(TaskStatus::Pending, true), vec![View, CancelQueue, Edit, Delete]);
        assert_eq!(common_action_keys(&view), vec![CancelQueue, Edit]);
    }

    #[test]
    fn running_row_is_monitoring_plus_stop() {
        use ActionKey::*;
        let view = TaskView::new(TaskStatus::Running, false);
        assert_eq!(keys_for(TaskStatus::Running, false), vec![View, Stop]);
        assert_eq!(common_action_keys(&view), vec![Stop]);
    }

    #[test]
    fn completed_row_offers_followups() {
        use ActionKey::*;
        let view = TaskView::new(TaskStatus::Completed, true);
        assert_eq!(
            keys_for(TaskStatus::Completed, true),
            vec![View, Export, Archive, Copy]
        );
        assert_eq!(common_action_keys(&view), vec![Export, Archive]);
    }

    #[test]
    fn failed_and_cancelled_share_a_row() {
        for queued in [false, true] {
            assert_eq!(
                keys_for(TaskStatus::Failed, queued),
                keys_for(TaskStatus::Cancelled, queued)
            );
            assert_eq!(
                common_action_keys(&TaskView::new(TaskStatus::Failed, queued)),
                common_action_keys(&TaskView::new(TaskStatus::Cancelled, queued))
            );
        }
        use ActionKey::*;
        assert_eq!(keys_for(TaskStatus::Failed, false), vec![View, Edit, Retry, Delete]);
        assert_eq!(
            common_action_keys(&TaskView::new(TaskStatus::Cancelled, false)),
            vec![Retry, Edit]
        );
    }

    #[test]
    fn archived_row_degenerates_to_view() {
        let view = TaskView::new(TaskStatus::Archived, true);
        assert_eq!(keys_for(TaskStatus::Archived, true), vec![ActionKey::View]);
        assert_eq!(common_action_keys(&view), vec![ActionKey::View]);
    }

    #[test]
    fn paused_row_offers_resume_and_stop() {
        use ActionKey::*;
        let view = TaskView::new(TaskStatus::Paused, false);
        assert_eq!(keys_for(TaskStatus::Paused, false), vec![View, Start, Stop]);
        assert_eq!(common_action_keys(&view), vec![Start, Stop]);
    }

    #[test]
    fn common_keys_are_a_non_empty_subset_everywhere() {
        for status in TaskStatus::ALL {
            for queued in [false, true] {
                let view = TaskView::new(status, queued);
                let available = keys_for(status, queued);
                let common = common_action_keys(&view);

                assert!(!available.is_empty(), "{status}: empty action row");
                assert!(!common.is_empty(), "{status}: empty common set");
                assert!(
                    available.contains(&ActionKey::View),
                    "{status}: view missing from row"
                );
                for key in &common {
                    assert!(
                        available.contains(key),
                        "{status}: {key} promoted but not offered"
                    );
                }
            }
        }
    }

    #[test]
    fn queue_history_only_affects_not_started() {
        for status in TaskStatus::ALL {
            if status == TaskStatus::NotStarted {
                continue;
            }
            assert_eq!(keys_for(status, false), keys_for(status, true), "{status}");
        }
    }

    #[test]
    fn action_metadata_is_canonical() {
        let action = ActionKey::CancelQueue.action();
        assert_eq!(action.label, "Cancel queue");
        assert_eq!(action.icon, ActionIcon::CircleX);

        let json = serde_json::to_value(action).unwrap();
        assert_eq!(json["key"], "cancel_queue");
        assert_eq!(json["icon"], "circle-x");
        assert_eq!(json["label"], "Cancel queue");
    }

    #[test]
    fn action_key_round_trips_through_labels() {
        let row = available_actions(&TaskView::new(TaskStatus::Completed, false));
        for action in row {
            let parsed: ActionKey = action.key.as_str().parse().unwrap();
            assert_eq!(parsed, action.key);
        }
    }

    #[test]
    fn action_key_from_str_rejects_unknown_labels() {
        let err = "explode".parse::<ActionKey>().unwrap_err();
        assert_eq!(
            err,
            crate::error::ParseError::UnknownActionKey("explode".to_string())
        );
    }
}
