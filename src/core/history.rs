//! Linear undo/redo history of visited states.
//!
//! The history is two complementary stacks: the forward path of committed
//! states and the redo buffer filled by undo.

use crate::machine::FsmError;
use serde::{Deserialize, Serialize};

/// Forward path plus redo buffer.
///
/// The path is never empty and its first entry is always the state the
/// history was created with. The last entry is the current state.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateHistory;
///
/// let mut history = StateHistory::new("Start");
/// history.push("Middle");
/// history.push("End");
/// assert_eq!(history.path(), ["Start", "Middle", "End"]);
///
/// assert!(history.undo());
/// assert_eq!(history.current(), "Middle");
/// assert!(history.redo());
/// assert_eq!(history.current(), "End");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct StateHistory {
    path: Vec<String>,
    redo: Vec<String>,
}

/// Unchecked wire form of [`StateHistory`].
#[derive(Deserialize)]
struct RawHistory {
    path: Vec<String>,
    #[serde(default)]
    redo: Vec<String>,
}

impl TryFrom<RawHistory> for StateHistory {
    type Error = FsmError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.path.is_empty() {
            return Err(FsmError::History("path must contain a root state".to_string()));
        }
        Ok(Self {
            path: raw.path,
            redo: raw.redo,
        })
    }
}

impl StateHistory {
    /// Create a history rooted at `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            path: vec![initial.into()],
            redo: Vec::new(),
        }
    }

    /// Current state: the newest entry of the path.
    pub fn current(&self) -> &str {
        // path is never empty
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// State the history is rooted at.
    pub fn root(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    /// Commit a forward move to `state`.
    ///
    /// Always discards the redo buffer, even when `state` equals the
    /// current state.
    pub fn push(&mut self, state: impl Into<String>) {
        self.path.push(state.into());
        self.redo.clear();
    }

    /// Step back one entry. Returns `false` if only the root remains.
    pub fn undo(&mut self) -> bool {
        if self.path.len() <= 1 {
            return false;
        }
        self.redo.extend(self.path.pop());
        true
    }

    /// Re-apply the most recently undone entry. Returns `false` if the
    /// redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(state) => {
                self.path.push(state);
                true
            }
            None => false,
        }
    }

    /// Drop everything but the root, including the redo buffer.
    pub fn clear(&mut self) {
        self.path.truncate(1);
        self.redo.clear();
    }

    /// States visited, oldest first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Undone states, the next one to redo last.
    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }

    /// Check whether anything besides the root is on the path.
    pub fn can_undo(&self) -> bool {
        self.path.len() > 1
    }

    /// Check whether an undone state is waiting to be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of entries on the path (at least one).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`: the root can never be removed.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_holds_only_root() {
        let history = StateHistory::new("Initial");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), "Initial");
        assert_eq!(history.root(), "Initial");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn push_appends_and_clears_redo() {
        let mut history = StateHistory::new("Initial");
        history.push("Processing");
        history.push("Complete");
        assert!(history.undo());
        assert!(history.can_redo());

        history.push("Failed");
        assert!(!history.can_redo());
        assert_eq!(history.path(), ["Initial", "Processing", "Failed"]);
    }

    #[test]
    fn push_of_current_state_still_clears_redo() {
        let mut history = StateHistory::new("Initial");
        history.push("Processing");
        assert!(history.undo());

        history.push("Initial");
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn undo_stops_at_root() {
        let mut history = StateHistory::new("Initial");
        history.push("Processing");
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.current(), "Initial");
        assert_eq!(history.redo_stack(), ["Processing"]);
    }

    #[test]
    fn redo_replays_in_reverse_undo_order() {
        let mut history = StateHistory::new("A");
        history.push("B");
        history.push("C");
        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(history.redo_stack(), ["C", "B"]);

        assert!(history.redo());
        assert_eq!(history.current(), "B");
        assert!(history.redo());
        assert_eq!(history.current(), "C");
        assert!(!history.redo());
    }

    #[test]
    fn clear_keeps_root_and_drops_redo() {
        let mut history = StateHistory::new("A");
        history.push("B");
        history.push("C");
        assert!(history.undo());

        history.clear();
        assert_eq!(history.path(), ["A"]);
        assert!(!history.can_redo());
        assert!(!history.redo());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new("A");
        history.push("B");
        history.undo();

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }

    #[test]
    fn empty_path_is_rejected_on_deserialize() {
        let result = serde_json::from_str::<StateHistory>(r#"{"path":[],"redo":["X"]}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("root state"));
    }

    #[test]
    fn missing_redo_defaults_to_empty() {
        let history: StateHistory = serde_json::from_str(r#"{"path":["A","B"]}"#).unwrap();
        assert_eq!(history.root(), "A");
        assert_eq!(history.current(), "B");
        assert!(!history.can_redo());
    }
}
