//! # Mutation Pipeline
//!
//! Coordinates an edit end to end: Lookup → Stage → Serialize → Commit → Reselect
//!
//! The coordinator manages:
//! - Staging edits on a deep copy of the parsed tree
//! - Serializing the staged tree through the document codec
//! - Committing text, tree and graph together
//! - Queueing the follow-up reselect
//! - Undo/redo history

use crate::config::EditorConfig;
use crate::mutations::{Edit, MutationError, MutationResult};
use crate::queue::{Task, TaskQueue};
use crate::state::EditorState;
use crate::undo_stack::{HistoryEntry, UndoStack};
use crate::EditorError;
use jsongraph_document::{DocumentCodec, JsonCodec};
use jsongraph_graph::NodeId;
use tracing::{debug, info, instrument, warn};

/// Applies edits to an [`EditorState`]
#[derive(Debug)]
pub struct MutationCoordinator {
    codec: Box<dyn DocumentCodec>,
    queue: TaskQueue,
    history: UndoStack,
}

impl MutationCoordinator {
    /// Coordinator with default history depth
    pub fn new(codec: Box<dyn DocumentCodec>) -> Self {
        Self {
            codec,
            queue: TaskQueue::new(),
            history: UndoStack::new(),
        }
    }

    /// JSON coordinator configured from `config`
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            codec: Box::new(JsonCodec::with_indent(config.indent)),
            queue: TaskQueue::new(),
            history: UndoStack::with_max_levels(config.history_limit),
        }
    }

    pub fn codec(&self) -> &dyn DocumentCodec {
        self.codec.as_ref()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Follow-up tasks still due to run
    pub fn pending_tasks(&self) -> usize {
        self.queue.pending()
    }

    /// Apply an edit and queue the reselect of its node
    ///
    /// This:
    /// 1. Looks up the node and validates the edit against it
    /// 2. Stages the edit on a copy of the parsed tree
    /// 3. Serializes the staged tree
    /// 4. Commits text, tree and graph
    /// 5. Queues a reselect of the edited node
    ///
    /// Any failure leaves every store as it was.
    #[instrument(skip(self, state, edit), fields(edit = edit.name(), node_id = %edit.node_id()))]
    pub fn apply(&mut self, state: &mut EditorState, edit: Edit) -> Result<MutationResult, MutationError> {
        self.queue.begin();

        let result = self.try_apply(state, &edit);
        match &result {
            Ok(MutationResult::Applied { version, .. }) => {
                info!(version, "Edit committed");
            }
            Ok(MutationResult::Noop { .. }) => {
                debug!("Edit matches current document");
            }
            Err(err) => {
                warn!(error = %err, "Edit rejected");
            }
        }
        result
    }

    fn try_apply(&mut self, state: &mut EditorState, edit: &Edit) -> Result<MutationResult, MutationError> {
        let node_id = edit.node_id().clone();

        // 1. Lookup + validate
        let node = state
            .graph()
            .find_node(&node_id)
            .cloned()
            .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;

        if !edit.validate(&node)? {
            return Ok(MutationResult::Noop { node_id });
        }

        // 2. Stage on a detached copy
        let mut staged = state.parsed().snapshot();
        edit.apply(&node, &mut staged)?;

        // 3. Serialize
        let text = self.codec.serialize(&staged)?;

        // 4. Commit (cannot fail past this point)
        let previous = state.commit(text, staged);
        self.history.record(HistoryEntry {
            snapshot: previous,
            node_id: Some(node_id.clone()),
            description: edit.describe(),
        });

        // 5. Reselect once the rebuild has landed
        self.queue.schedule(Task::Reselect { node_id: node_id.clone() });

        Ok(MutationResult::Applied {
            node_id,
            version: state.document().version(),
        })
    }

    /// Apply an edit and run its follow-up tasks immediately
    pub fn apply_and_settle(&mut self, state: &mut EditorState, edit: Edit) -> Result<MutationResult, MutationError> {
        let result = self.apply(state, edit)?;
        self.settle(state);
        Ok(result)
    }

    /// Run every queued task of the current generation; returns how many ran
    pub fn settle(&mut self, state: &mut EditorState) -> usize {
        let mut ran = 0;

        while let Some(task) = self.queue.pop() {
            match task {
                Task::Reselect { node_id } => {
                    let found = state.graph_mut().select_node(&node_id);
                    debug!(node_id = %node_id, found, "Reselected node");
                }
            }
            ran += 1;
        }

        ran
    }

    /// Replace the whole document with text edited outside the graph
    ///
    /// The text is parsed first; a parse error leaves every store untouched.
    #[instrument(skip(self, state, text), fields(bytes = text.len()))]
    pub fn replace_contents(&mut self, state: &mut EditorState, text: String) -> Result<(), EditorError> {
        self.queue.begin();

        let tree = self.codec.parse(&text).map_err(|err| {
            warn!(error = %err, "Replacement text rejected");
            err
        })?;

        let previous = state.commit(text, tree);
        self.history.record(HistoryEntry {
            snapshot: previous,
            node_id: None,
            description: "Replace contents".to_string(),
        });

        if let Some(id) = state.graph().selected_id().cloned() {
            self.queue.schedule(Task::Reselect { node_id: id });
        }

        info!(version = state.document().version(), "Contents replaced");
        Ok(())
    }

    /// Restore the tree before the most recent commit
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, state: &mut EditorState) -> Result<bool, MutationError> {
        self.queue.begin();

        let Some(entry) = self.history.pop_undo() else {
            return Ok(false);
        };

        match self.restore(state, entry) {
            Ok(replaced) => {
                self.history.push_redo(replaced);
                Ok(true)
            }
            Err((entry, err)) => {
                self.history.push_undo(entry);
                Err(err)
            }
        }
    }

    /// Reapply the most recently undone commit
    pub fn redo(&mut self, state: &mut EditorState) -> Result<bool, MutationError> {
        self.queue.begin();

        let Some(entry) = self.history.pop_redo() else {
            return Ok(false);
        };

        match self.restore(state, entry) {
            Ok(replaced) => {
                self.history.push_undo(replaced);
                Ok(true)
            }
            Err((entry, err)) => {
                self.history.push_redo(entry);
                Err(err)
            }
        }
    }

    /// Commit `entry`'s snapshot and return an entry for the tree it replaced
    fn restore(
        &mut self,
        state: &mut EditorState,
        entry: HistoryEntry,
    ) -> Result<HistoryEntry, (HistoryEntry, MutationError)> {
        let text = match self.codec.serialize(&entry.snapshot) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "History restore failed");
                return Err((entry, err.into()));
            }
        };

        let HistoryEntry {
            snapshot,
            node_id,
            description,
        } = entry;

        let replaced = state.commit(text, snapshot);
        if let Some(id) = &node_id {
            self.queue.schedule(Task::Reselect { node_id: id.clone() });
        }

        info!(description = %description, version = state.document().version(), "History restored");

        Ok(HistoryEntry {
            snapshot: replaced,
            node_id,
            description,
        })
    }

    /// Id of the node a reselect is queued for, if any
    pub fn pending_reselect(&self) -> Option<NodeId> {
        self.queue.peek().map(|task| match task {
            Task::Reselect { node_id } => node_id.clone(),
        })
    }
}

impl Default for MutationCoordinator {
    fn default() -> Self {
        Self::new(Box::new(JsonCodec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsongraph_document::Path;
    use serde_json::json;

    fn load(text: &str) -> (MutationCoordinator, EditorState) {
        let coordinator = MutationCoordinator::default();
        let state = EditorState::load(coordinator.codec(), text).unwrap();
        (coordinator, state)
    }

    fn id_at(state: &EditorState, path: Path) -> NodeId {
        state.graph().find_by_path(&path).unwrap().id.clone()
    }

    #[test]
    fn test_text_edit_commits_and_queues_reselect() {
        let (mut coordinator, mut state) = load(r#"{"tags": ["a", "b"]}"#);
        let id = id_at(&state, Path::root().key("tags").index(1));

        let result = coordinator
            .apply(&mut state, Edit::UpdateText { node_id: id.clone(), value: "z".to_string() })
            .unwrap();

        assert_eq!(result, MutationResult::Applied { node_id: id.clone(), version: 1 });
        assert_eq!(state.parsed().get(), &json!({ "tags": ["a", "z"] }));
        assert!(state.is_consistent(coordinator.codec()));

        // Reselect has not run yet
        assert!(state.graph().get_selected().is_none());
        assert_eq!(coordinator.pending_reselect(), Some(id.clone()));

        assert_eq!(coordinator.settle(&mut state), 1);
        assert_eq!(state.graph().selected_id(), Some(&id));
    }

    #[test]
    fn test_noop_edit_touches_nothing() {
        let (mut coordinator, mut state) = load(r#"{"n": [7]}"#);
        let id = id_at(&state, Path::root().key("n").index(0));

        let result = coordinator
            .apply(&mut state, Edit::UpdateText { node_id: id.clone(), value: "7".to_string() })
            .unwrap();

        assert_eq!(result, MutationResult::Noop { node_id: id });
        assert_eq!(state.document().version(), 0);
        assert!(!state.document().has_changes());
        assert!(!coordinator.history().can_undo());
    }

    #[test]
    fn test_unknown_node() {
        let (mut coordinator, mut state) = load("[1]");
        let err = coordinator
            .apply(&mut state, Edit::UpdateText { node_id: NodeId::from("missing"), value: "2".to_string() })
            .unwrap_err();
        assert_eq!(err, MutationError::NodeNotFound(NodeId::from("missing")));
    }

    #[test]
    fn test_newer_mutation_supersedes_pending_reselect() {
        let (mut coordinator, mut state) = load(r#"["a", "b"]"#);
        let first = id_at(&state, Path::root().index(0));
        let second = id_at(&state, Path::root().index(1));

        coordinator
            .apply(&mut state, Edit::UpdateText { node_id: first, value: "x".to_string() })
            .unwrap();
        coordinator
            .apply(&mut state, Edit::UpdateText { node_id: second.clone(), value: "y".to_string() })
            .unwrap();

        assert_eq!(coordinator.settle(&mut state), 1);
        assert_eq!(state.graph().selected_id(), Some(&second));
    }

    #[test]
    fn test_failed_mutation_still_supersedes() {
        let (mut coordinator, mut state) = load(r#"["a"]"#);
        let id = id_at(&state, Path::root().index(0));

        coordinator
            .apply(&mut state, Edit::UpdateText { node_id: id, value: "x".to_string() })
            .unwrap();
        let _ = coordinator.apply(
            &mut state,
            Edit::UpdateText { node_id: NodeId::from("gone"), value: "y".to_string() },
        );

        assert_eq!(coordinator.settle(&mut state), 0);
        assert!(state.graph().get_selected().is_none());
    }

    #[test]
    fn test_replace_contents_rejects_bad_text() {
        let (mut coordinator, mut state) = load(r#"{"a": 1}"#);
        let err = coordinator.replace_contents(&mut state, "{ broken".to_string()).unwrap_err();

        assert!(matches!(err, EditorError::Codec(_)));
        assert_eq!(state.document().contents(), r#"{"a": 1}"#);
        assert_eq!(state.parsed().get(), &json!({ "a": 1 }));
    }

    #[test]
    fn test_replace_contents_keeps_stable_selection() {
        let (mut coordinator, mut state) = load(r#"{"a": {"name": "x"}, "b": 1}"#);
        let a = id_at(&state, Path::root().key("a"));
        state.graph_mut().select_node(&a);

        coordinator
            .replace_contents(&mut state, r#"{"a": {"name": "x"}, "b": 2}"#.to_string())
            .unwrap();
        coordinator.settle(&mut state);

        assert_eq!(state.graph().selected_id(), Some(&a));
        assert!(state.document().has_changes());
        assert!(state.is_consistent(coordinator.codec()));
    }
}
