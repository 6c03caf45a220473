//! # Edit Session
//!
//! One open document together with the coordinator that edits it.
//!
//! The session is what the graph view, the node modal and the CLI talk to.
//! Selection changes go straight to the graph; everything that writes the
//! document goes through the [`MutationCoordinator`].

use crate::config::EditorConfig;
use crate::modal::FieldBuffer;
use crate::mutations::{Edit, MutationError, MutationResult};
use crate::pipeline::MutationCoordinator;
use crate::state::EditorState;
use crate::EditorError;
use jsongraph_document::{DocumentStore, ParsedDocumentStore};
use jsongraph_graph::{GraphModel, Node, NodeId};
use tracing::debug;

#[derive(Debug)]
pub struct EditSession {
    state: EditorState,
    coordinator: MutationCoordinator,
    config: EditorConfig,
}

impl EditSession {
    /// Open `text` with the default configuration
    pub fn load(text: impl Into<String>) -> Result<Self, EditorError> {
        Self::load_with_config(text, EditorConfig::default())
    }

    pub fn load_with_config(text: impl Into<String>, config: EditorConfig) -> Result<Self, EditorError> {
        let coordinator = MutationCoordinator::with_config(&config);
        let state = EditorState::load(coordinator.codec(), text)?;
        Ok(Self {
            state,
            coordinator,
            config,
        })
    }

    /// Session over stores assembled by the caller
    pub fn from_parts(
        document: DocumentStore,
        parsed: ParsedDocumentStore,
        graph: GraphModel,
        config: EditorConfig,
    ) -> Self {
        Self {
            state: EditorState::from_parts(document, parsed, graph),
            coordinator: MutationCoordinator::with_config(&config),
            config,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn graph(&self) -> &GraphModel {
        self.state.graph()
    }

    pub fn contents(&self) -> &str {
        self.state.document().contents()
    }

    pub fn has_changes(&self) -> bool {
        self.state.document().has_changes()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn coordinator(&self) -> &MutationCoordinator {
        &self.coordinator
    }

    /// Select a node by id; an unknown id clears the selection
    pub fn select_node(&mut self, id: &NodeId) -> bool {
        let found = self.state.graph_mut().select_node(id);
        debug!(node_id = %id, found, "Selection changed");
        found
    }

    pub fn clear_selection(&mut self) {
        self.state.graph_mut().clear_selection();
    }

    pub fn selected(&self) -> Option<&Node> {
        self.state.graph().get_selected()
    }

    /// Apply an edit; its reselect stays queued until [`settle`](Self::settle)
    pub fn apply(&mut self, edit: Edit) -> Result<MutationResult, MutationError> {
        self.coordinator.apply(&mut self.state, edit)
    }

    /// Run queued follow-up tasks
    pub fn settle(&mut self) -> usize {
        self.coordinator.settle(&mut self.state)
    }

    /// Replace the scalar shown by a value node and reselect it
    pub fn update_node_text(&mut self, id: &NodeId, text: impl Into<String>) -> Result<MutationResult, MutationError> {
        let edit = Edit::UpdateText {
            node_id: id.clone(),
            value: text.into(),
        };
        self.coordinator.apply_and_settle(&mut self.state, edit)
    }

    /// Write a modal buffer into an object node and reselect it
    ///
    /// An empty buffer leaves the document untouched but is still checked
    /// against the node.
    pub fn save_fields(&mut self, id: &NodeId, buffer: &FieldBuffer) -> Result<MutationResult, MutationError> {
        let edit = Edit::SetFields {
            node_id: id.clone(),
            fields: buffer.to_fields(),
        };
        self.coordinator.apply_and_settle(&mut self.state, edit)
    }

    /// Replace the document text wholesale
    pub fn replace_contents(&mut self, text: impl Into<String>) -> Result<(), EditorError> {
        self.coordinator.replace_contents(&mut self.state, text.into())?;
        self.settle();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<bool, MutationError> {
        let undone = self.coordinator.undo(&mut self.state)?;
        self.settle();
        Ok(undone)
    }

    pub fn redo(&mut self) -> Result<bool, MutationError> {
        let redone = self.coordinator.redo(&mut self.state)?;
        self.settle();
        Ok(redone)
    }

    pub fn can_undo(&self) -> bool {
        self.coordinator.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.coordinator.history().can_redo()
    }

    pub fn mark_saved(&mut self) {
        self.state.mark_saved();
    }
}
