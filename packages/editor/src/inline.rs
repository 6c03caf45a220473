//! Inline editor for a single scalar node.

use crate::mutations::{MutationError, MutationResult};
use crate::session::EditSession;
use jsongraph_graph::{display_text, Node, NodeId};
use tracing::debug;

/// Keys the inline editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
}

#[derive(Debug, Clone)]
pub struct InlineTextEditor {
    node_id: NodeId,

    /// Rendered value of the node when editing started
    original: String,

    draft: String,
    editing: bool,
}

impl InlineTextEditor {
    /// Editor for a bare scalar node
    pub fn for_node(node: &Node) -> Result<Self, MutationError> {
        let value = node
            .scalar()
            .ok_or_else(|| MutationError::NotEditable(node.id.clone()))?;
        let text = display_text(value);

        Ok(Self {
            node_id: node.id.clone(),
            original: text.clone(),
            draft: text,
            editing: false,
        })
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn begin(&mut self) {
        self.editing = true;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit the draft and leave editing mode
    ///
    /// An unchanged draft submits nothing and returns `None`. On error the
    /// editor stays open with the draft kept.
    pub fn commit(&mut self, session: &mut EditSession) -> Result<Option<MutationResult>, MutationError> {
        if self.draft == self.original {
            self.editing = false;
            return Ok(None);
        }

        let result = session.update_node_text(&self.node_id, self.draft.clone())?;
        self.original = self.draft.clone();
        self.editing = false;
        Ok(Some(result))
    }

    /// Drop the draft and leave editing mode
    pub fn cancel(&mut self) {
        self.draft = self.original.clone();
        self.editing = false;
    }

    pub fn handle_key(
        &mut self,
        key: EditKey,
        session: &mut EditSession,
    ) -> Result<Option<MutationResult>, MutationError> {
        match key {
            EditKey::Enter => self.commit(session),
            EditKey::Escape => {
                self.cancel();
                Ok(None)
            }
        }
    }

    /// Losing focus commits like Enter
    pub fn blur(&mut self, session: &mut EditSession) -> Result<Option<MutationResult>, MutationError> {
        if !self.editing {
            return Ok(None);
        }
        self.commit(session)
    }

    /// Pick up a rebuilt node, unless a draft is in progress
    pub fn refresh(&mut self, node: &Node) {
        if self.editing || node.id != self.node_id {
            return;
        }
        if let Some(value) = node.scalar() {
            self.original = display_text(value);
            self.draft = self.original.clone();
            debug!(node_id = %self.node_id, "Inline editor refreshed");
        }
    }
}
