//! # JSON Graph Editor
//!
//! Edits a JSON document through its graph view.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: text ⇄ tree, paths, stores        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ graph: tree → nodes + edges, selection      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: node edits                          │
//! │  - Resolve node path in a staged copy       │
//! │  - Serialize and commit text/tree/graph     │
//! │  - Queue reselect of the edited node        │
//! │  - Undo/redo                                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Text is source of truth**: the tree and the graph are derived views
//! 2. **Stage, then commit**: edits never touch the live tree
//! 3. **Fixed commit order**: text, then tree, then graph, in one call
//! 4. **Ids follow paths**: a rebuild keeps ids and selection of unmoved nodes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jsongraph_editor::{EditSession, NodeModal};
//!
//! let mut session = EditSession::load(r##"{"a": {"name": "x", "color": "#fff"}}"##)?;
//! let id = session.graph().nodes()[1].id.clone();
//! session.select_node(&id);
//!
//! let mut modal = NodeModal::new();
//! modal.open(&session);
//! modal.begin_edit();
//! modal.set_name("y");
//! modal.save(&mut session)?;
//!
//! assert!(session.has_changes());
//! ```

mod config;
mod errors;
mod inline;
mod modal;
mod mutations;
mod pipeline;
mod queue;
mod session;
mod state;
mod undo_stack;

pub use config::EditorConfig;
pub use errors::EditorError;
pub use inline::{EditKey, InlineTextEditor};
pub use modal::{json_path_to_string, normalize_node_data, FieldBuffer, NodeModal, RESERVED_FIELDS};
pub use mutations::{coerce, Edit, FieldEdit, MutationError, MutationResult};
pub use pipeline::MutationCoordinator;
pub use queue::{PendingTask, Task, TaskQueue};
pub use session::EditSession;
pub use state::EditorState;
pub use undo_stack::{HistoryEntry, UndoStack};

// Re-export common types for convenience
pub use jsongraph_document::{DocumentCodec, JsonCodec, Path, PathSegment};
pub use jsongraph_graph::{GraphModel, Node, NodeId, NodeKind};
