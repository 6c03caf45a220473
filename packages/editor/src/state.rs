//! # Editor State
//!
//! The three stores of one open document, owned together.
//!
//! ```text
//! DocumentStore ──▶ ParsedDocumentStore ──▶ GraphModel
//!   (text)              (tree)               (nodes, edges, selection)
//! ```
//!
//! Writes go through [`EditorState::commit`], which updates all three in that
//! order within a single call.

use crate::EditorError;
use jsongraph_document::{DocumentCodec, DocumentStore, ParsedDocumentStore};
use jsongraph_graph::GraphModel;
use serde_json::Value;
use tracing::info;

#[derive(Debug)]
pub struct EditorState {
    document: DocumentStore,
    parsed: ParsedDocumentStore,
    graph: GraphModel,
}

impl EditorState {
    /// Parse `text` and derive the parsed tree and graph from it
    pub fn load(codec: &dyn DocumentCodec, text: impl Into<String>) -> Result<Self, EditorError> {
        let text = text.into();
        let tree = codec.parse(&text)?;
        let graph = GraphModel::from_tree(&tree);

        info!(
            codec = codec.name(),
            bytes = text.len(),
            nodes = graph.node_count(),
            "Document loaded"
        );

        Ok(Self {
            document: DocumentStore::new(text),
            parsed: ParsedDocumentStore::new(tree),
            graph,
        })
    }

    /// Assemble state from stores built elsewhere
    ///
    /// The caller is responsible for the graph matching the parsed tree.
    pub fn from_parts(document: DocumentStore, parsed: ParsedDocumentStore, graph: GraphModel) -> Self {
        Self {
            document,
            parsed,
            graph,
        }
    }

    pub fn document(&self) -> &DocumentStore {
        &self.document
    }

    pub fn parsed(&self) -> &ParsedDocumentStore {
        &self.parsed
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// Graph access for selection changes
    pub fn graph_mut(&mut self) -> &mut GraphModel {
        &mut self.graph
    }

    pub fn mark_saved(&mut self) {
        self.document.mark_saved();
    }

    /// Whether the text parses to exactly the parsed tree
    pub fn is_consistent(&self, codec: &dyn DocumentCodec) -> bool {
        codec
            .parse(self.document.contents())
            .map(|tree| &tree == self.parsed.get())
            .unwrap_or(false)
    }

    /// Store new text and tree, rebuild the graph, and hand back the tree
    /// that was replaced
    pub(crate) fn commit(&mut self, text: String, tree: Value) -> Value {
        self.document.set_contents(text, true);
        let previous = self.parsed.replace(tree);
        self.graph.rebuild(self.parsed.get());
        previous
    }
}
