//! # Graph Model
//!
//! Owns the node/edge collection derived from a parsed document and the
//! current selection.
//!
//! The selection is held as a [`NodeId`] and resolved against the current
//! collection on every read, so it can never point at a node from an older
//! rebuild.

use crate::builder::build_graph;
use crate::id::NodeId;
use crate::measure::{NodeMeasure, TextMeasure};
use crate::node::{Edge, Node};
use jsongraph_document::Path;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_id: HashMap<NodeId, usize>,
    by_path: HashMap<Path, usize>,
    selected: Option<NodeId>,
    measure: Box<dyn NodeMeasure>,
}

impl GraphModel {
    /// Empty model using [`TextMeasure`]
    pub fn new() -> Self {
        Self::with_measure(Box::new(TextMeasure::default()))
    }

    pub fn with_measure(measure: Box<dyn NodeMeasure>) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            by_id: HashMap::new(),
            by_path: HashMap::new(),
            selected: None,
            measure,
        }
    }

    pub fn from_tree(tree: &Value) -> Self {
        let mut graph = Self::new();
        graph.rebuild(tree);
        graph
    }

    /// Regenerate every node and edge from `tree`
    ///
    /// The selection is kept when a node with the same id still exists.
    pub fn rebuild(&mut self, tree: &Value) {
        let (nodes, edges) = build_graph(tree, self.measure.as_ref());

        self.by_id = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();
        self.by_path = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.path.clone(), i))
            .collect();
        self.nodes = nodes;
        self.edges = edges;

        if let Some(id) = &self.selected {
            if !self.by_id.contains_key(id) {
                debug!(node_id = %id, "Selected node gone after rebuild");
                self.selected = None;
            }
        }

        debug!(nodes = self.nodes.len(), edges = self.edges.len(), "Graph rebuilt");
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn find_node(&self, id: &NodeId) -> Option<&Node> {
        self.by_id.get(id).map(|&i| &self.nodes[i])
    }

    pub fn find_by_path(&self, path: &Path) -> Option<&Node> {
        self.by_path.get(path).map(|&i| &self.nodes[i])
    }

    /// Node built from the document root
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Direct children of `id`, in edge order
    pub fn children(&self, id: &NodeId) -> Vec<&Node> {
        self.edges
            .iter()
            .filter(|edge| &edge.from == id)
            .filter_map(|edge| self.find_node(&edge.to))
            .collect()
    }

    /// Select `id`; an unknown id clears the selection
    pub fn select_node(&mut self, id: &NodeId) -> bool {
        if self.by_id.contains_key(id) {
            self.selected = Some(id.clone());
            true
        } else {
            self.selected = None;
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn get_selected(&self) -> Option<&Node> {
        self.selected.as_ref().and_then(|id| self.find_node(id))
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::new()
    }
}
