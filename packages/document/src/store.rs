//! # Document Stores
//!
//! The raw text and the parsed tree of one document, held side by side.
//! They are written together by the editor's commit path, text first.

use serde_json::Value;

/// Authoritative document text
#[derive(Debug, Clone)]
pub struct DocumentStore {
    contents: String,

    /// Unsaved changes since load or the last `mark_saved`
    has_changes: bool,

    /// Incremented on every content write
    version: u64,
}

impl DocumentStore {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            has_changes: false,
            version: 0,
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the text
    pub fn set_contents(&mut self, contents: String, has_changes: bool) {
        self.contents = contents;
        self.has_changes = has_changes;
        self.version += 1;
    }

    /// Clear the dirty flag once the text has been persisted elsewhere
    pub fn mark_saved(&mut self) {
        self.has_changes = false;
    }
}

/// Parsed tree derived from a [`DocumentStore`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocumentStore {
    tree: Value,
}

impl ParsedDocumentStore {
    pub fn new(tree: Value) -> Self {
        Self { tree }
    }

    pub fn get(&self) -> &Value {
        &self.tree
    }

    pub fn set(&mut self, tree: Value) {
        self.tree = tree;
    }

    /// Swap in a new tree, returning the old one
    pub fn replace(&mut self, tree: Value) -> Value {
        std::mem::replace(&mut self.tree, tree)
    }

    /// Deep copy for staging a mutation
    pub fn snapshot(&self) -> Value {
        self.tree.clone()
    }
}
