use crate::id::NodeId;
use jsongraph_document::{Path, ValueKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a node was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    Array,
    /// A scalar at the root or inside an array
    Value,
}

/// One `key: value` line of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRow {
    pub key: Option<String>,

    /// The scalar itself, or the child count for array/object rows
    pub value: Value,

    #[serde(rename = "type")]
    pub kind: ValueKind,
}

impl TextRow {
    pub fn keyed(key: impl Into<String>, value: Value, kind: ValueKind) -> Self {
        Self {
            key: Some(key.into()),
            value,
            kind,
        }
    }

    pub fn bare(value: Value) -> Self {
        let kind = ValueKind::of(&value);
        Self { key: None, value, kind }
    }

    pub fn text(&self) -> String {
        display_text(&self.value)
    }
}

/// Text a value shows in the graph: strings unquoted, everything else as JSON
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Graph vertex backed by one document value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    #[serde(rename = "text")]
    pub rows: Vec<TextRow>,
    pub path: Path,

    /// Layout-owned
    pub width: f32,
    pub height: f32,

    pub child_count: usize,
}

impl Node {
    /// Single keyless row holding a scalar
    pub fn is_scalar(&self) -> bool {
        self.kind == NodeKind::Value && self.rows.len() == 1 && self.rows[0].key.is_none()
    }

    pub fn scalar(&self) -> Option<&Value> {
        if self.is_scalar() {
            Some(&self.rows[0].value)
        } else {
            None
        }
    }

    pub fn row(&self, key: &str) -> Option<&TextRow> {
        self.rows.iter().find(|row| row.key.as_deref() == Some(key))
    }

    /// Rendered text of the row under `key`
    pub fn row_text(&self, key: &str) -> Option<String> {
        self.row(key).map(TextRow::text)
    }
}

/// Parent → child link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: NodeId,
    pub to: NodeId,

    /// Object key or array index leading to the child
    pub label: String,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, label: impl Into<String>) -> Self {
        Self {
            id: format!("{}->{}", from, to),
            from,
            to,
            label: label.into(),
        }
    }
}
