//! # Node Edits
//!
//! Edits address a node by id and are applied to a staged copy of the
//! parsed tree, never to the live one.
//!
//! ## Edit Semantics
//!
//! ### UpdateText
//! - Target is a bare scalar node (one keyless row)
//! - Text equal to the current rendered value is a no-op
//! - Atomic replacement, last write wins
//!
//! ### SetFields
//! - Target is an object node
//! - Existing keys are overwritten in place, new keys are appended
//!
//! ### Coercion
//! The new text keeps the primitive kind of the value it replaces when it
//! parses as that kind (`42` over a number, `true` over a boolean, `null`
//! over null). Everything else is stored as a string.

use jsongraph_document::{resolve_mut, CodecError, ResolveError};
use jsongraph_graph::{display_text, Node, NodeId, NodeKind};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

/// Edit intents produced by the graph view and the node modal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Edit {
    /// Replace the scalar of a bare value node
    UpdateText { node_id: NodeId, value: String },

    /// Write keyed fields of an object node
    SetFields { node_id: NodeId, fields: Vec<FieldEdit> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldEdit {
    pub key: String,
    pub value: String,
}

impl FieldEdit {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Path of node {node_id} no longer resolves: {source}")]
    PathInvalid { node_id: NodeId, source: ResolveError },

    #[error("Node {0} does not hold a single editable value")]
    NotEditable(NodeId),

    #[error("Node {0} is not backed by an object")]
    NotAnObject(NodeId),

    #[error("Cannot edit the document root")]
    RootEditNotAllowed,

    #[error("No node is selected")]
    NothingSelected,

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

impl Edit {
    pub fn node_id(&self) -> &NodeId {
        match self {
            Edit::UpdateText { node_id, .. } => node_id,
            Edit::SetFields { node_id, .. } => node_id,
        }
    }

    /// Debug name
    pub fn name(&self) -> &'static str {
        match self {
            Edit::UpdateText { .. } => "update_text",
            Edit::SetFields { .. } => "set_fields",
        }
    }

    /// Short label for the history stack
    pub fn describe(&self) -> String {
        match self {
            Edit::UpdateText { value, .. } => format!("Set value to {:?}", value),
            Edit::SetFields { fields, .. } => {
                let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
                format!("Set {}", keys.join(", "))
            }
        }
    }

    /// Check the edit against the node it targets
    ///
    /// Returns `false` when the edit would leave the document unchanged.
    pub fn validate(&self, node: &Node) -> Result<bool, MutationError> {
        if node.path.is_root() {
            return Err(MutationError::RootEditNotAllowed);
        }

        match self {
            Edit::UpdateText { node_id, value } => {
                let current = node
                    .scalar()
                    .ok_or_else(|| MutationError::NotEditable(node_id.clone()))?;
                Ok(display_text(current) != *value)
            }
            Edit::SetFields { node_id, fields } => {
                if node.kind != NodeKind::Object {
                    return Err(MutationError::NotAnObject(node_id.clone()));
                }
                Ok(fields.iter().any(|field| match node.row(&field.key) {
                    Some(row) if row.kind.is_primitive() => row.text() != field.value,
                    _ => true,
                }))
            }
        }
    }

    /// Write the edit into `tree` at the node's path
    pub fn apply(&self, node: &Node, tree: &mut Value) -> Result<(), MutationError> {
        let target = resolve_mut(tree, &node.path).map_err(|source| MutationError::PathInvalid {
            node_id: node.id.clone(),
            source,
        })?;

        match self {
            Edit::UpdateText { node_id, value } => {
                if matches!(target, Value::Array(_) | Value::Object(_)) {
                    return Err(MutationError::NotEditable(node_id.clone()));
                }
                let replacement = coerce(Some(&*target), value);
                *target = replacement;
                Ok(())
            }
            Edit::SetFields { node_id, fields } => {
                let Value::Object(map) = target else {
                    return Err(MutationError::NotAnObject(node_id.clone()));
                };
                for field in fields {
                    let value = coerce(map.get(&field.key), &field.value);
                    map.insert(field.key.clone(), value);
                }
                Ok(())
            }
        }
    }
}

/// Convert edited text into a value, keeping the kind of `existing` where the
/// text allows it
pub fn coerce(existing: Option<&Value>, text: &str) -> Value {
    match existing {
        Some(Value::Number(_)) => match parse_number(text) {
            Some(number) => Value::Number(number),
            None => Value::String(text.to_string()),
        },
        Some(Value::Bool(_)) => match text {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(text.to_string()),
        },
        Some(Value::Null) if text == "null" => Value::Null,
        _ => Value::String(text.to_string()),
    }
}

fn parse_number(text: &str) -> Option<Number> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Number::from(i));
    }
    if let Ok(u) = text.parse::<u64>() {
        return Some(Number::from(u));
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Result of applying an edit
#[derive(Debug, Clone, PartialEq)]
pub enum MutationResult {
    /// The document changed; `version` is the new DocumentStore version
    Applied { node_id: NodeId, version: u64 },

    /// The edit matched the current document
    Noop { node_id: NodeId },
}

impl MutationResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationResult::Applied { .. })
    }
}
