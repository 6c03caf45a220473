//! # Node Modal
//!
//! Detail view of the selected node with a small field editor for the
//! reserved `name` and `color` keys. Other keys are shown but never written.

use crate::config::EditorConfig;
use crate::mutations::{FieldEdit, MutationError, MutationResult};
use crate::session::EditSession;
use jsongraph_document::{Path, ValueKind};
use jsongraph_graph::{display_text, Node, TextRow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Keys the field editor can write
pub const RESERVED_FIELDS: [&str; 2] = ["name", "color"];

/// Pending values of the reserved fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBuffer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FieldBuffer {
    /// Reserved fields of `node` that hold a scalar
    pub fn from_node(node: &Node) -> Self {
        let field = |key: &str| {
            node.row(key)
                .filter(|row| row.kind.is_primitive())
                .map(TextRow::text)
        };

        Self {
            name: field("name"),
            color: field("color"),
        }
    }

    /// One edit per field present, in reserved-key order
    pub fn to_fields(&self) -> Vec<FieldEdit> {
        let mut fields = Vec::new();
        if let Some(name) = &self.name {
            fields.push(FieldEdit::new("name", name.clone()));
        }
        if let Some(color) = &self.color {
            fields.push(FieldEdit::new("color", color.clone()));
        }
        fields
    }
}

/// Text shown in the modal's content panel
///
/// Container rows are left out; they are reachable as child nodes.
pub fn normalize_node_data(rows: &[TextRow]) -> String {
    match rows {
        [] => "{}".to_string(),
        [row] if row.key.is_none() => display_text(&row.value),
        _ => {
            let object: Map<String, Value> = rows
                .iter()
                .filter(|row| !matches!(row.kind, ValueKind::Array | ValueKind::Object))
                .filter_map(|row| row.key.clone().map(|key| (key, row.value.clone())))
                .collect();
            format!("{:#}", Value::Object(object))
        }
    }
}

/// `$` for the root or no path, `$["key"][0]` otherwise
pub fn json_path_to_string(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.to_string(),
        None => "$".to_string(),
    }
}

/// Open/editing state of the modal and its field buffer
#[derive(Debug, Clone, Default)]
pub struct NodeModal {
    opened: bool,
    editing: bool,
    buffer: FieldBuffer,
}

impl NodeModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the modal for the current selection
    pub fn open(&mut self, session: &EditSession) {
        self.opened = true;
        self.sync(session);
    }

    pub fn close(&mut self) {
        self.opened = false;
        self.editing = false;
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn buffer(&self) -> &FieldBuffer {
        &self.buffer
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.buffer.name = Some(name.into());
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.buffer.color = Some(color.into());
    }

    /// Colour for the picker, falling back to the configured default
    pub fn display_color<'a>(&'a self, config: &'a EditorConfig) -> &'a str {
        self.buffer.color.as_deref().unwrap_or(&config.default_color)
    }

    /// Re-derive the buffer from the selected node and leave editing mode
    pub fn sync(&mut self, session: &EditSession) {
        self.buffer = session.selected().map(FieldBuffer::from_node).unwrap_or_default();
        self.editing = false;
    }

    pub fn content(&self, session: &EditSession) -> String {
        let rows = session.selected().map(|node| node.rows.as_slice()).unwrap_or(&[]);
        normalize_node_data(rows)
    }

    pub fn json_path(&self, session: &EditSession) -> String {
        json_path_to_string(session.selected().map(|node| &node.path))
    }

    /// Write the buffer into the selected node
    ///
    /// On failure the modal stays in editing mode with the buffer intact.
    pub fn save(&mut self, session: &mut EditSession) -> Result<MutationResult, MutationError> {
        let Some(node) = session.selected() else {
            return Err(MutationError::NothingSelected);
        };
        let node_id = node.id.clone();

        match session.save_fields(&node_id, &self.buffer) {
            Ok(result) => {
                self.sync(session);
                Ok(result)
            }
            Err(err) => {
                warn!(node_id = %node_id, error = %err, "Field save failed");
                Err(err)
            }
        }
    }

    /// Discard the buffer
    pub fn cancel(&mut self, session: &EditSession) {
        self.sync(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_empty_rows() {
        assert_eq!(normalize_node_data(&[]), "{}");
    }

    #[test]
    fn test_normalize_single_scalar() {
        assert_eq!(normalize_node_data(&[TextRow::bare(json!("hello"))]), "hello");
        assert_eq!(normalize_node_data(&[TextRow::bare(json!(3.5))]), "3.5");
    }

    #[test]
    fn test_normalize_drops_container_rows() {
        let rows = vec![
            TextRow::keyed("name", json!("x"), ValueKind::String),
            TextRow::keyed("tags", json!(2), ValueKind::Array),
            TextRow::keyed("size", json!(3), ValueKind::Number),
        ];
        assert_eq!(normalize_node_data(&rows), "{\n  \"name\": \"x\",\n  \"size\": 3\n}");
    }

    #[test]
    fn test_json_path_to_string() {
        assert_eq!(json_path_to_string(None), "$");
        assert_eq!(json_path_to_string(Some(&Path::root())), "$");

        let path = Path::root().key("customer").index(0);
        assert_eq!(json_path_to_string(Some(&path)), r#"$["customer"][0]"#);
    }

    #[test]
    fn test_buffer_ignores_container_fields() {
        let session = EditSession::load(r#"{"a": {"name": {"first": "x"}, "color": "red"}}"#).unwrap();
        let path = Path::root().key("a");
        let node = session.graph().find_by_path(&path).unwrap();

        let buffer = FieldBuffer::from_node(node);
        assert_eq!(buffer.name, None);
        assert_eq!(buffer.color.as_deref(), Some("red"));
        assert_eq!(buffer.to_fields(), vec![FieldEdit::new("color", "red")]);
    }

    #[test]
    fn test_display_color_default() {
        let modal = NodeModal::new();
        let config = EditorConfig::default();
        assert_eq!(modal.display_color(&config), "#000000");
    }

    #[test]
    fn test_save_without_selection() {
        let mut session = EditSession::load(r#"{"a": {"name": "x"}}"#).unwrap();
        let mut modal = NodeModal::new();
        modal.open(&session);
        modal.begin_edit();
        modal.set_name("y");

        assert_eq!(modal.save(&mut session), Err(MutationError::NothingSelected));
        assert!(modal.is_editing());
        assert_eq!(modal.buffer().name.as_deref(), Some("y"));
    }
}
