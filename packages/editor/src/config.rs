use crate::EditorError;
use serde::{Deserialize, Serialize};

/// Editor settings; every field has a default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Spaces per indentation level when re-serializing
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Undo levels kept (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Colour shown in the field editor when a node has none
    #[serde(default = "default_color")]
    pub default_color: String,
}

fn default_indent() -> usize {
    2
}

fn default_history_limit() -> usize {
    100
}

fn default_color() -> String {
    "#000000".to_string()
}

impl EditorConfig {
    pub fn from_json(text: &str) -> Result<Self, EditorError> {
        serde_json::from_str(text).map_err(|e| EditorError::Config(e.to_string()))
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            history_limit: default_history_limit(),
            default_color: default_color(),
        }
    }
}
