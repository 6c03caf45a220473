//! Text ⇄ tree conversion

use crate::error::CodecError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fmt::Debug;

/// Parser/serializer pair for one document format
pub trait DocumentCodec: Debug {
    /// Format name, for logs
    fn name(&self) -> &'static str;

    fn parse(&self, text: &str) -> Result<Value, CodecError>;

    /// Pretty-printed text; object keys keep the order they were parsed in
    fn serialize(&self, tree: &Value) -> Result<String, CodecError>;
}

/// JSON via serde_json
#[derive(Debug, Clone)]
pub struct JsonCodec {
    indent: String,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::with_indent(2)
    }

    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse(&self, text: &str) -> Result<Value, CodecError> {
        serde_json::from_str(text).map_err(|e| CodecError::parse(e.line(), e.column(), e.to_string()))
    }

    fn serialize(&self, tree: &Value) -> Result<String, CodecError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

        tree.serialize(&mut serializer)
            .map_err(|e| CodecError::Serialize(e.to_string()))?;

        String::from_utf8(buf).map_err(|e| CodecError::Serialize(e.to_string()))
    }
}
