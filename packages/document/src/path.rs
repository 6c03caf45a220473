//! # Document Paths
//!
//! A [`Path`] is the ordered list of keys and indices from the document root
//! to one value. Resolution is read-only for [`resolve`] and never creates
//! missing entries for [`resolve_mut`].
//!
//! Paths render two ways:
//! - JSON path, for display: `$["customer"]["orders"][0]`
//! - JSON pointer (RFC 6901), for identity: `/customer/orders/0`

use crate::error::ResolveError;
use crate::kind::ValueKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Location of a value inside a parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The empty path addresses the whole document
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Path one step deeper
    pub fn child(&self, segment: impl Into<PathSegment>) -> Path {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(PathSegment::Key(key.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    /// RFC 6901 pointer form (`""` for the root)
    pub fn to_pointer(&self) -> String {
        let mut pointer = String::new();
        for segment in &self.0 {
            pointer.push('/');
            match segment {
                PathSegment::Key(key) => pointer.push_str(&key.replace('~', "~0").replace('/', "~1")),
                PathSegment::Index(index) => pointer.push_str(&index.to_string()),
            }
        }
        pointer
    }

    /// JSON path form of the first `depth` segments
    fn prefix_string(&self, depth: usize) -> String {
        Path(self.0[..depth].to_vec()).to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, "[{}]", Value::String(key.clone()))?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Navigate to the value addressed by `path`
pub fn resolve<'a>(document: &'a Value, path: &Path) -> Result<&'a Value, ResolveError> {
    let mut current = document;

    for (depth, segment) in path.segments().iter().enumerate() {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => map
                .get(key)
                .ok_or_else(|| ResolveError::missing_key(path.prefix_string(depth), key.as_str()))?,
            (PathSegment::Index(index), Value::Array(items)) => items
                .get(*index)
                .ok_or_else(|| ResolveError::index_out_of_range(path.prefix_string(depth), *index, items.len()))?,
            (segment, other) => return Err(shape_error(path, depth, segment, other)),
        };
    }

    Ok(current)
}

/// Mutable counterpart of [`resolve`]
pub fn resolve_mut<'a>(document: &'a mut Value, path: &Path) -> Result<&'a mut Value, ResolveError> {
    let mut current = document;

    for (depth, segment) in path.segments().iter().enumerate() {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => map
                .get_mut(key)
                .ok_or_else(|| ResolveError::missing_key(path.prefix_string(depth), key.as_str()))?,
            (PathSegment::Index(index), Value::Array(items)) => {
                let len = items.len();
                items
                    .get_mut(*index)
                    .ok_or_else(|| ResolveError::index_out_of_range(path.prefix_string(depth), *index, len))?
            }
            (segment, other) => return Err(shape_error(path, depth, segment, other)),
        };
    }

    Ok(current)
}

fn shape_error(path: &Path, depth: usize, segment: &PathSegment, found: &Value) -> ResolveError {
    let expected = match segment {
        PathSegment::Key(_) => ValueKind::Object,
        PathSegment::Index(_) => ValueKind::Array,
    };
    ResolveError::shape_mismatch(path.prefix_string(depth), expected, ValueKind::of(found))
}

/// Turn an RFC 6901 pointer into a typed [`Path`]
///
/// Numeric tokens become indices only where the document holds an array,
/// so `/0` addresses key `"0"` inside an object.
pub fn resolve_pointer(document: &Value, pointer: &str) -> Result<Path, ResolveError> {
    if pointer.is_empty() {
        return Ok(Path::root());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(ResolveError::InvalidPointer(pointer.to_string()));
    };

    let mut path = Path::root();
    let mut current = document;

    for token in rest.split('/') {
        let token = token.replace("~1", "/").replace("~0", "~");
        let at = path.to_string();

        match current {
            Value::Object(map) => {
                current = map
                    .get(&token)
                    .ok_or_else(|| ResolveError::missing_key(at, token.as_str()))?;
                path = path.key(token);
            }
            Value::Array(items) => {
                let index: usize = token
                    .parse()
                    .map_err(|_| ResolveError::InvalidPointer(pointer.to_string()))?;
                current = items
                    .get(index)
                    .ok_or_else(|| ResolveError::index_out_of_range(at, index, items.len()))?;
                path = path.index(index);
            }
            other => {
                return Err(ResolveError::shape_mismatch(at, ValueKind::Object, ValueKind::of(other)));
            }
        }
    }

    debug!(pointer, path = %path, "Resolved pointer");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "customer": {
                "name": "Ada",
                "orders": [ { "id": 1 }, { "id": 2 } ]
            },
            "a/b": { "~x": true }
        })
    }

    #[test]
    fn test_resolve_nested_key_and_index() {
        let doc = sample();
        let path = Path::root().key("customer").key("orders").index(1).key("id");
        assert_eq!(resolve(&doc, &path).unwrap(), &json!(2));
    }

    #[test]
    fn test_resolve_root_returns_document() {
        let doc = sample();
        assert_eq!(resolve(&doc, &Path::root()).unwrap(), &doc);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let doc = sample();
        let path = Path::root().key("customer").key("orders").index(0);
        let first = resolve(&doc, &path).unwrap().clone();
        let second = resolve(&doc, &path).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_key() {
        let doc = sample();
        let err = resolve(&doc, &Path::root().key("b")).unwrap_err();
        assert_eq!(err, ResolveError::missing_key("$", "b"));
    }

    #[test]
    fn test_index_out_of_range() {
        let doc = sample();
        let path = Path::root().key("customer").key("orders").index(5);
        let err = resolve(&doc, &path).unwrap_err();
        assert_eq!(err, ResolveError::index_out_of_range("$[\"customer\"][\"orders\"]", 5, 2));
    }

    #[test]
    fn test_indexing_a_scalar_fails() {
        let doc = sample();
        let path = Path::root().key("customer").key("name").key("first");
        let err = resolve(&doc, &path).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::ShapeMismatch { expected: ValueKind::Object, found: ValueKind::String, .. }
        ));
    }

    #[test]
    fn test_key_into_array_fails() {
        let doc = sample();
        let path = Path::root().key("customer").key("orders").key("0");
        assert!(matches!(
            resolve(&doc, &path),
            Err(ResolveError::ShapeMismatch { expected: ValueKind::Object, found: ValueKind::Array, .. })
        ));
    }

    #[test]
    fn test_resolve_mut_overwrites_in_place() {
        let mut doc = sample();
        let path = Path::root().key("customer").key("name");
        *resolve_mut(&mut doc, &path).unwrap() = json!("Grace");
        assert_eq!(doc["customer"]["name"], json!("Grace"));
    }

    #[test]
    fn test_resolve_mut_does_not_create_entries() {
        let mut doc = sample();
        let before = doc.clone();
        assert!(resolve_mut(&mut doc, &Path::root().key("missing")).is_err());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_display_as_json_path() {
        assert_eq!(Path::root().to_string(), "$");
        let path = Path::root().key("customer").index(0).key("say \"hi\"");
        assert_eq!(path.to_string(), r#"$["customer"][0]["say \"hi\""]"#);
    }

    #[test]
    fn test_pointer_escaping() {
        let path = Path::root().key("a/b").key("~x");
        assert_eq!(path.to_pointer(), "/a~1b/~0x");
        assert_eq!(Path::root().to_pointer(), "");
    }

    #[test]
    fn test_resolve_pointer_types_segments_by_shape() {
        let doc = json!({ "items": [10, 20], "map": { "0": "zero" } });
        assert_eq!(
            resolve_pointer(&doc, "/items/1").unwrap(),
            Path::root().key("items").index(1)
        );
        assert_eq!(
            resolve_pointer(&doc, "/map/0").unwrap(),
            Path::root().key("map").key("0")
        );
    }

    #[test]
    fn test_resolve_pointer_unescapes() {
        let doc = sample();
        let path = resolve_pointer(&doc, "/a~1b/~0x").unwrap();
        assert_eq!(resolve(&doc, &path).unwrap(), &json!(true));
    }

    #[test]
    fn test_resolve_pointer_rejects_relative_pointer() {
        let doc = sample();
        assert_eq!(
            resolve_pointer(&doc, "customer"),
            Err(ResolveError::InvalidPointer("customer".to_string()))
        );
    }

    #[test]
    fn test_path_serializes_as_mixed_array() {
        let path = Path::root().key("a").index(3);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["a",3]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn test_parent_and_child() {
        let path = Path::root().key("a").index(0);
        assert_eq!(path.parent(), Some(Path::root().key("a")));
        assert_eq!(Path::root().parent(), None);
        assert_eq!(Path::root().key("a").child(0usize), path);
    }
}
