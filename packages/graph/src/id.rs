use jsongraph_document::Path;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Node identifier: `#` followed by the JSON pointer of the node's path
///
/// Two nodes share an id only if they share a path, so an id never moves to
/// another node when the document changes around it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the node built from the value at `path`
    pub fn for_path(path: &Path) -> Self {
        Self(format!("#{}", path.to_pointer()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&Path> for NodeId {
    fn from(path: &Path) -> Self {
        Self::for_path(path)
    }
}
