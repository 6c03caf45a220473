//! # JSON Graph Document
//!
//! Raw text and parsed-tree stores for a single JSON document, plus the
//! path type used to address values inside the tree.
//!
//! ```text
//! DocumentStore (text) ──codec.parse──▶ ParsedDocumentStore (Value)
//!         ▲                                     │
//!         └──────────codec.serialize────────────┘
//! ```

pub mod codec;
pub mod error;
pub mod kind;
pub mod path;
pub mod store;

pub use codec::{DocumentCodec, JsonCodec};
pub use error::{CodecError, ResolveError};
pub use kind::ValueKind;
pub use path::{resolve, resolve_mut, resolve_pointer, Path, PathSegment};
pub use store::{DocumentStore, ParsedDocumentStore};

// Re-export the tree type so downstream crates agree on one serde_json
pub use serde_json::Value;
