//! # JSON Graph Model
//!
//! Derives the node/edge view of a parsed JSON document.
//!
//! ```text
//! {"a": {"name": "x"}, "tags": ["t1"]}
//!
//!   [$] a: {1}  tags: [1]
//!    ├─a──▶ [$.a] name: x
//!    └─tags─▶ [$.tags] (array)
//!               └─0──▶ [$.tags[0]] t1
//! ```
//!
//! Every node carries the [`Path`](jsongraph_document::Path) of the value it
//! was built from. A node's id is that path as a JSON pointer, so the same
//! value keeps the same id across rebuilds.

mod builder;
mod id;
mod measure;
mod model;
mod node;

pub use builder::build_graph;
pub use id::NodeId;
pub use measure::{NodeMeasure, Size, TextMeasure};
pub use model::GraphModel;
pub use node::{display_text, Edge, Node, NodeKind, TextRow};
