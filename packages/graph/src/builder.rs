use crate::id::NodeId;
use crate::measure::NodeMeasure;
use crate::node::{Edge, Node, NodeKind, TextRow};
use jsongraph_document::{Path, ValueKind};
use serde_json::Value;

/// Walk `tree` in document order, producing nodes (pre-order) and edges
pub fn build_graph(tree: &Value, measure: &dyn NodeMeasure) -> (Vec<Node>, Vec<Edge>) {
    let mut builder = GraphBuilder {
        measure,
        nodes: Vec::new(),
        edges: Vec::new(),
    };
    builder.visit(tree, Path::root());
    (builder.nodes, builder.edges)
}

struct GraphBuilder<'m> {
    measure: &'m dyn NodeMeasure,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder<'_> {
    fn visit(&mut self, value: &Value, path: Path) -> NodeId {
        let id = NodeId::for_path(&path);

        match value {
            Value::Object(map) => {
                let rows = map
                    .iter()
                    .map(|(key, child)| match child {
                        Value::Array(items) => TextRow::keyed(key, Value::from(items.len()), ValueKind::Array),
                        Value::Object(fields) => TextRow::keyed(key, Value::from(fields.len()), ValueKind::Object),
                        scalar => TextRow::keyed(key, scalar.clone(), ValueKind::of(scalar)),
                    })
                    .collect();
                let child_count = map.values().filter(|v| !ValueKind::of(v).is_primitive()).count();
                self.push_node(id.clone(), NodeKind::Object, rows, path.clone(), child_count);

                for (key, child) in map {
                    if ValueKind::of(child).is_primitive() {
                        continue;
                    }
                    let child_id = self.visit(child, path.child(key.as_str()));
                    self.edges.push(Edge::new(id.clone(), child_id, key.as_str()));
                }
            }
            Value::Array(items) => {
                self.push_node(id.clone(), NodeKind::Array, Vec::new(), path.clone(), items.len());

                for (index, item) in items.iter().enumerate() {
                    let child_id = self.visit(item, path.child(index));
                    self.edges.push(Edge::new(id.clone(), child_id, index.to_string()));
                }
            }
            scalar => {
                self.push_node(id.clone(), NodeKind::Value, vec![TextRow::bare(scalar.clone())], path, 0);
            }
        }

        id
    }

    fn push_node(&mut self, id: NodeId, kind: NodeKind, rows: Vec<TextRow>, path: Path, child_count: usize) {
        let size = self.measure.measure(kind, &rows, child_count);
        self.nodes.push(Node {
            id,
            kind,
            rows,
            path,
            width: size.width,
            height: size.height,
            child_count,
        });
    }
}
