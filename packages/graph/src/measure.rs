use crate::node::{NodeKind, TextRow};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Sizing hook for the layout engine
pub trait NodeMeasure: Debug {
    fn measure(&self, kind: NodeKind, rows: &[TextRow], child_count: usize) -> Size;
}

/// Monospace estimate from row text length
#[derive(Debug, Clone)]
pub struct TextMeasure {
    pub char_width: f32,
    pub row_height: f32,
    pub padding: f32,
    pub min_width: f32,
}

impl Default for TextMeasure {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            row_height: 18.0,
            padding: 10.0,
            min_width: 40.0,
        }
    }
}

impl NodeMeasure for TextMeasure {
    fn measure(&self, kind: NodeKind, rows: &[TextRow], child_count: usize) -> Size {
        let widest = match kind {
            // "[n]" label
            NodeKind::Array => child_count.to_string().len() + 2,
            _ => rows
                .iter()
                .map(|row| {
                    let value = row.text().chars().count();
                    match &row.key {
                        Some(key) => key.chars().count() + 2 + value,
                        None => value,
                    }
                })
                .max()
                .unwrap_or(0),
        };

        let lines = rows.len().max(1) as f32;

        Size {
            width: (widest as f32 * self.char_width + self.padding * 2.0).max(self.min_width),
            height: lines * self.row_height + self.padding * 2.0,
        }
    }
}
