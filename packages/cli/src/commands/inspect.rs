use super::{open_document, resolve_target, NodeTarget};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jsongraph_editor::{EditSession, Node, NodeKind, NodeModal};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// JSON file to inspect
    pub file: String,

    /// Show a single node's content and JSON path
    #[arg(long)]
    pub node: Option<String>,

    /// Like --node, addressed by JSON pointer
    #[arg(long, conflicts_with = "node")]
    pub path: Option<String>,
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let mut doc = open_document(&args.file, cwd)?;

    if args.node.is_none() && args.path.is_none() {
        print!("{}", render_graph(&doc.session));
        return Ok(());
    }

    let target = NodeTarget {
        node: args.node,
        path: args.path,
    };
    let id = resolve_target(&doc.session, &target)?;
    doc.session.select_node(&id);

    let mut modal = NodeModal::new();
    modal.open(&doc.session);
    print!("{}", render_modal(&modal, &doc.session));
    Ok(())
}

/// One line per node, indented by depth
pub fn render_graph(session: &EditSession) -> String {
    let graph = session.graph();
    let mut out = format!(
        "{} {} nodes, {} edges\n",
        "Graph".bright_blue().bold(),
        graph.node_count(),
        graph.edges().len()
    );

    for node in graph.nodes() {
        let indent = "  ".repeat(node.path.len());
        out.push_str(&format!(
            "{}{} {} {}\n",
            indent,
            node.id.as_str().dimmed(),
            kind_label(node),
            summary(node)
        ));
    }
    out
}

pub fn render_modal(modal: &NodeModal, session: &EditSession) -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        "Content".bold(),
        modal.content(session),
        "JSON Path".bold(),
        modal.json_path(session)
    )
}

fn kind_label(node: &Node) -> String {
    match node.kind {
        NodeKind::Object => "object".cyan().to_string(),
        NodeKind::Array => format!("array[{}]", node.child_count).yellow().to_string(),
        NodeKind::Value => "value".green().to_string(),
    }
}

fn summary(node: &Node) -> String {
    node.rows
        .iter()
        .map(|row| match &row.key {
            Some(key) => format!("{}={}", key, row.text()),
            None => row.text(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
