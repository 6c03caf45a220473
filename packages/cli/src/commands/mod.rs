pub mod edit;
pub mod fields;
pub mod inspect;

pub use edit::{edit, EditArgs};
pub use fields::{set_fields, SetFieldsArgs};
pub use inspect::{inspect, InspectArgs};

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use jsongraph_document::resolve_pointer;
use jsongraph_editor::{EditSession, MutationResult, NodeId};
use std::fs;
use std::path::PathBuf;

/// Which node a command addresses
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct NodeTarget {
    /// Node id as shown by `inspect`
    #[arg(long)]
    pub node: Option<String>,

    /// JSON pointer to the node's value (e.g. /items/0)
    #[arg(long)]
    pub path: Option<String>,
}

/// A document opened from disk
pub struct OpenDocument {
    pub file: PathBuf,
    pub session: EditSession,
}

pub fn open_document(file: &str, cwd: &str) -> Result<OpenDocument> {
    let config = Config::load(cwd)?;
    let file = PathBuf::from(cwd).join(file);

    let contents = fs::read_to_string(&file).with_context(|| format!("Cannot read {}", file.display()))?;
    let session = EditSession::load_with_config(contents, config.editor)
        .with_context(|| format!("Cannot load {}", file.display()))?;

    Ok(OpenDocument { file, session })
}

/// Id of the node addressed by `target`
pub fn resolve_target(session: &EditSession, target: &NodeTarget) -> Result<NodeId> {
    if let Some(id) = &target.node {
        let id = NodeId::from(id.as_str());
        return match session.graph().find_node(&id) {
            Some(node) => Ok(node.id.clone()),
            None => Err(anyhow!("No node with id {}", id)),
        };
    }

    let pointer = target.path.as_deref().unwrap_or("");
    let path = resolve_pointer(session.state().parsed().get(), pointer)
        .with_context(|| format!("Cannot resolve {:?}", pointer))?;

    session
        .graph()
        .find_by_path(&path)
        .map(|node| node.id.clone())
        .ok_or_else(|| anyhow!("{} is a field of its parent, not a node", path))
}

/// Print or persist the outcome of an edit
pub fn finish(doc: &mut OpenDocument, result: MutationResult, stdout: bool) -> Result<()> {
    if stdout {
        println!("{}", doc.session.contents());
        return Ok(());
    }

    match result {
        MutationResult::Applied { node_id, .. } => {
            fs::write(&doc.file, doc.session.contents())
                .with_context(|| format!("Cannot write {}", doc.file.display()))?;
            doc.session.mark_saved();
            println!("{} Updated node {} in {}", "✓".green(), node_id, doc.file.display());
        }
        MutationResult::Noop { node_id } => {
            println!("{} Node {} already has that value", "•".dimmed(), node_id);
        }
    }

    Ok(())
}
