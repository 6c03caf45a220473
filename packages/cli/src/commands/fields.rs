use super::{finish, open_document, resolve_target, NodeTarget};
use anyhow::{anyhow, Result};
use clap::Args;
use jsongraph_editor::NodeModal;
use tracing::info;

#[derive(Debug, Args)]
pub struct SetFieldsArgs {
    /// JSON file to edit
    pub file: String,

    #[command(flatten)]
    pub target: NodeTarget,

    /// New value of the node's `name` field
    #[arg(long)]
    pub name: Option<String>,

    /// New value of the node's `color` field
    #[arg(long)]
    pub color: Option<String>,

    /// Print the edited document instead of writing it back
    #[arg(long)]
    pub stdout: bool,
}

pub fn set_fields(args: SetFieldsArgs, cwd: &str) -> Result<()> {
    if args.name.is_none() && args.color.is_none() {
        return Err(anyhow!("Nothing to set: pass --name and/or --color"));
    }

    let mut doc = open_document(&args.file, cwd)?;
    let id = resolve_target(&doc.session, &args.target)?;
    doc.session.select_node(&id);

    let mut modal = NodeModal::new();
    modal.open(&doc.session);
    modal.begin_edit();
    if let Some(name) = args.name {
        modal.set_name(name);
    }
    if let Some(color) = args.color {
        modal.set_color(color);
    }

    info!(node_id = %id, file = %doc.file.display(), "Saving node fields");
    let result = modal.save(&mut doc.session)?;

    finish(&mut doc, result, args.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(path: &str, name: Option<&str>, color: Option<&str>) -> SetFieldsArgs {
        SetFieldsArgs {
            file: "data.json".to_string(),
            target: NodeTarget {
                node: None,
                path: Some(path.to_string()),
            },
            name: name.map(str::to_string),
            color: color.map(str::to_string),
            stdout: false,
        }
    }

    #[test]
    fn test_set_fields_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join("data.json"), r##"{"a":{"name":"x","color":"#fff"}}"##).unwrap();

        set_fields(args("/a", Some("y"), None), &cwd).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("data.json")).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({ "a": { "name": "y", "color": "#fff" } }));
    }

    #[test]
    fn test_set_fields_by_node_id() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join("data.json"), r#"[{"name": "x"}]"#).unwrap();

        let session = jsongraph_editor::EditSession::load(r#"[{"name": "x"}]"#).unwrap();
        let id = session.graph().nodes()[1].id.to_string();

        let mut by_id = args("", None, Some("red"));
        by_id.target = NodeTarget {
            node: Some(id),
            path: None,
        };
        set_fields(by_id, &cwd).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("data.json")).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!([{ "name": "x", "color": "red" }]));
    }

    #[test]
    fn test_set_fields_needs_a_field() {
        let err = set_fields(args("/a", None, None), "/nonexistent").unwrap_err();
        assert!(err.to_string().contains("Nothing to set"));
    }

    #[test]
    fn test_set_fields_on_array_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join("data.json"), r#"{"list": [1]}"#).unwrap();

        let err = set_fields(args("/list", Some("y"), None), &cwd).unwrap_err();
        assert!(err.to_string().contains("not backed by an object"));
    }
}
