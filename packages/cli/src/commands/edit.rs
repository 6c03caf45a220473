use super::{finish, open_document, resolve_target, NodeTarget};
use anyhow::Result;
use clap::Args;
use tracing::info;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// JSON file to edit
    pub file: String,

    #[command(flatten)]
    pub target: NodeTarget,

    /// New text for the node
    #[arg(long)]
    pub value: String,

    /// Print the edited document instead of writing it back
    #[arg(long)]
    pub stdout: bool,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let mut doc = open_document(&args.file, cwd)?;
    let id = resolve_target(&doc.session, &args.target)?;

    info!(node_id = %id, file = %doc.file.display(), "Editing node text");
    let result = doc.session.update_node_text(&id, args.value)?;

    finish(&mut doc, result, args.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(file: &str, path: &str, value: &str) -> EditArgs {
        EditArgs {
            file: file.to_string(),
            target: NodeTarget {
                node: None,
                path: Some(path.to_string()),
            },
            value: value.to_string(),
            stdout: false,
        }
    }

    #[test]
    fn test_edit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join("data.json"), r#"{"items": [1, "two"]}"#).unwrap();

        edit(args("data.json", "/items/0", "5"), &cwd).unwrap();

        let written = fs::read_to_string(dir.path().join("data.json")).unwrap();
        assert_eq!(written, "{\n  \"items\": [\n    5,\n    \"two\"\n  ]\n}");
    }

    #[test]
    fn test_edit_respects_config_indent() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join("jsongraph.config.json"), r#"{"editor": {"indent": 4}}"#).unwrap();
        fs::write(dir.path().join("data.json"), r#"["a"]"#).unwrap();

        edit(args("data.json", "/0", "b"), &cwd).unwrap();

        let written = fs::read_to_string(dir.path().join("data.json")).unwrap();
        assert_eq!(written, "[\n    \"b\"\n]");
    }

    #[test]
    fn test_stdout_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join("data.json"), r#"["a"]"#).unwrap();

        let mut stdout_args = args("data.json", "/0", "b");
        stdout_args.stdout = true;
        edit(stdout_args, &cwd).unwrap();

        let written = fs::read_to_string(dir.path().join("data.json")).unwrap();
        assert_eq!(written, r#"["a"]"#);
    }

    #[test]
    fn test_edit_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join("data.json"), "1").unwrap();

        let err = edit(args("data.json", "", "2"), &cwd).unwrap_err();
        assert!(err.to_string().contains("root"));
        assert_eq!(fs::read_to_string(dir.path().join("data.json")).unwrap(), "1");
    }
}
