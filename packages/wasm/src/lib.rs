use jsongraph_editor::{EditSession, MutationResult, NodeId, NodeModal};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json(value: &impl Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Graph editor over one JSON document
#[wasm_bindgen]
pub struct GraphEditor {
    session: EditSession,
    modal: NodeModal,
}

#[wasm_bindgen]
impl GraphEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> Result<GraphEditor, JsValue> {
        let session = EditSession::load(text).map_err(js_error)?;
        Ok(Self {
            session,
            modal: NodeModal::new(),
        })
    }

    /// Nodes as a JSON array
    pub fn nodes(&self) -> Result<String, JsValue> {
        to_json(&self.session.graph().nodes())
    }

    /// Edges as a JSON array
    pub fn edges(&self) -> Result<String, JsValue> {
        to_json(&self.session.graph().edges())
    }

    #[wasm_bindgen(js_name = selectNode)]
    pub fn select_node(&mut self, id: &str) -> bool {
        let found = self.session.select_node(&NodeId::from(id));
        self.modal.sync(&self.session);
        found
    }

    /// Selected node as JSON, if any
    pub fn selected(&self) -> Result<Option<String>, JsValue> {
        self.session.selected().map(to_json).transpose()
    }

    /// Returns whether the document changed
    #[wasm_bindgen(js_name = updateNodeText)]
    pub fn update_node_text(&mut self, id: &str, text: &str) -> Result<bool, JsValue> {
        let result = self
            .session
            .update_node_text(&NodeId::from(id), text)
            .map_err(js_error)?;
        self.modal.sync(&self.session);
        Ok(result.is_applied())
    }

    /// Run queued follow-up tasks
    pub fn settle(&mut self) -> usize {
        self.session.settle()
    }

    /// Write `name`/`color` into the selected node
    #[wasm_bindgen(js_name = saveFields)]
    pub fn save_fields(&mut self, name: Option<String>, color: Option<String>) -> Result<bool, JsValue> {
        self.modal.open(&self.session);
        self.modal.begin_edit();
        if let Some(name) = name {
            self.modal.set_name(name);
        }
        if let Some(color) = color {
            self.modal.set_color(color);
        }

        let result = self.modal.save(&mut self.session).map_err(js_error)?;
        Ok(matches!(result, MutationResult::Applied { .. }))
    }

    #[wasm_bindgen(js_name = modalContent)]
    pub fn modal_content(&self) -> String {
        self.modal.content(&self.session)
    }

    #[wasm_bindgen(js_name = jsonPath)]
    pub fn json_path(&self) -> String {
        self.modal.json_path(&self.session)
    }

    #[wasm_bindgen(js_name = displayColor)]
    pub fn display_color(&self) -> String {
        self.modal.display_color(self.session.config()).to_string()
    }

    pub fn contents(&self) -> String {
        self.session.contents().to_string()
    }

    #[wasm_bindgen(js_name = hasChanges)]
    pub fn has_changes(&self) -> bool {
        self.session.has_changes()
    }

    #[wasm_bindgen(js_name = markSaved)]
    pub fn mark_saved(&mut self) {
        self.session.mark_saved();
    }

    pub fn undo(&mut self) -> Result<bool, JsValue> {
        let undone = self.session.undo().map_err(js_error)?;
        self.modal.sync(&self.session);
        Ok(undone)
    }

    pub fn redo(&mut self) -> Result<bool, JsValue> {
        let redone = self.session.redo().map_err(js_error)?;
        self.modal.sync(&self.session);
        Ok(redone)
    }
}
