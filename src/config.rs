//! Config Loading
//!
//! Reads the optional `<script id="kanban-config" type="application/json">`
//! block from the host page.

use kanban_core::{BoardConfig, BoardResult};

const CONFIG_ELEMENT_ID: &str = "kanban-config";

/// Config from the page, defaults when the element is absent or empty
pub fn load_config() -> BoardResult<BoardConfig> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Ok(BoardConfig::default());
    }
    BoardConfig::from_json(&text)
}
