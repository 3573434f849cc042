//! Browser client for the support-desk backend: chat with the assistant,
//! browse and act on incidents, run automations, and manage documents and
//! knowledge-base entries. Compiled to WebAssembly and driven entirely by
//! messages flowing through a single reducer.

use wasm_bindgen::prelude::*;

pub mod chat_format;
pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod interop;
pub mod messages;
pub mod models;
pub mod network;
pub mod state;
pub mod toast;
pub mod ui;
pub mod update;
pub mod utils;

#[cfg(test)]
mod sort_order_props;

use crate::messages::Message;
use crate::state::dispatch_global_message;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    ui::setup::ensure_layout(&document)?;
    ui::events::wire(&document)?;

    // Initial load of every panel; each runs independently.
    dispatch_global_message(Message::LoadConversations);
    dispatch_global_message(Message::LoadDocuments);
    dispatch_global_message(Message::LoadIncidents);
    dispatch_global_message(Message::LoadAutomations);
    dispatch_global_message(Message::LoadDashboards);
    dispatch_global_message(Message::LoadKnowledgeBase);
    dispatch_global_message(Message::LoadLogs);

    interop::replace_icons();
    Ok(())
}
