//! Base page skeleton. The backend may serve the full markup already; when
//! the panels are missing (standalone builds, tests) they are created here so
//! every element id the renderers target exists before the first load.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::{CONVERSATIONS_LIST_ID, UNSELECTED_CONVERSATION_TITLE};

pub fn ensure_layout(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(CONVERSATIONS_LIST_ID).is_some() {
        return Ok(());
    }

    let root = document.create_element("div")?;
    root.set_id("app-root");
    root.set_inner_html(&layout_html());
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&root)?;
    Ok(())
}

fn layout_html() -> String {
    format!(
        r#"
<div class="layout">
  <aside class="sidebar">
    <div class="sidebar-header">
      <button id="new-chat-btn">New Chat</button>
      <button id="rename-chat-btn">Rename</button>
      <button id="delete-chat-btn">Delete</button>
      <button id="clear-chats-btn">Clear All</button>
    </div>
    <div id="conversations-list"></div>
  </aside>

  <main class="chat-panel">
    <h2 id="current-conversation-title">{unselected_title}</h2>
    <div id="chat-messages"></div>
    <form id="chat-form">
      <input id="chat-input" type="text" autocomplete="off" placeholder="Type a message...">
      <button type="submit">Send</button>
    </form>
  </main>

  <section class="side-panels">
    <div class="panel">
      <h3>Documents</h3>
      <button id="upload-document-btn">Upload</button>
      <button id="clear-documents-btn">Clear All</button>
      <div id="documents-list"></div>
    </div>
    <div class="panel">
      <h3>Incidents</h3>
      <div id="incident-summary"></div>
      <div id="incidents-list"></div>
      <div id="incident-details"></div>
    </div>
    <div class="panel">
      <h3>Automations</h3>
      <div id="automations-list"></div>
    </div>
    <div class="panel">
      <h3>Dashboards</h3>
      <div id="dashboards-list"></div>
    </div>
    <div class="panel">
      <h3>Knowledge Base</h3>
      <button id="kb-create-btn">New Entry</button>
      <div id="knowledge-base-list"></div>
    </div>
    <div class="panel">
      <h3>Logs</h3>
      <div id="logs-list"></div>
    </div>
  </section>
</div>

<div id="modal-overlay" style="display:none"></div>

<div id="status-update-modal" class="modal" style="display:none">
  <h3 id="status-modal-title">Update Incident Status</h3>
  <div id="status-select-row">
    <label for="status-select">State</label>
    <select id="status-select">
      <option value="1">New</option>
      <option value="2">In Progress</option>
      <option value="3">On Hold</option>
      <option value="4">Resolved</option>
      <option value="5">Closed/Canceled</option>
    </select>
  </div>
  <textarea id="status-comments" placeholder="Comments (optional)"></textarea>
  <button id="status-submit-btn">Save</button>
  <button id="status-cancel-btn">Cancel</button>
</div>

<div id="upload-modal" class="modal" style="display:none">
  <h3>Upload Document</h3>
  <form id="document-upload-form">
    <input type="text" name="title" placeholder="Title">
    <input type="file" name="file">
    <button type="submit">Upload</button>
  </form>
  <div id="upload-status"></div>
  <button id="upload-close-btn">Close</button>
</div>

<div id="kb-modal" class="modal" style="display:none">
  <h3 id="kb-modal-title">Create Knowledge Base Entry</h3>
  <form id="kb-form">
    <input id="kb-title" type="text" placeholder="Title">
    <input id="kb-category" type="text" placeholder="Category">
    <textarea id="kb-content" placeholder="Content"></textarea>
    <button type="submit">Save</button>
  </form>
  <button id="kb-cancel-btn">Cancel</button>
</div>

<div id="kb-view-modal" class="modal" style="display:none">
  <h3 id="kb-view-title"></h3>
  <span id="kb-view-category"></span>
  <div id="kb-view-content"></div>
  <button id="kb-view-close-btn">Close</button>
</div>

<div id="execution-log-modal" class="modal" style="display:none">
  <h3 id="execution-log-title">Automation Logs</h3>
  <div class="execution-log-header">
    <span id="execution-log-name"></span>
    <span id="execution-log-description"></span>
    <span id="execution-log-status"></span>
    <span id="execution-log-message"></span>
  </div>
  <div id="execution-log-lines"></div>
  <pre id="execution-log-raw"></pre>
  <button id="execution-log-close-btn">Close</button>
</div>
"#,
        unselected_title = UNSELECTED_CONVERSATION_TITLE
    )
}
