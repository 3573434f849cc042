//! Wiring for the static controls that exist once per page. List-row and
//! per-render buttons are bound by the panel renderers instead, since those
//! elements are recreated on every render.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

use crate::command_executors;
use crate::components::{document_panel, execution_log_modal, knowledge_base, modal};
use crate::constants::{
    CHAT_INPUT_ID, KB_CATEGORY_INPUT_ID, KB_CONTENT_INPUT_ID, KB_FORM_ID, KB_TITLE_INPUT_ID,
    KB_VIEW_MODAL_ID, MODAL_OVERLAY_ID, STATUS_COMMENTS_ID, STATUS_SELECT_ID, UPLOAD_FORM_ID,
    UPLOAD_MODAL_ID,
};
use crate::dom_utils;
use crate::messages::Message;
use crate::state::dispatch_global_message;

pub fn wire(document: &Document) -> Result<(), JsValue> {
    wire_chat(document);
    wire_documents(document);
    wire_status_modal(document);
    wire_knowledge_base(document);
    wire_modal_dismissal(document);
    Ok(())
}

fn wire_chat(document: &Document) {
    dom_utils::bind_submit(document, "chat-form", || {
        let Some(document) = dom_utils::document() else {
            return;
        };
        if let Some(text) = dom_utils::input_value(&document, CHAT_INPUT_ID) {
            dispatch_global_message(Message::SendChatMessage(text));
        }
    });

    dom_utils::bind_click(document, "new-chat-btn", || {
        dispatch_global_message(Message::CreateConversation);
    });

    dom_utils::bind_click(document, "rename-chat-btn", || {
        if let Some(title) = dom_utils::prompt("New conversation title:") {
            let title = title.trim().to_string();
            if !title.is_empty() {
                dispatch_global_message(Message::RenameConversation(title));
            }
        }
    });

    dom_utils::bind_click(document, "delete-chat-btn", || {
        if dom_utils::confirm("Delete this conversation?") {
            dispatch_global_message(Message::DeleteCurrentConversation);
        }
    });

    dom_utils::bind_click(document, "clear-chats-btn", || {
        if dom_utils::confirm("Delete ALL conversations? This cannot be undone.") {
            dispatch_global_message(Message::ClearAllConversations);
        }
    });
}

fn wire_documents(document: &Document) {
    dom_utils::bind_click(document, "upload-document-btn", || {
        document_panel::open_upload_modal();
    });

    dom_utils::bind_submit(document, UPLOAD_FORM_ID, || {
        let Some(document) = dom_utils::document() else {
            return;
        };
        if let Some(form) = dom_utils::by_id(&document, UPLOAD_FORM_ID)
            .and_then(|e| e.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            command_executors::upload_document(&form);
        }
    });

    dom_utils::bind_click(document, "upload-close-btn", || {
        if let Some(document) = dom_utils::document() {
            modal::close(&document, UPLOAD_MODAL_ID);
        }
    });

    dom_utils::bind_click(document, "clear-documents-btn", || {
        if dom_utils::confirm("Delete ALL documents? This cannot be undone.") {
            dispatch_global_message(Message::ClearAllDocuments);
        }
    });
}

fn wire_status_modal(document: &Document) {
    dom_utils::bind_click(document, "status-submit-btn", || {
        let Some(document) = dom_utils::document() else {
            return;
        };
        let comments = dom_utils::textarea_value(&document, STATUS_COMMENTS_ID).unwrap_or_default();
        let selected_state =
            dom_utils::select_value(&document, STATUS_SELECT_ID).and_then(|v| v.parse().ok());
        dispatch_global_message(Message::SubmitStatusUpdate {
            comments,
            selected_state,
        });
    });

    dom_utils::bind_click(document, "status-cancel-btn", || {
        dispatch_global_message(Message::CloseStatusModal);
    });
}

fn wire_knowledge_base(document: &Document) {
    dom_utils::bind_click(document, "kb-create-btn", || {
        dispatch_global_message(Message::OpenKbCreateModal);
    });

    dom_utils::bind_submit(document, KB_FORM_ID, || {
        let Some(document) = dom_utils::document() else {
            return;
        };
        dispatch_global_message(Message::SaveKbEntry {
            title: dom_utils::input_value(&document, KB_TITLE_INPUT_ID).unwrap_or_default(),
            category: dom_utils::input_value(&document, KB_CATEGORY_INPUT_ID).unwrap_or_default(),
            content: dom_utils::textarea_value(&document, KB_CONTENT_INPUT_ID).unwrap_or_default(),
        });
    });

    dom_utils::bind_click(document, "kb-cancel-btn", || {
        if let Some(document) = dom_utils::document() {
            knowledge_base::close_editor(&document);
        }
    });

    dom_utils::bind_click(document, "kb-view-close-btn", || {
        if let Some(document) = dom_utils::document() {
            modal::close(&document, KB_VIEW_MODAL_ID);
        }
    });
}

fn wire_modal_dismissal(document: &Document) {
    dom_utils::bind_click(document, "execution-log-close-btn", || {
        if let Some(document) = dom_utils::document() {
            execution_log_modal::close(&document);
        }
    });

    // Clicking the overlay dismisses whatever is open.
    dom_utils::bind_click(document, MODAL_OVERLAY_ID, || {
        let Some(document) = dom_utils::document() else {
            return;
        };
        dispatch_global_message(Message::CloseStatusModal);
        execution_log_modal::close(&document);
        knowledge_base::close_editor(&document);
        modal::close(&document, KB_VIEW_MODAL_ID);
        modal::close(&document, UPLOAD_MODAL_ID);
    });
}
