//! Browser-side checks for the DOM contract: the base layout exposes every
//! element id the renderers target, and the render/apply helpers leave the
//! document in the advertised shape.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use helpdesk_frontend::components::{chat_thread, conversation_panel, execution_log_modal, modal};
use helpdesk_frontend::constants::*;
use helpdesk_frontend::dom_utils;
use helpdesk_frontend::models::{ChatMessage, Conversation, ConversationSummary};
use helpdesk_frontend::ui;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    ui::setup::ensure_layout(&document).unwrap();
    document
}

#[wasm_bindgen_test]
fn layout_exposes_every_panel_id() {
    let document = document();
    for id in [
        CONVERSATIONS_LIST_ID,
        CHAT_MESSAGES_ID,
        CHAT_INPUT_ID,
        CHAT_TITLE_ID,
        DOCUMENTS_LIST_ID,
        INCIDENTS_LIST_ID,
        INCIDENT_DETAILS_ID,
        INCIDENT_SUMMARY_ID,
        AUTOMATIONS_LIST_ID,
        DASHBOARDS_LIST_ID,
        KNOWLEDGE_BASE_LIST_ID,
        LOGS_LIST_ID,
        STATUS_UPDATE_MODAL_ID,
        UPLOAD_MODAL_ID,
        KB_MODAL_ID,
        KB_VIEW_MODAL_ID,
        EXECUTION_LOG_MODAL_ID,
        MODAL_OVERLAY_ID,
    ] {
        assert!(
            document.get_element_by_id(id).is_some(),
            "missing element #{}",
            id
        );
    }
}

#[wasm_bindgen_test]
fn conversation_refresh_renders_rows_and_highlight() {
    let document = document();
    let list = vec![
        ConversationSummary {
            id: 1,
            title: "first".into(),
            updated_at: None,
        },
        ConversationSummary {
            id: 2,
            title: "second".into(),
            updated_at: None,
        },
    ];
    conversation_panel::refresh(&list, Some(2));

    let rows = document
        .query_selector_all(&format!("#{} .conversation-item", CONVERSATIONS_LIST_ID))
        .unwrap();
    assert_eq!(rows.length(), 2);

    let active = document
        .query_selector(&format!("#{} .conversation-item.active", CONVERSATIONS_LIST_ID))
        .unwrap()
        .unwrap();
    assert_eq!(active.get_attribute("data-id").as_deref(), Some("2"));

    // Moving the highlight leaves exactly one active row.
    conversation_panel::highlight(1);
    let active = document
        .query_selector_all(&format!("#{} .conversation-item.active", CONVERSATIONS_LIST_ID))
        .unwrap();
    assert_eq!(active.length(), 1);
}

#[wasm_bindgen_test]
fn pending_indicator_appears_and_clears() {
    let document = document();
    let conv = Conversation {
        id: 1,
        title: "t".into(),
        updated_at: None,
        messages: vec![ChatMessage {
            role: "user".into(),
            content: "hi".into(),
        }],
    };
    chat_thread::refresh(&conv);

    chat_thread::append_user_bubble("follow-up");
    chat_thread::show_pending_indicator();
    assert!(document.get_element_by_id("pending-response").is_some());

    chat_thread::clear_pending_indicator();
    assert!(document.get_element_by_id("pending-response").is_none());

    // The optimistic bubble survives the indicator removal.
    let bubbles = document
        .query_selector_all(&format!("#{} .message.user", CHAT_MESSAGES_ID))
        .unwrap();
    assert_eq!(bubbles.length(), 2);
}

#[wasm_bindgen_test]
fn modal_open_and_close_toggle_overlay() {
    let document = document();
    modal::open(&document, KB_MODAL_ID);
    let overlay = document.get_element_by_id(MODAL_OVERLAY_ID).unwrap();
    let modal_el = document.get_element_by_id(KB_MODAL_ID).unwrap();
    assert!(!style_display(&overlay).contains("none"));
    assert!(!style_display(&modal_el).contains("none"));

    modal::close(&document, KB_MODAL_ID);
    assert_eq!(style_display(&overlay), "none");
    assert_eq!(style_display(&modal_el), "none");
}

#[wasm_bindgen_test]
fn execution_log_close_resets_header() {
    let document = document();
    dom_utils::set_text(&document, EXECUTION_LOG_TITLE_ID, DATASOURCE_LOG_TITLE);
    dom_utils::set_text(&document, EXECUTION_LOG_NAME_ID, "CMDB");
    dom_utils::set_text(&document, EXECUTION_LOG_DESCRIPTION_ID, "Endpoint: /cmdb/query");
    dom_utils::set_text(&document, EXECUTION_LOG_STATUS_ID, "success");

    execution_log_modal::close(&document);

    let title = document
        .get_element_by_id(EXECUTION_LOG_TITLE_ID)
        .unwrap()
        .text_content()
        .unwrap_or_default();
    assert_eq!(title, EXECUTION_LOG_DEFAULT_TITLE);
    for id in [EXECUTION_LOG_NAME_ID, EXECUTION_LOG_DESCRIPTION_ID] {
        let text = document
            .get_element_by_id(id)
            .unwrap()
            .text_content()
            .unwrap_or_default();
        assert!(text.is_empty(), "#{} not reset", id);
    }
}

fn style_display(el: &web_sys::Element) -> String {
    use wasm_bindgen::JsCast;
    el.dyn_ref::<web_sys::HtmlElement>()
        .map(|h| h.style().get_property_value("display").unwrap_or_default())
        .unwrap_or_default()
}
