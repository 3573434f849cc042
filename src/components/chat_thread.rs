//! Chat thread panel: message bubbles, the optimistic user bubble, the
//! pending-response indicator and the inline error bubble.

use crate::chat_format::{format_message_content, role_class};
use crate::constants::{
    CHAT_MESSAGES_ID, CHAT_TITLE_ID, ERROR_STATE_CLASS, NO_MESSAGES_PLACEHOLDER,
};
use crate::dom_utils;
use crate::interop;
use crate::models::{ChatMessage, Conversation};

const PENDING_BUBBLE_ID: &str = "pending-response";

pub fn bubble(role: &str, body_html: &str) -> String {
    format!(
        "<div class=\"message {}\"><div class=\"message-content\">{}</div></div>",
        role_class(role),
        body_html
    )
}

pub fn render_empty() -> String {
    format!("<div class=\"empty-state\">{}</div>", NO_MESSAGES_PLACEHOLDER)
}

pub fn render_error() -> String {
    format!(
        "<div class=\"{}\">Failed to load messages</div>",
        ERROR_STATE_CLASS
    )
}

/// Assistant bodies go through the page's markdown renderer; user and system
/// bodies only get the code/newline substitution.
fn body_html(msg: &ChatMessage) -> String {
    if msg.role == "assistant" {
        interop::render_markdown(&msg.content)
    } else {
        format_message_content(&msg.content)
    }
}

fn thread_html(messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return render_empty();
    }
    messages
        .iter()
        .map(|msg| bubble(&msg.role, &body_html(msg)))
        .collect()
}

/// Show a full conversation: title, every bubble, scrolled to the newest.
pub fn refresh(conversation: &Conversation) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_text(&document, CHAT_TITLE_ID, &conversation.title);
    dom_utils::set_panel_html(&document, CHAT_MESSAGES_ID, &thread_html(&conversation.messages));
    dom_utils::scroll_to_bottom(&document, CHAT_MESSAGES_ID);
}

/// Replace the bubbles without touching the title, for responses that embed
/// the refreshed message list.
pub fn replace_messages(messages: &[ChatMessage]) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, CHAT_MESSAGES_ID, &thread_html(messages));
    dom_utils::scroll_to_bottom(&document, CHAT_MESSAGES_ID);
}

fn append(html: &str) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    if let Some(panel) = dom_utils::by_id(&document, CHAT_MESSAGES_ID) {
        // First append replaces the placeholder.
        if panel.query_selector(".message").ok().flatten().is_none() {
            panel.set_inner_html("");
        }
        let _ = panel.insert_adjacent_html("beforeend", html);
    }
    dom_utils::scroll_to_bottom(&document, CHAT_MESSAGES_ID);
}

/// Echo the submitted text immediately. Never rolled back: on failure the
/// error bubble appears after it.
pub fn append_user_bubble(text: &str) {
    append(&bubble("user", &format_message_content(text)));
}

pub fn show_pending_indicator() {
    append(&format!(
        "<div class=\"message assistant pending\" id=\"{}\">\
         <div class=\"typing-indicator\"><span></span><span></span><span></span></div>\
         </div>",
        PENDING_BUBBLE_ID
    ));
}

pub fn clear_pending_indicator() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    if let Some(el) = dom_utils::by_id(&document, PENDING_BUBBLE_ID) {
        el.remove();
    }
}

pub fn append_system_error(text: &str) {
    append(&bubble("system", &format_message_content(text)));
}

pub fn show_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, CHAT_MESSAGES_ID, &render_error());
}

/// Blank the thread after a delete or clear.
pub fn reset(title: &str) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_text(&document, CHAT_TITLE_ID, title);
    dom_utils::set_panel_html(&document, CHAT_MESSAGES_ID, &render_empty());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_classes_follow_role() {
        assert!(bubble("user", "hi").contains("class=\"message user\""));
        assert!(bubble("assistant", "hi").contains("class=\"message assistant\""));
        assert!(bubble("tool", "hi").contains("class=\"message system\""));
    }

    #[test]
    fn empty_thread_shows_placeholder() {
        assert!(render_empty().contains(NO_MESSAGES_PLACEHOLDER));
    }
}
