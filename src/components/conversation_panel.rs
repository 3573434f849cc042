//! Conversation sidebar: render the list, rebind row clicks, highlight the
//! selection.

use crate::chat_format::escape_html;
use crate::constants::{CONVERSATIONS_LIST_ID, EMPTY_STATE_CLASS, ERROR_STATE_CLASS};
use crate::dom_utils;
use crate::messages::Message;
use crate::models::ConversationSummary;
use crate::state::dispatch_global_message;
use crate::utils::format_timestamp;

pub fn render_list(conversations: &[ConversationSummary]) -> String {
    if conversations.is_empty() {
        return format!(
            "<div class=\"{}\">No conversations yet</div>",
            EMPTY_STATE_CLASS
        );
    }
    let mut html = String::new();
    for conv in conversations {
        let updated = conv
            .updated_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"conversation-item\" data-id=\"{}\">\
             <span class=\"conversation-title\">{}</span>\
             <span class=\"conversation-time\">{}</span>\
             </div>",
            conv.id,
            escape_html(&conv.title),
            escape_html(&updated)
        ));
    }
    html
}

pub fn render_error() -> String {
    format!(
        "<div class=\"{}\">Failed to load conversations</div>",
        ERROR_STATE_CLASS
    )
}

fn row_selector() -> String {
    format!("#{} .conversation-item", CONVERSATIONS_LIST_ID)
}

/// Re-render the sidebar and rebind row clicks. `inner_html` writes drop the
/// old listeners, so binding always follows rendering.
pub fn refresh(conversations: &[ConversationSummary], selected: Option<u32>) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, CONVERSATIONS_LIST_ID, &render_list(conversations));
    dom_utils::bind_click_by_data_id(&document, &row_selector(), |data_id| {
        if let Ok(id) = data_id.parse() {
            dispatch_global_message(Message::SelectConversation(id));
        }
    });
    if let Some(id) = selected {
        highlight(id);
    }
}

pub fn highlight(id: u32) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::highlight_selected_row(&document, &row_selector(), &id.to_string());
}

pub fn show_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, CONVERSATIONS_LIST_ID, &render_error());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u32, title: &str) -> ConversationSummary {
        ConversationSummary {
            id,
            title: title.to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn empty_list_renders_empty_state_marker() {
        let html = render_list(&[]);
        assert!(html.contains(EMPTY_STATE_CLASS));
        assert!(!html.contains("conversation-item"));
    }

    #[test]
    fn rows_carry_data_ids() {
        let html = render_list(&[summary(7, "Printer down"), summary(9, "VPN")]);
        assert!(html.contains("data-id=\"7\""));
        assert!(html.contains("data-id=\"9\""));
        assert!(html.contains("Printer down"));
    }

    #[test]
    fn titles_are_escaped() {
        let html = render_list(&[summary(1, "<img onerror=x>")]);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn load_failure_renders_error_marker() {
        assert!(render_error().contains(ERROR_STATE_CLASS));
    }
}
