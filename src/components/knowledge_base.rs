//! Knowledge-base panel (cards grouped by category) plus its editor and
//! viewer modals.

use web_sys::Document;

use crate::chat_format::escape_html;
use crate::constants::{
    EMPTY_STATE_CLASS, ERROR_STATE_CLASS, KB_CATEGORY_INPUT_ID, KB_CONTENT_INPUT_ID, KB_MODAL_ID,
    KB_MODAL_TITLE_ID, KB_TITLE_INPUT_ID, KB_VIEW_CATEGORY_ID, KB_VIEW_CONTENT_ID, KB_VIEW_MODAL_ID,
    KB_VIEW_TITLE_ID, KNOWLEDGE_BASE_LIST_ID,
};
use crate::dom_utils;
use crate::interop;
use crate::messages::Message;
use crate::models::{group_by_category, KnowledgeBaseEntry};
use crate::state::dispatch_global_message;
use crate::utils::preview;

const PREVIEW_GRAPHEMES: usize = 100;

pub fn render_list(entries: &[KnowledgeBaseEntry]) -> String {
    if entries.is_empty() {
        return format!(
            "<div class=\"{}\">No knowledge base entries yet</div>",
            EMPTY_STATE_CLASS
        );
    }
    let mut html = String::new();
    for (category, entries) in group_by_category(entries) {
        html.push_str(&format!(
            "<h4 class=\"kb-category\">{}</h4>",
            escape_html(&category)
        ));
        for entry in entries {
            html.push_str(&format!(
                "<div class=\"kb-entry\">\
                 <span class=\"kb-entry-title\">{}</span>\
                 <p class=\"kb-entry-preview\">{}</p>\
                 <button class=\"kb-view\" data-id=\"{}\">View</button>\
                 <button class=\"kb-edit\" data-id=\"{}\">Edit</button>\
                 <button class=\"kb-delete\" data-id=\"{}\">Delete</button>\
                 </div>",
                escape_html(&entry.title),
                escape_html(&preview(&entry.content, PREVIEW_GRAPHEMES)),
                entry.id,
                entry.id,
                entry.id
            ));
        }
    }
    html
}

pub fn render_error() -> String {
    format!(
        "<div class=\"{}\">Failed to load knowledge base</div>",
        ERROR_STATE_CLASS
    )
}

pub fn refresh(entries: &[KnowledgeBaseEntry]) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, KNOWLEDGE_BASE_LIST_ID, &render_list(entries));

    let selector = |class: &str| format!("#{} .{}", KNOWLEDGE_BASE_LIST_ID, class);
    dom_utils::bind_click_by_data_id(&document, &selector("kb-view"), |data_id| {
        if let Ok(id) = data_id.parse() {
            dispatch_global_message(Message::ViewKbEntry(id));
        }
    });
    dom_utils::bind_click_by_data_id(&document, &selector("kb-edit"), |data_id| {
        if let Ok(id) = data_id.parse() {
            dispatch_global_message(Message::OpenKbEditModal(id));
        }
    });
    dom_utils::bind_click_by_data_id(&document, &selector("kb-delete"), |data_id| {
        if let Ok(id) = data_id.parse() {
            if dom_utils::confirm("Delete this knowledge base entry?") {
                dispatch_global_message(Message::DeleteKbEntry(id));
            }
        }
    });
}

pub fn show_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, KNOWLEDGE_BASE_LIST_ID, &render_error());
}

/// Open the editor modal. `entry` prefills the form for an edit; `None`
/// starts a blank create form.
pub fn open_editor(entry: Option<&KnowledgeBaseEntry>) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    match entry {
        Some(entry) => {
            dom_utils::set_text(&document, KB_MODAL_TITLE_ID, "Edit Knowledge Base Entry");
            dom_utils::set_input_value(&document, KB_TITLE_INPUT_ID, &entry.title);
            dom_utils::set_input_value(
                &document,
                KB_CATEGORY_INPUT_ID,
                entry.category.as_deref().unwrap_or(""),
            );
            dom_utils::set_textarea_value(&document, KB_CONTENT_INPUT_ID, &entry.content);
        }
        None => {
            dom_utils::set_text(&document, KB_MODAL_TITLE_ID, "Create Knowledge Base Entry");
            dom_utils::set_input_value(&document, KB_TITLE_INPUT_ID, "");
            dom_utils::set_input_value(&document, KB_CATEGORY_INPUT_ID, "");
            dom_utils::set_textarea_value(&document, KB_CONTENT_INPUT_ID, "");
        }
    }
    super::modal::open(&document, KB_MODAL_ID);
}

pub fn close_editor(document: &Document) {
    super::modal::close(document, KB_MODAL_ID);
}

pub fn open_viewer(entry: &KnowledgeBaseEntry) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_text(&document, KB_VIEW_TITLE_ID, &entry.title);
    dom_utils::set_text(&document, KB_VIEW_CATEGORY_ID, entry.category_label());
    if let Some(el) = dom_utils::by_id(&document, KB_VIEW_CONTENT_ID) {
        el.set_inner_html(&interop::render_markdown(&entry.content));
    }
    super::modal::open(&document, KB_VIEW_MODAL_ID);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, title: &str, category: Option<&str>, content: &str) -> KnowledgeBaseEntry {
        KnowledgeBaseEntry {
            id,
            title: title.to_string(),
            category: category.map(str::to_string),
            content: content.to_string(),
        }
    }

    #[test]
    fn entries_grouped_under_sorted_categories() {
        let entries = vec![
            entry(1, "b", Some("Networking"), "x"),
            entry(2, "a", None, "y"),
            entry(3, "c", Some("Access"), "z"),
        ];
        let html = render_list(&entries);
        let access = html.find("Access").unwrap();
        let networking = html.find("Networking").unwrap();
        let uncategorized = html.find("Uncategorized").unwrap();
        assert!(access < networking && networking < uncategorized);
    }

    #[test]
    fn long_content_is_previewed() {
        let long = "x".repeat(300);
        let html = render_list(&[entry(1, "t", None, &long)]);
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(!html.contains(&"x".repeat(101)));
    }

    #[test]
    fn cards_carry_all_three_actions() {
        let html = render_list(&[entry(4, "t", None, "c")]);
        for class in ["kb-view", "kb-edit", "kb-delete"] {
            assert!(html.contains(&format!("class=\"{}\" data-id=\"4\"", class)));
        }
    }

    #[test]
    fn empty_and_error_markers() {
        assert!(render_list(&[]).contains(EMPTY_STATE_CLASS));
        assert!(render_error().contains(ERROR_STATE_CLASS));
    }
}
