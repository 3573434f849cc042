//! Automations panel with per-row Run buttons.

use wasm_bindgen::JsCast;

use crate::chat_format::escape_html;
use crate::constants::{AUTOMATIONS_LIST_ID, EMPTY_STATE_CLASS, ERROR_STATE_CLASS};
use crate::dom_utils;
use crate::messages::Message;
use crate::models::Automation;
use crate::state::dispatch_global_message;

/// Rows only, no empty-state wrapper. Shared with the incident detail view's
/// recommended-automations section.
pub fn render_rows(automations: &[Automation]) -> String {
    let mut html = String::new();
    for auto in automations {
        html.push_str(&format!(
            "<div class=\"automation-item\">\
             <span class=\"automation-name\">{}</span>\
             <span class=\"automation-description\">{}</span>\
             <button class=\"run-automation\" data-id=\"{}\">Run</button>\
             </div>",
            escape_html(&auto.name),
            escape_html(&auto.description),
            auto.id
        ));
    }
    html
}

pub fn render_list(automations: &[Automation]) -> String {
    if automations.is_empty() {
        return format!(
            "<div class=\"{}\">No automations available</div>",
            EMPTY_STATE_CLASS
        );
    }
    render_rows(automations)
}

pub fn refresh(automations: &[Automation]) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, AUTOMATIONS_LIST_ID, &render_list(automations));
    let selector = format!("#{} .run-automation", AUTOMATIONS_LIST_ID);
    dom_utils::bind_click_by_data_id(&document, &selector, |data_id| {
        if let Ok(id) = data_id.parse() {
            dispatch_global_message(Message::TriggerAutomation(id));
        }
    });
}

pub fn show_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(
        &document,
        AUTOMATIONS_LIST_ID,
        &format!("<div class=\"{}\">Failed to load automations</div>", ERROR_STATE_CLASS),
    );
}

/// Disable every Run button for the automation while it executes. The same
/// automation can be listed twice (main panel and incident recommendations).
pub fn set_running(id: u32) {
    for_each_run_button(|button, data_id| {
        if data_id == id.to_string() {
            button.set_disabled(true);
            button.set_text_content(Some("Running..."));
        }
    });
}

pub fn reset_buttons() {
    for_each_run_button(|button, _| {
        button.set_disabled(false);
        button.set_text_content(Some("Run"));
    });
}

fn for_each_run_button<F>(f: F)
where
    F: Fn(&web_sys::HtmlButtonElement, String),
{
    let Some(document) = dom_utils::document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".run-automation") else {
        return;
    };
    for idx in 0..nodes.length() {
        let Some(node) = nodes.get(idx) else { continue };
        let Ok(button) = node.dyn_into::<web_sys::HtmlButtonElement>() else {
            continue;
        };
        let Some(data_id) = button.get_attribute("data-id") else {
            continue;
        };
        f(&button, data_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_carry_run_buttons() {
        let autos = vec![Automation {
            id: 3,
            name: "Flush DNS".into(),
            description: "Clears the resolver cache".into(),
        }];
        let html = render_rows(&autos);
        assert!(html.contains("class=\"run-automation\" data-id=\"3\""));
        assert!(html.contains("Flush DNS"));
    }

    #[test]
    fn empty_list_marker() {
        assert!(render_list(&[]).contains(EMPTY_STATE_CLASS));
    }
}
