//! Audit log panel.

use crate::chat_format::escape_html;
use crate::constants::{EMPTY_STATE_CLASS, ERROR_STATE_CLASS, LOGS_LIST_ID};
use crate::dom_utils;
use crate::models::LogEntry;
use crate::utils::format_timestamp;

pub fn render_list(logs: &[LogEntry]) -> String {
    if logs.is_empty() {
        return format!("<div class=\"{}\">No log entries</div>", EMPTY_STATE_CLASS);
    }
    let mut html = String::new();
    for log in logs {
        let timestamp = log
            .timestamp
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"log-entry log-{}\">\
             <span class=\"log-time\">{}</span>\
             <span class=\"log-source\">[{}]</span>\
             <span class=\"log-message\">{}</span>\
             </div>",
            escape_html(&log.level),
            escape_html(&timestamp),
            escape_html(&log.source),
            escape_html(&log.message)
        ));
    }
    html
}

pub fn refresh(logs: &[LogEntry]) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, LOGS_LIST_ID, &render_list(logs));
}

pub fn show_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(
        &document,
        LOGS_LIST_ID,
        &format!("<div class=\"{}\">Failed to load logs</div>", ERROR_STATE_CLASS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_carry_level_class() {
        let logs = vec![LogEntry {
            level: "error".into(),
            source: "automation_service".into(),
            message: "boom".into(),
            timestamp: Some("2026-03-01T09:00:00Z".into()),
        }];
        let html = render_list(&logs);
        assert!(html.contains("log-entry log-error"));
        assert!(html.contains("[automation_service]"));
        assert!(html.contains("2026-03-01 09:00:00"));
    }

    #[test]
    fn empty_marker() {
        assert!(render_list(&[]).contains(EMPTY_STATE_CLASS));
    }
}
