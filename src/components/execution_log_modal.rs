//! Shared overlay for automation runs and datasource queries. Both outcomes
//! fill the same header fields and log-line list; closing resets everything
//! so the next open never shows stale header text.

use chrono::Utc;
use web_sys::Document;

use crate::chat_format::escape_html;
use crate::constants::{
    DATASOURCE_LOG_TITLE, EXECUTION_LOG_DEFAULT_TITLE, EXECUTION_LOG_DESCRIPTION_ID,
    EXECUTION_LOG_LINES_ID, EXECUTION_LOG_MESSAGE_ID, EXECUTION_LOG_MODAL_ID,
    EXECUTION_LOG_NAME_ID, EXECUTION_LOG_RAW_ID, EXECUTION_LOG_STATUS_ID,
    EXECUTION_LOG_TITLE_ID,
};
use crate::dom_utils;
use crate::models::{ExecutionLogLine, ExecutionReport};
use crate::utils::format_time;

/// Header pair for an automation run: the automation's name and its
/// description.
pub fn automation_header(report: &ExecutionReport) -> (String, String) {
    let name = report
        .automation
        .as_ref()
        .and_then(|a| a.name.as_deref())
        .or(report.name.as_deref())
        .unwrap_or("Unknown")
        .to_string();
    let detail = report
        .automation
        .as_ref()
        .and_then(|a| a.description.clone())
        .unwrap_or_default();
    (name, detail)
}

/// Header pair for a datasource query: the datasource's name and its
/// endpoint line.
pub fn datasource_header(report: &ExecutionReport) -> (String, String) {
    let name = report
        .datasource
        .as_ref()
        .and_then(|d| d.name.as_deref())
        .or(report.name.as_deref())
        .unwrap_or("Unknown")
        .to_string();
    let detail = report
        .datasource
        .as_ref()
        .and_then(|d| d.endpoint.as_deref())
        .map(|endpoint| format!("Endpoint: {}", endpoint))
        .unwrap_or_default();
    (name, detail)
}

/// Pretty-printed raw payload for the inspection pane.
pub fn raw_payload_text(report: &ExecutionReport) -> String {
    report
        .raw_response
        .as_ref()
        .and_then(|v| serde_json::to_string_pretty(v).ok())
        .unwrap_or_else(|| "No response data available".to_string())
}

/// An empty `logs` array still shows one default info line, stamped with the
/// current wall-clock time.
pub fn render_lines(lines: &[ExecutionLogLine], fallback_message: &str) -> String {
    if lines.is_empty() {
        return format!(
            "<div class=\"log-line log-info\">\
             <span class=\"log-time\">{}</span>\
             <span class=\"log-text\">{}</span>\
             </div>",
            Utc::now().format("%H:%M:%S"),
            escape_html(fallback_message)
        );
    }
    let mut html = String::new();
    for line in lines {
        let level = line.level.as_deref().unwrap_or("info");
        let time = line.timestamp.as_deref().map(format_time).unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"log-line log-{}\">\
             <span class=\"log-time\">{}</span>\
             <span class=\"log-text\">{}</span>\
             </div>",
            escape_html(level),
            escape_html(&time),
            escape_html(line.message.as_deref().unwrap_or(""))
        ));
    }
    html
}

pub fn open_for_automation(report: &ExecutionReport) {
    let (name, detail) = automation_header(report);
    open(
        EXECUTION_LOG_DEFAULT_TITLE,
        &name,
        &detail,
        "Automation execution triggered",
        report,
    );
}

pub fn open_for_datasource(report: &ExecutionReport) {
    let (name, detail) = datasource_header(report);
    open(
        DATASOURCE_LOG_TITLE,
        &name,
        &detail,
        "Data source query executed",
        report,
    );
}

fn open(title: &str, name: &str, detail: &str, fallback_line: &str, report: &ExecutionReport) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_text(&document, EXECUTION_LOG_TITLE_ID, title);
    dom_utils::set_text(&document, EXECUTION_LOG_NAME_ID, name);
    dom_utils::set_text(&document, EXECUTION_LOG_DESCRIPTION_ID, detail);
    dom_utils::set_text(&document, EXECUTION_LOG_STATUS_ID, report.status_text());
    dom_utils::set_text(&document, EXECUTION_LOG_MESSAGE_ID, report.message_text());
    dom_utils::set_panel_html(
        &document,
        EXECUTION_LOG_LINES_ID,
        &render_lines(&report.logs, fallback_line),
    );
    dom_utils::set_text(&document, EXECUTION_LOG_RAW_ID, &raw_payload_text(report));

    super::modal::open(&document, EXECUTION_LOG_MODAL_ID);
}

pub fn close(document: &Document) {
    super::modal::close(document, EXECUTION_LOG_MODAL_ID);
    dom_utils::set_text(document, EXECUTION_LOG_TITLE_ID, EXECUTION_LOG_DEFAULT_TITLE);
    dom_utils::set_text(document, EXECUTION_LOG_NAME_ID, "");
    dom_utils::set_text(document, EXECUTION_LOG_DESCRIPTION_ID, "");
    dom_utils::set_text(document, EXECUTION_LOG_STATUS_ID, "");
    dom_utils::set_text(document, EXECUTION_LOG_MESSAGE_ID, "");
    dom_utils::set_panel_html(document, EXECUTION_LOG_LINES_ID, "");
    dom_utils::set_text(document, EXECUTION_LOG_RAW_ID, "");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lines_carry_level_and_time() {
        let lines = vec![ExecutionLogLine {
            level: Some("warning".into()),
            message: Some("retrying".into()),
            timestamp: Some("2026-03-01T10:15:30Z".into()),
        }];
        let html = render_lines(&lines, "unused");
        assert!(html.contains("log-line log-warning"));
        assert!(html.contains("10:15:30"));
        assert!(html.contains("retrying"));
    }

    #[test]
    fn missing_line_fields_fall_back() {
        let html = render_lines(&[ExecutionLogLine::default()], "unused");
        assert!(html.contains("log-line log-info"));
    }

    #[test]
    fn empty_logs_render_default_info_line() {
        let html = render_lines(&[], "Automation execution triggered");
        assert!(html.contains("log-line log-info"));
        assert!(html.contains("Automation execution triggered"));
    }

    #[test]
    fn automation_header_includes_description() {
        let report: ExecutionReport = serde_json::from_value(json!({
            "automation": {"name": "Restart Pod", "description": "Bounces the pod"}
        }))
        .unwrap();
        assert_eq!(
            automation_header(&report),
            ("Restart Pod".to_string(), "Bounces the pod".to_string())
        );

        let bare = ExecutionReport::default();
        assert_eq!(
            automation_header(&bare),
            ("Unknown".to_string(), String::new())
        );
    }

    #[test]
    fn datasource_header_formats_endpoint() {
        let report: ExecutionReport = serde_json::from_value(json!({
            "datasource": {"name": "CMDB", "endpoint": "/cmdb/query"}
        }))
        .unwrap();
        assert_eq!(
            datasource_header(&report),
            ("CMDB".to_string(), "Endpoint: /cmdb/query".to_string())
        );

        let no_endpoint: ExecutionReport = serde_json::from_value(json!({
            "datasource": {"name": "CMDB"}
        }))
        .unwrap();
        assert_eq!(datasource_header(&no_endpoint).1, "");
    }

    #[test]
    fn missing_raw_payload_falls_back() {
        assert_eq!(
            raw_payload_text(&ExecutionReport::default()),
            "No response data available"
        );

        let report: ExecutionReport = serde_json::from_value(json!({
            "raw_response": {"rows": 3}
        }))
        .unwrap();
        assert!(raw_payload_text(&report).contains("\"rows\": 3"));
    }
}
