//! Incident list, priority summary and detail view.

use gloo_timers::callback::Timeout;

use crate::chat_format::escape_html;
use crate::constants::{
    EMPTY_STATE_CLASS, ERROR_STATE_CLASS, INCIDENTS_LIST_ID, INCIDENT_DETAILS_ID,
    INCIDENT_SUMMARY_ID, LOADING_STATE_CLASS,
};
use crate::dom_utils;
use crate::messages::Message;
use crate::models::{Incident, Priority, PrioritySummary};
use crate::state::{dispatch_global_message, StatusUpdateMode};
use crate::utils::format_timestamp;

pub fn severity_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "severity-critical",
        Priority::High => "severity-high",
        Priority::Medium => "severity-medium",
        Priority::Low => "severity-low",
        Priority::VeryLow => "severity-very-low",
        Priority::Unknown => "severity-unknown",
    }
}

/// Render the incident rows. Callers sort beforehand; this function keeps the
/// order it is given.
pub fn render_list(incidents: &[Incident]) -> String {
    if incidents.is_empty() {
        return format!("<div class=\"{}\">No incidents found</div>", EMPTY_STATE_CLASS);
    }
    let mut html = String::new();
    for inc in incidents {
        html.push_str(&format!(
            "<div class=\"incident-item {}\" data-id=\"{}\">\
             <span class=\"incident-number\">{}</span>\
             <span class=\"incident-description\">{}</span>\
             <span class=\"incident-priority\">{}</span>\
             <span class=\"incident-state\">{}</span>\
             </div>",
            severity_class(inc.priority),
            inc.id,
            escape_html(&inc.incident_number),
            escape_html(&inc.short_description),
            inc.priority.label(),
            escape_html(&inc.state_label())
        ));
    }
    html
}

pub fn render_summary(summary: &PrioritySummary) -> String {
    format!(
        "<span class=\"summary-high\">High: {}</span>\
         <span class=\"summary-medium\">Medium: {}</span>\
         <span class=\"summary-low\">Low: {}</span>\
         <span class=\"summary-total\">Total: {}</span>",
        summary.high, summary.medium, summary.low, summary.total
    )
}

pub fn render_detail(incident: &Incident) -> String {
    let created = incident
        .created_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default();
    let updated = incident
        .updated_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default();
    let comments = incident
        .comments
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or("No comments yet");

    let mut html = format!(
        "<div class=\"incident-header {}\">\
         <h3>{}</h3>\
         <span class=\"incident-priority\">{}</span>\
         <span class=\"incident-state\">{}</span>\
         </div>\
         <p class=\"incident-short\">{}</p>\
         <p class=\"incident-long\">{}</p>\
         <div class=\"incident-comments\">{}</div>\
         <div class=\"incident-meta\">Created: {} | Updated: {}</div>\
         <div class=\"incident-actions\">\
         <button id=\"update-status-btn\" data-id=\"{}\">Update Status</button>\
         <button id=\"add-comments-btn\" data-id=\"{}\">Add Comments</button>\
         </div>",
        severity_class(incident.priority),
        escape_html(&incident.incident_number),
        incident.priority.label(),
        escape_html(&incident.state_label()),
        escape_html(&incident.short_description),
        escape_html(&incident.long_description),
        escape_html(comments),
        escape_html(&created),
        escape_html(&updated),
        incident.id,
        incident.id
    );

    if !incident.recommended_automations.is_empty() {
        html.push_str("<h4>Recommended Automations</h4>");
        html.push_str(&super::automation_panel::render_rows(
            &incident.recommended_automations,
        ));
    }
    if !incident.recommended_dashboards.is_empty() {
        html.push_str("<h4>Recommended Dashboards</h4>");
        html.push_str(&super::dashboard_panel::render_rows(
            &incident.recommended_dashboards,
        ));
    }
    html
}

fn row_selector() -> String {
    format!("#{} .incident-item", INCIDENTS_LIST_ID)
}

pub fn refresh_list(incidents: &[Incident], selected: Option<u32>) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, INCIDENTS_LIST_ID, &render_list(incidents));
    dom_utils::bind_click_by_data_id(&document, &row_selector(), |data_id| {
        if let Ok(id) = data_id.parse() {
            dispatch_global_message(Message::SelectIncident(id));
        }
    });
    if let Some(id) = selected {
        highlight(id);
    }
}

pub fn refresh_summary(summary: &PrioritySummary) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, INCIDENT_SUMMARY_ID, &render_summary(summary));
}

pub fn highlight(id: u32) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::highlight_selected_row(&document, &row_selector(), &id.to_string());
}

pub fn refresh_detail(incident: &Incident) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, INCIDENT_DETAILS_ID, &render_detail(incident));

    let id = incident.id;
    dom_utils::bind_click(&document, "update-status-btn", move || {
        dispatch_global_message(Message::OpenStatusModal {
            incident_id: id,
            mode: StatusUpdateMode::SetState,
        });
    });
    dom_utils::bind_click(&document, "add-comments-btn", move || {
        dispatch_global_message(Message::OpenStatusModal {
            incident_id: id,
            mode: StatusUpdateMode::AddComments,
        });
    });

    // Recommended automations share the Run button contract of the main panel.
    let selector = format!("#{} .run-automation", INCIDENT_DETAILS_ID);
    dom_utils::bind_click_by_data_id(&document, &selector, |data_id| {
        if let Ok(id) = data_id.parse() {
            dispatch_global_message(Message::TriggerAutomation(id));
        }
    });
}

pub fn show_loading() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(
        &document,
        INCIDENTS_LIST_ID,
        &format!("<div class=\"{}\">Loading incidents...</div>", LOADING_STATE_CLASS),
    );
}

pub fn show_list_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(
        &document,
        INCIDENTS_LIST_ID,
        &format!("<div class=\"{}\">Failed to load incidents</div>", ERROR_STATE_CLASS),
    );
    dom_utils::set_panel_html(&document, INCIDENT_SUMMARY_ID, "");
}

pub fn show_detail_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(
        &document,
        INCIDENT_DETAILS_ID,
        &format!("<div class=\"{}\">Failed to load incident</div>", ERROR_STATE_CLASS),
    );
}

/// Transient one-line result shown under the detail view after an update
/// attempt, removed after a few seconds.
pub fn show_update_result(success: bool) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    let Some(panel) = dom_utils::by_id(&document, INCIDENT_DETAILS_ID) else {
        return;
    };
    let (class, text) = if success {
        ("update-result success", "Incident updated")
    } else {
        ("update-result error", "Failed to update incident")
    };
    let _ = panel.insert_adjacent_html(
        "beforeend",
        &format!("<div class=\"{}\">{}</div>", class, text),
    );
    if let Ok(Some(line)) = panel.query_selector(".update-result:last-of-type") {
        Timeout::new(3_000, move || {
            line.remove();
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn incident(id: u32, priority: i64) -> Incident {
        serde_json::from_value(json!({
            "id": id,
            "incident_number": format!("INC{:07}", id),
            "short_description": "desc",
            "priority": priority,
            "state": 1
        }))
        .unwrap()
    }

    #[test]
    fn severity_classes_cover_every_priority() {
        assert_eq!(severity_class(Priority::Critical), "severity-critical");
        assert_eq!(severity_class(Priority::VeryLow), "severity-very-low");
        assert_eq!(severity_class(Priority::Unknown), "severity-unknown");
    }

    #[test]
    fn list_preserves_given_order() {
        let html = render_list(&[incident(2, 1), incident(1, 3)]);
        let first = html.find("data-id=\"2\"").unwrap();
        let second = html.find("data-id=\"1\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn summary_line_shows_buckets() {
        let summary = PrioritySummary {
            high: 2,
            medium: 1,
            low: 0,
            total: 3,
        };
        let html = render_summary(&summary);
        assert!(html.contains("High: 2"));
        assert!(html.contains("Medium: 1"));
        assert!(html.contains("Total: 3"));
    }

    #[test]
    fn detail_includes_action_buttons_and_recommendations() {
        let mut inc = incident(5, 2);
        inc.recommended_automations = vec![crate::models::Automation {
            id: 8,
            name: "Restart service".into(),
            description: String::new(),
        }];
        let html = render_detail(&inc);
        assert!(html.contains("update-status-btn"));
        assert!(html.contains("add-comments-btn"));
        assert!(html.contains("Recommended Automations"));
        assert!(html.contains("data-id=\"8\""));
    }

    #[test]
    fn detail_without_recommendations_omits_sections() {
        let html = render_detail(&incident(5, 2));
        assert!(!html.contains("Recommended Automations"));
        assert!(!html.contains("Recommended Dashboards"));
    }
}
