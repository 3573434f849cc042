//! Dashboards panel: external links opened in a new tab.

use crate::chat_format::escape_html;
use crate::constants::{DASHBOARDS_LIST_ID, EMPTY_STATE_CLASS, ERROR_STATE_CLASS};
use crate::dom_utils;
use crate::models::Dashboard;

pub fn render_rows(dashboards: &[Dashboard]) -> String {
    let mut html = String::new();
    for dash in dashboards {
        html.push_str(&format!(
            "<div class=\"dashboard-item\">\
             <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\
             </div>",
            escape_html(&dash.link),
            escape_html(&dash.name)
        ));
    }
    html
}

pub fn render_list(dashboards: &[Dashboard]) -> String {
    if dashboards.is_empty() {
        return format!(
            "<div class=\"{}\">No dashboards available</div>",
            EMPTY_STATE_CLASS
        );
    }
    render_rows(dashboards)
}

pub fn refresh(dashboards: &[Dashboard]) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, DASHBOARDS_LIST_ID, &render_list(dashboards));
}

pub fn show_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(
        &document,
        DASHBOARDS_LIST_ID,
        &format!("<div class=\"{}\">Failed to load dashboards</div>", ERROR_STATE_CLASS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_open_in_new_tab() {
        let html = render_rows(&[Dashboard {
            name: "Network Health".into(),
            link: "https://grafana.example.com/d/net".into(),
        }]);
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("Network Health"));
    }

    #[test]
    fn empty_list_marker() {
        assert!(render_list(&[]).contains(EMPTY_STATE_CLASS));
    }
}
