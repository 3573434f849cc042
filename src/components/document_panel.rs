//! Uploaded-documents panel and its upload modal.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;

use crate::chat_format::escape_html;
use crate::constants::{
    DOCUMENTS_LIST_ID, EMPTY_STATE_CLASS, ERROR_STATE_CLASS, UPLOAD_FORM_ID, UPLOAD_MODAL_ID,
    UPLOAD_STATUS_ID,
};
use crate::dom_utils;
use crate::interop;
use crate::messages::Message;
use crate::models::Document;
use crate::state::dispatch_global_message;

/// Feather icon name for a file extension.
pub fn file_icon(file_type: &str) -> &'static str {
    match file_type.to_ascii_lowercase().as_str() {
        "pdf" | "doc" | "docx" => "file-text",
        "xls" | "xlsx" | "csv" => "grid",
        "ppt" | "pptx" => "monitor",
        "png" | "jpg" | "jpeg" | "gif" | "svg" => "image",
        _ => "file",
    }
}

pub fn render_list(documents: &[Document]) -> String {
    if documents.is_empty() {
        return format!(
            "<div class=\"{}\">No documents uploaded</div>",
            EMPTY_STATE_CLASS
        );
    }
    let mut html = String::new();
    for doc in documents {
        html.push_str(&format!(
            "<div class=\"document-item\">\
             <i data-feather=\"{}\"></i>\
             <span class=\"document-title\">{}</span>\
             <button class=\"document-delete\" data-id=\"{}\" title=\"Delete\">\
             <i data-feather=\"trash-2\"></i></button>\
             </div>",
            file_icon(&doc.file_type),
            escape_html(&doc.title),
            doc.id
        ));
    }
    html
}

pub fn render_error() -> String {
    format!(
        "<div class=\"{}\">Failed to load documents</div>",
        ERROR_STATE_CLASS
    )
}

pub fn refresh(documents: &[Document]) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, DOCUMENTS_LIST_ID, &render_list(documents));
    let selector = format!("#{} .document-delete", DOCUMENTS_LIST_ID);
    dom_utils::bind_click_by_data_id(&document, &selector, |data_id| {
        if let Ok(id) = data_id.parse() {
            if dom_utils::confirm("Delete this document?") {
                dispatch_global_message(Message::DeleteDocument(id));
            }
        }
    });
    interop::replace_icons();
}

pub fn show_error() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_panel_html(&document, DOCUMENTS_LIST_ID, &render_error());
}

pub fn open_upload_modal() {
    let Some(document) = dom_utils::document() else {
        return;
    };
    set_upload_status("");
    super::modal::open(&document, UPLOAD_MODAL_ID);
}

pub fn set_upload_status(text: &str) {
    let Some(document) = dom_utils::document() else {
        return;
    };
    dom_utils::set_text(&document, UPLOAD_STATUS_ID, text);
}

/// Leave the success status visible briefly, then close and reset the form.
pub fn close_upload_modal_soon() {
    Timeout::new(1_500, || {
        let Some(document) = dom_utils::document() else {
            return;
        };
        if let Some(form) = dom_utils::by_id(&document, UPLOAD_FORM_ID)
            .and_then(|e| e.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            form.reset();
        }
        dom_utils::set_text(&document, UPLOAD_STATUS_ID, "");
        super::modal::close(&document, UPLOAD_MODAL_ID);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_by_extension() {
        assert_eq!(file_icon("pdf"), "file-text");
        assert_eq!(file_icon("DOCX"), "file-text");
        assert_eq!(file_icon("csv"), "grid");
        assert_eq!(file_icon("pptx"), "monitor");
        assert_eq!(file_icon("PNG"), "image");
        assert_eq!(file_icon("txt"), "file");
        assert_eq!(file_icon(""), "file");
    }

    #[test]
    fn list_rows_carry_delete_buttons() {
        let docs = vec![Document {
            id: 12,
            title: "runbook.pdf".into(),
            file_type: "pdf".into(),
        }];
        let html = render_list(&docs);
        assert!(html.contains("data-id=\"12\""));
        assert!(html.contains("data-feather=\"file-text\""));
    }

    #[test]
    fn empty_and_error_markers() {
        assert!(render_list(&[]).contains(EMPTY_STATE_CLASS));
        assert!(render_error().contains(ERROR_STATE_CLASS));
    }
}
