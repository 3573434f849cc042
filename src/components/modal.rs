//! Shared modal helper. All modals sit on one overlay element; opening a
//! modal shows the overlay, closing it hides both.

use web_sys::Document;

use crate::constants::MODAL_OVERLAY_ID;
use crate::dom_utils;

pub fn open(document: &Document, id: &str) {
    if let Some(overlay) = dom_utils::by_id(document, MODAL_OVERLAY_ID) {
        dom_utils::show(&overlay);
    }
    if let Some(modal) = dom_utils::by_id(document, id) {
        dom_utils::show(&modal);
    }
}

pub fn close(document: &Document, id: &str) {
    if let Some(modal) = dom_utils::by_id(document, id) {
        dom_utils::hide(&modal);
    }
    if let Some(overlay) = dom_utils::by_id(document, MODAL_OVERLAY_ID) {
        dom_utils::hide(&overlay);
    }
}
