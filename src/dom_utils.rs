//! Thin helper layer for the repetitive DOM operations the panels share:
//! show/hide toggles, element lookup + casts, input access, list re-binding.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Make a fixed region visible (modals, overlays).
pub fn show(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", "block");
    }
}

pub fn hide(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", "none");
    }
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// Replace a panel's entire content with freshly rendered markup.
pub fn set_panel_html(document: &Document, id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn input_value(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|i| i.value())
}

pub fn set_input_value(document: &Document, id: &str, value: &str) {
    if let Some(input) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}

pub fn textarea_value(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlTextAreaElement>()
        .ok()
        .map(|t| t.value())
}

pub fn set_textarea_value(document: &Document, id: &str, value: &str) {
    if let Some(area) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlTextAreaElement>().ok())
    {
        area.set_value(value);
    }
}

pub fn select_value(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|s| s.value())
}

pub fn set_select_value(document: &Document, id: &str, value: &str) {
    if let Some(select) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    {
        select.set_value(value);
    }
}

/// Attach a submit handler to a form by id. The default submit navigation is
/// always suppressed.
pub fn bind_submit<F>(document: &Document, id: &str, handler: F)
where
    F: Fn() + 'static,
{
    if let Some(form) = document.get_element_by_id(id) {
        let cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            handler();
        }) as Box<dyn FnMut(_)>);
        let _ = form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

/// Attach a click closure to every element matching `selector`, passing the
/// element's `data-id` attribute. Used after each list re-render since
/// `inner_html` writes drop previous listeners.
pub fn bind_click_by_data_id<F>(document: &Document, selector: &str, handler: F)
where
    F: Fn(String) + Clone + 'static,
{
    let nodes = match document.query_selector_all(selector) {
        Ok(n) => n,
        Err(_) => return,
    };
    for idx in 0..nodes.length() {
        let Some(node) = nodes.get(idx) else { continue };
        let Ok(el) = node.dyn_into::<Element>() else {
            continue;
        };
        let Some(data_id) = el.get_attribute("data-id") else {
            continue;
        };
        let handler = handler.clone();
        let cb = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            event.stop_propagation();
            handler(data_id.clone());
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

/// Attach a plain click closure to an element by id, if present.
pub fn bind_click<F>(document: &Document, id: &str, handler: F)
where
    F: Fn() + 'static,
{
    if let Some(el) = document.get_element_by_id(id) {
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            handler();
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

/// Toggle the `active` highlight so only the row whose `data-id` matches
/// `selected` carries it.
pub fn highlight_selected_row(document: &Document, selector: &str, selected: &str) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for idx in 0..nodes.length() {
            let Some(node) = nodes.get(idx) else { continue };
            let Ok(el) = node.dyn_into::<Element>() else {
                continue;
            };
            if el.get_attribute("data-id").as_deref() == Some(selected) {
                let _ = el.class_list().add_1("active");
            } else {
                let _ = el.class_list().remove_1("active");
            }
        }
    }
}

/// Scroll a container to its bottom (chat threads).
pub fn scroll_to_bottom(document: &Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_scroll_top(el.scroll_height());
    }
}

/// Synchronous confirmation prompt; `false` aborts the caller with no
/// network call.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Browser prompt for a single line of text; `None` on cancel.
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok().flatten()
}
