//! Bindings to the third-party JS libraries loaded by the host page: the
//! markdown renderer and the icon-glyph substitution library. Both are
//! treated as deterministic text -> markup functions.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = marked, js_name = parse)]
    fn marked_parse(src: &str) -> Result<String, JsValue>;

    #[wasm_bindgen(catch, js_namespace = feather, js_name = replace)]
    fn feather_replace() -> Result<(), JsValue>;
}

/// Render markdown through the page's `marked` library. Falls back to the
/// input when the library is missing so messages stay readable.
pub fn render_markdown(src: &str) -> String {
    marked_parse(src).unwrap_or_else(|_| src.to_string())
}

/// Swap `data-feather` placeholders for inline SVG glyphs. Must be re-run
/// after every `inner_html` write that emits icon placeholders.
pub fn replace_icons() {
    let _ = feather_replace();
}
