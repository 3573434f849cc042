pub mod api_client;

pub use api_client::ApiClient;

use wasm_bindgen::JsCast;

/// The backend is same-origin; endpoints are addressed by path.
pub(crate) fn api_url(path: &str) -> String {
    format!("/api/{}", path)
}

/// Read the CSRF token the backend sets in the `csrftoken` cookie. Mutating
/// requests echo it back in the `X-CSRFToken` header.
pub(crate) fn csrf_token() -> String {
    let cookie = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default();
    parse_csrf_cookie(&cookie)
}

pub(crate) fn parse_csrf_cookie(cookie: &str) -> String {
    cookie
        .split("; ")
        .find_map(|pair| pair.strip_prefix("csrftoken="))
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::parse_csrf_cookie;

    #[test]
    fn csrf_cookie_parsing() {
        assert_eq!(
            parse_csrf_cookie("sessionid=abc; csrftoken=tok123; theme=dark"),
            "tok123"
        );
        assert_eq!(parse_csrf_cookie("csrftoken=solo"), "solo");
        assert_eq!(parse_csrf_cookie("sessionid=abc"), "");
        assert_eq!(parse_csrf_cookie(""), "");
    }
}
