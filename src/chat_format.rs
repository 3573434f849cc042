//! Markdown-ish substitution applied to message bodies before they are handed
//! to the external renderer: fenced code blocks, inline code, line breaks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FENCED_CODE: Regex = Regex::new(r"```([^`]+)```").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
}

/// CSS class for a message bubble by role; anything unexpected falls back to
/// the system style so it is at least visible.
pub fn role_class(role: &str) -> &'static str {
    match role {
        "user" => "user",
        "assistant" => "assistant",
        _ => "system",
    }
}

/// Escape text destined for an `inner_html` write.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Substitute code fences, inline code and newlines with their HTML
/// counterparts. The result still passes through the external markdown
/// renderer in the browser; this pre-pass matches what the backend's own
/// clients expect for fenced content. Input is escaped first so only the
/// substituted tags survive as markup.
pub fn format_message_content(content: &str) -> String {
    let escaped = escape_html(content);
    let formatted = FENCED_CODE.replace_all(&escaped, "<pre><code>$1</code></pre>");
    let formatted = INLINE_CODE.replace_all(&formatted, "<code>$1</code>");
    formatted.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_code_becomes_pre_block() {
        assert_eq!(
            format_message_content("```ls -la```"),
            "<pre><code>ls -la</code></pre>"
        );
    }

    #[test]
    fn inline_code_becomes_code_span() {
        assert_eq!(
            format_message_content("run `kubectl get pods` now"),
            "run <code>kubectl get pods</code> now"
        );
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(format_message_content("a\nb"), "a<br>b");
    }

    #[test]
    fn fences_are_consumed_before_inline_code() {
        assert_eq!(
            format_message_content("```x``` and `y`"),
            "<pre><code>x</code></pre> and <code>y</code>"
        );
    }

    #[test]
    fn markup_in_content_is_escaped() {
        assert_eq!(
            format_message_content("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(
            format_message_content("a < b & `c > d`"),
            "a &lt; b &amp; <code>c &gt; d</code>"
        );
    }

    #[test]
    fn role_classes() {
        assert_eq!(role_class("user"), "user");
        assert_eq!(role_class("assistant"), "assistant");
        assert_eq!(role_class("system"), "system");
        assert_eq!(role_class("tool"), "system");
    }
}
