//! Text escaping for untrusted input.

/// Escape the five HTML-significant characters in `input`.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their named character
/// references. The input is scanned exactly once, so an ampersand
/// introduced by a replacement is never escaped again.
///
/// Nothing in the markup pipeline escapes automatically; callers decide
/// where untrusted text enters a template and escape it there.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_script_tag() {
        let malicious = "<script>alert('x')</script>";

        assert_eq!(
            escape_html(malicious),
            "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_all_five_characters() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
    }

    #[test]
    fn test_escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("hello world"), "hello world");
    }

    #[test]
    fn test_escape_html_does_not_double_escape() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_html_empty() {
        assert_eq!(escape_html(""), "");
    }
}
