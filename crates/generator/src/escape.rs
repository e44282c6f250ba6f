/// HTML-escape a string for text or attribute positions.
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make serialized JSON safe to embed inside a `<script>` element.
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
        assert_eq!(html_escape("Go Iconic Way\u{2122}"), "Go Iconic Way\u{2122}");
    }

    #[test]
    fn test_script_safe_json() {
        assert_eq!(
            script_safe_json(r#"{"a":"</script><script>"}"#),
            r#"{"a":"<\/script><script>"}"#
        );
    }
}
