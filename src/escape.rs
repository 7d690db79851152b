//! HTML escaping for interpolated record fields.
//!
//! `village.json` is community-supplied, so every field that lands inside
//! card markup goes through [`html_text`] first. Escapes the five characters
//! with meaning in text and attribute positions.

/// Escape a string for inclusion in HTML text or a quoted attribute.
pub fn html_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(html_text("Plant a tree"), "Plant a tree");
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            html_text(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(html_text("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
    }

    #[test]
    fn handles_empty_string() {
        assert_eq!(html_text(""), "");
    }
}
