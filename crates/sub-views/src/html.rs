//! HTML escaping
//!
//! All user-controlled values (ids, names, emails, invitation lists) are
//! escaped before interpolation into markup or attribute values.

/// Escape a string for use in HTML text or a double-quoted attribute value.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_plain_text_through() {
        assert_eq!(escape("smithj"), "smithj");
    }

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escapes_ampersand_first() {
        assert_eq!(escape("a&lt;"), "a&amp;lt;");
    }

    #[test]
    fn test_escapes_single_quote() {
        assert_eq!(escape("o'brien"), "o&#39;brien");
    }
}
