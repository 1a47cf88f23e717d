//! Restrictive answer formatting.
//!
//! Only `**bold**`, `*italic*` and line breaks become markup. Everything is
//! HTML-escaped first, so no markup from the answer text can reach the page.

use regex::Regex;
use std::sync::OnceLock;

const STRONG_OPEN: &str = r#"<strong class="answer-strong">"#;

/// Escape the five HTML-sensitive characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| {
        Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").expect("valid bold pattern")
    })
}

fn italic_pattern() -> &'static Regex {
    static ITALIC: OnceLock<Regex> = OnceLock::new();
    ITALIC.get_or_init(|| {
        Regex::new(r"\*([^\n\r\x{2028}\x{2029}]*?)\*").expect("valid italic pattern")
    })
}

/// Answer text to HTML: escape, then bold, then italic, then `<br />`.
///
/// Emphasis does not span line terminators (`\n`, `\r`, U+2028, U+2029).
pub fn to_html(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = bold_pattern().replace_all(&escaped, format!("{STRONG_OPEN}${{1}}</strong>"));
    let italic = italic_pattern().replace_all(&bold, "<em>${1}</em>");
    italic.replace('\n', "<br />")
}
