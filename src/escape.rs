/// Longest replacement emitted by [`escape_html`] (`&quot;` / `&apos;`).
const MAX_ENTITY_LEN: usize = 6;

/// Replaces the five XML-special characters with their named entities.
///
/// This is a one-way transform: escaping already-escaped text escapes the
/// ampersands again.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * MAX_ENTITY_LEN);
    push_escaped(&mut out, text);
    out
}

pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '>' => out.push_str("&gt;"),
            '<' => out.push_str("&lt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}
