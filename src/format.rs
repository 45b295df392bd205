use std::fmt::Write;

/// Appends `prefix` followed by `value` printed with at most `dp` fractional
/// digits. Trailing zeros are dropped, and the decimal point with them when
/// nothing is left after it.
pub fn push_float(out: &mut String, prefix: &str, dp: usize, value: f32) {
    out.push_str(prefix);
    let start = out.len();
    // Writing into a String cannot fail.
    let _ = write!(out, "{value:.dp$}");
    if out[start..].contains('.') {
        let trimmed = out[start..].trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(start + trimmed);
    }
}

pub fn fmt_float(dp: usize, value: f32) -> String {
    let mut out = String::new();
    push_float(&mut out, "", dp, value);
    out
}

/// Writes ` name="value"` for a float attribute.
pub fn push_float_attr(out: &mut String, name: &str, dp: usize, value: f32) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_float(out, "", dp, value);
    out.push('"');
}
