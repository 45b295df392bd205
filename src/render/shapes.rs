use super::{Colors, push_opacity_close};
use crate::color::ResolvedColor;
use crate::escape::push_escaped;
use crate::font::{NORMAL_FONT_FAMILY, UPCEAN_FONT_FAMILY};
use crate::format::{push_float, push_float_attr};
use crate::scene::{Circle, TextLabel};

pub fn push_circles(out: &mut String, circles: &[Circle], colors: &Colors) {
    let mut previous_diameter = 0.0f32;
    let mut radius = 0.0f32;
    for circle in circles {
        if previous_diameter != circle.diameter {
            previous_diameter = circle.diameter;
            radius = 0.5 * previous_diameter;
        }
        let ring = circle.width != 0.0;
        out.push_str("  <circle");
        push_float_attr(out, "cx", 2, circle.x);
        push_float_attr(out, "cy", 2, circle.y);
        push_float_attr(out, "r", if ring { 3 } else { 2 }, radius);

        // The legacy background branch takes the background opacity on top of
        // the group's foreground fill; kept as-is for byte compatibility.
        let paint = if circle.use_background {
            &colors.bg
        } else {
            &colors.fg
        };
        if ring {
            push_ring_stroke(out, paint, circle.width);
        } else if circle.use_background {
            out.push_str(" fill=\"#");
            out.push_str(&paint.hex);
            out.push('"');
        }
        push_opacity_close(out, paint, true);
    }
}

fn push_ring_stroke(out: &mut String, paint: &ResolvedColor, width: f32) {
    out.push_str(" stroke=\"#");
    out.push_str(&paint.hex);
    out.push('"');
    push_float_attr(out, "stroke-width", 3, width);
    out.push_str(" fill=\"none\"");
}

/// Text styling shared by every label of one symbol.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub upcean: bool,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(upcean: bool, bold: bool) -> Self {
        Self {
            upcean,
            bold: bold && !upcean,
        }
    }

    fn font_family(&self) -> String {
        if self.upcean {
            format!("{UPCEAN_FONT_FAMILY}, monospace")
        } else {
            format!("{NORMAL_FONT_FAMILY}, Arial, sans-serif")
        }
    }
}

pub fn push_text_labels(out: &mut String, labels: &[TextLabel], style: TextStyle, colors: &Colors) {
    let font_family = style.font_family();
    for label in labels {
        out.push_str("  <text");
        push_float_attr(out, "x", 2, label.x);
        push_float_attr(out, "y", 2, label.y);
        out.push_str(&format!(" text-anchor=\"{}\"", label.halign.anchor()));
        out.push_str(&format!(" font-family=\"{font_family}\""));
        push_float_attr(out, "font-size", 1, label.font_size);
        if style.bold {
            out.push_str(" font-weight=\"bold\"");
        }
        if label.rotation != 0 {
            out.push_str(&format!(" transform=\"rotate({}", label.rotation));
            push_float(out, ",", 2, label.x);
            push_float(out, ",", 2, label.y);
            out.push_str(")\"");
        }
        push_opacity_close(out, &colors.fg, false);
        out.reserve(label.text.len() * 6 + 5);
        out.push_str("   ");
        push_escaped(out, &label.text);
        out.push('\n');
        out.push_str("  </text>\n");
    }
}
