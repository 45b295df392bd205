use super::{Colors, push_opacity_close};
use crate::color::palette_hex;
use crate::format::push_float;
use crate::scene::{Hexagon, Rect, RectColor};

/// sqrt(3) / 4: half the flat-to-flat width of a hexagon per unit diameter.
#[allow(clippy::excessive_precision)]
const HALF_SQRT3_RADIUS_PER_DIAMETER: f32 = 0.433_012_701_892_219_323_38;

/// Emits one `<path>` per run of consecutive rectangles sharing a color.
pub fn push_rect_paths(out: &mut String, rects: &[Rect], colors: &Colors) -> usize {
    let Some(first) = rects.first() else {
        return 0;
    };
    let mut paths = 1;
    let mut current = first.color;
    out.push_str("  <path d=\"");
    for rect in rects {
        if rect.color != current {
            close_rect_path(out, current, colors);
            out.push_str("  <path d=\"");
            paths += 1;
        }
        current = rect.color;
        push_float(out, "M", 2, rect.x);
        push_float(out, " ", 2, rect.y);
        push_float(out, "h", 2, rect.width);
        push_float(out, "v", 2, rect.height);
        push_float(out, "h-", 2, rect.width);
        out.push('Z');
    }
    close_rect_path(out, current, colors);
    paths
}

fn close_rect_path(out: &mut String, color: RectColor, colors: &Colors) {
    out.push('"');
    if let RectColor::Palette(code) = color {
        out.push_str(" fill=\"#");
        out.push_str(palette_hex(code));
        out.push('"');
    }
    push_opacity_close(out, &colors.fg, true);
}

/// Emits every hexagon as a subpath of a single foreground `<path>`.
pub fn push_hexagon_path(out: &mut String, hexagons: &[Hexagon], colors: &Colors) {
    if hexagons.is_empty() {
        return;
    }
    let mut previous_diameter = 0.0f32;
    let (mut radius, mut half_radius, mut half_sqrt3_radius) = (0.0f32, 0.0f32, 0.0f32);
    out.push_str("  <path d=\"");
    for hex in hexagons {
        if previous_diameter != hex.diameter {
            previous_diameter = hex.diameter;
            radius = 0.5 * previous_diameter;
            half_radius = 0.25 * previous_diameter;
            half_sqrt3_radius = HALF_SQRT3_RADIUS_PER_DIAMETER * previous_diameter;
        }
        let (x, y) = (hex.x, hex.y);
        let vertices = if hex.rotation == 0 || hex.rotation == 180 {
            [
                (x, y + radius),
                (x + half_sqrt3_radius, y + half_radius),
                (x + half_sqrt3_radius, y - half_radius),
                (x, y - radius),
                (x - half_sqrt3_radius, y - half_radius),
                (x - half_sqrt3_radius, y + half_radius),
            ]
        } else {
            [
                (x - radius, y),
                (x - half_radius, y + half_sqrt3_radius),
                (x + half_radius, y + half_sqrt3_radius),
                (x + radius, y),
                (x + half_radius, y - half_sqrt3_radius),
                (x - half_radius, y - half_sqrt3_radius),
            ]
        };
        for (idx, (vx, vy)) in vertices.into_iter().enumerate() {
            push_float(out, if idx == 0 { "M" } else { "L" }, 2, vx);
            push_float(out, " ", 2, vy);
        }
        out.push('Z');
    }
    out.push('"');
    push_opacity_close(out, &colors.fg, true);
}
