mod paths;
mod shapes;

pub use paths::{push_hexagon_path, push_rect_paths};
pub use shapes::{TextStyle, push_circles, push_text_labels};

use crate::color::{ResolvedColor, Rgba};
use crate::error::RenderError;
use crate::font::FontAssets;
use crate::format::push_float_attr;
use crate::scene::{Scene, VectorModel};
use anyhow::Result;
use std::path::Path;

const XML_HEADER: &str = "<?xml version=\"1.0\" standalone=\"no\"?>\n\
<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
const DESCRIPTION: &str = " <desc>Zint Generated Symbol</desc>\n";
const FOOTER: &str = " </g>\n</svg>\n";

/// Foreground and background resolved once per document.
#[derive(Debug, Clone)]
pub struct Colors {
    pub fg: ResolvedColor,
    pub bg: ResolvedColor,
}

impl Colors {
    pub fn new(foreground: Rgba, background: Rgba) -> Self {
        Self {
            fg: foreground.into(),
            bg: background.into(),
        }
    }
}

/// Writes ` opacity="…"` for translucent colors, then ends the tag.
pub(crate) fn push_opacity_close(out: &mut String, color: &ResolvedColor, self_close: bool) {
    if let Some(opacity) = color.opacity {
        push_float_attr(out, "opacity", 3, opacity);
    }
    if self_close {
        out.push('/');
    }
    out.push_str(">\n");
}

/// Serializes a scene into an SVG 1.1 document.
///
/// Fails only when the scene carries no vector geometry; nothing is
/// allocated in that case.
pub fn render_svg(scene: &Scene, fonts: &FontAssets) -> Result<String, RenderError> {
    let Some(vector) = scene.vector.as_ref() else {
        log::debug!("refusing to serialize {:?}: no vector geometry", scene.symbology);
        return Err(RenderError::MissingGeometry);
    };

    let colors = Colors::new(scene.foreground, scene.background);
    let upcean = scene.is_upcean();
    let width = canvas_extent(vector.width);
    let height = canvas_extent(vector.height);

    let mut svg = String::with_capacity(estimate_capacity(vector));
    svg.push_str(XML_HEADER);
    svg.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    ));
    svg.push_str(DESCRIPTION);

    if scene.embed_font && !vector.strings.is_empty() {
        match fonts.face(upcean) {
            Some((family, data)) => svg.push_str(&format!(
                " <style>@font-face {{font-family:\"{family}\"; src:url(data:font/woff2;base64,{data});}}</style>\n"
            )),
            None => log::warn!(
                "font embedding requested for {:?} but no font blob is loaded; skipping",
                scene.symbology
            ),
        }
    }

    svg.push_str(&format!(" <g id=\"barcode\" fill=\"#{}\">\n", colors.fg.hex));

    if colors.bg.alpha != 0 {
        svg.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#{}\"",
            colors.bg.hex
        ));
        push_opacity_close(&mut svg, &colors.bg, true);
    }

    let rect_paths = push_rect_paths(&mut svg, &vector.rectangles, &colors);
    push_hexagon_path(&mut svg, &vector.hexagons, &colors);
    push_circles(&mut svg, &vector.circles, &colors);
    push_text_labels(
        &mut svg,
        &vector.strings,
        TextStyle::new(upcean, scene.bold),
        &colors,
    );

    svg.push_str(FOOTER);
    svg.shrink_to_fit();

    log::debug!(
        "serialized {:?}: {} rects in {} paths, {} hexagons, {} circles, {} strings, {} bytes",
        scene.symbology,
        vector.rectangles.len(),
        rect_paths,
        vector.hexagons.len(),
        vector.circles.len(),
        vector.strings.len(),
        svg.len()
    );
    Ok(svg)
}

/// Root dimensions are whole pixels, rounded up.
fn canvas_extent(value: f32) -> i32 {
    value.ceil() as i32
}

fn estimate_capacity(vector: &VectorModel) -> usize {
    let text: usize = vector.strings.iter().map(|s| s.text.len() * 6 + 160).sum();
    512 + vector.rectangles.len() * 40 + vector.hexagons.len() * 80 + vector.circles.len() * 100 + text
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}
