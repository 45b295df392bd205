use serde::Deserialize;
use wasm_bindgen::prelude::*;
use zint_svg::{FontAssets, Rgba, Scene, render_svg};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SvgRenderOptions {
    foreground: Option<Rgba>,
    background: Option<Rgba>,
    embed_font: Option<bool>,
    bold: Option<bool>,
}

fn apply_options(scene: &mut Scene, options: SvgRenderOptions) {
    if let Some(fg) = options.foreground {
        scene.foreground = fg;
    }
    if let Some(bg) = options.background {
        scene.background = bg;
    }
    if let Some(embed_font) = options.embed_font {
        scene.embed_font = embed_font;
    }
    if let Some(bold) = options.bold {
        scene.bold = bold;
    }
}

fn render_scene(
    scene_json: &str,
    options_json: Option<&str>,
    fonts: &FontAssets,
) -> Result<String, String> {
    let mut scene: Scene = serde_json::from_str(scene_json).map_err(|error| error.to_string())?;
    if let Some(raw_options) = options_json {
        let options = serde_json::from_str::<SvgRenderOptions>(raw_options)
            .map_err(|error| error.to_string())?;
        apply_options(&mut scene, options);
    }
    render_svg(&scene, fonts).map_err(|error| error.to_string())
}

/// Serializes a JSON scene; fonts are embedded only when both blobs are passed.
#[wasm_bindgen]
pub fn render_scene_svg(
    scene_json: &str,
    options_json: Option<String>,
    normal_font: Option<Vec<u8>>,
    upcean_font: Option<Vec<u8>>,
) -> Result<String, JsValue> {
    let fonts = match (normal_font, upcean_font) {
        (Some(normal), Some(upcean)) => FontAssets::new(&normal, &upcean),
        _ => FontAssets::none(),
    };
    render_scene(scene_json, options_json.as_deref(), &fonts).map_err(|error| JsValue::from_str(&error))
}
