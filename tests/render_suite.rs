use std::path::Path;

use zint_svg::{FontAssets, HAlign, RectColor, RenderError, Rgba, Scene, Symbology, VectorModel, render_svg};

fn load_scene(path: &Path) -> Scene {
    let input = std::fs::read_to_string(path).expect("fixture read failed");
    match serde_json::from_str(&input) {
        Ok(scene) => scene,
        Err(_) => json5::from_str(&input).expect("fixture parse failed"),
    }
}

fn fixtures_root() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn render_matches_golden_files() {
    let root = fixtures_root();
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        ("ean_bars.json", "ean_bars.svg"),
        ("ultra_palette.json5", "ultra_palette.svg"),
        ("maxicode_hex.json", "maxicode_hex.svg"),
    ];

    for (scene_file, golden_file) in candidates {
        let scene = load_scene(&root.join(scene_file));
        let expected = std::fs::read_to_string(root.join(golden_file)).expect("golden read failed");
        let svg = render_svg(&scene, &FontAssets::none()).expect("render failed");
        assert_eq!(svg, expected, "{scene_file}: output differs from {golden_file}");
    }
}

#[test]
fn black_on_white_bar_end_to_end() {
    let mut vector = VectorModel::new(100.0, 50.0);
    vector.push_rect(0.0, 0.0, 100.0, 50.0, RectColor::Palette(7));
    let scene = Scene::new(Symbology::Code128).with_vector(vector);

    let svg = render_svg(&scene, &FontAssets::none()).unwrap();
    assert_eq!(svg.matches("<rect").count(), 1);
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("fill=\"#000000\"/>"));
    assert!(!svg.contains("opacity"));
}

#[test]
fn missing_geometry_produces_no_output() {
    let scene = Scene::new(Symbology::DataMatrix);
    let result = render_svg(&scene, &FontAssets::none());
    assert_eq!(result, Err(RenderError::MissingGeometry));
}

#[test]
fn path_count_follows_color_runs() {
    let mut vector = VectorModel::new(10.0, 10.0);
    for (i, code) in [1u8, 1, 2].into_iter().enumerate() {
        vector.push_rect(i as f32, 0.0, 1.0, 1.0, RectColor::Palette(code));
    }
    let scene = Scene::new(Symbology::Ultra).with_vector(vector);
    let svg = render_svg(&scene, &FontAssets::none()).unwrap();
    assert_eq!(svg.matches("<path").count(), 2);

    let mut vector = VectorModel::new(10.0, 10.0);
    for i in 0..5 {
        vector.push_rect(i as f32, 0.0, 1.0, 1.0, RectColor::Palette(1));
    }
    let scene = Scene::new(Symbology::Ultra).with_vector(vector);
    let svg = render_svg(&scene, &FontAssets::none()).unwrap();
    assert_eq!(svg.matches("<path").count(), 1);
    assert_eq!(svg.matches("h-1Z").count(), 5);
}

#[test]
fn embedded_font_precedes_group() {
    let mut vector = VectorModel::new(40.0, 20.0);
    vector.push_text(20.0, 19.0, 6.0, HAlign::Center, "978");
    let mut scene = Scene::new(Symbology::ISBNX).with_vector(vector);
    scene.embed_font = true;
    scene.bold = true;

    let fonts = FontAssets::new(&[0u8, 1, 2], &[0xffu8, 0xfe]);
    let svg = render_svg(&scene, &fonts).unwrap();
    let style = svg.find("<style>@font-face {font-family:\"OCRB\"; src:url(data:font/woff2;base64,//4=);}</style>").unwrap();
    let group = svg.find("<g id=\"barcode\"").unwrap();
    assert!(style < group);
    assert!(!svg.contains("font-weight"));
}

#[test]
fn fully_transparent_colors_are_valid() {
    let mut vector = VectorModel::new(3.0, 3.0);
    vector.push_circle(1.5, 1.5, 1.0, 0.0);
    let mut scene = Scene::new(Symbology::DotCode).with_vector(vector);
    scene.foreground = Rgba::from_packed(0x00000000);
    scene.background = Rgba::from_packed(0xffffff00);
    let svg = render_svg(&scene, &FontAssets::none()).unwrap();
    assert!(!svg.contains("<rect"));
    assert!(svg.contains("  <circle cx=\"1.5\" cy=\"1.5\" r=\"0.5\" opacity=\"0\"/>\n"));
}

#[test]
fn rendering_is_deterministic() {
    let scene = load_scene(&fixtures_root().join("maxicode_hex.json"));
    let first = render_svg(&scene, &FontAssets::none()).unwrap();
    let second = render_svg(&scene, &FontAssets::none()).unwrap();
    assert_eq!(first, second);
}
