use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zint_svg::color::Rgba;
use zint_svg::font::FontAssets;
use zint_svg::render::render_svg;
use zint_svg::scene::{HAlign, RectColor, Scene, VectorModel};
use zint_svg::symbology::Symbology;

/// Linear symbol with `bars` alternating-width bars and a text line.
fn linear_scene(bars: usize) -> Scene {
    let mut vector = VectorModel::new(bars as f32 * 3.0 + 20.0, 60.0);
    for i in 0..bars {
        let width = if i % 3 == 0 { 2.0 } else { 1.0 };
        vector.push_rect(10.0 + i as f32 * 3.0, 0.0, width, 50.0, RectColor::Foreground);
    }
    vector.push_text(vector.width / 2.0, 58.5, 8.0, HAlign::Center, "0123456789<&>");
    Scene::new(Symbology::Code128).with_vector(vector)
}

/// Square matrix of `side * side` palette-coloured modules.
fn ultra_scene(side: usize) -> Scene {
    let mut vector = VectorModel::new(side as f32, side as f32);
    for row in 0..side {
        for col in 0..side {
            let code = ((row * 7 + col * 3) % 8 + 1) as u8;
            // Even columns share cyan so runs mix short and long.
            let code = if col % 2 == 1 { code } else { 1 };
            vector.push_rect(col as f32, row as f32, 1.0, 1.0, RectColor::Palette(code));
        }
    }
    let mut scene = Scene::new(Symbology::Ultra).with_vector(vector);
    scene.foreground = Rgba::from_packed(0x000000c0);
    scene
}

fn maxicode_scene() -> Scene {
    let mut vector = VectorModel::new(60.0, 57.7);
    for row in 0..33 {
        for col in 0..30 {
            if (row * 31 + col * 17) % 3 != 0 {
                let x = 1.0 + col as f32 * 1.9 + if row % 2 == 1 { 0.95 } else { 0.0 };
                vector.push_hexagon(x, 1.0 + row as f32 * 1.65, 1.73, 0);
            }
        }
    }
    for (idx, diameter) in [4.0f32, 9.0, 14.0].into_iter().enumerate() {
        vector.push_circle(30.0, 28.85, diameter, if idx == 0 { 0.0 } else { 0.865 });
    }
    Scene::new(Symbology::MaxiCode).with_vector(vector)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let fonts = FontAssets::new(&[0x77u8; 24 * 1024], &[0x4fu8; 12 * 1024]);
    let cases = [
        ("linear_small", linear_scene(30)),
        ("linear_large", linear_scene(600)),
        ("ultra_medium", ultra_scene(40)),
        ("ultra_large", ultra_scene(160)),
        ("maxicode", maxicode_scene()),
    ];
    for (name, scene) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), scene, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data), &fonts).expect("render failed");
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_embedded_font(c: &mut Criterion) {
    let mut group = c.benchmark_group("embedded_font");
    let fonts = FontAssets::new(&[0x77u8; 24 * 1024], &[0x4fu8; 12 * 1024]);
    let mut scene = linear_scene(95);
    scene.embed_font = true;
    group.bench_function("linear_with_font", |b| {
        b.iter(|| {
            let svg = render_svg(black_box(&scene), &fonts).expect("render failed");
            black_box(svg.len());
        });
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_render, bench_embedded_font
);
criterion_main!(benches);
