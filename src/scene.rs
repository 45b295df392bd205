use crate::color::Rgba;
use crate::symbology::Symbology;
use serde::{Deserialize, Serialize};

/// A barcode symbol handed over by the layout stage, ready to serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scene {
    pub symbology: Symbology,
    pub foreground: Rgba,
    pub background: Rgba,
    pub embed_font: bool,
    pub bold: bool,
    /// `None` until the layout stage has produced geometry.
    pub vector: Option<VectorModel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorModel {
    pub width: f32,
    pub height: f32,
    pub rectangles: Vec<Rect>,
    pub hexagons: Vec<Hexagon>,
    pub circles: Vec<Circle>,
    pub strings: Vec<TextLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RectColor {
    /// Inherit the group's foreground fill.
    #[default]
    Foreground,
    /// Ultracode palette code, 1-8.
    Palette(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub color: RectColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hexagon {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    #[serde(default)]
    pub rotation: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    /// Stroke width; 0 draws a filled disc.
    #[serde(default)]
    pub width: f32,
    /// Legacy: paint in the background color instead of the foreground.
    #[serde(default)]
    pub use_background: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    #[default]
    Center,
    Start,
    End,
}

impl HAlign {
    pub fn anchor(self) -> &'static str {
        match self {
            HAlign::End => "end",
            HAlign::Start => "start",
            HAlign::Center => "middle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLabel {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub halign: HAlign,
    pub font_size: f32,
    #[serde(default)]
    pub rotation: i32,
    pub text: String,
}

impl Scene {
    pub fn new(symbology: Symbology) -> Self {
        Self {
            symbology,
            foreground: Rgba::BLACK,
            background: Rgba::WHITE,
            embed_font: false,
            bold: false,
            vector: None,
        }
    }

    pub fn with_vector(mut self, vector: VectorModel) -> Self {
        self.vector = Some(vector);
        self
    }

    pub fn is_upcean(&self) -> bool {
        self.symbology.is_upcean()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Symbology::default())
    }
}

impl VectorModel {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn push_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: RectColor) {
        self.rectangles.push(Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn push_hexagon(&mut self, x: f32, y: f32, diameter: f32, rotation: i32) {
        self.hexagons.push(Hexagon {
            x,
            y,
            diameter,
            rotation,
        });
    }

    pub fn push_circle(&mut self, x: f32, y: f32, diameter: f32, width: f32) {
        self.circles.push(Circle {
            x,
            y,
            diameter,
            width,
            use_background: false,
        });
    }

    pub fn push_text(&mut self, x: f32, y: f32, font_size: f32, halign: HAlign, text: &str) {
        self.strings.push(TextLabel {
            x,
            y,
            halign,
            font_size,
            rotation: 0,
            text: text.to_string(),
        });
    }

    pub fn element_count(&self) -> usize {
        self.rectangles.len() + self.hexagons.len() + self.circles.len() + self.strings.len()
    }
}
