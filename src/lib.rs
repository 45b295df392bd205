#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod font;
pub mod format;
pub mod render;
pub mod scene;
pub mod symbology;

#[cfg(feature = "cli")]
pub use cli::run;
pub use color::Rgba;
pub use error::RenderError;
pub use font::FontAssets;
pub use render::render_svg;
pub use scene::{Circle, HAlign, Hexagon, Rect, RectColor, Scene, TextLabel, VectorModel};
pub use symbology::Symbology;
