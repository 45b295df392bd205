use crate::color::Rgba;
use crate::font::FontAssets;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontConfig {
    /// WOFF2 file embedded for non EAN/UPC symbols.
    pub normal: Option<PathBuf>,
    /// WOFF2 file embedded for EAN/UPC symbols.
    pub upcean: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub fonts: FontConfig,
    pub foreground: Option<Rgba>,
    pub background: Option<Rgba>,
    pub embed_font: bool,
    pub bold: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    fonts: Option<FontConfig>,
    foreground: Option<Rgba>,
    background: Option<Rgba>,
    embed_font: Option<bool>,
    bold: Option<bool>,
}

impl Config {
    /// Reads the configured font files. Relative paths resolve against `base`.
    pub fn load_fonts(&self, base: Option<&Path>) -> anyhow::Result<FontAssets> {
        let resolve = |path: &PathBuf| match base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.clone(),
        };
        let normal = self.fonts.normal.as_ref().map(resolve);
        let upcean = self.fonts.upcean.as_ref().map(resolve);
        FontAssets::load(normal.as_deref(), upcean.as_deref())
            .context("failed to read font assets")
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let parsed = parse_config_file(&contents)?;

    if let Some(fonts) = parsed.fonts {
        config.fonts = fonts;
    }
    config.foreground = parsed.foreground;
    config.background = parsed.background;
    if let Some(v) = parsed.embed_font {
        config.embed_font = v;
    }
    if let Some(v) = parsed.bold {
        config.bold = v;
    }
    Ok(config)
}

fn parse_config_file(contents: &str) -> anyhow::Result<ConfigFile> {
    match serde_json::from_str::<ConfigFile>(contents) {
        Ok(parsed) => Ok(parsed),
        Err(json_err) => json5::from_str::<ConfigFile>(contents)
            .map_err(|_| anyhow::Error::new(json_err).context("invalid config file")),
    }
}
