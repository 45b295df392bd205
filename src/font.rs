use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::path::Path;

pub const NORMAL_FONT_FAMILY: &str = "Arimo";
pub const UPCEAN_FONT_FAMILY: &str = "OCRB";

/// WOFF2 font blobs for the `@font-face` rule, kept base64-encoded so each
/// document only copies them.
#[derive(Debug, Clone, Default)]
pub struct FontAssets {
    normal: Option<String>,
    upcean: Option<String>,
}

impl FontAssets {
    pub fn new(normal_woff2: &[u8], upcean_woff2: &[u8]) -> Self {
        Self {
            normal: Some(BASE64.encode(normal_woff2)),
            upcean: Some(BASE64.encode(upcean_woff2)),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_normal(mut self, woff2: &[u8]) -> Self {
        self.normal = Some(BASE64.encode(woff2));
        self
    }

    pub fn with_upcean(mut self, woff2: &[u8]) -> Self {
        self.upcean = Some(BASE64.encode(woff2));
        self
    }

    pub fn load(normal: Option<&Path>, upcean: Option<&Path>) -> std::io::Result<Self> {
        let mut assets = Self::default();
        if let Some(path) = normal {
            assets = assets.with_normal(&std::fs::read(path)?);
        }
        if let Some(path) = upcean {
            assets = assets.with_upcean(&std::fs::read(path)?);
        }
        Ok(assets)
    }

    /// Font family name and base64 blob for the symbol's family, if loaded.
    pub fn face(&self, upcean: bool) -> Option<(&'static str, &str)> {
        if upcean {
            self.upcean.as_deref().map(|data| (UPCEAN_FONT_FAMILY, data))
        } else {
            self.normal.as_deref().map(|data| (NORMAL_FONT_FAMILY, data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_face_by_family() {
        let assets = FontAssets::new(b"normal", b"upc");
        assert_eq!(assets.face(false), Some(("Arimo", "bm9ybWFs")));
        assert_eq!(assets.face(true), Some(("OCRB", "dXBj")));
    }

    #[test]
    fn missing_blob_has_no_face() {
        let assets = FontAssets::none().with_normal(b"n");
        assert!(assets.face(true).is_none());
        assert!(assets.face(false).is_some());
    }
}
