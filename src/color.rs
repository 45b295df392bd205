use crate::error::ColorParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9A-Fa-f]{6})([0-9A-Fa-f]{2})?$").unwrap());
static CMYK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}),(\d{1,3}),(\d{1,3}),(\d{1,3})$").unwrap());

/// Module colors used by Ultracode, indexed by palette code - 1.
const PALETTE: [&str; 8] = [
    "00ffff", // cyan
    "0000ff", // blue
    "ff00ff", // magenta
    "ff0000", // red
    "ffff00", // yellow
    "00ff00", // green
    "000000", // black
    "ffffff", // white
];

pub fn palette_hex(code: u8) -> &'static str {
    match code {
        1..=8 => PALETTE[usize::from(code - 1)],
        _ => PALETTE[6],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(0xff, 0xff, 0xff);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Unpacks `0xRRGGBBAA`.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 24) as u8,
            g: (packed >> 16) as u8,
            b: (packed >> 8) as u8,
            a: packed as u8,
        }
    }

    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Six uppercase hex digits, no leading `#`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `None` when fully opaque, otherwise alpha scaled to 0..=1.
    pub fn opacity(&self) -> Option<f32> {
        if self.a == 0xff {
            None
        } else {
            Some(f32::from(self.a) / 255.0)
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    fn from_cmyk(input: &str, parts: [u32; 4]) -> Result<Self, ColorParseError> {
        if let Some(value) = parts.iter().copied().find(|v| *v > 100) {
            return Err(ColorParseError::ComponentOutOfRange {
                input: input.to_string(),
                value,
            });
        }
        let [c, m, y, k] = parts;
        let black = (100 - k) as f32;
        let channel = |v: u32| ((255.0 * (100 - v) as f32 * black) / 10000.0).round() as u8;
        Ok(Self::opaque(channel(c), channel(m), channel(y)))
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Some(caps) = HEX_RE.captures(input) {
            let rgb = u32::from_str_radix(&caps[1], 16)
                .map_err(|_| ColorParseError::Malformed(input.to_string()))?;
            let alpha = match caps.get(2) {
                Some(m) => u8::from_str_radix(m.as_str(), 16)
                    .map_err(|_| ColorParseError::Malformed(input.to_string()))?,
                None => 0xff,
            };
            return Ok(Self::from_packed(rgb << 8 | u32::from(alpha)));
        }
        if let Some(caps) = CMYK_RE.captures(input) {
            let mut parts = [0u32; 4];
            for (idx, part) in parts.iter_mut().enumerate() {
                *part = caps[idx + 1]
                    .parse()
                    .map_err(|_| ColorParseError::Malformed(input.to_string()))?;
            }
            return Self::from_cmyk(input, parts);
        }
        Err(ColorParseError::Malformed(input.to_string()))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Packed(u32),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Packed(packed) => Ok(Rgba::from_packed(packed)),
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Hex digits and optional opacity for one color, resolved once per document.
#[derive(Debug, Clone)]
pub struct ResolvedColor {
    pub hex: String,
    pub alpha: u8,
    pub opacity: Option<f32>,
}

impl From<Rgba> for ResolvedColor {
    fn from(color: Rgba) -> Self {
        Self {
            hex: color.hex(),
            alpha: color.a,
            opacity: color.opacity(),
        }
    }
}
