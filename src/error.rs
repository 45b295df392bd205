use thiserror::Error;

/// Legacy numeric code for "input data incorrect".
pub const ERROR_INVALID_DATA: i32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The layout stage never populated the scene's vector geometry.
    #[error("vector header missing: scene has no vector geometry")]
    MissingGeometry,
}

impl RenderError {
    pub fn code(&self) -> i32 {
        match self {
            RenderError::MissingGeometry => ERROR_INVALID_DATA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("malformed color `{0}` (expected RRGGBB, RRGGBBAA or C,M,Y,K)")]
    Malformed(String),
    #[error("CMYK component {value} out of range 0-100 in `{input}`")]
    ComponentOutOfRange { input: String, value: u32 },
}
