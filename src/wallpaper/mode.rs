//! Generic fill modes and their translation into backend-native codes.

use std::fmt;
use std::str::FromStr;

use crate::wallpaper::error::{Result, WallpaperError};

/// How the image should cover the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillMode {
    /// Let the desktop decide
    Auto,
    Center,
    Tile,
    /// Fill the screen, ignoring aspect ratio
    Stretch,
    /// Fit inside the screen, keeping aspect ratio
    Scale,
    /// Cover the screen, cropping what does not fit
    Zoom,
}

impl FillMode {
    pub const ALL: [FillMode; 6] = [
        FillMode::Auto,
        FillMode::Center,
        FillMode::Tile,
        FillMode::Stretch,
        FillMode::Scale,
        FillMode::Zoom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FillMode::Auto => "auto",
            FillMode::Center => "center",
            FillMode::Tile => "tile",
            FillMode::Stretch => "stretch",
            FillMode::Scale => "scale",
            FillMode::Zoom => "zoom",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFillMode(pub String);

impl FromStr for FillMode {
    type Err = UnknownFillMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(FillMode::Auto),
            "center" | "centered" => Ok(FillMode::Center),
            "tile" | "tiled" => Ok(FillMode::Tile),
            "stretch" | "stretched" => Ok(FillMode::Stretch),
            "scale" | "scaled" | "fit" | "fill" => Ok(FillMode::Scale),
            "zoom" | "zoomed" | "crop" | "cropped" => Ok(FillMode::Zoom),
            other => Err(UnknownFillMode(other.to_string())),
        }
    }
}

/// A backend's translation table. `None` means the backend cannot express
/// the mode.
pub type ModeTable = fn(FillMode) -> Option<&'static str>;

/// True if every code in `table` is a number, e.g. xfconf's `image-style`.
fn has_numeric_codes(table: ModeTable) -> bool {
    FillMode::ALL
        .into_iter()
        .filter_map(table)
        .all(|code| code.bytes().all(|b| b.is_ascii_digit()))
}

/// Translate `mode` for `backend`.
///
/// A single ASCII digit is passed through verbatim as a backend-native code,
/// but only to backends whose codes are numbers. Keyword backends reject it.
pub fn map_mode(backend: &'static str, mode: &str, table: ModeTable) -> Result<String> {
    if mode.len() == 1 && mode.as_bytes()[0].is_ascii_digit() && has_numeric_codes(table) {
        return Ok(mode.to_string());
    }

    mode.parse::<FillMode>()
        .ok()
        .and_then(table)
        .map(str::to_string)
        .ok_or_else(|| WallpaperError::InvalidMode {
            backend,
            mode: mode.to_string(),
        })
}

/// Resolve the mode to use: the requested one, or the configured default.
pub fn effective_mode<'a>(requested: &'a str, default: &'a str) -> &'a str {
    if requested.is_empty() { default } else { requested }
}
