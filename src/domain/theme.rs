//! Overlay color theme, loadable as a JSON bundle.

use serde::{Deserialize, Serialize};

/// sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// CSS `rgba()` string at the given alpha, as fed to canvas styles.
    pub fn css(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Primary ring and glow color.
    pub base: Rgb,
    /// Lighter shade for the secondary click ring.
    pub halo: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            base: Rgb::new(79, 109, 255),
            halo: Rgb::new(123, 143, 255),
        }
    }
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("theme bundle: {e}"))
    }

    pub fn manifest_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
