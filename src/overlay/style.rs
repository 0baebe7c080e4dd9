use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Strategy for placing a label anchor inside a district.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    /// Pole of inaccessibility of the district clipped to the visible extent.
    #[default]
    Pole,
    /// Centroid of the whole district.
    Centroid,
}

/// Opaque box drawn behind label text. Sizes are in label text units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundStyle {
    pub enabled: bool,
    /// Padding added to the text extent, (width, height).
    pub size: [f64; 2],
    /// Offset of the box from the anchor, (x, y); negative y moves it up.
    pub offset: [f64; 2],
    /// Corner radii, (x, y).
    pub radii: [f64; 2],
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            size: [1.0, 0.0],
            offset: [0.0, -0.7],
            radii: [1.0, 1.0],
        }
    }
}

/// Text style of aggregate labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelStyle {
    pub background: BackgroundStyle,
}

impl LabelStyle {
    pub(crate) fn validate(&self) -> Result<()> {
        let bg = &self.background;
        ensure!(
            bg.size.iter().chain(&bg.offset).chain(&bg.radii).all(|v| v.is_finite()),
            "[LabelStyle] background values must be finite"
        );
        ensure!(bg.radii.iter().all(|&r| r >= 0.0), "[LabelStyle] background radii must be non-negative");
        Ok(())
    }
}
