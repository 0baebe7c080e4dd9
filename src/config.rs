use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::overlay::{AnchorMode, LabelStyle};

/// Tunables of the boundary painting tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Maximum distance (map units) between the cursor and an accepted match.
    pub snap_distance: f64,
    /// How label anchors are placed inside districts.
    pub anchor_mode: AnchorMode,
    /// Tolerance of the pole-of-inaccessibility search, in map units.
    pub pole_precision: f64,
    pub label_style: LabelStyle,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            snap_distance: 1000.0,
            anchor_mode: AnchorMode::Pole,
            pole_precision: 3000.0,
            label_style: LabelStyle::default(),
        }
    }
}

impl ToolConfig {
    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(data).context("[ToolConfig] invalid JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("[ToolConfig] failed to read {}", path.display()))?;
        Self::from_json_str(&data)
            .with_context(|| format!("[ToolConfig] failed to load {}", path.display()))
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.snap_distance.is_finite() && self.snap_distance >= 0.0,
            "[ToolConfig] snap_distance must be a finite non-negative number, got {}", self.snap_distance
        );
        ensure!(
            self.pole_precision.is_finite() && self.pole_precision > 0.0,
            "[ToolConfig] pole_precision must be a finite positive number, got {}", self.pole_precision
        );
        self.label_style.validate()
    }
}
