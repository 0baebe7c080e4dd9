use geo::{Coord, Rect};

use crate::snap::HitKind;

use super::LabelStyle;

/// Horizontal alignment of label lines around their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Rendering instructions handed back to the host canvas. Positions are canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Multi-line text with a background box sitting just above `position`.
    Label {
        position: (f64, f64),
        align: TextAlign,
        lines: Vec<String>,
        style: LabelStyle,
    },
    /// Snap indicator at a candidate match.
    SnapMarker {
        position: (f64, f64),
        kind: HitKind,
    },
}

/// The visible part of the map and the canvas it is drawn onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub extent: Rect<f64>,
    pub width: f64,  // Canvas width in pixels
    pub height: f64, // Canvas height in pixels
}

impl MapView {
    pub fn new(extent: Rect<f64>, width: f64, height: f64) -> Self {
        Self { extent, width, height }
    }

    /// True if the view has a non-empty extent and canvas.
    pub fn is_drawable(&self) -> bool {
        self.extent.width() > 0.0 && self.extent.height() > 0.0 && self.width > 0.0 && self.height > 0.0
    }

    /// Map coordinates -> canvas pixels (Y down).
    pub fn to_pixel(&self, coord: Coord<f64>) -> (f64, f64) {
        let x = (coord.x - self.extent.min().x) / self.extent.width() * self.width;
        let y = (self.extent.max().y - coord.y) / self.extent.height() * self.height;
        (x, y)
    }
}
