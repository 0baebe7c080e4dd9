use std::rc::Rc;

use geo::{Centroid, Point, Rect};

use crate::{
    config::ToolConfig,
    geom::{clip_to_rect, pole_of_inaccessibility},
    host::{District, DistrictSource, Paintable},
};

use super::{AnchorMode, DrawCommand, LabelStyle, MapView, TextAlign};

/// Per-district aggregate labels, recomputed from the live district dataset on
/// every repaint. Holds no state besides its configuration.
#[derive(Debug)]
pub struct AggregateOverlay<D> {
    districts: Rc<D>,
    mode: AnchorMode,
    pole_precision: f64,
    style: LabelStyle,
}

impl<D: DistrictSource> AggregateOverlay<D> {
    pub fn new(districts: Rc<D>, config: &ToolConfig) -> Self {
        Self {
            districts,
            mode: config.anchor_mode,
            pole_precision: config.pole_precision,
            style: config.label_style.clone(),
        }
    }

    #[inline] pub fn mode(&self) -> AnchorMode { self.mode }

    /// Label anchor of a district in map coordinates, or `None` if it has no
    /// usable geometry within `extent`.
    pub fn anchor(&self, district: &District, extent: Rect<f64>) -> Option<Point<f64>> {
        match self.mode {
            AnchorMode::Pole => {
                let clipped = clip_to_rect(&district.geometry, extent);
                pole_of_inaccessibility(&clipped, self.pole_precision).map(|(pole, _)| pole)
            }
            AnchorMode::Centroid => district.geometry.centroid(),
        }
    }

    /// Text lines for a district label: its code, then its measure as an integer.
    fn label_lines(district: &District) -> Vec<String> {
        let mut lines = vec![district.code.to_string()];
        if district.measure.is_finite() {
            lines.push(format!("{}", district.measure.trunc() as i64));
        }
        lines
    }

    /// Label commands for every district in view. Districts without an anchor are skipped.
    pub fn labels(&self, view: &MapView) -> Vec<DrawCommand> {
        if !view.is_drawable() { return vec![] }

        self.districts.districts_in_rect(view.extent).iter()
            .filter_map(|district| {
                let Some(anchor) = self.anchor(district, view.extent) else {
                    tracing::trace!("[AggregateOverlay] no anchor for district {}", district.code);
                    return None;
                };
                Some(DrawCommand::Label {
                    position: view.to_pixel(anchor.0),
                    align: TextAlign::Center,
                    lines: Self::label_lines(district),
                    style: self.style.clone(),
                })
            })
            .collect()
    }
}

impl<D: DistrictSource> Paintable for AggregateOverlay<D> {
    fn on_paint_request(&self, view: &MapView) -> Vec<DrawCommand> {
        self.labels(view)
    }
}
