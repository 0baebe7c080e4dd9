//! Capability interfaces for the collaborators the editing engine relies on.
//!
//! The host map application implements these for its own layers, canvas and
//! message bar; [`crate::MeshblockLayer`] and [`crate::DistrictLayer`] are
//! in-memory implementations of the dataset side.

use std::sync::Arc;

use anyhow::Result;
use geo::{Coord, MultiPolygon, Rect};

use crate::{
    overlay::{DrawCommand, MapView},
    session::PointerEvent,
    snap::Candidate,
    types::{DistrictCode, MeshblockId},
};

/// A meshblock as seen by the engine: read-only geometry, current district.
#[derive(Debug, Clone)]
pub struct Meshblock {
    pub id: MeshblockId,
    pub label: Arc<str>, // Human-readable meshblock number used in notifications
    pub district: Option<DistrictCode>,
    pub geometry: Arc<MultiPolygon<f64>>,
}

/// A district feature with the aggregate measure shown on its label.
#[derive(Debug, Clone)]
pub struct District {
    pub code: DistrictCode,
    pub geometry: MultiPolygon<f64>,
    pub measure: f64,
}

/// Spatial index over one or more layers of meshblock geometry.
pub trait SpatialLocator {
    /// All raw candidates near `point`, unfiltered and possibly containing
    /// several hits for the same meshblock. `tolerance` is a search radius hint.
    fn search(&self, point: Coord<f64>, tolerance: f64) -> Vec<Candidate>;
}

/// The read/write meshblock dataset.
///
/// Writes take `&self`: the dataset is shared with readers on the same thread,
/// and the editing session is its only writer.
pub trait MeshblockStore {
    /// Fetch the meshblocks with the given ids. Unknown ids are skipped.
    fn meshblocks_by_ids(&self, ids: &[MeshblockId]) -> Vec<Meshblock>;

    /// Write the district attribute of a single meshblock.
    fn set_district(&self, id: MeshblockId, district: &DistrictCode) -> Result<()>;

    /// Ask the host to repaint the meshblock layer.
    fn request_repaint(&self);
}

/// The district dataset used for aggregate labels.
pub trait DistrictSource {
    /// District features whose extent intersects `rect`.
    fn districts_in_rect(&self, rect: Rect<f64>) -> Vec<District>;
}

/// Fire-and-forget user-visible messages.
pub trait NotificationSink {
    fn push(&mut self, message: &str);
}

/// The map canvas hosting the tool.
pub trait Canvas {
    /// Schedule a redraw; it happens after the current event handler returns.
    fn request_redraw(&mut self);
}

/// Receives pointer input from the host's event loop.
pub trait PointerEventHandler {
    fn on_move(&mut self, event: &PointerEvent);
    fn on_press(&mut self, event: &PointerEvent);

    /// The host switched to another tool.
    fn deactivate(&mut self) {}
}

/// Something that can contribute draw commands to a canvas repaint.
pub trait Paintable {
    fn on_paint_request(&self, view: &MapView) -> Vec<DrawCommand>;
}

/// Notification sink that forwards messages to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn push(&mut self, message: &str) {
        tracing::info!(target: "meshpaint::notify", "{message}");
    }
}
