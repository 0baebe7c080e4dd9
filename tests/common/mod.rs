// Shared fixtures for the end-to-end tests.
#![allow(dead_code)]

use std::rc::Rc;

use geo::{polygon, Coord, MultiPolygon, Rect};
use meshpaint::{
    Canvas, DistrictCode, DistrictLayer, LayerId, MapView, MeshblockLayer, MeshblockRecord, NotificationSink,
    RedistrictingSession, ToolConfig,
};

pub const SIZE: f64 = 10_000.0;

#[derive(Debug, Default)]
pub struct Messages(pub Vec<String>);

impl NotificationSink for Messages {
    fn push(&mut self, message: &str) { self.0.push(message.to_string()) }
}

#[derive(Debug, Default)]
pub struct Redraws(pub usize);

impl Canvas for Redraws {
    fn request_redraw(&mut self) { self.0 += 1 }
}

pub type Session = RedistrictingSession<MeshblockLayer, DistrictLayer, Messages, Redraws>;

pub fn square(col: f64, row: f64) -> MultiPolygon<f64> {
    let (x, y) = (col * SIZE, row * SIZE);
    MultiPolygon::new(vec![polygon![
        (x: x, y: y), (x: x + SIZE, y: y), (x: x + SIZE, y: y + SIZE), (x: x, y: y + SIZE), (x: x, y: y),
    ]])
}

/// Grid of 10 km meshblocks:
///
/// ```text
/// row 1:  M4 A | M5 A | M6 C |      | M8 -
/// row 0:  M1 A | M2 B | M3 B |      | M7 C
/// ```
pub fn meshblocks() -> Rc<MeshblockLayer> {
    Rc::new(MeshblockLayer::new(LayerId(1), vec![
        MeshblockRecord::new(1, "M1", "A", square(0.0, 0.0)),
        MeshblockRecord::new(2, "M2", "B", square(1.0, 0.0)),
        MeshblockRecord::new(3, "M3", "B", square(2.0, 0.0)),
        MeshblockRecord::new(4, "M4", "A", square(0.0, 1.0)),
        MeshblockRecord::new(5, "M5", "A", square(1.0, 1.0)),
        MeshblockRecord::new(6, "M6", "C", square(2.0, 1.0)),
        MeshblockRecord::new(7, "M7", "C", square(4.0, 0.0)),
        MeshblockRecord::new(8, "M8", "", square(4.0, 1.0)),
    ]).unwrap())
}

pub fn session_with(config: ToolConfig) -> Session {
    let meshblocks = meshblocks();
    let districts = Rc::new(DistrictLayer::new(Rc::clone(&meshblocks)));
    RedistrictingSession::new(meshblocks, districts, Messages::default(), Redraws::default(), config).unwrap()
}

pub fn session() -> Session {
    session_with(ToolConfig::default())
}

pub fn code(s: &str) -> DistrictCode {
    DistrictCode::parse(s).unwrap()
}

/// Whole grid on a 500 x 200 pixel canvas.
pub fn full_view() -> MapView {
    MapView::new(Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 5.0 * SIZE, y: 2.0 * SIZE }), 500.0, 200.0)
}
