#![doc = "Interactive meshblock boundary painting between two districts"]
mod config;
mod geom;
mod host;
mod layer;
mod overlay;
mod session;
mod snap;
mod types;

#[doc(inline)]
pub use config::ToolConfig;

#[doc(inline)]
pub use host::{
    Canvas, District, DistrictSource, LogSink, Meshblock, MeshblockStore, NotificationSink, Paintable,
    PointerEventHandler, SpatialLocator,
};

#[doc(inline)]
pub use layer::{DistrictLayer, LayerError, MeshblockLayer, MeshblockRecord};

#[doc(inline)]
pub use overlay::{AggregateOverlay, AnchorMode, BackgroundStyle, DrawCommand, LabelStyle, MapView, TextAlign};

#[doc(inline)]
pub use session::{Modifiers, MouseButton, PointerEvent, RedistrictingSession};

#[doc(inline)]
pub use snap::{filter_and_dedup, BoundaryMatcher, Candidate, EdgeMatch, HitKind, MatchFilter, MatchKind, Matches, UniqueBoundaryFilter};

#[doc(inline)]
pub use types::{DistrictCode, DistrictPair, LayerId, MeshblockId};
