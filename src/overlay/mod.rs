mod draw;
mod overlay;
mod style;

pub use draw::{DrawCommand, MapView, TextAlign};
pub use overlay::AggregateOverlay;
pub use style::{AnchorMode, BackgroundStyle, LabelStyle};
