mod event;
mod session;

pub use event::{Modifiers, MouseButton, PointerEvent};
pub use session::RedistrictingSession;
