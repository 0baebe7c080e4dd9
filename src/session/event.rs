use geo::Coord;

/// Mouse button of a press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Keyboard modifiers held during a pointer event.
///
/// Carried through for hosts that wrap the session; painting and activation
/// behave the same whatever modifiers are held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// A pointer event already converted to map coordinates by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub point: Coord<f64>,
    pub button: MouseButton, // Ignored for move events
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(point: Coord<f64>, button: MouseButton) -> Self {
        Self { point, button, modifiers: Modifiers::default() }
    }

    /// Move event at map coordinates `(x, y)`.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(Coord { x, y }, MouseButton::Primary)
    }

    /// Press event at map coordinates `(x, y)`.
    pub fn pressed(x: f64, y: f64, button: MouseButton) -> Self {
        Self::new(Coord { x, y }, button)
    }

    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }
}
