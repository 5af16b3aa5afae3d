//! Pointer event types fed to the editor by the host shell.
//!
//! Positions are window coordinates in screen space; the editor subtracts
//! the canvas origin before any viewport math. The host must deliver move
//! and release events at document scope, not just over the canvas, so a
//! drag that leaves the canvas bounds still observes its release.

use crate::types::Point;

/// Which mouse button a press event carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifiers active during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        shift: false,
        control: false,
    };

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }
}

/// A button press.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn primary(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn middle(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Middle,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn secondary(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Secondary,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A scroll wheel tick over the canvas.
#[derive(Clone, Copy, Debug)]
pub struct WheelEvent {
    pub position: Point,
    /// Positive values scroll down (zoom out), negative up (zoom in).
    pub delta_y: f32,
}
