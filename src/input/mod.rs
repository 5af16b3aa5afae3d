//! Pointer input handling for the canvas.
//!
//! Split by event type: press routing in `mouse_down`, continuous motion in
//! `drag`, release in `mouse_up`, wheel zoom in `wheel`. All handlers live
//! on [`crate::editor::DialogueEditor`]; the shared state machine is in
//! [`state`].

pub mod events;
pub mod state;

mod drag;
mod mouse_down;
mod mouse_up;
mod wheel;

pub use events::{Modifiers, MouseButton, PointerEvent, WheelEvent};
pub use state::InteractionState;
