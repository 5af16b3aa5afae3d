//! Interactive node-graph canvas engine for branching-dialogue editing.
//!
//! The crate keeps the whole editing model in one owned context,
//! [`editor::DialogueEditor`]: the dialogue graph, the pan/zoom viewport,
//! the pointer interaction state machine, and the frame-coalesced move
//! scheduler. A host shell feeds it pointer events and a frame callback,
//! renders from its read surface, and gets toasts back for user-visible
//! outcomes.
//!
//! Coordinates come in two spaces. Node positions are world space; pointer
//! events are screen space; [`viewport::Viewport`] converts between them
//! and anchors every zoom change so the point under the cursor stays put.

pub mod constants;
pub mod editor;
pub mod graph;
pub mod input;
pub mod io;
pub mod logging;
pub mod notifications;
pub mod perf;
pub mod scheduler;
pub mod settings;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use editor::{DialogueEditor, DragGhost};
pub use graph::{DialogueGraph, GraphError, GraphResult};
pub use input::{InteractionState, Modifiers, MouseButton, PointerEvent, WheelEvent};
pub use io::DialogueFile;
pub use notifications::{Toast, ToastLevel};
pub use scheduler::FrameScheduler;
pub use settings::EditorConfig;
pub use types::{Answer, Connection, Consequences, DialogueNode, NodeBody, Point};
pub use viewport::Viewport;
