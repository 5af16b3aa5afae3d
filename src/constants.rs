//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for toolbar zoom buttons
pub const ZOOM_STEP: f32 = 0.1;

/// Zoom step for one wheel notch
pub const WHEEL_ZOOM_STEP: f32 = 0.05;

// ============================================================================
// Node Card Geometry
// ============================================================================
// Node cards have a fixed width; height grows with the answer list. The
// rendering collaborator draws the cards, but hit testing and connection
// anchor placement need the same numbers.

/// Width of a node card in world units at zoom 1.0
pub const NODE_WIDTH: f32 = 288.0;

/// Height of the node card header bar
pub const NODE_HEADER_HEIGHT: f32 = 36.0;

/// Minimum node card height (header + empty body)
pub const NODE_MIN_HEIGHT: f32 = 88.0;

/// Height contributed by each answer row in the card body
pub const ANSWER_ROW_HEIGHT: f32 = 28.0;

/// Horizontal inset of the outgoing connection anchor from the card's left edge
pub const CONNECTION_ANCHOR_X: f32 = 280.0;

/// Vertical offset of both connection anchors from the card's top edge
pub const CONNECTION_ANCHOR_Y: f32 = 40.0;

// ============================================================================
// Node Placement
// ============================================================================

/// New nodes spawn at roughly a third of the viewport, jittered by up to
/// this much in each axis so repeated adds do not stack exactly.
pub const SPAWN_JITTER: f32 = 25.0;

/// Offset applied to a cloned node so the copy is visually distinguishable
pub const CLONE_OFFSET: f32 = 50.0;

/// Title suffix appended to cloned nodes
pub const CLONE_SUFFIX: &str = " (Copy)";

// ============================================================================
// Notifications
// ============================================================================

/// How long a toast stays visible, in milliseconds
pub const TOAST_DURATION_MS: u64 = 4000;

/// Maximum number of toasts kept in the queue
pub const MAX_TOASTS: usize = 8;
