//! Frame-coalesced pointer scheduling.
//!
//! Pointer-move events arrive far more often than the display can usefully
//! redraw. The scheduler keeps only the latest coordinate and admits at
//! most one processing pass per display frame: while a pass is pending,
//! newer coordinates overwrite the buffer instead of queuing. Within a
//! gesture the final committed state therefore always reflects the last
//! observed pointer position, never an earlier intermediate one.

use crate::types::Point;

/// Latest-wins buffer for continuous pointer motion.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<Point>,
    pass_scheduled: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer coordinate. Returns `true` when a processing pass
    /// still needs to be requested from the host's frame callback, `false`
    /// when one is already in flight and the coordinate merely overwrote
    /// the buffer.
    pub fn schedule(&mut self, position: Point) -> bool {
        self.pending = Some(position);
        if self.pass_scheduled {
            return false;
        }
        self.pass_scheduled = true;
        true
    }

    /// Consume the buffered coordinate at the frame boundary. Returns
    /// `None` when nothing was scheduled since the last pass.
    pub fn take(&mut self) -> Option<Point> {
        self.pass_scheduled = false;
        self.pending.take()
    }

    /// Whether a pass is currently pending.
    pub fn is_pending(&self) -> bool {
        self.pass_scheduled
    }

    /// Drop any buffered coordinate (gesture ended or canceled).
    pub fn reset(&mut self) {
        self.pending = None;
        self.pass_scheduled = false;
    }
}
