//! Viewport transform - pan, zoom, and screen/world coordinate conversion.
//!
//! Node positions live in world space; pointer events arrive in screen
//! space. The two are related by a pan offset (screen-space translation)
//! and a zoom factor:
//!
//! ```text
//! world  = (screen - pan_offset) / zoom
//! screen = world * zoom + pan_offset
//! ```
//!
//! Zooming is always anchored: the world point under the anchor before the
//! zoom change stays under it afterwards.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::types::Point;

/// Pan offset and zoom factor for the canvas. Not persisted with the graph;
/// recomputed on load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen-space translation applied after scaling.
    pub pan_offset: Point,
    /// Scale factor, clamped to [`MIN_ZOOM`], [`MAX_ZOOM`].
    pub zoom: f32,
    /// Size of the visible canvas area in screen units. Used as the anchor
    /// for toolbar-driven zoom and for default node placement.
    pub size: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_offset: Point::ZERO,
            zoom: DEFAULT_ZOOM,
            size: Point::new(1280.0, 800.0),
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Point::new(width, height),
            ..Default::default()
        }
    }

    /// Convert a screen-space point to world space.
    #[inline]
    pub fn to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_offset.x) / self.zoom,
            (screen.y - self.pan_offset.y) / self.zoom,
        )
    }

    /// Convert a world-space point to screen space.
    #[inline]
    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.zoom + self.pan_offset.x,
            world.y * self.zoom + self.pan_offset.y,
        )
    }

    /// Convert a screen-space delta to world units (for drag offsets).
    #[inline]
    pub fn delta_to_world(&self, delta: Point) -> Point {
        Point::new(delta.x / self.zoom, delta.y / self.zoom)
    }

    /// Shift the pan offset by a screen-space delta.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan_offset += delta;
    }

    /// Set the zoom factor, adjusting the pan offset so the world point
    /// under `anchor` (screen space) stays under it. Out-of-range values
    /// clamp rather than error. Returns the zoom actually applied.
    pub fn zoom_at(&mut self, anchor: Point, new_zoom: f32) -> f32 {
        let new_zoom = new_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_zoom / self.zoom;
        self.pan_offset = Point::new(
            anchor.x - (anchor.x - self.pan_offset.x) * ratio,
            anchor.y - (anchor.y - self.pan_offset.y) * ratio,
        );
        self.zoom = new_zoom;
        new_zoom
    }

    /// Change zoom by `delta`, anchored at the viewport center. Toolbar
    /// zoom buttons go through here rather than the wheel path.
    pub fn zoom_by(&mut self, delta: f32) {
        let center = Point::new(self.size.x / 2.0, self.size.y / 2.0);
        self.zoom_at(center, self.zoom + delta);
    }

    /// Reset zoom to 1.0, anchored at the viewport center.
    pub fn reset_zoom(&mut self) {
        let center = Point::new(self.size.x / 2.0, self.size.y / 2.0);
        self.zoom_at(center, DEFAULT_ZOOM);
    }

    /// Center the viewport on a world-space position. Used after import so
    /// the loaded graph is on screen regardless of where it was authored.
    pub fn center_on(&mut self, world: Point) {
        self.pan_offset = Point::new(-world.x, -world.y);
    }
}
