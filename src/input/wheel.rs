//! Scroll-wheel zoom, anchored at the cursor.

use crate::editor::DialogueEditor;
use crate::input::events::WheelEvent;

impl DialogueEditor {
    /// Zoom one wheel step toward or away from the cursor. The world point
    /// under the cursor stays fixed. Also clears the selection, matching
    /// the click-on-empty-canvas behavior.
    pub fn handle_wheel(&mut self, event: WheelEvent) {
        let anchor = event.position - self.canvas_origin;
        let step = self.config.wheel_zoom_step;
        let delta = if event.delta_y > 0.0 { -step } else { step };
        self.viewport.zoom_at(anchor, self.viewport.zoom + delta);
        self.selected_node = None;
    }
}
