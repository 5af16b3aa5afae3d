//! Release handling: drag commit and pan end.

use crate::editor::DialogueEditor;
use crate::types::Point;
use tracing::debug;

impl DialogueEditor {
    /// End the active gesture at the release coordinates. A drag commits
    /// the node position computed from this event, not from the last
    /// processed frame, so fast flicks land where the pointer stopped.
    /// Releases outside a drag or pan are ignored; connect and disconnect
    /// modes are click-driven and unaffected.
    pub fn handle_mouse_up(&mut self, position: Point) {
        match &self.interaction {
            crate::input::InteractionState::DraggingNode {
                node_id,
                grab_offset,
            } => {
                let node_id = node_id.clone();
                let world = self.viewport.to_world(position - self.canvas_origin) - *grab_offset;
                self.graph.set_position(&node_id, world);
                debug!(node = %node_id, x = world.x, y = world.y, "drag committed");
                self.drag_ghost = None;
                self.interaction.reset();
                self.scheduler.reset();
            }
            crate::input::InteractionState::Panning { last_pos } => {
                // Fold in any motion since the last processed frame.
                let delta = position - *last_pos;
                self.viewport.pan_by(delta);
                self.interaction.reset();
                self.scheduler.reset();
            }
            _ => {}
        }
    }
}
