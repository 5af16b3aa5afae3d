//! Continuous pointer motion: scheduling and the per-frame update pass.

use crate::editor::{DialogueEditor, DragGhost};
use crate::types::Point;
use tracing::warn;

impl DialogueEditor {
    /// Record a pointer-move coordinate. Returns `true` when the host must
    /// request a display frame (and call [`DialogueEditor::on_frame`] from
    /// it); `false` when a pass is already pending or no gesture is active.
    pub fn handle_mouse_move(&mut self, position: Point) -> bool {
        if !self.interaction.is_dragging() && !self.interaction.is_panning() {
            return false;
        }
        self.scheduler.schedule(position)
    }

    /// Apply one buffered pointer coordinate to the active gesture.
    pub(crate) fn process_move(&mut self, coords: Point) {
        match &self.interaction {
            crate::input::InteractionState::Panning { last_pos } => {
                let delta = coords - *last_pos;
                self.viewport.pan_by(delta);
                self.interaction.update_last_pos(coords);
            }
            crate::input::InteractionState::DraggingNode {
                node_id,
                grab_offset,
            } => {
                if self.graph.get_node(node_id).is_none() {
                    // Node vanished mid-drag (deleted from the panel).
                    warn!(node = %node_id, "dragged node no longer exists");
                    self.interaction.reset();
                    self.drag_ghost = None;
                    return;
                }
                let position = self.viewport.to_world(coords - self.canvas_origin) - *grab_offset;
                self.drag_ghost = Some(DragGhost {
                    node_id: node_id.clone(),
                    position,
                });
            }
            _ => {}
        }
    }
}
