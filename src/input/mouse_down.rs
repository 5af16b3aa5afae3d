//! Button-press handling: gesture starts, modal-mode clicks, selection.

use crate::editor::DialogueEditor;
use crate::input::events::{MouseButton, PointerEvent};
use crate::input::state::InteractionState;
use crate::notifications::Toast;
use crate::types::Point;
use tracing::debug;

impl DialogueEditor {
    /// Route a button press. Positions are window coordinates.
    pub fn handle_mouse_down(&mut self, event: PointerEvent) {
        let local = event.position - self.canvas_origin;
        let world = self.viewport.to_world(local);
        let hit = self.graph.hit_test(world);

        // Disconnect mode consumes secondary presses on cards; any other
        // press drops the modal state and is handled normally below.
        if self.interaction.is_disconnecting() {
            if event.button == MouseButton::Secondary {
                self.interaction.reset();
                if let Some(node_id) = hit {
                    self.remove_incoming_connection(&node_id);
                }
                return;
            }
            self.interaction.reset();
        } else if self.interaction.is_connecting() {
            // Presses on the canvas abandon endpoint picking.
            self.interaction.reset();
        }

        match event.button {
            MouseButton::Middle => {
                self.selected_node = None;
                self.interaction.start_panning(event.position);
            }
            MouseButton::Primary => match hit {
                Some(node_id) => self.begin_drag(node_id, world),
                None if event.modifiers.alt => {
                    self.selected_node = None;
                    self.interaction.start_panning(event.position);
                }
                None => {
                    self.selected_node = None;
                }
            },
            MouseButton::Secondary => {
                if let Some(node_id) = hit {
                    debug!(node = %node_id, "disconnect mode armed");
                    self.interaction = InteractionState::Disconnecting {
                        target_hint: node_id,
                    };
                }
            }
        }
    }

    fn begin_drag(&mut self, node_id: String, world: Point) {
        let Some(node) = self.graph.get_node(&node_id) else {
            return;
        };
        // Offset from the card corner to the grab point, in world units,
        // so the card does not jump under the cursor.
        let grab_offset = world - node.position;
        self.drag_ghost = Some(crate::editor::DragGhost {
            node_id: node_id.clone(),
            position: node.position,
        });
        self.selected_node = Some(node_id.clone());
        self.interaction.start_dragging(node_id, grab_offset);
    }

    /// Second half of the disconnect gesture: delete the first connection
    /// whose target is the clicked node, regardless of which node armed the
    /// mode.
    fn remove_incoming_connection(&mut self, node_id: &str) {
        let found = self
            .graph
            .find_connection_to(node_id)
            .map(|c| c.id.clone());
        match found {
            Some(connection_id) => {
                self.graph.delete_connection(&connection_id);
                self.notify(Toast::success("Connection removed"));
            }
            None => {
                debug!(node = %node_id, "no incoming connection to remove");
            }
        }
    }
}
