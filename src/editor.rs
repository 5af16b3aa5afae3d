//! The editor context - one owned mutable struct composing the graph,
//! viewport, interaction state, frame scheduler, selection, and the toast
//! queue.
//!
//! All collaborators (rendering, property forms, toolbar, file dialogs)
//! talk to this struct from the UI thread. Handlers run to completion
//! before the next one starts, so no locking is needed.

use crate::graph::DialogueGraph;
use crate::input::InteractionState;
use crate::notifications::{Toast, ToastManager};
use crate::scheduler::FrameScheduler;
use crate::settings::EditorConfig;
use crate::types::{Answer, NodeId, Point};
use crate::viewport::Viewport;
use rand::Rng;
use tracing::info;

/// Transient, uncommitted position of the node being dragged. The renderer
/// draws this as a translated overlay instead of re-rendering the real card
/// and its connection curves on every move.
#[derive(Clone, Debug, PartialEq)]
pub struct DragGhost {
    pub node_id: NodeId,
    pub position: Point,
}

/// Owned state of one dialogue editing session.
pub struct DialogueEditor {
    pub(crate) graph: DialogueGraph,
    pub(crate) viewport: Viewport,
    pub(crate) config: EditorConfig,
    pub(crate) interaction: InteractionState,
    pub(crate) scheduler: FrameScheduler,
    pub(crate) drag_ghost: Option<DragGhost>,
    pub(crate) toasts: ToastManager,
    pub(crate) selected_node: Option<NodeId>,
    /// Screen offset of the canvas element within the window.
    pub(crate) canvas_origin: Point,
}

impl Default for DialogueEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl DialogueEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            graph: DialogueGraph::new(),
            viewport: Viewport::default(),
            config,
            interaction: InteractionState::Idle,
            scheduler: FrameScheduler::new(),
            drag_ghost: None,
            toasts: ToastManager::new(),
            selected_node: None,
            canvas_origin: Point::ZERO,
        }
    }

    // ==================== Collaborator surface ====================

    pub fn graph(&self) -> &DialogueGraph {
        &self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport access, for hosts that restore a persisted view.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn selected_node(&self) -> Option<&NodeId> {
        self.selected_node.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected_node = None;
    }

    /// Select a node by id, for collaborators that pick nodes outside the
    /// canvas. Returns `false` for stale ids, leaving the selection alone.
    pub fn select_node(&mut self, id: &str) -> bool {
        if self.graph.get_node(id).is_some() {
            self.selected_node = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// The ephemeral drag preview, distinct from committed positions.
    pub fn drag_ghost(&self) -> Option<&DragGhost> {
        self.drag_ghost.as_ref()
    }

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }

    pub fn dismiss_toast(&mut self, index: usize) {
        self.toasts.dismiss(index);
    }

    /// Tell the editor where the canvas element sits in the window and how
    /// large it is. The host calls this on layout changes.
    pub fn set_canvas_bounds(&mut self, origin: Point, width: f32, height: f32) {
        self.canvas_origin = origin;
        self.viewport.size = Point::new(width, height);
    }

    /// Replace the whole model with prebuilt data, dropping any in-flight
    /// gesture and the selection. The import path goes through here.
    pub fn load_graph(
        &mut self,
        nodes: Vec<crate::types::DialogueNode>,
        connections: Vec<crate::types::Connection>,
    ) {
        self.graph.load(nodes, connections);
        self.selected_node = None;
        self.drag_ghost = None;
        self.interaction.reset();
        self.scheduler.reset();
    }

    // ==================== Toolbar operations ====================

    /// Create a node near a third of the viewport, jittered so repeated
    /// adds do not stack exactly, and mapped through the current pan/zoom.
    pub fn add_node(&mut self) -> NodeId {
        let mut rng = rand::thread_rng();
        let jitter = self.config.spawn_jitter;
        let screen = Point::new(
            self.viewport.size.x / 3.0 + rng.gen_range(-jitter..=jitter),
            self.viewport.size.y / 3.0 + rng.gen_range(-jitter..=jitter),
        );
        self.graph.add_node_at(self.viewport.to_world(screen))
    }

    /// Clone a node and select the copy. Silently does nothing when the id
    /// is stale.
    pub fn clone_node(&mut self, id: &str) {
        if let Some(clone_id) = self.graph.clone_node(id, self.config.clone_offset) {
            self.selected_node = Some(clone_id);
            self.toasts.push(Toast::success("Node cloned successfully"));
        }
    }

    /// Delete a node; connections cascade and a stale selection clears.
    pub fn delete_node(&mut self, id: &str) {
        self.graph.delete_node(id);
        if self.selected_node.as_deref() == Some(id) {
            self.selected_node = None;
        }
        if self.interaction.dragged_node().map(String::as_str) == Some(id) {
            self.interaction.reset();
            self.drag_ghost = None;
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_by(self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_by(-self.config.zoom_step);
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    // ==================== Property-panel operations ====================

    pub fn update_title(&mut self, id: &str, title: impl Into<String>) {
        self.graph.update_title(id, title);
    }

    pub fn update_question_text(&mut self, id: &str, text: Option<String>) {
        self.graph.update_question_text(id, text);
    }

    pub fn set_remove_after_asked(&mut self, id: &str, value: bool) {
        self.graph.set_remove_after_asked(id, value);
    }

    pub fn set_starts_conversation(&mut self, id: &str, value: bool) {
        if let Err(err) = self.graph.set_starts_conversation(id, value) {
            self.toasts.push(Toast::error(err.to_string()));
        }
    }

    pub fn replace_answers(&mut self, id: &str, answers: Vec<Answer>) {
        self.graph.replace_answers(id, answers);
    }

    // ==================== Connect / disconnect modes ====================

    /// A link affordance on a node card was clicked. First click chooses
    /// the source endpoint; clicking the source again unpicks it; clicking
    /// a different node attempts the connection. Success or rejection, the
    /// mode stays armed for the next pair until explicitly canceled.
    pub fn start_connecting(&mut self, node_id: &str) {
        let source = self.interaction.connecting_source().cloned();
        match source {
            None => {
                self.interaction = InteractionState::Connecting {
                    source: Some(node_id.to_string()),
                };
            }
            Some(src) if src == node_id => {
                self.interaction = InteractionState::Connecting { source: None };
            }
            Some(src) => {
                if let Err(err) = self.graph.create_connection(src, node_id.to_string()) {
                    self.toasts.push(Toast::error(err.to_string()));
                }
                self.interaction = InteractionState::Connecting { source: None };
            }
        }
    }

    /// Leave connecting mode. Idempotent, no partial side effects.
    pub fn cancel_connecting(&mut self) {
        if self.interaction.is_connecting() {
            self.interaction.reset();
        }
    }

    /// Leave disconnecting mode. Idempotent, no partial side effects.
    pub fn cancel_disconnecting(&mut self) {
        if self.interaction.is_disconnecting() {
            self.interaction.reset();
        }
    }

    // ==================== Frame processing ====================

    /// Run one coalesced update pass. The host calls this from its display
    /// frame callback after [`Self::handle_mouse_move`] requested one.
    pub fn on_frame(&mut self) {
        crate::profile_scope!("editor::frame_pass");
        self.toasts.tick();
        let Some(coords) = self.scheduler.take() else {
            return;
        };
        self.process_move(coords);
    }

    /// Abort any in-flight drag or pan without committing (window blur,
    /// pointer-capture loss). Modal connect/disconnect states survive.
    pub fn cancel_active_gesture(&mut self) {
        if self.interaction.is_dragging() || self.interaction.is_panning() {
            self.interaction.reset();
        }
        self.drag_ghost = None;
        self.scheduler.reset();
    }

    pub(crate) fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub(crate) fn log_loaded(&self) {
        info!(
            nodes = self.graph.nodes().len(),
            connections = self.graph.connections().len(),
            "dialogue imported"
        );
    }
}
