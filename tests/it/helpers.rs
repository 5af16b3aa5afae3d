//! Test helpers and builders for reducing boilerplate in tests.

use dialogueboard::types::{Answer, Connection, DialogueNode, Point};
use dialogueboard::{DialogueEditor, EditorConfig, PointerEvent};

/// Builder for editors preloaded with nodes and connections.
///
/// Node positions are world space. Connections reference nodes by their
/// index in insertion order. `build` returns the editor together with the
/// generated node ids, in insertion order.
pub struct TestEditorBuilder {
    nodes: Vec<DialogueNode>,
    connections: Vec<(usize, usize)>,
    zoom: f32,
    pan: Point,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            zoom: 1.0,
            pan: Point::ZERO,
        }
    }

    pub fn with_node(mut self, title: &str, pos: (f32, f32)) -> Self {
        self.nodes
            .push(DialogueNode::new(title, Point::new(pos.0, pos.1)));
        self
    }

    pub fn with_starter_node(mut self, title: &str, pos: (f32, f32)) -> Self {
        let mut node = DialogueNode::new(title, Point::new(pos.0, pos.1));
        node.starts_conversation = true;
        self.nodes.push(node);
        self
    }

    /// Add an answer to the most recently added node.
    pub fn with_answer(mut self, text: &str, probability: i32) -> Self {
        let node = self
            .nodes
            .last_mut()
            .expect("with_answer requires a preceding with_node");
        node.data.answers.push(Answer::new(text, probability));
        self
    }

    /// Connect two earlier nodes, by insertion index.
    pub fn with_connection(mut self, from: usize, to: usize) -> Self {
        self.connections.push((from, to));
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_pan(mut self, x: f32, y: f32) -> Self {
        self.pan = Point::new(x, y);
        self
    }

    pub fn build(self) -> (DialogueEditor, Vec<String>) {
        dialogueboard::logging::init();

        let ids: Vec<String> = self.nodes.iter().map(|n| n.id.clone()).collect();
        let connections = self
            .connections
            .iter()
            .map(|(from, to)| Connection::new(ids[*from].clone(), ids[*to].clone()))
            .collect();

        let mut editor = DialogueEditor::new(EditorConfig::default());
        editor.load_graph(self.nodes, connections);
        editor.viewport_mut().zoom = self.zoom;
        editor.viewport_mut().pan_offset = self.pan;
        (editor, ids)
    }
}

/// An empty editor with default settings.
pub fn empty_editor() -> DialogueEditor {
    dialogueboard::logging::init();
    DialogueEditor::default()
}

/// Press the primary button at window coordinates.
pub fn primary_down(editor: &mut DialogueEditor, x: f32, y: f32) {
    editor.handle_mouse_down(PointerEvent::primary(Point::new(x, y)));
}

/// Press the secondary button at window coordinates.
pub fn secondary_down(editor: &mut DialogueEditor, x: f32, y: f32) {
    editor.handle_mouse_down(PointerEvent::secondary(Point::new(x, y)));
}

/// Move the pointer and run the frame pass, as the host's display loop
/// would.
pub fn move_and_frame(editor: &mut DialogueEditor, x: f32, y: f32) {
    editor.handle_mouse_move(Point::new(x, y));
    editor.on_frame();
}

/// Screen coordinates of a point slightly inside a node's card.
pub fn point_over(editor: &DialogueEditor, node_id: &str) -> Point {
    let node = editor.graph().get_node(node_id).expect("node exists");
    let inside = node.position + Point::new(10.0, 10.0);
    editor.viewport().to_screen(inside)
}

/// Messages of all queued toasts, oldest first.
pub fn toast_messages(editor: &DialogueEditor) -> Vec<String> {
    editor.toasts().iter().map(|t| t.message.clone()).collect()
}
