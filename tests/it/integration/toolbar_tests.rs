//! Toolbar-driven operations: adding, cloning, deleting nodes.

use crate::helpers::{empty_editor, primary_down, TestEditorBuilder};
use dialogueboard::types::Point;

#[test]
fn test_add_node_spawns_near_viewport_third() {
    let mut editor = empty_editor();
    let id = editor.add_node();

    // Default viewport is 1280x800 with no pan at zoom 1: a third of it
    // is (426.67, 266.67), jittered by up to 25 per axis.
    let node = editor.graph().get_node(&id).unwrap();
    assert!((node.position.x - 1280.0 / 3.0).abs() <= 25.0 + 1e-3);
    assert!((node.position.y - 800.0 / 3.0).abs() <= 25.0 + 1e-3);
    assert_eq!(node.title, "Question Node");
}

#[test]
fn test_add_node_accounts_for_pan_and_zoom() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_zoom(2.0)
        .with_pan(100.0, -60.0)
        .build();

    let id = editor.add_node();
    let node = editor.graph().get_node(&id).unwrap();

    // Screen target (426.67 +- 25, 266.67 +- 25) mapped through the view.
    let expected_x = (1280.0 / 3.0 - 100.0) / 2.0;
    let expected_y = (800.0 / 3.0 + 60.0) / 2.0;
    assert!((node.position.x - expected_x).abs() <= 25.0 / 2.0 + 1e-3);
    assert!((node.position.y - expected_y).abs() <= 25.0 / 2.0 + 1e-3);
}

#[test]
fn test_added_nodes_do_not_stack_exactly() {
    let mut editor = empty_editor();
    let a = editor.add_node();
    let b = editor.add_node();

    let pa = editor.graph().get_node(&a).unwrap().position;
    let pb = editor.graph().get_node(&b).unwrap().position;
    // Jitter makes an exact overlap vanishingly unlikely.
    assert!(pa != pb);
}

#[test]
fn test_clone_selects_copy() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node("Intro", (10.0, 20.0))
        .build();

    editor.clone_node(&ids[0]);

    let clone_id = editor.selected_node().cloned().unwrap();
    assert_ne!(clone_id, ids[0]);
    let clone = editor.graph().get_node(&clone_id).unwrap();
    assert_eq!(clone.title, "Intro (Copy)");
    assert_eq!(clone.position, Point::new(60.0, 70.0));
}

#[test]
fn test_clone_with_stale_id_does_nothing() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_node("Intro", (0.0, 0.0))
        .build();

    editor.clone_node("stale");
    assert_eq!(editor.graph().nodes().len(), 1);
    assert!(editor.toasts().is_empty());
}

#[test]
fn test_delete_clears_selection_and_cascades() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .with_node("B", (400.0, 0.0))
        .with_connection(0, 1)
        .build();

    primary_down(&mut editor, 10.0, 10.0);
    editor.handle_mouse_up(Point::new(10.0, 10.0));
    assert_eq!(editor.selected_node(), Some(&ids[0]));

    editor.delete_node(&ids[0]);

    assert!(editor.selected_node().is_none());
    assert_eq!(editor.graph().nodes().len(), 1);
    assert!(editor.graph().connections().is_empty());
}

#[test]
fn test_select_node_by_id() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .build();

    assert!(editor.select_node(&ids[0]));
    assert_eq!(editor.selected_node(), Some(&ids[0]));

    assert!(!editor.select_node("stale"));
    assert_eq!(editor.selected_node(), Some(&ids[0]));

    editor.clear_selection();
    assert!(editor.selected_node().is_none());
}

#[test]
fn test_delete_of_other_node_keeps_selection() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .with_node("B", (400.0, 0.0))
        .build();

    primary_down(&mut editor, 10.0, 10.0);
    editor.handle_mouse_up(Point::new(10.0, 10.0));

    editor.delete_node(&ids[1]);
    assert_eq!(editor.selected_node(), Some(&ids[0]));
}
