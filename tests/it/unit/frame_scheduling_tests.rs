//! Frame-coalesced move processing through the editor surface.

use crate::helpers::{primary_down, TestEditorBuilder};
use dialogueboard::types::Point;

#[test]
fn test_moves_ignored_without_active_gesture() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .build();

    assert!(!editor.handle_mouse_move(Point::new(50.0, 50.0)));
    editor.on_frame();
    assert!(editor.drag_ghost().is_none());
}

#[test]
fn test_move_burst_coalesces_to_latest() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .build();

    primary_down(&mut editor, 10.0, 10.0);

    // Only the first move of a burst asks for a frame.
    assert!(editor.handle_mouse_move(Point::new(20.0, 20.0)));
    assert!(!editor.handle_mouse_move(Point::new(30.0, 30.0)));
    assert!(!editor.handle_mouse_move(Point::new(40.0, 40.0)));

    editor.on_frame();

    // Grab offset was (10, 10), so the ghost lands at the last move
    // minus it.
    let ghost = editor.drag_ghost().unwrap();
    assert_eq!(ghost.position, Point::new(30.0, 30.0));

    // After the pass a new move needs a new frame.
    assert!(editor.handle_mouse_move(Point::new(50.0, 50.0)));
}

#[test]
fn test_frame_without_pending_move_is_noop() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node("A", (100.0, 100.0))
        .build();

    primary_down(&mut editor, 110.0, 110.0);
    editor.on_frame();

    // Ghost stays where the press created it.
    let ghost = editor.drag_ghost().unwrap();
    assert_eq!(ghost.node_id, ids[0]);
    assert_eq!(ghost.position, Point::new(100.0, 100.0));
}

#[test]
fn test_release_discards_buffered_move() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .build();

    primary_down(&mut editor, 10.0, 10.0);
    editor.handle_mouse_move(Point::new(200.0, 200.0));
    editor.handle_mouse_up(Point::new(60.0, 60.0));

    // Commit used the release coordinates, not the buffered move.
    let committed = editor.graph().get_node(&ids[0]).unwrap().position;
    assert_eq!(committed, Point::new(50.0, 50.0));

    // The stale buffer does not leak into a later frame.
    editor.on_frame();
    assert!(editor.drag_ghost().is_none());
    let after = editor.graph().get_node(&ids[0]).unwrap().position;
    assert_eq!(after, Point::new(50.0, 50.0));
}
