//! Canvas panning and zooming through pointer input.

use crate::helpers::{move_and_frame, primary_down, TestEditorBuilder};
use dialogueboard::types::Point;
use dialogueboard::{Modifiers, PointerEvent, WheelEvent};

#[test]
fn test_middle_drag_pans() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .build();

    editor.handle_mouse_down(PointerEvent::middle(Point::new(500.0, 400.0)));
    assert!(editor.interaction().is_panning());

    move_and_frame(&mut editor, 520.0, 430.0);
    assert_eq!(editor.viewport().pan_offset, Point::new(20.0, 30.0));

    // Release folds in the remaining motion.
    editor.handle_mouse_up(Point::new(530.0, 435.0));
    assert_eq!(editor.viewport().pan_offset, Point::new(30.0, 35.0));
    assert!(editor.interaction().is_idle());
}

#[test]
fn test_middle_press_clears_selection() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .build();

    primary_down(&mut editor, 10.0, 10.0);
    editor.handle_mouse_up(Point::new(10.0, 10.0));
    assert_eq!(editor.selected_node(), Some(&ids[0]));

    editor.handle_mouse_down(PointerEvent::middle(Point::new(10.0, 10.0)));
    assert!(editor.selected_node().is_none());
}

#[test]
fn test_alt_primary_on_empty_canvas_pans() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .build();

    let press = PointerEvent::primary(Point::new(800.0, 600.0)).with_modifiers(Modifiers::alt());
    editor.handle_mouse_down(press);
    assert!(editor.interaction().is_panning());
}

#[test]
fn test_alt_primary_on_node_still_drags() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .build();

    let press = PointerEvent::primary(Point::new(10.0, 10.0)).with_modifiers(Modifiers::alt());
    editor.handle_mouse_down(press);
    assert!(editor.interaction().is_dragging());
}

#[test]
fn test_plain_primary_on_empty_canvas_does_not_pan() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    primary_down(&mut editor, 800.0, 600.0);
    assert!(editor.interaction().is_idle());

    editor.handle_mouse_move(Point::new(900.0, 700.0));
    editor.on_frame();
    assert_eq!(editor.viewport().pan_offset, Point::ZERO);
}

#[test]
fn test_wheel_zoom_keeps_cursor_point_fixed() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_zoom(1.0)
        .with_pan(40.0, -10.0)
        .build();

    let anchor = Point::new(200.0, 100.0);
    let world_before = editor.viewport().to_world(anchor);

    editor.handle_wheel(WheelEvent {
        position: anchor,
        delta_y: -120.0,
    });

    assert!((editor.viewport().zoom - 1.05).abs() < 1e-6);
    let screen_after = editor.viewport().to_screen(world_before);
    assert!((screen_after.x - anchor.x).abs() < 1e-3);
    assert!((screen_after.y - anchor.y).abs() < 1e-3);
}

#[test]
fn test_wheel_zoom_clamps_and_deselects() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_node("A", (0.0, 0.0))
        .with_zoom(0.11)
        .build();

    primary_down(&mut editor, 1.0, 1.0);
    editor.handle_mouse_up(Point::new(1.0, 1.0));
    assert_eq!(editor.selected_node(), Some(&ids[0]));

    // Two notches down would pass the minimum; the second clamps.
    editor.handle_wheel(WheelEvent {
        position: Point::ZERO,
        delta_y: 120.0,
    });
    editor.handle_wheel(WheelEvent {
        position: Point::ZERO,
        delta_y: 120.0,
    });

    assert!((editor.viewport().zoom - 0.1).abs() < 1e-6);
    assert!(editor.selected_node().is_none());
}

#[test]
fn test_toolbar_zoom_anchors_at_viewport_center() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_pan(25.0, 35.0)
        .build();

    let size = editor.viewport().size;
    let center = Point::new(size.x / 2.0, size.y / 2.0);
    let world_before = editor.viewport().to_world(center);

    editor.zoom_in();
    assert!((editor.viewport().zoom - 1.1).abs() < 1e-6);

    let screen_after = editor.viewport().to_screen(world_before);
    assert!((screen_after.x - center.x).abs() < 1e-3);
    assert!((screen_after.y - center.y).abs() < 1e-3);

    editor.zoom_out();
    editor.reset_zoom();
    assert!((editor.viewport().zoom - 1.0).abs() < 1e-6);
}
