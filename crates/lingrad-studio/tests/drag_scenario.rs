use lingrad_engine::coords::Vec2;
use lingrad_engine::input::{InputEvent, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent};
use lingrad_studio::geometry::GeometryError;
use lingrad_studio::gradient::GradientModel;
use lingrad_studio::interaction::{DragTarget, Endpoint, InteractionController};
use lingrad_studio::{EditorConfig, GradientEditor};

fn button(state: MouseButtonState, pos: Vec2) -> InputEvent {
    InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state,
        pos,
        modifiers: Modifiers::default(),
    })
}

#[test]
fn drag_second_stop_along_axis() {
    let mut model = GradientModel::initialize(Vec2::new(800.0, 600.0));
    let mut controller = InteractionController::default();

    assert_eq!(model.definition().start, Vec2::new(100.0, 100.0));
    assert_eq!(model.definition().end, Vec2::new(700.0, 500.0));

    let axis = model.definition().axis();
    let grab = axis.point_for_stop(0.25);
    let drop = axis.point_for_stop(0.6);

    assert_eq!(controller.mouse_down(model.definition(), grab), DragTarget::Stop(1));

    controller.mouse_drag(model.definition_mut(), drop).unwrap();
    let stops = model.definition().stops();
    assert_eq!(stops[0], 0.10);
    assert!((stops[1] - 0.6).abs() < 1e-5);
    assert_eq!(&stops[2..], &[0.75, 0.90]);

    controller.mouse_up();
    assert_eq!(controller.target(), DragTarget::None);
}

#[test]
fn degenerate_axis_recovers_after_endpoint_drag() {
    let mut model = GradientModel::initialize(Vec2::new(800.0, 600.0));
    let mut controller = InteractionController::default();

    // Collapse the axis by dragging the end point onto the start point.
    let start = model.definition().start;
    let end = model.definition().end;
    assert_eq!(
        controller.mouse_down(model.definition(), end),
        DragTarget::Endpoint(Endpoint::End)
    );
    controller.mouse_drag(model.definition_mut(), start).unwrap();
    controller.mouse_up();
    assert!(model.definition().axis().is_degenerate());

    // Every stop now sits on `start`; the first one is grabbed.
    assert_eq!(controller.mouse_down(model.definition(), start), DragTarget::Stop(0));
    assert_eq!(
        controller.mouse_drag(model.definition_mut(), Vec2::new(400.0, 300.0)),
        Err(GeometryError::DegenerateAxis)
    );
    assert_eq!(model.definition().stops()[0], 0.10);
    controller.mouse_up();

    // Pull the end point away again; stops are draggable once more.
    let mut endpoint = InteractionController::with_target(
        controller.hit_radii(),
        DragTarget::Endpoint(Endpoint::End),
    );
    endpoint.mouse_drag(model.definition_mut(), end).unwrap();
    endpoint.mouse_up();

    let axis = model.definition().axis();
    assert_eq!(controller.mouse_down(model.definition(), axis.point_for_stop(0.25)), DragTarget::Stop(1));
    controller.mouse_drag(model.definition_mut(), axis.point_for_stop(0.5)).unwrap();
    assert!((model.definition().stops()[1] - 0.5).abs() < 1e-5);
}

#[test]
fn editor_applies_input_before_animation() {
    let mut editor = GradientEditor::new(&EditorConfig::default());
    let axis = editor.model().definition().axis();

    editor.apply_input(&[
        button(MouseButtonState::Pressed, axis.point_for_stop(0.75)),
        InputEvent::PointerMoved(axis.point_for_stop(0.3)),
        button(MouseButtonState::Released, axis.point_for_stop(0.3)),
    ]);
    editor.update(2.0);

    let def = editor.model().definition();
    assert!((def.stops()[2] - 0.3).abs() < 1e-5);
    assert_eq!(def.colors()[2].g, (0.5 + 2.0f64.sin() / 2.0) as f32);
    assert!(!editor.controller().is_dragging());
}
