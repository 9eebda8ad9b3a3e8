//! End-to-end gesture flows through the public editor API.

use cropframe::geometry::{ContainerBounds, ElementOffset};
use cropframe::{
    CropConfig, CropEditor, CropHandle, CropHost, CropObserver, GesturePhase, HostElement,
    PointerInput, PointerTarget, Rectangle,
};

struct ImageArea {
    bounds: ContainerBounds,
    offset: ElementOffset,
}

impl CropHost for ImageArea {
    fn container_bounds(&self) -> ContainerBounds {
        self.bounds
    }

    fn element_offset(&self, _element: HostElement) -> ElementOffset {
        self.offset
    }
}

/// Stores the reported crop the way a host application would.
#[derive(Default)]
struct CropState {
    crop: Option<Rectangle>,
    completed: Vec<Rectangle>,
}

impl CropObserver for CropState {
    fn on_change(&mut self, crop: Rectangle) {
        self.crop = Some(crop);
    }

    fn on_complete(&mut self, crop: Rectangle) {
        self.completed.push(crop);
    }
}

fn editor(width: f64, height: f64, crop: Option<Rectangle>) -> CropEditor<ImageArea, CropState> {
    CropEditor::new(
        ImageArea {
            bounds: ContainerBounds::new(width, height),
            offset: ElementOffset::default(),
        },
        CropState {
            crop,
            completed: Vec::new(),
        },
        CropConfig::default(),
    )
}

fn press(editor: &mut CropEditor<ImageArea, CropState>, target: PointerTarget, x: f64, y: f64) {
    let crop = editor.observer().crop;
    assert!(editor.pointer_down(target, &PointerInput::mouse(x, y), crop.as_ref()));
}

fn drag_to(editor: &mut CropEditor<ImageArea, CropState>, x: f64, y: f64) {
    let crop = editor.observer().crop;
    editor.pointer_move(&PointerInput::mouse(x, y), crop.as_ref());
}

fn release(editor: &mut CropEditor<ImageArea, CropState>) {
    let crop = editor.observer().crop;
    assert!(editor.pointer_up(&PointerInput::mouse(0.0, 0.0), crop.as_ref()));
}

#[test]
fn new_selection_is_drawn_from_pointer_and_completed() {
    let mut editor = editor(300.0, 300.0, None);
    press(&mut editor, PointerTarget::Media, 40.0, 40.0);
    assert_eq!(editor.phase(), GesturePhase::Resizing);
    drag_to(&mut editor, 90.0, 70.0);
    release(&mut editor);

    let expected = Rectangle::pixels(40.0, 40.0, 50.0, 30.0);
    assert_eq!(editor.observer().crop, Some(expected));
    assert_eq!(editor.observer().completed, vec![expected]);
    assert_eq!(editor.phase(), GesturePhase::Idle);
}

#[test]
fn southeast_handle_resize_grows_selection() {
    let mut editor = editor(200.0, 200.0, Some(Rectangle::pixels(50.0, 50.0, 50.0, 50.0)));
    press(
        &mut editor,
        PointerTarget::Selection(CropHandle::SouthEast),
        100.0,
        100.0,
    );
    drag_to(&mut editor, 130.0, 110.0);
    release(&mut editor);
    assert_eq!(
        editor.observer().crop,
        Some(Rectangle::pixels(50.0, 50.0, 80.0, 60.0))
    );
}

#[test]
fn northwest_handle_dragged_past_opposite_corner_flips_selection() {
    let mut editor = editor(200.0, 200.0, Some(Rectangle::pixels(50.0, 50.0, 50.0, 50.0)));
    press(
        &mut editor,
        PointerTarget::Selection(CropHandle::NorthWest),
        50.0,
        50.0,
    );
    for step in [75.0, 100.0, 150.0] {
        drag_to(&mut editor, step, step);
        let crop = editor.observer().crop.expect("crop should be reported");
        assert!(crop.width >= 0.0 && crop.height >= 0.0);
    }
    release(&mut editor);
    assert_eq!(
        editor.observer().crop,
        Some(Rectangle::pixels(100.0, 100.0, 50.0, 50.0))
    );
}

#[test]
fn aspect_locked_east_resize_keeps_ratio() {
    let start = Rectangle::pixels(0.0, 0.0, 100.0, 50.0).with_aspect(2.0);
    let mut editor = editor(200.0, 200.0, Some(start));
    press(
        &mut editor,
        PointerTarget::Selection(CropHandle::East),
        100.0,
        25.0,
    );
    drag_to(&mut editor, 150.0, 25.0);
    assert_eq!(
        editor.observer().crop,
        Some(Rectangle::pixels(0.0, 0.0, 150.0, 75.0).with_aspect(2.0))
    );
}

#[test]
fn body_drag_stops_at_container_edges() {
    let mut editor = editor(200.0, 100.0, Some(Rectangle::pixels(10.0, 10.0, 40.0, 40.0)));
    press(
        &mut editor,
        PointerTarget::Selection(CropHandle::None),
        30.0,
        30.0,
    );
    assert_eq!(editor.phase(), GesturePhase::Dragging);
    drag_to(&mut editor, 500.0, 500.0);
    assert_eq!(
        editor.observer().crop,
        Some(Rectangle::pixels(160.0, 60.0, 40.0, 40.0))
    );
}

#[test]
fn second_press_during_gesture_is_ignored() {
    let mut editor = editor(200.0, 200.0, Some(Rectangle::pixels(50.0, 50.0, 50.0, 50.0)));
    press(
        &mut editor,
        PointerTarget::Selection(CropHandle::SouthEast),
        100.0,
        100.0,
    );
    let crop = editor.observer().crop;
    assert!(!editor.pointer_down(
        PointerTarget::Media,
        &PointerInput::mouse(5.0, 5.0),
        crop.as_ref()
    ));
    drag_to(&mut editor, 110.0, 110.0);
    assert_eq!(
        editor.observer().crop,
        Some(Rectangle::pixels(50.0, 50.0, 60.0, 60.0))
    );
}

#[test]
fn touch_input_uses_first_touch_point() {
    let mut editor = editor(300.0, 300.0, None);
    let touch = PointerInput::touch([
        cropframe::PagePoint::new(20.0, 30.0),
        cropframe::PagePoint::new(250.0, 250.0),
    ]);
    assert!(editor.pointer_down(PointerTarget::Media, &touch, None));
    assert_eq!(
        editor.observer().crop,
        Some(Rectangle::pixels(20.0, 30.0, 0.0, 0.0))
    );
}
