use super::{CropHandle, GesturePhase};
use crate::crop::Rectangle;
use crate::geometry::{ElementOffset, PagePoint};

/// State captured at pointer-down and carried through one gesture.
///
/// Start geometry and inversion never change after creation; the diff and
/// crossed-over fields are rewritten on every move.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GestureSnapshot {
    pub(crate) phase: GesturePhase,
    pub(crate) handle: CropHandle,
    pub(crate) pointer_start: PagePoint,
    pub(crate) start_x: f64,
    pub(crate) start_y: f64,
    pub(crate) start_width: f64,
    pub(crate) start_height: f64,
    pub(crate) x_inverted: bool,
    pub(crate) y_inverted: bool,
    pub(crate) x_crossed: bool,
    pub(crate) y_crossed: bool,
    pub(crate) last_y_crossed: Option<bool>,
    pub(crate) x_diff: f64,
    pub(crate) y_diff: f64,
    pub(crate) new_selection: bool,
    pub(crate) selection_offset: Option<ElementOffset>,
}

impl GestureSnapshot {
    /// Snapshot for a press on an existing selection (`crop` already in pixels).
    pub(crate) fn for_selection(pointer: PagePoint, handle: CropHandle, crop: &Rectangle) -> Self {
        let traits = handle.traits();
        let phase = if handle.is_resize() {
            GesturePhase::Resizing
        } else {
            GesturePhase::Dragging
        };
        Self {
            phase,
            handle,
            pointer_start: pointer,
            start_x: if traits.x_inverted {
                crop.right()
            } else {
                crop.x
            },
            start_y: if traits.y_inverted {
                crop.bottom()
            } else {
                crop.y
            },
            start_width: crop.width,
            start_height: crop.height,
            x_inverted: traits.x_inverted,
            y_inverted: traits.y_inverted,
            x_crossed: traits.x_inverted,
            y_crossed: traits.y_inverted,
            last_y_crossed: None,
            x_diff: 0.0,
            y_diff: 0.0,
            new_selection: false,
            selection_offset: None,
        }
    }

    /// Snapshot for a fresh zero-size selection, resized from its top-left
    /// corner without any inversion.
    pub(crate) fn for_new_selection(pointer: PagePoint, crop: &Rectangle) -> Self {
        Self {
            phase: GesturePhase::Resizing,
            handle: CropHandle::NorthWest,
            pointer_start: pointer,
            start_x: crop.x,
            start_y: crop.y,
            start_width: crop.width,
            start_height: crop.height,
            x_inverted: false,
            y_inverted: false,
            x_crossed: false,
            y_crossed: false,
            last_y_crossed: None,
            x_diff: 0.0,
            y_diff: 0.0,
            new_selection: true,
            selection_offset: None,
        }
    }

    pub(crate) fn record_pointer(&mut self, pointer: PagePoint) {
        self.x_diff = pointer.x - self.pointer_start.x;
        self.y_diff = pointer.y - self.pointer_start.y;
    }

    /// Flips an axis once its far edge has passed the near edge.
    ///
    /// Must run after the step's rectangle is computed so the next step sees
    /// this step's flags as "last".
    pub(crate) fn update_crossover(&mut self) {
        self.last_y_crossed = Some(self.y_crossed);
        if axis_crossed(self.x_crossed, self.start_width, self.x_diff) {
            self.x_crossed = !self.x_crossed;
            tracing::trace!(crossed = self.x_crossed, "x axis crossover flipped");
        }
        if axis_crossed(self.y_crossed, self.start_height, self.y_diff) {
            self.y_crossed = !self.y_crossed;
            tracing::trace!(crossed = self.y_crossed, "y axis crossover flipped");
        }
    }
}

fn axis_crossed(crossed: bool, start_dimension: f64, diff: f64) -> bool {
    let shrink = -start_dimension.abs() - diff;
    if crossed {
        shrink <= 0.0
    } else {
        shrink >= 0.0
    }
}
