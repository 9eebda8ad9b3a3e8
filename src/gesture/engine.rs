use super::phase::{next_phase, GestureEvent, GesturePhase};
use super::snapshot::GestureSnapshot;
use super::{CropHandle, HandleAxes};
use crate::config::SizeLimits;
use crate::crop::{contain_crop_anchored, AxisAnchor, CropUnit, Rectangle};
use crate::geometry::{clamp, ContainerBounds, ElementOffset, PagePoint};

/// Turns pointer-down / move / up into crop rectangles.
///
/// The engine never holds the crop itself: every call receives the caller's
/// current rectangle and returns a new one. An absent snapshot is the idle
/// state.
#[derive(Debug, Clone, Default)]
pub struct GestureEngine {
    limits: SizeLimits,
    snapshot: Option<GestureSnapshot>,
}

impl GestureEngine {
    pub fn new(limits: SizeLimits) -> Self {
        Self {
            limits,
            snapshot: None,
        }
    }

    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: SizeLimits) {
        self.limits = limits;
    }

    pub fn phase(&self) -> GesturePhase {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.phase)
            .unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn handle(&self) -> Option<CropHandle> {
        self.snapshot.as_ref().map(|snapshot| snapshot.handle)
    }

    pub fn is_drawing_new_selection(&self) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|snapshot| snapshot.new_selection)
    }

    /// Page offset of the selection box recorded when the gesture started.
    pub fn selection_offset(&self) -> Option<ElementOffset> {
        self.snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.selection_offset)
    }

    fn accepts(&self, event: GestureEvent) -> bool {
        let phase = self.phase();
        let accepted = next_phase(phase, event).is_some();
        if !accepted {
            tracing::trace!(?phase, ?event, "ignoring gesture event");
        }
        accepted
    }

    /// Starts a drag (body) or resize (handle) on an existing selection.
    ///
    /// Returns `false` when a gesture is already running.
    pub fn begin_on_selection(
        &mut self,
        pointer: PagePoint,
        handle: CropHandle,
        crop: &Rectangle,
        bounds: ContainerBounds,
        selection_offset: Option<ElementOffset>,
    ) -> bool {
        let event = if handle.is_resize() {
            GestureEvent::PressHandle
        } else {
            GestureEvent::PressBody
        };
        if !self.accepts(event) {
            return false;
        }
        if crop.has_degenerate_aspect() {
            tracing::warn!(aspect = ?crop.aspect, "crop aspect cannot lock; resizing freely");
        }

        let pixel = crop.to_pixels(bounds);
        let mut snapshot = GestureSnapshot::for_selection(pointer, handle, &pixel);
        snapshot.selection_offset = selection_offset;
        tracing::debug!(
            ord = handle.ord(),
            phase = ?snapshot.phase,
            x_inverted = snapshot.x_inverted,
            y_inverted = snapshot.y_inverted,
            start_x = snapshot.start_x,
            start_y = snapshot.start_y,
            "crop gesture started"
        );
        self.snapshot = Some(snapshot);
        true
    }

    /// Starts drawing a brand-new selection at the pointer.
    ///
    /// Returns the zero-size crop the gesture grows from, carrying over the
    /// previous crop's aspect, or `None` when a gesture is already running.
    pub fn begin_new_selection(
        &mut self,
        pointer: PagePoint,
        image_offset: ElementOffset,
        previous: Option<&Rectangle>,
    ) -> Option<Rectangle> {
        if !self.accepts(GestureEvent::PressImage) {
            return None;
        }
        let crop = Rectangle {
            x: pointer.x - image_offset.left,
            y: pointer.y - image_offset.top,
            width: 0.0,
            height: 0.0,
            unit: CropUnit::Pixel,
            aspect: previous.and_then(|previous| previous.aspect),
        };
        tracing::debug!(x = crop.x, y = crop.y, "new crop selection started");
        self.snapshot = Some(GestureSnapshot::for_new_selection(pointer, &crop));
        Some(crop)
    }

    /// Computes the crop for the pointer's new position.
    ///
    /// `None` while idle or for a non-finite pointer. The returned crop is in
    /// pixels.
    pub fn update(
        &mut self,
        pointer: PagePoint,
        crop: Option<&Rectangle>,
        bounds: ContainerBounds,
    ) -> Option<Rectangle> {
        if !self.accepts(GestureEvent::Move) || !pointer.is_finite() {
            return None;
        }
        let limits = self.limits;
        let snapshot = self.snapshot.as_mut()?;
        let current = crop.copied().unwrap_or_default().to_pixels(bounds);
        snapshot.record_pointer(pointer);

        match snapshot.phase {
            GesturePhase::Dragging => Some(drag_crop(snapshot, &current, bounds)),
            GesturePhase::Resizing => Some(resize_crop(snapshot, &current, bounds, limits)),
            GesturePhase::Idle => None,
        }
    }

    /// Ends the running gesture. Returns `false` if there was none.
    pub fn finish(&mut self) -> bool {
        if !self.accepts(GestureEvent::Release) {
            return false;
        }
        let finished = self.snapshot.take();
        tracing::debug!(
            handle = ?finished.as_ref().map(|snapshot| snapshot.handle),
            "crop gesture finished"
        );
        finished.is_some()
    }

    /// Drops any dangling gesture without reporting it.
    pub fn reset(&mut self) {
        if self.snapshot.take().is_some() {
            tracing::debug!("crop gesture reset");
        }
    }
}

fn drag_crop(snapshot: &GestureSnapshot, current: &Rectangle, bounds: ContainerBounds) -> Rectangle {
    Rectangle {
        x: clamp(
            snapshot.start_x + snapshot.x_diff,
            0.0,
            bounds.width - current.width,
        ),
        y: clamp(
            snapshot.start_y + snapshot.y_diff,
            0.0,
            bounds.height - current.height,
        ),
        ..*current
    }
}

fn resize_crop(
    snapshot: &mut GestureSnapshot,
    current: &Rectangle,
    bounds: ContainerBounds,
    limits: SizeLimits,
) -> Rectangle {
    if snapshot.x_inverted {
        snapshot.x_diff -= snapshot.start_width * 2.0;
    }
    if snapshot.y_inverted {
        snapshot.y_diff -= snapshot.start_height * 2.0;
    }

    let aspect = current.aspect_lock();
    let (width, height) = resized_dimensions(snapshot, aspect, bounds, limits);

    let x = if snapshot.x_crossed {
        current.right() - width
    } else {
        snapshot.start_x
    };
    let y = if snapshot.y_crossed {
        if snapshot.last_y_crossed == Some(false) {
            current.y - height
        } else {
            current.bottom() - height
        }
    } else {
        snapshot.start_y
    };

    let candidate = Rectangle {
        x,
        y,
        width,
        height,
        unit: CropUnit::Pixel,
        aspect: current.aspect,
    };
    let contained = contain_crop_anchored(
        &candidate,
        bounds,
        AxisAnchor::from_crossed(snapshot.x_crossed),
        AxisAnchor::from_crossed(snapshot.y_crossed),
    );

    let axes = if aspect.is_some() {
        HandleAxes::Both
    } else {
        snapshot.handle.traits().axes
    };
    let mut next = *current;
    if axes.applies_x() {
        next.x = contained.x;
        next.width = contained.width;
    }
    if axes.applies_y() {
        next.y = contained.y;
        next.height = contained.height;
    }

    snapshot.update_crossover();
    next
}

// One pass only: when both the aspect and a bound bind, width is re-derived
// from the clamped height but height is not re-clamped afterwards.
fn resized_dimensions(
    snapshot: &GestureSnapshot,
    aspect: Option<f64>,
    bounds: ContainerBounds,
    limits: SizeLimits,
) -> (f64, f64) {
    let max_width = limits.max_width.unwrap_or(bounds.width);
    let max_height = limits.max_height.unwrap_or(bounds.height);

    let mut width = snapshot.start_width + snapshot.x_diff;
    if snapshot.x_crossed {
        width = width.abs();
    }
    width = clamp(width, limits.min_width, max_width);

    let mut height = match aspect {
        Some(aspect) => width / aspect,
        None => snapshot.start_height + snapshot.y_diff,
    };
    if snapshot.y_crossed {
        height = height.abs().min(snapshot.start_y);
    }
    height = clamp(height, limits.min_height, max_height);

    if let Some(aspect) = aspect {
        width = clamp(height * aspect, 0.0, bounds.width);
    }

    (width, height)
}
