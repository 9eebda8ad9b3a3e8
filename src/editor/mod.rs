//! Crop editor: wires host input, the gesture engine and observer callbacks.

use crate::config::CropConfig;
use crate::crop::{is_valid_rectangle, resolve_crop, to_pixel_rectangle, Rectangle};
use crate::gesture::{CropHandle, GestureEngine, GesturePhase};
use crate::host::{CropHost, CropObserver, HostElement, LoadedImage};
use crate::input::{pointer_position, PointerInput, PointerTarget};
use crate::presentation::{presentation_state, PresentationFlags, PresentationState};

/// Interactive crop selection over a displayed image.
///
/// The crop itself stays with the caller: every entry point takes the
/// current crop and reports new ones through the [`CropObserver`]. Callers
/// feed the reported crop back in on the next event.
#[derive(Debug)]
pub struct CropEditor<H, O> {
    host: H,
    observer: O,
    config: CropConfig,
    engine: GestureEngine,
    flags: PresentationFlags,
}

impl<H: CropHost, O: CropObserver> CropEditor<H, O> {
    pub fn new(host: H, observer: O, config: CropConfig) -> Self {
        let engine = GestureEngine::new(config.size_limits());
        Self {
            host,
            observer,
            config,
            engine,
            flags: PresentationFlags::default(),
        }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Applies new host options; size limits take effect on the next move.
    pub fn set_config(&mut self, config: CropConfig) {
        self.engine.set_limits(config.size_limits());
        self.config = config;
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_parts(self) -> (H, O) {
        (self.host, self.observer)
    }

    pub fn phase(&self) -> GesturePhase {
        self.engine.phase()
    }

    pub fn is_active(&self) -> bool {
        self.engine.is_active()
    }

    pub fn presentation(&self, crop: Option<&Rectangle>) -> PresentationState {
        presentation_state(self.flags, crop, self.config.rule_of_thirds)
    }

    /// Handles a pointer-down. Returns `true` when it started a gesture.
    pub fn pointer_down(
        &mut self,
        target: PointerTarget,
        event: &PointerInput,
        crop: Option<&Rectangle>,
    ) -> bool {
        match target {
            PointerTarget::Selection(handle) => self.press_selection(handle, event, crop),
            PointerTarget::Media => self.press_media(event, crop),
            PointerTarget::Other => false,
        }
    }

    fn press_selection(
        &mut self,
        handle: CropHandle,
        event: &PointerInput,
        crop: Option<&Rectangle>,
    ) -> bool {
        let Some(crop) = crop else {
            tracing::trace!("selection pressed without a crop");
            return false;
        };
        let Some(pointer) = pointer_position(event) else {
            return false;
        };
        let bounds = self.host.container_bounds();
        let selection_offset = crop
            .aspect_lock()
            .map(|_| self.host.element_offset(HostElement::Selection));
        if !self
            .engine
            .begin_on_selection(pointer, handle, crop, bounds, selection_offset)
        {
            return false;
        }
        self.gesture_started(event, false);
        true
    }

    fn press_media(&mut self, event: &PointerInput, crop: Option<&Rectangle>) -> bool {
        if self.config.keep_selection && is_valid_rectangle(crop) {
            tracing::trace!("keeping existing selection");
            return false;
        }
        let Some(pointer) = pointer_position(event) else {
            return false;
        };
        let image_offset = self.host.element_offset(HostElement::Component);
        let Some(next) = self.engine.begin_new_selection(pointer, image_offset, crop) else {
            return false;
        };
        self.gesture_started(event, true);
        self.observer.on_change(next);
        true
    }

    fn gesture_started(&mut self, event: &PointerInput, new_crop: bool) {
        self.flags = PresentationFlags {
            active: true,
            new_crop,
            selection_hidden: false,
        };
        self.host.capture_pointer();
        self.observer.on_drag_start(event);
    }

    /// Handles a page-wide pointer move and returns the computed crop.
    ///
    /// `on_change` fires only when the crop differs from `crop`.
    pub fn pointer_move(
        &mut self,
        event: &PointerInput,
        crop: Option<&Rectangle>,
    ) -> Option<Rectangle> {
        if !self.engine.is_active() {
            return None;
        }
        let pointer = pointer_position(event)?;
        let bounds = self.host.container_bounds();
        let next = self.engine.update(pointer, crop, bounds)?;
        if to_pixel_rectangle(crop, bounds).as_ref() != Some(&next) {
            self.observer.on_change(next);
        }
        Some(next)
    }

    /// Ends the gesture: `on_drag_end`, then `on_complete` with `crop`.
    pub fn pointer_up(&mut self, event: &PointerInput, crop: Option<&Rectangle>) -> bool {
        if !self.engine.finish() {
            return false;
        }
        self.flags.active = false;
        self.flags.new_crop = false;
        self.host.release_pointer();
        self.observer.on_drag_end(event);

        let bounds = self.host.container_bounds();
        let complete = crop.copied().unwrap_or_default().to_pixels(bounds);
        self.observer.on_complete(complete);
        true
    }

    /// The pointer left the page-wide tracking surface; ends the gesture.
    pub fn pointer_leave_tracked_area(
        &mut self,
        event: &PointerInput,
        crop: Option<&Rectangle>,
    ) -> bool {
        self.pointer_up(event, crop)
    }

    /// The pointer left the selection element. Hides it; tracking continues.
    pub fn pointer_leave_selection(&mut self) {
        self.flags.selection_hidden = true;
    }

    /// Drops a dangling gesture without firing callbacks.
    pub fn reset(&mut self) {
        if self.engine.is_active() {
            self.engine.reset();
            self.host.release_pointer();
        }
        self.flags = PresentationFlags::default();
    }

    /// Resolves and reports the initial crop once the image is available.
    ///
    /// Nothing is reported when `on_image_loaded` returns `false`.
    pub fn image_loaded(
        &mut self,
        image: LoadedImage,
        crop: Option<&Rectangle>,
    ) -> Option<Rectangle> {
        let resolved = resolve_crop(crop).unwrap_or_default();
        if !self.observer.on_image_loaded(&image) {
            tracing::debug!("initial crop report suppressed by observer");
            return None;
        }
        let pixel = resolved.to_pixels(self.host.container_bounds());
        self.observer.on_change(pixel);
        self.observer.on_complete(pixel);
        Some(pixel)
    }
}
