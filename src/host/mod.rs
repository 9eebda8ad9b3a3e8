//! Boundary contracts between the crop editor and the embedding host.

use crate::crop::Rectangle;
use crate::geometry::{ContainerBounds, ElementOffset};
use crate::input::PointerInput;

/// Elements whose page offset the editor may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostElement {
    /// The component wrapping the displayed image.
    Component,
    /// The selection box drawn over the image.
    Selection,
}

/// Host environment queried and driven by the editor.
pub trait CropHost {
    /// Current rendered size of the image display area.
    fn container_bounds(&self) -> ContainerBounds;

    /// Top-left page offset of `element`; see [`page_offset`].
    fn element_offset(&self, element: HostElement) -> ElementOffset;

    /// Start delivering move/up events from the whole page, not only the element.
    fn capture_pointer(&mut self) {}

    /// Stop the page-wide delivery started by [`CropHost::capture_pointer`].
    fn release_pointer(&mut self) {}
}

/// Callbacks the editor fires. All calls are synchronous.
pub trait CropObserver {
    /// Every geometry-affecting step, with the crop in pixels.
    fn on_change(&mut self, crop: Rectangle);

    /// Once per gesture at pointer-up, after [`CropObserver::on_drag_end`].
    fn on_complete(&mut self, _crop: Rectangle) {}

    fn on_drag_start(&mut self, _event: &PointerInput) {}

    fn on_drag_end(&mut self, _event: &PointerInput) {}

    /// Returning `false` suppresses the initial change/complete report.
    fn on_image_loaded(&mut self, _image: &LoadedImage) -> bool {
        true
    }
}

/// Natural size of an image once the host has it available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn bounds(self) -> ContainerBounds {
        ContainerBounds::new(f64::from(self.width), f64::from(self.height))
    }
}

impl From<&image::DynamicImage> for LoadedImage {
    fn from(image: &image::DynamicImage) -> Self {
        Self::new(image.width(), image.height())
    }
}

/// Viewport-relative bounding box origin of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingOrigin {
    pub left: f64,
    pub top: f64,
}

/// Page scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Border offset of the document root element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentClientOffset {
    pub left: f64,
    pub top: f64,
}

/// Page offset of an element: bounding box plus scroll, minus the document's
/// client border.
pub fn page_offset(
    bounding: BoundingOrigin,
    scroll: ScrollOffset,
    client: DocumentClientOffset,
) -> ElementOffset {
    ElementOffset::new(
        bounding.left + scroll.x - client.left,
        bounding.top + scroll.y - client.top,
    )
}
