use super::{AxisAnchor, Rectangle};
use crate::geometry::{clamp, ContainerBounds};

/// True when the crop has a positive, non-NaN width and height.
pub fn is_valid_rectangle(rect: Option<&Rectangle>) -> bool {
    rect.is_some_and(|rect| {
        !rect.width.is_nan() && !rect.height.is_nan() && rect.width > 0.0 && rect.height > 0.0
    })
}

fn is_given(dimension: f64) -> bool {
    dimension.is_finite() && dimension != 0.0
}

/// Completes an aspect-locked crop from whichever dimension was supplied.
///
/// The width wins when both are given. Without a usable aspect, or with
/// neither dimension, the crop comes back unchanged.
pub fn resolve_aspect(rect: &Rectangle) -> Rectangle {
    let Some(aspect) = rect.aspect_lock() else {
        return *rect;
    };
    let mut resolved = *rect;
    if is_given(rect.width) {
        resolved.height = rect.width / aspect;
    } else if is_given(rect.height) {
        resolved.width = rect.height * aspect;
    }
    resolved
}

/// Converts a percent crop to pixels; an absent crop stays absent.
pub fn to_pixel_rectangle(rect: Option<&Rectangle>, bounds: ContainerBounds) -> Option<Rectangle> {
    rect.map(|rect| rect.to_pixels(bounds))
}

/// Single entry point for keeping a crop aspect-consistent before conversion.
pub fn resolve_crop(rect: Option<&Rectangle>) -> Option<Rectangle> {
    let rect = rect?;
    if rect.has_degenerate_aspect() {
        tracing::warn!(aspect = ?rect.aspect, "ignoring non-positive or non-finite crop aspect");
    }
    Some(resolve_aspect(rect))
}

/// Converts to pixels and clips the crop into the container.
///
/// Equivalent to [`contain_crop_anchored`] with both axes anchored at their
/// start edge.
pub fn contain_crop(rect: &Rectangle, bounds: ContainerBounds) -> Rectangle {
    contain_crop_anchored(rect, bounds, AxisAnchor::Start, AxisAnchor::Start)
}

/// Converts to pixels and clips the crop into `[0, width] x [0, height]`.
///
/// Aspect-locked crops shrink proportionally to the largest box of the same
/// ratio that fits the clipped span; the anchors choose which edge of each
/// axis stays put while shrinking.
pub fn contain_crop_anchored(
    rect: &Rectangle,
    bounds: ContainerBounds,
    x_anchor: AxisAnchor,
    y_anchor: AxisAnchor,
) -> Rectangle {
    let pixel = rect.to_pixels(bounds);
    let (left, right) = clip_span(pixel.x, pixel.width, bounds.width);
    let (top, bottom) = clip_span(pixel.y, pixel.height, bounds.height);
    let clipped_width = right - left;
    let clipped_height = bottom - top;

    let (width, height) = match pixel.aspect_lock() {
        Some(aspect) => {
            let width = clipped_width.min(clipped_height * aspect);
            (width, width / aspect)
        }
        None => (clipped_width, clipped_height),
    };

    let x = match x_anchor {
        AxisAnchor::Start => left,
        AxisAnchor::End => right - width,
    };
    let y = match y_anchor {
        AxisAnchor::Start => top,
        AxisAnchor::End => bottom - height,
    };

    Rectangle {
        x,
        y,
        width,
        height,
        ..pixel
    }
}

fn clip_span(start: f64, length: f64, limit: f64) -> (f64, f64) {
    let limit = limit.max(0.0);
    let clipped_start = clamp(start, 0.0, limit);
    let clipped_end = clamp(start + length, 0.0, limit).max(clipped_start);
    (clipped_start, clipped_end)
}
