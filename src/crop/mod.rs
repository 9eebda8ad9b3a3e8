//! Crop rectangle model and the pure geometry helpers built around it.

mod helpers;

use serde::{Deserialize, Serialize};

use crate::geometry::ContainerBounds;

pub use helpers::{
    contain_crop, contain_crop_anchored, is_valid_rectangle, resolve_aspect, resolve_crop,
    to_pixel_rectangle,
};

/// Tolerance used when comparing aspect-derived dimensions.
pub const ASPECT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CropUnit {
    #[serde(rename = "px")]
    #[default]
    Pixel,
    #[serde(rename = "%")]
    Percent,
}

impl CropUnit {
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pixel => "px",
            Self::Percent => "%",
        }
    }
}

/// A crop region over the displayed image.
///
/// Missing fields deserialize to zero, so `{"aspect": 1.5, "width": 40, "unit": "%"}`
/// is a valid partial crop that [`resolve_crop`] can complete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub unit: CropUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect: Option<f64>,
}

impl Rectangle {
    pub const fn pixels(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            unit: CropUnit::Pixel,
            aspect: None,
        }
    }

    pub const fn percent(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            unit: CropUnit::Percent,
            aspect: None,
        }
    }

    pub const fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Returns the aspect ratio when it can actually lock the rectangle.
    ///
    /// Zero, negative and non-finite ratios are treated as "no lock".
    pub fn aspect_lock(&self) -> Option<f64> {
        self.aspect
            .filter(|aspect| aspect.is_finite() && *aspect > 0.0)
    }

    /// True when an aspect was supplied but cannot be used as a lock.
    pub fn has_degenerate_aspect(&self) -> bool {
        self.aspect.is_some() && self.aspect_lock().is_none()
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Converts to pixel units against the container; pixel rectangles are returned as-is.
    pub fn to_pixels(&self, bounds: ContainerBounds) -> Self {
        match self.unit {
            CropUnit::Pixel => *self,
            CropUnit::Percent => Self {
                x: self.x * bounds.width / 100.0,
                y: self.y * bounds.height / 100.0,
                width: self.width * bounds.width / 100.0,
                height: self.height * bounds.height / 100.0,
                unit: CropUnit::Pixel,
                aspect: self.aspect,
            },
        }
    }
}

/// Which edge of an axis stays fixed when containment has to shrink a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisAnchor {
    /// Left or top edge.
    #[default]
    Start,
    /// Right or bottom edge.
    End,
}

impl AxisAnchor {
    pub const fn from_crossed(crossed: bool) -> Self {
        if crossed {
            Self::End
        } else {
            Self::Start
        }
    }
}
