use crate::crop::{is_valid_rectangle, CropUnit, Rectangle};
use crate::gesture::CropHandle;

/// Overlay state a renderer needs; carries no geometry logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub active: bool,
    pub new_crop: bool,
    pub fixed_aspect: bool,
    pub crop_invisible: bool,
    pub selection_visible: bool,
    pub selection_hidden: bool,
    pub rule_of_thirds: bool,
}

impl PresentationState {
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut classes = vec!["crop-frame"];
        if self.active {
            classes.push("crop-frame--active");
        }
        if self.new_crop {
            classes.push("crop-frame--new-crop");
        }
        if self.fixed_aspect {
            classes.push("crop-frame--fixed-aspect");
        }
        if self.crop_invisible {
            classes.push("crop-frame--crop-invisible");
        }
        if self.rule_of_thirds {
            classes.push("crop-frame--rule-of-thirds");
        }
        classes
    }

    /// Whether the selection box should be drawn right now.
    pub const fn draws_selection(&self) -> bool {
        self.selection_visible && !self.selection_hidden
    }
}

/// Inputs the editor tracks outside of the gesture engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PresentationFlags {
    pub(crate) active: bool,
    pub(crate) new_crop: bool,
    pub(crate) selection_hidden: bool,
}

pub(crate) fn presentation_state(
    flags: PresentationFlags,
    crop: Option<&Rectangle>,
    rule_of_thirds: bool,
) -> PresentationState {
    let zero_sized = crop.is_some_and(|crop| crop.width == 0.0 || crop.height == 0.0);
    PresentationState {
        active: flags.active,
        new_crop: flags.new_crop,
        fixed_aspect: crop.is_some_and(|crop| crop.aspect_lock().is_some()),
        crop_invisible: flags.active && zero_sized,
        selection_visible: is_valid_rectangle(crop),
        selection_hidden: flags.selection_hidden,
        rule_of_thirds,
    }
}

/// Position and size of the selection box in the crop's own unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionStyle {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub unit: CropUnit,
}

impl SelectionStyle {
    pub fn for_crop(crop: &Rectangle) -> Self {
        Self {
            left: crop.x,
            top: crop.y,
            width: crop.width,
            height: crop.height,
            unit: crop.unit,
        }
    }

    pub fn css(&self) -> String {
        let unit = self.unit.suffix();
        format!(
            "top: {}{unit}; left: {}{unit}; width: {}{unit}; height: {}{unit};",
            self.top, self.left, self.width, self.height
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleShape {
    /// Full-length edge bar.
    Bar,
    /// Small square grip.
    Grip,
}

/// Drag bars and grips drawn around the selection, in paint order.
pub const HANDLE_LAYOUT: [(HandleShape, CropHandle); 12] = [
    (HandleShape::Bar, CropHandle::North),
    (HandleShape::Bar, CropHandle::East),
    (HandleShape::Bar, CropHandle::South),
    (HandleShape::Bar, CropHandle::West),
    (HandleShape::Grip, CropHandle::NorthWest),
    (HandleShape::Grip, CropHandle::North),
    (HandleShape::Grip, CropHandle::NorthEast),
    (HandleShape::Grip, CropHandle::East),
    (HandleShape::Grip, CropHandle::SouthEast),
    (HandleShape::Grip, CropHandle::South),
    (HandleShape::Grip, CropHandle::SouthWest),
    (HandleShape::Grip, CropHandle::West),
];
