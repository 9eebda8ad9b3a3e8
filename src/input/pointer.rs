use crate::gesture::CropHandle;
use crate::geometry::PagePoint;

/// A raw pointer event as delivered by the host, in page coordinates.
///
/// Coordinates are optional because host input is best-effort; an event
/// without a usable position is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse {
        page_x: Option<f64>,
        page_y: Option<f64>,
    },
    Touch {
        touches: Vec<PagePoint>,
    },
}

impl PointerInput {
    pub const fn mouse(page_x: f64, page_y: f64) -> Self {
        Self::Mouse {
            page_x: Some(page_x),
            page_y: Some(page_y),
        }
    }

    pub fn touch(touches: impl IntoIterator<Item = PagePoint>) -> Self {
        Self::Touch {
            touches: touches.into_iter().collect(),
        }
    }
}

/// Where a pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The displayed image itself.
    Media,
    /// The selection box; `CropHandle::None` is its body.
    Selection(CropHandle),
    /// Anything else inside the component, such as overlay chrome.
    Other,
}

/// Page position of the event, taking the first touch point for touch input.
pub fn pointer_position(input: &PointerInput) -> Option<PagePoint> {
    let point = match input {
        PointerInput::Mouse { page_x, page_y } => PagePoint::new((*page_x)?, (*page_y)?),
        PointerInput::Touch { touches } => *touches.first()?,
    };
    point.is_finite().then_some(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_position_reads_mouse_page_coordinates() {
        assert_eq!(
            pointer_position(&PointerInput::mouse(12.0, 34.0)),
            Some(PagePoint::new(12.0, 34.0))
        );
    }

    #[test]
    fn pointer_position_prefers_first_touch_point() {
        let input = PointerInput::touch([PagePoint::new(1.0, 2.0), PagePoint::new(9.0, 9.0)]);
        assert_eq!(pointer_position(&input), Some(PagePoint::new(1.0, 2.0)));
    }

    #[test]
    fn pointer_position_drops_malformed_events() {
        assert_eq!(pointer_position(&PointerInput::touch([])), None);
        assert_eq!(
            pointer_position(&PointerInput::Mouse {
                page_x: Some(1.0),
                page_y: None,
            }),
            None
        );
        assert_eq!(pointer_position(&PointerInput::mouse(f64::NAN, 1.0)), None);
    }
}
