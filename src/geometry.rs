/// Shared coordinate primitives used by the crop, gesture and host modules.

/// A pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Rendered size of the image display area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerBounds {
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left page offset of a displayed element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementOffset {
    pub left: f64,
    pub top: f64,
}

impl ElementOffset {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Bounds `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics when `min > max`; the upper bound
/// wins in that case.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_value_into_range() {
        assert_eq!(clamp(-4.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(4.0, 0.0, 10.0), 4.0);
        assert_eq!(clamp(14.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_prefers_upper_bound_when_range_is_inverted() {
        assert_eq!(clamp(5.0, 10.0, 2.0), 2.0);
    }

    #[test]
    fn page_point_rejects_non_finite_coordinates() {
        assert!(PagePoint::new(1.0, 2.0).is_finite());
        assert!(!PagePoint::new(f64::NAN, 2.0).is_finite());
        assert!(!PagePoint::new(1.0, f64::INFINITY).is_finite());
    }
}
