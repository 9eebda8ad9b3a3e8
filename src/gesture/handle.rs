/// Which part of the selection a pointer-down landed on.
///
/// `None` is the selection body (plain drag); the rest are the eight resize
/// handles, named by compass ord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CropHandle {
    #[default]
    None,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Axes a resize handle writes back from the contained candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleAxes {
    None,
    X,
    Y,
    Both,
}

impl HandleAxes {
    pub const fn applies_x(self) -> bool {
        matches!(self, Self::X | Self::Both)
    }

    pub const fn applies_y(self) -> bool {
        matches!(self, Self::Y | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleTraits {
    pub x_inverted: bool,
    pub y_inverted: bool,
    pub axes: HandleAxes,
}

impl HandleTraits {
    const fn new(x_inverted: bool, y_inverted: bool, axes: HandleAxes) -> Self {
        Self {
            x_inverted,
            y_inverted,
            axes,
        }
    }
}

impl CropHandle {
    pub const ALL: [CropHandle; 9] = [
        Self::None,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn traits(self) -> HandleTraits {
        match self {
            Self::None => HandleTraits::new(false, false, HandleAxes::None),
            Self::North => HandleTraits::new(false, true, HandleAxes::Y),
            Self::South => HandleTraits::new(false, false, HandleAxes::Y),
            Self::East => HandleTraits::new(false, false, HandleAxes::X),
            Self::West => HandleTraits::new(true, false, HandleAxes::X),
            Self::NorthEast => HandleTraits::new(false, true, HandleAxes::Both),
            Self::NorthWest => HandleTraits::new(true, true, HandleAxes::Both),
            Self::SouthEast => HandleTraits::new(false, false, HandleAxes::Both),
            Self::SouthWest => HandleTraits::new(true, false, HandleAxes::Both),
        }
    }

    pub const fn is_resize(self) -> bool {
        !matches!(self, Self::None)
    }

    pub const fn is_corner(self) -> bool {
        matches!(self.traits().axes, HandleAxes::Both)
    }

    /// The `ord` tag hosts attach to handle elements; empty for the body.
    pub const fn ord(self) -> &'static str {
        match self {
            Self::None => "",
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    /// Parses an `ord` tag. Unknown tags map to the body so a stray element
    /// inside the selection starts a plain drag.
    pub fn from_ord(ord: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|handle| handle.is_resize() && handle.ord() == ord)
            .unwrap_or(Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn west_side_handles_invert_x() {
        let inverted = CropHandle::ALL
            .into_iter()
            .filter(|handle| handle.traits().x_inverted)
            .collect::<Vec<_>>();
        assert_eq!(
            inverted,
            vec![CropHandle::West, CropHandle::NorthWest, CropHandle::SouthWest]
        );
    }

    #[test]
    fn north_side_handles_invert_y() {
        let inverted = CropHandle::ALL
            .into_iter()
            .filter(|handle| handle.traits().y_inverted)
            .collect::<Vec<_>>();
        assert_eq!(
            inverted,
            vec![CropHandle::North, CropHandle::NorthEast, CropHandle::NorthWest]
        );
    }

    #[test]
    fn edge_handles_only_affect_their_own_axis() {
        assert_eq!(CropHandle::North.traits().axes, HandleAxes::Y);
        assert_eq!(CropHandle::South.traits().axes, HandleAxes::Y);
        assert_eq!(CropHandle::East.traits().axes, HandleAxes::X);
        assert_eq!(CropHandle::West.traits().axes, HandleAxes::X);
        assert!(CropHandle::SouthWest.is_corner());
        assert!(!CropHandle::East.is_corner());
        assert!(!CropHandle::None.is_resize());
    }

    #[test]
    fn ord_round_trips_through_from_ord() {
        for handle in CropHandle::ALL {
            assert_eq!(CropHandle::from_ord(handle.ord()), handle);
        }
        assert_eq!(CropHandle::from_ord("bogus"), CropHandle::None);
    }
}
