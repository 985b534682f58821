// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize and rotate handles.

use understory_manipulate_geometry::Corner;

bitflags::bitflags! {
    /// Edges moved by a resize handle.
    ///
    /// Corner handles set two adjacent edges, edge handles set one.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Top edge: moves `top`, shrinks `height`.
        const TOP = 1 << 0;
        /// Right edge: grows `width`.
        const RIGHT = 1 << 1;
        /// Bottom edge: grows `height`.
        const BOTTOM = 1 << 2;
        /// Left edge: moves `left`, shrinks `width`.
        const LEFT = 1 << 3;
    }
}

impl Edges {
    /// The corner that stays visually fixed while these edges move.
    ///
    /// The choice depends only on the edge flags, not on the element's
    /// rotation.
    #[must_use]
    pub fn anchor_corner(self) -> Corner {
        if self.contains(Self::BOTTOM | Self::LEFT) {
            Corner::Ne
        } else if self.contains(Self::TOP | Self::RIGHT) {
            Corner::Sw
        } else if self.intersects(Self::TOP | Self::LEFT) {
            Corner::Se
        } else {
            Corner::Nw
        }
    }
}

/// One of the eight resize handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// Top edge.
    N,
    /// Top-right corner.
    NE,
    /// Right edge.
    E,
    /// Bottom-right corner.
    SE,
    /// Bottom edge.
    S,
    /// Bottom-left corner.
    SW,
    /// Left edge.
    W,
    /// Top-left corner.
    NW,
}

impl ResizeHandle {
    /// All handles, clockwise from the top edge.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Edges moved by this handle.
    #[must_use]
    pub fn edges(self) -> Edges {
        match self {
            Self::N => Edges::TOP,
            Self::NE => Edges::TOP | Edges::RIGHT,
            Self::E => Edges::RIGHT,
            Self::SE => Edges::BOTTOM | Edges::RIGHT,
            Self::S => Edges::BOTTOM,
            Self::SW => Edges::BOTTOM | Edges::LEFT,
            Self::W => Edges::LEFT,
            Self::NW => Edges::TOP | Edges::LEFT,
        }
    }
}

/// One of the four rotate handles.
///
/// All four behave the same; the angle is measured from the element center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotateHandle {
    /// Top-left corner.
    Nw,
    /// Top-right corner.
    Ne,
    /// Bottom-right corner.
    Se,
    /// Bottom-left corner.
    Sw,
}
