// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element rectangles, the minimum-size floor and corner sets.

use kurbo::{Point, Rect, Vec2};

/// Smallest width or height a manipulated element may shrink to, in local units.
pub const MIN_SIZE: f64 = 20.0;

/// An element's rectangle relative to its positioning parent, in local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Distance from the parent's left content edge.
    pub left: f64,
    /// Distance from the parent's top content edge.
    pub top: f64,
    /// Width of the element.
    pub width: f64,
    /// Height of the element.
    pub height: f64,
}

impl Position {
    /// Creates a position from its four components.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a position covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Returns the rectangle covered by this position.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }

    /// Returns the center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Returns this position moved by `delta`, keeping its size.
    #[must_use]
    pub fn translate(self, delta: Vec2) -> Self {
        Self {
            left: self.left + delta.x,
            top: self.top + delta.y,
            ..self
        }
    }

    /// Returns `width / height`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Returns this position with width and height floored to [`MIN_SIZE`],
    /// independently. `left`/`top` are untouched.
    #[must_use]
    pub fn clamp_min_size(self) -> Self {
        Self {
            width: self.width.max(MIN_SIZE),
            height: self.height.max(MIN_SIZE),
            ..self
        }
    }
}

/// Selects one of the four corners of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left.
    Nw,
    /// Top-right.
    Ne,
    /// Bottom-right.
    Se,
    /// Bottom-left.
    Sw,
}

/// The four corners of a [`Position`] after a transform has been applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    /// Transformed top-left corner.
    pub nw: Point,
    /// Transformed top-right corner.
    pub ne: Point,
    /// Transformed bottom-right corner.
    pub se: Point,
    /// Transformed bottom-left corner.
    pub sw: Point,
}

impl Corners {
    /// Returns the point for `corner`.
    #[must_use]
    pub fn get(&self, corner: Corner) -> Point {
        match corner {
            Corner::Nw => self.nw,
            Corner::Ne => self.ne,
            Corner::Se => self.se,
            Corner::Sw => self.sw,
        }
    }
}
