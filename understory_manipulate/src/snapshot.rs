// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element state captured once at pointer-down.

use kurbo::{Affine, Point, Size};
use understory_manipulate_geometry::{Position, rotation_of, scale_of};

/// Read access to the manipulated element, provided by the host UI layer.
///
/// A session reads the probe exactly once, at pointer-down. The values are
/// then frozen for the whole drag even if an ancestor keeps animating.
pub trait ElementProbe {
    /// Current position relative to the positioning parent, in local pixels.
    fn position(&self) -> Position;

    /// Resolved transform applied by the element and its ancestors.
    fn transform(&self) -> Affine;

    /// Size of the parent's content box, used for percent output.
    fn parent_size(&self) -> Size;

    /// Center of the element in screen space.
    fn screen_center(&self) -> Point;

    /// Cumulative rotation in degrees. Defaults to the rotation of [`transform`](Self::transform).
    fn rotation(&self) -> f64 {
        rotation_of(self.transform())
    }

    /// Effective ancestor zoom. Defaults to the scale of [`transform`](Self::transform).
    fn scale(&self) -> f64 {
        scale_of(self.transform())
    }
}

/// Immutable session context, built at pointer-down and passed to every stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSnapshot {
    /// Pointer-down position in screen space.
    pub origin: Point,
    /// Element position at pointer-down.
    pub position: Position,
    /// Element rotation at pointer-down, degrees.
    pub rotation: f64,
    /// Resolved transform at pointer-down.
    pub transform: Affine,
    /// Effective ancestor zoom at pointer-down.
    pub scale: f64,
    /// Parent content-box size at pointer-down.
    pub parent_size: Size,
    /// Element center in screen space at pointer-down.
    pub center: Point,
}

impl SessionSnapshot {
    /// Reads `probe` once and records the pointer-down position.
    #[must_use]
    pub fn capture(probe: &impl ElementProbe, origin: Point) -> Self {
        Self {
            origin,
            position: probe.position(),
            rotation: probe.rotation(),
            transform: probe.transform(),
            scale: probe.scale(),
            parent_size: probe.parent_size(),
            center: probe.screen_center(),
        }
    }
}

/// An [`ElementProbe`] backed by fixed values.
///
/// Handy for hosts that already hold the element state in plain fields, and
/// for tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticElement {
    /// Position relative to the parent.
    pub position: Position,
    /// Resolved transform.
    pub transform: Affine,
    /// Parent content-box size.
    pub parent_size: Size,
}

impl StaticElement {
    /// An untransformed element.
    #[must_use]
    pub fn new(position: Position, parent_size: Size) -> Self {
        Self {
            position,
            transform: Affine::IDENTITY,
            parent_size,
        }
    }

    /// Returns this element with `transform`.
    #[must_use]
    pub fn with_transform(self, transform: Affine) -> Self {
        Self { transform, ..self }
    }
}

impl ElementProbe for StaticElement {
    fn position(&self) -> Position {
        self.position
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn parent_size(&self) -> Size {
        self.parent_size
    }

    fn screen_center(&self) -> Point {
        self.position.center() + self.transform.translation()
    }
}
