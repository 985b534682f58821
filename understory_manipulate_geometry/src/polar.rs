// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar pointer deltas.

use kurbo::{Point, Vec2};

use crate::snap::normalize_degrees;

/// A pointer displacement in polar form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngleAndDistance {
    /// Direction in degrees, `0` pointing right, clockwise on screen, in `[0, 360)`.
    pub angle: f64,
    /// Length of the displacement in local (unscaled) units.
    pub distance: f64,
}

impl AngleAndDistance {
    /// Projects the displacement onto x/y after rotating it by `-rotation` degrees.
    ///
    /// Passing the element's rotation gives the displacement along the
    /// element's own unrotated axes.
    #[must_use]
    pub fn to_local(self, rotation: f64) -> Vec2 {
        Vec2::from_angle((self.angle - rotation).to_radians()) * self.distance
    }

    /// Projects the displacement onto x/y without any rotation.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        self.to_local(0.0)
    }
}

/// Returns the angle of the ray from `from` to `to`, in degrees `[0, 360)`.
///
/// Screen convention: y grows downward, so a ray pointing straight down is `90`.
#[must_use]
pub fn angle_between_points(from: Point, to: Point) -> f64 {
    normalize_degrees((to - from).atan2().to_degrees())
}

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance_between_points(from: Point, to: Point) -> f64 {
    from.distance(to)
}

/// Polar delta from `from` to `to`, with the distance divided by `scale`.
///
/// `scale` is the ancestor zoom; dividing converts screen pixels back into
/// the element's local units.
#[must_use]
pub fn polar_delta(from: Point, to: Point, scale: f64) -> AngleAndDistance {
    AngleAndDistance {
        angle: angle_between_points(from, to),
        distance: distance_between_points(from, to) / scale,
    }
}
