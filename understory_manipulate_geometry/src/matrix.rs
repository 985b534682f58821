// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine decomposition and transformed corners.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::position::{Corners, Position};
use crate::snap::normalize_degrees;

/// Rotation and per-axis scale recovered from an affine transform.
///
/// Shear is not modelled: for a transform built from rotation and
/// non-uniform scale only, `Affine::rotate(rotation) * Affine::scale_non_uniform(scale_x, scale_y)`
/// reproduces the linear part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposed {
    /// Rotation in degrees, `[0, 360)`.
    pub rotation: f64,
    /// Scale along the element's local x axis.
    pub scale_x: f64,
    /// Scale along the element's local y axis.
    pub scale_y: f64,
}

/// Decomposes the linear part of `matrix` into rotation and scale.
#[must_use]
pub fn decompose(matrix: Affine) -> Decomposed {
    let [a, b, c, d, _, _] = matrix.as_coeffs();
    let scale_x = Vec2::new(a, b).hypot();
    let scale_y = if scale_x > 0.0 {
        (matrix.determinant() / scale_x).abs()
    } else {
        Vec2::new(c, d).hypot()
    };
    Decomposed {
        rotation: normalize_degrees(b.atan2(a).to_degrees()),
        scale_x,
        scale_y,
    }
}

/// Cumulative rotation of `matrix`, in degrees `[0, 360)`.
#[must_use]
pub fn rotation_of(matrix: Affine) -> f64 {
    decompose(matrix).rotation
}

/// Effective uniform scale of `matrix`.
///
/// For non-uniform transforms this is the scale along the local x axis.
#[must_use]
pub fn scale_of(matrix: Affine) -> f64 {
    decompose(matrix).scale_x
}

/// Applies `matrix` about the center of `position` and returns the four corners.
///
/// The translation part of `matrix` is added on top, so the identity
/// transform yields the untransformed corners.
#[must_use]
pub fn corners(position: &Position, matrix: Affine) -> Corners {
    let center = position.center().to_vec2();
    let about_center = Affine::translate(center + matrix.translation())
        * matrix.with_translation(Vec2::ZERO)
        * Affine::translate(-center);

    let right = position.left + position.width;
    let bottom = position.top + position.height;
    Corners {
        nw: about_center * Point::new(position.left, position.top),
        ne: about_center * Point::new(right, position.top),
        se: about_center * Point::new(right, bottom),
        sw: about_center * Point::new(position.left, bottom),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point};

    use super::{corners, decompose, rotation_of, scale_of};
    use crate::position::Position;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn identity_decomposes_to_unit_scale() {
        let d = decompose(Affine::IDENTITY);
        assert_eq!(d.rotation, 0.0);
        assert_eq!(d.scale_x, 1.0);
        assert_eq!(d.scale_y, 1.0);
    }

    #[test]
    fn rotation_and_non_uniform_scale_round_trip() {
        let m = Affine::rotate(30_f64.to_radians()) * Affine::scale_non_uniform(2.0, 0.5);
        let d = decompose(m);
        assert!((d.rotation - 30.0).abs() < EPS);
        assert!((d.scale_x - 2.0).abs() < EPS);
        assert!((d.scale_y - 0.5).abs() < EPS);
    }

    #[test]
    fn negative_rotation_is_normalized() {
        let m = Affine::rotate((-90_f64).to_radians());
        assert!((rotation_of(m) - 270.0).abs() < EPS);
    }

    #[test]
    fn uniform_zoom_is_reported_as_scale() {
        let m = Affine::translate((40.0, 40.0)) * Affine::scale(1.5);
        assert!((scale_of(m) - 1.5).abs() < EPS);
    }

    #[test]
    fn identity_corners_match_rect() {
        let pos = Position::new(100.0, 100.0, 200.0, 100.0);
        let c = corners(&pos, Affine::IDENTITY);
        assert_eq!(c.nw, Point::new(100.0, 100.0));
        assert_eq!(c.ne, Point::new(300.0, 100.0));
        assert_eq!(c.se, Point::new(300.0, 200.0));
        assert_eq!(c.sw, Point::new(100.0, 200.0));
    }

    #[test]
    fn quarter_turn_rotates_about_center() {
        // Center (50, 25); a quarter turn maps the nw corner (-50, -25) offset to (25, -50).
        let pos = Position::new(0.0, 0.0, 100.0, 50.0);
        let c = corners(&pos, Affine::rotate(90_f64.to_radians()));
        assert!(close(c.nw, Point::new(75.0, -25.0)));
        assert!(close(c.se, Point::new(25.0, 75.0)));
    }

    #[test]
    fn translation_offsets_every_corner() {
        let pos = Position::new(0.0, 0.0, 10.0, 10.0);
        let c = corners(&pos, Affine::translate((5.0, 7.0)));
        assert_eq!(c.nw, Point::new(5.0, 7.0));
        assert_eq!(c.se, Point::new(15.0, 17.0));
    }
}
