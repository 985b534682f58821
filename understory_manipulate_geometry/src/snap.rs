// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping, rounding and angle normalization.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::position::Position;

/// Decimal places kept by [`round`].
const ROUND_FACTOR: f64 = 100.0;

/// Rounds `n` to two decimal places. Negative zero becomes zero.
#[must_use]
pub fn round(n: f64) -> f64 {
    // Adding +0.0 folds -0.0 into +0.0.
    (n * ROUND_FACTOR).round() / ROUND_FACTOR + 0.0
}

/// Rounds `value` to the nearest multiple of `step`.
#[must_use]
pub fn snap_value(value: f64, step: f64) -> f64 {
    (value / step).round() * step + 0.0
}

/// Snaps every component of `position` to the nearest multiple of `step`.
///
/// `None` leaves the position unchanged.
#[must_use]
pub fn snap_object_values(step: Option<f64>, position: Position) -> Position {
    match step {
        Some(step) => Position {
            left: snap_value(position.left, step),
            top: snap_value(position.top, step),
            width: snap_value(position.width, step),
            height: snap_value(position.height, step),
        },
        None => position,
    }
}

/// Wraps `degrees` into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    let wrapped = if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    };
    // A tiny negative input can round up to exactly 360 above.
    if wrapped >= 360.0 { 0.0 } else { wrapped + 0.0 }
}

/// Rounds `degrees` to the nearest multiple of `step` and normalizes the result.
#[must_use]
pub fn snap_degrees(degrees: f64, step: f64) -> f64 {
    normalize_degrees(snap_value(degrees, step))
}
