// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_manipulate_geometry --heading-base-level=0

//! Understory Manipulate Geometry: the math behind move/resize/rotate handles.
//!
//! This crate provides small, pure helpers for interpreting pointer drags on a
//! rectangular element that may be rotated and scaled by itself or by its
//! ancestors. It focuses on:
//! - Polar pointer deltas ([`AngleAndDistance`]) and how to unwind a rotation
//!   from them to get a displacement in the element's local axes.
//! - Decomposing a resolved transform ([`kurbo::Affine`]) into a rotation and
//!   per-axis scale factors.
//! - The four transformed corners of a [`Position`], used to keep the anchor
//!   corner of a resize visually fixed.
//! - Grid/angle snapping and display rounding.
//!
//! It does **not** own any element tree, event source or rendering backend.
//! Callers read the element's state (position, transform) from their own UI
//! layer and feed it in.
//!
//! ## Unwinding a rotation
//!
//! ```rust
//! use kurbo::Point;
//! use understory_manipulate_geometry::polar_delta;
//!
//! // A purely rightward screen drag of 10px, no ancestor zoom.
//! let delta = polar_delta(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
//! assert_eq!(delta.angle, 0.0);
//! assert_eq!(delta.distance, 10.0);
//!
//! // With the element rotated by 90°, that drag runs along the local y axis.
//! let local = delta.to_local(90.0);
//! assert!(local.x.abs() < 1e-9);
//! assert!((local.y + 10.0).abs() < 1e-9);
//! ```
//!
//! ## Corners under a transform
//!
//! ```rust
//! use kurbo::Affine;
//! use understory_manipulate_geometry::{corners, Position};
//!
//! let position = Position::new(0.0, 0.0, 100.0, 50.0);
//! let c = corners(&position, Affine::IDENTITY);
//! assert_eq!(c.se, kurbo::Point::new(100.0, 50.0));
//! ```
//!
//! ## Conventions
//!
//! - Angles are in degrees, `0` points right and angles grow clockwise on
//!   screen (y grows downward). Results are normalized to `[0, 360)`.
//! - Transforms are applied about the element's center, matching the CSS
//!   default `transform-origin`.
//!
//! This crate is `no_std`.

#![no_std]

mod matrix;
mod polar;
mod position;
mod snap;

pub use matrix::{Decomposed, corners, decompose, rotation_of, scale_of};
pub use polar::{AngleAndDistance, angle_between_points, distance_between_points, polar_delta};
pub use position::{Corner, Corners, MIN_SIZE, Position};
pub use snap::{normalize_degrees, round, snap_degrees, snap_object_values, snap_value};
