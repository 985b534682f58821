// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize pipeline.
//!
//! Each pointer sample runs through these stages, in order:
//!
//! 1. Polar delta from the pointer-down point, divided by the ancestor zoom.
//! 2. Rotation unwind: the delta is rotated by the element's rotation so edge
//!    math happens along the element's own axes.
//! 3. Edge math ([`apply_edges`]).
//! 4. Minimum-size floor, then grid snap (the floor is re-applied so snapping
//!    can never collapse a dimension).
//! 5. Deduplication against the previous sample.
//! 6. Aspect-ratio lock, when the lock modifier was held at pointer-down
//!    ([`lock_aspect_ratio`], then [`floor_keeping_ratio`]).
//! 7. Anchor correction ([`anchor_to`]).
//! 8. Unit conversion.

use kurbo::{Affine, Point, Vec2};
use understory_manipulate_geometry::{
    MIN_SIZE, Position, corners, polar_delta, snap_object_values,
};

use crate::config::{ManipulateConfig, OutputUnits};
use crate::gesture::{Dedup, Gesture, PipelineError, Stage, ensure_finite, render_position};
use crate::handle::{Edges, ResizeHandle};
use crate::pointer::PointerDown;
use crate::snapshot::SessionSnapshot;
use crate::units::PositionStrings;

/// Applies a local-space delta to the active edges of `old`.
///
/// `left` wins over `right` and `top` over `bottom` if both are set.
#[must_use]
pub fn apply_edges(old: Position, edges: Edges, delta: Vec2) -> Position {
    let mut next = old;
    if edges.contains(Edges::LEFT) {
        next.left += delta.x;
        next.width -= delta.x;
    } else if edges.contains(Edges::RIGHT) {
        next.width += delta.x;
    }
    if edges.contains(Edges::TOP) {
        next.top += delta.y;
        next.height -= delta.y;
    } else if edges.contains(Edges::BOTTOM) {
        next.height += delta.y;
    }
    next
}

/// Forces `candidate` back to `width / height == ratio`.
///
/// A candidate that is too wide gets its height recomputed from its width;
/// one that is too tall gets its width recomputed from its height.
#[must_use]
pub fn lock_aspect_ratio(candidate: Position, ratio: f64) -> Position {
    let current = candidate.aspect_ratio();
    if current > ratio {
        Position {
            height: candidate.width / ratio,
            ..candidate
        }
    } else if current < ratio {
        Position {
            width: candidate.height * ratio,
            ..candidate
        }
    } else {
        candidate
    }
}

/// Scales both dimensions up uniformly until neither is below [`MIN_SIZE`].
#[must_use]
pub fn floor_keeping_ratio(candidate: Position) -> Position {
    if candidate.width >= MIN_SIZE && candidate.height >= MIN_SIZE {
        return candidate;
    }
    let factor = (MIN_SIZE / candidate.width).max(MIN_SIZE / candidate.height);
    Position {
        width: candidate.width * factor,
        height: candidate.height * factor,
        ..candidate
    }
}

/// Translates `candidate` so the anchor corner for `edges` stays where it
/// was on `old`, with both rectangles transformed by `matrix`.
#[must_use]
pub fn anchor_to(old: &Position, candidate: Position, edges: Edges, matrix: Affine) -> Position {
    let corner = edges.anchor_corner();
    let before = corners(old, matrix).get(corner);
    let after = corners(&candidate, matrix).get(corner);
    candidate.translate(before - after)
}

/// Resize session pipeline for one handle.
#[derive(Clone, Debug)]
pub struct ResizeGesture {
    edges: Edges,
    snapshot: SessionSnapshot,
    units: OutputUnits,
    snap: Option<f64>,
    aspect_ratio: Option<f64>,
    anchor_matrix: Affine,
    dedup: Dedup<Position>,
}

impl ResizeGesture {
    /// Edges driven by this session.
    #[must_use]
    pub fn edges(&self) -> Edges {
        self.edges
    }

    /// The locked `width / height` ratio, if the lock modifier was held.
    #[must_use]
    pub fn locked_aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    /// Pointer displacement along the element's unrotated axes.
    #[must_use]
    pub fn local_delta(&self, pointer: Point) -> Vec2 {
        let snap = &self.snapshot;
        polar_delta(snap.origin, pointer, snap.scale).to_local(snap.rotation)
    }

    /// Runs every stage except unit conversion.
    ///
    /// Returns the corrected rectangle in local pixels, or `None` if the
    /// sample collapses onto the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NonFinite`] if any stage yields NaN or infinity.
    pub fn resolve(&mut self, pointer: Point) -> Result<Option<Position>, PipelineError> {
        let old = self.snapshot.position;
        let candidate = apply_edges(old, self.edges, self.local_delta(pointer)).clamp_min_size();
        let candidate = snap_object_values(self.snap, candidate).clamp_min_size();
        let candidate = ensure_finite(Stage::Resize, candidate)?;

        let Some(candidate) = self.dedup.admit(candidate) else {
            tracing::trace!(stage = %Stage::Resize, "duplicate sample dropped");
            return Ok(None);
        };

        let candidate = match self.aspect_ratio {
            Some(ratio) => floor_keeping_ratio(lock_aspect_ratio(candidate, ratio)),
            None => candidate,
        };
        let anchored = anchor_to(&old, candidate, self.edges, self.anchor_matrix);
        ensure_finite(Stage::Anchor, anchored).map(Some)
    }
}

impl Gesture for ResizeGesture {
    type Handle = ResizeHandle;
    type Output = PositionStrings;

    fn begin(
        handle: ResizeHandle,
        snapshot: SessionSnapshot,
        down: &PointerDown,
        config: &ManipulateConfig,
    ) -> Self {
        let aspect_ratio = down
            .holds(config.aspect_lock_modifier)
            .then(|| snapshot.position.aspect_ratio());
        // Corners are compared in the parent's units, so the ancestor zoom is
        // factored out of the snapshot transform.
        let anchor_matrix = Affine::scale(snapshot.scale.recip()) * snapshot.transform;
        Self {
            edges: handle.edges(),
            snapshot,
            units: config.units,
            snap: config.snap_step(),
            aspect_ratio,
            anchor_matrix,
            dedup: Dedup::new(),
        }
    }

    fn sample(&mut self, pointer: Point) -> Result<Option<PositionStrings>, PipelineError> {
        match self.resolve(pointer)? {
            Some(position) => {
                render_position(&position, self.units, self.snapshot.parent_size).map(Some)
            }
            None => Ok(None),
        }
    }
}
