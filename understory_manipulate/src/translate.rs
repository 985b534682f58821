// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Move pipeline: translate the element by the pointer displacement.

use kurbo::Point;
use understory_manipulate_geometry::{Position, polar_delta, snap_value};

use crate::config::{ManipulateConfig, OutputUnits};
use crate::gesture::{Dedup, Gesture, PipelineError, Stage, ensure_finite, render_position};
use crate::pointer::PointerDown;
use crate::snapshot::SessionSnapshot;
use crate::units::PositionStrings;

/// Move session pipeline.
///
/// The handle type is `()`: an element has a single move handle.
#[derive(Clone, Debug)]
pub struct MoveGesture {
    snapshot: SessionSnapshot,
    units: OutputUnits,
    snap: Option<f64>,
    dedup: Dedup<Position>,
}

impl MoveGesture {
    /// Runs every stage except unit conversion.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NonFinite`] if the translated position is not finite.
    pub fn resolve(&mut self, pointer: Point) -> Result<Option<Position>, PipelineError> {
        let snapshot = &self.snapshot;
        let delta = polar_delta(snapshot.origin, pointer, snapshot.scale).to_vec2();
        let mut moved = snapshot.position.translate(delta);
        if let Some(step) = self.snap {
            moved.left = snap_value(moved.left, step);
            moved.top = snap_value(moved.top, step);
        }
        let moved = ensure_finite(Stage::Move, moved)?;
        let admitted = self.dedup.admit(moved);
        if admitted.is_none() {
            tracing::trace!(stage = %Stage::Move, "duplicate sample dropped");
        }
        Ok(admitted)
    }
}

impl Gesture for MoveGesture {
    type Handle = ();
    type Output = PositionStrings;

    fn begin(
        _handle: (),
        snapshot: SessionSnapshot,
        _down: &PointerDown,
        config: &ManipulateConfig,
    ) -> Self {
        Self {
            snapshot,
            units: config.units,
            snap: config.snap_step(),
            dedup: Dedup::new(),
        }
    }

    fn sample(&mut self, pointer: Point) -> Result<Option<PositionStrings>, PipelineError> {
        let Some(position) = self.resolve(pointer)? else {
            return Ok(None);
        };
        render_position(&position, self.units, self.snapshot.parent_size).map(Some)
    }
}
