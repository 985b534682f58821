// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotate pipeline: the drag is read as an angle around the element center.

use kurbo::Point;
use understory_manipulate_geometry::{
    angle_between_points, normalize_degrees, round, snap_degrees,
};

use crate::config::ManipulateConfig;
use crate::gesture::{Dedup, Gesture, PipelineError, Stage};
use crate::handle::RotateHandle;
use crate::pointer::PointerDown;
use crate::snapshot::SessionSnapshot;
use crate::units::RotationString;

/// Rotate session pipeline.
#[derive(Clone, Debug)]
pub struct RotateGesture {
    center: Point,
    start_angle: f64,
    start_rotation: f64,
    snap: Option<f64>,
    dedup: Dedup<f64>,
}

impl RotateGesture {
    /// New rotation in degrees `[0, 360)`, rounded for display, or `None` if
    /// it matches the previous sample.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NonFinite`] if the angle is not finite.
    pub fn resolve(&mut self, pointer: Point) -> Result<Option<f64>, PipelineError> {
        let angle = angle_between_points(self.center, pointer);
        let raw = angle - self.start_angle + self.start_rotation;
        let degrees = match self.snap {
            Some(step) => snap_degrees(raw, step),
            None => raw,
        };
        if !degrees.is_finite() {
            return Err(PipelineError::NonFinite {
                stage: Stage::Rotate,
            });
        }
        // Rounding can land on 360, so wrap after it.
        let admitted = self.dedup.admit(normalize_degrees(round(degrees)));
        if admitted.is_none() {
            tracing::trace!(stage = %Stage::Rotate, "duplicate sample dropped");
        }
        Ok(admitted)
    }
}

impl Gesture for RotateGesture {
    type Handle = RotateHandle;
    type Output = RotationString;

    fn begin(
        _handle: RotateHandle,
        snapshot: SessionSnapshot,
        _down: &PointerDown,
        config: &ManipulateConfig,
    ) -> Self {
        Self {
            center: snapshot.center,
            start_angle: angle_between_points(snapshot.center, snapshot.origin),
            start_rotation: snapshot.rotation,
            snap: config.snap_step(),
            dedup: Dedup::new(),
        }
    }

    fn sample(&mut self, pointer: Point) -> Result<Option<RotationString>, PipelineError> {
        Ok(self.resolve(pointer)?.map(RotationString::new))
    }
}
