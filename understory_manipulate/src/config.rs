// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration supplied by the owning component.

use core::fmt;

use crate::pointer::Modifiers;

/// Units used for emitted position strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputUnits {
    /// Percent of the parent's content box (`width`/`left` against its
    /// width, `height`/`top` against its height).
    #[default]
    Percent,
    /// Rounded local pixels.
    Pixels,
}

/// Error returned when a snap step is not a positive, finite number.
#[derive(Clone, Copy, PartialEq)]
pub struct InvalidSnapStep {
    /// The rejected step.
    pub step: f64,
}

impl fmt::Debug for InvalidSnapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidSnapStep {{ step: {:?} }}", self.step)
    }
}

impl fmt::Display for InvalidSnapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "snap step must be positive and finite, got {}",
            self.step
        )
    }
}

impl core::error::Error for InvalidSnapStep {}

/// A validated grid (move/resize) or angular (rotate) snap increment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapStep(f64);

impl SnapStep {
    /// Validates `step`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSnapStep`] if `step` is zero, negative, NaN or infinite.
    pub fn new(step: f64) -> Result<Self, InvalidSnapStep> {
        if step.is_finite() && step > 0.0 {
            Ok(Self(step))
        } else {
            Err(InvalidSnapStep { step })
        }
    }

    /// Returns the increment.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Per-manager configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManipulateConfig {
    /// Percent or pixel output for move/resize.
    pub units: OutputUnits,
    /// Optional snap increment, in local pixels or degrees.
    pub snap: Option<SnapStep>,
    /// Modifiers that, held at pointer-down, lock the aspect ratio of a resize.
    pub aspect_lock_modifier: Modifiers,
}

impl Default for ManipulateConfig {
    fn default() -> Self {
        Self {
            units: OutputUnits::Percent,
            snap: None,
            aspect_lock_modifier: Modifiers::SHIFT,
        }
    }
}

impl ManipulateConfig {
    /// Returns this configuration with `units`.
    #[must_use]
    pub fn with_units(self, units: OutputUnits) -> Self {
        Self { units, ..self }
    }

    /// Returns this configuration with a snap increment (or none).
    #[must_use]
    pub fn with_snap(self, snap: Option<SnapStep>) -> Self {
        Self { snap, ..self }
    }

    /// Returns this configuration with a different aspect-lock modifier.
    #[must_use]
    pub fn with_aspect_lock_modifier(self, modifier: Modifiers) -> Self {
        Self {
            aspect_lock_modifier: modifier,
            ..self
        }
    }

    /// Raw snap increment, if any.
    #[must_use]
    pub fn snap_step(&self) -> Option<f64> {
        self.snap.map(SnapStep::get)
    }
}
