// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-mode sample pipeline contract and the stages shared by all modes.

use core::fmt;

use kurbo::{Point, Size};
use understory_manipulate_geometry::Position;

use crate::config::{ManipulateConfig, OutputUnits};
use crate::pointer::PointerDown;
use crate::snapshot::SessionSnapshot;
use crate::units::PositionStrings;

/// A manipulation mode: turns raw pointer samples into output updates.
///
/// A gesture is built once per session from the frozen [`SessionSnapshot`]
/// and then fed every pointer-move sample in arrival order.
pub trait Gesture: Sized {
    /// Identifies which handle started the session.
    type Handle: Copy + fmt::Debug;
    /// Value emitted to observers.
    type Output: Clone + fmt::Debug + 'static;

    /// Builds the pipeline for a session that starts with `down` on `handle`.
    fn begin(
        handle: Self::Handle,
        snapshot: SessionSnapshot,
        down: &PointerDown,
        config: &ManipulateConfig,
    ) -> Self;

    /// Runs one pointer sample (screen space) through the pipeline.
    ///
    /// `Ok(None)` means the sample produced nothing new to emit.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] when a stage produces a value that cannot
    /// be rendered. The session that owns this gesture is then torn down.
    fn sample(&mut self, pointer: Point) -> Result<Option<Self::Output>, PipelineError>;
}

/// Pipeline stage names, used for error reporting and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Edge math, floor and snap of a resize.
    Resize,
    /// Aspect-ratio lock and anchor correction of a resize.
    Anchor,
    /// Translation of a move.
    Move,
    /// Angle computation of a rotate.
    Rotate,
    /// Percent/pixel conversion.
    Units,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resize => "resize",
            Self::Anchor => "anchor",
            Self::Move => "move",
            Self::Rotate => "rotate",
            Self::Units => "units",
        };
        f.write_str(name)
    }
}

/// A pipeline stage failed; fatal to the current session only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PipelineError {
    /// A stage produced NaN or an infinite coordinate.
    NonFinite {
        /// The stage that produced it.
        stage: Stage,
    },
    /// Percent output was requested but the parent content box is empty.
    DegenerateParent {
        /// Parent size captured at pointer-down.
        size: Size,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { stage } => {
                write!(f, "{stage} stage produced a non-finite value")
            }
            Self::DegenerateParent { size } => write!(
                f,
                "cannot convert to percent of a {}x{} parent",
                size.width, size.height
            ),
        }
    }
}

impl core::error::Error for PipelineError {}

/// Suppresses a value equal to the one admitted immediately before it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dedup<T> {
    last: Option<T>,
}

impl<T: Copy + PartialEq> Dedup<T> {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Returns `Some(value)` unless it equals the previously admitted value.
    pub fn admit(&mut self, value: T) -> Option<T> {
        if self.last == Some(value) {
            return None;
        }
        self.last = Some(value);
        Some(value)
    }
}

pub(crate) fn ensure_finite(stage: Stage, position: Position) -> Result<Position, PipelineError> {
    if position.is_finite() {
        Ok(position)
    } else {
        Err(PipelineError::NonFinite { stage })
    }
}

/// Final unit-conversion stage shared by move and resize.
pub(crate) fn render_position(
    position: &Position,
    units: OutputUnits,
    parent: Size,
) -> Result<PositionStrings, PipelineError> {
    if units == OutputUnits::Percent
        && !(parent.width > 0.0
            && parent.height > 0.0
            && parent.width.is_finite()
            && parent.height.is_finite())
    {
        return Err(PipelineError::DegenerateParent { size: parent });
    }
    Ok(PositionStrings::new(position, units, parent))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use kurbo::Size;
    use understory_manipulate_geometry::Position;

    use super::{Dedup, PipelineError, Stage, ensure_finite, render_position};
    use crate::config::OutputUnits;

    #[test]
    fn dedup_drops_only_consecutive_repeats() {
        let mut dedup = Dedup::new();
        assert_eq!(dedup.admit(1), Some(1));
        assert_eq!(dedup.admit(1), None);
        assert_eq!(dedup.admit(2), Some(2));
        assert_eq!(dedup.admit(1), Some(1));
    }

    #[test]
    fn non_finite_positions_are_rejected() {
        let bad = Position::new(f64::NAN, 0.0, 20.0, 20.0);
        assert_eq!(
            ensure_finite(Stage::Resize, bad),
            Err(PipelineError::NonFinite {
                stage: Stage::Resize
            })
        );
    }

    #[test]
    fn percent_needs_a_non_empty_parent() {
        let pos = Position::new(0.0, 0.0, 20.0, 20.0);
        let flat = Size::new(0.0, 100.0);
        let err = render_position(&pos, OutputUnits::Percent, flat).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert to percent of a 0x100 parent");

        // Pixel output does not look at the parent.
        assert!(render_position(&pos, OutputUnits::Pixels, Size::ZERO).is_ok());
    }
}
