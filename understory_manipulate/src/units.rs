// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output-boundary conversion to unit-suffixed strings.

use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::Size;
use understory_manipulate_geometry::{Position, normalize_degrees, round};

use crate::config::OutputUnits;

/// A [`Position`] rendered with unit suffixes, ready to hand to a style layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PositionStrings {
    /// `left`, e.g. `"12.5%"` or `"40px"`.
    pub left: String,
    /// `top`.
    pub top: String,
    /// `width`.
    pub width: String,
    /// `height`.
    pub height: String,
}

impl PositionStrings {
    /// Renders `position` in `units`, using `parent` for percentages.
    #[must_use]
    pub fn new(position: &Position, units: OutputUnits, parent: Size) -> Self {
        match units {
            OutputUnits::Percent => Self::percent(position, parent),
            OutputUnits::Pixels => Self::pixels(position),
        }
    }

    /// Rounded pixel strings.
    #[must_use]
    pub fn pixels(position: &Position) -> Self {
        Self {
            left: px(position.left),
            top: px(position.top),
            width: px(position.width),
            height: px(position.height),
        }
    }

    /// Percent-of-parent strings.
    ///
    /// Horizontal fields divide by `parent.width`, vertical ones by
    /// `parent.height`. The parent is expected to have a non-zero size.
    #[must_use]
    pub fn percent(position: &Position, parent: Size) -> Self {
        Self {
            left: percent(position.left, parent.width),
            top: percent(position.top, parent.height),
            width: percent(position.width, parent.width),
            height: percent(position.height, parent.height),
        }
    }
}

/// A rotation rendered with a `deg` suffix, keeping the rounded value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotationString {
    degrees: f64,
    text: String,
}

impl RotationString {
    /// Renders `degrees`, rounded and wrapped into `[0, 360)`.
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        let degrees = normalize_degrees(round(degrees));
        Self {
            degrees,
            text: format!("{degrees}deg"),
        }
    }

    /// Returns the rendered string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the rounded rotation in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }
}

impl fmt::Display for RotationString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `value` as a percentage of `extent`.
fn percent_of(value: f64, extent: f64) -> f64 {
    value / extent * 100.0
}

fn px(value: f64) -> String {
    format!("{}px", round(value))
}

fn percent(value: f64, extent: f64) -> String {
    format!("{}%", round(percent_of(value, extent)))
}
