// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as seen by a session.

use kurbo::Point;

/// Which pointer button was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button (or primary contact).
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
    /// Any other button, by platform index.
    Other(u16),
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Super.
        const META = 1 << 3;
    }
}

/// A pointer-down on a manipulation handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDown {
    /// Pointer position in screen space.
    pub position: Point,
    /// Pressed button.
    pub button: PointerButton,
    /// Modifiers held at press time.
    pub modifiers: Modifiers,
}

impl PointerDown {
    /// A primary-button press with no modifiers.
    #[must_use]
    pub fn primary(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns this event with `modifiers` held.
    #[must_use]
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    /// Returns this event with a different button.
    #[must_use]
    pub fn with_button(self, button: PointerButton) -> Self {
        Self { button, ..self }
    }

    /// Returns `true` for primary-button presses.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }

    /// Returns `true` if every flag in `modifier` is held.
    ///
    /// An empty `modifier` never matches, so an unset trigger disables the lock.
    #[must_use]
    pub fn holds(&self, modifier: Modifiers) -> bool {
        !modifier.is_empty() && self.modifiers.contains(modifier)
    }
}
