// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_frame_throttle --heading-base-level=0

//! Understory Frame Throttle: coalesce high-frequency samples to one per frame.
//!
//! Pointer-move events can fire far more often than the display refreshes.
//! [`FrameThrottle`] sits between such a source and expensive downstream work
//! (layout, re-render) and guarantees:
//!
//! - At most one value is handed out per frame. Values offered between two
//!   frames overwrite each other; only the most recent survives.
//! - A frame is requested from the host only when none is already pending.
//! - On [`FrameThrottle::finish`], the value received after the last frame (if
//!   any) is flushed, then the completion hook runs exactly once.
//! - After `finish` or [`FrameThrottle::cancel`], nothing is ever handed out
//!   again.
//!
//! The crate does not talk to any windowing system. The host owns the frame
//! callback (for example `requestAnimationFrame` or a winit redraw) and calls
//! [`FrameThrottle::on_frame`] from it when [`FrameThrottle::offer`] returned
//! [`FrameDemand::Request`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_frame_throttle::{FrameDemand, FrameThrottle};
//!
//! let mut throttle = FrameThrottle::new();
//!
//! // Two samples inside one frame: only the first asks for a frame.
//! assert_eq!(throttle.offer(1), FrameDemand::Request);
//! assert_eq!(throttle.offer(2), FrameDemand::Pending);
//!
//! // The frame fires and only the latest value comes out.
//! assert_eq!(throttle.on_frame(), Some(2));
//! assert_eq!(throttle.on_frame(), None);
//!
//! // A trailing sample is flushed on finish.
//! throttle.offer(3);
//! let mut flushed = Vec::new();
//! throttle.finish(|v| flushed.push(v));
//! assert_eq!(flushed, vec![3]);
//! assert_eq!(throttle.offer(4), FrameDemand::Closed);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

/// What the host should do after [`FrameThrottle::offer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameDemand {
    /// No frame was pending; the host should request one.
    Request,
    /// A frame is already pending; the value replaced any earlier one.
    Pending,
    /// The throttle has terminated and dropped the value.
    Closed,
}

/// Lifecycle of a [`FrameThrottle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Accepting values.
    #[default]
    Open,
    /// Terminated by [`FrameThrottle::finish`]; the completion hook has run.
    Finished,
    /// Torn down by [`FrameThrottle::cancel`]; the completion hook was dropped.
    Cancelled,
}

/// Last-value cache that releases at most one value per frame.
pub struct FrameThrottle<T> {
    latest: Option<T>,
    frame_pending: bool,
    lifecycle: Lifecycle,
    coalesced: u64,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl<T> FrameThrottle<T> {
    /// Creates an open throttle with no completion hook.
    #[must_use]
    pub fn new() -> Self {
        Self {
            latest: None,
            frame_pending: false,
            lifecycle: Lifecycle::Open,
            coalesced: 0,
            on_complete: None,
        }
    }

    /// Creates an open throttle that runs `on_complete` once when it finishes.
    #[must_use]
    pub fn with_completion(on_complete: impl FnOnce() + 'static) -> Self {
        let mut throttle = Self::new();
        throttle.on_complete = Some(Box::new(on_complete));
        throttle
    }

    /// Caches `value` as the latest sample.
    ///
    /// Returns [`FrameDemand::Request`] only for the first value since the
    /// last frame, so the host schedules at most one frame callback.
    pub fn offer(&mut self, value: T) -> FrameDemand {
        if self.lifecycle != Lifecycle::Open {
            return FrameDemand::Closed;
        }
        if self.latest.replace(value).is_some() {
            self.coalesced += 1;
        }
        if self.frame_pending {
            FrameDemand::Pending
        } else {
            self.frame_pending = true;
            FrameDemand::Request
        }
    }

    /// Frame boundary: takes the latest cached value, if any.
    ///
    /// Clears the pending flag so the next [`offer`](Self::offer) requests a
    /// new frame. Returns `None` once the throttle is no longer open.
    pub fn on_frame(&mut self) -> Option<T> {
        if self.lifecycle != Lifecycle::Open {
            return None;
        }
        self.frame_pending = false;
        self.latest.take()
    }

    /// Terminates the throttle.
    ///
    /// Any value received after the last frame is passed to `flush` first;
    /// then the completion hook runs. Calling `finish` again, or after
    /// [`cancel`](Self::cancel), does nothing.
    pub fn finish(&mut self, flush: impl FnOnce(T)) {
        if self.lifecycle != Lifecycle::Open {
            return;
        }
        self.lifecycle = Lifecycle::Finished;
        self.frame_pending = false;
        if let Some(last) = self.latest.take() {
            flush(last);
        }
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }

    /// Tears the throttle down without flushing or running the completion hook.
    pub fn cancel(&mut self) {
        if self.lifecycle != Lifecycle::Open {
            return;
        }
        self.lifecycle = Lifecycle::Cancelled;
        self.frame_pending = false;
        self.latest = None;
        self.on_complete = None;
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Returns `true` while values are accepted.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lifecycle == Lifecycle::Open
    }

    /// Returns `true` if a value is cached and not yet handed out.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.latest.is_some()
    }

    /// Returns `true` if a frame has been requested and has not fired yet.
    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Number of values that were overwritten before reaching a frame.
    #[must_use]
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for FrameThrottle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameThrottle")
            .field("latest", &self.latest)
            .field("frame_pending", &self.frame_pending)
            .field("lifecycle", &self.lifecycle)
            .field("coalesced", &self.coalesced)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
