// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities a session borrows from the host UI layer.
//!
//! Sessions never reach for global state. Document-level listeners and frame
//! callbacks are requested through these traits, so a test can substitute a
//! recorder and drive events by hand.

/// Identifies one drag session, from pointer-down to pointer-up or supersede.
///
/// Ids grow monotonically per manager; events and frame callbacks carrying an
/// id other than the active one are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub(crate) u64);

impl SessionId {
    /// Returns the raw id.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Document-level pointer-move/pointer-up subscription.
///
/// The manager calls [`listen`](Self::listen) when a session enters the
/// dragging state and [`unlisten`](Self::unlisten) exactly once when it leaves
/// it, whether by pointer-up, supersede, cancellation or pipeline failure.
pub trait PointerListeners {
    /// Start forwarding document pointer-move and pointer-up events, tagged
    /// with `session`.
    fn listen(&mut self, session: SessionId);

    /// Stop forwarding events for `session`.
    fn unlisten(&mut self, session: SessionId);
}

/// Frame callback scheduling (`requestAnimationFrame` or a redraw request).
pub trait FrameScheduler {
    /// Ask for one frame callback; the host then calls
    /// [`SessionManager::frame`](crate::SessionManager::frame) with `session`.
    ///
    /// Called at most once per frame while a sample is pending.
    fn request_frame(&mut self, session: SessionId);
}

/// Everything a [`SessionManager`](crate::SessionManager) needs from its host.
pub trait SessionHost: PointerListeners + FrameScheduler {}

impl<T: PointerListeners + FrameScheduler> SessionHost for T {}
