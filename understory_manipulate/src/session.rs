// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session manager: the `Idle -> Dragging -> Idle` state machine for one mode.
//!
//! ## Usage
//!
//! 1) On pointer-down over a handle, call [`SessionManager::pointer_down`].
//!    If it returns [`DownOutcome::Started`], prevent the platform default
//!    action and stop propagation.
//! 2) The manager asks the host to [`listen`](crate::PointerListeners::listen)
//!    for document pointer events. Forward each move to
//!    [`SessionManager::pointer_move`].
//! 3) When the manager asks for a frame, call [`SessionManager::frame`] from
//!    the frame callback; observers receive at most one update per frame.
//! 4) Forward pointer-up to [`SessionManager::pointer_up`]: the last pending
//!    update is flushed, then the completion hook runs.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::{fmt, mem};

use kurbo::Point;
use understory_frame_throttle::{FrameDemand, FrameThrottle};

use crate::config::ManipulateConfig;
use crate::gesture::{Gesture, PipelineError};
use crate::host::{SessionHost, SessionId};
use crate::pointer::PointerDown;
use crate::snapshot::{ElementProbe, SessionSnapshot};

/// Identifies an observer registered with [`SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of [`SessionManager::pointer_down`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownOutcome {
    /// Not a primary-button press; nothing started and the event should be
    /// left alone.
    Ignored,
    /// A session started. The host must prevent the default action and stop
    /// propagation of the pointer-down.
    Started {
        /// The new session.
        session: SessionId,
        /// The session that was still running and got torn down, if any.
        superseded: Option<SessionId>,
    },
}

struct ActiveSession<G: Gesture> {
    id: SessionId,
    handle: G::Handle,
    gesture: G,
    throttle: FrameThrottle<G::Output>,
}

enum Phase<G: Gesture> {
    Idle,
    Dragging(ActiveSession<G>),
}

type Observer<T> = Box<dyn FnMut(&T)>;

/// Runs drag sessions for one manipulation mode (move, resize or rotate).
///
/// At most one session is active. A new pointer-down supersedes the running
/// session: it is torn down without flushing and without running the
/// completion hook, and nothing it queued is emitted afterwards.
pub struct SessionManager<G: Gesture> {
    config: ManipulateConfig,
    phase: Phase<G>,
    next_session: u64,
    observers: Vec<(SubscriptionId, Observer<G::Output>)>,
    next_subscription: u64,
    on_complete: Option<Rc<dyn Fn()>>,
}

impl<G: Gesture> SessionManager<G> {
    /// Creates an idle manager.
    #[must_use]
    pub fn new(config: ManipulateConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            next_session: 0,
            observers: Vec::new(),
            next_subscription: 0,
            on_complete: None,
        }
    }

    /// Returns the configuration used for new sessions.
    #[must_use]
    pub fn config(&self) -> &ManipulateConfig {
        &self.config
    }

    /// Replaces the configuration. A running session keeps the one it started with.
    pub fn set_config(&mut self, config: ManipulateConfig) {
        self.config = config;
    }

    /// Sets the hook run once at the end of every completed session.
    pub fn set_on_complete(&mut self, on_complete: impl Fn() + 'static) {
        self.on_complete = Some(Rc::new(on_complete));
    }

    /// Registers an observer for emitted updates.
    pub fn subscribe(&mut self, observer: impl FnMut(&G::Output) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Returns the active session, if any.
    #[must_use]
    pub fn active_session(&self) -> Option<SessionId> {
        match &self.phase {
            Phase::Dragging(active) => Some(active.id),
            Phase::Idle => None,
        }
    }

    /// Returns the handle that started the active session, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<G::Handle> {
        match &self.phase {
            Phase::Dragging(active) => Some(active.handle),
            Phase::Idle => None,
        }
    }

    /// Pointer-down on `handle`.
    ///
    /// Non-primary buttons are ignored. Otherwise any running session is torn
    /// down, `probe` is read once into a [`SessionSnapshot`], and the host is
    /// asked to listen for document pointer events.
    pub fn pointer_down(
        &mut self,
        handle: G::Handle,
        down: &PointerDown,
        probe: &impl ElementProbe,
        host: &mut impl SessionHost,
    ) -> DownOutcome {
        if !down.is_primary() {
            tracing::trace!(button = ?down.button, "non-primary press ignored");
            return DownOutcome::Ignored;
        }

        let superseded = self.teardown(host);
        if let Some(old) = superseded {
            tracing::debug!(session = old.get(), "session superseded");
        }

        let snapshot = SessionSnapshot::capture(probe, down.position);
        let gesture = G::begin(handle, snapshot, down, &self.config);
        let throttle = match &self.on_complete {
            Some(hook) => {
                let hook = Rc::clone(hook);
                FrameThrottle::with_completion(move || hook())
            }
            None => FrameThrottle::new(),
        };

        let id = SessionId(self.next_session);
        self.next_session += 1;
        host.listen(id);
        tracing::debug!(session = id.get(), handle = ?handle, "session started");

        self.phase = Phase::Dragging(ActiveSession {
            id,
            handle,
            gesture,
            throttle,
        });
        DownOutcome::Started {
            session: id,
            superseded,
        }
    }

    /// Document pointer-move for `session`, in screen space.
    ///
    /// Events for any session other than the active one are ignored.
    ///
    /// # Errors
    ///
    /// If a pipeline stage fails, the session is torn down (listeners
    /// removed, completion hook not run) and the error is returned.
    pub fn pointer_move(
        &mut self,
        session: SessionId,
        position: Point,
        host: &mut impl SessionHost,
    ) -> Result<(), PipelineError> {
        let Phase::Dragging(active) = &mut self.phase else {
            return Ok(());
        };
        if active.id != session {
            tracing::trace!(session = session.get(), "stale pointer-move ignored");
            return Ok(());
        }

        match active.gesture.sample(position) {
            Ok(Some(update)) => {
                match active.throttle.offer(update) {
                    FrameDemand::Request => host.request_frame(session),
                    FrameDemand::Pending => {
                        tracing::trace!(
                            session = session.get(),
                            "sample coalesced into pending frame"
                        );
                    }
                    FrameDemand::Closed => {}
                }
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                tracing::error!(
                    session = session.get(),
                    error = %err,
                    "pipeline failed, session torn down"
                );
                self.teardown(host);
                Err(err)
            }
        }
    }

    /// Frame callback for `session`: emits the latest pending update, if any.
    ///
    /// Returns `true` if observers were notified.
    pub fn frame(&mut self, session: SessionId) -> bool {
        let Phase::Dragging(active) = &mut self.phase else {
            return false;
        };
        if active.id != session {
            return false;
        }
        match active.throttle.on_frame() {
            Some(update) => {
                notify(&mut self.observers, &update);
                true
            }
            None => false,
        }
    }

    /// Document pointer-up for `session`.
    ///
    /// Flushes the update received after the last frame, runs the completion
    /// hook, removes the listeners and returns to idle. Returns `false` if
    /// `session` is not the active session.
    pub fn pointer_up(&mut self, session: SessionId, host: &mut impl SessionHost) -> bool {
        if self.active_session() != Some(session) {
            return false;
        }
        let Phase::Dragging(mut active) = mem::replace(&mut self.phase, Phase::Idle) else {
            return false;
        };
        let observers = &mut self.observers;
        active.throttle.finish(|last| notify(observers, &last));
        host.unlisten(active.id);
        tracing::debug!(
            session = active.id.get(),
            coalesced = active.throttle.coalesced(),
            "session completed"
        );
        true
    }

    /// Tears down the active session without flushing or completing it.
    ///
    /// Returns the cancelled session, if there was one.
    pub fn cancel(&mut self, host: &mut impl SessionHost) -> Option<SessionId> {
        let cancelled = self.teardown(host);
        if let Some(id) = cancelled {
            tracing::debug!(session = id.get(), "session cancelled");
        }
        cancelled
    }

    fn teardown(&mut self, host: &mut impl SessionHost) -> Option<SessionId> {
        match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(mut active) => {
                active.throttle.cancel();
                host.unlisten(active.id);
                Some(active.id)
            }
            Phase::Idle => None,
        }
    }
}

fn notify<T>(observers: &mut [(SubscriptionId, Observer<T>)], update: &T) {
    for (_, observer) in observers.iter_mut() {
        observer(update);
    }
}

impl<G: Gesture> fmt::Debug for SessionManager<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .field("active_session", &self.active_session())
            .field("active_handle", &self.active_handle())
            .field("next_session", &self.next_session)
            .field("observers", &self.observers.len())
            .field("next_subscription", &self.next_subscription)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
