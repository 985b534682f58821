// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_manipulate --heading-base-level=0

//! Understory Manipulate: move, resize and rotate sessions for UI elements.
//!
//! This crate turns a stream of raw pointer events into style updates for a
//! rectangular element that may be rotated and zoomed by itself or by its
//! ancestors. Each manipulation mode is a [`Gesture`]:
//!
//! - [`MoveGesture`]: translate by the pointer displacement.
//! - [`ResizeGesture`]: drag one of eight [`ResizeHandle`]s, keeping the
//!   opposite corner visually fixed, with an optional aspect-ratio lock.
//! - [`RotateGesture`]: read the drag as an angle around the element center.
//!
//! A [`SessionManager`] runs one gesture at a time through the
//! `Idle -> Dragging -> Idle` lifecycle. It coalesces samples to at most one
//! emission per frame, flushes the last sample on pointer-up and then runs a
//! completion hook. A second pointer-down supersedes the running session.
//!
//! Everything host specific is behind small traits: [`ElementProbe`] reads the
//! element at pointer-down, [`PointerListeners`] attaches document listeners
//! and [`FrameScheduler`] requests frame callbacks.
//!
//! ## Resizing from the bottom-right handle
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use kurbo::{Point, Size};
//! use understory_manipulate::{
//!     DownOutcome, FrameScheduler, ManipulateConfig, OutputUnits, PointerDown,
//!     PointerListeners, Position, ResizeHandle, ResizeSessions, SessionId, StaticElement,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     frames: Vec<SessionId>,
//! }
//!
//! impl PointerListeners for Host {
//!     fn listen(&mut self, _: SessionId) {}
//!     fn unlisten(&mut self, _: SessionId) {}
//! }
//!
//! impl FrameScheduler for Host {
//!     fn request_frame(&mut self, session: SessionId) {
//!         self.frames.push(session);
//!     }
//! }
//!
//! let element = StaticElement::new(
//!     Position::new(0.0, 0.0, 100.0, 100.0),
//!     Size::new(400.0, 400.0),
//! );
//! let mut host = Host::default();
//! let mut sessions = ResizeSessions::new(
//!     ManipulateConfig::default().with_units(OutputUnits::Pixels),
//! );
//!
//! let widths = Rc::new(RefCell::new(Vec::new()));
//! let sink = widths.clone();
//! sessions.subscribe(move |update| sink.borrow_mut().push(update.width.clone()));
//!
//! let down = PointerDown::primary(Point::new(200.0, 200.0));
//! let DownOutcome::Started { session, .. } =
//!     sessions.pointer_down(ResizeHandle::SE, &down, &element, &mut host)
//! else {
//!     unreachable!("primary presses start a session");
//! };
//!
//! sessions.pointer_move(session, Point::new(250.0, 240.0), &mut host).unwrap();
//! sessions.pointer_up(session, &mut host);
//!
//! assert_eq!(*widths.borrow(), ["150px"]);
//! ```
//!
//! ## Conventions
//!
//! Pointer positions are in screen space. Positions are local pixels relative
//! to the positioning parent. Angles are degrees in `[0, 360)`, growing
//! clockwise on screen. See [`understory_manipulate_geometry`] for the
//! underlying math.
//!
//! This crate is `no_std` and uses `alloc`. Logging goes through `tracing`.

#![no_std]

extern crate alloc;

mod config;
mod gesture;
mod handle;
mod host;
mod pointer;
mod resize;
mod rotate;
mod session;
mod snapshot;
mod translate;
mod units;

pub use understory_manipulate_geometry::{self as geometry, Position};

pub use config::{InvalidSnapStep, ManipulateConfig, OutputUnits, SnapStep};
pub use gesture::{Dedup, Gesture, PipelineError, Stage};
pub use handle::{Edges, ResizeHandle, RotateHandle};
pub use host::{FrameScheduler, PointerListeners, SessionHost, SessionId};
pub use pointer::{Modifiers, PointerButton, PointerDown};
pub use resize::{ResizeGesture, anchor_to, apply_edges, floor_keeping_ratio, lock_aspect_ratio};
pub use rotate::RotateGesture;
pub use session::{DownOutcome, SessionManager, SubscriptionId};
pub use snapshot::{ElementProbe, SessionSnapshot, StaticElement};
pub use translate::MoveGesture;
pub use units::{PositionStrings, RotationString};

/// Session manager for move drags.
pub type MoveSessions = SessionManager<MoveGesture>;

/// Session manager for resize drags.
pub type ResizeSessions = SessionManager<ResizeGesture>;

/// Session manager for rotate drags.
pub type RotateSessions = SessionManager<RotateGesture>;
