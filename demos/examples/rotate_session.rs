// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotate and supersede.
//!
//! Sweep a rotate handle around an element with 15° snapping, then start a
//! second session mid-drag to show that the first one is dropped without a
//! flush or completion.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example rotate_session`

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_manipulate::{
    DownOutcome, FrameScheduler, ManipulateConfig, PointerDown, PointerListeners, Position,
    RotateHandle, RotateSessions, SessionId, SnapStep, StaticElement,
};

#[derive(Debug, Default)]
struct Host {
    queued_frames: Vec<SessionId>,
}

impl PointerListeners for Host {
    fn listen(&mut self, _session: SessionId) {}

    fn unlisten(&mut self, _session: SessionId) {}
}

impl FrameScheduler for Host {
    fn request_frame(&mut self, session: SessionId) {
        self.queued_frames.push(session);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let element = StaticElement::new(
        Position::new(0.0, 0.0, 100.0, 100.0),
        Size::new(400.0, 400.0),
    );
    let config = ManipulateConfig::default().with_snap(SnapStep::new(15.0).ok());
    let mut sessions = RotateSessions::new(config);
    let mut host = Host::default();
    sessions.subscribe(|rotation| println!("transform: rotate({rotation})"));
    sessions.set_on_complete(|| println!("rotation committed"));

    let start = |sessions: &mut RotateSessions, host: &mut Host, at: Point| {
        let down = PointerDown::primary(at);
        match sessions.pointer_down(RotateHandle::Ne, &down, &element, host) {
            DownOutcome::Started { session, superseded } => {
                if let Some(old) = superseded {
                    println!("session {} superseded", old.get());
                }
                Some(session)
            }
            DownOutcome::Ignored => None,
        }
    };

    // Quarter sweep around the center (50, 50), starting due right.
    let Some(first) = start(&mut sessions, &mut host, Point::new(150.0, 50.0)) else {
        return;
    };
    for step in 1..=6 {
        let angle = f64::from(step) * 10_f64.to_radians();
        let at = Point::new(50.0 + 100.0 * angle.cos(), 50.0 + 100.0 * angle.sin());
        if sessions.pointer_move(first, at, &mut host).is_err() {
            return;
        }
        for frame in std::mem::take(&mut host.queued_frames) {
            sessions.frame(frame);
        }
    }
    // One more sample that never gets a frame before the next press.
    let _ = sessions.pointer_move(first, Point::new(50.0, 150.0), &mut host);

    let Some(second) = start(&mut sessions, &mut host, Point::new(50.0, 150.0)) else {
        return;
    };
    for frame in std::mem::take(&mut host.queued_frames) {
        // The stale request for the first session emits nothing.
        let emitted = sessions.frame(frame);
        println!("frame for session {}: emitted={emitted}", frame.get());
    }
    let _ = sessions.pointer_move(second, Point::new(-50.0, 50.0), &mut host);
    sessions.pointer_up(second, &mut host);
}
