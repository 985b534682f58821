// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless resize session.
//!
//! Drive a bottom-right resize of a rotated, zoomed element through a
//! `ResizeSessions` manager. A tiny host queues frame requests and delivers
//! them between bursts of pointer samples, like a browser would.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example resize_session`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Affine, Point, Size};
use tracing_subscriber::EnvFilter;
use understory_manipulate::{
    DownOutcome, FrameScheduler, ManipulateConfig, Modifiers, OutputUnits, PointerDown,
    PointerListeners, Position, ResizeHandle, ResizeSessions, SessionId, SnapStep, StaticElement,
};

#[derive(Debug, Default)]
struct Host {
    listening: Option<SessionId>,
    queued_frames: Vec<SessionId>,
}

impl PointerListeners for Host {
    fn listen(&mut self, session: SessionId) {
        println!("listen for session {}", session.get());
        self.listening = Some(session);
    }

    fn unlisten(&mut self, session: SessionId) {
        println!("unlisten session {}", session.get());
        if self.listening == Some(session) {
            self.listening = None;
        }
    }
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

    // 200x100 element, rotated 30° and shown at 150% by an ancestor.
    let element = StaticElement::new(
        Position::new(40.0, 40.0, 200.0, 100.0),
        Size::new(800.0, 600.0),
    )
    .with_transform(Affine::scale(1.5) * Affine::rotate(30_f64.to_radians()));

    let config = ManipulateConfig::default()
        .with_units(OutputUnits::Pixels)
        .with_snap(SnapStep::new(5.0).ok());
    let mut sessions = ResizeSessions::new(config);
    let mut host = Host::default();

    sessions.subscribe(|update| {
        println!(
            "style: left={} top={} width={} height={}",
            update.left, update.top, update.width, update.height
        );
    });
    let completed = Rc::new(Cell::new(false));
    let flag = completed.clone();
    sessions.set_on_complete(move || flag.set(true));

    let down = PointerDown::primary(Point::new(300.0, 250.0)).with_modifiers(Modifiers::SHIFT);
    let DownOutcome::Started { session, .. } =
        sessions.pointer_down(ResizeHandle::SE, &down, &element, &mut host)
    else {
        println!("press ignored");
        return;
    };

    // Three frames' worth of pointer samples; the last burst is flushed by pointer-up.
    let bursts = [
        [(305.0, 252.0), (310.0, 255.0), (318.0, 259.0)],
        [(325.0, 262.0), (333.0, 268.0), (340.0, 271.0)],
        [(352.0, 280.0), (360.0, 284.0), (366.0, 290.0)],
    ];
    for (i, burst) in bursts.iter().enumerate() {
        for &(x, y) in burst {
            if let Err(err) = sessions.pointer_move(session, Point::new(x, y), &mut host) {
                println!("session failed: {err}");
                return;
            }
        }
        if i + 1 < bursts.len() {
            for frame in std::mem::take(&mut host.queued_frames) {
                sessions.frame(frame);
            }
        }
    }
    sessions.pointer_up(session, &mut host);

    println!("completed: {}", completed.get());
}
