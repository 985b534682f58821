// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for driving `SessionManager` the way a host UI layer would.
//!
//! A recording host stands in for the document listeners and the frame
//! scheduler, so every event and frame callback is delivered by hand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Affine, Point, Size};
use understory_manipulate::{
    DownOutcome, FrameScheduler, ManipulateConfig, Modifiers, MoveSessions, OutputUnits,
    PointerDown, PointerListeners, Position, PositionStrings, ResizeHandle, ResizeSessions,
    RotateHandle, RotateSessions, SessionId, SnapStep, StaticElement,
};

#[derive(Debug, Default)]
struct RecordingHost {
    listening: Vec<SessionId>,
    unlistened: Vec<SessionId>,
    frame_requests: Vec<SessionId>,
}

impl PointerListeners for RecordingHost {
    fn listen(&mut self, session: SessionId) {
        self.listening.push(session);
    }

    fn unlisten(&mut self, session: SessionId) {
        self.listening.retain(|s| *s != session);
        self.unlistened.push(session);
    }
}

impl FrameScheduler for RecordingHost {
    fn request_frame(&mut self, session: SessionId) {
        self.frame_requests.push(session);
    }
}

fn started(outcome: DownOutcome) -> SessionId {
    match outcome {
        DownOutcome::Started { session, .. } => session,
        DownOutcome::Ignored => panic!("expected a session to start"),
    }
}

fn square() -> StaticElement {
    StaticElement::new(
        Position::new(0.0, 0.0, 100.0, 100.0),
        Size::new(1000.0, 1000.0),
    )
}

fn pixels() -> ManipulateConfig {
    ManipulateConfig::default().with_units(OutputUnits::Pixels)
}

#[test]
fn bottom_right_resize_end_to_end() {
    let mut sessions = ResizeSessions::new(pixels());
    let mut host = RecordingHost::default();
    let emitted: Rc<RefCell<Vec<PositionStrings>>> = Rc::default();
    let sink = emitted.clone();
    sessions.subscribe(move |update| sink.borrow_mut().push(update.clone()));
    let completions = Rc::new(Cell::new(0_u32));
    let counter = completions.clone();
    sessions.set_on_complete(move || counter.set(counter.get() + 1));

    let session = started(sessions.pointer_down(
        ResizeHandle::SE,
        &PointerDown::primary(Point::new(200.0, 200.0)),
        &square(),
        &mut host,
    ));
    sessions
        .pointer_move(session, Point::new(250.0, 240.0), &mut host)
        .unwrap();
    assert_eq!(host.frame_requests, [session]);
    assert!(sessions.pointer_up(session, &mut host));

    let emitted = emitted.borrow();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].left, "0px");
    assert_eq!(emitted[0].top, "0px");
    assert_eq!(emitted[0].width, "150px");
    assert_eq!(emitted[0].height, "140px");
    assert_eq!(completions.get(), 1);
    assert!(host.listening.is_empty());
    assert!(!sessions.is_dragging());
}

#[test]
fn frame_before_pointer_up_is_not_emitted_twice() {
    let mut sessions = ResizeSessions::new(pixels());
    let mut host = RecordingHost::default();
    let count = Rc::new(Cell::new(0_u32));
    let counter = count.clone();
    sessions.subscribe(move |_| counter.set(counter.get() + 1));

    let session = started(sessions.pointer_down(
        ResizeHandle::SE,
        &PointerDown::primary(Point::new(200.0, 200.0)),
        &square(),
        &mut host,
    ));
    sessions
        .pointer_move(session, Point::new(250.0, 240.0), &mut host)
        .unwrap();
    assert!(sessions.frame(session));
    assert!(sessions.pointer_up(session, &mut host));
    assert_eq!(count.get(), 1);
}

#[test]
fn bursts_are_coalesced_to_the_latest_sample() {
    let mut sessions = MoveSessions::new(pixels());
    let mut host = RecordingHost::default();
    let lefts: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = lefts.clone();
    sessions.subscribe(move |update| sink.borrow_mut().push(update.left.clone()));

    let session = started(sessions.pointer_down(
        (),
        &PointerDown::primary(Point::ORIGIN),
        &square(),
        &mut host,
    ));
    for x in 1..=5 {
        sessions
            .pointer_move(session, Point::new(f64::from(x), 0.0), &mut host)
            .unwrap();
    }
    sessions.frame(session);
    for x in 6..=8 {
        sessions
            .pointer_move(session, Point::new(f64::from(x), 0.0), &mut host)
            .unwrap();
    }
    sessions.frame(session);
    sessions.pointer_up(session, &mut host);

    assert_eq!(host.frame_requests.len(), 2);
    assert_eq!(*lefts.borrow(), ["5px", "8px"]);
}

#[test]
fn identical_samples_emit_once() {
    let mut sessions = MoveSessions::new(pixels());
    let mut host = RecordingHost::default();
    let count = Rc::new(Cell::new(0_u32));
    let counter = count.clone();
    sessions.subscribe(move |_| counter.set(counter.get() + 1));

    let session = started(sessions.pointer_down(
        (),
        &PointerDown::primary(Point::ORIGIN),
        &square(),
        &mut host,
    ));
    sessions
        .pointer_move(session, Point::new(7.0, 3.0), &mut host)
        .unwrap();
    sessions.frame(session);
    sessions
        .pointer_move(session, Point::new(7.0, 3.0), &mut host)
        .unwrap();
    // Deduplicated before the throttle: no second frame is requested.
    assert_eq!(host.frame_requests.len(), 1);
    assert!(!sessions.frame(session));
    sessions.pointer_up(session, &mut host);
    assert_eq!(count.get(), 1);
}

#[test]
fn supersede_drops_the_previous_session() {
    let mut sessions = MoveSessions::new(pixels());
    let mut host = RecordingHost::default();
    let count = Rc::new(Cell::new(0_u32));
    let counter = count.clone();
    sessions.subscribe(move |_| counter.set(counter.get() + 1));
    let completions = Rc::new(Cell::new(0_u32));
    let counter = completions.clone();
    sessions.set_on_complete(move || counter.set(counter.get() + 1));

    let first = started(sessions.pointer_down(
        (),
        &PointerDown::primary(Point::ORIGIN),
        &square(),
        &mut host,
    ));
    sessions
        .pointer_move(first, Point::new(10.0, 0.0), &mut host)
        .unwrap();

    let outcome = sessions.pointer_down(
        (),
        &PointerDown::primary(Point::new(50.0, 50.0)),
        &square(),
        &mut host,
    );
    let DownOutcome::Started {
        session: second,
        superseded,
    } = outcome
    else {
        panic!("second press should start a session");
    };
    assert_eq!(superseded, Some(first));
    assert_ne!(first, second);
    assert_eq!(host.unlistened, [first]);
    assert_eq!(host.listening, [second]);

    // The frame the first session asked for arrives late and is ignored.
    assert!(!sessions.frame(first));
    // So are stray events still tagged with the first session.
    sessions
        .pointer_move(first, Point::new(20.0, 0.0), &mut host)
        .unwrap();
    assert!(!sessions.pointer_up(first, &mut host));
    assert_eq!(count.get(), 0);
    assert_eq!(completions.get(), 0);
    assert_eq!(sessions.active_session(), Some(second));

    assert!(sessions.pointer_up(second, &mut host));
    assert_eq!(completions.get(), 1);
}

#[test]
fn secondary_button_never_starts_a_session() {
    let mut sessions = ResizeSessions::new(pixels());
    let mut host = RecordingHost::default();
    let down = PointerDown::primary(Point::ORIGIN)
        .with_button(understory_manipulate::PointerButton::Auxiliary);
    assert_eq!(
        sessions.pointer_down(ResizeHandle::N, &down, &square(), &mut host),
        DownOutcome::Ignored
    );
    assert!(host.listening.is_empty());
}

#[test]
fn rotated_element_resizes_along_its_own_axes() {
    let rotated = square().with_transform(Affine::rotate(90_f64.to_radians()));
    let mut sessions = ResizeSessions::new(pixels());
    let mut host = RecordingHost::default();
    let widths: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = widths.clone();
    sessions.subscribe(move |update| {
        sink.borrow_mut().push(format!("{}x{}", update.width, update.height));
    });

    let session = started(sessions.pointer_down(
        ResizeHandle::E,
        &PointerDown::primary(Point::new(0.0, 0.0)),
        &rotated,
        &mut host,
    ));
    // Screen-down is the element's local +x after a quarter turn.
    sessions
        .pointer_move(session, Point::new(0.0, 10.0), &mut host)
        .unwrap();
    sessions.pointer_up(session, &mut host);
    assert_eq!(*widths.borrow(), ["110pxx100px"]);
}

#[test]
fn aspect_lock_keeps_the_start_ratio() {
    let element = StaticElement::new(
        Position::new(0.0, 0.0, 200.0, 100.0),
        Size::new(1000.0, 1000.0),
    );
    let mut sessions = ResizeSessions::new(pixels());
    let mut host = RecordingHost::default();
    let sizes: Rc<RefCell<Vec<(String, String)>>> = Rc::default();
    let sink = sizes.clone();
    sessions.subscribe(move |update| {
        sink.borrow_mut().push((update.width.clone(), update.height.clone()));
    });

    let down = PointerDown::primary(Point::new(200.0, 100.0)).with_modifiers(Modifiers::SHIFT);
    let session = started(sessions.pointer_down(ResizeHandle::SE, &down, &element, &mut host));
    sessions
        .pointer_move(session, Point::new(300.0, 110.0), &mut host)
        .unwrap();
    sessions.pointer_up(session, &mut host);
    assert_eq!(
        *sizes.borrow(),
        [("300px".to_string(), "150px".to_string())]
    );
}

#[test]
fn percent_output_with_snap() {
    let config = ManipulateConfig::default().with_snap(Some(SnapStep::new(25.0).unwrap()));
    let element = StaticElement::new(
        Position::new(0.0, 0.0, 100.0, 100.0),
        Size::new(400.0, 200.0),
    );
    let mut sessions = MoveSessions::new(config);
    let mut host = RecordingHost::default();
    let out: Rc<RefCell<Vec<PositionStrings>>> = Rc::default();
    let sink = out.clone();
    sessions.subscribe(move |update| sink.borrow_mut().push(update.clone()));

    let session = started(sessions.pointer_down(
        (),
        &PointerDown::primary(Point::ORIGIN),
        &element,
        &mut host,
    ));
    sessions
        .pointer_move(session, Point::new(40.0, 60.0), &mut host)
        .unwrap();
    sessions.pointer_up(session, &mut host);

    let out = out.borrow();
    assert_eq!(out[0].left, "12.5%");
    assert_eq!(out[0].top, "25%");
    assert_eq!(out[0].width, "25%");
    assert_eq!(out[0].height, "50%");
}

#[test]
fn rotate_session_emits_degree_strings() {
    let mut sessions = RotateSessions::new(ManipulateConfig::default());
    let mut host = RecordingHost::default();
    let out: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = out.clone();
    sessions.subscribe(move |update| sink.borrow_mut().push(update.to_string()));

    // Center (50, 50); start to the right, end below.
    let session = started(sessions.pointer_down(
        RotateHandle::Ne,
        &PointerDown::primary(Point::new(100.0, 50.0)),
        &square(),
        &mut host,
    ));
    sessions
        .pointer_move(session, Point::new(50.0, 100.0), &mut host)
        .unwrap();
    sessions.pointer_up(session, &mut host);
    assert_eq!(*out.borrow(), ["90deg"]);
}

#[test]
fn degenerate_parent_ends_the_session_without_completion() {
    let element = StaticElement::new(Position::new(0.0, 0.0, 50.0, 50.0), Size::new(0.0, 300.0));
    let mut sessions = ResizeSessions::new(ManipulateConfig::default());
    let mut host = RecordingHost::default();
    let completions = Rc::new(Cell::new(0_u32));
    let counter = completions.clone();
    sessions.set_on_complete(move || counter.set(counter.get() + 1));

    let session = started(sessions.pointer_down(
        ResizeHandle::S,
        &PointerDown::primary(Point::ORIGIN),
        &element,
        &mut host,
    ));
    let err = sessions
        .pointer_move(session, Point::new(0.0, 5.0), &mut host)
        .unwrap_err();
    assert!(err.to_string().contains("percent"));
    assert!(!sessions.is_dragging());
    assert!(host.listening.is_empty());
    assert!(!sessions.pointer_up(session, &mut host));
    assert_eq!(completions.get(), 0);
}

#[test]
fn top_left_resize_keeps_the_bottom_right_corner() {
    let start = Position::new(100.0, 100.0, 200.0, 100.0);
    let element = StaticElement::new(start, Size::new(1000.0, 1000.0));
    let mut sessions = ResizeSessions::new(pixels());
    let mut host = RecordingHost::default();
    let out: Rc<RefCell<Vec<PositionStrings>>> = Rc::default();
    let sink = out.clone();
    sessions.subscribe(move |update| sink.borrow_mut().push(update.clone()));

    let session = started(sessions.pointer_down(
        ResizeHandle::NW,
        &PointerDown::primary(Point::new(100.0, 100.0)),
        &element,
        &mut host,
    ));
    for (to, frame) in [
        ((130.0, 80.0), true),
        ((60.0, 170.0), true),
        ((290.0, 190.0), false),
    ] {
        sessions.pointer_move(session, Point::from(to), &mut host).unwrap();
        if frame {
            sessions.frame(session);
        }
    }
    sessions.pointer_up(session, &mut host);

    let out = out.borrow();
    assert_eq!(out.len(), 3);
    for update in out.iter() {
        let left: f64 = update.left.trim_end_matches("px").parse().unwrap();
        let top: f64 = update.top.trim_end_matches("px").parse().unwrap();
        let width: f64 = update.width.trim_end_matches("px").parse().unwrap();
        let height: f64 = update.height.trim_end_matches("px").parse().unwrap();
        assert!((left + width - 300.0).abs() < 0.01, "{update:?}");
        assert!((top + height - 200.0).abs() < 0.01, "{update:?}");
    }
    // The last drag overshoots the anchor; the floor holds at 20x20.
    assert_eq!(out[2].width, "20px");
    assert_eq!(out[2].height, "20px");
}

#[test]
fn quarter_turn_maps_a_rightward_drag_onto_the_local_y_axis() {
    use understory_manipulate::{Gesture, ResizeGesture, SessionSnapshot};

    let rotated = square().with_transform(Affine::rotate(90_f64.to_radians()));
    let down = PointerDown::primary(Point::ORIGIN);
    let gesture = ResizeGesture::begin(
        ResizeHandle::SE,
        SessionSnapshot::capture(&rotated, down.position),
        &down,
        &pixels(),
    );
    let local = gesture.local_delta(Point::new(10.0, 0.0));
    assert!(local.y.abs() > local.x.abs());
    assert!((local.y + 10.0).abs() < 1e-9);
}
