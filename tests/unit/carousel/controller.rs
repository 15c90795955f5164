use super::*;
use crate::carousel::position::{PositionProfile, compute_transform};

#[derive(Debug, Default)]
struct Recorder {
    requests: Vec<TransitionRequest>,
}

impl TransitionScheduler for Recorder {
    fn schedule(&mut self, request: TransitionRequest) {
        self.requests.push(request);
    }
}

fn desktop(len: usize) -> CarouselController<Recorder> {
    CarouselController::new(
        len,
        ViewportClass::Desktop,
        CarouselConfig::default(),
        Recorder::default(),
    )
}

fn done(generation: u64, slide: usize) -> TransitionDone {
    TransitionDone {
        ticket: TransitionTicket { generation, slide },
    }
}

#[test]
fn mounts_idle_at_zero() {
    let c = desktop(4);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.scheduler().requests.is_empty());
    assert!(c.transforms()[0].is_center());
    assert_eq!(c.transforms()[1], compute_transform(1, ViewportClass::Desktop));
    assert_eq!(c.transforms()[3].opacity, 0.0);
}

#[test]
fn next_from_zero_places_neighbours() {
    let mut c = desktop(4);
    assert_eq!(c.next(), GoTo::Started { from: 0, to: 1 });
    assert_eq!(c.current_index(), 1);
    assert!(c.is_animating());

    let t = c.transforms();
    assert_eq!(t[0].offset_x, -600.0);
    assert_eq!(t[0].opacity, 0.6);
    assert!(t[1].is_center());
    assert_eq!(t[2].offset_x, 600.0);
    assert_eq!(t[3].opacity, 0.0);
    assert_eq!(t[3].offset_x, 1200.0);

    let reqs = &c.scheduler().requests;
    assert_eq!(reqs.len(), 4);
    for (i, r) in reqs.iter().enumerate() {
        assert_eq!(r.slide(), i);
        assert_eq!(r.target, t[i]);
        assert_eq!(r.duration_secs, 0.8);
        assert_eq!(r.ticket.generation, 1);
    }
}

#[test]
fn go_to_current_is_a_no_op() {
    let mut c = desktop(4);
    assert_eq!(c.go_to(0), GoTo::Ignored(Ignored::AlreadyCurrent));
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.scheduler().requests.is_empty());
}

#[test]
fn out_of_range_is_a_no_op() {
    let mut c = desktop(4);
    assert_eq!(c.go_to(4), GoTo::Ignored(Ignored::OutOfRange));
    assert_eq!(c.prev(), GoTo::Ignored(Ignored::OutOfRange));
    assert_eq!(c.current_index(), 0);
    assert!(c.scheduler().requests.is_empty());
}

#[test]
fn intents_while_transitioning_change_nothing() {
    let mut c = desktop(5);
    c.go_to(2);
    let before = c.transforms().to_vec();
    let scheduled = c.scheduler().requests.len();

    assert_eq!(c.next(), GoTo::Ignored(Ignored::Animating));
    assert_eq!(c.prev(), GoTo::Ignored(Ignored::Animating));
    assert_eq!(c.go_to(4), GoTo::Ignored(Ignored::Animating));
    assert_eq!(c.go_to(2), GoTo::Ignored(Ignored::Animating));

    assert_eq!(c.current_index(), 2);
    assert_eq!(c.transforms(), before.as_slice());
    assert_eq!(c.scheduler().requests.len(), scheduled);
}

#[test]
fn only_center_completion_returns_to_idle() {
    let mut c = desktop(4);
    c.next();
    assert!(!c.on_transition_done(done(1, 0)));
    assert!(!c.on_transition_done(done(1, 2)));
    assert!(c.is_animating());
    // Stale generation for the right slide.
    assert!(!c.on_transition_done(done(0, 1)));
    assert!(c.is_animating());

    assert!(c.on_transition_done(done(1, 1)));
    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.on_transition_done(done(1, 1)));
}

#[test]
fn next_at_last_slide_is_a_no_op() {
    let mut c = desktop(3);
    c.go_to(2);
    c.on_transition_done(done(1, 2));
    assert_eq!(c.next(), GoTo::Ignored(Ignored::OutOfRange));
    assert_eq!(c.current_index(), 2);
}

#[test]
fn controls_follow_bounds_and_phase() {
    let mut c = desktop(2);
    assert_eq!(
        c.controls(),
        Controls {
            prev_enabled: false,
            next_enabled: true,
            dots_enabled: true
        }
    );
    c.next();
    assert_eq!(
        c.controls(),
        Controls {
            prev_enabled: false,
            next_enabled: false,
            dots_enabled: false
        }
    );
    c.on_transition_done(done(1, 1));
    assert_eq!(
        c.controls(),
        Controls {
            prev_enabled: true,
            next_enabled: false,
            dots_enabled: true
        }
    );
}

#[test]
fn viewport_change_applies_to_next_move_only() {
    let mut c = desktop(4);
    c.set_viewport_class(ViewportClass::Mobile);
    assert_eq!(c.current_index(), 0);
    assert!(c.scheduler().requests.is_empty());
    assert_eq!(c.transforms()[1].offset_x, 600.0);

    c.next();
    let mobile = PositionProfile::MOBILE;
    assert_eq!(c.transforms()[0].offset_x, -mobile.side_x);
    assert_eq!(c.transforms()[0].scale, mobile.side_scale);
    assert_eq!(c.transforms()[3].offset_x, mobile.hidden_x);
}

#[test]
fn empty_carousel_ignores_everything() {
    let mut c = desktop(0);
    assert!(c.is_empty());
    assert_eq!(c.next(), GoTo::Ignored(Ignored::OutOfRange));
    assert_eq!(c.prev(), GoTo::Ignored(Ignored::OutOfRange));
    assert_eq!(c.go_to(0), GoTo::Ignored(Ignored::OutOfRange));
    assert!(c.transforms().is_empty());
    assert!(c.initial_layout().is_empty());
    assert_eq!(
        c.controls(),
        Controls {
            prev_enabled: false,
            next_enabled: false,
            dots_enabled: false
        }
    );
    assert!(c.scheduler().requests.is_empty());
}

#[test]
fn initial_layout_centers_slide_zero_for_current_class() {
    let mut c = desktop(4);
    let mount = c.initial_layout();
    assert_eq!(mount, c.transforms());
    assert!(mount[0].is_center());
    assert_eq!(mount[1], compute_transform(1, ViewportClass::Desktop));
    assert_eq!(mount[2], compute_transform(2, ViewportClass::Desktop));

    c.go_to(2);
    c.set_viewport_class(ViewportClass::Mobile);
    let mount = c.initial_layout();
    assert!(mount[0].is_center());
    assert_eq!(mount[1], compute_transform(1, ViewportClass::Mobile));
    assert!(c.transforms()[2].is_center());
}

#[test]
fn engine_backed_carousel_settles_to_committed_layout() {
    let mut c = CarouselController::with_engine(4, ViewportClass::Desktop, CarouselConfig::default());
    assert_eq!(c.visual(), c.transforms());

    c.next();
    c.advance(0.4);
    assert!(c.is_animating());
    assert!(!c.visual()[1].is_center());

    c.settle(1.0 / 60.0);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.visual(), c.transforms());
    assert!(c.visual()[1].is_center());
}

#[test]
fn rapid_clicks_only_move_once() {
    let mut c = CarouselController::with_engine(6, ViewportClass::Desktop, CarouselConfig::default());
    let started = (0..5).filter(|_| c.next().is_started()).count();
    assert_eq!(started, 1);
    c.settle(1.0 / 60.0);
    assert_eq!(c.current_index(), 1);
    assert!(c.next().is_started());
}
