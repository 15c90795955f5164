use super::*;
use crate::animation::ease::Ease;
use crate::transition::scheduler::TransitionTicket;

fn hidden() -> SlideTransform {
    SlideTransform {
        scale: 0.5,
        offset_x: 1200.0,
        opacity: 0.0,
        layer: 1,
    }
}

fn request(generation: u64, slide: usize, target: SlideTransform, secs: f64) -> TransitionRequest {
    TransitionRequest {
        ticket: TransitionTicket { generation, slide },
        target,
        duration_secs: secs,
        ease: Ease::Linear,
    }
}

#[test]
fn completion_is_never_synchronous() {
    let mut engine = TweenEngine::new(vec![hidden()]);
    engine.schedule(request(1, 0, SlideTransform::CENTER, 0.0));
    assert_eq!(engine.in_flight(), 1);
    assert_eq!(engine.visual()[0], hidden());

    let done = engine.advance(0.0);
    assert_eq!(done.len(), 1);
    assert_eq!(engine.visual()[0], SlideTransform::CENTER);
    assert!(engine.is_idle());
}

#[test]
fn each_request_completes_exactly_once() {
    let mut engine = TweenEngine::new(vec![hidden(), hidden()]);
    engine.schedule(request(1, 0, SlideTransform::CENTER, 0.5));
    engine.schedule(request(1, 1, SlideTransform::CENTER, 1.0));

    let mut all = Vec::new();
    for _ in 0..200 {
        all.extend(engine.advance(0.01));
    }
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].ticket.slide, 0);
    assert_eq!(all[1].ticket.slide, 1);
    assert!(engine.advance(1.0).is_empty());
}

#[test]
fn tween_reaches_target_after_duration() {
    let mut engine = TweenEngine::new(vec![hidden()]);
    engine.schedule(request(1, 0, SlideTransform::CENTER, 1.0));

    assert!(engine.advance(0.5).is_empty());
    let mid = engine.visual()[0];
    assert!((mid.offset_x - 600.0).abs() < 1e-9);
    assert!((mid.opacity - 0.5).abs() < 1e-9);

    let done = engine.advance(0.5);
    assert_eq!(done.len(), 1);
    assert_eq!(engine.visual()[0], SlideTransform::CENTER);
}

#[test]
fn retarget_completes_the_replaced_request() {
    let mut engine = TweenEngine::new(vec![hidden()]);
    engine.schedule(request(1, 0, SlideTransform::CENTER, 1.0));
    engine.advance(0.5);
    engine.schedule(request(2, 0, hidden(), 1.0));

    let first = engine.advance(0.0);
    assert_eq!(
        first,
        vec![TransitionDone {
            ticket: TransitionTicket {
                generation: 1,
                slide: 0
            }
        }]
    );
    // Retargeted tween starts from the half-way value.
    assert!((engine.visual()[0].offset_x - 600.0).abs() < 1e-9);

    let rest = engine.run_until_idle(0.1);
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].ticket.generation, 2);
    assert_eq!(engine.visual()[0], hidden());
}

#[test]
fn negative_dt_does_not_rewind() {
    let mut engine = TweenEngine::new(vec![hidden()]);
    engine.schedule(request(1, 0, SlideTransform::CENTER, 1.0));
    engine.advance(0.25);
    engine.advance(-10.0);
    engine.advance(f64::NAN);
    assert!((engine.now() - 0.25).abs() < 1e-12);
}

#[test]
fn scheduling_past_the_end_grows_visual_state() {
    let mut engine = TweenEngine::default();
    engine.schedule(request(1, 2, SlideTransform::CENTER, 0.1));
    assert_eq!(engine.visual().len(), 3);
    engine.run_until_idle(0.05);
    assert_eq!(engine.visual()[2], SlideTransform::CENTER);
}
