use super::*;
use crate::reveal::driver::{RevealEvent, ToggleAction};
use crate::reveal::motion::Direction;

fn layout() -> Layout {
    Layout {
        element_top: 1500.0,
        element_height: 300.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn default_config_builds_a_once_driver() {
    let cfg = RevealConfig::default();
    assert_eq!(cfg.ease().unwrap(), Ease::OutQuint);
    let mut d = cfg.build(&layout()).unwrap();
    assert_eq!(d.range().start, 700.0);
    assert_eq!(d.range().end, 1200.0);
    let s = d.on_scroll(800.0);
    assert_eq!(s[0].event, RevealEvent::Enter);
    assert_eq!(s[0].action, ToggleAction::Play);
    assert_eq!(cfg.delays(3).len(), 3);
    assert_eq!(d.timing(), RevealTiming::default());
}

#[test]
fn timing_reaches_the_driver() {
    let cfg = RevealConfig {
        duration_secs: 2.0,
        ease: "linear".to_owned(),
        ..RevealConfig::default()
    };
    let d = cfg.build(&layout()).unwrap();
    let timing = d.timing();
    assert_eq!(timing.duration_secs, 2.0);
    assert_eq!(timing.ease, Ease::Linear);
    assert_eq!(timing.sample(0.0), 0.0);
    assert_eq!(timing.sample(0.5), 0.25);
    assert_eq!(timing.sample(3.0), 1.0);

    let bad_duration = RevealConfig {
        duration_secs: -1.0,
        ..RevealConfig::default()
    };
    assert!(bad_duration.timing().is_err());
    assert!(bad_duration.build(&layout()).is_err());
}

#[test]
fn json_overrides_apply() {
    let json = r#"{
        "start": "center center",
        "end": "+=600",
        "mode": "scrub",
        "scrub_secs": 0,
        "parallax": { "distance": 120, "direction": "up" }
    }"#;
    let cfg: RevealConfig = serde_json::from_str(json).unwrap();
    let mut d = cfg.build(&layout()).unwrap();
    d.on_scroll(d.range().start + 300.0);
    assert_eq!(d.progress(), 0.5);
    let parallax = cfg.parallax.unwrap();
    assert_eq!(parallax.direction, Direction::Up);
    assert_eq!(parallax.offset_y(d.progress()), -60.0);
}

#[test]
fn invalid_fields_fail_build() {
    let bad_mode = RevealConfig {
        mode: "sometimes".to_owned(),
        ..RevealConfig::default()
    };
    assert!(bad_mode.build(&layout()).is_err());

    let bad_ease = RevealConfig {
        ease: "wobble".to_owned(),
        ..RevealConfig::default()
    };
    assert!(bad_ease.build(&layout()).is_err());

    let bad_start = RevealConfig {
        start: "+=5".to_owned(),
        ..RevealConfig::default()
    };
    assert!(bad_start.build(&layout()).is_err());
}
