use super::*;

#[test]
fn initial_width_is_classified() {
    assert_eq!(ViewportProvider::new(768.0, 375.0).class(), ViewportClass::Mobile);
    assert_eq!(ViewportProvider::new(768.0, 1440.0).class(), ViewportClass::Desktop);
}

#[test]
fn subscribers_hear_only_class_flips() {
    let mut vp = ViewportProvider::new(768.0, 1440.0);
    let sub = vp.subscribe();

    assert_eq!(vp.resize(1200.0), None);
    assert_eq!(sub.latest(), None);

    assert_eq!(vp.resize(700.0), Some(ViewportClass::Mobile));
    assert_eq!(
        sub.latest(),
        Some(ViewportChange {
            width: 700.0,
            class: ViewportClass::Mobile
        })
    );
    assert_eq!(vp.width(), 700.0);
}

#[test]
fn latest_collapses_intermediate_flips() {
    let mut vp = ViewportProvider::new(768.0, 1440.0);
    let sub = vp.subscribe();
    vp.resize(500.0);
    vp.resize(1000.0);
    vp.resize(600.0);
    assert_eq!(sub.latest().map(|c| c.class), Some(ViewportClass::Mobile));
    assert_eq!(sub.latest(), None);
}

#[test]
fn unsubscribe_and_dropped_receivers_are_removed() {
    let mut vp = ViewportProvider::new(768.0, 1440.0);
    let a = vp.subscribe();
    let b = vp.subscribe();
    assert_eq!(vp.subscriber_count(), 2);

    vp.unsubscribe(a.id());
    assert_eq!(vp.subscriber_count(), 1);

    drop(b);
    vp.resize(300.0);
    assert_eq!(vp.subscriber_count(), 0);
}
