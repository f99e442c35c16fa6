use super::*;
use crate::viewport::geometry::Viewport;

fn geometry(rects: &[(u32, Rect)]) -> BTreeMap<ElementId, Rect> {
    rects.iter().map(|&(id, r)| (ElementId(id), r)).collect()
}

fn once(threshold: f64) -> ObserveOptions {
    ObserveOptions {
        threshold,
        once: true,
    }
}

#[test]
fn threshold_outside_unit_interval_is_rejected() {
    let mut reg = ObserverRegistry::new();
    assert!(reg.observe(ElementId(0), once(1.5)).is_err());
    assert!(reg.observe(ElementId(0), once(-0.1)).is_err());
    assert_eq!(reg.active_count(), 0);
}

#[test]
fn one_shot_fires_once_and_detaches() {
    let geo = geometry(&[(0, Rect::new(0.0, 900.0, 100.0, 1000.0))]);
    let mut vp = Viewport::new(100.0, 800.0);
    let mut reg = ObserverRegistry::new();
    let id = reg.observe(ElementId(0), once(0.5)).unwrap();

    assert!(reg.process(vp.rect(), &geo, Millis(0.0)).is_empty());

    vp.scroll_y = 160.0; // 60% of the element visible
    let changes = reg.process(vp.rect(), &geo, Millis(16.0));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].observer, id);
    assert!(changes[0].visible);
    assert_eq!(changes[0].at, Millis(16.0));
    assert!(!reg.is_active(id));
    assert_eq!(reg.active_count(), 0);

    vp.scroll_y = 0.0;
    assert!(reg.process(vp.rect(), &geo, Millis(32.0)).is_empty());
}

#[test]
fn continuous_mode_reports_both_edges() {
    let geo = geometry(&[(0, Rect::new(0.0, 900.0, 100.0, 1000.0))]);
    let mut vp = Viewport::new(100.0, 800.0);
    let mut reg = ObserverRegistry::new();
    let id = reg
        .observe(
            ElementId(0),
            ObserveOptions {
                threshold: 0.0,
                once: false,
            },
        )
        .unwrap();

    vp.scroll_y = 150.0;
    let on = reg.process(vp.rect(), &geo, Millis(0.0));
    assert!(on[0].visible);
    vp.scroll_y = 0.0;
    let off = reg.process(vp.rect(), &geo, Millis(16.0));
    assert!(!off[0].visible);
    assert!(reg.is_active(id));
}

#[test]
fn full_threshold_never_fires_for_element_taller_than_viewport() {
    // 10 seconds of 60Hz scroll events sweeping the whole document.
    let geo = geometry(&[(0, Rect::new(0.0, 500.0, 100.0, 1500.0))]);
    let mut vp = Viewport::new(100.0, 800.0);
    let mut reg = ObserverRegistry::new();
    let mut signal = VisibilitySignal::new(true);
    reg.observe(ElementId(0), once(1.0)).unwrap();

    for i in 0..600u32 {
        vp.scroll_y = f64::from(i % 200) * 10.0;
        let now = Millis(f64::from(i) * 1000.0 / 60.0);
        for c in reg.process(vp.rect(), &geo, now) {
            signal.set(c.visible, c.at);
        }
        assert!(!signal.get());
    }
    assert_eq!(reg.active_count(), 1);
}

#[test]
fn zero_size_and_unmounted_targets_stay_invisible() {
    let geo = geometry(&[(0, Rect::new(10.0, 10.0, 10.0, 10.0))]);
    let vp = Viewport::new(100.0, 800.0);
    let mut reg = ObserverRegistry::new();
    reg.observe(ElementId(0), once(0.0)).unwrap();
    reg.observe(ElementId(7), once(0.0)).unwrap();
    for f in 0..100 {
        assert!(reg.process(vp.rect(), &geo, Millis(f64::from(f))).is_empty());
    }
}

#[test]
fn unobserve_releases_without_firing() {
    let geo = geometry(&[(0, Rect::new(0.0, 0.0, 100.0, 100.0))]);
    let vp = Viewport::new(100.0, 800.0);
    let mut reg = ObserverRegistry::new();
    let id = reg.observe(ElementId(0), once(0.1)).unwrap();
    assert!(reg.unobserve(id));
    assert!(!reg.unobserve(id));
    assert!(reg.process(vp.rect(), &geo, Millis(0.0)).is_empty());
}

#[test]
fn latched_signal_never_reverts() {
    let mut s = VisibilitySignal::new(true);
    assert!(!s.get());
    assert!(s.set(true, Millis(5.0)));
    assert!(!s.set(false, Millis(6.0)));
    assert!(s.get());
    assert_eq!(s.first_fired_at(), Some(Millis(5.0)));

    let mut s = VisibilitySignal::new(false);
    s.set(true, Millis(1.0));
    assert!(s.set(false, Millis(2.0)));
    assert!(!s.get());
    s.set(true, Millis(3.0));
    assert_eq!(s.first_fired_at(), Some(Millis(1.0)));
}
