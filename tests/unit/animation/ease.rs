use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::CSS_EASE,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn linear_bezier_matches_identity() {
    let ease = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    for i in 1..10 {
        let t = f64::from(i) / 10.0;
        assert!((ease.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn css_ease_is_front_loaded() {
    // cubic-bezier(.25,.1,.25,1) is roughly 0.80 at the halfway point.
    let mid = Ease::CSS_EASE.apply(0.5);
    assert!(mid > 0.75 && mid < 0.85, "{mid}");
}

#[test]
fn deserializes_from_snake_case() {
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
    let e: Ease =
        serde_json::from_str(r#"{"cubic_bezier":{"x1":0.4,"y1":0.0,"x2":0.2,"y2":1.0}}"#).unwrap();
    assert!(matches!(e, Ease::CubicBezier { .. }));
}
