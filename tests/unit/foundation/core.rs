use super::*;

#[test]
fn millis_since_floors_at_zero() {
    assert_eq!(Millis(10.0).since(Millis(4.0)), Millis(6.0));
    assert_eq!(Millis(4.0).since(Millis(10.0)), Millis::ZERO);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
    assert!(Fps::new(60, 1).is_ok());
}

#[test]
fn fps_frame_duration_and_coverage() {
    let fps = Fps::new(50, 1).unwrap();
    assert_eq!(fps.frame_duration(), Millis(20.0));
    assert_eq!(fps.frames_covering(Millis(100.0)), 5);
    assert_eq!(fps.frames_covering(Millis(101.0)), 6);
    assert_eq!(fps.frames_covering(Millis::ZERO), 0);
}
