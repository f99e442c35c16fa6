use super::*;
use crate::animation::ease::Ease;
use crate::foundation::core::Fps;

fn frames() -> FrameScheduler {
    // 20ms frames keep the arithmetic exact.
    FrameScheduler::new(Fps::new(50, 1).unwrap(), Millis::ZERO)
}

fn linear(duration_ms: f64) -> AnimationSpec {
    AnimationSpec::fade_rise(20.0, duration_ms).with_ease(Ease::Linear)
}

/// Run frames until the scheduler goes idle, collecting `(now, value)` emissions.
fn drain(anim: &mut RevealAnimator, frames: &mut FrameScheduler) -> Vec<(Millis, VisualState)> {
    let mut out = Vec::new();
    for _ in 0..1000 {
        if frames.pending_count() == 0 {
            break;
        }
        let tick = frames.next_frame();
        for owner in tick.due {
            assert_eq!(owner, anim.owner());
            if let Some(v) = anim.on_frame(tick.now, frames) {
                out.push((tick.now, v));
            }
        }
    }
    out
}

#[test]
fn output_is_pinned_to_initial_before_trigger() {
    let mut f = frames();
    let mut anim = RevealAnimator::new(BlockId(0), linear(100.0));
    for _ in 0..10 {
        let tick = f.next_frame();
        assert_eq!(anim.on_frame(tick.now, &mut f), None);
    }
    assert_eq!(anim.current(), VisualState::new(0.0, 20.0));
    assert_eq!(anim.state(), RevealState::default());
    assert_eq!(anim.phase(), RevealPhase::Idle);
    assert_eq!(f.pending_count(), 0);
}

#[test]
fn interpolates_then_holds_target() {
    let mut f = frames();
    let mut anim = RevealAnimator::new(BlockId(0), linear(100.0));
    assert!(anim.trigger(f.now(), &mut f));

    let out = drain(&mut anim, &mut f);
    let values: Vec<f64> = out.iter().map(|(_, v)| v.opacity).collect();
    assert_eq!(values, vec![0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(out.last().unwrap().1, VisualState::SHOWN);
    assert_eq!(anim.phase(), RevealPhase::Settled);
    assert_eq!(anim.state().progress, 1.0);

    // Settled: nothing more, ever.
    let tick = f.next_frame();
    assert_eq!(anim.on_frame(tick.now, &mut f), None);
    assert_eq!(f.pending_count(), 0);
}

#[test]
fn nothing_is_emitted_before_delay_elapses() {
    let mut f = frames();
    let mut anim = RevealAnimator::new(BlockId(0), linear(40.0).with_delay(60.0));
    anim.trigger(Millis::ZERO, &mut f);

    let out = drain(&mut anim, &mut f);
    assert!(out.iter().all(|(t, _)| *t >= Millis(60.0)));
    assert_eq!(out.first().unwrap(), &(Millis(60.0), VisualState::new(0.0, 20.0)));
    assert_eq!(out.last().unwrap(), &(Millis(100.0), VisualState::SHOWN));
}

#[test]
fn zero_duration_jumps_straight_to_target() {
    let mut f = frames();
    let mut anim = RevealAnimator::new(BlockId(0), linear(0.0));
    anim.trigger(Millis::ZERO, &mut f);

    let out = drain(&mut anim, &mut f);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].1, VisualState::SHOWN);
    assert_eq!(anim.emitted(), 1);
}

#[test]
fn has_triggered_flips_at_most_once() {
    let mut f = frames();
    let mut anim = RevealAnimator::new(BlockId(0), linear(100.0));
    assert!(anim.trigger(Millis::ZERO, &mut f));
    assert!(!anim.trigger(Millis(40.0), &mut f));
    anim.on_signal_lost(&mut f);
    assert!(anim.state().has_triggered);

    drain(&mut anim, &mut f);
    assert!(anim.state().has_triggered);
    assert!(!anim.trigger(Millis(1000.0), &mut f));
    assert_eq!(anim.phase(), RevealPhase::Settled);
}

#[test]
fn replaying_reveal_resets_on_signal_loss() {
    let mut f = frames();
    let mut spec = linear(100.0);
    spec.trigger_once = false;
    let mut anim = RevealAnimator::new(BlockId(0), spec);
    anim.trigger(Millis::ZERO, &mut f);
    let tick = f.next_frame();
    anim.on_frame(tick.now, &mut f);
    assert!(anim.current().opacity > 0.0);

    anim.on_signal_lost(&mut f);
    assert_eq!(anim.phase(), RevealPhase::Idle);
    assert_eq!(anim.current(), VisualState::new(0.0, 20.0));
    assert_eq!(f.pending_count(), 0);
    assert!(anim.trigger(f.now(), &mut f));
}

#[test]
fn cancel_mid_flight_stops_updates() {
    let mut f = frames();
    let mut anim = RevealAnimator::new(BlockId(0), linear(100.0));
    anim.trigger(Millis::ZERO, &mut f);
    let tick = f.next_frame();
    let v = anim.on_frame(tick.now, &mut f).unwrap();

    anim.cancel(&mut f);
    assert_eq!(f.pending_count(), 0);
    let tick = f.next_frame();
    assert_eq!(anim.on_frame(tick.now, &mut f), None);
    assert_eq!(anim.current(), v);
    assert!(!anim.trigger(tick.now, &mut f));
}

#[test]
fn cancel_before_trigger_leaves_nothing_scheduled() {
    let mut f = frames();
    let mut anim = RevealAnimator::new(BlockId(0), linear(100.0));
    anim.cancel(&mut f);
    assert!(!anim.trigger(Millis::ZERO, &mut f));
    assert_eq!(f.pending_count(), 0);
    assert!(!anim.state().has_triggered);
}
