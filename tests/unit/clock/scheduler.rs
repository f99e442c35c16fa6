use super::*;

fn sched() -> FrameScheduler {
    FrameScheduler::new(Fps::new(50, 1).unwrap(), Millis::ZERO)
}

#[test]
fn requests_are_one_shot_and_deduplicated() {
    let mut s = sched();
    assert!(s.request_frame(BlockId(3)));
    assert!(s.request_frame(BlockId(3)));
    assert!(s.request_frame(BlockId(1)));
    assert_eq!(s.pending_count(), 2);

    let tick = s.next_frame();
    assert_eq!(tick.frame, 1);
    assert_eq!(tick.now, Millis(20.0));
    assert_eq!(tick.due.as_slice(), &[BlockId(1), BlockId(3)]);

    let tick = s.next_frame();
    assert_eq!(tick.now, Millis(40.0));
    assert!(tick.due.is_empty());
}

#[test]
fn cancel_removes_only_that_owner() {
    let mut s = sched();
    s.request_frame(BlockId(0));
    s.request_frame(BlockId(1));
    assert!(s.cancel(BlockId(0)));
    assert!(!s.cancel(BlockId(0)));
    assert!(!s.is_pending(BlockId(0)));
    assert!(s.is_pending(BlockId(1)));
    assert_eq!(s.next_frame().due.as_slice(), &[BlockId(1)]);
}

#[test]
fn teardown_drops_pending_and_refuses_new_requests() {
    let mut s = sched();
    s.request_frame(BlockId(0));
    s.request_frame(BlockId(1));
    assert_eq!(s.teardown(), 2);
    assert!(s.is_torn_down());
    assert!(!s.request_frame(BlockId(2)));
    assert_eq!(s.pending_count(), 0);
    assert!(s.next_frame().due.is_empty());
}
