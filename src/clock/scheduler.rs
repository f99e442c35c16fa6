use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::foundation::core::{Fps, Millis};
use crate::foundation::ids::BlockId;

/// One frame boundary handed out by [`FrameScheduler::next_frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameTick {
    /// 1-based frame counter.
    pub frame: u64,
    /// Page clock at this frame.
    pub now: Millis,
    /// Owners whose callbacks run this frame, ascending.
    pub due: SmallVec<[BlockId; 16]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Running,
    TornDown,
}

/// Page-wide frame clock with one-shot, per-owner frame requests.
///
/// Requests behave like `requestAnimationFrame`: a request runs on the next frame only and the
/// owner must re-request to keep animating. Requests are de-duplicated per owner.
///
/// Determinism rule: due owners are returned in ascending [`BlockId`] order.
#[derive(Debug)]
pub struct FrameScheduler {
    fps: Fps,
    now: Millis,
    frame: u64,
    pending: BTreeSet<BlockId>,
    lifecycle: Lifecycle,
}

impl FrameScheduler {
    /// Scheduler whose clock starts at `start`.
    pub fn new(fps: Fps, start: Millis) -> Self {
        Self {
            fps,
            now: start,
            frame: 0,
            pending: BTreeSet::new(),
            lifecycle: Lifecycle::Running,
        }
    }

    /// Current page clock.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Frames produced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Configured frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Ask for a callback on the next frame. Returns `false` once torn down.
    pub fn request_frame(&mut self, owner: BlockId) -> bool {
        if self.lifecycle == Lifecycle::TornDown {
            tracing::trace!(?owner, "frame request after teardown ignored");
            return false;
        }
        self.pending.insert(owner);
        true
    }

    /// Drop `owner`'s pending request, if any.
    pub fn cancel(&mut self, owner: BlockId) -> bool {
        self.pending.remove(&owner)
    }

    /// Whether `owner` has a callback scheduled.
    pub fn is_pending(&self, owner: BlockId) -> bool {
        self.pending.contains(&owner)
    }

    /// Number of scheduled callbacks.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// `true` once [`teardown`](Self::teardown) ran.
    pub fn is_torn_down(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    /// Advance the clock by one frame and drain the pending requests.
    pub fn next_frame(&mut self) -> FrameTick {
        self.frame += 1;
        self.now = self.now.after(self.fps.frame_duration());
        let due = std::mem::take(&mut self.pending).into_iter().collect();
        FrameTick {
            frame: self.frame,
            now: self.now,
            due,
        }
    }

    /// Stop the service: pending callbacks are dropped and new requests are refused.
    ///
    /// Returns how many callbacks were dropped.
    pub fn teardown(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.lifecycle = Lifecycle::TornDown;
        tracing::debug!(dropped, frame = self.frame, "frame scheduler torn down");
        dropped
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/scheduler.rs"]
mod tests;
