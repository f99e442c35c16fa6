//! One-shot reveal animator.
//!
//! Each rendered block owns one [`RevealAnimator`]. It is an explicit state machine:
//!
//! ```text
//! Idle --trigger--> Waiting --delay elapsed--> Running --duration elapsed--> Settled
//!   \                  \                          \
//!    `-----------------`--------------------------`--cancel--> Cancelled
//! ```
//!
//! The animator never touches a clock directly. Time and frame requests flow through the
//! [`FrameScheduler`] passed into each call.

use crate::{
    animation::{spec::AnimationSpec, visual::Lerp, visual::VisualState},
    clock::scheduler::FrameScheduler,
    foundation::core::Millis,
    foundation::ids::BlockId,
};

/// Per-block reveal bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealState {
    /// Flips to `true` once, at the first trigger. Never reverts for one-shot reveals.
    pub has_triggered: bool,
    /// Normalized (un-eased) progress in `[0, 1]`.
    pub progress: f64,
}

/// Where the animator is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RevealPhase {
    /// Waiting for the trigger; output pinned to `initial`.
    Idle,
    /// Triggered; interpolation starts at `start_at`.
    Waiting {
        /// Trigger instant plus delay.
        start_at: Millis,
    },
    /// Interpolating.
    Running {
        /// Instant progress was zero.
        start_at: Millis,
    },
    /// Holding `target`; no more updates.
    Settled,
    /// Stopped by unmount; output frozen where it was.
    Cancelled,
}

/// Drives one block's visual properties from `spec.initial` to `spec.target`.
#[derive(Clone, Debug)]
pub struct RevealAnimator {
    owner: BlockId,
    spec: AnimationSpec,
    phase: RevealPhase,
    state: RevealState,
    current: VisualState,
    emitted: u64,
}

impl RevealAnimator {
    /// New animator in the `Idle` phase, showing `spec.initial`.
    pub fn new(owner: BlockId, spec: AnimationSpec) -> Self {
        Self {
            owner,
            current: spec.initial,
            spec,
            phase: RevealPhase::Idle,
            state: RevealState::default(),
            emitted: 0,
        }
    }

    /// The block this animator belongs to.
    pub fn owner(&self) -> BlockId {
        self.owner
    }

    /// Parameters it was built with.
    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Trigger/progress bookkeeping.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Most recent output (or `initial` before any update).
    pub fn current(&self) -> VisualState {
        self.current
    }

    /// Number of updates emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// `true` while the animator may still produce updates.
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            RevealPhase::Waiting { .. } | RevealPhase::Running { .. }
        )
    }

    /// Start the reveal at instant `at`. The first interpolated frame is scheduled for
    /// `at + delay`.
    ///
    /// Returns `false` when the trigger is ignored: already triggered, or cancelled.
    pub fn trigger(&mut self, at: Millis, frames: &mut FrameScheduler) -> bool {
        if self.state.has_triggered || self.phase == RevealPhase::Cancelled {
            return false;
        }
        self.state.has_triggered = true;
        let start_at = at.after(self.spec.delay());
        self.phase = RevealPhase::Waiting { start_at };
        frames.request_frame(self.owner);
        tracing::debug!(owner = ?self.owner, %at, %start_at, "reveal triggered");
        true
    }

    /// The trigger signal went back to `false`.
    ///
    /// One-shot reveals ignore this. Replaying reveals reset to `Idle` and snap back to
    /// `initial` so the next trigger plays from the start.
    pub fn on_signal_lost(&mut self, frames: &mut FrameScheduler) {
        if self.spec.trigger_once || !self.state.has_triggered {
            return;
        }
        if self.phase == RevealPhase::Cancelled {
            return;
        }
        frames.cancel(self.owner);
        self.phase = RevealPhase::Idle;
        self.state = RevealState::default();
        self.current = self.spec.initial;
    }

    /// Frame callback. Returns the new output when one is emitted.
    ///
    /// Nothing is emitted before `start_at`. The final emission equals `spec.target` exactly;
    /// afterwards the animator stops requesting frames.
    pub fn on_frame(&mut self, now: Millis, frames: &mut FrameScheduler) -> Option<VisualState> {
        let start_at = match self.phase {
            RevealPhase::Idle | RevealPhase::Settled | RevealPhase::Cancelled => return None,
            RevealPhase::Waiting { start_at } | RevealPhase::Running { start_at } => start_at,
        };

        if now < start_at {
            frames.request_frame(self.owner);
            return None;
        }

        let elapsed = now.since(start_at).0;
        let duration = self.spec.duration_ms;
        if duration <= 0.0 || elapsed >= duration {
            self.current = self.spec.target;
            self.state.progress = 1.0;
            self.phase = RevealPhase::Settled;
            self.emitted += 1;
            tracing::debug!(owner = ?self.owner, %now, "reveal settled");
            return Some(self.current);
        }

        let progress = (elapsed / duration).clamp(0.0, 1.0);
        self.state.progress = progress;
        self.current = VisualState::lerp(
            &self.spec.initial,
            &self.spec.target,
            self.spec.ease.apply(progress),
        );
        self.phase = RevealPhase::Running { start_at };
        self.emitted += 1;
        frames.request_frame(self.owner);
        Some(self.current)
    }

    /// Stop this instance: its pending frame is dropped and no further updates happen.
    pub fn cancel(&mut self, frames: &mut FrameScheduler) {
        frames.cancel(self.owner);
        if self.phase != RevealPhase::Cancelled {
            tracing::trace!(owner = ?self.owner, phase = ?self.phase, "reveal cancelled");
        }
        self.phase = RevealPhase::Cancelled;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
