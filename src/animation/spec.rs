use crate::{
    animation::{ease::Ease, visual::VisualState},
    foundation::core::Millis,
    foundation::error::{FolioError, FolioResult},
};

/// Configuration of one reveal: where it starts, where it ends, and when.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSpec {
    /// Output before the trigger fires.
    pub initial: VisualState,
    /// Output once the reveal completes.
    pub target: VisualState,
    /// Interpolation time. `0` jumps straight to `target`.
    pub duration_ms: f64,
    /// Wait between the trigger instant and the first interpolated frame.
    pub delay_ms: f64,
    /// Once started, never replay.
    pub trigger_once: bool,
    /// Timing curve.
    #[serde(default)]
    pub ease: Ease,
}

impl AnimationSpec {
    /// Fade in while rising `rise_px` into place.
    pub fn fade_rise(rise_px: f64, duration_ms: f64) -> Self {
        Self {
            initial: VisualState::new(0.0, rise_px),
            target: VisualState::SHOWN,
            duration_ms,
            delay_ms: 0.0,
            trigger_once: true,
            ease: Ease::default(),
        }
    }

    /// Same spec with a different start delay.
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Same spec with a different timing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Delay as a clock span.
    pub fn delay(&self) -> Millis {
        Millis(self.delay_ms)
    }

    /// Duration as a clock span.
    pub fn duration(&self) -> Millis {
        Millis(self.duration_ms)
    }

    /// Reject values the animator cannot honor.
    pub fn validate(&self) -> FolioResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(FolioError::validation(format!(
                "animation duration must be finite and >= 0, got {}",
                self.duration_ms
            )));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(FolioError::validation(format!(
                "animation delay must be finite and >= 0, got {}",
                self.delay_ms
            )));
        }
        for (name, v) in [("initial", self.initial), ("target", self.target)] {
            if !(0.0..=1.0).contains(&v.opacity) {
                return Err(FolioError::validation(format!(
                    "{name} opacity must be in [0, 1], got {}",
                    v.opacity
                )));
            }
            if !v.offset_y.is_finite() {
                return Err(FolioError::validation(format!(
                    "{name} offset_y must be finite"
                )));
            }
        }
        Ok(())
    }
}
