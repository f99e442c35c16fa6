use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::{Point, Rect, Size};

/// A point (or span) on the page clock, in milliseconds.
///
/// The page clock starts at `0` when the page mounts and only moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Millis(pub f64);

impl Millis {
    /// Clock origin.
    pub const ZERO: Self = Self(0.0);

    /// Construct from whole milliseconds.
    pub fn from_u64(ms: u64) -> Self {
        Self(ms as f64)
    }

    /// `self + span`.
    pub fn after(self, span: Millis) -> Self {
        Self(self.0 + span.0)
    }

    /// Elapsed time from `earlier` to `self`, floored at zero.
    pub fn since(self, earlier: Millis) -> Millis {
        Self((self.0 - earlier.0).max(0.0))
    }

    /// Raw value.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}ms", self.0)
    }
}

/// Frame rate of the simulated display, as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

impl Fps {
    /// Create a validated frame rate.
    pub fn new(num: u32, den: u32) -> FolioResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Reject zero numerators/denominators.
    pub fn validate(self) -> FolioResult<()> {
        if self.den == 0 {
            return Err(FolioError::validation("fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(FolioError::validation("fps num must be > 0"));
        }
        Ok(())
    }

    /// Convert to floating-point frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame.
    pub fn frame_duration(self) -> Millis {
        Millis(1000.0 * f64::from(self.den) / f64::from(self.num))
    }

    /// Number of whole frames needed to cover `span` (ceil).
    pub fn frames_covering(self, span: Millis) -> u64 {
        let per = self.frame_duration().0;
        (span.0 / per).ceil().max(0.0) as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
