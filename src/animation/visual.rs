/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// `a` at `t = 0`, `b` at `t = 1`. `t` is not clamped.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// The visual properties a reveal drives on its block.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// `0.0` transparent, `1.0` opaque.
    pub opacity: f64,
    /// Vertical displacement from the laid-out position, in px (positive is down).
    pub offset_y: f64,
}

impl VisualState {
    /// Fully shown at the laid-out position.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Convenience constructor.
    pub fn new(opacity: f64, offset_y: f64) -> Self {
        Self { opacity, offset_y }
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Overshooting curves must not push opacity outside its domain.
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t).clamp(0.0, 1.0),
            offset_y: <f64 as Lerp>::lerp(&a.offset_y, &b.offset_y, t),
        }
    }
}
