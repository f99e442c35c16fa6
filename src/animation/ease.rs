/// Timing curve applied to normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out. Default for reveals.
    #[default]
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` with fixed endpoints `(0,0)` and `(1,1)`.
    ///
    /// `x1` and `x2` are clamped into `[0, 1]` so the curve stays a function of time.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// The CSS `ease` keyword.
    pub const CSS_EASE: Self = Self::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    /// Map progress `t` (clamped into `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let x1 = x1.clamp(0.0, 1.0);
                let x2 = x2.clamp(0.0, 1.0);
                let s = solve_bezier_param(t, x1, x2);
                bezier_coord(s, y1, y2)
            }
        }
    }
}

fn bezier_coord(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate equals `x`.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(s, x1, x2) - x;
        if err.abs() < EPS {
            return s;
        }
        let d = bezier_slope(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    // Newton stalled on a flat segment; x(s) is monotonic for clamped x1/x2.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = bezier_coord(s, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
