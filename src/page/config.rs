use std::path::Path;

use crate::{
    animation::{ease::Ease, spec::AnimationSpec, visual::VisualState},
    foundation::core::Fps,
    foundation::error::{FolioError, FolioResult},
    layout::measure::LayoutMetrics,
    viewport::observer::ObserveOptions,
};

/// Visible window size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in px.
    pub width: f64,
    /// Height in px.
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// The reveal every rendered block plays.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a collection container that must be visible to trigger.
    pub threshold: f64,
    /// Interpolation time per block.
    pub duration_ms: f64,
    /// Extra delay per index within a collection.
    pub stagger_ms: f64,
    /// Opacity before the reveal.
    pub initial_opacity: f64,
    /// Downward offset before the reveal; blocks rise by this much.
    pub offset_y: f64,
    /// Timing curve.
    pub ease: Ease,
    /// Play once and never again.
    pub trigger_once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            duration_ms: 500.0,
            stagger_ms: 100.0,
            initial_opacity: 0.0,
            offset_y: 24.0,
            ease: Ease::OutCubic,
            trigger_once: true,
        }
    }
}

impl RevealConfig {
    /// Animation template; per-block delays are filled in by the renderer.
    pub fn spec(&self) -> AnimationSpec {
        AnimationSpec {
            initial: VisualState::new(self.initial_opacity, self.offset_y),
            target: VisualState::SHOWN,
            duration_ms: self.duration_ms,
            delay_ms: 0.0,
            trigger_once: self.trigger_once,
            ease: self.ease,
        }
    }

    /// Container observer options.
    pub fn observe(&self) -> ObserveOptions {
        ObserveOptions {
            threshold: self.threshold,
            once: self.trigger_once,
        }
    }
}

/// Everything tunable about a page. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Visible window.
    pub viewport: ViewportConfig,
    /// Simulated display refresh rate.
    pub fps: Fps,
    /// Reveal animation.
    pub reveal: RevealConfig,
    /// Sizing metrics.
    pub layout: LayoutMetrics,
    /// Grid layout of the capability tiles.
    pub tile_columns: TileColumns,
    /// Grid layout of the projects.
    pub project_columns: ProjectColumns,
}

/// Columns for capability tiles (default 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TileColumns(pub u32);

impl Default for TileColumns {
    fn default() -> Self {
        Self(2)
    }
}

/// Columns for projects (default 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProjectColumns(pub u32);

impl Default for ProjectColumns {
    fn default() -> Self {
        Self(1)
    }
}

impl PageConfig {
    /// Parse a JSON config.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the engine cannot honor.
    pub fn validate(&self) -> FolioResult<()> {
        let vp = self.viewport;
        if !(vp.width.is_finite() && vp.height.is_finite()) || vp.width <= 0.0 || vp.height <= 0.0
        {
            return Err(FolioError::validation(format!(
                "viewport must be positive, got {}x{}",
                vp.width, vp.height
            )));
        }
        self.fps.validate()?;
        self.reveal.spec().validate()?;
        self.reveal.observe().validate()?;
        if !self.reveal.stagger_ms.is_finite() || self.reveal.stagger_ms < 0.0 {
            return Err(FolioError::validation(format!(
                "stagger_ms must be finite and >= 0, got {}",
                self.reveal.stagger_ms
            )));
        }
        self.layout.validate()?;
        if self.tile_columns.0 == 0 || self.project_columns.0 == 0 {
            return Err(FolioError::validation("column counts must be > 0"));
        }
        Ok(())
    }
}
