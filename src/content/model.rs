use std::path::Path;

use crate::foundation::error::{FolioError, FolioResult};
use crate::render::block::CardVariant;

/// Symbolic icon name, resolved by whatever draws icons. Passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    /// Wrap a symbolic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// `false` for blank names.
    pub fn is_resolvable(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

/// Path of an image resource. Never fetched or validated here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AssetPath(pub String);

impl AssetPath {
    /// Wrap a path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// `false` for blank paths.
    pub fn is_resolvable(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

/// One "what we do" tile in the About section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CapabilityTile {
    /// Short title.
    pub label: String,
    /// One or two sentences.
    pub description: String,
    /// Icon shown above the label.
    #[serde(default)]
    pub icon: Option<IconRef>,
    /// Card decoration; the tile factory picks one when absent.
    #[serde(default)]
    pub variant: Option<CardVariant>,
}

/// One project in the Portfolio gallery.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectEntry {
    /// Project name.
    pub title: String,
    /// Summary paragraph.
    pub description: String,
    /// Screenshot or hero image.
    #[serde(default)]
    pub image: Option<AssetPath>,
    /// Feature bullets, in display order.
    #[serde(default)]
    pub features: Vec<String>,
    /// Technology labels, in display order.
    #[serde(default)]
    pub tech_tags: Vec<String>,
    /// Icon next to the title.
    #[serde(default)]
    pub icon: Option<IconRef>,
    /// Card decoration; the project factory picks one when absent.
    #[serde(default)]
    pub variant: Option<CardVariant>,
}

/// The About panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AboutSection {
    /// Section title.
    pub heading: String,
    /// Paragraphs under the title.
    #[serde(default)]
    pub intro: Vec<String>,
    /// Capability tiles, in display order.
    #[serde(default)]
    pub tiles: Vec<CapabilityTile>,
}

/// The Portfolio gallery.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PortfolioSection {
    /// Section title.
    pub heading: String,
    /// Paragraphs under the title.
    #[serde(default)]
    pub intro: Vec<String>,
    /// Projects, in display order.
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// All static page content. Shared read-only by everything rendered from it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteContent {
    /// About panel.
    pub about: AboutSection,
    /// Portfolio gallery.
    pub portfolio: PortfolioSection,
}

impl SiteContent {
    /// Parse content from a JSON string.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        serde_json::from_str(s).map_err(|e| FolioError::content(format!("parse content JSON: {e}")))
    }

    /// Read and parse a JSON content file.
    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
