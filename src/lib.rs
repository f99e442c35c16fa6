//! Folio is a headless engine for a scroll-revealed About + Portfolio page.
//!
//! Static [`SiteContent`] is rendered into ordered collections of [`VisualBlock`]s. Every
//! block owns a [`RevealAnimator`]; every collection shares one container-level visibility
//! trigger and staggers its blocks by index. Time only moves when the caller asks for a
//! frame, so a whole scroll session is reproducible:
//!
//! - Build a [`Page`] with [`Page::mount`]
//! - Move the viewport with [`Page::scroll_to`] / [`Page::resize`]
//! - Drive it with [`Page::frame`] or [`Page::run_for`] and inspect [`Page::snapshot`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod clock;
pub(crate) mod content;
pub(crate) mod layout;
pub(crate) mod page;
pub(crate) mod render;
pub(crate) mod viewport;

pub use crate::foundation::core::{Fps, Millis, Point, Rect, Size};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::foundation::ids::{BlockId, CollectionId, ElementId, IdAllocator, ObserverId};

pub use crate::animation::ease::Ease;
pub use crate::animation::reveal::{RevealAnimator, RevealPhase, RevealState};
pub use crate::animation::spec::AnimationSpec;
pub use crate::animation::visual::{Lerp, VisualState};
pub use crate::clock::scheduler::{FrameScheduler, FrameTick};
pub use crate::content::model::{
    AboutSection, AssetPath, CapabilityTile, IconRef, PortfolioSection, ProjectEntry, SiteContent,
};
pub use crate::layout::measure::{LayoutMetrics, block_height};
pub use crate::layout::taffy_bridge::{PageLayout, SectionInput};
pub use crate::page::config::{
    PageConfig, ProjectColumns, RevealConfig, TileColumns, ViewportConfig,
};
pub use crate::page::session::{
    ABOUT_HEADER, ABOUT_TILES, BlockSnapshot, BlockUpdate, FrameReport, PORTFOLIO_HEADER,
    PORTFOLIO_PROJECTS, Page, PageSnapshot, TriggerEvent,
};
pub use crate::render::block::{
    AssetField, BlockKind, BlockNote, CardVariant, Chip, FEATURE_BULLET, FeatureItem, ListField,
    Node, VisualBlock,
};
pub use crate::render::diagnostic::Diagnostic;
pub use crate::render::factory::{
    SectionIntro, capability_tile_block, project_block, section_header_block,
};
pub use crate::render::renderer::{
    BoundBlock, CollectionStyle, RenderCtx, RenderedCollection, render,
};
pub use crate::viewport::geometry::{ElementGeometry, Viewport, intersection_ratio};
pub use crate::viewport::observer::{
    ObserveOptions, ObserverRegistry, VisibilityChange, VisibilitySignal,
};
