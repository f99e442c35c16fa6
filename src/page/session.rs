//! A mounted page: rendered collections, their layout, the viewport and the frame clock.
//!
//! One [`Page`] owns every piece of mutable page state. Nothing is global; dropping or
//! [`Page::unmount`]ing the page releases the frame scheduler and every observer.

use std::sync::Arc;

use crate::{
    animation::reveal::{RevealPhase, RevealState},
    animation::visual::VisualState,
    clock::scheduler::FrameScheduler,
    content::model::SiteContent,
    foundation::core::{Millis, Rect},
    foundation::error::{FolioError, FolioResult},
    foundation::ids::{BlockId, CollectionId, ElementId, IdAllocator},
    layout::taffy_bridge::{PageLayout, SectionInput},
    page::config::PageConfig,
    render::block::BlockKind,
    render::diagnostic::Diagnostic,
    render::factory::{SectionIntro, capability_tile_block, project_block, section_header_block},
    render::renderer::{BoundBlock, CollectionStyle, RenderCtx, RenderedCollection, render},
    viewport::geometry::{ElementGeometry, Viewport},
    viewport::observer::ObserverRegistry,
};

/// Collection labels, in page order.
pub const ABOUT_HEADER: &str = "about.header";
/// Capability tiles.
pub const ABOUT_TILES: &str = "about.tiles";
/// Portfolio header.
pub const PORTFOLIO_HEADER: &str = "portfolio.header";
/// Projects.
pub const PORTFOLIO_PROJECTS: &str = "portfolio.projects";

#[derive(Clone, Debug)]
struct MountedSection {
    element: ElementId,
    collections: Vec<usize>,
}

/// A collection's shared trigger fired.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TriggerEvent {
    /// Collection whose container became visible.
    pub collection: CollectionId,
    /// Collection label.
    pub label: String,
    /// Shared trigger instant every block counts its delay from.
    pub at: Millis,
}

/// One animator emission.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BlockUpdate {
    /// Block that changed.
    pub block: BlockId,
    /// New output.
    pub visual: VisualState,
    /// Normalized progress after this update.
    pub progress: f64,
}

/// What happened during one [`Page::frame`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Frame number.
    pub frame: u64,
    /// Page clock at this frame.
    pub now: Millis,
    /// Collections triggered this frame.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggered: Vec<TriggerEvent>,
    /// Animator emissions, in ascending block order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<BlockUpdate>,
}

/// Observable state of one block.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlockSnapshot {
    /// Block id.
    pub block: BlockId,
    /// Owning collection.
    pub collection: CollectionId,
    /// Owning collection label.
    pub label: String,
    /// Index within the collection.
    pub index: usize,
    /// Source kind.
    pub kind: BlockKind,
    /// Animator phase.
    pub phase: RevealPhase,
    /// Reveal bookkeeping.
    pub state: RevealState,
    /// Current output.
    pub visual: VisualState,
    /// Stagger delay.
    pub delay_ms: f64,
    /// Laid-out bounds in document space.
    pub rect: Option<Rect>,
}

/// Whole-page state at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageSnapshot {
    /// Last completed frame.
    pub frame: u64,
    /// Page clock.
    pub now: Millis,
    /// Current scroll offset.
    pub scroll_y: f64,
    /// Document height.
    pub page_height: f64,
    /// Every mounted block, in page order.
    pub blocks: Vec<BlockSnapshot>,
}

/// A mounted About + Portfolio page.
#[derive(Debug)]
pub struct Page {
    config: PageConfig,
    content: Arc<SiteContent>,
    frames: FrameScheduler,
    observers: ObserverRegistry,
    viewport: Viewport,
    layout: PageLayout,
    sections: Vec<MountedSection>,
    collections: Vec<RenderedCollection>,
    render_diagnostics: Vec<Diagnostic>,
    layout_diagnostics: Vec<Diagnostic>,
    mounted: bool,
}

impl Page {
    /// Render `content`, lay it out and attach one observer per collection.
    ///
    /// Nothing is evaluated yet: the first [`Page::frame`] checks the initial viewport.
    #[tracing::instrument(skip_all, fields(width = config.viewport.width, height = config.viewport.height))]
    pub fn mount(content: Arc<SiteContent>, config: PageConfig) -> FolioResult<Self> {
        config.validate()?;

        let mut ids = IdAllocator::new();
        let mut observers = ObserverRegistry::new();
        let reveal = config.reveal;
        let style = |columns: u32| CollectionStyle {
            template: reveal.spec(),
            stagger_step_ms: reveal.stagger_ms,
            observe: reveal.observe(),
            columns,
        };

        let about_element = ids.element();
        let portfolio_element = ids.element();
        let about_intro = [SectionIntro {
            heading: &content.about.heading,
            intro: &content.about.intro,
        }];
        let portfolio_intro = [SectionIntro {
            heading: &content.portfolio.heading,
            intro: &content.portfolio.intro,
        }];

        let mut ctx = RenderCtx {
            ids: &mut ids,
            observers: &mut observers,
        };
        let collections = vec![
            render(
                ABOUT_HEADER,
                &about_intro,
                section_header_block,
                &style(1),
                &mut ctx,
            )?,
            render(
                ABOUT_TILES,
                &content.about.tiles,
                capability_tile_block,
                &style(config.tile_columns.0),
                &mut ctx,
            )?,
            render(
                PORTFOLIO_HEADER,
                &portfolio_intro,
                section_header_block,
                &style(1),
                &mut ctx,
            )?,
            render(
                PORTFOLIO_PROJECTS,
                &content.portfolio.projects,
                project_block,
                &style(config.project_columns.0),
                &mut ctx,
            )?,
        ];
        let sections = vec![
            MountedSection {
                element: about_element,
                collections: vec![0, 1],
            },
            MountedSection {
                element: portfolio_element,
                collections: vec![2, 3],
            },
        ];
        let render_diagnostics = collections
            .iter()
            .flat_map(|c| c.diagnostics.iter().copied())
            .collect();

        let mut page = Self {
            frames: FrameScheduler::new(config.fps, Millis::ZERO),
            viewport: Viewport::new(config.viewport.width, config.viewport.height),
            config,
            content,
            observers,
            layout: PageLayout::default(),
            sections,
            collections,
            render_diagnostics,
            layout_diagnostics: Vec::new(),
            mounted: true,
        };
        page.relayout()?;
        tracing::info!(
            collections = page.collections.len(),
            blocks = page.block_count(),
            page_height = page.layout.page_height(),
            "page mounted"
        );
        Ok(page)
    }

    /// Content this page was rendered from.
    pub fn content(&self) -> &Arc<SiteContent> {
        &self.content
    }

    /// Active configuration.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Rendered collections, in page order.
    pub fn collections(&self) -> &[RenderedCollection] {
        &self.collections
    }

    /// Collection by label.
    pub fn collection(&self, label: &str) -> Option<&RenderedCollection> {
        self.collections.iter().find(|c| c.label == label)
    }

    /// Current layout.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Page clock.
    pub fn now(&self) -> Millis {
        self.frames.now()
    }

    /// Mounted blocks across all collections.
    pub fn block_count(&self) -> usize {
        self.collections.iter().map(|c| c.blocks.len()).sum()
    }

    /// Live observer registrations.
    pub fn active_observers(&self) -> usize {
        self.observers.active_count()
    }

    /// Frame callbacks waiting for the next frame.
    pub fn pending_callbacks(&self) -> usize {
        self.frames.pending_count()
    }

    /// `false` after [`Page::unmount`].
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.layout.page_height() - self.viewport.size.height).max(0.0)
    }

    /// Scroll to `y`, clamped to the document. Returns the applied offset.
    ///
    /// Observers see the new position on the next frame.
    pub fn scroll_to(&mut self, y: f64) -> f64 {
        let y = if y.is_finite() { y } else { 0.0 };
        self.viewport.scroll_y = y.clamp(0.0, self.max_scroll());
        self.viewport.scroll_y
    }

    /// Change the window size and lay the page out again.
    pub fn resize(&mut self, width: f64, height: f64) -> FolioResult<()> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(FolioError::validation(format!(
                "viewport must be positive, got {width}x{height}"
            )));
        }
        let scroll_y = self.viewport.scroll_y;
        self.viewport = Viewport::new(width, height);
        self.config.viewport.width = width;
        self.config.viewport.height = height;
        self.relayout()?;
        self.scroll_to(scroll_y);
        Ok(())
    }

    /// Advance one frame: evaluate observers, fire shared triggers, then run the animator
    /// callbacks requested during the previous frame.
    pub fn frame(&mut self) -> FolioResult<FrameReport> {
        if !self.mounted {
            return Err(FolioError::validation("page is unmounted"));
        }
        let tick = self.frames.next_frame();
        let mut report = FrameReport {
            frame: tick.frame,
            now: tick.now,
            ..FrameReport::default()
        };

        let changes = self
            .observers
            .process(self.viewport.rect(), &self.layout, tick.now);
        for change in changes {
            let Some(c) = self
                .collections
                .iter_mut()
                .find(|c| c.observer == Some(change.observer))
            else {
                continue;
            };
            if change.visible && !self.observers.is_active(change.observer) {
                c.observer = None;
            }
            if !c.signal.set(change.visible, change.at) {
                continue;
            }
            if change.visible {
                for b in &mut c.blocks {
                    b.animator.trigger(change.at, &mut self.frames);
                }
                tracing::debug!(collection = %c.label, at = %change.at, ratio = change.ratio, "collection triggered");
                report.triggered.push(TriggerEvent {
                    collection: c.id,
                    label: c.label.clone(),
                    at: change.at,
                });
            } else {
                for b in &mut c.blocks {
                    b.animator.on_signal_lost(&mut self.frames);
                }
            }
        }

        for owner in tick.due {
            let Some(b) = self
                .collections
                .iter_mut()
                .flat_map(|c| c.blocks.iter_mut())
                .find(|b| b.id == owner)
            else {
                continue;
            };
            if let Some(visual) = b.animator.on_frame(tick.now, &mut self.frames) {
                report.updates.push(BlockUpdate {
                    block: b.id,
                    visual,
                    progress: b.animator.state().progress,
                });
            }
        }
        Ok(report)
    }

    /// Run as many frames as it takes to cover `span`.
    pub fn run_for(&mut self, span: Millis) -> FolioResult<Vec<FrameReport>> {
        if !span.0.is_finite() || span.0 < 0.0 {
            return Err(FolioError::validation(format!(
                "run span must be finite and >= 0, got {}",
                span.0
            )));
        }
        let n = self.frames.fps().frames_covering(span);
        (0..n).map(|_| self.frame()).collect()
    }

    /// Run frames until no callback is pending, at most `max_frames`. Returns frames run.
    pub fn run_until_settled(&mut self, max_frames: u64) -> FolioResult<u64> {
        let mut n = 0;
        while n < max_frames {
            self.frame()?;
            n += 1;
            if self.is_settled() {
                break;
            }
        }
        Ok(n)
    }

    /// No animator is waiting for a frame.
    pub fn is_settled(&self) -> bool {
        self.frames.pending_count() == 0
    }

    /// State of one block, or `None` if it is not mounted.
    pub fn block_state(&self, id: BlockId) -> Option<BlockSnapshot> {
        self.collections
            .iter()
            .find_map(|c| c.block(id).map(|b| self.snapshot_block(c, b)))
    }

    /// State of every mounted block.
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            frame: self.frames.frame(),
            now: self.frames.now(),
            scroll_y: self.viewport.scroll_y,
            page_height: self.layout.page_height(),
            blocks: self
                .collections
                .iter()
                .flat_map(|c| c.blocks.iter().map(move |b| (c, b)))
                .map(|(c, b)| self.snapshot_block(c, b))
                .collect(),
        }
    }

    fn snapshot_block(
        &self,
        c: &RenderedCollection,
        b: &BoundBlock,
    ) -> BlockSnapshot {
        BlockSnapshot {
            block: b.id,
            collection: c.id,
            label: c.label.clone(),
            index: b.index,
            kind: b.block.kind,
            phase: b.animator.phase(),
            state: b.animator.state(),
            visual: b.animator.current(),
            delay_ms: b.animator.spec().delay_ms,
            rect: self.layout.element_rect(b.element),
        }
    }

    /// Remove one block. Its animator stops immediately and leaves no pending callback.
    ///
    /// When the last block of a collection goes, the collection's observer is released
    /// without firing. Remaining blocks keep their indices and delays.
    pub fn unmount_block(&mut self, id: BlockId) -> FolioResult<bool> {
        let Some((ci, bi)) = self.collections.iter().enumerate().find_map(|(ci, c)| {
            c.blocks.iter().position(|b| b.id == id).map(|bi| (ci, bi))
        }) else {
            return Ok(false);
        };
        let c = &mut self.collections[ci];
        let mut bound = c.blocks.remove(bi);
        bound.animator.cancel(&mut self.frames);
        if c.blocks.is_empty()
            && let Some(observer) = c.observer.take()
        {
            self.observers.unobserve(observer);
            tracing::debug!(collection = %c.label, "last block unmounted, observer released");
        }
        self.render_diagnostics.retain(|d| !diagnostic_names_block(d, id));
        self.relayout()?;
        // The page may have shrunk under the viewport.
        let scroll_y = self.viewport.scroll_y;
        self.scroll_to(scroll_y);
        Ok(true)
    }

    /// Tear the page down: every animator is cancelled, the frame scheduler stops and every
    /// observer is released without firing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        for c in &mut self.collections {
            for b in &mut c.blocks {
                b.animator.cancel(&mut self.frames);
            }
            c.observer = None;
        }
        let dropped = self.frames.teardown();
        let released = self.observers.clear();
        self.collections.clear();
        self.sections.clear();
        self.mounted = false;
        tracing::debug!(dropped, released, "page unmounted");
    }

    /// Degraded conditions, render-time first then layout-time.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.render_diagnostics
            .iter()
            .chain(&self.layout_diagnostics)
            .copied()
            .collect()
    }

    fn relayout(&mut self) -> FolioResult<()> {
        let collections = &self.collections;
        let inputs: Vec<SectionInput<'_>> = self
            .sections
            .iter()
            .map(|s| SectionInput {
                element: s.element,
                collections: s.collections.iter().map(|&i| &collections[i]).collect(),
            })
            .collect();
        self.layout = PageLayout::compute(
            &inputs,
            &self.config.layout,
            self.viewport.size.width as f32,
        )?;

        self.layout_diagnostics.clear();
        for c in &self.collections {
            if c.observer.is_none() {
                continue;
            }
            let seen = self
                .layout
                .element_rect(c.container)
                .is_some_and(|r| r.area() > 0.0);
            if !seen {
                let d = Diagnostic::ObserverTargetMissing {
                    collection: c.id,
                    container: c.container,
                };
                tracing::warn!(collection = %c.label, "{d}");
                self.layout_diagnostics.push(d);
            }
        }
        Ok(())
    }
}

fn diagnostic_names_block(d: &Diagnostic, id: BlockId) -> bool {
    match d {
        Diagnostic::MissingAsset { block, .. } | Diagnostic::EmptySubsequence { block, .. } => {
            *block == id
        }
        Diagnostic::ObserverTargetMissing { .. } => false,
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/session.rs"]
mod tests;
