use crate::{
    animation::{reveal::RevealAnimator, spec::AnimationSpec},
    foundation::error::{FolioError, FolioResult},
    foundation::ids::{BlockId, CollectionId, ElementId, IdAllocator, ObserverId},
    render::{block::VisualBlock, diagnostic::Diagnostic},
    viewport::observer::{ObserveOptions, ObserverRegistry, VisibilitySignal},
};

/// Per-collection rendering parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollectionStyle {
    /// Animation shared by every block; `delay_ms` is replaced per index.
    pub template: AnimationSpec,
    /// Delay added per index: block `i` waits `i * stagger_step_ms` after the shared trigger.
    pub stagger_step_ms: f64,
    /// Container visibility rule.
    pub observe: ObserveOptions,
    /// Blocks per row in the layout.
    pub columns: u32,
}

/// A block wired to its own animator.
#[derive(Clone, Debug)]
pub struct BoundBlock {
    /// Block id, also the animator's frame-request owner.
    pub id: BlockId,
    /// Laid-out element of this block.
    pub element: ElementId,
    /// Position in the source sequence.
    pub index: usize,
    /// Visual tree.
    pub block: VisualBlock,
    /// Reveal state machine.
    pub animator: RevealAnimator,
}

/// An ordered run of blocks that reveal together from one container-level trigger.
#[derive(Clone, Debug)]
pub struct RenderedCollection {
    /// Collection id.
    pub id: CollectionId,
    /// Human-readable name used in logs and reports.
    pub label: String,
    /// Element the observer watches.
    pub container: ElementId,
    /// Live observer registration, `None` once detached.
    pub observer: Option<ObserverId>,
    /// Consumer side of the container's visibility signal.
    pub signal: VisibilitySignal,
    /// Layout columns.
    pub columns: u32,
    /// Blocks in source order.
    pub blocks: Vec<BoundBlock>,
    /// Degradations noticed while building the blocks.
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderedCollection {
    /// Effective delay of each block, in source order.
    pub fn delays_ms(&self) -> Vec<f64> {
        self.blocks
            .iter()
            .map(|b| b.animator.spec().delay_ms)
            .collect()
    }

    /// Block by id.
    pub fn block(&self, id: BlockId) -> Option<&BoundBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Mutable block by id.
    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut BoundBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }
}

/// Mutable page services the renderer attaches to.
pub struct RenderCtx<'a> {
    /// Id source.
    pub ids: &'a mut IdAllocator,
    /// Where the container observer is registered.
    pub observers: &'a mut ObserverRegistry,
}

/// Turn `entries` into bound blocks.
///
/// Block `i` is built by `factory(&entries[i])` and gets an animator with
/// `delay_ms = i * style.stagger_step_ms`. One observer is attached to a fresh container
/// element shared by the whole collection, so every block counts its delay from the same
/// trigger instant.
pub fn render<E>(
    label: impl Into<String>,
    entries: &[E],
    factory: impl Fn(&E) -> VisualBlock,
    style: &CollectionStyle,
    ctx: &mut RenderCtx<'_>,
) -> FolioResult<RenderedCollection> {
    let label = label.into();
    if !style.stagger_step_ms.is_finite() || style.stagger_step_ms < 0.0 {
        return Err(FolioError::validation(format!(
            "{label}: stagger step must be finite and >= 0, got {}",
            style.stagger_step_ms
        )));
    }
    if style.columns == 0 {
        return Err(FolioError::validation(format!(
            "{label}: columns must be > 0"
        )));
    }
    style.template.validate()?;

    let id = ctx.ids.collection();
    let container = ctx.ids.element();

    let mut blocks = Vec::with_capacity(entries.len());
    let mut diagnostics = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let block = factory(entry);
        let block_id = ctx.ids.block();
        for &note in &block.notes {
            let d = Diagnostic::from_note(id, block_id, note);
            tracing::warn!(collection = %label, "{d}");
            diagnostics.push(d);
        }
        let spec = style
            .template
            .with_delay(index as f64 * style.stagger_step_ms);
        blocks.push(BoundBlock {
            id: block_id,
            element: ctx.ids.element(),
            index,
            block,
            animator: RevealAnimator::new(block_id, spec),
        });
    }

    let observer = ctx.observers.observe(container, style.observe)?;
    tracing::debug!(
        collection = %label,
        blocks = blocks.len(),
        stagger_ms = style.stagger_step_ms,
        "collection rendered"
    );

    Ok(RenderedCollection {
        id,
        label,
        container,
        observer: Some(observer),
        signal: VisibilitySignal::new(style.observe.once),
        columns: style.columns,
        blocks,
        diagnostics,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
