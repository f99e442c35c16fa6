use std::collections::{BTreeMap, HashMap};

use taffy::prelude::{AvailableSpace, NodeId, Size};
use taffy::style::{
    AlignItems, Dimension, Display, FlexDirection, FlexWrap, LengthPercentage, Style,
};

use crate::foundation::core::Rect;
use crate::foundation::error::FolioResult;
use crate::foundation::ids::ElementId;
use crate::layout::measure::{LayoutMetrics, block_height};
use crate::render::renderer::RenderedCollection;
use crate::viewport::geometry::ElementGeometry;

/// One page section: its own element plus the collections stacked inside it, top to bottom.
#[derive(Clone, Debug)]
pub struct SectionInput<'a> {
    /// Section element.
    pub element: ElementId,
    /// Collections in display order.
    pub collections: Vec<&'a RenderedCollection>,
}

/// Document-space rectangles for every laid-out element.
///
/// Built with a throwaway Taffy tree: page column → section columns (padded) → collection
/// containers (wrapping rows) → fixed-size block leaves.
#[derive(Clone, Debug, Default)]
pub struct PageLayout {
    rects: BTreeMap<ElementId, Rect>,
    width: f64,
    page_height: f64,
}

impl ElementGeometry for PageLayout {
    fn element_rect(&self, id: ElementId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }
}

fn px(v: f32) -> LengthPercentage {
    LengthPercentage::length(v)
}

impl PageLayout {
    /// Lay `sections` out in a page `width` px wide.
    #[tracing::instrument(skip(sections, metrics), fields(sections = sections.len()))]
    pub fn compute(
        sections: &[SectionInput<'_>],
        metrics: &LayoutMetrics,
        width: f32,
    ) -> FolioResult<Self> {
        metrics.validate()?;
        let width = width.max(0.0);
        let inner_w = (width - 2.0 * metrics.section_padding_px).max(0.0);
        let gap = metrics.block_gap_px;

        let mut taffy = taffy::TaffyTree::<()>::new();
        let mut elements: HashMap<NodeId, ElementId> = HashMap::new();
        let mut section_nodes = Vec::with_capacity(sections.len());

        for section in sections {
            let mut collection_nodes = Vec::with_capacity(section.collections.len());
            for c in &section.collections {
                let cols = c.columns.max(1) as f32;
                let block_w = ((inner_w - gap * (cols - 1.0)) / cols).floor().max(0.0);

                let mut leaves = Vec::with_capacity(c.blocks.len());
                for b in &c.blocks {
                    let h = block_height(&b.block, block_w, metrics);
                    let leaf = taffy.new_leaf(Style {
                        size: Size {
                            width: Dimension::length(block_w),
                            height: Dimension::length(h),
                        },
                        flex_shrink: 0.0,
                        ..Style::default()
                    })?;
                    elements.insert(leaf, b.element);
                    leaves.push(leaf);
                }

                let container = taffy.new_with_children(
                    Style {
                        display: Display::Flex,
                        flex_direction: FlexDirection::Row,
                        flex_wrap: FlexWrap::Wrap,
                        align_items: Some(AlignItems::Start),
                        gap: Size {
                            width: px(gap),
                            height: px(gap),
                        },
                        size: Size {
                            width: Dimension::length(inner_w),
                            height: Dimension::auto(),
                        },
                        flex_shrink: 0.0,
                        ..Style::default()
                    },
                    &leaves,
                )?;
                elements.insert(container, c.container);
                collection_nodes.push(container);
            }

            let p = px(metrics.section_padding_px);
            let node = taffy.new_with_children(
                Style {
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    padding: taffy::geometry::Rect {
                        left: p,
                        right: p,
                        top: p,
                        bottom: p,
                    },
                    gap: Size {
                        width: px(0.0),
                        height: px(metrics.section_gap_px),
                    },
                    size: Size {
                        width: Dimension::length(width),
                        height: Dimension::auto(),
                    },
                    flex_shrink: 0.0,
                    ..Style::default()
                },
                &collection_nodes,
            )?;
            elements.insert(node, section.element);
            section_nodes.push(node);
        }

        let root = taffy.new_with_children(
            Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                size: Size {
                    width: Dimension::length(width),
                    height: Dimension::auto(),
                },
                ..Style::default()
            },
            &section_nodes,
        )?;
        taffy.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(width),
                height: AvailableSpace::MaxContent,
            },
        )?;

        let mut rects = BTreeMap::new();
        collect_rects(&taffy, root, (0.0, 0.0), &elements, &mut rects)?;
        let page_height = f64::from(taffy.layout(root)?.size.height);
        tracing::debug!(elements = rects.len(), page_height, "page laid out");

        Ok(Self {
            rects,
            width: f64::from(width),
            page_height,
        })
    }

    /// Total document height.
    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Document width the layout was computed for.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// All element rectangles, by id.
    pub fn rects(&self) -> &BTreeMap<ElementId, Rect> {
        &self.rects
    }
}

fn collect_rects(
    taffy: &taffy::TaffyTree<()>,
    node: NodeId,
    parent_origin: (f64, f64),
    elements: &HashMap<NodeId, ElementId>,
    out: &mut BTreeMap<ElementId, Rect>,
) -> FolioResult<()> {
    let l = taffy.layout(node)?;
    let x = parent_origin.0 + f64::from(l.location.x);
    let y = parent_origin.1 + f64::from(l.location.y);
    if let Some(&id) = elements.get(&node) {
        out.insert(
            id,
            Rect::new(
                x,
                y,
                x + f64::from(l.size.width),
                y + f64::from(l.size.height),
            ),
        );
    }
    for child in taffy.children(node)? {
        collect_rects(taffy, child, (x, y), elements, out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/taffy_bridge.rs"]
mod tests;
