use super::*;
use crate::animation::spec::AnimationSpec;
use crate::content::model::CapabilityTile;
use crate::foundation::ids::IdAllocator;
use crate::render::factory::capability_tile_block;
use crate::render::renderer::{CollectionStyle, RenderCtx, render};
use crate::viewport::observer::{ObserveOptions, ObserverRegistry};

fn metrics() -> LayoutMetrics {
    LayoutMetrics {
        section_padding_px: 10.0,
        section_gap_px: 5.0,
        block_gap_px: 4.0,
        card_padding_px: 0.0,
        node_gap_px: 0.0,
        char_width_px: 1.0,
        line_height_px: 10.0,
        title_line_px: 20.0,
        icon_px: 0.0,
        ..LayoutMetrics::default()
    }
}

fn tiles(n: usize) -> Vec<CapabilityTile> {
    (0..n)
        .map(|_| CapabilityTile {
            label: "L".to_owned(),
            description: "D".to_owned(),
            icon: None,
            variant: None,
        })
        .collect()
}

fn collection(
    entries: &[CapabilityTile],
    columns: u32,
    ids: &mut IdAllocator,
    observers: &mut ObserverRegistry,
) -> RenderedCollection {
    let style = CollectionStyle {
        template: AnimationSpec::fade_rise(24.0, 100.0),
        stagger_step_ms: 50.0,
        observe: ObserveOptions::default(),
        columns,
    };
    let mut ctx = RenderCtx { ids, observers };
    render("tiles", entries, capability_tile_block, &style, &mut ctx).unwrap()
}

#[test]
fn sections_stack_and_blocks_wrap_into_rows() {
    let mut ids = IdAllocator::new();
    let mut observers = ObserverRegistry::new();
    let grid_entries = tiles(3);
    let single_entries = tiles(1);
    let grid = collection(&grid_entries, 2, &mut ids, &mut observers);
    let single = collection(&single_entries, 1, &mut ids, &mut observers);
    let s0 = ids.element();
    let s1 = ids.element();

    let layout = PageLayout::compute(
        &[
            SectionInput {
                element: s0,
                collections: vec![&grid],
            },
            SectionInput {
                element: s1,
                collections: vec![&single],
            },
        ],
        &metrics(),
        210.0,
    )
    .unwrap();

    let r = |id| layout.element_rect(id).unwrap();
    assert_eq!(r(s0), Rect::new(0.0, 0.0, 210.0, 84.0));
    assert_eq!(r(grid.container), Rect::new(10.0, 10.0, 200.0, 74.0));
    assert_eq!(r(grid.blocks[0].element), Rect::new(10.0, 10.0, 103.0, 40.0));
    assert_eq!(r(grid.blocks[1].element), Rect::new(107.0, 10.0, 200.0, 40.0));
    assert_eq!(r(grid.blocks[2].element), Rect::new(10.0, 44.0, 103.0, 74.0));
    assert_eq!(r(s1), Rect::new(0.0, 84.0, 210.0, 134.0));
    assert_eq!(r(single.blocks[0].element), Rect::new(10.0, 94.0, 200.0, 124.0));
    assert_eq!(layout.page_height(), 134.0);
}

#[test]
fn empty_collection_has_zero_height_container() {
    let mut ids = IdAllocator::new();
    let mut observers = ObserverRegistry::new();
    let empty = collection(&[], 1, &mut ids, &mut observers);
    let s0 = ids.element();
    let layout = PageLayout::compute(
        &[SectionInput {
            element: s0,
            collections: vec![&empty],
        }],
        &metrics(),
        210.0,
    )
    .unwrap();
    let rect = layout.element_rect(empty.container).unwrap();
    assert_eq!(rect.height(), 0.0);
    assert_eq!(layout.page_height(), 20.0);
}

#[test]
fn unknown_element_has_no_rect() {
    let layout = PageLayout::compute(&[], &metrics(), 100.0).unwrap();
    assert_eq!(layout.element_rect(ElementId(99)), None);
    assert_eq!(layout.page_height(), 0.0);
}
