use super::*;
use crate::content::model::{AssetPath, ProjectEntry, SiteContent};
use crate::render::factory::{capability_tile_block, project_block};

fn style(step: f64) -> CollectionStyle {
    CollectionStyle {
        template: AnimationSpec::fade_rise(24.0, 500.0),
        stagger_step_ms: step,
        observe: ObserveOptions::default(),
        columns: 1,
    }
}

#[test]
fn delay_is_index_times_step() {
    let content = SiteContent::builtin();
    let mut ids = IdAllocator::new();
    let mut observers = ObserverRegistry::new();
    let mut ctx = RenderCtx {
        ids: &mut ids,
        observers: &mut observers,
    };
    let c = render(
        "tiles",
        &content.about.tiles,
        capability_tile_block,
        &style(150.0),
        &mut ctx,
    )
    .unwrap();

    assert_eq!(c.delays_ms(), vec![0.0, 150.0, 300.0, 450.0]);
    assert!(c.delays_ms().windows(2).all(|w| w[0] < w[1]));
    for (i, b) in c.blocks.iter().enumerate() {
        assert_eq!(b.index, i);
        assert_eq!(b.animator.owner(), b.id);
        assert!(!b.animator.state().has_triggered);
    }
}

#[test]
fn zero_step_gives_all_blocks_the_same_start() {
    let content = SiteContent::builtin();
    let mut ids = IdAllocator::new();
    let mut observers = ObserverRegistry::new();
    let mut ctx = RenderCtx {
        ids: &mut ids,
        observers: &mut observers,
    };
    let c = render(
        "projects",
        &content.portfolio.projects,
        project_block,
        &style(0.0),
        &mut ctx,
    )
    .unwrap();
    assert!(c.delays_ms().iter().all(|d| *d == 0.0));
}

#[test]
fn one_observer_per_collection_on_the_container() {
    let content = SiteContent::builtin();
    let mut ids = IdAllocator::new();
    let mut observers = ObserverRegistry::new();
    let mut ctx = RenderCtx {
        ids: &mut ids,
        observers: &mut observers,
    };
    let c = render(
        "tiles",
        &content.about.tiles,
        capability_tile_block,
        &style(100.0),
        &mut ctx,
    )
    .unwrap();

    assert_eq!(observers.active_count(), 1);
    assert!(c.observer.is_some());
    assert!(c.blocks.iter().all(|b| b.element != c.container));
    assert!(!c.signal.get());
}

#[test]
fn degraded_entries_are_rendered_and_reported() {
    let entries = vec![ProjectEntry {
        title: "Bare".to_owned(),
        description: "No extras".to_owned(),
        image: Some(AssetPath::new("")),
        features: vec![],
        tech_tags: vec![],
        icon: None,
        variant: None,
    }];
    let mut ids = IdAllocator::new();
    let mut observers = ObserverRegistry::new();
    let mut ctx = RenderCtx {
        ids: &mut ids,
        observers: &mut observers,
    };
    let c = render("projects", &entries, project_block, &style(100.0), &mut ctx).unwrap();
    assert_eq!(c.blocks.len(), 1);
    assert_eq!(c.diagnostics.len(), 4);
}

#[test]
fn negative_step_and_zero_columns_are_rejected() {
    let content = SiteContent::builtin();
    let mut ids = IdAllocator::new();
    let mut observers = ObserverRegistry::new();
    let mut ctx = RenderCtx {
        ids: &mut ids,
        observers: &mut observers,
    };
    assert!(
        render(
            "tiles",
            &content.about.tiles,
            capability_tile_block,
            &style(-1.0),
            &mut ctx
        )
        .is_err()
    );
    let mut bad = style(10.0);
    bad.columns = 0;
    assert!(render("tiles", &content.about.tiles, capability_tile_block, &bad, &mut ctx).is_err());
    assert_eq!(observers.active_count(), 0);
}
