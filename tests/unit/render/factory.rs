use super::*;

fn project(features: &[&str], tags: &[&str]) -> ProjectEntry {
    ProjectEntry {
        title: "T".to_owned(),
        description: "D".to_owned(),
        image: Some(AssetPath::new("/img/t.png")),
        features: features.iter().map(|s| (*s).to_owned()).collect(),
        tech_tags: tags.iter().map(|s| (*s).to_owned()).collect(),
        icon: Some(IconRef::new("star")),
        variant: None,
    }
}

#[test]
fn features_expand_in_order_with_bullets() {
    let block = project_block(&project(&["a", "b", "c"], &["x"]));
    assert_eq!(block.features(), vec!["a", "b", "c"]);

    let Node::Card { children, .. } = &block.root else {
        panic!("project root must be a card");
    };
    let items = children
        .iter()
        .find_map(|n| match n {
            Node::FeatureList { items } => Some(items),
            _ => None,
        })
        .unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.bullet == FEATURE_BULLET));
    assert!(block.notes.is_empty());
}

#[test]
fn tech_tags_become_chips_in_order() {
    let block = project_block(&project(&["a"], &["Rust", "Kafka", "Rust"]));
    assert_eq!(block.chips(), vec!["Rust", "Kafka", "Rust"]);
}

#[test]
fn empty_lists_render_zero_items_and_are_noted() {
    let block = project_block(&project(&[], &[]));
    assert!(block.features().is_empty());
    assert!(block.chips().is_empty());
    assert_eq!(
        block.notes,
        vec![
            BlockNote::EmptySubsequence(ListField::Features),
            BlockNote::EmptySubsequence(ListField::TechTags),
        ]
    );
}

#[test]
fn missing_image_renders_block_without_it() {
    let mut p = project(&["a"], &["x"]);
    p.image = Some(AssetPath::new("  "));
    let block = project_block(&p);

    let mut images = 0;
    block.root.walk(&mut |n| {
        if matches!(n, Node::Image { .. }) {
            images += 1;
        }
    });
    assert_eq!(images, 0);
    assert_eq!(block.notes, vec![BlockNote::MissingAsset(AssetField::Image)]);
    assert_eq!(block.features(), vec!["a"]);
}

#[test]
fn tile_uses_explicit_or_default_variant() {
    let mut tile = CapabilityTile {
        label: "Web".to_owned(),
        description: "Sites".to_owned(),
        icon: Some(IconRef::new("code")),
        variant: None,
    };
    let block = capability_tile_block(&tile);
    assert!(matches!(block.root, Node::Card { variant, .. } if variant == TILE_VARIANT));

    tile.variant = Some(CardVariant::Outline);
    tile.icon = None;
    let block = capability_tile_block(&tile);
    assert!(matches!(
        block.root,
        Node::Card {
            variant: CardVariant::Outline,
            ..
        }
    ));
    assert_eq!(block.notes, vec![BlockNote::MissingAsset(AssetField::Icon)]);
}

#[test]
fn section_header_lists_heading_then_paragraphs() {
    let intro = vec!["one".to_owned(), "two".to_owned()];
    let block = section_header_block(&SectionIntro {
        heading: "About",
        intro: &intro,
    });
    assert_eq!(block.kind, BlockKind::SectionHeader);
    assert_eq!(block.outline(), vec!["h2 About", "one", "two"]);
}
