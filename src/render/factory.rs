//! Block factories: one content entry in, one [`VisualBlock`] out.
//!
//! Factories never fail. Unusable asset references are left out and empty lists render no
//! items; both are recorded as [`BlockNote`]s on the block.

use crate::content::model::{AssetPath, CapabilityTile, IconRef, ProjectEntry};
use crate::render::block::{
    AssetField, BlockKind, BlockNote, CardVariant, Chip, FEATURE_BULLET, FeatureItem, ListField,
    Node, VisualBlock,
};

/// Title plus intro paragraphs of a page section.
#[derive(Clone, Copy, Debug)]
pub struct SectionIntro<'a> {
    /// Section title.
    pub heading: &'a str,
    /// Paragraphs.
    pub intro: &'a [String],
}

/// Default decoration for capability tiles.
pub const TILE_VARIANT: CardVariant = CardVariant::Glass;
/// Default decoration for project cards.
pub const PROJECT_VARIANT: CardVariant = CardVariant::Gradient;

/// Section title and intro text, undecorated.
pub fn section_header_block(section: &SectionIntro<'_>) -> VisualBlock {
    let mut children = Vec::with_capacity(1 + section.intro.len());
    children.push(Node::Heading {
        level: 2,
        text: section.heading.to_owned(),
    });
    children.extend(section.intro.iter().map(|p| Node::Text { text: p.clone() }));
    VisualBlock::new(BlockKind::SectionHeader, Node::Group { children })
}

/// Icon, label and description on a card.
pub fn capability_tile_block(tile: &CapabilityTile) -> VisualBlock {
    let mut notes = Vec::new();
    let mut children = Vec::with_capacity(3);
    push_icon(&tile.icon, &mut children, &mut notes);
    children.push(Node::Heading {
        level: 3,
        text: tile.label.clone(),
    });
    children.push(Node::Text {
        text: tile.description.clone(),
    });

    let mut block = VisualBlock::new(
        BlockKind::CapabilityTile,
        Node::Card {
            variant: tile.variant.unwrap_or(TILE_VARIANT),
            children,
        },
    );
    block.notes = notes;
    block
}

/// Image, title, description, then the nested feature lines and tech chips.
///
/// Feature and tag order follows the entry exactly; neither list is animated on its own.
pub fn project_block(project: &ProjectEntry) -> VisualBlock {
    let mut notes = Vec::new();
    let mut children = Vec::with_capacity(6);

    match project.image.as_ref().filter(|p| p.is_resolvable()) {
        Some(src) => children.push(Node::Image {
            src: AssetPath::clone(src),
            alt: project.title.clone(),
        }),
        None => notes.push(BlockNote::MissingAsset(AssetField::Image)),
    }
    push_icon(&project.icon, &mut children, &mut notes);
    children.push(Node::Heading {
        level: 3,
        text: project.title.clone(),
    });
    children.push(Node::Text {
        text: project.description.clone(),
    });

    if project.features.is_empty() {
        notes.push(BlockNote::EmptySubsequence(ListField::Features));
    }
    children.push(Node::FeatureList {
        items: project
            .features
            .iter()
            .map(|text| FeatureItem {
                bullet: FEATURE_BULLET,
                text: text.clone(),
            })
            .collect(),
    });

    if project.tech_tags.is_empty() {
        notes.push(BlockNote::EmptySubsequence(ListField::TechTags));
    }
    children.push(Node::TagRow {
        chips: project
            .tech_tags
            .iter()
            .map(|label| Chip {
                label: label.clone(),
            })
            .collect(),
    });

    let mut block = VisualBlock::new(
        BlockKind::Project,
        Node::Card {
            variant: project.variant.unwrap_or(PROJECT_VARIANT),
            children,
        },
    );
    block.notes = notes;
    block
}

fn push_icon(icon: &Option<IconRef>, children: &mut Vec<Node>, notes: &mut Vec<BlockNote>) {
    match icon.as_ref().filter(|i| i.is_resolvable()) {
        Some(icon) => children.push(Node::Icon { icon: icon.clone() }),
        None => notes.push(BlockNote::MissingAsset(AssetField::Icon)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/factory.rs"]
mod tests;
