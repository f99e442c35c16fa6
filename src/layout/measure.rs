use crate::foundation::error::{FolioError, FolioResult};
use crate::render::block::{Node, VisualBlock};

/// Fixed typographic and spacing metrics used to size blocks.
///
/// There is no font shaping here: text height is estimated from an average glyph width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Padding around each page section.
    pub section_padding_px: f32,
    /// Vertical space between a section's header and its collection.
    pub section_gap_px: f32,
    /// Space between blocks in a collection (both axes).
    pub block_gap_px: f32,
    /// Inner padding of a card.
    pub card_padding_px: f32,
    /// Space between nodes inside a block.
    pub node_gap_px: f32,
    /// Average glyph advance for body text.
    pub char_width_px: f32,
    /// Body text line height.
    pub line_height_px: f32,
    /// Line height of section titles (level 1-2).
    pub heading_line_px: f32,
    /// Line height of card titles (level 3+).
    pub title_line_px: f32,
    /// Height of project images.
    pub image_height_px: f32,
    /// Icon box size.
    pub icon_px: f32,
    /// Height of one row of chips.
    pub chip_row_px: f32,
    /// Average chip width including spacing.
    pub chip_width_px: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            section_padding_px: 64.0,
            section_gap_px: 32.0,
            block_gap_px: 24.0,
            card_padding_px: 24.0,
            node_gap_px: 12.0,
            char_width_px: 8.0,
            line_height_px: 24.0,
            heading_line_px: 40.0,
            title_line_px: 28.0,
            image_height_px: 200.0,
            icon_px: 40.0,
            chip_row_px: 32.0,
            chip_width_px: 96.0,
        }
    }
}

impl LayoutMetrics {
    /// Reject negative, non-finite, or zero-width metrics.
    pub fn validate(&self) -> FolioResult<()> {
        let all = [
            ("section_padding_px", self.section_padding_px),
            ("section_gap_px", self.section_gap_px),
            ("block_gap_px", self.block_gap_px),
            ("card_padding_px", self.card_padding_px),
            ("node_gap_px", self.node_gap_px),
            ("char_width_px", self.char_width_px),
            ("line_height_px", self.line_height_px),
            ("heading_line_px", self.heading_line_px),
            ("title_line_px", self.title_line_px),
            ("image_height_px", self.image_height_px),
            ("icon_px", self.icon_px),
            ("chip_row_px", self.chip_row_px),
            ("chip_width_px", self.chip_width_px),
        ];
        for (name, v) in all {
            if !v.is_finite() || v < 0.0 {
                return Err(FolioError::validation(format!(
                    "layout metric {name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if self.char_width_px == 0.0 || self.chip_width_px == 0.0 {
            return Err(FolioError::validation(
                "char_width_px and chip_width_px must be > 0",
            ));
        }
        Ok(())
    }
}

/// Estimated height of `block` when laid out `width` px wide.
pub fn block_height(block: &VisualBlock, width: f32, m: &LayoutMetrics) -> f32 {
    node_height(&block.root, width, m)
}

fn stack_height(children: &[Node], width: f32, m: &LayoutMetrics) -> f32 {
    let visible: Vec<f32> = children
        .iter()
        .map(|c| node_height(c, width, m))
        .filter(|h| *h > 0.0)
        .collect();
    if visible.is_empty() {
        return 0.0;
    }
    let gaps = (visible.len() - 1) as f32 * m.node_gap_px;
    visible.iter().sum::<f32>() + gaps
}

fn text_lines(text: &str, width: f32, m: &LayoutMetrics) -> f32 {
    let per_line = (width / m.char_width_px).floor().max(1.0);
    let chars = text.chars().count() as f32;
    (chars / per_line).ceil().max(1.0)
}

fn node_height(node: &Node, width: f32, m: &LayoutMetrics) -> f32 {
    match node {
        Node::Card { children, .. } => {
            let inner = (width - 2.0 * m.card_padding_px).max(m.char_width_px);
            stack_height(children, inner, m) + 2.0 * m.card_padding_px
        }
        Node::Group { children } => stack_height(children, width, m),
        Node::Heading { level, text } => {
            let line = if *level <= 2 {
                m.heading_line_px
            } else {
                m.title_line_px
            };
            text_lines(text, width, m) * line
        }
        Node::Text { text } => text_lines(text, width, m) * m.line_height_px,
        Node::Image { .. } => m.image_height_px,
        Node::Icon { .. } => m.icon_px,
        Node::FeatureList { items } => items
            .iter()
            // Bullet plus a space ahead of the text.
            .map(|i| text_lines(&format!("{} {}", i.bullet, i.text), width, m))
            .sum::<f32>()
            * m.line_height_px,
        Node::TagRow { chips } => {
            if chips.is_empty() {
                return 0.0;
            }
            let per_row = (width / m.chip_width_px).floor().max(1.0);
            (chips.len() as f32 / per_row).ceil() * m.chip_row_px
        }
    }
}
