use crate::content::model::{AssetPath, IconRef};

/// Decorative style of the card primitive. Purely presentational.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    /// Flat card.
    #[default]
    Plain,
    /// Frosted translucent card.
    Glass,
    /// Gradient-filled card.
    Gradient,
    /// Border only.
    Outline,
}

impl CardVariant {
    /// All variants, in declaration order.
    pub const ALL: [Self; 4] = [Self::Plain, Self::Glass, Self::Gradient, Self::Outline];
}

/// Bullet glyph used for feature lines.
pub const FEATURE_BULLET: char = '•';

/// One feature line: bullet plus text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FeatureItem {
    /// Bullet glyph.
    pub bullet: char,
    /// Feature text, verbatim from content.
    pub text: String,
}

/// One inline technology label.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Chip {
    /// Label text, verbatim from content.
    pub label: String,
}

/// Element of a block's visual tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// The external card primitive: a variant plus opaque children.
    Card {
        /// Decoration.
        variant: CardVariant,
        /// Content.
        children: Vec<Node>,
    },
    /// Undecorated container.
    Group {
        /// Content.
        children: Vec<Node>,
    },
    /// Title text.
    Heading {
        /// 2 for section headers, 3 for card titles.
        level: u8,
        /// Text.
        text: String,
    },
    /// Body text.
    Text {
        /// Text.
        text: String,
    },
    /// Image reference, drawn by the host.
    Image {
        /// Asset location.
        src: AssetPath,
        /// Alternative text.
        alt: String,
    },
    /// Icon reference, drawn by the host.
    Icon {
        /// Symbolic icon name.
        icon: IconRef,
    },
    /// Ordered feature lines.
    FeatureList {
        /// Lines, in content order.
        items: Vec<FeatureItem>,
    },
    /// Ordered technology chips.
    TagRow {
        /// Chips, in content order.
        chips: Vec<Chip>,
    },
}

impl Node {
    /// Depth-first visit of this node and its descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        if let Node::Card { children, .. } | Node::Group { children } = self {
            for c in children {
                c.walk(f);
            }
        }
    }
}

/// What kind of content a block was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Section title and intro text.
    SectionHeader,
    /// A capability tile.
    CapabilityTile,
    /// A portfolio project.
    Project,
}

/// Which asset reference was unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetField {
    /// `image`
    Image,
    /// `icon`
    Icon,
}

/// Which nested list was empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    /// `features`
    Features,
    /// `tech_tags`
    TechTags,
}

/// Degradation noticed while building a block. The block is still rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "note", content = "field", rename_all = "snake_case")]
pub enum BlockNote {
    /// The asset was left out.
    MissingAsset(AssetField),
    /// The list rendered zero items.
    EmptySubsequence(ListField),
}

/// Visual tree for one content entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualBlock {
    /// Source kind.
    pub kind: BlockKind,
    /// Root node: a [`Node::Card`] for entries, a [`Node::Group`] for section headers.
    pub root: Node,
    /// Degradations noticed while building.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<BlockNote>,
}

impl VisualBlock {
    /// Block without notes.
    pub fn new(kind: BlockKind, root: Node) -> Self {
        Self {
            kind,
            root,
            notes: Vec::new(),
        }
    }

    /// Feature texts, in order.
    pub fn features(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.walk(&mut |n| {
            if let Node::FeatureList { items } = n {
                out.extend(items.iter().map(|i| i.text.as_str()));
            }
        });
        out
    }

    /// Chip labels, in order.
    pub fn chips(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.walk(&mut |n| {
            if let Node::TagRow { chips } = n {
                out.extend(chips.iter().map(|c| c.label.as_str()));
            }
        });
        out
    }

    /// Indented one-line-per-node text rendering.
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::new();
        outline_node(&self.root, 0, &mut lines);
        lines
    }
}

fn outline_node(node: &Node, depth: usize, out: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Card { variant, children } => {
            out.push(format!("{pad}card[{variant:?}]"));
            for c in children {
                outline_node(c, depth + 1, out);
            }
        }
        Node::Group { children } => {
            for c in children {
                outline_node(c, depth, out);
            }
        }
        Node::Heading { level, text } => out.push(format!("{pad}h{level} {text}")),
        Node::Text { text } => out.push(format!("{pad}{text}")),
        Node::Image { src, .. } => out.push(format!("{pad}image {}", src.0)),
        Node::Icon { icon } => out.push(format!("{pad}icon {}", icon.0)),
        Node::FeatureList { items } => {
            for i in items {
                out.push(format!("{pad}{} {}", i.bullet, i.text));
            }
        }
        Node::TagRow { chips } => {
            let labels: Vec<String> = chips.iter().map(|c| format!("[{}]", c.label)).collect();
            out.push(format!("{pad}{}", labels.join(" ")));
        }
    }
}
