use crate::foundation::ids::{BlockId, CollectionId, ElementId};
use crate::render::block::{AssetField, BlockNote, ListField};

/// A degraded-but-rendered condition. Never fatal: the page shows less, not nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// An image or icon reference was absent or blank; the block renders without it.
    MissingAsset {
        /// Owning collection.
        collection: CollectionId,
        /// Affected block.
        block: BlockId,
        /// Which reference.
        field: AssetField,
    },
    /// `features` or `tech_tags` was empty; zero sub-items rendered.
    EmptySubsequence {
        /// Owning collection.
        collection: CollectionId,
        /// Affected block.
        block: BlockId,
        /// Which list.
        field: ListField,
    },
    /// The observed container has no visible area (or no layout at all), so its reveal can
    /// never trigger and its blocks stay at their initial state.
    ObserverTargetMissing {
        /// Affected collection.
        collection: CollectionId,
        /// Observed element.
        container: ElementId,
    },
}

impl Diagnostic {
    pub(crate) fn from_note(collection: CollectionId, block: BlockId, note: BlockNote) -> Self {
        match note {
            BlockNote::MissingAsset(field) => Self::MissingAsset {
                collection,
                block,
                field,
            },
            BlockNote::EmptySubsequence(field) => Self::EmptySubsequence {
                collection,
                block,
                field,
            },
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAsset {
                collection,
                block,
                field,
            } => write!(
                f,
                "collection {} block {}: missing {field:?} reference, rendered without it",
                collection.0, block.0
            ),
            Self::EmptySubsequence {
                collection,
                block,
                field,
            } => write!(
                f,
                "collection {} block {}: empty {field:?}, rendered zero items",
                collection.0, block.0
            ),
            Self::ObserverTargetMissing {
                collection,
                container,
            } => write!(
                f,
                "collection {}: container element {} has no visible area, reveal cannot trigger",
                collection.0, container.0
            ),
        }
    }
}
