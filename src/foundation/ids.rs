/// A laid-out element (section container or block) on the page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// A rendered, animated block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct BlockId(pub u32);

/// One rendered collection of blocks sharing a trigger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct CollectionId(pub u32);

/// A registration in the [`ObserverRegistry`](crate::ObserverRegistry).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct ObserverId(pub u32);

/// Hands out page-unique ids. One allocator per page.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next_element: u32,
    next_block: u32,
    next_collection: u32,
}

impl IdAllocator {
    /// Fresh allocator; all counters start at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next element id.
    pub fn element(&mut self) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element += 1;
        id
    }

    /// Next block id.
    pub fn block(&mut self) -> BlockId {
        let id = BlockId(self.next_block);
        self.next_block += 1;
        id
    }

    /// Next collection id.
    pub fn collection(&mut self) -> CollectionId {
        let id = CollectionId(self.next_collection);
        self.next_collection += 1;
        id
    }
}
