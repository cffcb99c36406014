//! Tree operations: add, insert, remove, walk, all mirrored into the engine.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use crate::config::{EngineConfig, ItemConfig};
use crate::engine::{EngineError, LayoutEngine, TaffyEngine};
use crate::style::adapter::{violate, ContractViolation};

use super::data::{FlexItem, ItemId};

/// Empty slice constant for returning when an item has no children.
const EMPTY_CHILDREN: &[ItemId] = &[];

/// Failures of item tree mutations. A failed mutation leaves both trees as
/// they were.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("unknown item {0:?}")]
    UnknownItem(ItemId),
    #[error("child index {index} out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("item {child:?} is not a child of {parent:?}")]
    NotAChild { parent: ItemId, child: ItemId },
    #[error("engine rejected attaching {child:?} to {parent:?}: {source}")]
    Rejected {
        parent: ItemId,
        child: ItemId,
        #[source]
        source: EngineError,
    },
    #[error("engine failed to detach {child:?} from {parent:?}: {source}")]
    DetachFailed {
        parent: ItemId,
        child: ItemId,
        #[source]
        source: EngineError,
    },
}

/// The item tree, backed by a slotmap arena, and the engine it drives.
///
/// Every item owns exactly one engine node. Parent/child relationships are
/// stored in secondary maps and kept equal, in order, to the engine's node
/// children after every mutating call.
pub struct FlexTree<E: LayoutEngine = TaffyEngine> {
    pub(super) engine: E,
    items: SlotMap<ItemId, FlexItem<E::Node>>,
    children: SecondaryMap<ItemId, Vec<ItemId>>,
    parent: SecondaryMap<ItemId, ItemId>,
}

impl FlexTree<TaffyEngine> {
    /// Create an empty tree over a default taffy engine.
    pub fn new() -> Self {
        Self::with_engine(TaffyEngine::new())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_engine(TaffyEngine::with_config(config))
    }
}

impl Default for FlexTree<TaffyEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: LayoutEngine> FlexTree<E> {
    /// Create an empty tree over `engine`.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            items: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable engine access. Linking or freeing nodes through it breaks
    /// synchronization with the item tree.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    // -- Items --------------------------------------------------------------

    /// Create a detached item with default flags.
    pub fn new_item(&mut self) -> ItemId {
        self.new_item_with(ItemConfig::default())
    }

    /// Create a detached item owning a fresh engine node.
    pub fn new_item_with(&mut self, config: ItemConfig) -> ItemId {
        let node = self.engine.new_node();
        let id = self.items.insert(FlexItem::new(node, config));
        self.children.insert(id, Vec::new());
        log::debug!("created item {id:?} with node {node:?}");
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&FlexItem<E::Node>> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut FlexItem<E::Node>> {
        self.items.get_mut(id)
    }

    /// Access a live item.
    ///
    /// # Panics
    ///
    /// Panics if `id` was removed.
    #[track_caller]
    pub fn item(&self, id: ItemId) -> &FlexItem<E::Node> {
        match self.items.get(id) {
            Some(item) => item,
            None => violate(stale(id)),
        }
    }

    /// Mutable access to a live item.
    ///
    /// # Panics
    ///
    /// Panics if `id` was removed.
    #[track_caller]
    pub fn item_mut(&mut self, id: ItemId) -> &mut FlexItem<E::Node> {
        match self.items.get_mut(id) {
            Some(item) => item,
            None => violate(stale(id)),
        }
    }

    #[track_caller]
    pub(crate) fn node(&self, id: ItemId) -> E::Node {
        self.item(id).node()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn ensure(&self, id: ItemId) -> Result<E::Node, TreeError> {
        self.items
            .get(id)
            .map(FlexItem::node)
            .ok_or(TreeError::UnknownItem(id))
    }

    // -- Structure ----------------------------------------------------------

    pub fn parent(&self, id: ItemId) -> Option<ItemId> {
        self.parent.get(id).copied()
    }

    /// Children of an item, in order. Empty for unknown items.
    pub fn children(&self, id: ItemId) -> &[ItemId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ItemId) -> Vec<ItemId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: ItemId) -> Vec<ItemId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.items.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Whether every item under `root` has exactly the engine children and
    /// parent its item links describe.
    pub fn is_synchronized(&self, root: ItemId) -> bool {
        self.walk_depth_first(root).into_iter().all(|id| {
            let node = self.node(id);
            let expected: Vec<E::Node> = self.children(id).iter().map(|&c| self.node(c)).collect();
            self.engine.children(node) == expected
                && self.engine.parent(node) == self.parent(id).map(|p| self.node(p))
        })
    }

    // -- Mutation -----------------------------------------------------------

    /// Append `child` to `parent`'s children and attach its node as the last
    /// engine child.
    ///
    /// When the engine rejects the attachment (the child already has a
    /// parent, it would form a cycle, or it is `parent` itself) the append is
    /// rolled back and both trees are left unchanged.
    pub fn add_subitem(&mut self, parent: ItemId, child: ItemId) -> Result<(), TreeError> {
        self.ensure(parent)?;
        let index = self.children(parent).len();
        self.insert_subitem(parent, child, index)
    }

    /// Insert `child` at `index` among `parent`'s children. Same atomicity as
    /// [`add_subitem`](Self::add_subitem).
    pub fn insert_subitem(&mut self, parent: ItemId, child: ItemId, index: usize) -> Result<(), TreeError> {
        let parent_node = self.ensure(parent)?;
        let child_node = self.ensure(child)?;
        let Some(siblings) = self.children.get_mut(parent) else {
            return Err(TreeError::UnknownItem(parent));
        };
        if index > siblings.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: siblings.len(),
            });
        }
        siblings.insert(index, child);

        match self.engine.insert_child(parent_node, child_node, index) {
            Ok(()) => {
                self.parent.insert(child, parent);
                log::debug!("attached {child:?} to {parent:?} at {index}");
                Ok(())
            }
            Err(source) => {
                if let Some(siblings) = self.children.get_mut(parent) {
                    siblings.remove(index);
                }
                log::warn!("engine rejected attaching {child:?} to {parent:?}: {source}");
                Err(TreeError::Rejected {
                    parent,
                    child,
                    source,
                })
            }
        }
    }

    /// Detach `child` from `parent`, keeping its subtree intact.
    pub fn remove_subitem(&mut self, parent: ItemId, child: ItemId) -> Result<(), TreeError> {
        let parent_node = self.ensure(parent)?;
        let child_node = self.ensure(child)?;
        if self.parent(child) != Some(parent) {
            return Err(TreeError::NotAChild { parent, child });
        }
        let Some(index) = self.children(parent).iter().position(|&c| c == child) else {
            violate(ContractViolation::EngineInvariant(format!(
                "{child:?} links to {parent:?} but is missing from its children"
            )));
        };

        if let Err(source) = self.engine.remove_child(parent_node, child_node) {
            log::warn!("engine failed to detach {child:?} from {parent:?}: {source}");
            return Err(TreeError::DetachFailed {
                parent,
                child,
                source,
            });
        }
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.remove(index);
        }
        self.parent.remove(child);
        log::debug!("detached {child:?} from {parent:?}");
        Ok(())
    }

    /// Detach `id` from its parent, if any. Returns the former parent.
    pub fn remove_from_parent(&mut self, id: ItemId) -> Result<Option<ItemId>, TreeError> {
        self.ensure(id)?;
        match self.parent(id) {
            Some(parent) => {
                self.remove_subitem(parent, id)?;
                Ok(Some(parent))
            }
            None => Ok(None),
        }
    }

    /// Remove an item and its whole subtree, freeing every engine node.
    ///
    /// The item is detached from its parent first, then destroyed top-down.
    /// Returns the removed item's data.
    pub fn remove(&mut self, id: ItemId) -> Result<FlexItem<E::Node>, TreeError> {
        self.remove_from_parent(id)?;

        let mut queue = VecDeque::new();
        queue.push_back(id);
        let mut removed_root = None;
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            if let Some(item) = self.items.remove(current) {
                self.engine.free_node(item.node());
                if current == id {
                    removed_root = Some(item);
                }
            }
        }
        log::debug!("removed item {id:?} and its subtree");
        removed_root.ok_or(TreeError::UnknownItem(id))
    }
}

impl<E: LayoutEngine + std::fmt::Debug> std::fmt::Debug for FlexTree<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexTree")
            .field("items", &self.items.len())
            .field("engine", &self.engine)
            .finish()
    }
}

fn stale(id: ItemId) -> ContractViolation {
    ContractViolation::StaleHandle(format!("item {id:?}"))
}
