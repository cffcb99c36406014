//! Measurement and layout application.
//!
//! [`FlexTree::size_that_fits`] is the measurement entry point: it runs the
//! engine on an item's subtree and reads back the computed size without
//! touching any item's `frame` or `bounds`. [`FlexTree::apply_layout`] is the
//! one place that writes those rectangles.

use crate::engine::LayoutEngine;
use crate::geometry::{ConstraintSize, Extent, Rect, Size};
use crate::style::adapter::{violate, ContractViolation};

use super::data::ItemId;
use super::tree::FlexTree;

/// How [`FlexTree::apply_layout`] derives the constraint from the root frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Lay out within the root's current frame size.
    #[default]
    FitContainer,
    /// Keep the frame height; let the width follow the content.
    AdjustWidth,
    /// Keep the frame width; let the height follow the content.
    AdjustHeight,
}

impl LayoutMode {
    fn constraint(self, size: Size) -> ConstraintSize {
        match self {
            LayoutMode::FitContainer => ConstraintSize::from(size),
            LayoutMode::AdjustWidth => ConstraintSize::new(Extent::Unconstrained, size.height),
            LayoutMode::AdjustHeight => ConstraintSize::new(size.width, Extent::Unconstrained),
        }
    }
}

impl<E: LayoutEngine> FlexTree<E> {
    /// Excluded items under `root` as `(parent, child, index)`, in child
    /// order per parent. Excluded subtrees are not descended into.
    fn excluded_under(&self, root: ItemId) -> Vec<(ItemId, ItemId, usize)> {
        let mut excluded = Vec::new();
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            for (index, &child) in self.children(current).iter().enumerate() {
                if self.item(child).is_layout_enabled {
                    stack.push(child);
                } else {
                    excluded.push((current, child, index));
                }
            }
        }
        excluded
    }

    /// Run the engine on `id`'s subtree with excluded items detached, then
    /// reattach them at their original positions.
    #[track_caller]
    fn compute(&mut self, id: ItemId, constraint: ConstraintSize) {
        let excluded = self.excluded_under(id);
        for &(parent, child, _) in &excluded {
            let (parent_node, child_node) = (self.node(parent), self.node(child));
            if let Err(err) = self.engine.remove_child(parent_node, child_node) {
                violate(ContractViolation::EngineInvariant(format!(
                    "detaching excluded {child:?} from {parent:?} failed: {err}"
                )));
            }
        }
        if !excluded.is_empty() {
            log::trace!("left {} excluded items out of {id:?}", excluded.len());
        }

        let node = self.node(id);
        let result = self.engine.calculate_layout(node, constraint);

        for &(parent, child, index) in &excluded {
            let (parent_node, child_node) = (self.node(parent), self.node(child));
            if let Err(err) = self.engine.insert_child(parent_node, child_node, index) {
                violate(ContractViolation::EngineInvariant(format!(
                    "reattaching excluded {child:?} to {parent:?} failed: {err}"
                )));
            }
        }
        if let Err(err) = result {
            violate(ContractViolation::EngineInvariant(format!(
                "layout of {id:?} failed: {err}"
            )));
        }
    }

    /// Compute the size `id` wants within `constraint`.
    ///
    /// Each dimension is either definite or unconstrained (sized to content).
    /// Synchronous and idempotent: repeated calls with no style change in
    /// between return the same size. `frame` and `bounds` are not modified.
    pub fn size_that_fits(&mut self, id: ItemId, constraint: impl Into<ConstraintSize>) -> Size {
        let constraint = constraint.into();
        self.compute(id, constraint);
        let size = self.engine.computed_layout(self.node(id)).size;
        log::debug!(
            "size_that_fits({id:?}, {constraint}) = {} x {}",
            size.width,
            size.height
        );
        size
    }

    /// The content size of `id` with both dimensions unconstrained.
    pub fn intrinsic_size(&mut self, id: ItemId) -> Size {
        self.size_that_fits(id, ConstraintSize::UNCONSTRAINED)
    }

    /// Lay out the subtree under `root` and write the results to `frame`
    /// and `bounds`.
    ///
    /// The root keeps its frame origin; descendants are placed at their
    /// computed position within their parent. Every `bounds` has a zero
    /// origin. Descendants with `is_layout_enabled == false` are left out of
    /// the computation together with their subtrees, so their siblings close
    /// up, and their rectangles are left untouched.
    pub fn apply_layout(&mut self, root: ItemId, mode: LayoutMode) {
        let frame = self.item(root).frame;
        let constraint = mode.constraint(frame.size);
        self.compute(root, constraint);
        log::debug!("applying layout to {root:?} ({mode:?}, {constraint})");

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let computed = self.engine.computed_layout(self.node(id));
            let item = self.item_mut(id);
            if item.is_layout_enabled {
                item.frame = if id == root {
                    Rect {
                        origin: frame.origin,
                        size: computed.size,
                    }
                } else {
                    computed
                };
                item.bounds = Rect::from_size(computed.size);
            }
            for &child in self.children(id).iter().rev() {
                if self.item(child).is_layout_enabled {
                    stack.push(child);
                }
            }
        }
    }

    /// Flag `id`'s layout as stale so the next computation recomputes it.
    pub fn mark_dirty(&mut self, id: ItemId) {
        let node = self.node(id);
        self.engine.mark_dirty(node);
    }
}
