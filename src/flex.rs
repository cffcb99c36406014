//! Fluent builder over a single item.
//!
//! [`Flex`] borrows the tree and one item, and exposes chainable setters for
//! every style property plus the tree and layout operations most callers
//! need. Everything routes through the same accessors as [`FlexTree`], so the
//! unsupported-unit rules are identical.
//!
//! ```ignore
//! let mut tree = FlexTree::new();
//! let root = tree.new_item();
//! tree.builder(root).direction(FlexDirection::Row).padding(8.0).define(|flex| {
//!     flex.new_item().unwrap().grow(1.0);
//!     flex.new_item().unwrap().width(40.0).height(percent(50.0));
//! });
//! ```

use crate::engine::{LayoutEngine, TaffyEngine};
use crate::geometry::{ConstraintSize, Size};
use crate::item::{FlexTree, ItemId, LayoutMode, TreeError};
use crate::style::edge::Edge;
use crate::style::insets::Insets;
use crate::style::keywords::{Align, Direction, Display, FlexDirection, Justify, Overflow, PositionType, Wrap};
use crate::style::value::StyleValue;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

impl<E: LayoutEngine> FlexTree<E> {
    /// Start a fluent builder on `item`.
    ///
    /// # Panics
    ///
    /// Panics if `item` was removed.
    #[track_caller]
    pub fn builder(&mut self, item: ItemId) -> Flex<'_, E> {
        self.item(item);
        Flex { tree: self, item }
    }
}

// ---------------------------------------------------------------------------
// Flex
// ---------------------------------------------------------------------------

/// Chainable style and tree operations on one item.
pub struct Flex<'a, E: LayoutEngine = TaffyEngine> {
    tree: &'a mut FlexTree<E>,
    item: ItemId,
}

impl<'a, E: LayoutEngine> Flex<'a, E> {
    pub fn id(&self) -> ItemId {
        self.item
    }

    pub fn tree(&mut self) -> &mut FlexTree<E> {
        self.tree
    }

    // -- Tree ---------------------------------------------------------------

    /// Append an existing item as the last child and continue on it.
    pub fn add_item(&mut self, child: ItemId) -> Result<Flex<'_, E>, TreeError> {
        self.tree.add_subitem(self.item, child)?;
        Ok(Flex {
            tree: &mut *self.tree,
            item: child,
        })
    }

    /// Create a fresh item, append it, and continue on it. A rejected
    /// attachment frees the new item again.
    pub fn new_item(&mut self) -> Result<Flex<'_, E>, TreeError> {
        let child = self.tree.new_item();
        if let Err(err) = self.tree.add_subitem(self.item, child) {
            self.tree.remove(child)?;
            return Err(err);
        }
        Ok(Flex {
            tree: &mut *self.tree,
            item: child,
        })
    }

    /// Run `f` on this builder, typically to add and style children.
    pub fn define(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        f(self);
        self
    }

    pub fn children(&self) -> &[ItemId] {
        self.tree.children(self.item)
    }

    // -- Layout -------------------------------------------------------------

    /// Lay out this item's subtree into its current frame.
    pub fn layout(&mut self, mode: LayoutMode) -> &mut Self {
        self.tree.apply_layout(self.item, mode);
        self
    }

    pub fn size_that_fits(&mut self, constraint: impl Into<ConstraintSize>) -> Size {
        self.tree.size_that_fits(self.item, constraint)
    }

    pub fn intrinsic_size(&mut self) -> Size {
        self.tree.intrinsic_size(self.item)
    }

    pub fn mark_dirty(&mut self) -> &mut Self {
        self.tree.mark_dirty(self.item);
        self
    }

    /// Include or exclude this item from layout. An excluded item takes no
    /// space among its siblings.
    pub fn is_included_in_layout(&mut self, included: bool) -> &mut Self {
        self.tree.item_mut(self.item).is_layout_enabled = included;
        self
    }

    // -- Keywords -----------------------------------------------------------

    pub fn layout_direction(&mut self, value: Direction) -> &mut Self {
        self.tree.set_direction(self.item, value);
        self
    }

    /// Main axis direction.
    pub fn direction(&mut self, value: FlexDirection) -> &mut Self {
        self.tree.set_flex_direction(self.item, value);
        self
    }

    pub fn justify_content(&mut self, value: Justify) -> &mut Self {
        self.tree.set_justify_content(self.item, value);
        self
    }

    pub fn align_items(&mut self, value: Align) -> &mut Self {
        self.tree.set_align_items(self.item, value);
        self
    }

    pub fn align_self(&mut self, value: Align) -> &mut Self {
        self.tree.set_align_self(self.item, value);
        self
    }

    pub fn align_content(&mut self, value: Align) -> &mut Self {
        self.tree.set_align_content(self.item, value);
        self
    }

    pub fn wrap(&mut self, value: Wrap) -> &mut Self {
        self.tree.set_flex_wrap(self.item, value);
        self
    }

    pub fn position(&mut self, value: PositionType) -> &mut Self {
        self.tree.set_position_type(self.item, value);
        self
    }

    pub fn overflow(&mut self, value: Overflow) -> &mut Self {
        self.tree.set_overflow(self.item, value);
        self
    }

    pub fn display(&mut self, value: Display) -> &mut Self {
        self.tree.set_display(self.item, value);
        self
    }

    // -- Flexibility --------------------------------------------------------

    pub fn grow(&mut self, value: f32) -> &mut Self {
        self.tree.set_flex_grow(self.item, value);
        self
    }

    pub fn shrink(&mut self, value: f32) -> &mut Self {
        self.tree.set_flex_shrink(self.item, value);
        self
    }

    /// The `flex` shorthand. Positive values grow from a zero basis.
    pub fn flex(&mut self, value: f32) -> &mut Self {
        self.tree.set_flex(self.item, Some(value));
        self
    }

    /// Point, percent or auto.
    pub fn basis(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_flex_basis(self.item, value);
        self
    }

    pub fn aspect_ratio(&mut self, value: Option<f32>) -> &mut Self {
        self.tree.set_aspect_ratio(self.item, value);
        self
    }

    // -- Dimensions ---------------------------------------------------------

    /// Point, percent or auto.
    #[track_caller]
    pub fn width(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_width(self.item, value);
        self
    }

    #[track_caller]
    pub fn height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_height(self.item, value);
        self
    }

    pub fn size(&mut self, width: impl Into<StyleValue>, height: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_width(self.item, width);
        self.tree.set_height(self.item, height);
        self
    }

    /// Both dimensions set to `side` points.
    pub fn square(&mut self, side: f32) -> &mut Self {
        self.size(side, side)
    }

    /// Point, percent or undefined to clear.
    #[track_caller]
    pub fn min_width(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_min_width(self.item, value);
        self
    }

    #[track_caller]
    pub fn max_width(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_max_width(self.item, value);
        self
    }

    #[track_caller]
    pub fn min_height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_min_height(self.item, value);
        self
    }

    #[track_caller]
    pub fn max_height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_max_height(self.item, value);
        self
    }

    // -- Position -----------------------------------------------------------

    #[track_caller]
    fn inset(&mut self, edge: Edge, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_position(self.item, edge, value);
        self
    }

    #[track_caller]
    pub fn left(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::Left, value)
    }

    #[track_caller]
    pub fn top(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::Top, value)
    }

    #[track_caller]
    pub fn right(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::Right, value)
    }

    #[track_caller]
    pub fn bottom(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::Bottom, value)
    }

    /// Left in LTR, right in RTL.
    #[track_caller]
    pub fn start(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::Start, value)
    }

    #[track_caller]
    pub fn end(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::End, value)
    }

    #[track_caller]
    pub fn horizontally(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::Horizontal, value)
    }

    #[track_caller]
    pub fn vertically(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::Vertical, value)
    }

    /// Same offset on all four sides.
    #[track_caller]
    pub fn all(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.inset(Edge::All, value)
    }

    // -- Margin -------------------------------------------------------------

    #[track_caller]
    pub fn margin_edge(&mut self, edge: Edge, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_margin(self.item, edge, value);
        self
    }

    #[track_caller]
    pub fn margin(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_edge(Edge::All, value)
    }

    #[track_caller]
    pub fn margin_horizontal(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_edge(Edge::Horizontal, value)
    }

    #[track_caller]
    pub fn margin_vertical(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_edge(Edge::Vertical, value)
    }

    #[track_caller]
    pub fn margin_insets(&mut self, insets: Insets) -> &mut Self {
        for (edge, value) in insets.sides() {
            self.tree.set_margin(self.item, edge, value);
        }
        self
    }

    // -- Padding ------------------------------------------------------------

    #[track_caller]
    pub fn padding_edge(&mut self, edge: Edge, value: impl Into<StyleValue>) -> &mut Self {
        self.tree.set_padding(self.item, edge, value);
        self
    }

    #[track_caller]
    pub fn padding(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.padding_edge(Edge::All, value)
    }

    #[track_caller]
    pub fn padding_horizontal(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.padding_edge(Edge::Horizontal, value)
    }

    #[track_caller]
    pub fn padding_vertical(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.padding_edge(Edge::Vertical, value)
    }

    #[track_caller]
    pub fn padding_insets(&mut self, insets: Insets) -> &mut Self {
        for (edge, value) in insets.sides() {
            self.tree.set_padding(self.item, edge, value);
        }
        self
    }

    // -- Border -------------------------------------------------------------

    pub fn border(&mut self, width: f32) -> &mut Self {
        self.tree.set_border(self.item, Edge::All, width);
        self
    }

    pub fn border_edge(&mut self, edge: Edge, width: f32) -> &mut Self {
        self.tree.set_border(self.item, edge, width);
        self
    }
}

impl<E: LayoutEngine> std::fmt::Debug for Flex<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flex").field("item", &self.item).finish()
    }
}
