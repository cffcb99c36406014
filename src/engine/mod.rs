//! Layout engine seam: the primitive node surface items drive.
//!
//! [`LayoutEngine`] is the flat, handle-based API an external flex engine
//! exposes: node lifetime, child linkage, per-(property, edge, unit) style
//! primitives, and layout computation. [`TaffyEngine`] implements it on top
//! of [taffy](https://crates.io/crates/taffy).

pub mod node_style;
pub mod resolve;
pub mod taffy_engine;

use std::fmt::Debug;
use std::hash::Hash;

use crate::geometry::{ConstraintSize, Rect};
use crate::style::edge::EdgeSlot;
use crate::style::property::{Property, ScalarValue};
use crate::style::value::StyleValue;

pub use self::node_style::NodeStyle;
pub use self::taffy_engine::TaffyEngine;

/// Failures reported by engine tree operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("node is already a child of another node")]
    AlreadyParented,
    #[error("inserting the node would create a cycle")]
    Cycle,
    #[error("a node cannot be its own child")]
    SelfInsertion,
    #[error("unknown node")]
    UnknownNode,
    #[error("node is not a child of the given parent")]
    NotAChild,
    #[error("child index {index} out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("insertion rejected by the engine")]
    Rejected,
    #[error("taffy error: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

/// The primitive surface of an external flex-layout engine.
///
/// Style primitives are only ever called with combinations the dispatch
/// table allows: `slot` is `Some` exactly for edge-aware properties, and
/// synthetic edges have already been expanded to slots.
pub trait LayoutEngine {
    /// Opaque node handle.
    type Node: Copy + Eq + Hash + Debug;

    // -- Node lifetime and linkage ------------------------------------------

    fn new_node(&mut self) -> Self::Node;

    /// Destroy a node. Its children become parentless; its parent forgets it.
    fn free_node(&mut self, node: Self::Node);

    /// Insert `child` into `parent`'s children at `index`.
    ///
    /// Must reject a child that already has a parent, self insertion, and
    /// insertions that would form a cycle, leaving both nodes unchanged.
    fn insert_child(
        &mut self,
        parent: Self::Node,
        child: Self::Node,
        index: usize,
    ) -> Result<(), EngineError>;

    fn remove_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<(), EngineError>;

    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    // -- Style primitives ---------------------------------------------------

    fn scalar(&self, node: Self::Node, property: Property) -> ScalarValue;

    fn set_scalar(&mut self, node: Self::Node, property: Property, value: ScalarValue);

    fn edge_scalar(&self, node: Self::Node, property: Property, slot: EdgeSlot) -> f32;

    fn set_edge_scalar(&mut self, node: Self::Node, property: Property, slot: EdgeSlot, value: f32);

    fn value(&self, node: Self::Node, property: Property, slot: Option<EdgeSlot>) -> StyleValue;

    /// Store an absolute value. A `NaN` magnitude stores "undefined".
    fn set_absolute(
        &mut self,
        node: Self::Node,
        property: Property,
        slot: Option<EdgeSlot>,
        magnitude: f32,
    );

    fn set_percent(
        &mut self,
        node: Self::Node,
        property: Property,
        slot: Option<EdgeSlot>,
        magnitude: f32,
    );

    fn set_auto(&mut self, node: Self::Node, property: Property, slot: Option<EdgeSlot>);

    // -- Layout -------------------------------------------------------------

    fn mark_dirty(&mut self, node: Self::Node);

    /// Compute layout for the subtree rooted at `node` within `available`.
    fn calculate_layout(
        &mut self,
        node: Self::Node,
        available: ConstraintSize,
    ) -> Result<(), EngineError>;

    /// The last computed frame of `node`, relative to its parent.
    fn computed_layout(&self, node: Self::Node) -> Rect;
}
