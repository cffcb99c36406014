//! Item arena: slotmap-backed layout items, each owning one engine node.
//!
//! [`FlexTree`] owns every [`FlexItem`] and the engine they drive. Tree
//! mutations keep the item tree and the engine's node tree isomorphic; style
//! accessors and measurement live in [`style`] and [`measure`].

pub mod data;
pub mod measure;
pub mod style;
pub mod tree;

pub use data::{FlexItem, ItemId};
pub use measure::LayoutMode;
pub use tree::{FlexTree, TreeError};
