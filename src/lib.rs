//! # flexitem
//!
//! A flexbox item tree with a typed, edge-aware style surface over a layout
//! engine.
//!
//! Each [`FlexItem`] owns exactly one engine node. Style properties are read
//! and written through a data-driven dispatch table that routes each
//! `(property, edge, unit)` combination to the engine's primitive setters,
//! and tree mutations keep the item tree and the engine's node tree
//! isomorphic. Measurement is synchronous and leaves `frame` and `bounds`
//! alone; [`FlexTree::apply_layout`] is the only writer of those rectangles.
//!
//! ## Core Systems
//!
//! - **[`style`]**: values, edges, keywords, the property table and adapters
//! - **[`engine`]**: the [`LayoutEngine`] seam and its taffy-backed implementation
//! - **[`item`]**: slotmap arena of items, tree synchronization, measurement
//! - **[`flex`]**: chainable builder over one item
//! - **[`config`]**: engine and item configuration
//! - **[`geometry`]**: points, sizes, rects and measurement constraints
//! - **[`testing`]**: a recording engine for exercising the routing layer

// Foundation
pub mod config;
pub mod geometry;

// Style surface
pub mod style;

// Engine and items
pub mod engine;
pub mod flex;
pub mod item;

// Test support
pub mod testing;

pub use config::{EngineConfig, ItemConfig};
pub use engine::{EngineError, LayoutEngine, TaffyEngine};
pub use flex::Flex;
pub use geometry::{ConstraintSize, Extent, Point, Rect, Size};
pub use item::{FlexItem, FlexTree, ItemId, LayoutMode, TreeError};
pub use style::{percent, ContractViolation, Edge, Insets, Property, StyleValue, Unit};
