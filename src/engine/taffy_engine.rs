//! TaffyTree-backed [`LayoutEngine`].
//!
//! [`TaffyEngine`] keeps a [`NodeStyle`] per taffy node and only converts it
//! into a [`taffy::Style`] when layout is computed. At that point the writing
//! direction of every node is known, so `start`/`end` edges and RTL rows can
//! be resolved.

use std::collections::HashMap;

use taffy::prelude::*;

use crate::config::EngineConfig;
use crate::geometry::{ConstraintSize, Extent, Rect};
use crate::style::adapter::{enforce, violate, ContractViolation};
use crate::style::edge::EdgeSlot;
use crate::style::keywords::Direction;
use crate::style::property::{Property, ScalarValue};
use crate::style::value::StyleValue;

use super::node_style::NodeStyle;
use super::resolve::{resolve_direction, resolve_style};
use super::{EngineError, LayoutEngine};

/// Engine-side state of one node.
#[derive(Debug)]
struct NodeRecord {
    style: NodeStyle,
    /// The stored style changed since it was last pushed to taffy.
    dirty: bool,
    /// Direction the taffy style was last resolved under.
    resolved: Option<Direction>,
}

/// A [`LayoutEngine`] computing flexbox layout with taffy.
pub struct TaffyEngine {
    tree: TaffyTree<()>,
    nodes: HashMap<NodeId, NodeRecord>,
    config: EngineConfig,
}

impl TaffyEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            tree: TaffyTree::new(),
            nodes: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The stored style of `node`, as written.
    pub fn style(&self, node: NodeId) -> &NodeStyle {
        &self.record(node).style
    }

    /// The direction `node` resolved to during the last layout pass.
    pub fn resolved_direction(&self, node: NodeId) -> Option<Direction> {
        self.record(node).resolved
    }

    #[track_caller]
    fn record(&self, node: NodeId) -> &NodeRecord {
        match self.nodes.get(&node) {
            Some(record) => record,
            None => violate(stale(node)),
        }
    }

    #[track_caller]
    fn style_mut(&mut self, node: NodeId) -> &mut NodeStyle {
        match self.nodes.get_mut(&node) {
            Some(record) => {
                record.dirty = true;
                &mut record.style
            }
            None => violate(stale(node)),
        }
    }

    fn is_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = self.tree.parent(of);
        while let Some(node) = current {
            if node == candidate {
                return true;
            }
            current = self.tree.parent(node);
        }
        false
    }

    /// Push changed styles to taffy for the subtree under `root`.
    ///
    /// The root is always re-resolved: an auto-sized root takes the
    /// constraint as its exact size, the way a Yoga root does.
    fn sync_styles(
        &mut self,
        root: NodeId,
        inherited: Direction,
        available: ConstraintSize,
    ) -> Result<(), EngineError> {
        let mut stack = vec![(root, inherited)];
        while let Some((node, inherited)) = stack.pop() {
            let Some(record) = self.nodes.get_mut(&node) else {
                return Err(EngineError::UnknownNode);
            };
            let direction = resolve_direction(record.style.direction, inherited);
            if node == root {
                let mut style = resolve_style(&record.style, direction);
                fill_constraint(&record.style, &mut style, available);
                self.tree.set_style(node, style)?;
                record.dirty = true;
            } else if record.dirty || record.resolved != Some(direction) {
                self.tree.set_style(node, resolve_style(&record.style, direction))?;
                record.dirty = false;
            }
            record.resolved = Some(direction);

            let children = self.tree.children(node)?;
            stack.extend(children.into_iter().rev().map(|child| (child, direction)));
        }
        Ok(())
    }
}

impl Default for TaffyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaffyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaffyEngine")
            .field("nodes", &self.nodes.len())
            .field("config", &self.config)
            .finish()
    }
}

fn stale(node: NodeId) -> ContractViolation {
    ContractViolation::StaleHandle(format!("taffy node {node:?}"))
}

fn available_space(extent: Extent) -> AvailableSpace {
    match extent {
        Extent::Definite(value) => AvailableSpace::Definite(value),
        Extent::Unconstrained => AvailableSpace::MaxContent,
    }
}

/// Size an auto root exactly to a definite constraint unless a max size
/// bounds it.
fn fill_constraint(stored: &NodeStyle, style: &mut taffy::Style, available: ConstraintSize) {
    let sized = |value: StyleValue| value.is_auto() || value.is_undefined();
    if let (Extent::Definite(width), true, true) =
        (available.width, sized(stored.width), stored.max_width.is_undefined())
    {
        style.size.width = Dimension::from_length(width);
    }
    if let (Extent::Definite(height), true, true) =
        (available.height, sized(stored.height), stored.max_height.is_undefined())
    {
        style.size.height = Dimension::from_length(height);
    }
}

impl LayoutEngine for TaffyEngine {
    type Node = NodeId;

    fn new_node(&mut self) -> NodeId {
        let style = NodeStyle::new(self.config.use_web_defaults);
        let initial = resolve_style(&style, self.config.default_direction);
        let node = match self.tree.new_leaf(initial) {
            Ok(node) => node,
            Err(err) => violate(ContractViolation::EngineInvariant(err.to_string())),
        };
        self.nodes.insert(
            node,
            NodeRecord {
                style,
                dirty: true,
                resolved: None,
            },
        );
        log::trace!("new taffy node {node:?}");
        node
    }

    fn free_node(&mut self, node: NodeId) {
        if self.nodes.remove(&node).is_none() {
            violate(stale(node));
        }
        if let Err(err) = self.tree.remove(node) {
            violate(ContractViolation::EngineInvariant(err.to_string()));
        }
        log::trace!("freed taffy node {node:?}");
    }

    fn insert_child(&mut self, parent: NodeId, child: NodeId, index: usize) -> Result<(), EngineError> {
        if parent == child {
            return Err(EngineError::SelfInsertion);
        }
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return Err(EngineError::UnknownNode);
        }
        if self.tree.parent(child).is_some() {
            return Err(EngineError::AlreadyParented);
        }
        if self.is_ancestor(child, parent) {
            return Err(EngineError::Cycle);
        }
        let len = self.tree.children(parent)?.len();
        if index > len {
            return Err(EngineError::IndexOutOfBounds { index, len });
        }
        self.tree.insert_child_at_index(parent, index, child)?;
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), EngineError> {
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return Err(EngineError::UnknownNode);
        }
        if self.tree.parent(child) != Some(parent) {
            return Err(EngineError::NotAChild);
        }
        self.tree.remove_child(parent, child)?;
        Ok(())
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.record(node);
        match self.tree.children(node) {
            Ok(children) => children,
            Err(err) => violate(ContractViolation::EngineInvariant(err.to_string())),
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.record(node);
        self.tree.parent(node)
    }

    fn scalar(&self, node: NodeId, property: Property) -> ScalarValue {
        enforce(self.record(node).style.scalar(property))
    }

    fn set_scalar(&mut self, node: NodeId, property: Property, value: ScalarValue) {
        enforce(self.style_mut(node).set_scalar(property, value));
    }

    fn edge_scalar(&self, node: NodeId, property: Property, slot: EdgeSlot) -> f32 {
        enforce(self.record(node).style.edge_scalar(property, slot))
    }

    fn set_edge_scalar(&mut self, node: NodeId, property: Property, slot: EdgeSlot, value: f32) {
        enforce(self.style_mut(node).set_edge_scalar(property, slot, value));
    }

    fn value(&self, node: NodeId, property: Property, slot: Option<EdgeSlot>) -> StyleValue {
        enforce(self.record(node).style.value(property, slot))
    }

    fn set_absolute(&mut self, node: NodeId, property: Property, slot: Option<EdgeSlot>, magnitude: f32) {
        let value = StyleValue::point_or_undefined((!magnitude.is_nan()).then_some(magnitude));
        enforce(self.style_mut(node).set_value(property, slot, value));
    }

    fn set_percent(&mut self, node: NodeId, property: Property, slot: Option<EdgeSlot>, magnitude: f32) {
        let value = if magnitude.is_nan() {
            StyleValue::UNDEFINED
        } else {
            StyleValue::percent(magnitude)
        };
        enforce(self.style_mut(node).set_value(property, slot, value));
    }

    fn set_auto(&mut self, node: NodeId, property: Property, slot: Option<EdgeSlot>) {
        enforce(self.style_mut(node).set_value(property, slot, StyleValue::AUTO));
    }

    fn mark_dirty(&mut self, node: NodeId) {
        self.style_mut(node);
        if let Err(err) = self.tree.mark_dirty(node) {
            log::warn!("could not mark {node:?} dirty: {err}");
        }
    }

    fn calculate_layout(&mut self, node: NodeId, available: ConstraintSize) -> Result<(), EngineError> {
        if !self.nodes.contains_key(&node) {
            return Err(EngineError::UnknownNode);
        }
        let inherited = self
            .tree
            .parent(node)
            .and_then(|parent| self.nodes.get(&parent))
            .and_then(|record| record.resolved)
            .unwrap_or(self.config.default_direction);
        self.sync_styles(node, inherited, available)?;

        if self.config.rounding {
            self.tree.enable_rounding();
        } else {
            self.tree.disable_rounding();
        }
        log::debug!("computing layout for {node:?} within {available}");
        self.tree.compute_layout(
            node,
            taffy::geometry::Size {
                width: available_space(available.width),
                height: available_space(available.height),
            },
        )?;
        Ok(())
    }

    fn computed_layout(&self, node: NodeId) -> Rect {
        self.record(node);
        match self.tree.layout(node) {
            Ok(layout) => Rect::new(
                layout.location.x,
                layout.location.y,
                layout.size.width,
                layout.size.height,
            ),
            Err(err) => violate(ContractViolation::EngineInvariant(err.to_string())),
        }
    }
}
