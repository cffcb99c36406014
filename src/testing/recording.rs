//! RecordingEngine: an in-memory [`LayoutEngine`] that logs every mutation.
//!
//! Style primitives are stored in a [`NodeStyle`] per node, exactly like the
//! taffy engine, so getters observe setters. Layout is a stub: every node in
//! the measured subtree gets its point width/height, the definite constraint
//! for the root, or zero, at the origin.

use std::collections::HashMap;

use crate::engine::{EngineError, LayoutEngine, NodeStyle};
use crate::geometry::{ConstraintSize, Extent, Rect, Size};
use crate::style::adapter::{enforce, violate, ContractViolation};
use crate::style::edge::EdgeSlot;
use crate::style::property::{Property, ScalarValue};
use crate::style::value::{StyleValue, Unit};

/// Node handle of a [`RecordingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MockNode(u32);

impl MockNode {
    pub fn id(self) -> u32 {
        self.0
    }
}

/// One mutating primitive call, in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    NewNode {
        node: MockNode,
    },
    FreeNode {
        node: MockNode,
    },
    InsertChild {
        parent: MockNode,
        child: MockNode,
        index: usize,
    },
    RemoveChild {
        parent: MockNode,
        child: MockNode,
    },
    SetScalar {
        node: MockNode,
        property: Property,
        value: ScalarValue,
    },
    SetEdgeScalar {
        node: MockNode,
        property: Property,
        slot: EdgeSlot,
        value: f32,
    },
    SetAbsolute {
        node: MockNode,
        property: Property,
        slot: Option<EdgeSlot>,
        magnitude: f32,
    },
    SetPercent {
        node: MockNode,
        property: Property,
        slot: Option<EdgeSlot>,
        magnitude: f32,
    },
    SetAuto {
        node: MockNode,
        property: Property,
        slot: Option<EdgeSlot>,
    },
    MarkDirty {
        node: MockNode,
    },
    CalculateLayout {
        node: MockNode,
        available: ConstraintSize,
    },
}

#[derive(Debug)]
struct MockState {
    style: NodeStyle,
    parent: Option<MockNode>,
    children: Vec<MockNode>,
    layout: Rect,
}

/// A mock engine for exercising items without taffy.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    nodes: HashMap<MockNode, MockState>,
    next_id: u32,
    calls: Vec<Call>,
    reject_insertions: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since creation or the last [`clear_calls`](Self::clear_calls).
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Make every following `insert_child` fail with [`EngineError::Rejected`].
    pub fn set_reject_insertions(&mut self, reject: bool) {
        self.reject_insertions = reject;
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, node: MockNode) -> bool {
        self.nodes.contains_key(&node)
    }

    #[track_caller]
    fn state(&self, node: MockNode) -> &MockState {
        match self.nodes.get(&node) {
            Some(state) => state,
            None => violate(stale(node)),
        }
    }

    #[track_caller]
    fn style_mut(&mut self, node: MockNode) -> &mut NodeStyle {
        match self.nodes.get_mut(&node) {
            Some(state) => &mut state.style,
            None => violate(stale(node)),
        }
    }

    fn is_ancestor(&self, candidate: MockNode, of: MockNode) -> bool {
        let mut current = self.nodes.get(&of).and_then(|s| s.parent);
        while let Some(node) = current {
            if node == candidate {
                return true;
            }
            current = self.nodes.get(&node).and_then(|s| s.parent);
        }
        false
    }
}

fn stale(node: MockNode) -> ContractViolation {
    ContractViolation::StaleHandle(format!("mock node {}", node.0))
}

fn stub_extent(value: StyleValue, constraint: Option<Extent>) -> f32 {
    match (value.unit, constraint) {
        (Unit::Point, _) => value.value,
        (_, Some(Extent::Definite(available))) => available,
        _ => 0.0,
    }
}

impl LayoutEngine for RecordingEngine {
    type Node = MockNode;

    fn new_node(&mut self) -> MockNode {
        let node = MockNode(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            node,
            MockState {
                style: NodeStyle::new(false),
                parent: None,
                children: Vec::new(),
                layout: Rect::ZERO,
            },
        );
        self.calls.push(Call::NewNode { node });
        node
    }

    fn free_node(&mut self, node: MockNode) {
        let Some(state) = self.nodes.remove(&node) else {
            violate(stale(node));
        };
        if let Some(parent) = state.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|&c| c != node);
        }
        for child in state.children {
            if let Some(child) = self.nodes.get_mut(&child) {
                child.parent = None;
            }
        }
        self.calls.push(Call::FreeNode { node });
    }

    fn insert_child(&mut self, parent: MockNode, child: MockNode, index: usize) -> Result<(), EngineError> {
        self.calls.push(Call::InsertChild { parent, child, index });
        if self.reject_insertions {
            return Err(EngineError::Rejected);
        }
        if parent == child {
            return Err(EngineError::SelfInsertion);
        }
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return Err(EngineError::UnknownNode);
        }
        if self.state(child).parent.is_some() {
            return Err(EngineError::AlreadyParented);
        }
        if self.is_ancestor(child, parent) {
            return Err(EngineError::Cycle);
        }
        let len = self.state(parent).children.len();
        if index > len {
            return Err(EngineError::IndexOutOfBounds { index, len });
        }
        if let Some(state) = self.nodes.get_mut(&parent) {
            state.children.insert(index, child);
        }
        if let Some(state) = self.nodes.get_mut(&child) {
            state.parent = Some(parent);
        }
        Ok(())
    }

    fn remove_child(&mut self, parent: MockNode, child: MockNode) -> Result<(), EngineError> {
        self.calls.push(Call::RemoveChild { parent, child });
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return Err(EngineError::UnknownNode);
        }
        if self.state(child).parent != Some(parent) {
            return Err(EngineError::NotAChild);
        }
        if let Some(state) = self.nodes.get_mut(&parent) {
            state.children.retain(|&c| c != child);
        }
        if let Some(state) = self.nodes.get_mut(&child) {
            state.parent = None;
        }
        Ok(())
    }

    fn children(&self, node: MockNode) -> Vec<MockNode> {
        self.state(node).children.clone()
    }

    fn parent(&self, node: MockNode) -> Option<MockNode> {
        self.state(node).parent
    }

    fn scalar(&self, node: MockNode, property: Property) -> ScalarValue {
        enforce(self.state(node).style.scalar(property))
    }

    fn set_scalar(&mut self, node: MockNode, property: Property, value: ScalarValue) {
        self.calls.push(Call::SetScalar { node, property, value });
        enforce(self.style_mut(node).set_scalar(property, value));
    }

    fn edge_scalar(&self, node: MockNode, property: Property, slot: EdgeSlot) -> f32 {
        enforce(self.state(node).style.edge_scalar(property, slot))
    }

    fn set_edge_scalar(&mut self, node: MockNode, property: Property, slot: EdgeSlot, value: f32) {
        self.calls.push(Call::SetEdgeScalar {
            node,
            property,
            slot,
            value,
        });
        enforce(self.style_mut(node).set_edge_scalar(property, slot, value));
    }

    fn value(&self, node: MockNode, property: Property, slot: Option<EdgeSlot>) -> StyleValue {
        enforce(self.state(node).style.value(property, slot))
    }

    fn set_absolute(&mut self, node: MockNode, property: Property, slot: Option<EdgeSlot>, magnitude: f32) {
        self.calls.push(Call::SetAbsolute {
            node,
            property,
            slot,
            magnitude,
        });
        let value = if magnitude.is_nan() {
            StyleValue::UNDEFINED
        } else {
            StyleValue::point(magnitude)
        };
        enforce(self.style_mut(node).set_value(property, slot, value));
    }

    fn set_percent(&mut self, node: MockNode, property: Property, slot: Option<EdgeSlot>, magnitude: f32) {
        self.calls.push(Call::SetPercent {
            node,
            property,
            slot,
            magnitude,
        });
        enforce(self.style_mut(node).set_value(property, slot, StyleValue::percent(magnitude)));
    }

    fn set_auto(&mut self, node: MockNode, property: Property, slot: Option<EdgeSlot>) {
        self.calls.push(Call::SetAuto { node, property, slot });
        enforce(self.style_mut(node).set_value(property, slot, StyleValue::AUTO));
    }

    fn mark_dirty(&mut self, node: MockNode) {
        self.state(node);
        self.calls.push(Call::MarkDirty { node });
    }

    fn calculate_layout(&mut self, node: MockNode, available: ConstraintSize) -> Result<(), EngineError> {
        self.calls.push(Call::CalculateLayout { node, available });
        if !self.nodes.contains_key(&node) {
            return Err(EngineError::UnknownNode);
        }
        let mut stack = vec![(node, true)];
        while let Some((current, is_root)) = stack.pop() {
            let Some(state) = self.nodes.get_mut(&current) else {
                return Err(EngineError::UnknownNode);
            };
            let width = stub_extent(state.style.width, is_root.then_some(available.width));
            let height = stub_extent(state.style.height, is_root.then_some(available.height));
            state.layout = Rect::from_size(Size::new(width, height));
            stack.extend(state.children.iter().map(|&child| (child, false)));
        }
        Ok(())
    }

    fn computed_layout(&self, node: MockNode) -> Rect {
        self.state(node).layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_mutations_in_order() {
        let mut engine = RecordingEngine::new();
        let a = engine.new_node();
        let b = engine.new_node();
        engine.insert_child(a, b, 0).unwrap();
        engine.set_auto(b, Property::Width, None);

        assert_eq!(
            engine.calls(),
            &[
                Call::NewNode { node: a },
                Call::NewNode { node: b },
                Call::InsertChild {
                    parent: a,
                    child: b,
                    index: 0
                },
                Call::SetAuto {
                    node: b,
                    property: Property::Width,
                    slot: None
                },
            ]
        );
    }

    #[test]
    fn forced_rejection() {
        let mut engine = RecordingEngine::new();
        let a = engine.new_node();
        let b = engine.new_node();
        engine.set_reject_insertions(true);
        assert!(matches!(engine.insert_child(a, b, 0), Err(EngineError::Rejected)));
        assert!(engine.children(a).is_empty());
        assert_eq!(engine.parent(b), None);
    }

    #[test]
    fn natural_rejections() {
        let mut engine = RecordingEngine::new();
        let a = engine.new_node();
        let b = engine.new_node();
        assert!(matches!(engine.insert_child(a, a, 0), Err(EngineError::SelfInsertion)));
        engine.insert_child(a, b, 0).unwrap();
        assert!(matches!(engine.insert_child(b, a, 0), Err(EngineError::Cycle)));
        assert!(matches!(engine.insert_child(a, b, 1), Err(EngineError::AlreadyParented)));
    }

    #[test]
    fn stub_layout_uses_points_then_constraint() {
        let mut engine = RecordingEngine::new();
        let root = engine.new_node();
        let child = engine.new_node();
        engine.insert_child(root, child, 0).unwrap();
        engine.set_absolute(root, Property::Height, None, 40.0);

        engine
            .calculate_layout(root, ConstraintSize::new(100.0, Extent::Unconstrained))
            .unwrap();
        assert_eq!(engine.computed_layout(root), Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(engine.computed_layout(child), Rect::ZERO);
    }

    #[test]
    fn free_unlinks_both_directions() {
        let mut engine = RecordingEngine::new();
        let a = engine.new_node();
        let b = engine.new_node();
        let c = engine.new_node();
        engine.insert_child(a, b, 0).unwrap();
        engine.insert_child(b, c, 0).unwrap();
        engine.free_node(b);
        assert!(engine.children(a).is_empty());
        assert_eq!(engine.parent(c), None);
        assert!(!engine.contains(b));
    }
}
