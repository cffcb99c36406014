//! Integration tests for flexitem.
//!
//! These tests exercise the public API from outside the crate: property
//! routing across every (property, edge, unit) combination, tree
//! synchronization with the engine, measurement, and the fluent builder.

use flexitem::engine::LayoutEngine;
use flexitem::style::{Align, Direction, Display, FlexDirection, Justify, Overflow, PositionType, Strategy, Wrap};
use flexitem::testing::{Call, RecordingEngine};
use flexitem::*;
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const MAGNITUDES: [f32; 3] = [0.0, 12.5, 1.0e6];

fn edges_for(property: Property) -> Vec<Option<Edge>> {
    if property.is_edged() {
        Edge::ALL.iter().copied().map(Some).collect()
    } else {
        vec![None]
    }
}

fn supported_values(strategy: Strategy) -> Vec<StyleValue> {
    let mut values = Vec::new();
    for m in MAGNITUDES {
        values.push(StyleValue::point(m));
        values.push(StyleValue::percent(m));
    }
    match strategy {
        Strategy::Value => values.push(StyleValue::UNDEFINED),
        Strategy::AutoValue => values.push(StyleValue::AUTO),
        Strategy::Scalar | Strategy::EdgeScalar => {}
    }
    values
}

/// Tiny deterministic generator for shuffled tree operations.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

// ---------------------------------------------------------------------------
// Property routing
// ---------------------------------------------------------------------------

#[test]
fn test_value_properties_round_trip_every_edge_and_unit() {
    let mut tree = FlexTree::new();
    for property in Property::ALL {
        let strategy = property.strategy();
        if !matches!(strategy, Strategy::Value | Strategy::AutoValue) {
            continue;
        }
        for edge in edges_for(property) {
            for value in supported_values(strategy) {
                let id = tree.new_item();
                tree.set_value(id, property, edge, value);
                assert_eq!(
                    tree.value(id, property, edge),
                    value,
                    "{property} {edge:?} {value}"
                );
                tree.remove(id).unwrap();
            }
        }
    }
    assert!(tree.is_empty());
    assert_eq!(tree.engine().node_count(), 0);
}

#[test]
fn test_border_round_trips_every_edge() {
    let mut tree = FlexTree::new();
    for edge in Edge::ALL {
        for m in MAGNITUDES {
            let id = tree.new_item();
            tree.set_border(id, edge, m);
            assert_eq!(tree.border(id, edge), m, "{edge} {m}");
        }
    }
}

#[test]
fn test_scalar_properties_round_trip() {
    let mut tree = FlexTree::new();
    let id = tree.new_item();
    tree.set_direction(id, Direction::Rtl);
    tree.set_flex_direction(id, FlexDirection::ColumnReverse);
    tree.set_justify_content(id, Justify::SpaceEvenly);
    tree.set_align_content(id, Align::Stretch);
    tree.set_align_items(id, Align::Center);
    tree.set_align_self(id, Align::FlexEnd);
    tree.set_position_type(id, PositionType::Absolute);
    tree.set_flex_wrap(id, Wrap::WrapReverse);
    tree.set_overflow(id, Overflow::Hidden);
    tree.set_display(id, Display::None);
    tree.set_flex(id, Some(2.0));
    tree.set_flex_grow(id, 1.5);
    tree.set_flex_shrink(id, 0.5);
    tree.set_aspect_ratio(id, Some(1.25));

    assert_eq!(tree.direction(id), Direction::Rtl);
    assert_eq!(tree.flex_direction(id), FlexDirection::ColumnReverse);
    assert_eq!(tree.justify_content(id), Justify::SpaceEvenly);
    assert_eq!(tree.align_content(id), Align::Stretch);
    assert_eq!(tree.align_items(id), Align::Center);
    assert_eq!(tree.align_self(id), Align::FlexEnd);
    assert_eq!(tree.position_type(id), PositionType::Absolute);
    assert_eq!(tree.flex_wrap(id), Wrap::WrapReverse);
    assert_eq!(tree.overflow(id), Overflow::Hidden);
    assert_eq!(tree.display(id), Display::None);
    assert_eq!(tree.flex(id), Some(2.0));
    assert_eq!(tree.flex_grow(id), 1.5);
    assert_eq!(tree.flex_shrink(id), 0.5);
    assert_eq!(tree.aspect_ratio(id), Some(1.25));
}

#[test]
fn test_percent_and_point_take_different_setters() {
    let mut tree = FlexTree::with_engine(RecordingEngine::new());
    let id = tree.new_item();
    let node = tree.item(id).node();
    tree.engine_mut().clear_calls();

    tree.set_width(id, 40.0);
    tree.set_width(id, percent(40.0));
    tree.set_width(id, StyleValue::AUTO);
    tree.set_min_width(id, StyleValue::UNDEFINED);

    assert!(matches!(
        tree.engine().calls(),
        [
            Call::SetAbsolute { node: a, property: Property::Width, slot: None, magnitude: m1 },
            Call::SetPercent { node: b, property: Property::Width, slot: None, magnitude: m2 },
            Call::SetAuto { node: c, property: Property::Width, slot: None },
            Call::SetAbsolute { property: Property::MinWidth, magnitude: m3, .. },
        ] if *a == node && *b == node && *c == node && *m1 == 40.0 && *m2 == 40.0 && m3.is_nan()
    ));
}

#[test]
fn test_all_matches_the_four_sides() {
    let mut tree = FlexTree::new();
    let via_all = tree.new_item();
    let via_sides = tree.new_item();
    tree.set_position(via_all, Edge::All, 7.0);
    for edge in [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom] {
        tree.set_position(via_sides, edge, 7.0);
    }
    for edge in Edge::ALL {
        assert_eq!(tree.position(via_all, edge), tree.position(via_sides, edge), "{edge}");
    }
}

#[test]
fn test_horizontal_matches_left_and_right() {
    let mut tree = FlexTree::new();
    let via_horizontal = tree.new_item();
    let via_sides = tree.new_item();
    tree.set_padding(via_horizontal, Edge::Horizontal, percent(10.0));
    tree.set_padding(via_sides, Edge::Left, percent(10.0));
    tree.set_padding(via_sides, Edge::Right, percent(10.0));
    for edge in Edge::ALL {
        assert_eq!(
            tree.padding(via_horizontal, edge),
            tree.padding(via_sides, edge),
            "{edge}"
        );
    }
}

#[test]
#[should_panic(expected = "does not accept auto values")]
fn test_auto_margin_is_fatal() {
    let mut tree = FlexTree::new();
    let id = tree.new_item();
    tree.set_margin(id, Edge::Top, StyleValue::AUTO);
}

#[test]
fn test_undefined_margin_round_trips() {
    let mut tree = FlexTree::new();
    let id = tree.new_item();
    for edge in Edge::ALL {
        let current = tree.margin(id, edge);
        tree.set_margin(id, edge, current);
        tree.set_margin(id, edge, 6.0);
        tree.set_margin(id, edge, StyleValue::UNDEFINED);
        assert_eq!(tree.margin(id, edge), StyleValue::UNDEFINED, "{edge}");
    }

    let parsed: Insets = "undefined 3".parse().unwrap();
    tree.builder(id).margin_insets(parsed);
    assert_eq!(tree.margin(id, Edge::Top), StyleValue::UNDEFINED);
    assert_eq!(tree.margin(id, Edge::Left), StyleValue::point(3.0));
}

#[test]
#[should_panic(expected = "does not accept auto values")]
fn test_auto_min_height_is_fatal() {
    let mut tree = FlexTree::new();
    let id = tree.new_item();
    tree.set_min_height(id, StyleValue::AUTO);
}

#[test]
#[should_panic(expected = "requires an edge selector")]
fn test_missing_edge_is_fatal() {
    let mut tree = FlexTree::new();
    let id = tree.new_item();
    tree.set_value(id, Property::Margin, None, 1.0);
}

#[test]
fn test_unsupported_unit_writes_nothing() {
    let mut tree = FlexTree::with_engine(RecordingEngine::new());
    let id = tree.new_item();
    tree.engine_mut().clear_calls();
    let err = tree
        .try_set_value(id, Property::Width, None, StyleValue::UNDEFINED)
        .unwrap_err();
    assert_eq!(
        err,
        ContractViolation::UnsupportedUnit {
            property: Property::Width,
            strategy: Strategy::AutoValue,
            unit: Unit::Undefined,
        }
    );
    assert!(tree.engine().calls().is_empty());
}

#[test]
fn test_web_defaults_change_shrink() {
    let mut yoga = FlexTree::new();
    let mut web = FlexTree::with_config(EngineConfig::new().with_web_defaults(true));
    let a = yoga.new_item();
    let b = web.new_item();
    assert_eq!(yoga.flex_shrink(a), 0.0);
    assert_eq!(web.flex_shrink(b), 1.0);
}

// ---------------------------------------------------------------------------
// Tree synchronization
// ---------------------------------------------------------------------------

#[test]
fn test_shuffled_operations_keep_trees_isomorphic() {
    let mut tree = FlexTree::with_engine(RecordingEngine::new());
    let root = tree.new_item();
    let mut items = vec![root];
    let mut rng = Lcg(7);

    for step in 0..200 {
        match rng.next(4) {
            0 | 1 => {
                let child = tree.new_item();
                let parent = items[rng.next(items.len())];
                let index = rng.next(tree.children(parent).len() + 1);
                tree.insert_subitem(parent, child, index).unwrap();
                items.push(child);
            }
            2 => {
                let a = items[rng.next(items.len())];
                let b = items[rng.next(items.len())];
                // Second parents and cycles are rejected without side effects.
                let _ = tree.add_subitem(a, b);
            }
            _ => {
                let victim = items[rng.next(items.len())];
                if victim != root {
                    tree.remove_from_parent(victim).unwrap();
                    tree.add_subitem(root, victim).unwrap();
                }
            }
        }
        assert!(tree.is_synchronized(root), "diverged at step {step}");
    }
    assert_eq!(tree.walk_depth_first(root).len(), items.len());
}

#[test]
fn test_forced_failure_leaves_both_trees_untouched() {
    let mut tree = FlexTree::with_engine(RecordingEngine::new());
    let root = tree.new_item();
    let kept = tree.new_item();
    tree.add_subitem(root, kept).unwrap();
    let extra = tree.new_item();
    let root_node = tree.item(root).node();

    tree.engine_mut().set_reject_insertions(true);
    let err = tree.insert_subitem(root, extra, 0).unwrap_err();
    assert!(matches!(err, TreeError::Rejected { .. }));

    assert_eq!(tree.children(root), &[kept]);
    assert_eq!(tree.parent(extra), None);
    assert_eq!(tree.engine().children(root_node), vec![tree.item(kept).node()]);
    assert!(tree.is_synchronized(root));
}

#[test]
fn test_remove_frees_engine_nodes() {
    let mut tree = FlexTree::new();
    let root = tree.new_item();
    let mid = tree.new_item();
    let leaf = tree.new_item();
    tree.add_subitem(root, mid).unwrap();
    tree.add_subitem(mid, leaf).unwrap();
    assert_eq!(tree.engine().node_count(), 3);

    tree.remove(mid).unwrap();
    assert_eq!(tree.engine().node_count(), 1);
    assert!(!tree.contains(leaf));
    assert!(tree.is_synchronized(root));
}

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

#[test]
fn test_size_that_fits_is_idempotent() {
    let mut tree = FlexTree::new();
    let root = tree.new_item();
    for h in [10.0, 20.0, 30.0] {
        let child = tree.new_item();
        tree.set_height(child, h);
        tree.add_subitem(root, child).unwrap();
    }

    let constraint = ConstraintSize::new(100.0, Extent::Unconstrained);
    let first = tree.size_that_fits(root, constraint);
    for _ in 0..3 {
        assert_eq!(tree.size_that_fits(root, constraint), first);
    }
    assert_eq!(first, Size::new(100.0, 60.0));
    assert_eq!(tree.item(root).frame, Rect::ZERO);
}

#[test]
fn test_restyle_is_observed_by_next_measurement() {
    let mut tree = FlexTree::new();
    let root = tree.new_item();
    let child = tree.new_item();
    tree.set_height(child, 10.0);
    tree.add_subitem(root, child).unwrap();
    let constraint = ConstraintSize::width(50.0);
    assert_eq!(tree.size_that_fits(root, constraint).height, 10.0);

    tree.set_height(child, 45.0);
    assert_eq!(tree.size_that_fits(root, constraint).height, 45.0);
}

#[test]
fn test_rtl_start_margin_mirrors() {
    let mut tree = FlexTree::new();
    let root = tree.new_item();
    let child = tree.new_item();
    tree.builder(root)
        .layout_direction(Direction::Rtl)
        .direction(FlexDirection::Row)
        .size(200.0, 10.0);
    tree.builder(child).width(50.0).margin_edge(Edge::Start, 10.0);
    tree.add_subitem(root, child).unwrap();

    tree.item_mut(root).frame = Rect::new(0.0, 0.0, 200.0, 10.0);
    tree.apply_layout(root, LayoutMode::FitContainer);
    assert_eq!(tree.item(child).frame.origin.x, 140.0);
}

/// Known gap: the async measurement request is stored but never honored;
/// measurement stays synchronous and gives the same answer either way.
#[test]
fn test_async_measurement_flag_is_inert() {
    let mut tree = FlexTree::new();
    let sync = tree.new_item_with(ItemConfig::new());
    let deferred = tree.new_item_with(ItemConfig::new().with_async_measurement(true));
    for id in [sync, deferred] {
        tree.set_width(id, 30.0);
        tree.set_height(id, 15.0);
    }
    assert!(tree.item(deferred).is_async_measurement_requested);

    let expected = tree.size_that_fits(sync, ConstraintSize::UNCONSTRAINED);
    assert_eq!(tree.size_that_fits(deferred, ConstraintSize::UNCONSTRAINED), expected);
    assert_eq!(tree.item(deferred).frame, Rect::ZERO);
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn test_builder_lays_out_a_toolbar() {
    let mut tree = FlexTree::new();
    let root = tree.new_item();
    let mut ids = Vec::new();
    let padding: Insets = "5 10".parse().unwrap();

    tree.builder(root)
        .direction(FlexDirection::Row)
        .align_items(Align::Center)
        .padding_insets(padding)
        .define(|flex| {
            ids.push(flex.new_item().unwrap().square(20.0).id());
            ids.push(flex.new_item().unwrap().grow(1.0).height(10.0).id());
            ids.push(flex.new_item().unwrap().square(20.0).id());
        });

    tree.item_mut(root).frame = Rect::new(3.0, 4.0, 200.0, 0.0);
    tree.builder(root).layout(LayoutMode::AdjustHeight);

    assert_eq!(tree.item(root).frame, Rect::new(3.0, 4.0, 200.0, 30.0));
    assert_eq!(tree.item(ids[0]).frame, Rect::new(10.0, 5.0, 20.0, 20.0));
    assert_eq!(tree.item(ids[1]).frame, Rect::new(30.0, 10.0, 140.0, 10.0));
    assert_eq!(tree.item(ids[2]).frame, Rect::new(170.0, 5.0, 20.0, 20.0));
    assert_eq!(tree.item(ids[1]).bounds, Rect::new(0.0, 0.0, 140.0, 10.0));
}
