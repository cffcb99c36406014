//! Style accessors on items.
//!
//! Every accessor goes through a [`PropertyAdapter`] built from the
//! property table; the named pairs below are thin wrappers over the generic
//! `value`/`scalar`/`edge_scalar` forms. Unsupported units and other broken
//! contracts panic through [`enforce`]; the `try_*` forms return them.

use crate::engine::LayoutEngine;
use crate::style::adapter::{enforce, ContractViolation, PropertyAdapter};
use crate::style::edge::Edge;
use crate::style::keywords::{Align, Direction, Display, FlexDirection, Justify, Overflow, PositionType, Wrap};
use crate::style::property::{Property, ScalarKind};
use crate::style::value::StyleValue;

use super::data::ItemId;
use super::tree::FlexTree;

impl<E: LayoutEngine> FlexTree<E> {
    // -- Generic ------------------------------------------------------------

    /// Read a `Value`/`AutoValue` property. `edge` is required exactly for
    /// edge-aware properties.
    pub fn try_value(&self, id: ItemId, property: Property, edge: Option<Edge>) -> Result<StyleValue, ContractViolation> {
        PropertyAdapter::new(property, edge)?.get_value(&self.engine, self.node(id))
    }

    #[track_caller]
    pub fn value(&self, id: ItemId, property: Property, edge: Option<Edge>) -> StyleValue {
        enforce(self.try_value(id, property, edge))
    }

    /// Write a `Value`/`AutoValue` property. Nothing reaches the engine when
    /// the unit is unsupported.
    pub fn try_set_value(
        &mut self,
        id: ItemId,
        property: Property,
        edge: Option<Edge>,
        value: impl Into<StyleValue>,
    ) -> Result<(), ContractViolation> {
        let node = self.node(id);
        PropertyAdapter::new(property, edge)?.set_value(&mut self.engine, node, value.into())
    }

    /// Write a `Value`/`AutoValue` property.
    ///
    /// # Panics
    ///
    /// Panics on an unsupported unit (`auto` for a `Value` property,
    /// `undefined` for an `AutoValue` one) or an edge shape mismatch.
    #[track_caller]
    pub fn set_value(&mut self, id: ItemId, property: Property, edge: Option<Edge>, value: impl Into<StyleValue>) {
        enforce(self.try_set_value(id, property, edge, value));
    }

    pub fn try_scalar<T: ScalarKind>(&self, id: ItemId, property: Property) -> Result<T, ContractViolation> {
        PropertyAdapter::plain(property)?.get_scalar(&self.engine, self.node(id))
    }

    #[track_caller]
    pub fn scalar<T: ScalarKind>(&self, id: ItemId, property: Property) -> T {
        enforce(self.try_scalar(id, property))
    }

    pub fn try_set_scalar<T: ScalarKind>(
        &mut self,
        id: ItemId,
        property: Property,
        value: T,
    ) -> Result<(), ContractViolation> {
        let node = self.node(id);
        PropertyAdapter::plain(property)?.set_scalar(&mut self.engine, node, value)
    }

    #[track_caller]
    pub fn set_scalar<T: ScalarKind>(&mut self, id: ItemId, property: Property, value: T) {
        enforce(self.try_set_scalar(id, property, value));
    }

    /// Raw per-edge value. A synthetic edge whose slots disagree reads `NaN`.
    #[track_caller]
    pub fn edge_scalar(&self, id: ItemId, property: Property, edge: Edge) -> f32 {
        enforce(PropertyAdapter::edged(property, edge).and_then(|a| a.get_edge_scalar(&self.engine, self.node(id))))
    }

    #[track_caller]
    pub fn set_edge_scalar(&mut self, id: ItemId, property: Property, edge: Edge, value: f32) {
        let node = self.node(id);
        enforce(PropertyAdapter::edged(property, edge).and_then(|a| a.set_edge_scalar(&mut self.engine, node, value)));
    }

    // -- Sizes --------------------------------------------------------------

    pub fn width(&self, id: ItemId) -> StyleValue {
        self.value(id, Property::Width, None)
    }

    /// Point, percent or auto.
    #[track_caller]
    pub fn set_width(&mut self, id: ItemId, value: impl Into<StyleValue>) {
        self.set_value(id, Property::Width, None, value);
    }

    pub fn height(&self, id: ItemId) -> StyleValue {
        self.value(id, Property::Height, None)
    }

    #[track_caller]
    pub fn set_height(&mut self, id: ItemId, value: impl Into<StyleValue>) {
        self.set_value(id, Property::Height, None, value);
    }

    pub fn min_width(&self, id: ItemId) -> StyleValue {
        self.value(id, Property::MinWidth, None)
    }

    /// Undefined, point or percent.
    #[track_caller]
    pub fn set_min_width(&mut self, id: ItemId, value: impl Into<StyleValue>) {
        self.set_value(id, Property::MinWidth, None, value);
    }

    pub fn min_height(&self, id: ItemId) -> StyleValue {
        self.value(id, Property::MinHeight, None)
    }

    #[track_caller]
    pub fn set_min_height(&mut self, id: ItemId, value: impl Into<StyleValue>) {
        self.set_value(id, Property::MinHeight, None, value);
    }

    pub fn max_width(&self, id: ItemId) -> StyleValue {
        self.value(id, Property::MaxWidth, None)
    }

    #[track_caller]
    pub fn set_max_width(&mut self, id: ItemId, value: impl Into<StyleValue>) {
        self.set_value(id, Property::MaxWidth, None, value);
    }

    pub fn max_height(&self, id: ItemId) -> StyleValue {
        self.value(id, Property::MaxHeight, None)
    }

    #[track_caller]
    pub fn set_max_height(&mut self, id: ItemId, value: impl Into<StyleValue>) {
        self.set_value(id, Property::MaxHeight, None, value);
    }

    pub fn flex_basis(&self, id: ItemId) -> StyleValue {
        self.value(id, Property::FlexBasis, None)
    }

    #[track_caller]
    pub fn set_flex_basis(&mut self, id: ItemId, value: impl Into<StyleValue>) {
        self.set_value(id, Property::FlexBasis, None, value);
    }

    // -- Edges --------------------------------------------------------------

    pub fn margin(&self, id: ItemId, edge: Edge) -> StyleValue {
        self.value(id, Property::Margin, Some(edge))
    }

    /// Undefined, point or percent. The same rules hold for every edged
    /// value property.
    #[track_caller]
    pub fn set_margin(&mut self, id: ItemId, edge: Edge, value: impl Into<StyleValue>) {
        self.set_value(id, Property::Margin, Some(edge), value);
    }

    pub fn padding(&self, id: ItemId, edge: Edge) -> StyleValue {
        self.value(id, Property::Padding, Some(edge))
    }

    #[track_caller]
    pub fn set_padding(&mut self, id: ItemId, edge: Edge, value: impl Into<StyleValue>) {
        self.set_value(id, Property::Padding, Some(edge), value);
    }

    pub fn position(&self, id: ItemId, edge: Edge) -> StyleValue {
        self.value(id, Property::Position, Some(edge))
    }

    #[track_caller]
    pub fn set_position(&mut self, id: ItemId, edge: Edge, value: impl Into<StyleValue>) {
        self.set_value(id, Property::Position, Some(edge), value);
    }

    pub fn border(&self, id: ItemId, edge: Edge) -> f32 {
        self.edge_scalar(id, Property::Border, edge)
    }

    pub fn set_border(&mut self, id: ItemId, edge: Edge, width: f32) {
        self.set_edge_scalar(id, Property::Border, edge, width);
    }

    // -- Scalars ------------------------------------------------------------

    pub fn direction(&self, id: ItemId) -> Direction {
        self.scalar(id, Property::Direction)
    }

    pub fn set_direction(&mut self, id: ItemId, value: Direction) {
        self.set_scalar(id, Property::Direction, value);
    }

    pub fn flex_direction(&self, id: ItemId) -> FlexDirection {
        self.scalar(id, Property::FlexDirection)
    }

    pub fn set_flex_direction(&mut self, id: ItemId, value: FlexDirection) {
        self.set_scalar(id, Property::FlexDirection, value);
    }

    pub fn justify_content(&self, id: ItemId) -> Justify {
        self.scalar(id, Property::JustifyContent)
    }

    pub fn set_justify_content(&mut self, id: ItemId, value: Justify) {
        self.set_scalar(id, Property::JustifyContent, value);
    }

    pub fn align_content(&self, id: ItemId) -> Align {
        self.scalar(id, Property::AlignContent)
    }

    pub fn set_align_content(&mut self, id: ItemId, value: Align) {
        self.set_scalar(id, Property::AlignContent, value);
    }

    pub fn align_items(&self, id: ItemId) -> Align {
        self.scalar(id, Property::AlignItems)
    }

    pub fn set_align_items(&mut self, id: ItemId, value: Align) {
        self.set_scalar(id, Property::AlignItems, value);
    }

    pub fn align_self(&self, id: ItemId) -> Align {
        self.scalar(id, Property::AlignSelf)
    }

    pub fn set_align_self(&mut self, id: ItemId, value: Align) {
        self.set_scalar(id, Property::AlignSelf, value);
    }

    pub fn position_type(&self, id: ItemId) -> PositionType {
        self.scalar(id, Property::PositionType)
    }

    pub fn set_position_type(&mut self, id: ItemId, value: PositionType) {
        self.set_scalar(id, Property::PositionType, value);
    }

    pub fn flex_wrap(&self, id: ItemId) -> Wrap {
        self.scalar(id, Property::FlexWrap)
    }

    pub fn set_flex_wrap(&mut self, id: ItemId, value: Wrap) {
        self.set_scalar(id, Property::FlexWrap, value);
    }

    pub fn overflow(&self, id: ItemId) -> Overflow {
        self.scalar(id, Property::Overflow)
    }

    pub fn set_overflow(&mut self, id: ItemId, value: Overflow) {
        self.set_scalar(id, Property::Overflow, value);
    }

    pub fn display(&self, id: ItemId) -> Display {
        self.scalar(id, Property::Display)
    }

    pub fn set_display(&mut self, id: ItemId, value: Display) {
        self.set_scalar(id, Property::Display, value);
    }

    /// The `flex` shorthand; `None` when unset.
    pub fn flex(&self, id: ItemId) -> Option<f32> {
        self.scalar(id, Property::Flex)
    }

    pub fn set_flex(&mut self, id: ItemId, value: Option<f32>) {
        self.set_scalar(id, Property::Flex, value);
    }

    pub fn flex_grow(&self, id: ItemId) -> f32 {
        self.scalar(id, Property::FlexGrow)
    }

    pub fn set_flex_grow(&mut self, id: ItemId, value: f32) {
        self.set_scalar(id, Property::FlexGrow, value);
    }

    pub fn flex_shrink(&self, id: ItemId) -> f32 {
        self.scalar(id, Property::FlexShrink)
    }

    pub fn set_flex_shrink(&mut self, id: ItemId, value: f32) {
        self.set_scalar(id, Property::FlexShrink, value);
    }

    pub fn aspect_ratio(&self, id: ItemId) -> Option<f32> {
        self.scalar(id, Property::AspectRatio)
    }

    pub fn set_aspect_ratio(&mut self, id: ItemId, value: Option<f32>) {
        self.set_scalar(id, Property::AspectRatio, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::value::{percent, Unit};
    use crate::testing::{Call, RecordingEngine};
    use pretty_assertions::assert_eq;

    fn setup() -> (FlexTree<RecordingEngine>, ItemId) {
        let mut tree = FlexTree::with_engine(RecordingEngine::new());
        let id = tree.new_item();
        tree.engine_mut().clear_calls();
        (tree, id)
    }

    #[test]
    fn named_pairs_round_trip() {
        let (mut tree, id) = setup();
        tree.set_width(id, 120.0);
        tree.set_height(id, percent(50.0));
        tree.set_flex_basis(id, StyleValue::AUTO);
        tree.set_min_width(id, StyleValue::UNDEFINED);
        tree.set_max_height(id, 300);

        assert_eq!(tree.width(id), StyleValue::point(120.0));
        assert_eq!(tree.height(id), StyleValue::percent(50.0));
        assert_eq!(tree.flex_basis(id), StyleValue::AUTO);
        assert_eq!(tree.min_width(id).unit, Unit::Undefined);
        assert_eq!(tree.max_height(id), StyleValue::point(300.0));
    }

    #[test]
    fn scalar_pairs_round_trip() {
        let (mut tree, id) = setup();
        tree.set_flex_direction(id, FlexDirection::RowReverse);
        tree.set_align_self(id, Align::Baseline);
        tree.set_flex(id, Some(2.0));
        tree.set_flex_grow(id, 3.0);
        tree.set_aspect_ratio(id, None);
        tree.set_display(id, Display::None);

        assert_eq!(tree.flex_direction(id), FlexDirection::RowReverse);
        assert_eq!(tree.align_self(id), Align::Baseline);
        assert_eq!(tree.flex(id), Some(2.0));
        assert_eq!(tree.flex_grow(id), 3.0);
        assert_eq!(tree.aspect_ratio(id), None);
        assert_eq!(tree.display(id), Display::None);
    }

    #[test]
    fn horizontal_margin_writes_left_and_right() {
        let (mut tree, id) = setup();
        let node = tree.item(id).node();
        tree.set_margin(id, Edge::Horizontal, 8.0);

        assert_eq!(tree.engine().calls().len(), 2);
        assert!(matches!(
            tree.engine().calls()[1],
            Call::SetAbsolute { node: n, property: Property::Margin, .. } if n == node
        ));
        assert_eq!(tree.margin(id, Edge::Left), StyleValue::point(8.0));
        assert_eq!(tree.margin(id, Edge::Right), StyleValue::point(8.0));
        assert_eq!(tree.margin(id, Edge::Top), StyleValue::UNDEFINED);
        assert_eq!(tree.margin(id, Edge::Horizontal), StyleValue::point(8.0));
    }

    #[test]
    fn border_edges() {
        let (mut tree, id) = setup();
        tree.set_border(id, Edge::Vertical, 1.5);
        assert_eq!(tree.border(id, Edge::Top), 1.5);
        assert_eq!(tree.border(id, Edge::Bottom), 1.5);
        assert_eq!(tree.border(id, Edge::Left), 0.0);
        assert!(tree.border(id, Edge::All).is_nan());
    }

    #[test]
    fn try_set_value_reports_without_writing() {
        let (mut tree, id) = setup();
        let err = tree
            .try_set_value(id, Property::Padding, Some(Edge::Top), StyleValue::AUTO)
            .unwrap_err();
        assert!(matches!(err, ContractViolation::UnsupportedUnit { .. }));
        assert!(matches!(
            tree.try_set_value(id, Property::Padding, None, 1.0),
            Err(ContractViolation::MissingEdge { .. })
        ));
        assert!(tree.engine().calls().is_empty());
    }

    #[test]
    fn margin_reads_write_back() {
        let (mut tree, id) = setup();
        let unset = tree.margin(id, Edge::Top);
        assert_eq!(unset, StyleValue::UNDEFINED);
        tree.set_margin(id, Edge::Top, unset);

        tree.set_margin(id, Edge::Left, 4.0);
        tree.set_margin(id, Edge::Left, StyleValue::UNDEFINED);
        assert_eq!(tree.margin(id, Edge::Left), StyleValue::UNDEFINED);

        tree.set_margin(id, Edge::Right, 2.0);
        let mixed = tree.margin(id, Edge::Horizontal);
        tree.set_margin(id, Edge::Horizontal, mixed);
        assert_eq!(tree.margin(id, Edge::Right), StyleValue::UNDEFINED);
    }

    #[test]
    #[should_panic(expected = "does not accept auto values")]
    fn auto_margin_is_fatal() {
        let (mut tree, id) = setup();
        tree.set_margin(id, Edge::Bottom, StyleValue::AUTO);
    }

    #[test]
    #[should_panic(expected = "does not accept undefined values")]
    fn undefined_width_is_fatal() {
        let (mut tree, id) = setup();
        tree.set_width(id, StyleValue::UNDEFINED);
    }

    #[test]
    #[should_panic(expected = "does not accept auto values")]
    fn auto_padding_is_fatal() {
        let (mut tree, id) = setup();
        tree.set_padding(id, Edge::Left, StyleValue::AUTO);
    }

    #[test]
    #[should_panic(expected = "expects a")]
    fn wrong_scalar_kind_is_fatal() {
        let (mut tree, id) = setup();
        tree.set_scalar(id, Property::Display, Wrap::Wrap);
    }
}
