//! Per-node style storage backing the engine's style primitives.
//!
//! [`NodeStyle`] keeps every property exactly as it was written, including
//! the writing-direction-relative `start`/`end` slots. Turning it into a
//! concrete layout style happens later, in [`super::resolve`].

use crate::style::adapter::ContractViolation;
use crate::style::edge::EdgeSlot;
use crate::style::keywords::{Align, Direction, Display, FlexDirection, Justify, Overflow, PositionType, Wrap};
use crate::style::property::{Property, ScalarValue, Strategy};
use crate::style::value::StyleValue;

/// Six stored edges, indexed by [`EdgeSlot::index`].
pub type EdgeValues<T> = [T; 6];

/// Style of one engine node, as written.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: Justify,
    pub align_content: Align,
    pub align_items: Align,
    pub align_self: Align,
    pub position_type: PositionType,
    pub flex_wrap: Wrap,
    pub overflow: Overflow,
    pub display: Display,
    pub flex: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub aspect_ratio: Option<f32>,
    pub flex_basis: StyleValue,
    pub width: StyleValue,
    pub height: StyleValue,
    pub min_width: StyleValue,
    pub min_height: StyleValue,
    pub max_width: StyleValue,
    pub max_height: StyleValue,
    pub margin: EdgeValues<StyleValue>,
    pub padding: EdgeValues<StyleValue>,
    pub position: EdgeValues<StyleValue>,
    pub border: EdgeValues<Option<f32>>,
    /// Web defaults: row direction, shrink 1, stretched lines.
    pub web_defaults: bool,
}

impl NodeStyle {
    pub fn new(web_defaults: bool) -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: if web_defaults {
                FlexDirection::Row
            } else {
                FlexDirection::Column
            },
            justify_content: Justify::FlexStart,
            align_content: if web_defaults {
                Align::Stretch
            } else {
                Align::FlexStart
            },
            align_items: Align::Stretch,
            align_self: Align::Auto,
            position_type: PositionType::Relative,
            flex_wrap: Wrap::NoWrap,
            overflow: Overflow::Visible,
            display: Display::Flex,
            flex: None,
            flex_grow: None,
            flex_shrink: None,
            aspect_ratio: None,
            flex_basis: StyleValue::AUTO,
            width: StyleValue::AUTO,
            height: StyleValue::AUTO,
            min_width: StyleValue::UNDEFINED,
            min_height: StyleValue::UNDEFINED,
            max_width: StyleValue::UNDEFINED,
            max_height: StyleValue::UNDEFINED,
            margin: [StyleValue::UNDEFINED; 6],
            padding: [StyleValue::UNDEFINED; 6],
            position: [StyleValue::UNDEFINED; 6],
            border: [None; 6],
            web_defaults,
        }
    }

    // -- Scalars ------------------------------------------------------------

    /// Read a scalar property. Unset grow/shrink read as their defaults.
    pub fn scalar(&self, property: Property) -> Result<ScalarValue, ContractViolation> {
        let value = match property {
            Property::Direction => ScalarValue::Direction(self.direction),
            Property::FlexDirection => ScalarValue::FlexDirection(self.flex_direction),
            Property::JustifyContent => ScalarValue::Justify(self.justify_content),
            Property::AlignContent => ScalarValue::Align(self.align_content),
            Property::AlignItems => ScalarValue::Align(self.align_items),
            Property::AlignSelf => ScalarValue::Align(self.align_self),
            Property::PositionType => ScalarValue::PositionType(self.position_type),
            Property::FlexWrap => ScalarValue::Wrap(self.flex_wrap),
            Property::Overflow => ScalarValue::Overflow(self.overflow),
            Property::Display => ScalarValue::Display(self.display),
            Property::Flex => optional(self.flex),
            Property::FlexGrow => ScalarValue::Number(self.flex_grow.unwrap_or(0.0)),
            Property::FlexShrink => ScalarValue::Number(self.default_flex_shrink()),
            Property::AspectRatio => optional(self.aspect_ratio),
            other => return Err(not_a(other, Strategy::Scalar)),
        };
        Ok(value)
    }

    pub fn set_scalar(&mut self, property: Property, value: ScalarValue) -> Result<(), ContractViolation> {
        match (property, value) {
            (Property::Direction, ScalarValue::Direction(v)) => self.direction = v,
            (Property::FlexDirection, ScalarValue::FlexDirection(v)) => self.flex_direction = v,
            (Property::JustifyContent, ScalarValue::Justify(v)) => self.justify_content = v,
            (Property::AlignContent, ScalarValue::Align(v)) => self.align_content = v,
            (Property::AlignItems, ScalarValue::Align(v)) => self.align_items = v,
            (Property::AlignSelf, ScalarValue::Align(v)) => self.align_self = v,
            (Property::PositionType, ScalarValue::PositionType(v)) => self.position_type = v,
            (Property::FlexWrap, ScalarValue::Wrap(v)) => self.flex_wrap = v,
            (Property::Overflow, ScalarValue::Overflow(v)) => self.overflow = v,
            (Property::Display, ScalarValue::Display(v)) => self.display = v,
            (Property::Flex, v @ (ScalarValue::Number(_) | ScalarValue::Undefined)) => {
                self.flex = number(v)
            }
            (Property::FlexGrow, ScalarValue::Number(n)) => self.flex_grow = defined(n),
            (Property::FlexShrink, ScalarValue::Number(n)) => self.flex_shrink = defined(n),
            (Property::AspectRatio, v @ (ScalarValue::Number(_) | ScalarValue::Undefined)) => {
                self.aspect_ratio = number(v)
            }
            (property, value) => {
                return Err(ContractViolation::ScalarMismatch {
                    property,
                    expected: property
                        .spec()
                        .scalar_type
                        .unwrap_or(crate::style::property::ScalarType::Number),
                    value,
                })
            }
        }
        Ok(())
    }

    fn default_flex_shrink(&self) -> f32 {
        self.flex_shrink
            .unwrap_or(if self.web_defaults { 1.0 } else { 0.0 })
    }

    // -- Values -------------------------------------------------------------

    pub fn value(&self, property: Property, slot: Option<EdgeSlot>) -> Result<StyleValue, ContractViolation> {
        let value = match (property, slot) {
            (Property::FlexBasis, None) => self.flex_basis,
            (Property::Width, None) => self.width,
            (Property::Height, None) => self.height,
            (Property::MinWidth, None) => self.min_width,
            (Property::MinHeight, None) => self.min_height,
            (Property::MaxWidth, None) => self.max_width,
            (Property::MaxHeight, None) => self.max_height,
            (Property::Margin, Some(slot)) => self.margin[slot.index()],
            (Property::Padding, Some(slot)) => self.padding[slot.index()],
            (Property::Position, Some(slot)) => self.position[slot.index()],
            (property, _) => return Err(shape_error(property, slot)),
        };
        Ok(value)
    }

    /// Store `value` verbatim. Unit checks happen in the adapters.
    pub fn set_value(
        &mut self,
        property: Property,
        slot: Option<EdgeSlot>,
        value: StyleValue,
    ) -> Result<(), ContractViolation> {
        let target = match (property, slot) {
            (Property::FlexBasis, None) => &mut self.flex_basis,
            (Property::Width, None) => &mut self.width,
            (Property::Height, None) => &mut self.height,
            (Property::MinWidth, None) => &mut self.min_width,
            (Property::MinHeight, None) => &mut self.min_height,
            (Property::MaxWidth, None) => &mut self.max_width,
            (Property::MaxHeight, None) => &mut self.max_height,
            (Property::Margin, Some(slot)) => &mut self.margin[slot.index()],
            (Property::Padding, Some(slot)) => &mut self.padding[slot.index()],
            (Property::Position, Some(slot)) => &mut self.position[slot.index()],
            (property, _) => return Err(shape_error(property, slot)),
        };
        *target = value;
        Ok(())
    }

    // -- Edge scalars -------------------------------------------------------

    /// Border width at `slot`; unset reads as zero.
    pub fn edge_scalar(&self, property: Property, slot: EdgeSlot) -> Result<f32, ContractViolation> {
        match property {
            Property::Border => Ok(self.border[slot.index()].unwrap_or(0.0)),
            other => Err(not_a(other, Strategy::EdgeScalar)),
        }
    }

    pub fn set_edge_scalar(
        &mut self,
        property: Property,
        slot: EdgeSlot,
        value: f32,
    ) -> Result<(), ContractViolation> {
        match property {
            Property::Border => {
                self.border[slot.index()] = defined(value);
                Ok(())
            }
            other => Err(not_a(other, Strategy::EdgeScalar)),
        }
    }
}

fn optional(value: Option<f32>) -> ScalarValue {
    value.map_or(ScalarValue::Undefined, ScalarValue::Number)
}

fn number(value: ScalarValue) -> Option<f32> {
    match value {
        ScalarValue::Number(n) => defined(n),
        _ => None,
    }
}

fn defined(n: f32) -> Option<f32> {
    (!n.is_nan()).then_some(n)
}

fn not_a(property: Property, expected: Strategy) -> ContractViolation {
    ContractViolation::StrategyMismatch {
        property,
        expected,
        actual: property.strategy(),
    }
}

fn shape_error(property: Property, slot: Option<EdgeSlot>) -> ContractViolation {
    match slot {
        Some(slot) if !property.is_edged() => ContractViolation::UnexpectedEdge {
            property,
            edge: slot.into(),
        },
        None if property.is_edged() => ContractViolation::MissingEdge { property },
        _ => not_a(property, Strategy::Value),
    }
}
