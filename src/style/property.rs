//! Property ids and the dispatch table.
//!
//! Every style property is described by one [`PropertySpec`] row: which
//! [`Strategy`] its accessors use, whether it is addressed per edge, and, for
//! plain scalars, which [`ScalarType`] it carries. The adapters in
//! [`super::adapter`] consult this table instead of hand-written accessors.

use std::fmt;

use super::keywords::{Align, Direction, Display, FlexDirection, Justify, Overflow, PositionType, Wrap};

/// How a property's accessors talk to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Raw number or keyword, no unit.
    Scalar,
    /// Undefined, point or percent.
    Value,
    /// Point, percent or auto.
    AutoValue,
    /// Raw number addressed per edge.
    EdgeScalar,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Scalar => "scalar",
            Strategy::Value => "value",
            Strategy::AutoValue => "auto-value",
            Strategy::EdgeScalar => "edge-scalar",
        };
        f.write_str(name)
    }
}

/// Whether a property takes an edge selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Plain,
    Edged,
}

/// Payload type of a [`Strategy::Scalar`] property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Number,
    /// A number that may also be unset.
    OptionalNumber,
    Direction,
    FlexDirection,
    Justify,
    Align,
    PositionType,
    Wrap,
    Overflow,
    Display,
}

/// Style property ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Direction,
    FlexDirection,
    JustifyContent,
    AlignContent,
    AlignItems,
    AlignSelf,
    PositionType,
    FlexWrap,
    Overflow,
    Display,
    Flex,
    FlexGrow,
    FlexShrink,
    AspectRatio,
    FlexBasis,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    Margin,
    Padding,
    Position,
    Border,
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    pub strategy: Strategy,
    pub shape: Shape,
    /// Set only for [`Strategy::Scalar`] rows.
    pub scalar_type: Option<ScalarType>,
}

const fn scalar(ty: ScalarType) -> PropertySpec {
    PropertySpec {
        strategy: Strategy::Scalar,
        shape: Shape::Plain,
        scalar_type: Some(ty),
    }
}

const fn valued(strategy: Strategy, shape: Shape) -> PropertySpec {
    PropertySpec {
        strategy,
        shape,
        scalar_type: None,
    }
}

/// Indexed by `Property as usize`; order must follow the enum.
const TABLE: [PropertySpec; Property::COUNT] = [
    scalar(ScalarType::Direction),
    scalar(ScalarType::FlexDirection),
    scalar(ScalarType::Justify),
    scalar(ScalarType::Align),
    scalar(ScalarType::Align),
    scalar(ScalarType::Align),
    scalar(ScalarType::PositionType),
    scalar(ScalarType::Wrap),
    scalar(ScalarType::Overflow),
    scalar(ScalarType::Display),
    scalar(ScalarType::OptionalNumber),
    scalar(ScalarType::Number),
    scalar(ScalarType::Number),
    scalar(ScalarType::OptionalNumber),
    valued(Strategy::AutoValue, Shape::Plain),
    valued(Strategy::AutoValue, Shape::Plain),
    valued(Strategy::AutoValue, Shape::Plain),
    valued(Strategy::Value, Shape::Plain),
    valued(Strategy::Value, Shape::Plain),
    valued(Strategy::Value, Shape::Plain),
    valued(Strategy::Value, Shape::Plain),
    valued(Strategy::Value, Shape::Edged),
    valued(Strategy::Value, Shape::Edged),
    valued(Strategy::Value, Shape::Edged),
    valued(Strategy::EdgeScalar, Shape::Edged),
];

impl Property {
    pub const COUNT: usize = 25;

    /// Every property, in table order.
    pub const ALL: [Property; Property::COUNT] = [
        Property::Direction,
        Property::FlexDirection,
        Property::JustifyContent,
        Property::AlignContent,
        Property::AlignItems,
        Property::AlignSelf,
        Property::PositionType,
        Property::FlexWrap,
        Property::Overflow,
        Property::Display,
        Property::Flex,
        Property::FlexGrow,
        Property::FlexShrink,
        Property::AspectRatio,
        Property::FlexBasis,
        Property::Width,
        Property::Height,
        Property::MinWidth,
        Property::MinHeight,
        Property::MaxWidth,
        Property::MaxHeight,
        Property::Margin,
        Property::Padding,
        Property::Position,
        Property::Border,
    ];

    /// This property's row in the dispatch table.
    #[inline]
    pub const fn spec(self) -> PropertySpec {
        TABLE[self as usize]
    }

    #[inline]
    pub const fn strategy(self) -> Strategy {
        self.spec().strategy
    }

    #[inline]
    pub const fn is_edged(self) -> bool {
        matches!(self.spec().shape, Shape::Edged)
    }

    /// CSS-style name, e.g. `min-width`.
    pub const fn name(self) -> &'static str {
        match self {
            Property::Direction => "direction",
            Property::FlexDirection => "flex-direction",
            Property::JustifyContent => "justify-content",
            Property::AlignContent => "align-content",
            Property::AlignItems => "align-items",
            Property::AlignSelf => "align-self",
            Property::PositionType => "position-type",
            Property::FlexWrap => "flex-wrap",
            Property::Overflow => "overflow",
            Property::Display => "display",
            Property::Flex => "flex",
            Property::FlexGrow => "flex-grow",
            Property::FlexShrink => "flex-shrink",
            Property::AspectRatio => "aspect-ratio",
            Property::FlexBasis => "flex-basis",
            Property::Width => "width",
            Property::Height => "height",
            Property::MinWidth => "min-width",
            Property::MinHeight => "min-height",
            Property::MaxWidth => "max-width",
            Property::MaxHeight => "max-height",
            Property::Margin => "margin",
            Property::Padding => "padding",
            Property::Position => "position",
            Property::Border => "border",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Scalar payloads
// ---------------------------------------------------------------------------

/// The payload of a plain scalar property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    Number(f32),
    Undefined,
    Direction(Direction),
    FlexDirection(FlexDirection),
    Justify(Justify),
    Align(Align),
    PositionType(PositionType),
    Wrap(Wrap),
    Overflow(Overflow),
    Display(Display),
}

impl ScalarValue {
    /// Whether this payload may be stored in a property of type `ty`.
    pub fn fits(&self, ty: ScalarType) -> bool {
        matches!(
            (self, ty),
            (ScalarValue::Number(_), ScalarType::Number)
                | (ScalarValue::Number(_), ScalarType::OptionalNumber)
                | (ScalarValue::Undefined, ScalarType::OptionalNumber)
                | (ScalarValue::Direction(_), ScalarType::Direction)
                | (ScalarValue::FlexDirection(_), ScalarType::FlexDirection)
                | (ScalarValue::Justify(_), ScalarType::Justify)
                | (ScalarValue::Align(_), ScalarType::Align)
                | (ScalarValue::PositionType(_), ScalarType::PositionType)
                | (ScalarValue::Wrap(_), ScalarType::Wrap)
                | (ScalarValue::Overflow(_), ScalarType::Overflow)
                | (ScalarValue::Display(_), ScalarType::Display)
        )
    }
}

/// Rust types that travel through the scalar strategy.
pub trait ScalarKind: Sized {
    fn into_scalar(self) -> ScalarValue;
    fn from_scalar(value: ScalarValue) -> Option<Self>;
}

impl ScalarKind for ScalarValue {
    fn into_scalar(self) -> ScalarValue {
        self
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        Some(value)
    }
}

impl ScalarKind for f32 {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Number(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl ScalarKind for Option<f32> {
    fn into_scalar(self) -> ScalarValue {
        self.map_or(ScalarValue::Undefined, ScalarValue::Number)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Number(n) => Some(Some(n)),
            ScalarValue::Undefined => Some(None),
            _ => None,
        }
    }
}

impl ScalarKind for Direction {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Direction(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Direction(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarKind for FlexDirection {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::FlexDirection(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::FlexDirection(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarKind for Justify {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Justify(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Justify(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarKind for Align {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Align(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Align(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarKind for PositionType {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::PositionType(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::PositionType(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarKind for Wrap {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Wrap(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Wrap(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarKind for Overflow {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Overflow(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Overflow(v) => Some(v),
            _ => None,
        }
    }
}

impl ScalarKind for Display {
    fn into_scalar(self) -> ScalarValue {
        ScalarValue::Display(self)
    }

    fn from_scalar(value: ScalarValue) -> Option<Self> {
        match value {
            ScalarValue::Display(v) => Some(v),
            _ => None,
        }
    }
}
