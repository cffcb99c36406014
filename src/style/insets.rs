//! Four-sided inset values for margin and padding shorthands.

use std::fmt;
use std::str::FromStr;

use super::edge::Edge;
use super::parse::{parse_values, ParseError};
use super::value::StyleValue;

/// Top, left, bottom and right values applied together.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: StyleValue,
    pub left: StyleValue,
    pub bottom: StyleValue,
    pub right: StyleValue,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: StyleValue::ZERO,
        left: StyleValue::ZERO,
        bottom: StyleValue::ZERO,
        right: StyleValue::ZERO,
    };

    pub fn new(
        top: impl Into<StyleValue>,
        left: impl Into<StyleValue>,
        bottom: impl Into<StyleValue>,
        right: impl Into<StyleValue>,
    ) -> Self {
        Self {
            top: top.into(),
            left: left.into(),
            bottom: bottom.into(),
            right: right.into(),
        }
    }

    /// The same value on every side.
    pub fn all(value: impl Into<StyleValue>) -> Self {
        let value = value.into();
        Self::new(value, value, value, value)
    }

    pub fn symmetric(vertical: impl Into<StyleValue>, horizontal: impl Into<StyleValue>) -> Self {
        let (vertical, horizontal) = (vertical.into(), horizontal.into());
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Build from CSS shorthand order: 1 to 4 values, clockwise from top.
    pub fn from_shorthand(values: &[StyleValue]) -> Result<Self, ParseError> {
        let insets = match *values {
            [all] => Self::all(all),
            [vertical, horizontal] => Self::symmetric(vertical, horizontal),
            [top, horizontal, bottom] => Self::new(top, horizontal, bottom, horizontal),
            [top, right, bottom, left] => Self::new(top, left, bottom, right),
            _ => {
                return Err(ParseError::ValueCount {
                    expected: "1 to 4 values",
                    found: values.len(),
                })
            }
        };
        Ok(insets)
    }

    /// Each physical side with its value.
    pub fn sides(&self) -> [(Edge, StyleValue); 4] {
        [
            (Edge::Top, self.top),
            (Edge::Left, self.left),
            (Edge::Bottom, self.bottom),
            (Edge::Right, self.right),
        ]
    }
}

impl FromStr for Insets {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_shorthand(&parse_values(s)?)
    }
}

impl fmt::Display for Insets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}
