//! Style surface: values, edges, keywords, the property table and adapters.

pub mod adapter;
pub mod edge;
pub mod insets;
pub mod keywords;
pub mod parse;
pub mod property;
pub mod value;

pub use adapter::{ContractViolation, PropertyAdapter, Route};
pub use edge::{Edge, EdgeSlot};
pub use insets::Insets;
pub use keywords::{Align, Direction, Display, FlexDirection, Justify, Overflow, PositionType, Wrap};
pub use parse::ParseError;
pub use property::{Property, PropertySpec, ScalarKind, ScalarType, ScalarValue, Shape, Strategy};
pub use value::{percent, StyleValue, Unit};
