//! Property adapters: one generic get/set implementation per [`Strategy`].
//!
//! A [`PropertyAdapter`] pairs a [`Property`] with an optional [`Edge`]
//! after checking the pair against the dispatch table. Its accessors route
//! each call to the matching engine primitive:
//!
//! | Strategy     | undefined | point    | percent | auto  |
//! |--------------|-----------|----------|---------|-------|
//! | `Value`      | absolute  | absolute | percent | fatal |
//! | `AutoValue`  | fatal     | absolute | percent | auto  |
//!
//! Synthetic edges fan a write out to every slot they cover. Reading one
//! returns the slots' common value, or undefined when they disagree.

use crate::engine::LayoutEngine;

use super::edge::{Edge, EdgeSlot};
use super::property::{Property, ScalarKind, ScalarType, ScalarValue, Shape, Strategy};
use super::value::{StyleValue, Unit};

/// A broken caller contract. These are programming errors, not runtime
/// conditions, and the item API turns them into panics via [`violate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractViolation {
    #[error("{property} ({strategy} strategy) does not accept {unit} values")]
    UnsupportedUnit {
        property: Property,
        strategy: Strategy,
        unit: Unit,
    },
    #[error("{property} uses the {actual} strategy, not {expected}")]
    StrategyMismatch {
        property: Property,
        expected: Strategy,
        actual: Strategy,
    },
    #[error("{property} requires an edge selector")]
    MissingEdge { property: Property },
    #[error("{property} does not take an edge selector (got {edge})")]
    UnexpectedEdge { property: Property, edge: Edge },
    #[error("{property} expects a {expected:?} scalar, got {value:?}")]
    ScalarMismatch {
        property: Property,
        expected: ScalarType,
        value: ScalarValue,
    },
    #[error("stale handle: {0}")]
    StaleHandle(String),
    #[error("layout engine invariant broken: {0}")]
    EngineInvariant(String),
}

/// Report a contract violation and abort the calling operation.
#[track_caller]
pub fn violate(violation: ContractViolation) -> ! {
    log::error!("contract violation: {violation}");
    panic!("contract violation: {violation}");
}

/// Unwrap a checked result, escalating a violation to a panic.
#[track_caller]
pub fn enforce<T>(result: Result<T, ContractViolation>) -> T {
    match result {
        Ok(value) => value,
        Err(violation) => violate(violation),
    }
}

/// Which engine setter a value is sent to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    /// The absolute-set primitive. `NaN` stores "undefined".
    Absolute(f32),
    Percent(f32),
    /// The auto-set primitive, which takes no magnitude.
    Auto,
}

impl Strategy {
    /// Pick the engine setter for `value` under this strategy.
    pub fn route(self, property: Property, value: StyleValue) -> Result<Route, ContractViolation> {
        let unsupported = || ContractViolation::UnsupportedUnit {
            property,
            strategy: self,
            unit: value.unit,
        };
        match (self, value.unit) {
            (Strategy::Value, Unit::Undefined) => Ok(Route::Absolute(f32::NAN)),
            (Strategy::Value | Strategy::AutoValue, Unit::Point) => Ok(Route::Absolute(value.value)),
            (Strategy::Value | Strategy::AutoValue, Unit::Percent) => Ok(Route::Percent(value.value)),
            (Strategy::AutoValue, Unit::Auto) => Ok(Route::Auto),
            (Strategy::Value, Unit::Auto) | (Strategy::AutoValue, Unit::Undefined) => {
                Err(unsupported())
            }
            (Strategy::Scalar | Strategy::EdgeScalar, _) => Err(unsupported()),
        }
    }
}

/// A validated (property, edge) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyAdapter {
    property: Property,
    edge: Option<Edge>,
}

impl PropertyAdapter {
    /// Check `edge` against the property's shape.
    pub fn new(property: Property, edge: Option<Edge>) -> Result<Self, ContractViolation> {
        match (property.spec().shape, edge) {
            (Shape::Plain, None) | (Shape::Edged, Some(_)) => Ok(Self { property, edge }),
            (Shape::Plain, Some(edge)) => Err(ContractViolation::UnexpectedEdge { property, edge }),
            (Shape::Edged, None) => Err(ContractViolation::MissingEdge { property }),
        }
    }

    pub fn plain(property: Property) -> Result<Self, ContractViolation> {
        Self::new(property, None)
    }

    pub fn edged(property: Property, edge: Edge) -> Result<Self, ContractViolation> {
        Self::new(property, Some(edge))
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn edge(&self) -> Option<Edge> {
        self.edge
    }

    pub fn strategy(&self) -> Strategy {
        self.property.strategy()
    }

    fn expect_strategy(&self, allowed: &[Strategy]) -> Result<(), ContractViolation> {
        let actual = self.strategy();
        if allowed.contains(&actual) {
            Ok(())
        } else {
            Err(ContractViolation::StrategyMismatch {
                property: self.property,
                expected: allowed[0],
                actual,
            })
        }
    }

    /// Storage slots this adapter touches; `[None]` for plain properties.
    fn slots(&self) -> Vec<Option<EdgeSlot>> {
        match self.edge {
            None => vec![None],
            Some(edge) => edge.slots().iter().copied().map(Some).collect(),
        }
    }

    // -- Value / AutoValue --------------------------------------------------

    pub fn get_value<E: LayoutEngine>(
        &self,
        engine: &E,
        node: E::Node,
    ) -> Result<StyleValue, ContractViolation> {
        self.expect_strategy(&[Strategy::Value, Strategy::AutoValue])?;
        let mut values = self
            .slots()
            .into_iter()
            .map(|slot| engine.value(node, self.property, slot));
        let first = values.next().unwrap_or(StyleValue::UNDEFINED);
        if values.all(|v| v == first) {
            Ok(first)
        } else {
            Ok(StyleValue::UNDEFINED)
        }
    }

    pub fn set_value<E: LayoutEngine>(
        &self,
        engine: &mut E,
        node: E::Node,
        value: StyleValue,
    ) -> Result<(), ContractViolation> {
        self.expect_strategy(&[Strategy::Value, Strategy::AutoValue])?;
        let route = self.strategy().route(self.property, value)?;
        log::trace!(
            "set {}{} = {value} via {route:?}",
            self.property,
            self.edge.map(|e| format!("[{e}]")).unwrap_or_default()
        );
        for slot in self.slots() {
            match route {
                Route::Absolute(magnitude) => {
                    engine.set_absolute(node, self.property, slot, magnitude)
                }
                Route::Percent(magnitude) => engine.set_percent(node, self.property, slot, magnitude),
                Route::Auto => engine.set_auto(node, self.property, slot),
            }
        }
        Ok(())
    }

    // -- Scalar -------------------------------------------------------------

    pub fn get_scalar<E: LayoutEngine, T: ScalarKind>(
        &self,
        engine: &E,
        node: E::Node,
    ) -> Result<T, ContractViolation> {
        self.expect_strategy(&[Strategy::Scalar])?;
        let raw = engine.scalar(node, self.property);
        T::from_scalar(raw).ok_or_else(|| self.scalar_mismatch(raw))
    }

    pub fn set_scalar<E: LayoutEngine, T: ScalarKind>(
        &self,
        engine: &mut E,
        node: E::Node,
        value: T,
    ) -> Result<(), ContractViolation> {
        self.expect_strategy(&[Strategy::Scalar])?;
        let raw = value.into_scalar();
        match self.property.spec().scalar_type {
            Some(ty) if raw.fits(ty) => {
                log::trace!("set {} = {raw:?}", self.property);
                engine.set_scalar(node, self.property, raw);
                Ok(())
            }
            _ => Err(self.scalar_mismatch(raw)),
        }
    }

    fn scalar_mismatch(&self, value: ScalarValue) -> ContractViolation {
        ContractViolation::ScalarMismatch {
            property: self.property,
            expected: self.property.spec().scalar_type.unwrap_or(ScalarType::Number),
            value,
        }
    }

    // -- EdgeScalar ---------------------------------------------------------

    /// Raw per-edge value. A synthetic edge whose slots disagree reads `NaN`.
    pub fn get_edge_scalar<E: LayoutEngine>(
        &self,
        engine: &E,
        node: E::Node,
    ) -> Result<f32, ContractViolation> {
        self.expect_strategy(&[Strategy::EdgeScalar])?;
        let edge = self.edge.ok_or(ContractViolation::MissingEdge {
            property: self.property,
        })?;
        let mut values = edge
            .slots()
            .iter()
            .map(|&slot| engine.edge_scalar(node, self.property, slot));
        let first = values.next().unwrap_or(f32::NAN);
        if values.all(|v| v == first) {
            Ok(first)
        } else {
            Ok(f32::NAN)
        }
    }

    pub fn set_edge_scalar<E: LayoutEngine>(
        &self,
        engine: &mut E,
        node: E::Node,
        value: f32,
    ) -> Result<(), ContractViolation> {
        self.expect_strategy(&[Strategy::EdgeScalar])?;
        let edge = self.edge.ok_or(ContractViolation::MissingEdge {
            property: self.property,
        })?;
        log::trace!("set {}[{edge}] = {value}", self.property);
        for &slot in edge.slots() {
            engine.set_edge_scalar(node, self.property, slot, value);
        }
        Ok(())
    }
}
