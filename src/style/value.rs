//! Style values: [`StyleValue`] and its [`Unit`] tag (undefined, point, %, auto).

use std::fmt;

/// The unit a [`StyleValue`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Not set. The magnitude carries no meaning beyond "no constraint".
    Undefined,
    /// Absolute layout points.
    Point,
    /// Percentage of the containing dimension, resolved by the engine.
    Percent,
    /// Engine-determined; the magnitude is ignored.
    Auto,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Undefined => "undefined",
            Unit::Point => "point",
            Unit::Percent => "percent",
            Unit::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// A tagged style value: a magnitude and the unit it is expressed in.
///
/// Equality follows the unit first. Two `Undefined` values are equal whatever
/// their magnitudes, as are two `Auto` values; `Point` and `Percent` values
/// also compare magnitudes.
#[derive(Debug, Clone, Copy)]
pub struct StyleValue {
    pub value: f32,
    pub unit: Unit,
}

impl StyleValue {
    /// The "not set" value.
    pub const UNDEFINED: StyleValue = StyleValue {
        value: f32::NAN,
        unit: Unit::Undefined,
    };

    /// The `auto` value.
    pub const AUTO: StyleValue = StyleValue {
        value: f32::NAN,
        unit: Unit::Auto,
    };

    /// A zero-point value.
    pub const ZERO: StyleValue = StyleValue {
        value: 0.0,
        unit: Unit::Point,
    };

    /// An absolute value in layout points.
    pub const fn point(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Point,
        }
    }

    /// A percentage of the containing dimension (`50.0` is 50%).
    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// Point value for `Some`, undefined for `None`.
    pub fn point_or_undefined(value: Option<f32>) -> Self {
        value.map_or(Self::UNDEFINED, Self::point)
    }

    /// Point value for `Some`, auto for `None`.
    pub fn point_or_auto(value: Option<f32>) -> Self {
        value.map_or(Self::AUTO, Self::point)
    }

    pub fn is_undefined(&self) -> bool {
        self.unit == Unit::Undefined
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }

    /// The magnitude when the unit carries one (`Point` or `Percent`).
    pub fn magnitude(&self) -> Option<f32> {
        match self.unit {
            Unit::Point | Unit::Percent => Some(self.value),
            Unit::Undefined | Unit::Auto => None,
        }
    }
}

impl Default for StyleValue {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        if self.unit != other.unit {
            return false;
        }
        match self.unit {
            Unit::Undefined | Unit::Auto => true,
            Unit::Point | Unit::Percent => self.value == other.value,
        }
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::point(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::point(value as f32)
    }
}

/// Shorthand for [`StyleValue::percent`].
pub fn percent(value: f32) -> StyleValue {
    StyleValue::percent(value)
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Undefined => write!(f, "undefined"),
            Unit::Auto => write!(f, "auto"),
            Unit::Point => write!(f, "{}pt", self.value),
            Unit::Percent => write!(f, "{}%", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_constructor() {
        let v = StyleValue::point(10.0);
        assert_eq!(v.unit, Unit::Point);
        assert_eq!(v.value, 10.0);
        assert_eq!(v.magnitude(), Some(10.0));
    }

    #[test]
    fn percent_constructor() {
        let v = percent(50.0);
        assert_eq!(v.unit, Unit::Percent);
        assert_eq!(v, StyleValue::percent(50.0));
        assert_eq!(v.to_string(), "50%");
    }

    #[test]
    fn from_numbers_is_point() {
        assert_eq!(StyleValue::from(12.5), StyleValue::point(12.5));
        assert_eq!(StyleValue::from(7), StyleValue::point(7.0));
    }

    #[test]
    fn undefined_ignores_magnitude_in_equality() {
        let a = StyleValue {
            value: 3.0,
            unit: Unit::Undefined,
        };
        assert_eq!(a, StyleValue::UNDEFINED);
        assert!(a.is_undefined());
        assert_eq!(a.magnitude(), None);
    }

    #[test]
    fn auto_ignores_magnitude_in_equality() {
        let a = StyleValue {
            value: 99.0,
            unit: Unit::Auto,
        };
        assert_eq!(a, StyleValue::AUTO);
        assert!(a.is_auto());
    }

    #[test]
    fn units_must_match() {
        assert_ne!(StyleValue::point(5.0), StyleValue::percent(5.0));
        assert_ne!(StyleValue::UNDEFINED, StyleValue::AUTO);
        assert_ne!(StyleValue::point(5.0), StyleValue::point(6.0));
    }

    #[test]
    fn option_helpers() {
        assert_eq!(StyleValue::point_or_undefined(None), StyleValue::UNDEFINED);
        assert_eq!(StyleValue::point_or_auto(None), StyleValue::AUTO);
        assert_eq!(
            StyleValue::point_or_auto(Some(4.0)),
            StyleValue::point(4.0)
        );
    }

    #[test]
    fn default_is_undefined() {
        assert!(StyleValue::default().is_undefined());
    }

    #[test]
    fn display() {
        assert_eq!(StyleValue::point(2.5).to_string(), "2.5pt");
        assert_eq!(StyleValue::AUTO.to_string(), "auto");
        assert_eq!(StyleValue::UNDEFINED.to_string(), "undefined");
        assert_eq!(Unit::Percent.to_string(), "percent");
    }
}
