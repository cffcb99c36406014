//! Core geometry types: Point, Size, Rect, and measurement constraints.
//!
//! All values are in layout points (`f32`). `Rect` is what an item stores as
//! its `frame` and `bounds`; [`ConstraintSize`] is what callers hand to the
//! measurement entry point.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position in layout points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A resolved 2D size in layout points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle defined by its origin and size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rectangle from position and size components.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// A rectangle of `size` positioned at the origin.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// The right edge (`x + width`).
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// The bottom edge (`y + height`).
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// One dimension of a measurement constraint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Extent {
    /// A definite amount of available space.
    Definite(f32),
    /// No limit; the engine sizes the item to its content.
    Unconstrained,
}

impl Extent {
    /// Build an extent from a raw float.
    ///
    /// Non-finite input (`NaN`, infinities) means unconstrained. Negative
    /// amounts are clamped to zero with a warning.
    pub fn from_raw(value: f32) -> Self {
        if !value.is_finite() {
            return Extent::Unconstrained;
        }
        if value < 0.0 {
            log::warn!("negative constraint {value} clamped to 0");
            return Extent::Definite(0.0);
        }
        Extent::Definite(value)
    }

    /// The definite amount, if any.
    pub fn definite(self) -> Option<f32> {
        match self {
            Extent::Definite(v) => Some(v),
            Extent::Unconstrained => None,
        }
    }

    pub fn is_unconstrained(self) -> bool {
        matches!(self, Extent::Unconstrained)
    }
}

impl From<f32> for Extent {
    fn from(value: f32) -> Self {
        Extent::from_raw(value)
    }
}

impl From<Option<f32>> for Extent {
    fn from(value: Option<f32>) -> Self {
        value.map_or(Extent::Unconstrained, Extent::from_raw)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Definite(v) => write!(f, "{v}"),
            Extent::Unconstrained => write!(f, "unconstrained"),
        }
    }
}

/// Available width and height handed to the measurement entry point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstraintSize {
    pub width: Extent,
    pub height: Extent,
}

impl ConstraintSize {
    /// Both dimensions unconstrained.
    pub const UNCONSTRAINED: ConstraintSize = ConstraintSize {
        width: Extent::Unconstrained,
        height: Extent::Unconstrained,
    };

    /// Create a constraint from any pair of extent-like values.
    pub fn new(width: impl Into<Extent>, height: impl Into<Extent>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Fixed width, unconstrained height.
    pub fn width(width: f32) -> Self {
        Self::new(width, Extent::Unconstrained)
    }

    /// Fixed height, unconstrained width.
    pub fn height(height: f32) -> Self {
        Self::new(Extent::Unconstrained, height)
    }
}

impl From<Size> for ConstraintSize {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl fmt::Display for ConstraintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
