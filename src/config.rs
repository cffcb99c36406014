//! Engine and item configuration.
//!
//! Both structs follow the builder pattern: start from [`Default`] (or
//! `new()`) and chain `with_*` calls.

use crate::style::keywords::Direction;

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Configuration for a layout engine instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Use web defaults: row direction, flex-shrink 1, stretched lines, and
    /// no zero flex-basis for positive `flex`.
    pub use_web_defaults: bool,
    /// Round computed layouts to whole points.
    pub rounding: bool,
    /// Direction a root resolves `Direction::Inherit` to.
    pub default_direction: Direction,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            use_web_defaults: false,
            rounding: true,
            default_direction: Direction::Ltr,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_web_defaults(mut self, enabled: bool) -> Self {
        self.use_web_defaults = enabled;
        self
    }

    pub fn with_rounding(mut self, enabled: bool) -> Self {
        self.rounding = enabled;
        self
    }

    /// Set the root direction. `Inherit` is treated as `Ltr`.
    pub fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = match direction {
            Direction::Inherit => Direction::Ltr,
            other => other,
        };
        self
    }
}

// ---------------------------------------------------------------------------
// ItemConfig
// ---------------------------------------------------------------------------

/// Initial flags of a new item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemConfig {
    pub layout_enabled: bool,
    /// Stored only; measurement stays synchronous.
    pub async_measurement: bool,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            layout_enabled: true,
            async_measurement: false,
        }
    }
}

impl ItemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout_enabled(mut self, enabled: bool) -> Self {
        self.layout_enabled = enabled;
        self
    }

    pub fn with_async_measurement(mut self, requested: bool) -> Self {
        self.async_measurement = requested;
        self
    }
}
