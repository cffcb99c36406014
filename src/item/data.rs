//! Item types: ItemId, FlexItem.

use slotmap::new_key_type;

use crate::config::ItemConfig;
use crate::geometry::Rect;

new_key_type! {
    /// Unique identifier for a layout item. Copy, lightweight (u64).
    pub struct ItemId;
}

/// Data associated with a single layout item.
///
/// `frame` and `bounds` are plain data: measurement never writes them, and
/// [`FlexTree::apply_layout`](super::FlexTree::apply_layout) is the only
/// library code that does.
#[derive(Debug, Clone)]
pub struct FlexItem<N> {
    node: N,
    /// Position and size in the parent's coordinate space.
    pub frame: Rect,
    /// Own coordinate space; origin is normally zero.
    pub bounds: Rect,
    /// Whether this item takes part in layout. Excluded items take no space
    /// and keep their rectangles.
    pub is_layout_enabled: bool,
    /// Stored request for asynchronous measurement. Measurement is always
    /// synchronous; nothing reads this flag.
    pub is_async_measurement_requested: bool,
}

impl<N: Copy> FlexItem<N> {
    pub(crate) fn new(node: N, config: ItemConfig) -> Self {
        Self {
            node,
            frame: Rect::ZERO,
            bounds: Rect::ZERO,
            is_layout_enabled: config.layout_enabled,
            is_async_measurement_requested: config.async_measurement,
        }
    }

    /// The engine node this item owns.
    pub fn node(&self) -> N {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_takes_config_flags() {
        let item = FlexItem::new(7u32, ItemConfig::new().with_layout_enabled(false));
        assert_eq!(item.node(), 7);
        assert!(!item.is_layout_enabled);
        assert!(!item.is_async_measurement_requested);
        assert_eq!(item.frame, Rect::ZERO);
        assert_eq!(item.bounds, Rect::ZERO);
    }
}
