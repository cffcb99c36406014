//! Edges: the nine addressable sides of an edge-aware property.
//!
//! [`EdgeSlot`] is the storage key space (four physical sides plus the two
//! writing-direction-relative ones). [`Edge`] adds the synthetic
//! `Horizontal`, `Vertical` and `All` selectors, which expand to several slots.

use std::fmt;

/// One stored edge of an edge-aware property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSlot {
    Left,
    Top,
    Right,
    Bottom,
    /// Leading edge in the resolved writing direction.
    Start,
    /// Trailing edge in the resolved writing direction.
    End,
}

impl EdgeSlot {
    /// Every slot, in storage order.
    pub const ALL: [EdgeSlot; 6] = [
        EdgeSlot::Left,
        EdgeSlot::Top,
        EdgeSlot::Right,
        EdgeSlot::Bottom,
        EdgeSlot::Start,
        EdgeSlot::End,
    ];

    /// Position of this slot in per-node edge arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Edge selector accepted by edge-aware property accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
    Start,
    End,
    /// Left and right.
    Horizontal,
    /// Top and bottom.
    Vertical,
    /// Left, top, right and bottom.
    All,
}

impl Edge {
    /// All nine selectors.
    pub const ALL: [Edge; 9] = [
        Edge::Left,
        Edge::Top,
        Edge::Right,
        Edge::Bottom,
        Edge::Start,
        Edge::End,
        Edge::Horizontal,
        Edge::Vertical,
        Edge::All,
    ];

    /// The slots a write through this selector touches.
    pub const fn slots(self) -> &'static [EdgeSlot] {
        match self {
            Edge::Left => &[EdgeSlot::Left],
            Edge::Top => &[EdgeSlot::Top],
            Edge::Right => &[EdgeSlot::Right],
            Edge::Bottom => &[EdgeSlot::Bottom],
            Edge::Start => &[EdgeSlot::Start],
            Edge::End => &[EdgeSlot::End],
            Edge::Horizontal => &[EdgeSlot::Left, EdgeSlot::Right],
            Edge::Vertical => &[EdgeSlot::Top, EdgeSlot::Bottom],
            Edge::All => &[
                EdgeSlot::Left,
                EdgeSlot::Top,
                EdgeSlot::Right,
                EdgeSlot::Bottom,
            ],
        }
    }

    /// Whether this selector spans more than one slot.
    pub const fn is_synthetic(self) -> bool {
        matches!(self, Edge::Horizontal | Edge::Vertical | Edge::All)
    }
}

impl From<EdgeSlot> for Edge {
    fn from(slot: EdgeSlot) -> Self {
        match slot {
            EdgeSlot::Left => Edge::Left,
            EdgeSlot::Top => Edge::Top,
            EdgeSlot::Right => Edge::Right,
            EdgeSlot::Bottom => Edge::Bottom,
            EdgeSlot::Start => Edge::Start,
            EdgeSlot::End => Edge::End,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Left => "left",
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Start => "start",
            Edge::End => "end",
            Edge::Horizontal => "horizontal",
            Edge::Vertical => "vertical",
            Edge::All => "all",
        };
        f.write_str(name)
    }
}

impl fmt::Display for EdgeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Edge::from(*self).fmt(f)
    }
}
