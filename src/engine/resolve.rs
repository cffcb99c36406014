//! NodeStyle -> taffy Style conversion.
//!
//! Resolves what [`NodeStyle`] stores as written into a concrete
//! [`taffy::Style`]:
//!
//! - `start`/`end` edges map to `left`/`right` (or `right`/`left` under RTL)
//!   and win over the physical edge when defined
//! - RTL mirrors the row axes
//! - the `flex` shorthand feeds grow, shrink and basis where those are unset
//! - undefined sizes become `auto`, undefined margins and paddings zero,
//!   undefined insets `auto`

use taffy::prelude::*;

use crate::style::edge::EdgeSlot;
use crate::style::keywords::{self as kw, Direction};
use crate::style::value::{StyleValue, Unit};

use super::node_style::{EdgeValues, NodeStyle};

/// Resolve `own` against the direction inherited from the parent.
pub fn resolve_direction(own: Direction, inherited: Direction) -> Direction {
    match (own, inherited) {
        (Direction::Inherit, Direction::Inherit) => Direction::Ltr,
        (Direction::Inherit, inherited) => inherited,
        (own, _) => own,
    }
}

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

fn dimension(value: StyleValue) -> Dimension {
    match value.unit {
        Unit::Point => Dimension::from_length(value.value),
        Unit::Percent => Dimension::from_percent(value.value / 100.0),
        Unit::Undefined | Unit::Auto => Dimension::AUTO,
    }
}

fn margin(value: StyleValue) -> LengthPercentageAuto {
    match value.unit {
        Unit::Point => LengthPercentageAuto::from_length(value.value),
        Unit::Percent => LengthPercentageAuto::from_percent(value.value / 100.0),
        Unit::Auto => LengthPercentageAuto::AUTO,
        Unit::Undefined => LengthPercentageAuto::ZERO,
    }
}

fn inset(value: StyleValue) -> LengthPercentageAuto {
    match value.unit {
        Unit::Point => LengthPercentageAuto::from_length(value.value),
        Unit::Percent => LengthPercentageAuto::from_percent(value.value / 100.0),
        Unit::Undefined | Unit::Auto => LengthPercentageAuto::AUTO,
    }
}

fn padding(value: StyleValue) -> LengthPercentage {
    match value.unit {
        Unit::Point => LengthPercentage::from_length(value.value),
        Unit::Percent => LengthPercentage::from_percent(value.value / 100.0),
        Unit::Undefined | Unit::Auto => LengthPercentage::ZERO,
    }
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

/// The logical slot that overrides physical `slot` under `direction`.
fn logical_slot(slot: EdgeSlot, direction: Direction) -> Option<EdgeSlot> {
    let rtl = direction == Direction::Rtl;
    match slot {
        EdgeSlot::Left if rtl => Some(EdgeSlot::End),
        EdgeSlot::Left => Some(EdgeSlot::Start),
        EdgeSlot::Right if rtl => Some(EdgeSlot::Start),
        EdgeSlot::Right => Some(EdgeSlot::End),
        _ => None,
    }
}

fn edge_value(values: &EdgeValues<StyleValue>, slot: EdgeSlot, direction: Direction) -> StyleValue {
    logical_slot(slot, direction)
        .map(|logical| values[logical.index()])
        .filter(|value| !value.is_undefined())
        .unwrap_or(values[slot.index()])
}

fn edge_rect<T>(
    values: &EdgeValues<StyleValue>,
    direction: Direction,
    convert: impl Fn(StyleValue) -> T,
) -> taffy::geometry::Rect<T> {
    taffy::geometry::Rect {
        left: convert(edge_value(values, EdgeSlot::Left, direction)),
        right: convert(edge_value(values, EdgeSlot::Right, direction)),
        top: convert(edge_value(values, EdgeSlot::Top, direction)),
        bottom: convert(edge_value(values, EdgeSlot::Bottom, direction)),
    }
}

fn border_width(values: &EdgeValues<Option<f32>>, slot: EdgeSlot, direction: Direction) -> f32 {
    logical_slot(slot, direction)
        .and_then(|logical| values[logical.index()])
        .or(values[slot.index()])
        .unwrap_or(0.0)
}

fn border_rect(values: &EdgeValues<Option<f32>>, direction: Direction) -> taffy::geometry::Rect<LengthPercentage> {
    let side = |slot| LengthPercentage::from_length(border_width(values, slot, direction));
    taffy::geometry::Rect {
        left: side(EdgeSlot::Left),
        right: side(EdgeSlot::Right),
        top: side(EdgeSlot::Top),
        bottom: side(EdgeSlot::Bottom),
    }
}

// ---------------------------------------------------------------------------
// Flex shorthand
// ---------------------------------------------------------------------------

fn flex_grow(style: &NodeStyle) -> f32 {
    match (style.flex_grow, style.flex) {
        (Some(grow), _) => grow,
        (None, Some(flex)) if flex > 0.0 => flex,
        _ => 0.0,
    }
}

fn flex_shrink(style: &NodeStyle) -> f32 {
    match (style.flex_shrink, style.flex) {
        (Some(shrink), _) => shrink,
        (None, Some(flex)) if !style.web_defaults && flex < 0.0 => -flex,
        _ if style.web_defaults => 1.0,
        _ => 0.0,
    }
}

fn flex_basis(style: &NodeStyle) -> StyleValue {
    let basis = style.flex_basis;
    if !basis.is_auto() && !basis.is_undefined() {
        return basis;
    }
    match style.flex {
        Some(flex) if flex > 0.0 && !style.web_defaults => StyleValue::ZERO,
        _ => StyleValue::AUTO,
    }
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

fn flex_direction(value: kw::FlexDirection, direction: Direction) -> FlexDirection {
    let rtl = direction == Direction::Rtl;
    match value {
        kw::FlexDirection::Column => FlexDirection::Column,
        kw::FlexDirection::ColumnReverse => FlexDirection::ColumnReverse,
        kw::FlexDirection::Row if rtl => FlexDirection::RowReverse,
        kw::FlexDirection::Row => FlexDirection::Row,
        kw::FlexDirection::RowReverse if rtl => FlexDirection::Row,
        kw::FlexDirection::RowReverse => FlexDirection::RowReverse,
    }
}

fn justify(value: kw::Justify) -> JustifyContent {
    match value {
        kw::Justify::FlexStart => JustifyContent::FlexStart,
        kw::Justify::Center => JustifyContent::Center,
        kw::Justify::FlexEnd => JustifyContent::FlexEnd,
        kw::Justify::SpaceBetween => JustifyContent::SpaceBetween,
        kw::Justify::SpaceAround => JustifyContent::SpaceAround,
        kw::Justify::SpaceEvenly => JustifyContent::SpaceEvenly,
    }
}

/// `Auto` defers to the parent; distribution keywords pack at the start.
fn align_items(value: kw::Align) -> Option<AlignItems> {
    match value {
        kw::Align::Auto => None,
        kw::Align::FlexStart
        | kw::Align::SpaceBetween
        | kw::Align::SpaceAround
        | kw::Align::SpaceEvenly => Some(AlignItems::FlexStart),
        kw::Align::Center => Some(AlignItems::Center),
        kw::Align::FlexEnd => Some(AlignItems::FlexEnd),
        kw::Align::Stretch => Some(AlignItems::Stretch),
        kw::Align::Baseline => Some(AlignItems::Baseline),
    }
}

fn align_content(value: kw::Align) -> AlignContent {
    match value {
        kw::Align::Auto | kw::Align::FlexStart | kw::Align::Baseline => AlignContent::FlexStart,
        kw::Align::Center => AlignContent::Center,
        kw::Align::FlexEnd => AlignContent::FlexEnd,
        kw::Align::Stretch => AlignContent::Stretch,
        kw::Align::SpaceBetween => AlignContent::SpaceBetween,
        kw::Align::SpaceAround => AlignContent::SpaceAround,
        kw::Align::SpaceEvenly => AlignContent::SpaceEvenly,
    }
}

fn overflow(value: kw::Overflow) -> taffy::style::Overflow {
    match value {
        kw::Overflow::Visible => taffy::style::Overflow::Visible,
        kw::Overflow::Hidden => taffy::style::Overflow::Hidden,
        kw::Overflow::Scroll => taffy::style::Overflow::Scroll,
    }
}

/// Convert a [`NodeStyle`] into a [`taffy::Style`] under a resolved
/// `direction` (`Ltr` or `Rtl`).
pub fn resolve_style(style: &NodeStyle, direction: Direction) -> taffy::Style {
    let mut out = taffy::Style::default();

    out.display = match style.display {
        kw::Display::Flex => Display::Flex,
        kw::Display::None => Display::None,
    };
    out.flex_direction = flex_direction(style.flex_direction, direction);
    out.flex_wrap = match style.flex_wrap {
        kw::Wrap::NoWrap => FlexWrap::NoWrap,
        kw::Wrap::Wrap => FlexWrap::Wrap,
        kw::Wrap::WrapReverse => FlexWrap::WrapReverse,
    };
    out.justify_content = Some(justify(style.justify_content));
    out.align_content = Some(align_content(style.align_content));
    out.align_items = align_items(style.align_items);
    out.align_self = align_items(style.align_self);
    out.position = match style.position_type {
        kw::PositionType::Relative => Position::Relative,
        kw::PositionType::Absolute => Position::Absolute,
    };
    let overflow = overflow(style.overflow);
    out.overflow = taffy::geometry::Point {
        x: overflow,
        y: overflow,
    };

    out.flex_grow = flex_grow(style);
    out.flex_shrink = flex_shrink(style);
    out.flex_basis = dimension(flex_basis(style));
    out.aspect_ratio = style.aspect_ratio;

    out.size = taffy::geometry::Size {
        width: dimension(style.width),
        height: dimension(style.height),
    };
    out.min_size = taffy::geometry::Size {
        width: dimension(style.min_width),
        height: dimension(style.min_height),
    };
    out.max_size = taffy::geometry::Size {
        width: dimension(style.max_width),
        height: dimension(style.max_height),
    };

    out.margin = edge_rect(&style.margin, direction, margin);
    out.padding = edge_rect(&style.padding, direction, padding);
    out.inset = edge_rect(&style.position, direction, inset);
    out.border = border_rect(&style.border, direction);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ltr(style: &NodeStyle) -> taffy::Style {
        resolve_style(style, Direction::Ltr)
    }

    #[test]
    fn direction_inheritance() {
        assert_eq!(resolve_direction(Direction::Inherit, Direction::Rtl), Direction::Rtl);
        assert_eq!(resolve_direction(Direction::Ltr, Direction::Rtl), Direction::Ltr);
        assert_eq!(resolve_direction(Direction::Inherit, Direction::Inherit), Direction::Ltr);
    }

    #[test]
    fn default_style_is_yoga_like() {
        let out = ltr(&NodeStyle::new(false));
        assert_eq!(out.flex_direction, FlexDirection::Column);
        assert_eq!(out.flex_shrink, 0.0);
        assert_eq!(out.flex_grow, 0.0);
        assert_eq!(out.align_content, Some(AlignContent::FlexStart));
        assert_eq!(out.align_items, Some(AlignItems::Stretch));
        assert_eq!(out.align_self, None);
        assert_eq!(out.size.width, Dimension::AUTO);
        assert_eq!(out.margin.left, LengthPercentageAuto::ZERO);
        assert_eq!(out.inset.left, LengthPercentageAuto::AUTO);
    }

    #[test]
    fn web_defaults() {
        let out = ltr(&NodeStyle::new(true));
        assert_eq!(out.flex_direction, FlexDirection::Row);
        assert_eq!(out.flex_shrink, 1.0);
    }

    #[test]
    fn units() {
        let mut style = NodeStyle::new(false);
        style.width = StyleValue::point(10.0);
        style.height = StyleValue::percent(50.0);
        style.margin[EdgeSlot::Top.index()] = StyleValue::AUTO;
        style.padding[EdgeSlot::Bottom.index()] = StyleValue::percent(10.0);

        let out = ltr(&style);
        assert_eq!(out.size.width, Dimension::from_length(10.0));
        assert_eq!(out.size.height, Dimension::from_percent(0.5));
        assert_eq!(out.margin.top, LengthPercentageAuto::AUTO);
        assert_eq!(out.padding.bottom, LengthPercentage::from_percent(0.1));
        assert_eq!(out.padding.top, LengthPercentage::ZERO);
    }

    #[test]
    fn start_end_follow_direction() {
        let mut style = NodeStyle::new(false);
        style.margin[EdgeSlot::Start.index()] = StyleValue::point(5.0);
        style.margin[EdgeSlot::Right.index()] = StyleValue::point(1.0);
        style.border[EdgeSlot::End.index()] = Some(2.0);

        let out = ltr(&style);
        assert_eq!(out.margin.left, LengthPercentageAuto::from_length(5.0));
        assert_eq!(out.margin.right, LengthPercentageAuto::from_length(1.0));
        assert_eq!(out.border.right, LengthPercentage::from_length(2.0));
        assert_eq!(out.border.left, LengthPercentage::from_length(0.0));

        let out = resolve_style(&style, Direction::Rtl);
        assert_eq!(out.margin.right, LengthPercentageAuto::from_length(5.0));
        assert_eq!(out.margin.left, LengthPercentageAuto::ZERO);
        assert_eq!(out.border.left, LengthPercentage::from_length(2.0));
    }

    #[test]
    fn rtl_mirrors_rows() {
        let mut style = NodeStyle::new(false);
        style.flex_direction = kw::FlexDirection::Row;
        assert_eq!(
            resolve_style(&style, Direction::Rtl).flex_direction,
            FlexDirection::RowReverse
        );
        style.flex_direction = kw::FlexDirection::Column;
        assert_eq!(
            resolve_style(&style, Direction::Rtl).flex_direction,
            FlexDirection::Column
        );
    }

    #[test]
    fn flex_shorthand() {
        let mut style = NodeStyle::new(false);
        style.flex = Some(2.0);
        let out = ltr(&style);
        assert_eq!(out.flex_grow, 2.0);
        assert_eq!(out.flex_shrink, 0.0);
        assert_eq!(out.flex_basis, Dimension::from_length(0.0));

        style.flex = Some(-1.0);
        let out = ltr(&style);
        assert_eq!(out.flex_grow, 0.0);
        assert_eq!(out.flex_shrink, 1.0);
        assert_eq!(out.flex_basis, Dimension::AUTO);

        style.flex = Some(3.0);
        style.flex_grow = Some(1.0);
        style.flex_basis = StyleValue::point(20.0);
        let out = ltr(&style);
        assert_eq!(out.flex_grow, 1.0);
        assert_eq!(out.flex_basis, Dimension::from_length(20.0));
    }

    #[test]
    fn web_flex_keeps_auto_basis() {
        let mut style = NodeStyle::new(true);
        style.flex = Some(1.0);
        assert_eq!(ltr(&style).flex_basis, Dimension::AUTO);
    }

    #[test]
    fn distribution_align_items_pack_at_start() {
        assert_eq!(align_items(kw::Align::SpaceAround), Some(AlignItems::FlexStart));
        assert_eq!(align_content(kw::Align::SpaceAround), AlignContent::SpaceAround);
    }
}
