//! Capability traits composed by concrete chart types.
//!
//! Each trait covers one independent concern; a chart implements the set
//! it needs and construction wires the implementations together
//! explicitly. Accessors and mutators are separate methods, with
//! mutators returning `&mut Self` for configure-then-use chaining.

use polyraster_core::ColorScale;

use crate::map::MapWidget;

/// A chart bound to an interactive map widget.
pub trait MapBound {
    type Map: MapWidget;

    fn map(&self) -> &Self::Map;

    fn map_mut(&mut self) -> &mut Self::Map;
}

/// A chart that fills marks through a linear color scale.
pub trait ColorScaled {
    fn colors(&self) -> &ColorScale;

    fn set_colors(&mut self, colors: ColorScale) -> &mut Self;
}

/// A chart whose backing query is capped to a top-N row limit.
pub trait Cappable {
    fn cap(&self) -> usize;

    fn set_cap(&mut self, cap: usize) -> &mut Self;
}

/// A chart that can be anchored to a parent element, optionally inside a
/// named chart group.
pub trait Anchorable {
    fn anchor(&mut self, parent: &str, chart_group: Option<&str>) -> &mut Self;

    fn anchor_name(&self) -> Option<&str>;

    fn chart_group(&self) -> Option<&str>;
}
