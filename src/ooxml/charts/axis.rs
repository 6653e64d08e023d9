//! Chart axis models.
//!
//! This module contains structures for the category, value and series axes
//! of a plot area, and the functions that derive them from a [`ChartSpec`].
//! Axis IDs are fixed so that every chart element of a combo chart can refer
//! to the same pair of axes.

use crate::ooxml::charts::models::{NumberFormat, ShapeProperties, TextProperties};
use crate::ooxml::charts::spec::{AxisSpec, ChartSpec};
use crate::ooxml::charts::types::{
    AxisOrientation, AxisPosition, CrossBetween, TickLabelPosition, TickMark,
};

/// ID of the category axis.
pub const CATEGORY_AXIS_ID: u32 = 754_001_152;
/// ID of the value axis.
pub const VALUE_AXIS_ID: u32 = 753_999_904;
/// ID of the series axis of surface charts.
pub const SERIES_AXIS_ID: u32 = 832_256_642;

/// Axis crossing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisCrossMode {
    /// Auto zero crossing
    AutoZero,
    /// Maximum value
    Max,
    /// Minimum value
    Min,
}

impl AxisCrossMode {
    /// Returns the XML value for this crossing mode.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::AutoZero => "autoZero",
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

/// Axis label alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLabelAlign {
    /// Center
    Center,
    /// Left
    Left,
    /// Right
    Right,
}

impl AxisLabelAlign {
    /// Returns the XML value for this alignment.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Center => "ctr",
            Self::Left => "l",
            Self::Right => "r",
        }
    }
}

/// Common axis properties shared by all axis types.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisCommon {
    /// Unique axis ID
    pub axis_id: u32,
    /// Scaling orientation
    pub orientation: AxisOrientation,
    /// Upper scaling bound
    pub max: Option<f64>,
    /// Lower scaling bound
    pub min: Option<f64>,
    /// Whether axis is deleted
    pub deleted: bool,
    /// Axis position (bottom, left, right, top)
    pub position: AxisPosition,
    pub major_gridlines: Option<ShapeProperties>,
    pub minor_gridlines: Option<ShapeProperties>,
    /// Number format for tick labels
    pub number_format: Option<NumberFormat>,
    pub major_tick_mark: Option<TickMark>,
    pub minor_tick_mark: Option<TickMark>,
    pub tick_label_position: TickLabelPosition,
    pub shape_properties: ShapeProperties,
    pub text_properties: TextProperties,
    /// ID of crossing axis
    pub cross_axis_id: u32,
    /// Crossing mode
    pub crosses: Option<AxisCrossMode>,
}

impl AxisCommon {
    /// Create an axis in the default chart style.
    pub fn new(axis_id: u32, position: AxisPosition, cross_axis_id: u32, spec: &AxisSpec) -> Self {
        let gridlines = |show: bool| show.then(ShapeProperties::hairline);
        Self {
            axis_id,
            orientation: AxisOrientation::from_reverse(spec.reverse_order),
            max: spec.maximum,
            min: spec.minimum,
            deleted: false,
            position,
            major_gridlines: gridlines(spec.major_gridlines),
            minor_gridlines: gridlines(spec.minor_gridlines),
            number_format: Some(NumberFormat::general()),
            major_tick_mark: Some(TickMark::None),
            minor_tick_mark: Some(TickMark::None),
            tick_label_position: TickLabelPosition::NextTo,
            shape_properties: ShapeProperties::hairline(),
            text_properties: TextProperties::axis_labels(),
            cross_axis_id,
            crosses: Some(AxisCrossMode::AutoZero),
        }
    }
}

/// Category axis (text-based categories).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAxis {
    /// Common axis properties
    pub common: AxisCommon,
    /// Automatically determine text/date type
    pub auto: bool,
    pub label_align: AxisLabelAlign,
    /// Label offset from axis (0-1000)
    pub label_offset: u32,
    /// Skip N tick labels
    pub tick_label_skip: Option<u32>,
    /// No multi-level categories
    pub no_multi_level: bool,
}

/// Value axis (numeric values).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    /// Common axis properties
    pub common: AxisCommon,
    pub cross_between: CrossBetween,
    /// Major unit
    pub major_unit: Option<f64>,
}

/// Series axis (depth axis of 3-D surface charts).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesAxis {
    /// Common axis properties
    pub common: AxisCommon,
}

/// Axis enumeration for holding any axis type.
#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    Category(CategoryAxis),
    Value(ValueAxis),
    Series(SeriesAxis),
}

impl Axis {
    /// Returns the XML element name for this axis.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Category(_) => "catAx",
            Self::Value(_) => "valAx",
            Self::Series(_) => "serAx",
        }
    }

    /// Get the common axis properties.
    #[inline]
    pub fn common(&self) -> &AxisCommon {
        match self {
            Self::Category(ax) => &ax.common,
            Self::Value(ax) => &ax.common,
            Self::Series(ax) => &ax.common,
        }
    }

    /// Get the axis ID.
    #[inline]
    pub fn axis_id(&self) -> u32 {
        self.common().axis_id
    }
}

/// The category axis, configured by the chart's `x_axis` options.
pub fn category_axis(spec: &ChartSpec) -> CategoryAxis {
    let position = if spec.x_axis.reverse_order {
        AxisPosition::Top
    } else {
        AxisPosition::Bottom
    };
    CategoryAxis {
        common: AxisCommon::new(CATEGORY_AXIS_ID, position, VALUE_AXIS_ID, &spec.x_axis),
        auto: true,
        label_align: AxisLabelAlign::Center,
        label_offset: 100,
        tick_label_skip: spec.x_axis.tick_label_skip.filter(|skip| *skip != 0),
        no_multi_level: false,
    }
}

/// The value axis, configured by the chart's `y_axis` options.
pub fn value_axis(spec: &ChartSpec) -> ValueAxis {
    let position = if spec.y_axis.reverse_order {
        AxisPosition::Right
    } else {
        AxisPosition::Left
    };
    let mut common = AxisCommon::new(VALUE_AXIS_ID, position, CATEGORY_AXIS_ID, &spec.y_axis);
    common.number_format = Some(NumberFormat::new(spec.kind.value_number_format()));
    if spec.kind.hides_value_tick_labels() {
        common.tick_label_position = TickLabelPosition::None;
    }
    ValueAxis {
        common,
        cross_between: spec.kind.cross_between(),
        major_unit: spec.y_axis.major_unit.filter(|unit| *unit != 0.0),
    }
}

/// The series axis of surface charts.
///
/// It is scaled like the value axis and sits where the category axis sits.
pub fn series_axis(spec: &ChartSpec) -> SeriesAxis {
    let position = if spec.x_axis.reverse_order {
        AxisPosition::Top
    } else {
        AxisPosition::Bottom
    };
    let mut common = AxisCommon::new(SERIES_AXIS_ID, position, VALUE_AXIS_ID, &spec.y_axis);
    common.major_gridlines = None;
    common.minor_gridlines = None;
    common.number_format = None;
    common.major_tick_mark = None;
    common.minor_tick_mark = None;
    common.crosses = None;
    SeriesAxis { common }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::types::ChartKind;

    #[test]
    fn test_axes_cross_each_other() {
        let spec = ChartSpec::new(ChartKind::Col);
        let cat = category_axis(&spec);
        let val = value_axis(&spec);
        assert_eq!(cat.common.cross_axis_id, val.common.axis_id);
        assert_eq!(val.common.cross_axis_id, cat.common.axis_id);
        assert_eq!(series_axis(&spec).common.cross_axis_id, VALUE_AXIS_ID);
    }

    #[test]
    fn test_reverse_order_moves_axes() {
        let mut spec = ChartSpec::new(ChartKind::Bar);
        spec.x_axis.reverse_order = true;
        spec.y_axis.reverse_order = true;
        let cat = category_axis(&spec);
        assert_eq!(cat.common.position, AxisPosition::Top);
        assert_eq!(cat.common.orientation, AxisOrientation::MaxMin);
        assert_eq!(value_axis(&spec).common.position, AxisPosition::Right);
    }

    #[test]
    fn test_zero_bound_is_kept() {
        let mut spec = ChartSpec::new(ChartKind::Line);
        spec.y_axis.minimum = Some(0.0);
        spec.y_axis.major_unit = Some(0.0);
        let val = value_axis(&spec);
        assert_eq!(val.common.min, Some(0.0));
        assert_eq!(val.common.max, None);
        assert_eq!(val.major_unit, None);
    }

    #[test]
    fn test_contour_hides_value_labels() {
        let val = value_axis(&ChartSpec::new(ChartKind::WireframeContour));
        assert_eq!(val.common.tick_label_position, TickLabelPosition::None);
        assert_eq!(val.cross_between, CrossBetween::MidCategory);
        let pct = value_axis(&ChartSpec::new(ChartKind::AreaPercentStacked));
        assert_eq!(pct.common.number_format.unwrap().format_code, "0%");
    }
}
