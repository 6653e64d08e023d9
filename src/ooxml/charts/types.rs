//! Core chart types and enumerations.
//!
//! This module defines the chart kinds callers select by identifier, the
//! plot-area element each kind compiles to, the per-kind lookup tables
//! (bar direction, grouping, overlap, shape, number format, 3-D view), and the
//! small value enums written as `val` attributes.

use crate::ooxml::error::OoxmlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart kind, one per public identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChartKind {
    Area,
    AreaStacked,
    AreaPercentStacked,
    Area3D,
    Area3DStacked,
    Area3DPercentStacked,
    Bar,
    BarStacked,
    BarPercentStacked,
    Bar3DClustered,
    Bar3DStacked,
    Bar3DPercentStacked,
    Bar3DConeClustered,
    Bar3DConeStacked,
    Bar3DConePercentStacked,
    Bar3DPyramidClustered,
    Bar3DPyramidStacked,
    Bar3DPyramidPercentStacked,
    Bar3DCylinderClustered,
    Bar3DCylinderStacked,
    Bar3DCylinderPercentStacked,
    Col,
    ColStacked,
    ColPercentStacked,
    Col3D,
    Col3DClustered,
    Col3DStacked,
    Col3DPercentStacked,
    Col3DCone,
    Col3DConeClustered,
    Col3DConeStacked,
    Col3DConePercentStacked,
    Col3DPyramid,
    Col3DPyramidClustered,
    Col3DPyramidStacked,
    Col3DPyramidPercentStacked,
    Col3DCylinder,
    Col3DCylinderClustered,
    Col3DCylinderStacked,
    Col3DCylinderPercentStacked,
    Bubble,
    Bubble3D,
    Doughnut,
    Line,
    Pie,
    Pie3D,
    PieOfPie,
    BarOfPie,
    Radar,
    Scatter,
    Surface3D,
    WireframeSurface3D,
    Contour,
    WireframeContour,
}

/// Builder family a chart kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFamily {
    /// Area, bar, column and bubble kinds sharing one builder
    Cartesian,
    Doughnut,
    Line,
    Pie,
    Pie3D,
    OfPie(OfPieType),
    Radar,
    Scatter,
    Surface,
}

impl ChartKind {
    /// Every chart kind, in identifier-table order.
    pub const ALL: [ChartKind; 54] = [
        Self::Area,
        Self::AreaStacked,
        Self::AreaPercentStacked,
        Self::Area3D,
        Self::Area3DStacked,
        Self::Area3DPercentStacked,
        Self::Bar,
        Self::BarStacked,
        Self::BarPercentStacked,
        Self::Bar3DClustered,
        Self::Bar3DStacked,
        Self::Bar3DPercentStacked,
        Self::Bar3DConeClustered,
        Self::Bar3DConeStacked,
        Self::Bar3DConePercentStacked,
        Self::Bar3DPyramidClustered,
        Self::Bar3DPyramidStacked,
        Self::Bar3DPyramidPercentStacked,
        Self::Bar3DCylinderClustered,
        Self::Bar3DCylinderStacked,
        Self::Bar3DCylinderPercentStacked,
        Self::Col,
        Self::ColStacked,
        Self::ColPercentStacked,
        Self::Col3D,
        Self::Col3DClustered,
        Self::Col3DStacked,
        Self::Col3DPercentStacked,
        Self::Col3DCone,
        Self::Col3DConeClustered,
        Self::Col3DConeStacked,
        Self::Col3DConePercentStacked,
        Self::Col3DPyramid,
        Self::Col3DPyramidClustered,
        Self::Col3DPyramidStacked,
        Self::Col3DPyramidPercentStacked,
        Self::Col3DCylinder,
        Self::Col3DCylinderClustered,
        Self::Col3DCylinderStacked,
        Self::Col3DCylinderPercentStacked,
        Self::Bubble,
        Self::Bubble3D,
        Self::Doughnut,
        Self::Line,
        Self::Pie,
        Self::Pie3D,
        Self::PieOfPie,
        Self::BarOfPie,
        Self::Radar,
        Self::Scatter,
        Self::Surface3D,
        Self::WireframeSurface3D,
        Self::Contour,
        Self::WireframeContour,
    ];

    /// The identifier callers use to select this kind.
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::AreaStacked => "areaStacked",
            Self::AreaPercentStacked => "areaPercentStacked",
            Self::Area3D => "area3D",
            Self::Area3DStacked => "area3DStacked",
            Self::Area3DPercentStacked => "area3DPercentStacked",
            Self::Bar => "bar",
            Self::BarStacked => "barStacked",
            Self::BarPercentStacked => "barPercentStacked",
            Self::Bar3DClustered => "bar3DClustered",
            Self::Bar3DStacked => "bar3DStacked",
            Self::Bar3DPercentStacked => "bar3DPercentStacked",
            Self::Bar3DConeClustered => "bar3DConeClustered",
            Self::Bar3DConeStacked => "bar3DConeStacked",
            Self::Bar3DConePercentStacked => "bar3DConePercentStacked",
            Self::Bar3DPyramidClustered => "bar3DPyramidClustered",
            Self::Bar3DPyramidStacked => "bar3DPyramidStacked",
            Self::Bar3DPyramidPercentStacked => "bar3DPyramidPercentStacked",
            Self::Bar3DCylinderClustered => "bar3DCylinderClustered",
            Self::Bar3DCylinderStacked => "bar3DCylinderStacked",
            Self::Bar3DCylinderPercentStacked => "bar3DCylinderPercentStacked",
            Self::Col => "col",
            Self::ColStacked => "colStacked",
            Self::ColPercentStacked => "colPercentStacked",
            Self::Col3D => "col3D",
            Self::Col3DClustered => "col3DClustered",
            Self::Col3DStacked => "col3DStacked",
            Self::Col3DPercentStacked => "col3DPercentStacked",
            Self::Col3DCone => "col3DCone",
            Self::Col3DConeClustered => "col3DConeClustered",
            Self::Col3DConeStacked => "col3DConeStacked",
            Self::Col3DConePercentStacked => "col3DConePercentStacked",
            Self::Col3DPyramid => "col3DPyramid",
            Self::Col3DPyramidClustered => "col3DPyramidClustered",
            Self::Col3DPyramidStacked => "col3DPyramidStacked",
            Self::Col3DPyramidPercentStacked => "col3DPyramidPercentStacked",
            Self::Col3DCylinder => "col3DCylinder",
            Self::Col3DCylinderClustered => "col3DCylinderClustered",
            Self::Col3DCylinderStacked => "col3DCylinderStacked",
            Self::Col3DCylinderPercentStacked => "col3DCylinderPercentStacked",
            Self::Bubble => "bubble",
            Self::Bubble3D => "bubble3D",
            Self::Doughnut => "doughnut",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Pie3D => "pie3D",
            Self::PieOfPie => "pieOfPie",
            Self::BarOfPie => "barOfPie",
            Self::Radar => "radar",
            Self::Scatter => "scatter",
            Self::Surface3D => "surface3D",
            Self::WireframeSurface3D => "wireframeSurface3D",
            Self::Contour => "contour",
            Self::WireframeContour => "wireframeContour",
        }
    }

    /// The builder family for this kind.
    pub const fn family(&self) -> ChartFamily {
        match self {
            Self::Doughnut => ChartFamily::Doughnut,
            Self::Line => ChartFamily::Line,
            Self::Pie => ChartFamily::Pie,
            Self::Pie3D => ChartFamily::Pie3D,
            Self::PieOfPie => ChartFamily::OfPie(OfPieType::Pie),
            Self::BarOfPie => ChartFamily::OfPie(OfPieType::Bar),
            Self::Radar => ChartFamily::Radar,
            Self::Scatter => ChartFamily::Scatter,
            Self::Surface3D | Self::WireframeSurface3D | Self::Contour | Self::WireframeContour => {
                ChartFamily::Surface
            },
            _ => ChartFamily::Cartesian,
        }
    }

    /// The plot-area element this kind compiles to.
    pub const fn element(&self) -> ChartElement {
        match self {
            Self::Area | Self::AreaStacked | Self::AreaPercentStacked => ChartElement::Area,
            Self::Area3D | Self::Area3DStacked | Self::Area3DPercentStacked => {
                ChartElement::Area3D
            },
            Self::Bar
            | Self::BarStacked
            | Self::BarPercentStacked
            | Self::Col
            | Self::ColStacked
            | Self::ColPercentStacked => ChartElement::Bar,
            Self::Bubble | Self::Bubble3D => ChartElement::Bubble,
            Self::Doughnut => ChartElement::Doughnut,
            Self::Line => ChartElement::Line,
            Self::Pie => ChartElement::Pie,
            Self::Pie3D => ChartElement::Pie3D,
            Self::PieOfPie | Self::BarOfPie => ChartElement::OfPie,
            Self::Radar => ChartElement::Radar,
            Self::Scatter => ChartElement::Scatter,
            Self::Surface3D | Self::WireframeSurface3D => ChartElement::Surface3D,
            Self::Contour | Self::WireframeContour => ChartElement::Surface,
            _ => ChartElement::Bar3D,
        }
    }

    #[inline]
    const fn is_bar(&self) -> bool {
        matches!(
            self,
            Self::Bar
                | Self::BarStacked
                | Self::BarPercentStacked
                | Self::Bar3DClustered
                | Self::Bar3DStacked
                | Self::Bar3DPercentStacked
                | Self::Bar3DConeClustered
                | Self::Bar3DConeStacked
                | Self::Bar3DConePercentStacked
                | Self::Bar3DPyramidClustered
                | Self::Bar3DPyramidStacked
                | Self::Bar3DPyramidPercentStacked
                | Self::Bar3DCylinderClustered
                | Self::Bar3DCylinderStacked
                | Self::Bar3DCylinderPercentStacked
        )
    }

    /// `barDir` for bar and column kinds.
    pub const fn bar_direction(&self) -> Option<BarDirection> {
        match self.element() {
            ChartElement::Bar | ChartElement::Bar3D if self.is_bar() => Some(BarDirection::Bar),
            ChartElement::Bar | ChartElement::Bar3D => Some(BarDirection::Column),
            _ => None,
        }
    }

    /// `grouping` for kinds whose element carries one.
    pub const fn grouping(&self) -> Option<Grouping> {
        match self {
            Self::Area | Self::Area3D | Self::Line => Some(Grouping::Standard),
            Self::AreaStacked
            | Self::Area3DStacked
            | Self::BarStacked
            | Self::Bar3DStacked
            | Self::Bar3DConeStacked
            | Self::Bar3DPyramidStacked
            | Self::Bar3DCylinderStacked
            | Self::ColStacked
            | Self::Col3DStacked
            | Self::Col3DConeStacked
            | Self::Col3DPyramidStacked
            | Self::Col3DCylinderStacked => Some(Grouping::Stacked),
            Self::AreaPercentStacked
            | Self::Area3DPercentStacked
            | Self::BarPercentStacked
            | Self::Bar3DPercentStacked
            | Self::Bar3DConePercentStacked
            | Self::Bar3DPyramidPercentStacked
            | Self::Bar3DCylinderPercentStacked
            | Self::ColPercentStacked
            | Self::Col3DPercentStacked
            | Self::Col3DConePercentStacked
            | Self::Col3DPyramidPercentStacked
            | Self::Col3DCylinderPercentStacked => Some(Grouping::PercentStacked),
            Self::Bar
            | Self::Bar3DClustered
            | Self::Bar3DConeClustered
            | Self::Bar3DPyramidClustered
            | Self::Bar3DCylinderClustered
            | Self::Col
            | Self::Col3DClustered
            | Self::Col3DConeClustered
            | Self::Col3DPyramidClustered
            | Self::Col3DCylinderClustered => Some(Grouping::Clustered),
            Self::Col3D | Self::Col3DCone | Self::Col3DPyramid | Self::Col3DCylinder => {
                Some(Grouping::Standard)
            },
            _ => None,
        }
    }

    /// `overlap` for stacked 2-D bar and column kinds.
    pub const fn overlap(&self) -> Option<i32> {
        match self {
            Self::BarStacked | Self::BarPercentStacked | Self::ColStacked | Self::ColPercentStacked => {
                Some(100)
            },
            _ => None,
        }
    }

    /// `shape` for cone, pyramid and cylinder kinds. Plain 3-D bars keep the
    /// default box shape and write none.
    pub const fn shape(&self) -> Option<BarShape> {
        match self {
            Self::Bar3DConeClustered
            | Self::Bar3DConeStacked
            | Self::Bar3DConePercentStacked
            | Self::Col3DCone
            | Self::Col3DConeClustered
            | Self::Col3DConeStacked
            | Self::Col3DConePercentStacked => Some(BarShape::Cone),
            Self::Bar3DPyramidClustered
            | Self::Bar3DPyramidStacked
            | Self::Bar3DPyramidPercentStacked
            | Self::Col3DPyramid
            | Self::Col3DPyramidClustered
            | Self::Col3DPyramidStacked
            | Self::Col3DPyramidPercentStacked => Some(BarShape::Pyramid),
            Self::Bar3DCylinderClustered
            | Self::Bar3DCylinderStacked
            | Self::Bar3DCylinderPercentStacked
            | Self::Col3DCylinder
            | Self::Col3DCylinderClustered
            | Self::Col3DCylinderStacked
            | Self::Col3DCylinderPercentStacked => Some(BarShape::Cylinder),
            _ => None,
        }
    }

    /// `crossBetween` of the value axis.
    pub const fn cross_between(&self) -> CrossBetween {
        match self.family() {
            ChartFamily::Surface => CrossBetween::MidCategory,
            _ => match self.element() {
                ChartElement::Area | ChartElement::Area3D | ChartElement::Bubble => {
                    CrossBetween::MidCategory
                },
                _ => CrossBetween::Between,
            },
        }
    }

    /// Number format code of the value axis.
    pub const fn value_number_format(&self) -> &'static str {
        match self.grouping() {
            Some(Grouping::PercentStacked) => "0%",
            _ => "General",
        }
    }

    /// Camera settings written to `c:view3D`.
    pub const fn view_3d(&self) -> View3D {
        match self {
            Self::Pie3D => View3D::new(30, 0, 0, 30),
            Self::Surface3D | Self::WireframeSurface3D => View3D::new(15, 20, 0, 30),
            Self::Contour | Self::WireframeContour => View3D::new(90, 0, 0, 0),
            _ => match self.element() {
                ChartElement::Area3D | ChartElement::Bar3D => View3D::new(15, 20, 1, 30),
                _ => View3D::new(0, 0, 0, 0),
            },
        }
    }

    /// Whether the kind carries the wireframe qualifier.
    #[inline]
    pub const fn is_wireframe(&self) -> bool {
        matches!(self, Self::WireframeSurface3D | Self::WireframeContour)
    }

    #[inline]
    pub const fn is_bubble(&self) -> bool {
        matches!(self, Self::Bubble | Self::Bubble3D)
    }

    /// Scatter and bubble kinds plot X/Y pairs instead of categories and values.
    #[inline]
    pub const fn uses_xy_values(&self) -> bool {
        matches!(self, Self::Scatter | Self::Bubble | Self::Bubble3D)
    }

    /// Value-axis tick labels are hidden on flat contour charts.
    #[inline]
    pub const fn hides_value_tick_labels(&self) -> bool {
        matches!(self, Self::Contour | Self::WireframeContour)
    }

    /// Whether the kind may be overlaid onto another chart's plot area.
    pub const fn is_combinable(&self) -> bool {
        !matches!(
            self.family(),
            ChartFamily::Pie
                | ChartFamily::Pie3D
                | ChartFamily::OfPie(_)
                | ChartFamily::Doughnut
                | ChartFamily::Surface
        )
    }
}

impl FromStr for ChartKind {
    type Err = OoxmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.identifier() == s)
            .copied()
            .ok_or_else(|| OoxmlError::UnsupportedChartKind(s.to_string()))
    }
}

impl TryFrom<String> for ChartKind {
    type Error = OoxmlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        kind.identifier().to_string()
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Chart-kind element of a plot area. Each is one merge slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartElement {
    Area,
    Area3D,
    Bar,
    Bar3D,
    Bubble,
    Doughnut,
    Line,
    Pie,
    Pie3D,
    OfPie,
    Radar,
    Scatter,
    Surface,
    Surface3D,
}

impl ChartElement {
    pub const ALL: [ChartElement; 14] = [
        Self::Area,
        Self::Area3D,
        Self::Bar,
        Self::Bar3D,
        Self::Bubble,
        Self::Doughnut,
        Self::Line,
        Self::Pie,
        Self::Pie3D,
        Self::OfPie,
        Self::Radar,
        Self::Scatter,
        Self::Surface,
        Self::Surface3D,
    ];

    /// Returns the XML element name for this chart element.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Area => "areaChart",
            Self::Area3D => "area3DChart",
            Self::Bar => "barChart",
            Self::Bar3D => "bar3DChart",
            Self::Bubble => "bubbleChart",
            Self::Doughnut => "doughnutChart",
            Self::Line => "lineChart",
            Self::Pie => "pieChart",
            Self::Pie3D => "pie3DChart",
            Self::OfPie => "ofPieChart",
            Self::Radar => "radarChart",
            Self::Scatter => "scatterChart",
            Self::Surface => "surfaceChart",
            Self::Surface3D => "surface3DChart",
        }
    }

    #[inline]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ChartElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_element_name())
    }
}

/// `c:view3D` camera settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View3D {
    pub rot_x: i32,
    pub rot_y: i32,
    pub right_angle_axes: u8,
    pub perspective: i32,
}

impl View3D {
    #[inline]
    pub const fn new(rot_x: i32, rot_y: i32, right_angle_axes: u8, perspective: i32) -> Self {
        Self {
            rot_x,
            rot_y,
            right_angle_axes,
            perspective,
        }
    }
}

/// Axis position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    /// Bottom position
    Bottom,
    /// Left position
    Left,
    /// Right position
    Right,
    /// Top position
    Top,
}

impl AxisPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
        }
    }
}

/// Axis orientation (min to max or max to min).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Min to max (normal)
    MinMax,
    /// Max to min (reversed)
    MaxMin,
}

impl AxisOrientation {
    #[inline]
    pub const fn from_reverse(reverse: bool) -> Self {
        if reverse { Self::MaxMin } else { Self::MinMax }
    }

    /// Returns the XML value for this orientation.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::MinMax => "minMax",
            Self::MaxMin => "maxMin",
        }
    }
}

/// Tick mark style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMark {
    Cross,
    In,
    None,
    Out,
}

impl TickMark {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::In => "in",
            Self::None => "none",
            Self::Out => "out",
        }
    }
}

/// Tick label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabelPosition {
    High,
    Low,
    NextTo,
    None,
}

impl TickLabelPosition {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::NextTo => "nextTo",
            Self::None => "none",
        }
    }
}

/// Where the value axis crosses the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossBetween {
    /// Between categories
    Between,
    /// On category midpoints
    MidCategory,
}

impl CrossBetween {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::MidCategory => "midCat",
        }
    }
}

/// Bar/column direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarDirection {
    /// Horizontal bars
    Bar,
    /// Vertical bars (columns)
    Column,
}

impl BarDirection {
    /// Returns the XML value for this direction.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "col",
        }
    }
}

/// Series grouping of area, bar and line elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Clustered,
    Stacked,
    PercentStacked,
    Standard,
}

impl Grouping {
    /// Returns the XML value for this grouping.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Clustered => "clustered",
            Self::Stacked => "stacked",
            Self::PercentStacked => "percentStacked",
            Self::Standard => "standard",
        }
    }
}

/// Shape of 3-D bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarShape {
    Cone,
    Cylinder,
    Pyramid,
}

impl BarShape {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Cone => "cone",
            Self::Cylinder => "cylinder",
            Self::Pyramid => "pyramid",
        }
    }
}

/// Secondary plot of a pie-of-pie or bar-of-pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfPieType {
    Pie,
    Bar,
}

impl OfPieType {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
        }
    }
}

/// Legend position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    /// Bottom position
    #[default]
    Bottom,
    /// Left position
    Left,
    /// Right position
    Right,
    /// Top position
    Top,
    /// Top right corner
    TopRight,
    /// No legend at all
    None,
}

impl LegendPosition {
    /// Returns the XML value for this position, or `None` when the legend is omitted.
    #[inline]
    pub const fn xml_value(&self) -> Option<&'static str> {
        match self {
            Self::Bottom => Some("b"),
            Self::Left => Some("l"),
            Self::Right => Some("r"),
            Self::Top => Some("t"),
            Self::TopRight => Some("tr"),
            Self::None => None,
        }
    }
}

/// Marker symbol for scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Circle,
    Dash,
    Diamond,
    Dot,
    None,
    Picture,
    Plus,
    Square,
    Star,
    Triangle,
    X,
    Auto,
}

impl MarkerStyle {
    /// Returns the XML value for this marker style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Dash => "dash",
            Self::Diamond => "diamond",
            Self::Dot => "dot",
            Self::None => "none",
            Self::Picture => "picture",
            Self::Plus => "plus",
            Self::Square => "square",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::X => "x",
            Self::Auto => "auto",
        }
    }
}

/// Scatter chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterStyle {
    LineMarker,
    Line,
    Marker,
    None,
    SmoothMarker,
    Smooth,
}

impl ScatterStyle {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::LineMarker => "lineMarker",
            Self::Line => "line",
            Self::Marker => "marker",
            Self::None => "none",
            Self::SmoothMarker => "smoothMarker",
            Self::Smooth => "smooth",
        }
    }
}

/// Radar chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadarStyle {
    Standard,
    Filled,
    Marker,
}

impl RadarStyle {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Filled => "filled",
            Self::Marker => "marker",
        }
    }
}

/// How blank cells are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayBlanks {
    /// Gaps where there are blank cells
    #[default]
    Gap,
    /// Connect data points across blank cells
    Span,
    /// Treat blank cells as zero
    Zero,
}

impl DisplayBlanks {
    /// Returns the XML value for this display mode.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Gap => "gap",
            Self::Span => "span",
            Self::Zero => "zero",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.identifier().parse::<ChartKind>().unwrap(), kind);
        }
        assert!(matches!(
            "column".parse::<ChartKind>(),
            Err(OoxmlError::UnsupportedChartKind(_))
        ));
    }

    #[test]
    fn test_bar_tables() {
        assert_eq!(ChartKind::Bar.bar_direction(), Some(BarDirection::Bar));
        assert_eq!(
            ChartKind::Col3DConeStacked.bar_direction(),
            Some(BarDirection::Column)
        );
        assert_eq!(ChartKind::Line.bar_direction(), None);
        assert_eq!(ChartKind::Col3D.grouping(), Some(Grouping::Standard));
        assert_eq!(ChartKind::Col3DClustered.grouping(), Some(Grouping::Clustered));
        assert_eq!(ChartKind::Bubble.grouping(), None);
        assert_eq!(ChartKind::ColStacked.overlap(), Some(100));
        assert_eq!(ChartKind::Bar3DStacked.overlap(), None);
        assert_eq!(ChartKind::Bar3DClustered.shape(), None);
        assert_eq!(ChartKind::Col3DPyramid.shape(), Some(BarShape::Pyramid));
        assert_eq!(ChartKind::Col.shape(), None);
    }

    #[test]
    fn test_elements_and_families() {
        assert_eq!(ChartKind::Bar3DCylinderStacked.element(), ChartElement::Bar3D);
        assert_eq!(ChartKind::Bubble3D.element(), ChartElement::Bubble);
        assert_eq!(ChartKind::WireframeContour.element(), ChartElement::Surface);
        assert_eq!(
            ChartKind::BarOfPie.family(),
            ChartFamily::OfPie(OfPieType::Bar)
        );
        assert_eq!(ChartKind::Bubble.family(), ChartFamily::Cartesian);
        for (i, element) in ChartElement::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_value_axis_tables() {
        assert_eq!(ChartKind::AreaStacked.cross_between(), CrossBetween::MidCategory);
        assert_eq!(ChartKind::Contour.cross_between(), CrossBetween::MidCategory);
        assert_eq!(ChartKind::Col.cross_between(), CrossBetween::Between);
        assert_eq!(ChartKind::ColPercentStacked.value_number_format(), "0%");
        assert_eq!(ChartKind::Col.value_number_format(), "General");
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let kind: ChartKind = serde_json::from_str("\"col3DCone\"").unwrap();
        assert_eq!(kind, ChartKind::Col3DCone);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"col3DCone\"");
        assert!(serde_json::from_str::<ChartKind>("\"donut\"").is_err());
    }
}
