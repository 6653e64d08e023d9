//! Chart series and data point models.
//!
//! This module turns the series of a [`ChartSpec`] into `c:ser` entries. What a
//! series carries depends on the chart kind: scatter and bubble series plot
//! X/Y pairs instead of categories and values, line and scatter series get
//! explicit line properties, pie slices get data points, and so on.

use crate::common::unit::{DEFAULT_LINE_WIDTH_EMU, line_width_to_emu};
use crate::ooxml::charts::models::{
    ColorRef, DataSource, Fill, LineProperties, MARKER_LINE_EMU, SchemeColor, Shape3D,
    ShapeProperties,
};
use crate::ooxml::charts::spec::{ChartSpec, MarkerSpec, SeriesSpec};
use crate::ooxml::charts::types::{ChartFamily, ChartKind, MarkerStyle};

/// A single formatted data point.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Index of this data point
    pub index: u32,
    pub bubble_3d: bool,
    pub shape_properties: ShapeProperties,
}

/// Data label switches (`c:dLbls`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataLabels {
    pub show_legend_key: bool,
    pub show_value: bool,
    pub show_category_name: bool,
    pub show_series_name: bool,
    pub show_percent: bool,
    pub show_bubble_size: bool,
    pub show_leader_lines: bool,
}

impl DataLabels {
    /// Labels configured by the chart's plot-area and legend options.
    pub fn from_spec(spec: &ChartSpec) -> Self {
        Self {
            show_legend_key: spec.legend.show_legend_key,
            show_value: spec.plot_area.show_val,
            show_category_name: spec.plot_area.show_cat_name,
            show_series_name: spec.plot_area.show_ser_name,
            show_percent: spec.plot_area.show_percent,
            show_bubble_size: spec.plot_area.show_bubble_size,
            show_leader_lines: spec.plot_area.show_leader_lines,
        }
    }
}

/// Series marker (`c:marker`).
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub symbol: MarkerStyle,
    pub size: u32,
    pub shape_properties: Option<ShapeProperties>,
}

/// A chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Series index, unique across all chart elements of the plot area
    pub index: u32,
    /// Legend order
    pub order: u32,
    /// Series name reference
    pub name: DataSource,
    pub shape_properties: Option<ShapeProperties>,
    pub marker: Option<Marker>,
    pub data_points: Vec<DataPoint>,
    pub data_labels: Option<DataLabels>,
    pub categories: Option<DataSource>,
    pub values: Option<DataSource>,
    pub x_values: Option<DataSource>,
    pub y_values: Option<DataSource>,
    pub bubble_sizes: Option<DataSource>,
    pub bubble_3d: bool,
}

/// Build the series of a chart whose first series is numbered `order`.
pub fn build_series(spec: &ChartSpec, order: u32) -> Vec<Series> {
    spec.series
        .iter()
        .enumerate()
        .map(|(k, series)| build_one(spec, series, k as u32, order))
        .collect()
}

fn build_one(spec: &ChartSpec, series: &SeriesSpec, k: u32, order: u32) -> Series {
    let kind = spec.kind;
    let xy = kind.uses_xy_values();
    Series {
        index: k + order,
        order: k + order,
        name: DataSource::str_ref(&series.name),
        shape_properties: series_shape_properties(kind, series, k + order),
        marker: series_marker(kind, series.marker, k),
        data_points: data_points(kind, k),
        data_labels: series_data_labels(spec),
        categories: (!xy && !series.categories.is_empty())
            .then(|| DataSource::str_ref(&series.categories)),
        values: (!xy).then(|| DataSource::num_ref(&series.values)),
        x_values: x_values(kind, series),
        y_values: xy.then(|| {
            DataSource::num_ref(series.y_values.as_deref().unwrap_or(&series.values))
        }),
        bubble_sizes: kind.is_bubble().then(|| {
            DataSource::num_ref(series.sizes.as_deref().unwrap_or(&series.values))
        }),
        bubble_3d: kind == ChartKind::Bubble3D,
    }
}

/// Line series draw a rounded line in the accent color of their global index;
/// scatter series draw no connecting line at all.
fn series_shape_properties(kind: ChartKind, series: &SeriesSpec, global: u32) -> Option<ShapeProperties> {
    match kind {
        ChartKind::Line => {
            let mut line = LineProperties::new(line_width_to_emu(series.line.width)).with_cap("rnd");
            if let Some(accent) = SchemeColor::accent_for(global) {
                line = line.with_fill(Fill::Solid(ColorRef::new(accent)));
            }
            Some(ShapeProperties::line(line))
        },
        ChartKind::Scatter => Some(ShapeProperties::line(
            LineProperties::new(DEFAULT_LINE_WIDTH_EMU).with_fill(Fill::NoFill),
        )),
        _ => None,
    }
}

fn series_marker(kind: ChartKind, spec: Option<MarkerSpec>, k: u32) -> Option<Marker> {
    if kind != ChartKind::Scatter {
        return None;
    }
    let spec = spec.unwrap_or_default();
    let shape_properties = SchemeColor::accent_for(k).map(|accent| {
        let fill = Fill::Solid(ColorRef::new(accent));
        ShapeProperties {
            fill: Some(fill),
            line: Some(LineProperties::new(MARKER_LINE_EMU).with_fill(fill)),
            shape_3d: None,
        }
    });
    Some(Marker {
        symbol: spec.symbol,
        size: spec.size,
        shape_properties,
    })
}

fn data_points(kind: ChartKind, k: u32) -> Vec<DataPoint> {
    if !matches!(kind.family(), ChartFamily::Pie | ChartFamily::Pie3D) {
        return Vec::new();
    }
    let border = ColorRef::new(SchemeColor::Light1);
    vec![DataPoint {
        index: k,
        bubble_3d: false,
        shape_properties: ShapeProperties {
            fill: SchemeColor::accent_for(k).map(|accent| Fill::Solid(ColorRef::new(accent))),
            line: Some(
                LineProperties::new(DEFAULT_LINE_WIDTH_EMU)
                    .with_cap("rnd")
                    .with_fill(Fill::Solid(border)),
            ),
            shape_3d: Some(Shape3D {
                contour_width: DEFAULT_LINE_WIDTH_EMU,
                contour_color: border,
            }),
        },
    }]
}

fn series_data_labels(spec: &ChartSpec) -> Option<DataLabels> {
    let kind = spec.kind;
    if kind == ChartKind::Scatter || kind.is_bubble() || kind.family() == ChartFamily::Surface {
        return None;
    }
    Some(DataLabels::from_spec(spec))
}

/// Scatter X values: explicit X references are numeric, otherwise the
/// categories are plotted as text.
fn x_values(kind: ChartKind, series: &SeriesSpec) -> Option<DataSource> {
    if kind != ChartKind::Scatter {
        return None;
    }
    match &series.x_values {
        Some(x) => Some(DataSource::num_ref(x)),
        None if !series.categories.is_empty() => Some(DataSource::str_ref(&series.categories)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: ChartKind, n: usize) -> ChartSpec {
        (0..n).fold(ChartSpec::new(kind), |spec, i| {
            spec.with_series(SeriesSpec::new(
                format!("Sheet1!$A${}", i + 2),
                "Sheet1!$B$1:$D$1",
                format!("Sheet1!$B${0}:$D${0}", i + 2),
            ))
        })
    }

    #[test]
    fn test_series_are_numbered_from_order() {
        let series = build_series(&spec(ChartKind::Col, 3), 4);
        let numbers: Vec<(u32, u32)> = series.iter().map(|s| (s.index, s.order)).collect();
        assert_eq!(numbers, vec![(4, 4), (5, 5), (6, 6)]);
        assert!(series.iter().all(|s| s.categories.is_some() && s.values.is_some()));
        assert!(series.iter().all(|s| s.data_labels.is_some()));
    }

    #[test]
    fn test_scatter_series_plot_xy_only() {
        let spec = ChartSpec::new(ChartKind::Scatter).with_series(SeriesSpec::xy(
            "Sheet1!$A$1",
            "Sheet1!$A$2:$A$9",
            "Sheet1!$B$2:$B$9",
        ));
        let series = &build_series(&spec, 0)[0];
        assert_eq!(series.categories, None);
        assert_eq!(series.values, None);
        assert_eq!(series.x_values, Some(DataSource::num_ref("Sheet1!$A$2:$A$9")));
        assert_eq!(series.y_values, Some(DataSource::num_ref("Sheet1!$B$2:$B$9")));
        assert_eq!(series.data_labels, None);
        let marker = series.marker.as_ref().unwrap();
        assert_eq!((marker.symbol, marker.size), (MarkerStyle::Circle, 5));
    }

    #[test]
    fn test_line_colors_stop_after_six_accents() {
        let series = build_series(&spec(ChartKind::Line, 2), 5);
        let fill = |s: &Series| s.shape_properties.as_ref().unwrap().line.as_ref().unwrap().fill;
        assert_eq!(
            fill(&series[0]),
            Some(Fill::Solid(ColorRef::new(SchemeColor::Accent(6))))
        );
        assert_eq!(fill(&series[1]), None);
        let width = series[0].shape_properties.as_ref().unwrap().line.as_ref().unwrap().width;
        assert_eq!(width, DEFAULT_LINE_WIDTH_EMU);
    }

    #[test]
    fn test_bubble_series_have_sizes() {
        let series = build_series(&spec(ChartKind::Bubble3D, 1), 0);
        assert!(series[0].bubble_3d);
        assert!(series[0].bubble_sizes.is_some());
        assert!(series[0].x_values.is_none());
        assert!(series[0].categories.is_none());
    }

    #[test]
    fn test_pie_slices_get_data_points() {
        let series = build_series(&spec(ChartKind::Pie3D, 1), 0);
        assert_eq!(series[0].data_points.len(), 1);
        assert!(build_series(&spec(ChartKind::Doughnut, 1), 0)[0]
            .data_points
            .is_empty());
    }
}
