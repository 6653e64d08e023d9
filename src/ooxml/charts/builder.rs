//! Plot-area builders.
//!
//! [`build`] compiles one [`ChartSpec`] into a [`PlotAreaFragment`] holding
//! exactly one chart-element slot plus the axes that element is plotted on.
//! [`build_combined`] builds a primary chart and its overlays and merges them
//! into one plot area.

use crate::ooxml::charts::axis::{
    CATEGORY_AXIS_ID, SERIES_AXIS_ID, VALUE_AXIS_ID, category_axis, series_axis, value_axis,
};
use crate::ooxml::charts::plot_area::{PlotAreaFragment, TypeGroup};
use crate::ooxml::charts::series::{DataLabels, build_series};
use crate::ooxml::charts::spec::ChartSpec;
use crate::ooxml::charts::types::{ChartFamily, RadarStyle, ScatterStyle};
use crate::ooxml::error::{OoxmlError, Result};
use smallvec::smallvec;
use tracing::debug;

/// Doughnut hole size in percent.
pub const DOUGHNUT_HOLE_SIZE: u8 = 75;

/// Build the plot-area fragment of one chart whose first series is numbered
/// `order`.
pub fn build(spec: &ChartSpec, order: u32) -> Result<PlotAreaFragment> {
    let kind = spec.kind;
    let mut fragment = PlotAreaFragment::new();
    let mut group = TypeGroup::new(kind.element());
    group.series = build_series(spec, order);

    match kind.family() {
        ChartFamily::Cartesian => {
            group.bar_direction = kind.bar_direction();
            group.grouping = kind.grouping();
            group.vary_colors = Some(true);
            group.data_labels = Some(DataLabels::from_spec(spec));
            group.overlap = kind.overlap();
            group.shape = kind.shape();
            plot_on_axes(&mut fragment, &mut group, spec);
        },
        ChartFamily::Doughnut => {
            group.vary_colors = Some(true);
            group.hole_size = Some(DOUGHNUT_HOLE_SIZE);
        },
        ChartFamily::Line => {
            group.grouping = kind.grouping();
            group.vary_colors = Some(false);
            group.data_labels = Some(DataLabels::from_spec(spec));
            group.smooth = Some(false);
            plot_on_axes(&mut fragment, &mut group, spec);
        },
        ChartFamily::Pie | ChartFamily::Pie3D => {
            group.vary_colors = Some(true);
        },
        ChartFamily::OfPie(of_pie_type) => {
            group.of_pie_type = Some(of_pie_type);
            group.vary_colors = Some(true);
            group.series_lines = true;
        },
        ChartFamily::Radar => {
            group.radar_style = Some(RadarStyle::Marker);
            group.vary_colors = Some(false);
            group.data_labels = Some(DataLabels::from_spec(spec));
            plot_on_axes(&mut fragment, &mut group, spec);
        },
        ChartFamily::Scatter => {
            group.scatter_style = Some(ScatterStyle::SmoothMarker);
            group.vary_colors = Some(false);
            group.data_labels = Some(DataLabels::from_spec(spec));
            plot_on_axes(&mut fragment, &mut group, spec);
        },
        ChartFamily::Surface => {
            if kind.is_wireframe() {
                group.wireframe = Some(true);
            }
            plot_on_axes(&mut fragment, &mut group, spec);
            group.axis_ids.push(SERIES_AXIS_ID);
            fragment.series_axis = Some(series_axis(spec));
        },
    }

    debug!(
        kind = %kind,
        element = %group.element,
        order,
        series = group.series.len(),
        "plot area built"
    );
    fragment.set_group(group)?;
    Ok(fragment)
}

fn plot_on_axes(fragment: &mut PlotAreaFragment, group: &mut TypeGroup, spec: &ChartSpec) {
    group.axis_ids = smallvec![CATEGORY_AXIS_ID, VALUE_AXIS_ID];
    fragment.category_axis = Some(category_axis(spec));
    fragment.value_axis = Some(value_axis(spec));
}

/// Build a primary chart and its overlays into one plot area.
///
/// Each overlay's series are numbered after every series before it, so series
/// indexes stay unique and contiguous across the merged plot area.
pub fn build_combined(primary: &ChartSpec, overlays: &[ChartSpec]) -> Result<PlotAreaFragment> {
    if let Some(overlay) = overlays.iter().find(|overlay| !overlay.kind.is_combinable()) {
        return Err(OoxmlError::InvalidComboChart(format!(
            "{} chart cannot be combined with {}",
            overlay.kind, primary.kind
        )));
    }

    let mut merged = build(primary, 0)?;
    let mut order = primary.series.len() as u32;
    for overlay in overlays {
        merged.merge_from(build(overlay, order)?)?;
        order += overlay.series.len() as u32;
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::spec::SeriesSpec;
    use crate::ooxml::charts::types::{
        BarDirection, BarShape, ChartElement, ChartKind, Grouping, OfPieType,
    };

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
    fn test_every_kind_fills_one_slot() {
        for kind in ChartKind::ALL {
            let fragment = build(&spec(kind, 1), 0).unwrap();
            let groups: Vec<&TypeGroup> = fragment.groups().collect();
            assert_eq!(groups.len(), 1, "{}", kind);
            assert_eq!(groups[0].element, kind.element(), "{}", kind);
        }
    }

    #[test]
    fn test_stacked_column_tables() {
        let fragment = build(&spec(ChartKind::ColStacked, 2), 0).unwrap();
        let group = fragment.group(ChartElement::Bar).unwrap();
        assert_eq!(group.bar_direction, Some(BarDirection::Column));
        assert_eq!(group.grouping, Some(Grouping::Stacked));
        assert_eq!(group.overlap, Some(100));
        assert_eq!(group.shape, None);
        assert_eq!(group.axis_ids.as_slice(), &[CATEGORY_AXIS_ID, VALUE_AXIS_ID]);
        assert!(fragment.category_axis.is_some());
        assert!(fragment.series_axis.is_none());
    }

    #[test]
    fn test_cone_bar_uses_3d_slot() {
        let fragment = build(&spec(ChartKind::Bar3DConeClustered, 1), 0).unwrap();
        let group = fragment.group(ChartElement::Bar3D).unwrap();
        assert_eq!(group.bar_direction, Some(BarDirection::Bar));
        assert_eq!(group.shape, Some(BarShape::Cone));
        assert_eq!(group.overlap, None);
    }

    #[test]
    fn test_round_charts_have_no_axes() {
        let doughnut = build(&spec(ChartKind::Doughnut, 1), 0).unwrap();
        let group = doughnut.group(ChartElement::Doughnut).unwrap();
        assert_eq!(group.hole_size, Some(DOUGHNUT_HOLE_SIZE));
        assert_eq!(group.data_labels, None);
        assert!(group.axis_ids.is_empty());
        assert!(doughnut.category_axis.is_none() && doughnut.value_axis.is_none());

        let bar_of_pie = build(&spec(ChartKind::BarOfPie, 1), 0).unwrap();
        let group = bar_of_pie.group(ChartElement::OfPie).unwrap();
        assert_eq!(group.of_pie_type, Some(OfPieType::Bar));
        assert!(group.series_lines);
    }

    #[test]
    fn test_surface_charts_get_series_axis() {
        let fragment = build(&spec(ChartKind::WireframeContour, 1), 0).unwrap();
        let group = fragment.group(ChartElement::Surface).unwrap();
        assert_eq!(group.wireframe, Some(true));
        assert_eq!(group.vary_colors, None);
        assert_eq!(
            group.axis_ids.as_slice(),
            &[CATEGORY_AXIS_ID, VALUE_AXIS_ID, SERIES_AXIS_ID]
        );
        assert!(fragment.series_axis.is_some());

        let solid = build(&spec(ChartKind::Surface3D, 1), 0).unwrap();
        assert_eq!(solid.group(ChartElement::Surface3D).unwrap().wireframe, None);
    }

    #[test]
    fn test_line_group_settings() {
        let fragment = build(&spec(ChartKind::Line, 1), 0).unwrap();
        let group = fragment.group(ChartElement::Line).unwrap();
        assert_eq!(group.grouping, Some(Grouping::Standard));
        assert_eq!(group.vary_colors, Some(false));
        assert_eq!(group.smooth, Some(false));
    }

    #[test]
    fn test_combo_series_orders_are_contiguous() {
        let merged = build_combined(
            &spec(ChartKind::Col, 2),
            &[spec(ChartKind::Line, 3), spec(ChartKind::Area, 1)],
        )
        .unwrap();
        assert_eq!(merged.series_count(), 6);
        let mut orders: Vec<u32> = merged
            .groups()
            .flat_map(|group| group.series.iter().map(|s| s.order))
            .collect();
        orders.sort_unstable();
        assert_eq!(orders, (0..6).collect::<Vec<u32>>());
        let line = merged.group(ChartElement::Line).unwrap();
        assert_eq!(line.series[0].index, 2);
    }

    #[test]
    fn test_combo_rejects_round_overlays() {
        assert!(matches!(
            build_combined(&spec(ChartKind::Col, 1), &[spec(ChartKind::Pie, 1)]),
            Err(OoxmlError::InvalidComboChart(_))
        ));
        assert!(matches!(
            build_combined(&spec(ChartKind::Col, 1), &[spec(ChartKind::ColStacked, 1)]),
            Err(OoxmlError::ComboCollision { slot: "barChart" })
        ));
    }
}
