//! Main chart structure.
//!
//! A [`ChartSpace`] is the root of a chart part: the chart itself (title,
//! 3-D view, walls, plot area, legend) plus the chart-space border and print
//! settings. [`ChartSpace::compile`] produces one from a primary chart and its
//! combo overlays.

use crate::ooxml::charts::builder::build_combined;
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::{ColorRef, Fill, LineProperties, SchemeColor, ShapeProperties, Title};
use crate::ooxml::charts::plot_area::PlotAreaFragment;
use crate::ooxml::charts::spec::ChartSpec;
use crate::ooxml::charts::types::{DisplayBlanks, View3D};
use crate::ooxml::error::Result;
use tracing::debug;

/// Wall or floor formatting in 3D charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallFloor {
    /// Thickness in percent of the plot
    pub thickness: u32,
}

/// Page margins of the printed chart, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub header: f64,
    pub footer: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            bottom: 0.75,
            left: 0.7,
            right: 0.7,
            top: 0.7,
            header: 0.3,
            footer: 0.3,
        }
    }
}

/// The chart element of a chart space.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Chart title
    pub title: Option<Title>,
    /// Whether auto-generated title has been deleted
    pub auto_title_deleted: bool,
    /// 3D view settings
    pub view_3d: View3D,
    pub floor: WallFloor,
    pub side_wall: WallFloor,
    pub back_wall: WallFloor,
    /// Plot area with series and axes
    pub plot_area: PlotAreaFragment,
    /// Chart legend
    pub legend: Option<Legend>,
    /// Plot only visible cells
    pub plot_visible_only: bool,
    /// How to display blank values
    pub display_blanks_as: DisplayBlanks,
    pub show_data_labels_over_max: bool,
}

/// Root of a chart part (`c:chartSpace`).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpace {
    /// Use 1904 date system
    pub date_1904: bool,
    /// Editing language
    pub lang: &'static str,
    pub rounded_corners: bool,
    pub chart: Chart,
    /// Chart-area fill and border
    pub shape_properties: ShapeProperties,
    pub page_margins: PageMargins,
}

impl ChartSpace {
    /// Compile a chart and its combo overlays into a chart space.
    ///
    /// Chart-level options (title, 3-D view, legend, blanks) come from the
    /// primary chart; overlays only contribute their plot-area content.
    pub fn compile(primary: &ChartSpec, overlays: &[ChartSpec]) -> Result<Self> {
        primary.validate()?;
        for overlay in overlays {
            overlay.validate()?;
        }
        let plot_area = build_combined(primary, overlays)?;
        debug!(
            kind = %primary.kind,
            overlays = overlays.len(),
            series = plot_area.series_count(),
            "chart compiled"
        );

        let title = (!primary.title.name.is_empty()).then(|| Title::new(&primary.title.name));
        Ok(Self {
            date_1904: false,
            lang: "en-US",
            rounded_corners: false,
            chart: Chart {
                auto_title_deleted: title.is_none(),
                title,
                view_3d: primary.kind.view_3d(),
                floor: WallFloor::default(),
                side_wall: WallFloor::default(),
                back_wall: WallFloor::default(),
                plot_area,
                legend: Legend::from_spec(&primary.legend),
                plot_visible_only: false,
                display_blanks_as: primary.show_blanks_as,
                show_data_labels_over_max: false,
            },
            shape_properties: ShapeProperties {
                fill: Some(Fill::Solid(ColorRef::new(SchemeColor::Background1))),
                line: Some(LineProperties::hairline()),
                shape_3d: None,
            },
            page_margins: PageMargins::default(),
        })
    }

    /// Serialize this chart space to a chart part.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = Vec::with_capacity(8192);
        crate::ooxml::charts::writer::write_chart_space(&mut xml, self)?;
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::spec::SeriesSpec;
    use crate::ooxml::charts::types::{ChartKind, LegendPosition};
    use crate::ooxml::error::OoxmlError;

    fn spec(kind: ChartKind) -> ChartSpec {
        ChartSpec::new(kind).with_series(SeriesSpec::new(
            "Sheet1!$A$2",
            "Sheet1!$B$1:$D$1",
            "Sheet1!$B$2:$D$2",
        ))
    }

    #[test]
    fn test_chart_level_options_follow_primary() {
        let mut primary = spec(ChartKind::Pie3D).with_title("Share");
        primary.legend.position = LegendPosition::Right;
        primary.show_blanks_as = DisplayBlanks::Span;
        let space = ChartSpace::compile(&primary, &[]).unwrap();
        assert_eq!(space.chart.title.as_ref().map(|t| t.text.as_str()), Some("Share"));
        assert!(!space.chart.auto_title_deleted);
        assert_eq!(space.chart.view_3d, View3D::new(30, 0, 0, 30));
        assert_eq!(space.chart.legend, Some(Legend::new(LegendPosition::Right)));
        assert_eq!(space.chart.display_blanks_as, DisplayBlanks::Span);
    }

    #[test]
    fn test_untitled_chart_deletes_auto_title() {
        let space = ChartSpace::compile(&spec(ChartKind::Col), &[]).unwrap();
        assert!(space.chart.title.is_none());
        assert!(space.chart.auto_title_deleted);
    }

    #[test]
    fn test_compile_validates_every_chart() {
        let empty = ChartSpec::new(ChartKind::Line);
        assert!(matches!(
            ChartSpace::compile(&spec(ChartKind::Col), &[empty]),
            Err(OoxmlError::InvalidFormat(_))
        ));
    }
}
