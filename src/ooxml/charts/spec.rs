//! Chart configuration.
//!
//! A [`ChartSpec`] describes one chart: its kind, series, axes, legend and
//! where the chart sits on the sheet. It is built in code or parsed from JSON,
//! consumed once by the compiler and never retained.
//!
//! ```
//! use xlchart::ooxml::charts::{ChartKind, ChartSpec};
//!
//! let spec = ChartSpec::from_json(r#"{
//!     "type": "col",
//!     "series": [{"name": "Sheet1!$A$2", "categories": "Sheet1!$B$1:$D$1", "values": "Sheet1!$B$2:$D$2"}],
//!     "title": {"name": "Fruit"},
//!     "y_axis": {"minimum": 0}
//! }"#).unwrap();
//! assert_eq!(spec.kind, ChartKind::Col);
//! assert_eq!(spec.dimension.width, 480);
//! assert_eq!(spec.y_axis.minimum, Some(0.0));
//! ```

use crate::common::coordinates::{MAX_COLUMNS, MAX_ROWS};
use crate::ooxml::charts::types::{ChartKind, DisplayBlanks, LegendPosition, MarkerStyle};
use crate::ooxml::drawings::geometry::{DEFAULT_COLUMN_WIDTH_PX, DEFAULT_ROW_HEIGHT_PX};
use crate::ooxml::error::{OoxmlError, Result};
use serde::{Deserialize, Serialize};

/// One chart's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub format: AnchorFormat,
    #[serde(default)]
    pub dimension: Dimension,
    #[serde(default)]
    pub legend: LegendSpec,
    #[serde(default)]
    pub title: TitleSpec,
    #[serde(default, rename = "plotarea")]
    pub plot_area: PlotAreaLabels,
    #[serde(default)]
    pub x_axis: AxisSpec,
    #[serde(default)]
    pub y_axis: AxisSpec,
    #[serde(default)]
    pub show_blanks_as: DisplayBlanks,
}

impl ChartSpec {
    /// Create a chart of the given kind with default options and no series.
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            series: Vec::new(),
            format: AnchorFormat::default(),
            dimension: Dimension::default(),
            legend: LegendSpec::default(),
            title: TitleSpec::default(),
            plot_area: PlotAreaLabels::default(),
            x_axis: AxisSpec::default(),
            y_axis: AxisSpec::default(),
            show_blanks_as: DisplayBlanks::default(),
        }
    }

    /// Parse and validate a JSON chart configuration.
    ///
    /// An unknown `type` is reported as [`OoxmlError::UnsupportedChartKind`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(kind) = value.get("type").and_then(serde_json::Value::as_str) {
            kind.parse::<ChartKind>()?;
        }
        let spec: Self = serde_json::from_value(value)?;
        spec.validate()?;
        Ok(spec)
    }

    #[inline]
    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    #[inline]
    pub fn with_title(mut self, name: impl Into<String>) -> Self {
        self.title.name = name.into();
        self
    }

    #[inline]
    pub fn with_dimension(mut self, width: u32, height: u32) -> Self {
        self.dimension = Dimension { width, height };
        self
    }

    #[inline]
    pub fn with_format(mut self, format: AnchorFormat) -> Self {
        self.format = format;
        self
    }

    /// Check options that cannot produce a usable chart.
    pub fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(OoxmlError::InvalidFormat(format!(
                "{} chart has no series",
                self.kind
            )));
        }
        if self.dimension.width == 0 || self.dimension.height == 0 {
            return Err(OoxmlError::InvalidFormat(format!(
                "chart dimension must be positive, got {}x{}",
                self.dimension.width, self.dimension.height
            )));
        }
        self.x_axis.validate("x_axis")?;
        self.y_axis.validate("y_axis")?;
        self.format.validate()
    }
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSpec {
    /// Reference to the series name cell
    pub name: String,
    /// Reference to the category labels
    pub categories: String,
    /// Reference to the values
    pub values: String,
    /// X values of scatter series; categories are used when absent
    pub x_values: Option<String>,
    /// Y values of scatter and bubble series; values are used when absent
    pub y_values: Option<String>,
    /// Bubble sizes; values are used when absent
    pub sizes: Option<String>,
    pub line: LineSpec,
    pub marker: Option<MarkerSpec>,
}

impl SeriesSpec {
    pub fn new(
        name: impl Into<String>,
        categories: impl Into<String>,
        values: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            categories: categories.into(),
            values: values.into(),
            ..Default::default()
        }
    }

    /// A series defined only by X and Y references.
    pub fn xy(name: impl Into<String>, x_values: impl Into<String>, y_values: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x_values: Some(x_values.into()),
            y_values: Some(y_values.into()),
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line.width = width;
        self
    }
}

/// Series line options.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSpec {
    /// Width in points; zero selects the default width
    pub width: f64,
}

/// Scatter marker options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSpec {
    pub symbol: MarkerStyle,
    pub size: u32,
}

impl Default for MarkerSpec {
    fn default() -> Self {
        Self {
            symbol: MarkerStyle::Circle,
            size: 5,
        }
    }
}

/// Axis options.
///
/// Bounds are optional: `Some(0.0)` is a real zero bound, `None` leaves the
/// bound to the application.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSpec {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub major_unit: Option<f64>,
    pub reverse_order: bool,
    #[serde(alias = "major_grid_lines")]
    pub major_gridlines: bool,
    #[serde(alias = "minor_grid_lines")]
    pub minor_gridlines: bool,
    pub tick_label_skip: Option<u32>,
}

impl AxisSpec {
    fn validate(&self, axis: &str) -> Result<()> {
        for (field, value) in [
            ("minimum", self.minimum),
            ("maximum", self.maximum),
            ("major_unit", self.major_unit),
        ] {
            if let Some(value) = value
                && !value.is_finite()
            {
                return Err(OoxmlError::InvalidFormat(format!(
                    "{}.{} must be finite, got {}",
                    axis, field, value
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.minimum, self.maximum)
            && min > max
        {
            return Err(OoxmlError::InvalidFormat(format!(
                "{} minimum {} exceeds maximum {}",
                axis, min, max
            )));
        }
        Ok(())
    }
}

/// Data label switches shared by the chart and its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotAreaLabels {
    pub show_bubble_size: bool,
    pub show_cat_name: bool,
    pub show_leader_lines: bool,
    pub show_percent: bool,
    pub show_ser_name: bool,
    pub show_val: bool,
}

/// Legend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendSpec {
    pub position: LegendPosition,
    pub show_legend_key: bool,
}

/// Chart title. An empty name means no title.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSpec {
    pub name: String,
}

/// Chart size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimension {
    fn default() -> Self {
        Self {
            width: 480,
            height: 290,
        }
    }
}

/// How an anchored object moves and resizes with the cells under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditAs {
    TwoCell,
    OneCell,
    Absolute,
}

impl EditAs {
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::TwoCell => "twoCell",
            Self::OneCell => "oneCell",
            Self::Absolute => "absolute",
        }
    }
}

/// Placement options of an anchored chart or picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorFormat {
    pub x_scale: f64,
    pub y_scale: f64,
    /// Horizontal offset from the anchor cell, in pixels
    pub x_offset: i64,
    /// Vertical offset from the anchor cell, in pixels
    pub y_offset: i64,
    /// Print the object with the sheet
    pub print_obj: bool,
    /// Lock the object with the sheet
    pub locked: bool,
    pub positioning: Option<EditAs>,
    /// Pictures only: keep the aspect ratio when resized
    pub lock_aspect_ratio: bool,
    /// Pictures only: description shown to assistive technology
    pub alt_text: String,
}

impl Default for AnchorFormat {
    fn default() -> Self {
        Self {
            x_scale: 1.0,
            y_scale: 1.0,
            x_offset: 0,
            y_offset: 0,
            print_obj: true,
            locked: false,
            positioning: None,
            lock_aspect_ratio: false,
            alt_text: String::new(),
        }
    }
}

impl AnchorFormat {
    /// Parse and validate a JSON placement configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let format: Self = serde_json::from_str(json)?;
        format.validate()?;
        Ok(format)
    }

    pub fn validate(&self) -> Result<()> {
        for (axis, scale) in [("x_scale", self.x_scale), ("y_scale", self.y_scale)] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(OoxmlError::InvalidFormat(format!(
                    "{} must be a positive number, got {}",
                    axis, scale
                )));
            }
        }
        if self.x_offset < 0 || self.y_offset < 0 {
            return Err(OoxmlError::InvalidFormat(format!(
                "offsets must not be negative, got ({}, {})",
                self.x_offset, self.y_offset
            )));
        }
        if self.x_offset > MAX_X_OFFSET_PX || self.y_offset > MAX_Y_OFFSET_PX {
            return Err(OoxmlError::InvalidFormat(format!(
                "offsets must stay within the sheet ({}, {}), got ({}, {})",
                MAX_X_OFFSET_PX, MAX_Y_OFFSET_PX, self.x_offset, self.y_offset
            )));
        }
        Ok(())
    }

    /// Scale a pixel size by this format's scale factors.
    pub fn scaled(&self, width: u32, height: u32) -> (i64, i64) {
        (
            (f64::from(width) * self.x_scale) as i64,
            (f64::from(height) * self.y_scale) as i64,
        )
    }
}

/// Widest offset a format may carry: every column at the default width.
const MAX_X_OFFSET_PX: i64 = MAX_COLUMNS as i64 * DEFAULT_COLUMN_WIDTH_PX;
/// Tallest offset a format may carry: every row at the default height.
const MAX_Y_OFFSET_PX: i64 = MAX_ROWS as i64 * DEFAULT_ROW_HEIGHT_PX;

/// Placement options of a picture.
pub type PictureFormat = AnchorFormat;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_defaults() {
        let spec = ChartSpec::from_json(
            r#"{"type":"line","series":[{"name":"A","categories":"B","values":"C"}]}"#,
        )
        .unwrap();
        assert_eq!(spec.dimension, Dimension::default());
        assert_eq!(spec.legend.position, LegendPosition::Bottom);
        assert_eq!(spec.show_blanks_as, DisplayBlanks::Gap);
        assert!(spec.format.print_obj);
        assert!(!spec.format.locked);
        assert_eq!(spec.format.x_scale, 1.0);
        assert_eq!(spec.x_axis.minimum, None);
    }

    #[test]
    fn test_json_options() {
        let spec = ChartSpec::from_json(
            r#"{
                "type": "bar",
                "series": [{"name": "A", "values": "C", "line": {"width": 1.5}}],
                "format": {"x_scale": 2.0, "positioning": "oneCell", "print_obj": false},
                "legend": {"position": "top_right", "show_legend_key": true},
                "plotarea": {"show_val": true},
                "x_axis": {"reverse_order": true, "major_grid_lines": true, "tick_label_skip": 2},
                "show_blanks_as": "zero"
            }"#,
        )
        .unwrap();
        assert_eq!(spec.format.positioning, Some(EditAs::OneCell));
        assert!(!spec.format.print_obj);
        assert_eq!(spec.legend.position, LegendPosition::TopRight);
        assert!(spec.plot_area.show_val);
        assert!(spec.x_axis.major_gridlines);
        assert_eq!(spec.x_axis.tick_label_skip, Some(2));
        assert_eq!(spec.series[0].line.width, 1.5);
        assert_eq!(spec.show_blanks_as, DisplayBlanks::Zero);
    }

    #[test]
    fn test_invalid_configurations() {
        assert!(matches!(
            ChartSpec::from_json(r#"{"type":"donut","series":[]}"#),
            Err(OoxmlError::UnsupportedChartKind(_))
        ));
        assert!(matches!(
            ChartSpec::from_json(r#"{"series":[]}"#),
            Err(OoxmlError::Json(_))
        ));
        assert!(matches!(
            ChartSpec::from_json(r#"{"type":"pie"}"#),
            Err(OoxmlError::InvalidFormat(_))
        ));
        assert!(matches!(
            ChartSpec::from_json(
                r#"{"type":"pie","series":[{"values":"A"}],"dimension":{"width":0,"height":10}}"#
            ),
            Err(OoxmlError::InvalidFormat(_))
        ));
        assert!(matches!(
            AnchorFormat::from_json(r#"{"y_scale": -1}"#),
            Err(OoxmlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_offsets_bounded_by_sheet() {
        let edge = AnchorFormat {
            x_offset: 16384 * 64,
            y_offset: 1_048_576 * 20,
            ..Default::default()
        };
        assert!(edge.validate().is_ok());
        for format in [
            AnchorFormat { x_offset: 16384 * 64 + 1, ..Default::default() },
            AnchorFormat { y_offset: i64::MAX, ..Default::default() },
        ] {
            assert!(matches!(format.validate(), Err(OoxmlError::InvalidFormat(_))));
        }
    }

    #[test]
    fn test_axis_bounds_must_be_finite_and_ordered() {
        let series = SeriesSpec::new("A", "B", "C");
        let mut spec = ChartSpec::new(ChartKind::Line).with_series(series);
        spec.y_axis.minimum = Some(0.0);
        spec.y_axis.maximum = Some(0.0);
        assert!(spec.validate().is_ok());

        spec.y_axis.minimum = Some(f64::NAN);
        assert!(matches!(spec.validate(), Err(OoxmlError::InvalidFormat(_))));
        spec.y_axis.minimum = Some(5.0);
        assert!(matches!(spec.validate(), Err(OoxmlError::InvalidFormat(_))));
        spec.y_axis.minimum = None;
        spec.x_axis.major_unit = Some(f64::INFINITY);
        assert!(matches!(spec.validate(), Err(OoxmlError::InvalidFormat(_))));
    }

    #[test]
    fn test_scaled_size() {
        let format = AnchorFormat {
            x_scale: 0.5,
            y_scale: 2.0,
            ..Default::default()
        };
        assert_eq!(format.scaled(480, 290), (240, 580));
    }
}
