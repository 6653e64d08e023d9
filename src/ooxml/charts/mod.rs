//! Chart part compiler.
//!
//! This module turns declarative chart configurations into SpreadsheetML
//! chart parts (`xl/charts/chartN.xml`). It includes:
//!
//! - Chart kinds and the per-kind lookup tables
//! - The [`ChartSpec`] configuration model, buildable in code or from JSON
//! - Plot-area builders and the combo-chart merger
//! - Series, axis and legend models
//! - The chart-space XML writer
//!
//! # Example
//!
//! ```
//! use xlchart::ooxml::charts::{ChartKind, ChartSpace, ChartSpec, SeriesSpec};
//!
//! let columns = ChartSpec::new(ChartKind::Col)
//!     .with_title("Fruit")
//!     .with_series(SeriesSpec::new("Sheet1!$A$2", "Sheet1!$B$1:$D$1", "Sheet1!$B$2:$D$2"));
//! let line = ChartSpec::new(ChartKind::Line)
//!     .with_series(SeriesSpec::new("Sheet1!$A$3", "Sheet1!$B$1:$D$1", "Sheet1!$B$3:$D$3"));
//!
//! let space = ChartSpace::compile(&columns, &[line]).unwrap();
//! let xml = String::from_utf8(space.to_xml().unwrap()).unwrap();
//! assert!(xml.contains("<c:barChart>") && xml.contains("<c:lineChart>"));
//! ```

pub mod axis;
pub mod builder;
pub mod chart;
pub mod legend;
pub mod models;
pub mod plot_area;
pub mod series;
pub mod spec;
pub mod types;
pub mod writer;

pub use axis::{Axis, AxisCommon, CategoryAxis, SeriesAxis, ValueAxis};
pub use builder::{build, build_combined};
pub use chart::{Chart, ChartSpace, PageMargins, WallFloor};
pub use legend::Legend;
pub use models::{DataSource, NumberFormat, ShapeProperties, Title};
pub use plot_area::{PlotAreaFragment, TypeGroup};
pub use series::{DataLabels, DataPoint, Marker, Series};
pub use spec::{
    AnchorFormat, AxisSpec, ChartSpec, Dimension, EditAs, LegendSpec, PictureFormat,
    PlotAreaLabels, SeriesSpec, TitleSpec,
};
pub use types::{ChartElement, ChartFamily, ChartKind, LegendPosition, View3D};
pub use writer::write_chart_space;
