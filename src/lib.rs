//! xlchart - Chart parts and drawing anchors for SpreadsheetML packages
//!
//! This library compiles declarative chart configurations into Office Open XML
//! chart parts and manages the drawing parts that place charts and pictures on
//! worksheets and chart sheets.
//!
//! # Features
//!
//! - **Chart compiler**: 54 chart kinds, combo charts merged into one plot area
//! - **Drawing registry**: two-cell and absolute anchors, incremental edits of
//!   drawing parts decoded from an existing package
//! - **Derived IDs**: chart, drawing, relationship and frame IDs recomputed from
//!   the package on every allocation
//! - **JSON configuration**: chart and picture options deserialized with serde
//!
//! # Example - Adding a combo chart
//!
//! ```
//! use xlchart::ooxml::charts::{ChartKind, ChartSpec, SeriesSpec};
//! use xlchart::ooxml::opc::Package;
//! use xlchart::ooxml::xlsx::ChartWorkbook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut book = ChartWorkbook::new(Package::new());
//! book.add_worksheet("Sheet1")?;
//!
//! let columns = ChartSpec::from_json(r#"{
//!     "type": "col",
//!     "series": [{"name": "Sheet1!$A$2", "categories": "Sheet1!$B$1:$D$1", "values": "Sheet1!$B$2:$D$2"}],
//!     "title": {"name": "Fruit"}
//! }"#)?;
//! let line = ChartSpec::new(ChartKind::Line)
//!     .with_series(SeriesSpec::new("Sheet1!$A$3", "Sheet1!$B$1:$D$1", "Sheet1!$B$3:$D$3"));
//!
//! let placed = book.add_chart("Sheet1", "E1", &columns, &[line])?;
//! println!("chart written to {}", placed.part);
//! book.save_drawings()?;
//! # Ok(())
//! # }
//! ```

/// Cell coordinates, unit conversions and XML text helpers
pub mod common;

/// OOXML chart, drawing and package parts
pub mod ooxml;

/// Opt-in tracing subscriber setup
pub mod telemetry;

pub use ooxml::charts::{ChartKind, ChartSpace, ChartSpec, SeriesSpec};
pub use ooxml::error::{OoxmlError, Result};
pub use ooxml::xlsx::ChartWorkbook;
pub use telemetry::init_default_tracing;
