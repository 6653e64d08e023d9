//! Office Open XML chart and drawing parts.
//!
//! # Architecture
//!
//! The module is organized into several layers:
//!
//! 1. **OPC Layer** (`opc`): part names, relationships, content types and the
//!    [`opc::PartStore`] trait the rest of the crate reads and writes through
//! 2. **Shared Utilities** (`ids`, `error`): derived ID allocation and errors
//! 3. **Chart compiler** (`charts`): chart configuration to `c:chartSpace`
//! 4. **Drawing layer** (`drawings`): anchors placing charts and pictures on
//!    a sheet
//! 5. **Workbook facade** (`xlsx`): ties the above to sheets in a package
//!
//! # Example
//!
//! ```
//! use xlchart::ooxml::charts::{ChartKind, ChartSpec, SeriesSpec};
//! use xlchart::ooxml::opc::{Package, PartStore};
//! use xlchart::ooxml::xlsx::ChartWorkbook;
//!
//! let mut book = ChartWorkbook::new(Package::new());
//! book.add_worksheet("Sheet1")?;
//!
//! let bars = ChartSpec::new(ChartKind::Bar)
//!     .with_series(SeriesSpec::new("Sheet1!$A$2", "Sheet1!$B$1:$D$1", "Sheet1!$B$2:$D$2"));
//! book.add_chart("Sheet1", "E2", &bars, &[])?;
//! book.delete_chart("Sheet1", "E2")?;
//! book.save_drawings()?;
//!
//! let drawing = book.parts().part("xl/drawings/drawing1.xml").unwrap();
//! assert!(!String::from_utf8_lossy(drawing).contains("twoCellAnchor"));
//! # Ok::<(), xlchart::ooxml::OoxmlError>(())
//! ```
pub mod charts;
pub mod drawings;
pub mod error;
pub mod ids;
pub mod opc;
pub mod xlsx;

// Re-export commonly used types from OPC layer
pub use opc::{Package, PartStore};

// Re-export error types
pub use error::{OoxmlError, Result};
