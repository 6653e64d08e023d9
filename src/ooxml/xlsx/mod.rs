//! SpreadsheetML (.xlsx) chart placement.
//!
//! The workbook layer that connects chart parts, drawing parts and sheet
//! relationships inside a package.

pub mod chart;

pub use chart::{ChartWorkbook, Picture, PlacedObject, SheetDrawing, SheetKind};
