//! Common utilities shared by the chart and drawing modules.

pub mod coordinates;
pub mod unit;
pub mod xml;

pub use coordinates::{CellRef, cell_name_to_coordinates};
