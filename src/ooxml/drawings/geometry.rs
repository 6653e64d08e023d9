//! Object placement on the cell grid.
//!
//! Converts an object's anchor cell, pixel offsets and pixel size into the
//! start and end cells of a two-cell anchor.

use crate::common::coordinates::{MAX_COLUMNS, MAX_ROWS};
use crate::common::unit::px_to_emu;
use crate::ooxml::drawings::anchor::AnchorPoint;
use std::collections::HashMap;

/// Default column width in pixels.
pub const DEFAULT_COLUMN_WIDTH_PX: i64 = 64;
/// Default row height in pixels.
pub const DEFAULT_ROW_HEIGHT_PX: i64 = 20;

/// Column widths and row heights of a sheet, in pixels. Indexes are zero-based.
pub trait SheetMetrics {
    fn column_width_px(&self, col: u32) -> i64;
    fn row_height_px(&self, row: u32) -> i64;
}

/// Every column and row at the default size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultMetrics;

impl SheetMetrics for DefaultMetrics {
    #[inline]
    fn column_width_px(&self, _col: u32) -> i64 {
        DEFAULT_COLUMN_WIDTH_PX
    }

    #[inline]
    fn row_height_px(&self, _row: u32) -> i64 {
        DEFAULT_ROW_HEIGHT_PX
    }
}

/// Default sizes with per-column and per-row overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomMetrics {
    columns: HashMap<u32, i64>,
    rows: HashMap<u32, i64>,
}

impl CustomMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_column_width(mut self, col: u32, px: i64) -> Self {
        self.columns.insert(col, px.max(0));
        self
    }

    #[inline]
    pub fn with_row_height(mut self, row: u32, px: i64) -> Self {
        self.rows.insert(row, px.max(0));
        self
    }
}

impl SheetMetrics for CustomMetrics {
    fn column_width_px(&self, col: u32) -> i64 {
        self.columns.get(&col).copied().unwrap_or(DEFAULT_COLUMN_WIDTH_PX)
    }

    fn row_height_px(&self, row: u32) -> i64 {
        self.rows.get(&row).copied().unwrap_or(DEFAULT_ROW_HEIGHT_PX)
    }
}

/// Placement of an object on the cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorGeometry {
    pub col_start: u32,
    pub row_start: u32,
    /// Offset into the start column, in pixels
    pub x1: i64,
    /// Offset into the start row, in pixels
    pub y1: i64,
    /// Absolute position of the top-left corner, in pixels
    pub x_abs: i64,
    pub y_abs: i64,
    pub col_end: u32,
    pub row_end: u32,
    /// Offset into the end column, in pixels
    pub x2: i64,
    /// Offset into the end row, in pixels
    pub y2: i64,
}

impl AnchorGeometry {
    /// `xdr:from` marker in EMU.
    #[inline]
    pub fn from_point(&self) -> AnchorPoint {
        AnchorPoint::new(self.col_start, px_to_emu(self.x1), self.row_start, px_to_emu(self.y1))
    }

    /// `xdr:to` marker in EMU.
    #[inline]
    pub fn to_point(&self) -> AnchorPoint {
        AnchorPoint::new(self.col_end, px_to_emu(self.x2), self.row_end, px_to_emu(self.y2))
    }
}

/// Walk `offset` pixels forward from `index`, returning the cell it lands in
/// and the remaining offset into that cell. Zero-sized cells are skipped.
fn advance(mut index: u32, mut offset: i64, limit: u32, size: impl Fn(u32) -> i64) -> (u32, i64) {
    while index + 1 < limit {
        let cell = size(index);
        if cell > 0 && offset < cell {
            break;
        }
        offset = offset.saturating_sub(cell);
        index += 1;
    }
    (index, offset)
}

/// Pixels covered by the cells before `index`.
fn leading_extent(index: u32, size: impl Fn(u32) -> i64) -> i64 {
    (0..index).fold(0i64, |total, i| total.saturating_add(size(i)))
}

/// Place an object of `width` x `height` pixels whose top-left corner is
/// `x_offset`/`y_offset` pixels into cell (`col`, `row`).
pub fn position_object_pixels<M: SheetMetrics + ?Sized>(
    metrics: &M,
    col: u32,
    row: u32,
    x_offset: i64,
    y_offset: i64,
    width: i64,
    height: i64,
) -> AnchorGeometry {
    let x_abs = leading_extent(col, |c| metrics.column_width_px(c)).saturating_add(x_offset);
    let y_abs = leading_extent(row, |r| metrics.row_height_px(r)).saturating_add(y_offset);

    let (col_start, x1) = advance(col, x_offset, MAX_COLUMNS, |c| metrics.column_width_px(c));
    let (row_start, y1) = advance(row, y_offset, MAX_ROWS, |r| metrics.row_height_px(r));

    let (col_end, x2) = advance(
        col_start,
        width.saturating_add(x1),
        MAX_COLUMNS,
        |c| metrics.column_width_px(c),
    );
    let (row_end, y2) = advance(
        row_start,
        height.saturating_add(y1),
        MAX_ROWS,
        |r| metrics.row_height_px(r),
    );

    AnchorGeometry {
        col_start,
        row_start,
        x1,
        y1,
        x_abs,
        y_abs,
        col_end,
        row_end,
        x2,
        y2,
    }
}
