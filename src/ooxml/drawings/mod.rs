//! SpreadsheetDrawing (`xdr`) support.
//!
//! A drawing part places charts and pictures on a worksheet or chart sheet.
//! This module provides:
//!
//! - The drawing document model in its decoded and editable shapes
//! - The part reader and writer
//! - Grid geometry for converting pixel sizes to cell anchors
//! - The anchor manager that appends and deletes anchors
//! - The store that keeps edited drawing documents resident

pub mod anchor;
pub mod blip;
pub mod geometry;
pub mod manager;
pub mod reader;
pub mod store;
pub mod writer;
pub mod xfrm;

pub use anchor::{
    AnchorPoint, CellAnchor, ClientData, DecodedAnchor, DecodedDrawing, DrawingDocument, Extent,
    NamespaceDecl, ObjectKind, Position,
};
pub use geometry::{
    AnchorGeometry, CustomMetrics, DefaultMetrics, SheetMetrics, position_object_pixels,
};
pub use manager::{add_chart_anchor, add_picture_anchor, add_sheet_chart_anchor, delete_anchors};
pub use reader::{AnchorSummary, parse_drawing};
pub use store::DrawingStore;
pub use writer::{graphic_frame_xml, picture_xml, write_drawing};
