//! Anchor creation and deletion.
//!
//! Every function works on a resident [`DrawingDocument`]. Relationship IDs
//! are allocated by the caller; frame IDs are derived from the document.

use crate::common::unit::px_to_emu;
use crate::ooxml::charts::spec::AnchorFormat;
use crate::ooxml::drawings::anchor::{
    CellAnchor, ClientData, DrawingDocument, Extent, ObjectKind, Position,
};
use crate::ooxml::drawings::geometry::AnchorGeometry;
use crate::ooxml::drawings::reader::AnchorSummary;
use crate::ooxml::drawings::writer::{PictureXml, graphic_frame_xml, picture_xml};
use crate::ooxml::error::{OoxmlError, Result};
use tracing::debug;

#[inline]
fn client_data(format: &AnchorFormat) -> ClientData {
    ClientData {
        locks_with_sheet: format.locked,
        prints_with_sheet: format.print_obj,
    }
}

#[inline]
fn payload_error(err: std::fmt::Error) -> OoxmlError {
    OoxmlError::Xml(err.to_string())
}

/// Append a two-cell anchor holding a chart graphic frame. Returns its frame ID.
pub fn add_chart_anchor(
    document: &mut DrawingDocument,
    geometry: &AnchorGeometry,
    rel_id: u32,
    format: &AnchorFormat,
) -> Result<u32> {
    let frame_id = document.next_frame_id();
    let payload = graphic_frame_xml(frame_id, rel_id).map_err(payload_error)?;
    document.two_cell_anchors.push(
        CellAnchor::new(ObjectKind::Chart, payload)
            .with_edit_as(format.positioning)
            .with_cells(geometry.from_point(), geometry.to_point())
            .with_client_data(client_data(format)),
    );
    debug!(
        frame_id,
        rel_id,
        col = geometry.col_start,
        row = geometry.row_start,
        "chart anchor added"
    );
    Ok(frame_id)
}

/// Append an absolute anchor holding a chart that fills a chart sheet.
pub fn add_sheet_chart_anchor(
    document: &mut DrawingDocument,
    rel_id: u32,
    format: &AnchorFormat,
) -> Result<u32> {
    let frame_id = document.next_frame_id();
    let payload = graphic_frame_xml(frame_id, rel_id).map_err(payload_error)?;
    document.absolute_anchors.push(
        CellAnchor::new(ObjectKind::Chart, payload)
            .with_edit_as(format.positioning)
            .with_position(Position::default(), Extent::default())
            .with_client_data(client_data(format)),
    );
    debug!(frame_id, rel_id, "chart sheet anchor added");
    Ok(frame_id)
}

/// Append a two-cell anchor holding a picture of `width` x `height` pixels.
pub fn add_picture_anchor(
    document: &mut DrawingDocument,
    geometry: &AnchorGeometry,
    rel_id: u32,
    format: &AnchorFormat,
    width: i64,
    height: i64,
) -> Result<u32> {
    let frame_id = document.next_frame_id();
    let payload = picture_xml(&PictureXml {
        frame_id,
        rel_id,
        cx: px_to_emu(width),
        cy: px_to_emu(height),
        alt_text: &format.alt_text,
        lock_aspect_ratio: format.lock_aspect_ratio,
    })
    .map_err(payload_error)?;
    document.two_cell_anchors.push(
        CellAnchor::new(ObjectKind::Picture, payload)
            .with_edit_as(format.positioning)
            .with_cells(geometry.from_point(), geometry.to_point())
            .with_client_data(client_data(format)),
    );
    debug!(
        frame_id,
        rel_id,
        col = geometry.col_start,
        row = geometry.row_start,
        "picture anchor added"
    );
    Ok(frame_id)
}

/// Remove every two-cell anchor of `kind` whose top-left cell is (`col`, `row`),
/// zero-based. Returns the number of anchors removed.
///
/// Anchors decoded from a saved part are classified by parsing their payload:
/// a direct `pic` child makes a picture, anything else counts as a chart. If a
/// payload cannot be parsed nothing is removed.
pub fn delete_anchors(
    document: &mut DrawingDocument,
    part: &str,
    col: u32,
    row: u32,
    kind: ObjectKind,
) -> Result<usize> {
    let mut matches = Vec::with_capacity(document.two_cell_anchors.len());
    for anchor in &document.two_cell_anchors {
        let hit = match anchor.kind {
            Some(anchor_kind) => {
                anchor_kind == kind
                    && anchor
                        .from
                        .is_some_and(|from| from.col == col && from.row == row)
            },
            None => {
                let summary = AnchorSummary::from_payload(part, &anchor.payload)?;
                let anchor_kind = if summary.has_picture {
                    ObjectKind::Picture
                } else {
                    ObjectKind::Chart
                };
                anchor_kind == kind && summary.from == Some((col, row))
            },
        };
        matches.push(hit);
    }

    let before = document.two_cell_anchors.len();
    let mut flags = matches.into_iter();
    document
        .two_cell_anchors
        .retain(|_| !flags.next().unwrap_or(false));
    let removed = before - document.two_cell_anchors.len();
    debug!(part, col, row, ?kind, removed, "anchors deleted");
    Ok(removed)
}
