//! Drawing XML writer.
//!
//! Serializes a [`DrawingDocument`] into a drawing part, and builds the object
//! payloads (chart graphic frames and pictures) that anchors carry.

use crate::common::xml::escape_xml;
use crate::ooxml::drawings::anchor::{AnchorPoint, CellAnchor, ClientData, DrawingDocument};
use crate::ooxml::drawings::blip::{write_a_blip_embed, write_a_stretch_fill_rect};
use crate::ooxml::drawings::xfrm::write_xfrm_off_ext;
use crate::ooxml::opc::constants::namespace;
use std::fmt::{self, Write as _};
use std::io::Write;

/// Serialize a drawing document to bytes.
pub fn to_xml(document: &DrawingDocument) -> std::io::Result<Vec<u8>> {
    let mut xml = Vec::with_capacity(1024 + document.anchor_count() * 1024);
    write_drawing(&mut xml, document)?;
    Ok(xml)
}

/// Write a drawing document as an `xdr:wsDr` part.
pub fn write_drawing<W: Write>(writer: &mut W, document: &DrawingDocument) -> std::io::Result<()> {
    write!(
        writer,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
    )?;
    write!(writer, "<xdr:wsDr")?;
    for ns in &document.namespaces {
        if ns.prefix.is_empty() {
            write!(writer, r#" xmlns="{}""#, escape_xml(&ns.uri))?;
        } else {
            write!(writer, r#" xmlns:{}="{}""#, ns.prefix, escape_xml(&ns.uri))?;
        }
    }
    write!(writer, ">")?;

    for anchor in &document.two_cell_anchors {
        write_anchor(writer, "xdr:twoCellAnchor", anchor, true)?;
    }
    for anchor in &document.one_cell_anchors {
        write_anchor(writer, "xdr:oneCellAnchor", anchor, false)?;
    }
    for anchor in &document.absolute_anchors {
        write_anchor(writer, "xdr:absoluteAnchor", anchor, false)?;
    }

    write!(writer, "</xdr:wsDr>")?;
    Ok(())
}

fn write_anchor<W: Write>(
    writer: &mut W,
    tag: &str,
    anchor: &CellAnchor,
    with_edit_as: bool,
) -> std::io::Result<()> {
    write!(writer, "<{}", tag)?;
    if with_edit_as {
        if let Some(edit_as) = anchor.edit_as {
            write!(writer, r#" editAs="{}""#, edit_as.xml_value())?;
        }
    }
    write!(writer, ">")?;

    if let Some(ref from) = anchor.from {
        write_marker(writer, "xdr:from", from)?;
    }
    if let Some(ref to) = anchor.to {
        write_marker(writer, "xdr:to", to)?;
    }
    if let Some(pos) = anchor.pos {
        write!(writer, r#"<xdr:pos x="{}" y="{}"/>"#, pos.x, pos.y)?;
    }
    if let Some(ext) = anchor.ext {
        write!(writer, r#"<xdr:ext cx="{}" cy="{}"/>"#, ext.cx, ext.cy)?;
    }

    writer.write_all(anchor.payload.as_bytes())?;

    if let Some(ref client_data) = anchor.client_data {
        write_client_data(writer, client_data)?;
    }

    write!(writer, "</{}>", tag)?;
    Ok(())
}

fn write_marker<W: Write>(writer: &mut W, tag: &str, point: &AnchorPoint) -> std::io::Result<()> {
    write!(
        writer,
        "<{0}><xdr:col>{1}</xdr:col><xdr:colOff>{2}</xdr:colOff><xdr:row>{3}</xdr:row><xdr:rowOff>{4}</xdr:rowOff></{0}>",
        tag, point.col, point.col_offset, point.row, point.row_offset
    )
}

fn write_client_data<W: Write>(writer: &mut W, client_data: &ClientData) -> std::io::Result<()> {
    write!(
        writer,
        r#"<xdr:clientData fLocksWithSheet="{}" fPrintsWithSheet="{}"/>"#,
        u8::from(client_data.locks_with_sheet),
        u8::from(client_data.prints_with_sheet)
    )
}

/// `xdr:graphicFrame` referencing a chart part through relationship `rId{rel_id}`.
pub fn graphic_frame_xml(frame_id: u32, rel_id: u32) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<xdr:graphicFrame macro="">"#);
    write!(
        xml,
        r#"<xdr:nvGraphicFramePr><xdr:cNvPr id="{0}" name="Chart {0}"/><xdr:cNvGraphicFramePr/></xdr:nvGraphicFramePr>"#,
        frame_id
    )?;
    write_xfrm_off_ext(&mut xml, "xdr:xfrm", 0, 0, 0, 0)?;
    write!(
        xml,
        r#"<a:graphic><a:graphicData uri="{0}"><c:chart xmlns:c="{0}" xmlns:r="{1}" r:id="rId{2}"/></a:graphicData></a:graphic>"#,
        namespace::DML_CHART,
        namespace::OFC_RELATIONSHIPS,
        rel_id
    )?;
    xml.push_str("</xdr:graphicFrame>");
    Ok(xml)
}

/// Options of a picture payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureXml<'a> {
    pub frame_id: u32,
    pub rel_id: u32,
    /// Picture size in EMU
    pub cx: i64,
    pub cy: i64,
    pub alt_text: &'a str,
    pub lock_aspect_ratio: bool,
}

/// `xdr:pic` embedding the image behind relationship `rId{rel_id}`.
pub fn picture_xml(picture: &PictureXml<'_>) -> Result<String, fmt::Error> {
    let mut xml = String::with_capacity(768);
    xml.push_str("<xdr:pic><xdr:nvPicPr>");
    write!(
        xml,
        r#"<xdr:cNvPr id="{0}" name="Picture {0}""#,
        picture.frame_id
    )?;
    if !picture.alt_text.is_empty() {
        write!(xml, r#" descr="{}""#, escape_xml(picture.alt_text))?;
    }
    xml.push_str("/>");
    write!(
        xml,
        r#"<xdr:cNvPicPr><a:picLocks noChangeAspect="{}"/></xdr:cNvPicPr></xdr:nvPicPr>"#,
        u8::from(picture.lock_aspect_ratio)
    )?;

    xml.push_str("<xdr:blipFill>");
    write_a_blip_embed(&mut xml, picture.rel_id, true)?;
    write_a_stretch_fill_rect(&mut xml);
    xml.push_str("</xdr:blipFill>");

    xml.push_str("<xdr:spPr>");
    write_xfrm_off_ext(&mut xml, "a:xfrm", 0, 0, picture.cx, picture.cy)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></xdr:spPr></xdr:pic>"#);
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::spec::EditAs;
    use crate::ooxml::drawings::anchor::{Extent, ObjectKind, Position};

    fn render(document: &DrawingDocument) -> String {
        String::from_utf8(to_xml(document).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_drawing() {
        assert_eq!(
            render(&DrawingDocument::new()),
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<xdr:wsDr xmlns:xdr="http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing" "#,
                r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"></xdr:wsDr>"#
            )
        );
    }

    #[test]
    fn test_two_cell_chart_anchor() {
        let mut document = DrawingDocument::new();
        let frame = graphic_frame_xml(2, 1).unwrap();
        document.two_cell_anchors.push(
            CellAnchor::new(ObjectKind::Chart, frame)
                .with_edit_as(Some(EditAs::OneCell))
                .with_cells(AnchorPoint::new(3, 0, 5, 9525), AnchorPoint::new(10, 95250, 20, 0))
                .with_client_data(ClientData {
                    locks_with_sheet: false,
                    prints_with_sheet: true,
                }),
        );
        let xml = render(&document);
        assert!(xml.contains(concat!(
            r#"<xdr:twoCellAnchor editAs="oneCell"><xdr:from><xdr:col>3</xdr:col><xdr:colOff>0</xdr:colOff>"#,
            r#"<xdr:row>5</xdr:row><xdr:rowOff>9525</xdr:rowOff></xdr:from>"#
        )));
        assert!(xml.contains(r#"<xdr:cNvPr id="2" name="Chart 2"/>"#));
        assert!(xml.contains(r#"r:id="rId1"/></a:graphicData>"#));
        assert!(xml.contains(
            r#"<xdr:clientData fLocksWithSheet="0" fPrintsWithSheet="1"/></xdr:twoCellAnchor>"#
        ));
    }

    #[test]
    fn test_absolute_anchor_has_no_edit_as() {
        let mut document = DrawingDocument::new();
        document.absolute_anchors.push(
            CellAnchor::new(ObjectKind::Chart, graphic_frame_xml(2, 1).unwrap())
                .with_edit_as(Some(EditAs::Absolute))
                .with_position(Position::default(), Extent::default()),
        );
        let xml = render(&document);
        assert!(xml.contains(
            r#"<xdr:absoluteAnchor><xdr:pos x="0" y="0"/><xdr:ext cx="0" cy="0"/><xdr:graphicFrame"#
        ));
    }

    #[test]
    fn test_picture_payload() {
        let xml = picture_xml(&PictureXml {
            frame_id: 3,
            rel_id: 2,
            cx: 952500,
            cy: 476250,
            alt_text: "Logo \"v2\"",
            lock_aspect_ratio: true,
        })
        .unwrap();
        assert!(xml.starts_with(r#"<xdr:pic><xdr:nvPicPr><xdr:cNvPr id="3" name="Picture 3" descr="Logo &quot;v2&quot;"/>"#));
        assert!(xml.contains(r#"<a:picLocks noChangeAspect="1"/>"#));
        assert!(xml.contains(r#"<a:ext cx="952500" cy="476250"/>"#));
        assert!(xml.contains(r#"r:embed="rId2"/>"#));
    }
}
