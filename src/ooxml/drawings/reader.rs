//! Drawing part reader.
//!
//! Decodes a saved `xdr:wsDr` part into a [`DecodedDrawing`] and classifies
//! decoded anchor payloads for deletion.

use crate::common::xml::unescape_xml;
use crate::ooxml::charts::spec::EditAs;
use crate::ooxml::drawings::anchor::{DecodedAnchor, DecodedDrawing, NamespaceDecl};
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

/// Decode a drawing part.
///
/// `part` names the part in errors. The bytes are expected to be transitional
/// DrawingML already; anything that is not a well-formed `wsDr` document is
/// reported as [`OoxmlError::CorruptPart`].
pub fn parse_drawing(part: &str, xml: &[u8]) -> Result<DecodedDrawing> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut drawing = DecodedDrawing::default();
    let mut root_open = false;
    let mut root_closed = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if !root_open => {
                expect_root(part, &e)?;
                drawing.namespaces = read_namespaces(part, &e)?;
                root_open = true;
            },
            Ok(Event::Empty(e)) if !root_open => {
                expect_root(part, &e)?;
                drawing.namespaces = read_namespaces(part, &e)?;
                root_open = true;
                root_closed = true;
            },
            Ok(Event::Start(e)) => {
                let local = e.local_name();
                let list = match local.as_ref() {
                    b"absoluteAnchor" => Some(&mut drawing.absolute_anchors),
                    b"oneCellAnchor" => Some(&mut drawing.one_cell_anchors),
                    b"twoCellAnchor" => Some(&mut drawing.two_cell_anchors),
                    _ => None,
                };
                let edit_as = read_edit_as(part, &e)?;
                let span = reader
                    .read_to_end(e.name())
                    .map_err(|err| OoxmlError::corrupt(part, err))?;
                match list {
                    Some(list) => {
                        let inner = slice_span(part, xml, span.start, span.end)?;
                        list.push(DecodedAnchor {
                            edit_as,
                            inner_xml: inner.to_string(),
                        });
                    },
                    None => {
                        trace!(
                            part,
                            element = %String::from_utf8_lossy(local.as_ref()),
                            "skipped drawing element"
                        );
                    },
                }
            },
            Ok(Event::Empty(e)) => {
                let edit_as = read_edit_as(part, &e)?;
                let anchor = DecodedAnchor {
                    edit_as,
                    inner_xml: String::new(),
                };
                match e.local_name().as_ref() {
                    b"absoluteAnchor" => drawing.absolute_anchors.push(anchor),
                    b"oneCellAnchor" => drawing.one_cell_anchors.push(anchor),
                    b"twoCellAnchor" => drawing.two_cell_anchors.push(anchor),
                    _ => {},
                }
            },
            Ok(Event::End(_)) => root_closed = true,
            Ok(Event::Text(_)) if !root_open => {
                return Err(OoxmlError::corrupt(part, "text outside the wsDr root"));
            },
            Ok(Event::Eof) => break,
            Err(err) => return Err(OoxmlError::corrupt(part, err)),
            _ => {},
        }
    }

    if !root_open {
        return Err(OoxmlError::corrupt(part, "missing wsDr root"));
    }
    if !root_closed {
        return Err(OoxmlError::corrupt(part, "unterminated wsDr root"));
    }
    Ok(drawing)
}

fn expect_root(part: &str, e: &BytesStart<'_>) -> Result<()> {
    if e.local_name().as_ref() == b"wsDr" {
        Ok(())
    } else {
        Err(OoxmlError::corrupt(
            part,
            format!(
                "unexpected root element {}",
                String::from_utf8_lossy(e.name().as_ref())
            ),
        ))
    }
}

fn slice_span<'a, S>(part: &str, xml: &'a [u8], start: S, end: S) -> Result<&'a str>
where
    usize: TryFrom<S>,
    <usize as TryFrom<S>>::Error: std::fmt::Display,
{
    let start = usize::try_from(start).map_err(|err| OoxmlError::corrupt(part, err))?;
    let end = usize::try_from(end).map_err(|err| OoxmlError::corrupt(part, err))?;
    let bytes = xml
        .get(start..end)
        .ok_or_else(|| OoxmlError::corrupt(part, "anchor span out of range"))?;
    std::str::from_utf8(bytes).map_err(|err| OoxmlError::corrupt(part, err))
}

fn read_namespaces(part: &str, e: &BytesStart<'_>) -> Result<Vec<NamespaceDecl>> {
    let mut namespaces = Vec::new();
    for attr in e.attributes().flatten() {
        let key = attr.key.as_ref();
        let prefix = if key == b"xmlns" {
            ""
        } else if let Some(prefix) = key.strip_prefix(b"xmlns:") {
            std::str::from_utf8(prefix).map_err(|err| OoxmlError::corrupt(part, err))?
        } else {
            continue;
        };
        let uri = std::str::from_utf8(&attr.value).map_err(|err| OoxmlError::corrupt(part, err))?;
        namespaces.push(NamespaceDecl::new(prefix, unescape_xml(uri)));
    }
    Ok(namespaces)
}

fn read_edit_as(part: &str, e: &BytesStart<'_>) -> Result<Option<EditAs>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() != b"editAs" {
            continue;
        }
        return match attr.value.as_ref() {
            b"twoCell" => Ok(Some(EditAs::TwoCell)),
            b"oneCell" => Ok(Some(EditAs::OneCell)),
            b"absolute" => Ok(Some(EditAs::Absolute)),
            other => Err(OoxmlError::corrupt(
                part,
                format!("invalid editAs value {:?}", String::from_utf8_lossy(other)),
            )),
        };
    }
    Ok(None)
}

/// What deletion needs to know about a decoded anchor's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorSummary {
    /// Zero-based `(col, row)` of the `from` marker
    pub from: Option<(u32, u32)>,
    /// Whether the anchor holds a direct `pic` child
    pub has_picture: bool,
}

impl AnchorSummary {
    /// Classify the inner XML of a two-cell anchor.
    pub fn from_payload(part: &str, payload: &str) -> Result<Self> {
        let wrapped = format!("<anchor>{}</anchor>", payload);
        let mut reader = Reader::from_reader(wrapped.as_bytes());
        reader.config_mut().trim_text(true);

        let mut summary = AnchorSummary::default();
        let mut depth = 0usize;
        let mut in_from = false;
        let mut field: Option<&'static str> = None;
        let (mut col, mut row) = (None, None);

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    match (depth, e.local_name().as_ref()) {
                        (2, b"from") => in_from = true,
                        (2, b"pic") => summary.has_picture = true,
                        (3, b"col") if in_from => field = Some("col"),
                        (3, b"row") if in_from => field = Some("row"),
                        _ => {},
                    }
                },
                Ok(Event::Empty(e)) => {
                    if depth == 1 && e.local_name().as_ref() == b"pic" {
                        summary.has_picture = true;
                    }
                },
                Ok(Event::Text(e)) => {
                    if let Some(name) = field {
                        let text = std::str::from_utf8(e.as_ref())
                            .map_err(|err| OoxmlError::corrupt(part, err))?;
                        let value = text.trim().parse::<u32>().map_err(|err| {
                            OoxmlError::corrupt(part, format!("invalid from/{}: {}", name, err))
                        })?;
                        if name == "col" {
                            col = Some(value);
                        } else {
                            row = Some(value);
                        }
                    }
                },
                Ok(Event::End(e)) => {
                    if depth == 2 && e.local_name().as_ref() == b"from" {
                        in_from = false;
                    }
                    field = None;
                    depth = depth.saturating_sub(1);
                },
                Ok(Event::Eof) => break,
                Err(err) => return Err(OoxmlError::corrupt(part, err)),
                _ => {},
            }
        }

        if depth != 0 {
            return Err(OoxmlError::corrupt(part, "unterminated anchor payload"));
        }
        if let (Some(col), Some(row)) = (col, row) {
            summary.from = Some((col, row));
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAWING: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<xdr:wsDr xmlns:xdr="http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing" "#,
        r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">"#,
        r#"<xdr:twoCellAnchor editAs="oneCell">"#,
        r#"<xdr:from><xdr:col>3</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>5</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:from>"#,
        r#"<xdr:to><xdr:col>9</xdr:col><xdr:colOff>0</xdr:colOff><xdr:row>20</xdr:row><xdr:rowOff>0</xdr:rowOff></xdr:to>"#,
        r#"<xdr:pic><xdr:nvPicPr><xdr:cNvPr id="2" name="Picture 2"/></xdr:nvPicPr></xdr:pic>"#,
        r#"<xdr:clientData/></xdr:twoCellAnchor>"#,
        r#"<xdr:absoluteAnchor><xdr:pos x="0" y="0"/><xdr:ext cx="0" cy="0"/><xdr:clientData/></xdr:absoluteAnchor>"#,
        r#"</xdr:wsDr>"#
    );

    #[test]
    fn test_parse_drawing_anchors() {
        let drawing = parse_drawing("xl/drawings/drawing1.xml", DRAWING.as_bytes()).unwrap();
        assert_eq!(drawing.namespaces.len(), 2);
        assert_eq!(drawing.namespaces[1], NamespaceDecl::new("a", crate::ooxml::opc::constants::namespace::DML_MAIN));
        assert_eq!(drawing.two_cell_anchors.len(), 1);
        assert_eq!(drawing.absolute_anchors.len(), 1);
        assert!(drawing.one_cell_anchors.is_empty());

        let anchor = &drawing.two_cell_anchors[0];
        assert_eq!(anchor.edit_as, Some(EditAs::OneCell));
        assert!(anchor.inner_xml.starts_with("<xdr:from>"));
        assert!(anchor.inner_xml.ends_with("<xdr:clientData/>"));
    }

    #[test]
    fn test_malformed_parts_are_corrupt() {
        for bytes in [
            &b"not a drawing"[..],
            b"<xdr:wsDr><xdr:twoCellAnchor></xdr:wsDr>",
            b"<worksheet/>",
            b"<xdr:wsDr><xdr:twoCellAnchor editAs=\"sideways\"/></xdr:wsDr>",
        ] {
            assert!(
                matches!(parse_drawing("d.xml", bytes), Err(OoxmlError::CorruptPart { .. })),
                "{}",
                String::from_utf8_lossy(bytes)
            );
        }
    }

    #[test]
    fn test_summary_of_picture_payload() {
        let drawing = parse_drawing("d.xml", DRAWING.as_bytes()).unwrap();
        let summary = AnchorSummary::from_payload("d.xml", &drawing.two_cell_anchors[0].inner_xml).unwrap();
        assert_eq!(summary.from, Some((3, 5)));
        assert!(summary.has_picture);
    }

    #[test]
    fn test_summary_ignores_nested_pictures() {
        let payload = concat!(
            r#"<xdr:from><xdr:col>1</xdr:col><xdr:row>2</xdr:row></xdr:from>"#,
            r#"<xdr:grpSp><xdr:pic/></xdr:grpSp>"#
        );
        let summary = AnchorSummary::from_payload("d.xml", payload).unwrap();
        assert_eq!(summary.from, Some((1, 2)));
        assert!(!summary.has_picture);
        assert!(AnchorSummary::from_payload("d.xml", "<xdr:from><xdr:col>x</xdr:col></xdr:from>").is_err());
    }
}
