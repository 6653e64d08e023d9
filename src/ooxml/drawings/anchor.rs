//! Drawing part models.
//!
//! A drawing part (`xl/drawings/drawingN.xml`) is an `xdr:wsDr` root holding
//! absolute, one-cell and two-cell anchors. Each anchor places one object
//! (a chart graphic frame or a picture) on the sheet canvas.
//!
//! Two shapes exist for the same document. [`DecodedDrawing`] is what the
//! reader produces from a saved part: each anchor is only its `editAs`
//! attribute and its raw inner XML. [`DrawingDocument`] is the editable shape
//! the anchor manager appends to and the writer serializes. The decoded shape
//! is projected into the editable one with [`From`].

use crate::ooxml::charts::spec::EditAs;
use crate::ooxml::ids;
use crate::ooxml::opc::constants::namespace;

/// Kind of object an anchor places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A chart graphic frame (`xdr:graphicFrame`)
    Chart,
    /// A picture (`xdr:pic`)
    Picture,
}

/// Cell marker of a two-cell anchor (`xdr:from` / `xdr:to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorPoint {
    /// Zero-based column
    pub col: u32,
    /// Offset into the column in EMU
    pub col_offset: i64,
    /// Zero-based row
    pub row: u32,
    /// Offset into the row in EMU
    pub row_offset: i64,
}

impl AnchorPoint {
    #[inline]
    pub const fn new(col: u32, col_offset: i64, row: u32, row_offset: i64) -> Self {
        Self {
            col,
            col_offset,
            row,
            row_offset,
        }
    }
}

/// Absolute position in EMU (`xdr:pos`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

/// Extent in EMU (`xdr:ext`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub cx: i64,
    pub cy: i64,
}

/// `xdr:clientData` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientData {
    pub locks_with_sheet: bool,
    pub prints_with_sheet: bool,
}

/// One placed object, in editable form.
///
/// Anchors created in this session carry their placement and kind. Anchors
/// projected from a saved part carry only `edit_as` and their inner XML as
/// `payload`, placement included.
#[derive(Debug, Clone, PartialEq)]
pub struct CellAnchor {
    pub edit_as: Option<EditAs>,
    pub from: Option<AnchorPoint>,
    pub to: Option<AnchorPoint>,
    pub pos: Option<Position>,
    pub ext: Option<Extent>,
    /// Serialized object XML, or the whole inner XML of a decoded anchor
    pub payload: String,
    /// Object kind when known without parsing the payload
    pub kind: Option<ObjectKind>,
    pub client_data: Option<ClientData>,
}

impl CellAnchor {
    /// Create an anchor holding an object created in this session.
    pub fn new(kind: ObjectKind, payload: String) -> Self {
        Self {
            edit_as: None,
            from: None,
            to: None,
            pos: None,
            ext: None,
            payload,
            kind: Some(kind),
            client_data: None,
        }
    }

    #[inline]
    pub fn with_edit_as(mut self, edit_as: Option<EditAs>) -> Self {
        self.edit_as = edit_as;
        self
    }

    #[inline]
    pub fn with_cells(mut self, from: AnchorPoint, to: AnchorPoint) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    #[inline]
    pub fn with_position(mut self, pos: Position, ext: Extent) -> Self {
        self.pos = Some(pos);
        self.ext = Some(ext);
        self
    }

    #[inline]
    pub fn with_client_data(mut self, client_data: ClientData) -> Self {
        self.client_data = Some(client_data);
        self
    }

    /// Whether this anchor was projected from a saved part.
    #[inline]
    pub fn is_decoded(&self) -> bool {
        self.kind.is_none()
    }
}

/// A namespace declaration on the `xdr:wsDr` root. An empty prefix is the
/// default namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    pub prefix: String,
    pub uri: String,
}

impl NamespaceDecl {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// Editable drawing part.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingDocument {
    pub namespaces: Vec<NamespaceDecl>,
    pub absolute_anchors: Vec<CellAnchor>,
    pub one_cell_anchors: Vec<CellAnchor>,
    pub two_cell_anchors: Vec<CellAnchor>,
}

impl DrawingDocument {
    /// An empty drawing declaring the `xdr` and `a` namespaces.
    pub fn new() -> Self {
        Self {
            namespaces: vec![
                NamespaceDecl::new("xdr", namespace::DML_SPREADSHEET_DRAWING),
                NamespaceDecl::new("a", namespace::DML_MAIN),
            ],
            absolute_anchors: Vec::new(),
            one_cell_anchors: Vec::new(),
            two_cell_anchors: Vec::new(),
        }
    }

    /// Add a namespace declaration unless its prefix is already declared.
    pub fn declare_namespace(&mut self, decl: NamespaceDecl) {
        if !self.namespaces.iter().any(|ns| ns.prefix == decl.prefix) {
            self.namespaces.push(decl);
        }
    }

    /// Number of anchors across all three lists.
    pub fn anchor_count(&self) -> usize {
        self.absolute_anchors.len() + self.one_cell_anchors.len() + self.two_cell_anchors.len()
    }

    /// `cNvPr` ID for the next object added to this drawing.
    #[inline]
    pub fn next_frame_id(&self) -> u32 {
        ids::next_frame_id(self.anchor_count())
    }
}

impl Default for DrawingDocument {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// One anchor as read from a saved part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAnchor {
    pub edit_as: Option<EditAs>,
    /// Raw XML between the anchor's start and end tags
    pub inner_xml: String,
}

/// A drawing part as read from the package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedDrawing {
    pub namespaces: Vec<NamespaceDecl>,
    pub absolute_anchors: Vec<DecodedAnchor>,
    pub one_cell_anchors: Vec<DecodedAnchor>,
    pub two_cell_anchors: Vec<DecodedAnchor>,
}

impl From<DecodedAnchor> for CellAnchor {
    fn from(anchor: DecodedAnchor) -> Self {
        Self {
            edit_as: anchor.edit_as,
            from: None,
            to: None,
            pos: None,
            ext: None,
            payload: anchor.inner_xml,
            kind: None,
            client_data: None,
        }
    }
}

impl From<DecodedDrawing> for DrawingDocument {
    fn from(decoded: DecodedDrawing) -> Self {
        let mut document = DrawingDocument::new();
        for decl in decoded.namespaces {
            document.declare_namespace(decl);
        }
        document.absolute_anchors = decoded.absolute_anchors.into_iter().map(Into::into).collect();
        document.one_cell_anchors = decoded.one_cell_anchors.into_iter().map(Into::into).collect();
        document.two_cell_anchors = decoded.two_cell_anchors.into_iter().map(Into::into).collect();
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(inner: &str) -> DecodedAnchor {
        DecodedAnchor {
            edit_as: Some(EditAs::OneCell),
            inner_xml: inner.to_string(),
        }
    }

    #[test]
    fn test_new_document_is_seeded() {
        let document = DrawingDocument::new();
        let prefixes: Vec<&str> = document.namespaces.iter().map(|ns| ns.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["xdr", "a"]);
        assert_eq!(document.anchor_count(), 0);
        assert_eq!(document.next_frame_id(), 2);
    }

    #[test]
    fn test_projection_keeps_every_anchor() {
        let decoded = DecodedDrawing {
            namespaces: vec![
                NamespaceDecl::new("xdr", namespace::DML_SPREADSHEET_DRAWING),
                NamespaceDecl::new("r", namespace::OFC_RELATIONSHIPS),
            ],
            absolute_anchors: vec![decoded("<xdr:pos x=\"0\" y=\"0\"/>")],
            one_cell_anchors: vec![decoded("<xdr:from/>")],
            two_cell_anchors: vec![decoded("<xdr:from/>"), decoded("<xdr:from/>")],
        };
        let document = DrawingDocument::from(decoded);
        assert_eq!(document.anchor_count(), 4);
        assert_eq!(document.next_frame_id(), 6);
        assert!(document.two_cell_anchors.iter().all(CellAnchor::is_decoded));
        assert_eq!(document.one_cell_anchors[0].edit_as, Some(EditAs::OneCell));
        let prefixes: Vec<&str> = document.namespaces.iter().map(|ns| ns.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["xdr", "a", "r"]);
    }
}
