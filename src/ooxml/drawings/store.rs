//! Resident drawing documents.
//!
//! A drawing part is decoded at most once per session. Later edits mutate the
//! resident [`DrawingDocument`] and [`DrawingStore::flush`] writes every
//! resident document back to the package.

use crate::common::xml::strict_to_transitional;
use crate::ooxml::drawings::anchor::DrawingDocument;
use crate::ooxml::drawings::reader::parse_drawing;
use crate::ooxml::drawings::writer;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PartStore;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Map of drawing part name to its editable document.
#[derive(Debug, Clone, Default)]
pub struct DrawingStore {
    documents: BTreeMap<String, DrawingDocument>,
}

impl DrawingStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.documents.contains_key(path)
    }

    #[inline]
    pub fn get(&self, path: &str) -> Option<&DrawingDocument> {
        self.documents.get(path)
    }

    /// Names of the resident drawing parts.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get the resident document for `path`, materializing it from `parts` on
    /// first access.
    ///
    /// A missing or blank part yields an empty document. A part that cannot be
    /// decoded yields [`OoxmlError::CorruptPart`] and nothing is cached.
    pub fn get_or_create<P: PartStore + ?Sized>(
        &mut self,
        path: &str,
        parts: &P,
    ) -> Result<&mut DrawingDocument> {
        if !self.documents.contains_key(path) {
            let document = materialize(path, parts)?;
            self.documents.insert(path.to_string(), document);
        }
        self.documents
            .get_mut(path)
            .ok_or_else(|| OoxmlError::PartNotFound(path.to_string()))
    }

    /// Serialize one document to drawing part bytes.
    #[inline]
    pub fn serialize(document: &DrawingDocument) -> Result<Vec<u8>> {
        Ok(writer::to_xml(document)?)
    }

    /// Write every resident document to its part. Returns the number written.
    pub fn flush<P: PartStore + ?Sized>(&self, parts: &mut P) -> Result<usize> {
        for (path, document) in &self.documents {
            let bytes = Self::serialize(document)?;
            debug!(path = %path, anchors = document.anchor_count(), "drawing flushed");
            parts.set_part(path, bytes);
        }
        Ok(self.documents.len())
    }
}

fn materialize<P: PartStore + ?Sized>(path: &str, parts: &P) -> Result<DrawingDocument> {
    let bytes = match parts.part(path) {
        Some(bytes) if !bytes.iter().all(u8::is_ascii_whitespace) => bytes,
        _ => {
            debug!(path, "new drawing");
            return Ok(DrawingDocument::new());
        },
    };

    let normalized = strict_to_transitional(bytes);
    match parse_drawing(path, &normalized) {
        Ok(decoded) => {
            let document = DrawingDocument::from(decoded);
            debug!(path, anchors = document.anchor_count(), "drawing decoded");
            Ok(document)
        },
        Err(err) => {
            warn!(path, error = %err, "drawing part cannot be decoded");
            Err(err)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::Package;

    const PATH: &str = "xl/drawings/drawing1.xml";

    #[test]
    fn test_absent_and_blank_parts_are_empty() {
        let mut store = DrawingStore::new();
        let mut parts = Package::new();
        assert_eq!(store.get_or_create(PATH, &parts).unwrap().anchor_count(), 0);

        parts.set_part("xl/drawings/drawing2.xml", b" \n\t".to_vec());
        let document = store.get_or_create("xl/drawings/drawing2.xml", &parts).unwrap();
        assert_eq!(document.namespaces.len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_strict_part_is_normalized() {
        let strict = concat!(
            r#"<xdr:wsDr xmlns:xdr="http://purl.oclc.org/ooxml/drawingml/spreadsheetDrawing" "#,
            r#"xmlns:a="http://purl.oclc.org/ooxml/drawingml/main" "#,
            r#"xmlns:r="http://purl.oclc.org/ooxml/officeDocument/relationships">"#,
            r#"<xdr:absoluteAnchor><xdr:pos x="0" y="0"/><xdr:ext cx="0" cy="0"/><xdr:clientData/></xdr:absoluteAnchor>"#,
            r#"</xdr:wsDr>"#
        );
        let parts = Package::from_parts([(PATH, strict.as_bytes().to_vec())]);
        let mut store = DrawingStore::new();
        let document = store.get_or_create(PATH, &parts).unwrap();
        assert_eq!(document.absolute_anchors.len(), 1);
        assert!(
            document
                .namespaces
                .iter()
                .all(|ns| !ns.uri.contains("purl.oclc.org"))
        );
        assert!(document.namespaces.iter().any(|ns| ns.prefix == "r"));
    }

    #[test]
    fn test_corrupt_part_leaves_store_unchanged() {
        let parts = Package::from_parts([(PATH, b"<xdr:wsDr><xdr:twoCellAnchor>".to_vec())]);
        let mut store = DrawingStore::new();
        let err = store.get_or_create(PATH, &parts).unwrap_err();
        assert!(matches!(err, OoxmlError::CorruptPart { ref part, .. } if part == PATH));
        assert!(!store.contains(PATH));
    }

    #[test]
    fn test_resident_document_is_reused_and_flushed() {
        let mut store = DrawingStore::new();
        let mut parts = Package::new();
        store
            .get_or_create(PATH, &parts)
            .unwrap()
            .declare_namespace(crate::ooxml::drawings::anchor::NamespaceDecl::new("c", "urn:c"));

        parts.set_part(PATH, b"garbage".to_vec());
        assert_eq!(store.get_or_create(PATH, &parts).unwrap().namespaces.len(), 3);

        assert_eq!(store.flush(&mut parts).unwrap(), 1);
        let written = std::str::from_utf8(parts.part(PATH).unwrap()).unwrap();
        assert!(written.contains(r#"xmlns:c="urn:c""#));
    }
}
