/// Relationship-related objects for package parts.
///
/// A `.rels` part maps relationship IDs ("rId1", "rId2", ...) to targets. Chart
/// and drawing parts only ever create internal relationships, but external ones
/// read from an existing part are kept so they survive a rewrite.
use crate::common::xml::{escape_xml, unescape_xml};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::ids;
use crate::ooxml::opc::packuri;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;
use std::io::Write;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference - either a relative part reference or external URL
    target_ref: String,

    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String, is_external: bool) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    ///
    /// For internal relationships, this is a relative part reference.
    /// For external relationships, this is an absolute URL.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Numeric part of the relationship ID, if it has the "rIdN" form.
    pub fn number(&self) -> Option<u32> {
        parse_r_id(&self.r_id)
    }
}

/// Parse the number out of an "rIdN" relationship ID.
pub fn parse_r_id(r_id: &str) -> Option<u32> {
    r_id.strip_prefix("rId")?.parse().ok()
}

/// Collection of relationships from a single source part.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Directory of the source part, used to resolve relative targets
    base_dir: String,

    /// Map of relationship ID to Relationship
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    ///
    /// # Arguments
    /// * `base_dir` - Directory of the source part (e.g. "xl/drawings")
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            rels: HashMap::new(),
        }
    }

    /// Parse an existing `.rels` part.
    ///
    /// Elements other than `Relationship` are ignored. A `Relationship` missing
    /// one of `Id`, `Type` or `Target` is skipped.
    pub fn from_xml(base_dir: impl Into<String>, xml: &[u8]) -> Result<Self> {
        let mut rels = Self::new(base_dir);
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    if e.local_name().as_ref() != b"Relationship" {
                        buf.clear();
                        continue;
                    }
                    let mut r_id = None;
                    let mut reltype = None;
                    let mut target_ref = None;
                    let mut is_external = false;

                    for attr in e.attributes().flatten() {
                        let value = std::str::from_utf8(&attr.value)
                            .map_err(|err| OoxmlError::Xml(err.to_string()))?;
                        let value = unescape_xml(value);
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target_ref = Some(value),
                            b"TargetMode" => is_external = value == "External",
                            _ => {},
                        }
                    }

                    if let (Some(id), Some(rt), Some(tr)) = (r_id, reltype, target_ref) {
                        rels.rels
                            .insert(id.clone(), Relationship::new(id, rt, tr, is_external));
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(format!("Rels parse error: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Add an internal relationship and return the number of its new ID.
    ///
    /// The ID is derived from the collection size; if that ID is already taken
    /// (a part edited by another producer can have gaps) it is bumped past the
    /// taken ones.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> u32 {
        let mut number = ids::next_rel_id(self.rels.len());
        while self.rels.contains_key(&format!("rId{}", number)) {
            number += 1;
        }
        let r_id = format!("rId{}", number);
        self.rels.insert(
            r_id.clone(),
            Relationship::new(r_id, reltype.to_string(), target_ref.to_string(), false),
        );
        number
    }

    /// Get a relationship by its ID.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Get the package part an internal relationship points at.
    pub fn target_part(&self, r_id: &str) -> Option<String> {
        let rel = self.rels.get(r_id)?;
        if rel.is_external {
            return None;
        }
        Some(packuri::resolve_target(&self.base_dir, &rel.target_ref))
    }

    /// Remove a relationship by its ID.
    pub fn remove(&mut self, r_id: &str) -> Option<Relationship> {
        self.rels.remove(r_id)
    }

    /// Get an iterator over all relationships.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to XML format, ordered by relationship number.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = Vec::with_capacity(256 + self.rels.len() * 160);

        write!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
        )?;
        xml.push(b'\n');
        write!(
            xml,
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#
        )?;

        let mut rels: Vec<&Relationship> = self.rels.values().collect();
        rels.sort_by(|a, b| {
            let key = |rel: &Relationship| rel.number().unwrap_or(u32::MAX);
            key(a).cmp(&key(b)).then_with(|| a.r_id().cmp(b.r_id()))
        });

        for rel in rels {
            let target_mode = if rel.is_external() {
                r#" TargetMode="External""#
            } else {
                ""
            };
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
                target_mode
            )?;
        }

        write!(xml, "</Relationships>")?;
        Ok(xml)
    }
}
