/// In-memory package of parts.
///
/// The chart and drawing code never touches a zip archive. It reads and writes
/// parts through the [`PartStore`] trait, which the workbook layer (or a test)
/// provides. [`Package`] is the in-memory implementation shipped with the crate:
/// parts keyed by member name, relationship parts parsed on demand and written
/// back after each change, and a `[Content_Types].xml` part kept current.
use crate::common::xml::{escape_xml, unescape_xml};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::packuri::{self, CONTENT_TYPES_PART};
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use tracing::trace;

/// Access to the parts of a package.
pub trait PartStore {
    /// Get the bytes of a part, if present.
    fn part(&self, name: &str) -> Option<&[u8]>;

    /// Create or replace a part.
    fn set_part(&mut self, name: &str, bytes: Vec<u8>);

    /// Names of all parts currently in the package.
    fn part_names(&self) -> Vec<&str>;

    /// Add an internal relationship from the source of `rels_part` to `target`.
    ///
    /// Returns the number N of the new "rIdN" ID.
    fn add_relationship(&mut self, rels_part: &str, reltype: &str, target: &str) -> Result<u32>;

    /// Resolve a relationship ID in `rels_part` to the part name it targets.
    fn relationship_target(&self, rels_part: &str, r_id: &str) -> Result<Option<String>>;

    /// Target part of the lowest-numbered internal relationship of `reltype`.
    fn find_relationship(&self, rels_part: &str, reltype: &str) -> Result<Option<String>>;

    /// Register the content type of a part.
    fn add_content_type(&mut self, part: &str, content_type: &str) -> Result<()>;

    #[inline]
    fn has_part(&self, name: &str) -> bool {
        self.part(name).is_some()
    }
}

/// `[Content_Types].xml` entries.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname ("/xl/charts/chart1.xml")
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Content types every spreadsheet package starts with.
    pub fn new() -> Self {
        let mut types = Self::default();
        types.defaults.insert(
            "rels".to_string(),
            "application/vnd.openxmlformats-package.relationships+xml".to_string(),
        );
        types
            .defaults
            .insert("xml".to_string(), "application/xml".to_string());
        types
    }

    /// Parse content types from `[Content_Types].xml`.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let mut key = None;
                    let mut content_type = None;
                    for attr in e.attributes().flatten() {
                        let value = std::str::from_utf8(&attr.value)
                            .map_err(|err| OoxmlError::Xml(err.to_string()))?;
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => key = Some(unescape_xml(value)),
                            b"ContentType" => content_type = Some(unescape_xml(value)),
                            _ => {},
                        }
                    }
                    if let (Some(key), Some(ct)) = (key, content_type) {
                        match e.local_name().as_ref() {
                            b"Default" => {
                                map.defaults.insert(key.to_lowercase(), ct);
                            },
                            b"Override" => {
                                map.overrides.insert(key, ct);
                            },
                            _ => {},
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(OoxmlError::Xml(format!("Content types parse error: {}", e)));
                },
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Add a default content type mapping for a file extension.
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_lowercase(), content_type.to_string());
    }

    /// Add an override content type for a part name.
    pub fn add_override(&mut self, part: &str, content_type: &str) {
        self.overrides
            .insert(format!("/{}", part.trim_start_matches('/')), content_type.to_string());
    }

    /// Get the content type of a part, checking overrides before extension defaults.
    pub fn get(&self, part: &str) -> Option<&str> {
        let partname = format!("/{}", part.trim_start_matches('/'));
        if let Some(ct) = self.overrides.get(&partname) {
            return Some(ct);
        }
        let ext = packuri::filename(part).rsplit_once('.')?.1.to_lowercase();
        self.defaults.get(&ext).map(String::as_str)
    }

    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = Vec::with_capacity(512);
        write!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
        )?;
        xml.push(b'\n');
        write!(
            xml,
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#
        )?;
        for (ext, ct) in &self.defaults {
            write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(ct)
            )?;
        }
        for (part, ct) in &self.overrides {
            write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part),
                escape_xml(ct)
            )?;
        }
        write!(xml, "</Types>")?;
        Ok(xml)
    }
}

/// In-memory package.
#[derive(Debug, Default)]
pub struct Package {
    /// All parts, indexed by member name
    parts: BTreeMap<String, Vec<u8>>,

    /// Relationship parts parsed so far, indexed by rels part name
    rels: HashMap<String, Relationships>,
}

impl Package {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a package from existing parts, e.g. the members of an opened archive.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<String>,
    {
        Self {
            parts: parts
                .into_iter()
                .map(|(name, bytes)| (name.into(), bytes))
                .collect(),
            rels: HashMap::new(),
        }
    }

    /// Consume the package, returning its parts.
    pub fn into_parts(self) -> BTreeMap<String, Vec<u8>> {
        self.parts
    }

    /// Parsed relationships of a rels part (empty if the part does not exist).
    pub fn relationships(&self, rels_part: &str) -> Result<Relationships> {
        if let Some(rels) = self.rels.get(rels_part) {
            return Ok(rels.clone());
        }
        self.load_relationships(rels_part)
    }

    fn load_relationships(&self, rels_part: &str) -> Result<Relationships> {
        let base_dir = packuri::source_of_rels(rels_part)
            .map(|source| packuri::base_dir(&source).to_string())
            .unwrap_or_default();
        match self.parts.get(rels_part) {
            Some(bytes) => Relationships::from_xml(base_dir, bytes)
                .map_err(|err| OoxmlError::corrupt(rels_part, err)),
            None => Ok(Relationships::new(base_dir)),
        }
    }

    fn content_types(&self) -> Result<ContentTypes> {
        match self.parts.get(CONTENT_TYPES_PART) {
            Some(bytes) => ContentTypes::from_xml(bytes)
                .map_err(|err| OoxmlError::corrupt(CONTENT_TYPES_PART, err)),
            None => Ok(ContentTypes::new()),
        }
    }

    /// Get the registered content type of a part.
    pub fn content_type(&self, part: &str) -> Result<Option<String>> {
        Ok(self.content_types()?.get(part).map(str::to_string))
    }
}

impl PartStore for Package {
    fn part(&self, name: &str) -> Option<&[u8]> {
        self.parts.get(name).map(Vec::as_slice)
    }

    fn set_part(&mut self, name: &str, bytes: Vec<u8>) {
        // A replaced rels part must be parsed again.
        self.rels.remove(name);
        self.parts.insert(name.to_string(), bytes);
    }

    fn part_names(&self) -> Vec<&str> {
        self.parts.keys().map(String::as_str).collect()
    }

    fn add_relationship(&mut self, rels_part: &str, reltype: &str, target: &str) -> Result<u32> {
        let mut rels = match self.rels.remove(rels_part) {
            Some(rels) => rels,
            None => self.load_relationships(rels_part)?,
        };
        let number = rels.add(reltype, target);
        trace!(rels_part, number, target, "relationship added");

        self.parts.insert(rels_part.to_string(), rels.to_xml()?);
        self.rels.insert(rels_part.to_string(), rels);
        Ok(number)
    }

    fn relationship_target(&self, rels_part: &str, r_id: &str) -> Result<Option<String>> {
        if let Some(rels) = self.rels.get(rels_part) {
            return Ok(rels.target_part(r_id));
        }
        Ok(self.load_relationships(rels_part)?.target_part(r_id))
    }

    fn find_relationship(&self, rels_part: &str, reltype: &str) -> Result<Option<String>> {
        let rels = self.relationships(rels_part)?;
        let found = rels
            .iter()
            .filter(|rel| rel.reltype() == reltype && !rel.is_external())
            .min_by_key(|rel| (rel.number().unwrap_or(u32::MAX), rel.r_id().to_string()));
        Ok(found.and_then(|rel| rels.target_part(rel.r_id())))
    }

    fn add_content_type(&mut self, part: &str, content_type: &str) -> Result<()> {
        let mut types = self.content_types()?;
        types.add_override(part, content_type);
        self.parts
            .insert(CONTENT_TYPES_PART.to_string(), types.to_xml()?);
        Ok(())
    }
}
