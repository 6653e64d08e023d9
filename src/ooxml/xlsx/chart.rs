//! Workbook-level chart and picture placement.
//!
//! [`ChartWorkbook`] wires the chart compiler and the drawing layer to a
//! package: it writes chart and media parts, keeps drawing documents
//! resident while they are edited, and records the relationships and
//! content types that tie sheets, drawings, charts and images together.

use crate::common::coordinates::CellRef;
use crate::ooxml::charts::{ChartSpace, ChartSpec, PictureFormat};
use crate::ooxml::drawings::{
    DefaultMetrics, DrawingStore, ObjectKind, SheetMetrics, add_chart_anchor, add_picture_anchor,
    add_sheet_chart_anchor, delete_anchors, position_object_pixels,
};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::ids;
use crate::ooxml::opc::PartStore;
use crate::ooxml::opc::constants::{content_type, namespace, relationship_type};
use crate::ooxml::opc::packuri;
use std::io::Write;
use tracing::debug;

/// Kind of sheet a drawing is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    Worksheet,
    ChartSheet,
}

/// The drawing part attached to a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetDrawing {
    pub part: String,
    /// Number N of the sheet's "rIdN" relationship to the drawing, when it was
    /// created in this session
    pub rel_id: Option<u32>,
}

#[derive(Debug, Clone)]
struct SheetEntry {
    name: String,
    part: String,
    kind: SheetKind,
    /// Whether the sheet part is written by this workbook
    owned: bool,
    drawing: Option<SheetDrawing>,
}

/// An object placed on a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedObject {
    /// Chart part or media part holding the object
    pub part: String,
    pub drawing_part: String,
    /// Number N of the drawing's "rIdN" relationship to `part`
    pub rel_id: u32,
    /// `cNvPr` ID of the object inside the drawing
    pub frame_id: u32,
}

/// An image to embed.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    /// File extension, e.g. "png"
    pub extension: String,
    pub data: Vec<u8>,
    /// Size in pixels before scaling
    pub width: u32,
    pub height: u32,
    pub format: PictureFormat,
}

impl Picture {
    pub fn new(extension: impl Into<String>, data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            extension: extension.into(),
            data,
            width,
            height,
            format: PictureFormat::default(),
        }
    }

    #[inline]
    pub fn with_format(mut self, format: PictureFormat) -> Self {
        self.format = format;
        self
    }

    fn normalized_extension(&self) -> String {
        self.extension.trim_start_matches('.').to_ascii_lowercase()
    }
}

/// Charts, pictures and drawings of a workbook package.
///
/// # Example
///
/// ```
/// use xlchart::ooxml::charts::{ChartKind, ChartSpec, SeriesSpec};
/// use xlchart::ooxml::opc::{Package, PartStore};
/// use xlchart::ooxml::xlsx::ChartWorkbook;
///
/// let mut book = ChartWorkbook::new(Package::new());
/// book.add_worksheet("Sheet1").unwrap();
///
/// let spec = ChartSpec::new(ChartKind::Col)
///     .with_series(SeriesSpec::new("Sheet1!$A$2", "Sheet1!$B$1:$D$1", "Sheet1!$B$2:$D$2"));
/// let placed = book.add_chart("Sheet1", "E1", &spec, &[]).unwrap();
/// assert_eq!(placed.part, "xl/charts/chart1.xml");
///
/// book.save_drawings().unwrap();
/// assert!(book.parts().has_part("xl/drawings/drawing1.xml"));
/// ```
#[derive(Debug)]
pub struct ChartWorkbook<P: PartStore, M: SheetMetrics = DefaultMetrics> {
    parts: P,
    metrics: M,
    drawings: DrawingStore,
    sheets: Vec<SheetEntry>,
}

impl<P: PartStore> ChartWorkbook<P, DefaultMetrics> {
    /// Wrap a package, sizing every sheet's cells at the default width and height.
    pub fn new(parts: P) -> Self {
        Self::with_metrics(parts, DefaultMetrics)
    }
}

impl<P: PartStore, M: SheetMetrics> ChartWorkbook<P, M> {
    pub fn with_metrics(parts: P, metrics: M) -> Self {
        Self {
            parts,
            metrics,
            drawings: DrawingStore::new(),
            sheets: Vec::new(),
        }
    }

    #[inline]
    pub fn parts(&self) -> &P {
        &self.parts
    }

    #[inline]
    pub fn drawings(&self) -> &DrawingStore {
        &self.drawings
    }

    /// Consume the workbook, returning the package. Unsaved drawing edits are
    /// discarded; call [`Self::save_drawings`] first.
    pub fn into_parts(self) -> P {
        self.parts
    }

    /// Create a new empty worksheet part. Returns its part name.
    pub fn add_worksheet(&mut self, name: &str) -> Result<String> {
        self.ensure_unique(name)?;
        let index = ids::next_worksheet_index(self.parts.part_names());
        let part = next_free_part(&self.parts, index, |n| {
            format!("xl/worksheets/sheet{}.xml", n)
        });
        self.parts.set_part(&part, worksheet_xml(None)?);
        self.parts
            .add_content_type(&part, content_type::SML_WORKSHEET)?;
        debug!(sheet = name, part = %part, "worksheet added");
        self.sheets.push(SheetEntry {
            name: name.to_string(),
            part: part.clone(),
            kind: SheetKind::Worksheet,
            owned: true,
            drawing: None,
        });
        Ok(part)
    }

    /// Register a sheet whose part already exists in the package.
    ///
    /// Its part is never rewritten; an existing drawing is found through the
    /// sheet's relationships.
    pub fn register_sheet(&mut self, name: &str, part: &str, kind: SheetKind) -> Result<()> {
        self.ensure_unique(name)?;
        if !self.parts.has_part(part) {
            return Err(OoxmlError::PartNotFound(part.to_string()));
        }
        self.sheets.push(SheetEntry {
            name: name.to_string(),
            part: part.to_string(),
            kind,
            owned: false,
            drawing: None,
        });
        Ok(())
    }

    /// Part name of a sheet.
    pub fn sheet_part(&self, name: &str) -> Option<&str> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .map(|sheet| sheet.part.as_str())
    }

    /// Drawing attached to a sheet in this session or found on first use.
    pub fn sheet_drawing(&self, name: &str) -> Option<&SheetDrawing> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .and_then(|sheet| sheet.drawing.as_ref())
    }

    /// Add a chart, with optional combo overlays, whose top-left corner is at
    /// `cell` of a worksheet.
    pub fn add_chart(
        &mut self,
        sheet: &str,
        cell: &str,
        primary: &ChartSpec,
        overlays: &[ChartSpec],
    ) -> Result<PlacedObject> {
        let cell = CellRef::parse(cell)?;
        let index = self.sheet_index(sheet, SheetKind::Worksheet)?;
        let chart_xml = ChartSpace::compile(primary, overlays)?.to_xml()?;
        let (drawing_part, is_new) = self.resolve_drawing(index)?;

        let format = &primary.format;
        let (width, height) = format.scaled(primary.dimension.width, primary.dimension.height);
        let geometry = position_object_pixels(
            &self.metrics,
            cell.col,
            cell.row,
            format.x_offset,
            format.y_offset,
            width,
            height,
        );

        let chart_part = next_chart_part(&self.parts);
        let document = self.drawings.get_or_create(&drawing_part, &self.parts)?;
        let rel_id = write_chart_part(&mut self.parts, &drawing_part, &chart_part, chart_xml)?;
        let frame_id = add_chart_anchor(document, &geometry, rel_id, format)?;
        self.parts
            .add_content_type(&drawing_part, content_type::OFC_DRAWING)?;

        if is_new {
            self.attach_drawing(index, &drawing_part)?;
        }
        debug!(sheet, cell = %cell, chart = %chart_part, drawing = %drawing_part, "chart added");
        Ok(PlacedObject {
            part: chart_part,
            drawing_part,
            rel_id,
            frame_id,
        })
    }

    /// Create a chart sheet holding a single chart that fills it.
    pub fn add_chart_sheet(
        &mut self,
        name: &str,
        primary: &ChartSpec,
        overlays: &[ChartSpec],
    ) -> Result<PlacedObject> {
        self.ensure_unique(name)?;
        let chart_xml = ChartSpace::compile(primary, overlays)?.to_xml()?;

        let index = ids::next_chartsheet_index(self.parts.part_names());
        let sheet_part = next_free_part(&self.parts, index, |n| {
            format!("xl/chartsheets/sheet{}.xml", n)
        });
        let drawing_part = self.next_drawing_part();
        let chart_part = next_chart_part(&self.parts);

        let document = self.drawings.get_or_create(&drawing_part, &self.parts)?;
        let rel_id = write_chart_part(&mut self.parts, &drawing_part, &chart_part, chart_xml)?;
        let frame_id = add_sheet_chart_anchor(document, rel_id, &primary.format)?;
        self.parts
            .add_content_type(&drawing_part, content_type::OFC_DRAWING)?;

        self.sheets.push(SheetEntry {
            name: name.to_string(),
            part: sheet_part.clone(),
            kind: SheetKind::ChartSheet,
            owned: true,
            drawing: None,
        });
        let index = self.sheets.len() - 1;
        self.attach_drawing(index, &drawing_part)?;
        self.parts
            .add_content_type(&sheet_part, content_type::SML_CHARTSHEET)?;
        debug!(sheet = name, part = %sheet_part, chart = %chart_part, "chart sheet added");
        Ok(PlacedObject {
            part: chart_part,
            drawing_part,
            rel_id,
            frame_id,
        })
    }

    /// Delete the charts anchored at `cell` of a worksheet. Returns the number removed.
    ///
    /// Chart parts stay in the package.
    pub fn delete_chart(&mut self, sheet: &str, cell: &str) -> Result<usize> {
        self.delete_objects(sheet, cell, ObjectKind::Chart)
    }

    /// Embed an image whose top-left corner is at `cell` of a worksheet.
    pub fn add_picture(&mut self, sheet: &str, cell: &str, picture: &Picture) -> Result<PlacedObject> {
        let cell = CellRef::parse(cell)?;
        let index = self.sheet_index(sheet, SheetKind::Worksheet)?;
        let format = &picture.format;
        format.validate()?;
        let extension = picture.normalized_extension();
        let media_type = content_type::for_image_extension(&extension).ok_or_else(|| {
            OoxmlError::InvalidFormat(format!("unsupported image extension {:?}", picture.extension))
        })?;
        if picture.width == 0 || picture.height == 0 {
            return Err(OoxmlError::InvalidFormat(format!(
                "picture size must be positive, got {}x{}",
                picture.width, picture.height
            )));
        }

        let (drawing_part, is_new) = self.resolve_drawing(index)?;
        let (width, height) = format.scaled(picture.width, picture.height);
        let geometry = position_object_pixels(
            &self.metrics,
            cell.col,
            cell.row,
            format.x_offset,
            format.y_offset,
            width,
            height,
        );

        let image_index = ids::next_image_index(self.parts.part_names());
        let media_part = next_free_part(&self.parts, image_index, |n| {
            format!("xl/media/image{}.{}", n, extension)
        });
        let document = self.drawings.get_or_create(&drawing_part, &self.parts)?;
        self.parts.set_part(&media_part, picture.data.clone());
        self.parts.add_content_type(&media_part, media_type)?;
        let rel_id = self.parts.add_relationship(
            &packuri::rels_part(&drawing_part),
            relationship_type::IMAGE,
            &packuri::relative_ref(packuri::base_dir(&drawing_part), &media_part),
        )?;
        let frame_id = add_picture_anchor(document, &geometry, rel_id, format, width, height)?;
        self.parts
            .add_content_type(&drawing_part, content_type::OFC_DRAWING)?;

        if is_new {
            self.attach_drawing(index, &drawing_part)?;
        }
        debug!(sheet, cell = %cell, media = %media_part, drawing = %drawing_part, "picture added");
        Ok(PlacedObject {
            part: media_part,
            drawing_part,
            rel_id,
            frame_id,
        })
    }

    /// Delete the pictures anchored at `cell` of a worksheet. Returns the number removed.
    ///
    /// Media parts stay in the package.
    pub fn delete_picture(&mut self, sheet: &str, cell: &str) -> Result<usize> {
        self.delete_objects(sheet, cell, ObjectKind::Picture)
    }

    /// Write every resident drawing document to its part.
    pub fn save_drawings(&mut self) -> Result<usize> {
        self.drawings.flush(&mut self.parts)
    }

    fn delete_objects(&mut self, sheet: &str, cell: &str, kind: ObjectKind) -> Result<usize> {
        let cell = CellRef::parse(cell)?;
        let index = self.sheet_index(sheet, SheetKind::Worksheet)?;
        let Some(drawing_part) = self.existing_drawing(index)? else {
            return Ok(0);
        };
        let document = self.drawings.get_or_create(&drawing_part, &self.parts)?;
        delete_anchors(document, &drawing_part, cell.col, cell.row, kind)
    }

    fn ensure_unique(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(OoxmlError::InvalidFormat("sheet name must not be empty".to_string()));
        }
        if self.sheets.iter().any(|sheet| sheet.name.eq_ignore_ascii_case(name)) {
            return Err(OoxmlError::InvalidFormat(format!(
                "sheet {:?} already exists",
                name
            )));
        }
        Ok(())
    }

    fn sheet_index(&self, name: &str, kind: SheetKind) -> Result<usize> {
        self.sheets
            .iter()
            .position(|sheet| sheet.name == name && sheet.kind == kind)
            .ok_or_else(|| OoxmlError::PartNotFound(format!("sheet {:?}", name)))
    }

    /// The sheet's drawing part, if it has one.
    fn existing_drawing(&mut self, index: usize) -> Result<Option<String>> {
        let sheet = &mut self.sheets[index];
        if let Some(ref drawing) = sheet.drawing {
            return Ok(Some(drawing.part.clone()));
        }
        let rels = packuri::rels_part(&sheet.part);
        let found = self
            .parts
            .find_relationship(&rels, relationship_type::DRAWING)?;
        if let Some(ref part) = found {
            sheet.drawing = Some(SheetDrawing {
                part: part.clone(),
                rel_id: None,
            });
        }
        Ok(found)
    }

    /// The sheet's drawing part, or a fresh part name and `true` when the
    /// sheet has none yet.
    fn resolve_drawing(&mut self, index: usize) -> Result<(String, bool)> {
        match self.existing_drawing(index)? {
            Some(part) => Ok((part, false)),
            None => Ok((self.next_drawing_part(), true)),
        }
    }

    fn next_drawing_part(&self) -> String {
        let names = self.parts.part_names();
        let index = ids::next_drawing_index(names.into_iter().chain(self.drawings.paths()));
        let mut part = format!("xl/drawings/drawing{}.xml", index);
        let mut n = index;
        while self.parts.has_part(&part) || self.drawings.contains(&part) {
            n += 1;
            part = format!("xl/drawings/drawing{}.xml", n);
        }
        part
    }

    /// Relate a sheet to its new drawing and rewrite the sheet part if this
    /// workbook owns it.
    fn attach_drawing(&mut self, index: usize, drawing_part: &str) -> Result<()> {
        let sheet = &mut self.sheets[index];
        let rel_id = self.parts.add_relationship(
            &packuri::rels_part(&sheet.part),
            relationship_type::DRAWING,
            &packuri::relative_ref(packuri::base_dir(&sheet.part), drawing_part),
        )?;
        sheet.drawing = Some(SheetDrawing {
            part: drawing_part.to_string(),
            rel_id: Some(rel_id),
        });
        if sheet.owned {
            let bytes = match sheet.kind {
                SheetKind::Worksheet => worksheet_xml(Some(rel_id))?,
                SheetKind::ChartSheet => chartsheet_xml(rel_id)?,
            };
            self.parts.set_part(&sheet.part, bytes);
        }
        debug!(sheet = %sheet.name, drawing = drawing_part, rel_id, "drawing attached");
        Ok(())
    }
}

/// First free part name at or after `index`.
fn next_free_part<P: PartStore + ?Sized>(parts: &P, index: u32, name: impl Fn(u32) -> String) -> String {
    let mut n = index;
    let mut part = name(n);
    while parts.has_part(&part) {
        n += 1;
        part = name(n);
    }
    part
}

fn next_chart_part<P: PartStore + ?Sized>(parts: &P) -> String {
    let index = ids::next_chart_index(parts.part_names());
    next_free_part(parts, index, |n| format!("xl/charts/chart{}.xml", n))
}

/// Store a chart part and relate it from the drawing. Returns the relationship number.
fn write_chart_part<P: PartStore + ?Sized>(
    parts: &mut P,
    drawing_part: &str,
    chart_part: &str,
    chart_xml: Vec<u8>,
) -> Result<u32> {
    parts.set_part(chart_part, chart_xml);
    parts.add_content_type(chart_part, content_type::DML_CHART)?;
    parts.add_relationship(
        &packuri::rels_part(drawing_part),
        relationship_type::CHART,
        &packuri::relative_ref(packuri::base_dir(drawing_part), chart_part),
    )
}

fn worksheet_xml(drawing_rel: Option<u32>) -> Result<Vec<u8>> {
    let mut xml = Vec::with_capacity(512);
    write!(
        xml,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{}" xmlns:r="{}"><sheetData/>"#,
        namespace::SML_MAIN,
        namespace::OFC_RELATIONSHIPS
    )?;
    if let Some(rel_id) = drawing_rel {
        write!(xml, r#"<drawing r:id="rId{}"/>"#, rel_id)?;
    }
    write!(xml, "</worksheet>")?;
    Ok(xml)
}

fn chartsheet_xml(drawing_rel: u32) -> Result<Vec<u8>> {
    let mut xml = Vec::with_capacity(512);
    write!(
        xml,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><chartsheet xmlns="{}" xmlns:r="{}"><sheetPr/><sheetViews><sheetView workbookViewId="0"/></sheetViews><drawing r:id="rId{}"/></chartsheet>"#,
        namespace::SML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        drawing_rel
    )?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::{AnchorFormat, ChartKind, SeriesSpec};
    use crate::ooxml::opc::Package;

    fn column_chart() -> ChartSpec {
        ChartSpec::new(ChartKind::Col).with_series(SeriesSpec::new(
            "Sheet1!$A$2",
            "Sheet1!$B$1:$D$1",
            "Sheet1!$B$2:$D$2",
        ))
    }

    fn book() -> ChartWorkbook<Package> {
        let mut book = ChartWorkbook::new(Package::new());
        book.add_worksheet("Sheet1").unwrap();
        book
    }

    fn text(book: &ChartWorkbook<Package>, part: &str) -> String {
        String::from_utf8(book.parts().part(part).unwrap().to_vec()).unwrap()
    }

    #[test]
    fn test_first_chart_creates_drawing() {
        let mut book = book();
        let placed = book.add_chart("Sheet1", "D6", &column_chart(), &[]).unwrap();
        assert_eq!(
            placed,
            PlacedObject {
                part: "xl/charts/chart1.xml".to_string(),
                drawing_part: "xl/drawings/drawing1.xml".to_string(),
                rel_id: 1,
                frame_id: 2,
            }
        );
        assert!(text(&book, "xl/worksheets/sheet1.xml").contains(r#"<drawing r:id="rId1"/>"#));
        assert!(
            text(&book, "xl/worksheets/_rels/sheet1.xml.rels")
                .contains(r#"Target="../drawings/drawing1.xml""#)
        );
        assert!(
            text(&book, "xl/drawings/_rels/drawing1.xml.rels")
                .contains(r#"Target="../charts/chart1.xml""#)
        );
        assert!(!book.parts().has_part("xl/drawings/drawing1.xml"));
        assert_eq!(book.save_drawings().unwrap(), 1);
        assert!(text(&book, "xl/drawings/drawing1.xml").contains("<xdr:col>3</xdr:col>"));
    }

    #[test]
    fn test_second_chart_reuses_drawing() {
        let mut book = book();
        book.add_chart("Sheet1", "A1", &column_chart(), &[]).unwrap();
        let second = book.add_chart("Sheet1", "J1", &column_chart(), &[]).unwrap();
        assert_eq!(second.part, "xl/charts/chart2.xml");
        assert_eq!(second.drawing_part, "xl/drawings/drawing1.xml");
        assert_eq!((second.rel_id, second.frame_id), (2, 3));
        assert_eq!(book.sheet_drawing("Sheet1").unwrap().rel_id, Some(1));
    }

    #[test]
    fn test_invalid_cell_mutates_nothing() {
        let mut book = book();
        let before = book.parts().part_names().len();
        let err = book.add_chart("Sheet1", "A0", &column_chart(), &[]).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidCellReference(_)));
        assert_eq!(book.parts().part_names().len(), before);
        assert!(book.drawings().is_empty());
    }

    #[test]
    fn test_unknown_sheet() {
        let mut book = book();
        let err = book.add_chart("Missing", "A1", &column_chart(), &[]).unwrap_err();
        assert!(matches!(err, OoxmlError::PartNotFound(_)));
        assert!(book.add_worksheet("sheet1").is_err());
    }

    #[test]
    fn test_chart_sheet() {
        let mut book = book();
        let placed = book.add_chart_sheet("Chart1", &column_chart(), &[]).unwrap();
        assert_eq!(placed.frame_id, 2);
        let sheet = text(&book, "xl/chartsheets/sheet1.xml");
        assert!(sheet.contains(r#"<drawing r:id="rId1"/>"#));
        assert_eq!(
            book.parts()
                .content_type("xl/chartsheets/sheet1.xml")
                .unwrap()
                .as_deref(),
            Some(content_type::SML_CHARTSHEET)
        );
        book.save_drawings().unwrap();
        assert!(text(&book, &placed.drawing_part).contains("<xdr:absoluteAnchor>"));
    }

    #[test]
    fn test_picture_and_delete() {
        let mut book = book();
        let picture = Picture::new("PNG", vec![0x89, b'P', b'N', b'G'], 100, 50);
        let placed = book.add_picture("Sheet1", "B2", &picture).unwrap();
        assert_eq!(placed.part, "xl/media/image1.png");
        book.add_chart("Sheet1", "B2", &column_chart(), &[]).unwrap();

        assert_eq!(book.delete_picture("Sheet1", "B2").unwrap(), 1);
        assert_eq!(book.delete_picture("Sheet1", "B2").unwrap(), 0);
        assert_eq!(book.delete_chart("Sheet1", "B2").unwrap(), 1);
        assert!(book.parts().has_part("xl/media/image1.png"));
    }

    #[test]
    fn test_bad_picture_options() {
        let mut book = book();
        let err = book
            .add_picture("Sheet1", "A1", &Picture::new("svgz", Vec::new(), 10, 10))
            .unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidFormat(_)));
        let err = book
            .add_picture("Sheet1", "A1", &Picture::new("png", Vec::new(), 0, 10))
            .unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidFormat(_)));
    }

    #[test]
    fn test_offset_beyond_sheet_is_rejected() {
        let mut book = book();
        let before = book.parts().part_names().len();
        let format = AnchorFormat {
            x_offset: i64::MAX,
            ..Default::default()
        };
        let err = book
            .add_chart("Sheet1", "B2", &column_chart().with_format(format.clone()), &[])
            .unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidFormat(_)));
        let picture = Picture::new("png", vec![1], 10, 10).with_format(format);
        assert!(matches!(
            book.add_picture("Sheet1", "B2", &picture),
            Err(OoxmlError::InvalidFormat(_))
        ));
        assert_eq!(book.parts().part_names().len(), before);
        assert!(book.drawings().is_empty());
    }

    #[test]
    fn test_delete_without_drawing() {
        let mut book = book();
        assert_eq!(book.delete_chart("Sheet1", "A1").unwrap(), 0);
        assert!(matches!(
            book.delete_chart("Sheet1", "1A"),
            Err(OoxmlError::InvalidCellReference(_))
        ));
    }
}
