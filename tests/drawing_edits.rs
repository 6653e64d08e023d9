use xlchart::ooxml::charts::{AnchorFormat, ChartKind, ChartSpec, EditAs, SeriesSpec};
use xlchart::ooxml::drawings::{DrawingStore, parse_drawing};
use xlchart::ooxml::opc::{Package, PartStore};
use xlchart::ooxml::xlsx::{ChartWorkbook, Picture, SheetKind};
use xlchart::ooxml::OoxmlError;

const SHEET: &str = "xl/worksheets/sheet1.xml";
const DRAWING: &str = "xl/drawings/drawing1.xml";

fn column_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Col).with_series(SeriesSpec::new(
        "Sheet1!$A$2",
        "Sheet1!$B$1:$D$1",
        "Sheet1!$B$2:$D$2",
    ))
}

fn text(parts: &Package, part: &str) -> String {
    String::from_utf8(parts.part(part).expect("part").to_vec()).expect("utf-8")
}

/// A saved package with two charts and one picture on Sheet1.
fn saved_package() -> Package {
    let mut book = ChartWorkbook::new(Package::new());
    book.add_worksheet("Sheet1").unwrap();
    book.add_chart("Sheet1", "A1", &column_chart(), &[]).unwrap();
    book.add_chart("Sheet1", "H1", &column_chart(), &[]).unwrap();
    book.add_picture("Sheet1", "A1", &Picture::new("png", vec![1, 2, 3], 64, 64))
        .unwrap();
    book.save_drawings().unwrap();
    book.into_parts()
}

fn reopen(parts: Package) -> ChartWorkbook<Package> {
    let mut book = ChartWorkbook::new(parts);
    book.register_sheet("Sheet1", SHEET, SheetKind::Worksheet).unwrap();
    book
}

#[test]
fn test_ids_are_derived_from_the_package() {
    let mut book = ChartWorkbook::new(Package::new());
    book.add_worksheet("Sheet1").unwrap();
    let placed: Vec<_> = ["A1", "A20", "A40", "A60"]
        .iter()
        .map(|cell| book.add_chart("Sheet1", cell, &column_chart(), &[]).unwrap())
        .collect();

    let frames: Vec<u32> = placed.iter().map(|p| p.frame_id).collect();
    let rels: Vec<u32> = placed.iter().map(|p| p.rel_id).collect();
    let charts: Vec<&str> = placed.iter().map(|p| p.part.as_str()).collect();
    assert_eq!(frames, vec![2, 3, 4, 5]);
    assert_eq!(rels, vec![1, 2, 3, 4]);
    assert_eq!(
        charts,
        vec![
            "xl/charts/chart1.xml",
            "xl/charts/chart2.xml",
            "xl/charts/chart3.xml",
            "xl/charts/chart4.xml"
        ]
    );
    assert!(placed.iter().all(|p| p.drawing_part == DRAWING));
}

#[test]
fn test_decode_encode_keeps_anchors() {
    let parts = saved_package();
    let decoded = parse_drawing(DRAWING, parts.part(DRAWING).unwrap()).unwrap();
    assert_eq!(decoded.two_cell_anchors.len(), 3);

    let mut store = DrawingStore::new();
    let document = store.get_or_create(DRAWING, &parts).unwrap();
    assert_eq!(document.anchor_count(), 3);
    assert!(document.two_cell_anchors.iter().all(|anchor| anchor.is_decoded()));

    let bytes = DrawingStore::serialize(document).unwrap();
    let again = parse_drawing(DRAWING, &bytes).unwrap();
    assert_eq!(again.two_cell_anchors, decoded.two_cell_anchors);
}

#[test]
fn test_append_to_saved_drawing() {
    let mut book = reopen(saved_package());
    let placed = book.add_chart("Sheet1", "P1", &column_chart(), &[]).unwrap();

    assert_eq!(placed.drawing_part, DRAWING);
    assert_eq!(placed.part, "xl/charts/chart3.xml");
    assert_eq!(placed.frame_id, 5);
    assert_eq!(placed.rel_id, 4);

    book.save_drawings().unwrap();
    let drawing = text(book.parts(), DRAWING);
    assert_eq!(drawing.matches("<xdr:twoCellAnchor").count(), 4);
    assert!(drawing.contains(r#"name="Chart 5""#));
    // The sheet part is not ours to rewrite, and already relates the drawing.
    assert_eq!(
        text(book.parts(), "xl/worksheets/_rels/sheet1.xml.rels")
            .matches("drawing1.xml")
            .count(),
        1
    );
}

#[test]
fn test_delete_by_cell_and_kind_on_saved_drawing() {
    let mut book = reopen(saved_package());
    assert_eq!(book.delete_chart("Sheet1", "B2").unwrap(), 0);
    assert_eq!(book.delete_chart("Sheet1", "A1").unwrap(), 1);
    assert_eq!(book.delete_chart("Sheet1", "A1").unwrap(), 0);
    assert_eq!(book.delete_picture("Sheet1", "A1").unwrap(), 1);
    book.save_drawings().unwrap();

    let drawing = text(book.parts(), DRAWING);
    assert_eq!(drawing.matches("<xdr:twoCellAnchor").count(), 1);
    assert!(drawing.contains("<xdr:col>7</xdr:col>"));
    assert!(!drawing.contains("<xdr:pic>"));
}

#[test]
fn test_chart_sheet_uses_absolute_anchor() {
    let mut book = ChartWorkbook::new(Package::new());
    let format = AnchorFormat {
        positioning: Some(EditAs::Absolute),
        locked: true,
        ..Default::default()
    };
    let placed = book
        .add_chart_sheet("Chart1", &column_chart().with_format(format), &[])
        .unwrap();
    book.save_drawings().unwrap();

    let drawing = text(book.parts(), &placed.drawing_part);
    assert!(drawing.contains(concat!(
        r#"<xdr:absoluteAnchor><xdr:pos x="0" y="0"/><xdr:ext cx="0" cy="0"/>"#,
        r#"<xdr:graphicFrame macro="">"#
    )));
    assert!(drawing.contains(r#"<xdr:clientData fLocksWithSheet="1" fPrintsWithSheet="1"/>"#));
    assert!(!drawing.contains("twoCellAnchor"));
    assert!(text(book.parts(), "xl/chartsheets/sheet1.xml").contains(r#"<drawing r:id="rId1"/>"#));
}

#[test]
fn test_corrupt_drawing_is_reported() {
    let mut parts = saved_package();
    parts.set_part(DRAWING, b"<xdr:wsDr><xdr:twoCellAnchor></xdr:wsDr>".to_vec());
    let mut book = reopen(parts);

    let err = book.add_chart("Sheet1", "P1", &column_chart(), &[]).unwrap_err();
    assert!(matches!(err, OoxmlError::CorruptPart { ref part, .. } if part == DRAWING));
    assert!(!book.parts().has_part("xl/charts/chart3.xml"));
    assert!(book.drawings().is_empty());
}

#[test]
fn test_blank_drawing_part_is_treated_as_empty() {
    let mut parts = saved_package();
    parts.set_part(DRAWING, b"   ".to_vec());
    let mut book = reopen(parts);
    let placed = book.add_chart("Sheet1", "C3", &column_chart(), &[]).unwrap();
    assert_eq!(placed.frame_id, 2);
}
