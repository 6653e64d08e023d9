use xlchart::ooxml::charts::{ChartKind, ChartSpace, ChartSpec, SeriesSpec};
use xlchart::ooxml::opc::{Package, PartStore};
use xlchart::ooxml::xlsx::ChartWorkbook;
use xlchart::ooxml::OoxmlError;

fn series(row: u32) -> SeriesSpec {
    SeriesSpec::new(
        format!("Sheet1!$A${}", row),
        "Sheet1!$B$1:$D$1",
        format!("Sheet1!$B${0}:$D${0}", row),
    )
}

fn chart_text(book: &ChartWorkbook<Package>, part: &str) -> String {
    String::from_utf8(book.parts().part(part).expect("chart part").to_vec()).expect("utf-8")
}

#[test]
fn test_bar_line_combo_end_to_end() {
    let mut book = ChartWorkbook::new(Package::new());
    book.add_worksheet("Sheet1").unwrap();

    let bars = ChartSpec::new(ChartKind::Col)
        .with_title("Fruit")
        .with_series(series(2))
        .with_series(series(3));
    let line = ChartSpec::new(ChartKind::Line).with_series(series(4));
    let placed = book.add_chart("Sheet1", "E1", &bars, &[line]).unwrap();

    let xml = chart_text(&book, &placed.part);
    let bar_at = xml.find("<c:barChart>").unwrap();
    let line_at = xml.find("<c:lineChart>").unwrap();
    assert!(bar_at < line_at);

    let line_group = &xml[line_at..xml.find("</c:lineChart>").unwrap()];
    assert!(line_group.contains(r#"<c:idx val="2"/><c:order val="2"/>"#));
    assert!(line_group.contains(r#"<c:axId val="754001152"/><c:axId val="753999904"/>"#));
    assert_eq!(xml.matches("<c:catAx>").count(), 1);
    assert_eq!(xml.matches("<c:valAx>").count(), 1);
    assert!(xml.contains("<a:t>Fruit</a:t>"));
    assert_eq!(
        book.parts().content_type(&placed.part).unwrap().as_deref(),
        Some("application/vnd.openxmlformats-officedocument.drawingml.chart+xml")
    );
}

#[test]
fn test_scatter_series_plot_xy_pairs() {
    let spec = ChartSpec::new(ChartKind::Scatter)
        .with_series(SeriesSpec::xy("Sheet1!$A$2", "Sheet1!$B$2:$B$9", "Sheet1!$C$2:$C$9"));
    let xml = String::from_utf8(ChartSpace::compile(&spec, &[]).unwrap().to_xml().unwrap()).unwrap();

    assert!(xml.contains("<c:scatterChart><c:scatterStyle val=\"smoothMarker\"/>"));
    assert!(xml.contains("<c:xVal><c:numRef><c:f>Sheet1!$B$2:$B$9</c:f>"));
    assert!(xml.contains("<c:yVal><c:numRef><c:f>Sheet1!$C$2:$C$9</c:f>"));
    assert!(!xml.contains("<c:cat>"));
    assert!(!xml.contains("<c:val>"));
}

#[test]
fn test_json_configuration() {
    let spec = ChartSpec::from_json(
        r#"{
            "type": "doughnut",
            "series": [{"name": "Sheet1!$A$2", "categories": "Sheet1!$B$1:$D$1", "values": "Sheet1!$B$2:$D$2"}],
            "legend": {"position": "none"},
            "y_axis": {"minimum": 0}
        }"#,
    )
    .unwrap();
    assert_eq!(spec.y_axis.minimum, Some(0.0));

    let xml = String::from_utf8(ChartSpace::compile(&spec, &[]).unwrap().to_xml().unwrap()).unwrap();
    assert!(xml.contains(r#"<c:holeSize val="75"/>"#));
    assert!(!xml.contains("<c:legend>"));
    assert!(!xml.contains("<c:catAx>"));
}

#[test]
fn test_rejected_configurations() {
    let err = ChartSpec::from_json(r#"{"type": "sunburst"}"#).unwrap_err();
    assert!(matches!(err, OoxmlError::UnsupportedChartKind(ref kind) if kind == "sunburst"));

    let mut book = ChartWorkbook::new(Package::new());
    book.add_worksheet("Sheet1").unwrap();
    let bars = ChartSpec::new(ChartKind::Col).with_series(series(2));
    let pie = ChartSpec::new(ChartKind::Pie).with_series(series(3));
    let err = book.add_chart("Sheet1", "A1", &bars, &[pie]).unwrap_err();
    assert!(matches!(err, OoxmlError::InvalidComboChart(_)));

    let other_bars = ChartSpec::new(ChartKind::BarStacked).with_series(series(3));
    let err = book.add_chart("Sheet1", "A1", &bars, &[other_bars]).unwrap_err();
    assert!(matches!(err, OoxmlError::ComboCollision { .. }));

    assert!(!book.parts().has_part("xl/charts/chart1.xml"));
    assert!(book.drawings().is_empty());
}
